#![warn(clippy::all, rust_2018_idioms)]
//! egui front end for the patient roster.

pub mod app;
pub mod pages;
pub mod state;
pub mod utils;
pub mod widgets;

pub use app::RosterApp;
