//! Small runtime pieces shared by the roster crates.
//!
//! - [`TaskSlot`] hands out generation-stamped [`TaskHandle`]s so that only the
//!   most recently issued request of a kind is allowed to publish its result.
//! - [`Updater`] / [`UpdateReceiver`] carry results from background callbacks
//!   back to the UI thread and wake the UI when something arrives.

mod task;
mod updater;

pub use task::{TaskHandle, TaskId, TaskSlot};
pub use updater::{UpdateReceiver, Updater, Waker, channel};
