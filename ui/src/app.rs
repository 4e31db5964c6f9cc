use crate::{pages, state::State};

pub struct RosterApp {
    state: State,
}

impl RosterApp {
    /// Called once before the first frame. Starts the initial load.
    pub fn new(mut state: State) -> Self {
        state.controller.refetch();
        Self { state }
    }
}

impl eframe::App for RosterApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            pages::patients_page(&mut self.state, ui);
        });
    }
}
