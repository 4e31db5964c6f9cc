//! The patient list page: filter, error banner, table, load more, delete flow.

use egui::{Align, Button, Layout, Response, Ui};
use roster_business::ErrorKind;

use crate::state::State;
use crate::widgets::{
    BannerAction, ConfirmOutcome, TableView, error_banner, patients_table,
    show_delete_patient_modal, status_filter,
};

pub const LOAD_MORE_LABEL: &str = "Load More";

/// Renders the whole patient list page and applies the user's actions to
/// the controller.
pub fn patients_page(state: &mut State, ui: &mut Ui) -> Response {
    let now = ui.input(|i| i.time);
    state.sync(now);

    let response = ui
        .vertical(|ui| {
            ui.horizontal(|ui| {
                ui.heading("Patients");
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    if let Some(status) = status_filter(ui, state.controller.status_filter()) {
                        state.controller.filter_by_status(status);
                    }
                });
            });
            ui.add_space(8.0);

            let list_error = state
                .controller
                .error()
                .filter(|error| error.kind == ErrorKind::List)
                .cloned();
            if let Some(error) = list_error {
                match error_banner(ui, &error) {
                    Some(BannerAction::Retry) => state.controller.refetch(),
                    Some(BannerAction::Dismiss) => state.controller.clear_error(),
                    None => {}
                }
                ui.add_space(8.0);
            }

            let view = TableView {
                records: state.controller.records(),
                loading: state.controller.is_loading(),
                pending_delete: state.controller.pending_delete(),
            };
            if let Some(request) = patients_table(ui, &mut state.rows, view) {
                state.confirm_delete = Some(request);
            }

            if state.controller.has_next_page() {
                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    let loading = state.controller.is_loading();
                    if ui.add_enabled(!loading, Button::new(LOAD_MORE_LABEL)).clicked() {
                        state.controller.fetch_next_page();
                    }
                    if loading {
                        ui.spinner();
                    }
                });
            }
        })
        .response;

    if let Some(target) = state.confirm_delete.clone() {
        match show_delete_patient_modal(ui, &target) {
            Some(ConfirmOutcome::Confirmed) => {
                state.confirm_delete = None;
                state.controller.delete_patient(target.id);
            }
            Some(ConfirmOutcome::Cancelled) => state.confirm_delete = None,
            None => {}
        }
    }

    state.toasts.show(ui.ctx());

    response
}
