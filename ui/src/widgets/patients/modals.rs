//! Delete confirmation dialog.

use egui::{Color32, RichText, Ui, Window};

use super::table::DeleteRequest;
use crate::utils::colors::COLOR_RED;

/// Title of the confirmation window.
pub const DELETE_DIALOG_TITLE: &str = "Delete Patient";

/// Label of the confirm button.
pub const CONFIRM_DELETE_LABEL: &str = "Yes, delete";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmOutcome {
    Confirmed,
    Cancelled,
}

/// Shows the confirmation window for `target`.
///
/// Returns `None` while the user has not decided. Closing the window counts
/// as cancelling.
pub fn show_delete_patient_modal(ui: &mut Ui, target: &DeleteRequest) -> Option<ConfirmOutcome> {
    let mut open = true;
    let mut outcome = None;

    Window::new(DELETE_DIALOG_TITLE)
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ui.ctx(), |ui| {
            ui.colored_label(Color32::from_rgb(255, 165, 0), "⚠ Warning");
            ui.add_space(4.0);
            ui.label(format!("Are you sure you want to delete {}?", target.name));
            ui.label("This action cannot be undone.");

            ui.add_space(16.0);

            ui.horizontal(|ui| {
                if ui
                    .button(RichText::new(CONFIRM_DELETE_LABEL).color(COLOR_RED))
                    .clicked()
                {
                    outcome = Some(ConfirmOutcome::Confirmed);
                }

                if ui.button("Cancel").clicked() {
                    outcome = Some(ConfirmOutcome::Cancelled);
                }
            });
        });

    if !open {
        outcome = Some(ConfirmOutcome::Cancelled);
    }
    outcome
}
