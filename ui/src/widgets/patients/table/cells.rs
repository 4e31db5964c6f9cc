//! Cell rendering functions for the patient table.

use egui::{Button, Label, RichText, Ui};
use roster_business::{NotesStatus, Patient, format_encounter_date};

use crate::utils::colors::COLOR_RED;
use crate::widgets::{missing_tag, status_tag};

/// Label of the per-row delete trigger.
pub const DELETE_BUTTON_LABEL: &str = "Delete";

#[inline]
pub fn render_name_cell(ui: &mut Ui, patient: &Patient) {
    ui.add(Label::new(RichText::new(&patient.name).strong()).wrap());
}

#[inline]
pub fn render_date_cell(ui: &mut Ui, patient: &Patient) {
    ui.label(format_encounter_date(&patient.date));
}

#[inline]
pub fn render_status_cell(ui: &mut Ui, patient: &Patient) {
    status_tag(ui, patient.status.as_str(), patient.status.tag_color());
}

#[inline]
pub fn render_notes_cell(ui: &mut Ui, status: Option<&NotesStatus>) {
    match status {
        Some(status) => {
            status_tag(ui, status.as_str(), status.tag_color());
        }
        None => {
            missing_tag(ui);
        }
    }
}

#[inline]
pub fn render_text_cell(ui: &mut Ui, text: &str) {
    ui.add(Label::new(text).wrap());
}

/// Renders the delete trigger. While this row's delete is in flight a
/// spinner replaces the button.
///
/// Returns `true` if the button was clicked.
pub fn render_actions_cell(ui: &mut Ui, is_deleting_this: bool, delete_enabled: bool) -> bool {
    if is_deleting_this {
        ui.horizontal(|ui| {
            ui.spinner();
            ui.weak("Deleting...");
        });
        return false;
    }

    ui.add_enabled(
        delete_enabled,
        Button::new(RichText::new(DELETE_BUTTON_LABEL).color(COLOR_RED)),
    )
    .on_hover_text("Delete patient")
    .clicked()
}
