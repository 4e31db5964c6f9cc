//! Row rendering for the patient table.

use egui::{Align, Layout, Stroke, Ui};
use egui_extras::StripBuilder;
use roster_business::{Patient, PatientId};

use super::cells::{
    render_actions_cell, render_date_cell, render_name_cell, render_notes_cell,
    render_status_cell, render_text_cell,
};
use super::columns::column_sizes;
use crate::utils::colors::TABLE_BORDER_COLOR;
use crate::widgets::collaborators_cell;

/// Top padding inside every cell.
const CELL_PADDING: f32 = 6.0;

/// Result of rendering a patient row.
#[derive(Debug, Default)]
pub struct PatientRowResult {
    /// Height of the tallest cell's content.
    pub content_height: f32,
    pub delete_clicked: bool,
}

/// Renders one patient across all columns inside `ui`'s max rect.
pub fn render_patient_row(
    ui: &mut Ui,
    patient: &Patient,
    pending_delete: Option<PatientId>,
) -> PatientRowResult {
    let mut result = PatientRowResult::default();
    let mut measure = |ui: &Ui| {
        result.content_height = result.content_height.max(ui.min_rect().height());
    };

    let mut delete_clicked = false;
    let row_rect = ui.max_rect();

    column_sizes()
        .fold(StripBuilder::new(ui), StripBuilder::size)
        .cell_layout(Layout::top_down(Align::Min))
        .horizontal(|mut strip| {
            strip.cell(|ui| {
                ui.add_space(CELL_PADDING);
                render_name_cell(ui, patient);
                measure(ui);
            });
            strip.cell(|ui| {
                ui.add_space(CELL_PADDING);
                render_date_cell(ui, patient);
                measure(ui);
            });
            strip.cell(|ui| {
                ui.add_space(CELL_PADDING);
                render_status_cell(ui, patient);
                measure(ui);
            });
            strip.cell(|ui| {
                ui.add_space(CELL_PADDING);
                render_notes_cell(ui, Some(&patient.notes_status));
                measure(ui);
            });
            strip.cell(|ui| {
                ui.add_space(CELL_PADDING);
                render_notes_cell(ui, patient.letters_status.as_ref());
                measure(ui);
            });
            strip.cell(|ui| {
                ui.add_space(CELL_PADDING);
                render_text_cell(ui, &patient.room);
                measure(ui);
            });
            strip.cell(|ui| {
                ui.add_space(CELL_PADDING);
                collaborators_cell(ui, &patient.collaborators);
                measure(ui);
            });
            strip.cell(|ui| {
                ui.add_space(CELL_PADDING);
                render_text_cell(ui, &patient.location);
                measure(ui);
            });
            strip.cell(|ui| {
                ui.add_space(CELL_PADDING);
                delete_clicked = render_actions_cell(
                    ui,
                    pending_delete == Some(patient.id),
                    pending_delete.is_none(),
                );
                measure(ui);
            });
        });

    draw_row_bottom_border(ui, row_rect);
    result.delete_clicked = delete_clicked;
    result
}

fn draw_row_bottom_border(ui: &Ui, rect: egui::Rect) {
    ui.painter().hline(
        rect.left()..=rect.right(),
        rect.bottom(),
        Stroke::new(1.0, TABLE_BORDER_COLOR),
    );
}
