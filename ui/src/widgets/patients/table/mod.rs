//! Virtualized patient table.
//!
//! - `columns`: column titles and flex weights
//! - `header`: fixed header row
//! - `row`: one patient across all columns, reporting its content height
//! - `cells`: per-column cell rendering

mod cells;
pub mod columns;
pub mod header;
pub mod row;

use egui::{Frame, Margin, Rect, ScrollArea, Stroke, Ui, UiBuilder, vec2};
use log::debug;
use roster_business::{Patient, PatientId};

pub use cells::DELETE_BUTTON_LABEL;

use self::columns::HEADER_HEIGHT;
use self::header::render_table_header;
use self::row::render_patient_row;
use super::virtual_rows::VirtualRows;
use crate::utils::colors::TABLE_BORDER_COLOR;

/// Smallest table container height.
pub const MIN_TABLE_HEIGHT: f32 = 400.0;

/// Vertical space taken by everything around the table.
pub const PAGE_CHROME_HEIGHT: f32 = 250.0;

/// Table container height for a viewport of `viewport_height`.
pub fn table_height(viewport_height: f32) -> f32 {
    (viewport_height - PAGE_CHROME_HEIGHT).max(MIN_TABLE_HEIGHT)
}

/// What the table needs from the controller for one frame.
#[derive(Debug, Clone, Copy)]
pub struct TableView<'a> {
    pub records: &'a [Patient],
    pub loading: bool,
    pub pending_delete: Option<PatientId>,
}

/// The user asked to delete this patient (confirmation still pending).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteRequest {
    pub id: PatientId,
    pub name: String,
}

/// Renders the header and the virtualized body.
///
/// Only rows intersecting the scroll viewport (plus overscan) are laid out.
/// Returns the row whose delete trigger was clicked this frame.
pub fn patients_table(
    ui: &mut Ui,
    rows: &mut VirtualRows,
    view: TableView<'_>,
) -> Option<DeleteRequest> {
    let now = ui.input(|i| i.time);
    rows.begin_frame(view.records.len(), now);
    if let Some(at) = rows.heights.measure_at() {
        ui.ctx()
            .request_repaint_after_secs((at - now).max(0.0) as f32);
    }

    let container_height = table_height(ui.ctx().content_rect().height());
    let body_height = container_height - HEADER_HEIGHT;
    let mut requested = None;

    Frame::NONE
        .stroke(Stroke::new(1.0, TABLE_BORDER_COLOR))
        .inner_margin(Margin::ZERO)
        .show(ui, |ui| {
            render_table_header(ui);

            ScrollArea::vertical()
                .id_salt("patient_rows")
                .auto_shrink([false, false])
                .min_scrolled_height(body_height)
                .max_height(body_height)
                .show_viewport(ui, |ui, viewport| {
                    if view.records.is_empty() {
                        render_empty_body(ui, view.loading);
                        return;
                    }
                    requested = render_visible_rows(ui, rows, view, viewport);
                });
        });

    if rows.end_frame() {
        debug!("Row heights remeasured, relayout next frame");
        ui.ctx().request_repaint();
    }

    requested
}

fn render_empty_body(ui: &mut Ui, loading: bool) {
    ui.add_space(24.0);
    ui.vertical_centered(|ui| {
        if loading {
            ui.spinner();
            ui.label("Loading patients...");
        } else {
            ui.weak("No patients found");
        }
    });
}

fn render_visible_rows(
    ui: &mut Ui,
    rows: &mut VirtualRows,
    view: TableView<'_>,
    viewport: Rect,
) -> Option<DeleteRequest> {
    let len = view.records.len();
    let total_height = rows.offsets.total_height(len, &rows.heights);
    ui.set_height(total_height);

    let origin = ui.max_rect().min;
    let width = ui.max_rect().width();
    let visible = rows
        .offsets
        .visible_range(len, viewport.min.y, viewport.max.y, &rows.heights);

    let mut requested = None;
    for index in visible {
        let patient = &view.records[index];
        let top = rows.offsets.offset_of(index, &rows.heights);
        let rect = Rect::from_min_size(
            origin + vec2(0.0, top),
            vec2(width, rows.heights.height(index)),
        );

        let mut row_ui = ui.new_child(
            UiBuilder::new()
                .max_rect(rect)
                .id_salt(("patient_row", patient.id)),
        );
        let result = render_patient_row(&mut row_ui, patient, view.pending_delete);
        rows.heights.record(index, result.content_height);

        if result.delete_clicked {
            requested = Some(DeleteRequest {
                id: patient.id,
                name: patient.name.clone(),
            });
        }
    }
    requested
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_height_has_a_floor() {
        assert_eq!(table_height(1000.0), 750.0);
        assert_eq!(table_height(500.0), MIN_TABLE_HEIGHT);
        assert_eq!(table_height(0.0), MIN_TABLE_HEIGHT);
    }
}
