//! Fixed header row for the patient table.

use egui::{Align, Frame, Layout, Ui, vec2};
use egui_extras::StripBuilder;

use super::columns::{COLUMNS, HEADER_HEIGHT, column_sizes};
use crate::utils::colors::HEADER_BG_COLOR;

/// Renders the column titles on a light background.
pub fn render_table_header(ui: &mut Ui) {
    Frame::NONE.fill(HEADER_BG_COLOR).show(ui, |ui| {
        ui.allocate_ui(vec2(ui.available_width(), HEADER_HEIGHT), |ui| {
            column_sizes()
                .fold(StripBuilder::new(ui), StripBuilder::size)
                .cell_layout(Layout::left_to_right(Align::Center))
                .horizontal(|mut strip| {
                    for column in &COLUMNS {
                        strip.cell(|ui| {
                            ui.add_space(8.0);
                            ui.strong(column.title);
                        });
                    }
                });
        });
    });
}
