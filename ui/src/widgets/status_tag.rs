use egui::{CornerRadius, Frame, Margin, Response, RichText, Stroke, Ui};
use roster_business::TagColor;

use crate::utils::colors::tag_palette;

/// A small rounded tag with the palette of `color`.
pub fn status_tag(ui: &mut Ui, text: &str, color: TagColor) -> Response {
    let palette = tag_palette(color);

    Frame::NONE
        .fill(palette.fill)
        .stroke(Stroke::new(1.0, palette.stroke))
        .corner_radius(CornerRadius::same(4))
        .inner_margin(Margin::symmetric(6, 2))
        .show(ui, |ui| {
            ui.label(RichText::new(text).small().color(palette.text));
        })
        .response
}

/// Muted placeholder for a missing status.
pub fn missing_tag(ui: &mut Ui) -> Response {
    ui.weak("-")
}
