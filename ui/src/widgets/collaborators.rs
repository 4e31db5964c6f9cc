//! Collaborator badges for the table.

use egui::{Color32, CornerRadius, Frame, Margin, RichText, Ui};
use roster_business::{Badge, DEFAULT_MAX_BADGES, collaborator_badges};

const BADGE_FILL: Color32 = Color32::from_rgb(230, 244, 255);
const BADGE_TEXT: Color32 = Color32::from_rgb(9, 88, 217);
const OVERFLOW_FILL: Color32 = Color32::from_rgb(240, 240, 240);

/// Renders up to [`DEFAULT_MAX_BADGES`] badges plus a `+N` badge.
///
/// Each badge shows the full name(s) on hover.
pub fn collaborators_cell(ui: &mut Ui, collaborators: &str) {
    let badges = collaborator_badges(collaborators, DEFAULT_MAX_BADGES);
    if badges.is_empty() {
        return;
    }

    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing.x = 4.0;
        for badge in &badges.visible {
            badge_ui(ui, badge, BADGE_FILL, BADGE_TEXT);
        }
        if let Some(overflow) = &badges.overflow {
            badge_ui(ui, overflow, OVERFLOW_FILL, ui.visuals().text_color());
        }
    });
}

fn badge_ui(ui: &mut Ui, badge: &Badge, fill: Color32, text: Color32) {
    Frame::NONE
        .fill(fill)
        .corner_radius(CornerRadius::same(10))
        .inner_margin(Margin::symmetric(6, 2))
        .show(ui, |ui| {
            ui.label(RichText::new(&badge.label).small().strong().color(text));
        })
        .response
        .on_hover_text(badge.tooltip.as_str());
}
