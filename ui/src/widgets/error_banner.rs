use egui::{CornerRadius, Frame, Margin, RichText, Stroke, Ui};
use roster_business::ErrorInfo;

use crate::utils::colors::{COLOR_ERROR_BG, COLOR_RED};

pub const RETRY_LABEL: &str = "Retry";
pub const DISMISS_LABEL: &str = "Dismiss";

/// What the user did with the banner this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerAction {
    Retry,
    Dismiss,
}

/// Red banner for a failed list load.
pub fn error_banner(ui: &mut Ui, error: &ErrorInfo) -> Option<BannerAction> {
    Frame::NONE
        .fill(COLOR_ERROR_BG)
        .stroke(Stroke::new(1.0, COLOR_RED))
        .corner_radius(CornerRadius::same(4))
        .inner_margin(Margin::symmetric(12, 8))
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label(RichText::new(error.user_message()).color(COLOR_RED))
                    .on_hover_text(error.message.as_str());
                if ui.button(RETRY_LABEL).clicked() {
                    return Some(BannerAction::Retry);
                }
                ui.button(DISMISS_LABEL)
                    .clicked()
                    .then_some(BannerAction::Dismiss)
            })
            .inner
        })
        .inner
}
