//! Transient notifications in the bottom-right corner.

use egui::{Align2, Area, Context, CornerRadius, Frame, Id, Margin, RichText, Stroke};

use crate::utils::colors::{COLOR_GREEN, COLOR_RED};

/// Seconds a notification stays on screen.
pub const TOAST_DURATION: f64 = 3.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub kind: ToastKind,
    pub text: String,
    expires_at: f64,
}

#[derive(Debug, Default)]
pub struct Toasts {
    items: Vec<Toast>,
}

impl Toasts {
    pub fn push(&mut self, kind: ToastKind, text: impl Into<String>, now: f64) {
        self.items.push(Toast {
            kind,
            text: text.into(),
            expires_at: now + TOAST_DURATION,
        });
    }

    pub fn success(&mut self, text: impl Into<String>, now: f64) {
        self.push(ToastKind::Success, text, now);
    }

    pub fn error(&mut self, text: impl Into<String>, now: f64) {
        self.push(ToastKind::Error, text, now);
    }

    /// Drops expired notifications.
    pub fn retain_active(&mut self, now: f64) {
        self.items.retain(|toast| toast.expires_at > now);
    }

    pub fn active(&self) -> &[Toast] {
        &self.items
    }

    /// Seconds until the next notification expires.
    fn next_expiry(&self, now: f64) -> Option<f64> {
        self.items
            .iter()
            .map(|toast| toast.expires_at - now)
            .reduce(f64::min)
    }

    pub fn show(&mut self, ctx: &Context) {
        let now = ctx.input(|i| i.time);
        self.retain_active(now);
        if self.items.is_empty() {
            return;
        }

        Area::new(Id::new("toasts"))
            .anchor(Align2::RIGHT_BOTTOM, [-16.0, -16.0])
            .interactable(false)
            .show(ctx, |ui| {
                for toast in &self.items {
                    let color = match toast.kind {
                        ToastKind::Success => COLOR_GREEN,
                        ToastKind::Error => COLOR_RED,
                    };
                    Frame::popup(ui.style())
                        .stroke(Stroke::new(1.0, color))
                        .corner_radius(CornerRadius::same(6))
                        .inner_margin(Margin::symmetric(12, 8))
                        .show(ui, |ui| {
                            ui.label(RichText::new(&toast.text).color(color));
                        });
                    ui.add_space(6.0);
                }
            });

        if let Some(remaining) = self.next_expiry(now) {
            ctx.request_repaint_after_secs(remaining.max(0.0) as f32);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toasts_expire_after_duration() {
        let mut toasts = Toasts::default();
        toasts.success("Saved", 10.0);
        toasts.error("Nope", 11.0);

        toasts.retain_active(12.9);
        assert_eq!(toasts.active().len(), 2);

        toasts.retain_active(13.0);
        assert_eq!(toasts.active().len(), 1);
        assert_eq!(toasts.active()[0].kind, ToastKind::Error);

        toasts.retain_active(14.5);
        assert!(toasts.active().is_empty());
    }

    #[test]
    fn next_expiry_is_soonest() {
        let mut toasts = Toasts::default();
        toasts.success("a", 0.0);
        toasts.success("b", 1.0);

        assert_eq!(toasts.next_expiry(0.5), Some(2.5));
    }
}
