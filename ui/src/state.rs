use std::sync::Arc;

use log::info;
use roster_business::{
    BusinessConfig, ControllerEvent, DEFAULT_PAGE_SIZE, HttpGateway, PatientGateway,
    PatientListController,
};
use roster_states::Waker;

use crate::widgets::{DeleteRequest, Toasts, VirtualRows};

/// Notification shown after a confirmed delete succeeds.
pub const DELETE_SUCCESS_MESSAGE: &str = "Patient has been deleted successfully";

/// The main application state.
#[derive(Debug)]
pub struct State {
    /// Owns the records and every request flag.
    pub controller: PatientListController,
    /// Row height cache and offsets for the table body.
    pub rows: VirtualRows,
    /// Patient awaiting delete confirmation.
    pub confirm_delete: Option<DeleteRequest>,
    pub toasts: Toasts,
}

impl State {
    pub fn new(gateway: Arc<dyn PatientGateway>, page_size: usize, waker: Waker) -> Self {
        Self {
            controller: PatientListController::new(gateway, page_size, waker),
            rows: VirtualRows::default(),
            confirm_delete: None,
            toasts: Toasts::default(),
        }
    }

    /// State talking to the configured REST API.
    pub fn from_config(config: &BusinessConfig, waker: Waker) -> Self {
        info!(
            "Using patient API at '{}' (page size {})",
            config.api_base_url(),
            config.page_size()
        );
        Self::new(
            Arc::new(HttpGateway::new(config)),
            config.page_size(),
            waker,
        )
    }

    /// State for tests: default page size, no repaint wiring.
    pub fn test(gateway: Arc<dyn PatientGateway>) -> Self {
        Self::new(gateway, DEFAULT_PAGE_SIZE, Waker::noop())
    }

    /// Applies finished requests and raises notifications for deletes.
    pub fn sync(&mut self, now: f64) {
        for event in self.controller.poll() {
            match event {
                ControllerEvent::Deleted(_) => self.toasts.success(DELETE_SUCCESS_MESSAGE, now),
                ControllerEvent::DeleteFailed { error, .. } => {
                    self.toasts.error(error.user_message(), now);
                }
                ControllerEvent::PageLoaded { .. } | ControllerEvent::LoadFailed(_) => {}
            }
        }
    }
}

/// Waker that schedules a repaint of `ctx` when a background result arrives.
pub fn repaint_waker(ctx: &egui::Context) -> Waker {
    let ctx = ctx.clone();
    Waker::new(move || ctx.request_repaint())
}
