//! Pagination / filter controller for the patient list.
//!
//! The controller is the only owner of the loaded records and the
//! loading/deleting/error flags. Widgets read through getters and change
//! things through the mutators below; nothing else writes the fields.
//!
//! Requests complete on the transport's thread. Their results travel back
//! through an updater channel and are applied by [`PatientListController::poll`],
//! which the UI calls once per frame.
//!
//! Every list request takes a generation from a latest-only [`TaskSlot`].
//! A newer request (filter change, refetch, load more) supersedes the older
//! one, and the older response is dropped when it arrives. "Last call issued
//! wins", not "last response to arrive wins".

use std::sync::Arc;

use log::{debug, info, warn};
use roster_states::{TaskHandle, TaskSlot, UpdateReceiver, Updater, Waker, channel};

use crate::gateway::{GatewayError, GatewayResult, PatientGateway};
use crate::patient::{
    Patient, PatientId, PatientListParams, PatientListResponse, PatientStatus,
};

/// Which operation produced the current error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    List,
    Delete,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorInfo {
    pub kind: ErrorKind,
    pub message: String,
}

impl ErrorInfo {
    fn new(kind: ErrorKind, err: &GatewayError) -> Self {
        Self {
            kind,
            message: err.to_string(),
        }
    }

    /// Text shown to the user (error banner or notification).
    pub fn user_message(&self) -> &'static str {
        match self.kind {
            ErrorKind::List => "Failed to load patient data. Please try again later.",
            ErrorKind::Delete => "Failed to delete patient. Please try again.",
        }
    }
}

/// What [`PatientListController::poll`] applied, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControllerEvent {
    PageLoaded { appended: bool, count: usize },
    LoadFailed(ErrorInfo),
    Deleted(PatientId),
    DeleteFailed { id: PatientId, error: ErrorInfo },
}

#[derive(Debug)]
enum Completion {
    List {
        handle: TaskHandle,
        params: PatientListParams,
        result: GatewayResult<PatientListResponse>,
    },
    Delete {
        handle: TaskHandle,
        id: PatientId,
        result: GatewayResult<()>,
    },
}

#[derive(Debug)]
pub struct PatientListController {
    gateway: Arc<dyn PatientGateway>,

    records: Vec<Patient>,
    error: Option<ErrorInfo>,
    has_next_page: bool,
    next_cursor: Option<String>,
    active_params: PatientListParams,
    pending_delete: Option<PatientId>,

    list_task: TaskSlot,
    delete_task: TaskSlot,
    updater: Updater<Completion>,
    completions: UpdateReceiver<Completion>,
}

impl PatientListController {
    /// Creates an idle controller. Nothing is fetched until [`Self::refetch`].
    pub fn new(gateway: Arc<dyn PatientGateway>, page_size: usize, waker: Waker) -> Self {
        let (updater, completions) = channel(waker);
        Self {
            gateway,
            records: Vec::new(),
            error: None,
            has_next_page: false,
            next_cursor: None,
            active_params: PatientListParams::with_limit(page_size),
            pending_delete: None,
            list_task: TaskSlot::new("list patients"),
            delete_task: TaskSlot::new("delete patient"),
            updater,
            completions,
        }
    }

    pub fn records(&self) -> &[Patient] {
        &self.records
    }

    /// `true` while the latest list request is in flight.
    pub fn is_loading(&self) -> bool {
        self.list_task.is_busy()
    }

    pub fn is_deleting(&self) -> bool {
        self.delete_task.is_busy()
    }

    /// Identifier of the record whose delete is in flight.
    pub fn pending_delete(&self) -> Option<PatientId> {
        self.pending_delete
    }

    pub fn error(&self) -> Option<&ErrorInfo> {
        self.error.as_ref()
    }

    pub fn has_next_page(&self) -> bool {
        self.has_next_page
    }

    pub fn next_cursor(&self) -> Option<&str> {
        self.next_cursor.as_deref()
    }

    pub fn status_filter(&self) -> Option<PatientStatus> {
        self.active_params.status
    }

    /// Issues a list request. Without a cursor the response replaces the
    /// records; with one it is appended.
    pub fn load(&mut self, params: PatientListParams) {
        let handle = self.list_task.spawn();
        info!(
            "Loading patients (generation {}): {params:?}",
            handle.id().generation()
        );

        let updater = self.updater.clone();
        let request = params.clone();
        self.gateway.list(
            &request,
            Box::new(move |result| {
                if superseded(&handle) {
                    return;
                }
                updater.set(Completion::List {
                    handle,
                    params,
                    result,
                });
            }),
        );
    }

    /// Loads the page after the last one. No-op without a next page or cursor.
    pub fn fetch_next_page(&mut self) -> bool {
        let Some(cursor) = self.next_cursor.clone().filter(|_| self.has_next_page) else {
            return false;
        };

        self.load(PatientListParams {
            cursor: Some(cursor),
            ..self.active_params.clone()
        });
        true
    }

    /// Reloads the first page for the current filter.
    pub fn refetch(&mut self) {
        self.active_params.cursor = None;
        self.load(self.active_params.clone());
    }

    /// Switches the status filter and reloads from the first page.
    ///
    /// The old cursor belongs to the old filter, so pagination is reset right
    /// away; the records stay visible until the new first page replaces them.
    pub fn filter_by_status(&mut self, status: Option<PatientStatus>) {
        info!(
            "Filtering patients by status: {}",
            status.as_ref().map_or("all", PatientStatus::as_str)
        );
        self.active_params.status = status;
        self.has_next_page = false;
        self.next_cursor = None;
        self.refetch();
    }

    /// Deletes one record. Returns `false` (and does nothing) while another
    /// delete is still pending.
    pub fn delete_patient(&mut self, id: PatientId) -> bool {
        if let Some(pending) = self.pending_delete {
            warn!("Refusing to delete patient {id}: delete of {pending} still pending");
            return false;
        }

        let handle = self.delete_task.spawn();
        self.pending_delete = Some(id);
        info!("Deleting patient {id}");

        let updater = self.updater.clone();
        self.gateway.delete(
            id,
            Box::new(move |result| {
                if superseded(&handle) {
                    return;
                }
                updater.set(Completion::Delete { handle, id, result });
            }),
        );
        true
    }

    /// Dismisses the current error without retrying.
    pub fn clear_error(&mut self) {
        self.error = None;
    }

    /// Applies every completed request. Call once per frame.
    pub fn poll(&mut self) -> Vec<ControllerEvent> {
        self.completions
            .drain()
            .into_iter()
            .filter_map(|completion| self.apply(completion))
            .collect()
    }

    fn apply(&mut self, completion: Completion) -> Option<ControllerEvent> {
        match completion {
            Completion::List {
                handle,
                params,
                result,
            } => {
                if !self.list_task.finish(&handle) {
                    warn!(
                        "Discarding stale patient list response (generation {})",
                        handle.id().generation()
                    );
                    return None;
                }
                Some(self.apply_list(&params, result))
            }
            Completion::Delete { handle, id, result } => {
                if !self.delete_task.finish(&handle) {
                    warn!("Discarding stale delete response for patient {id}");
                    return None;
                }
                self.pending_delete = None;
                Some(self.apply_delete(id, result))
            }
        }
    }

    fn has_list_error(&self) -> bool {
        self.error
            .as_ref()
            .is_some_and(|error| error.kind == ErrorKind::List)
    }

    fn apply_list(
        &mut self,
        params: &PatientListParams,
        result: GatewayResult<PatientListResponse>,
    ) -> ControllerEvent {
        match result {
            Ok(response) => {
                let appended = params.is_continuation();
                let count = response.data.len();
                if appended {
                    self.records.extend(response.data);
                } else {
                    self.records = response.data;
                }
                self.has_next_page = response.pagination.has_next_page;
                self.next_cursor = response.pagination.next_cursor;
                self.error = None;
                info!(
                    "Loaded {count} patients ({} total, more: {})",
                    self.records.len(),
                    self.has_next_page
                );
                ControllerEvent::PageLoaded { appended, count }
            }
            Err(err) => {
                let error = ErrorInfo::new(ErrorKind::List, &err);
                self.error = Some(error.clone());
                ControllerEvent::LoadFailed(error)
            }
        }
    }

    fn apply_delete(&mut self, id: PatientId, result: GatewayResult<()>) -> ControllerEvent {
        match result {
            Ok(()) => {
                self.records.retain(|patient| patient.id != id);
                info!("Deleted patient {id}");
                ControllerEvent::Deleted(id)
            }
            Err(err) => {
                let error = ErrorInfo::new(ErrorKind::Delete, &err);
                // A standing list error outranks it: the list is still stale.
                if !self.has_list_error() {
                    self.error = Some(error.clone());
                }
                ControllerEvent::DeleteFailed { id, error }
            }
        }
    }
}

/// `true` once a newer request of the same kind has been issued. The result
/// is dropped in the callback instead of being sent to the UI thread.
fn superseded(handle: &TaskHandle) -> bool {
    if handle.is_cancelled() {
        debug!(
            "{}: dropping superseded result (generation {})",
            handle.id().slot(),
            handle.id().generation()
        );
        return true;
    }
    false
}
