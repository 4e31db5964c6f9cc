//! Test utilities for driving the patient list without a server.
//!
//! [`MockGateway`] answers from a queue of canned responses and records every
//! request it receives. In immediate mode the completion runs inside the
//! `list`/`delete` call, like a very fast network. In deferred mode the
//! completions are parked until the test releases them, which lets tests
//! reorder responses.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use roster_business::test_utils::{MockGateway, page};
//!
//! let gateway = Arc::new(MockGateway::new());
//! gateway.push_list(Ok(page(1..=10, Some("c1"))));
//! // hand `gateway.clone()` to the controller...
//! ```

use std::collections::VecDeque;
use std::fmt;
use std::ops::RangeInclusive;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::gateway::{GatewayError, GatewayResult, OnDelete, OnList, PatientGateway};
use crate::patient::{
    NotesStatus, PaginationResult, Patient, PatientId, PatientListParams, PatientListResponse,
    PatientStatus,
};

#[derive(Default)]
struct MockState {
    list_responses: VecDeque<GatewayResult<PatientListResponse>>,
    delete_responses: VecDeque<GatewayResult<()>>,
    list_requests: Vec<PatientListParams>,
    delete_requests: Vec<PatientId>,
    parked_lists: Vec<Option<OnList>>,
    parked_deletes: Vec<Option<OnDelete>>,
}

/// In-memory [`PatientGateway`].
pub struct MockGateway {
    deferred: bool,
    state: Mutex<MockState>,
}

impl fmt::Debug for MockGateway {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.lock();
        f.debug_struct("MockGateway")
            .field("deferred", &self.deferred)
            .field("list_requests", &state.list_requests)
            .field("delete_requests", &state.delete_requests)
            .finish_non_exhaustive()
    }
}

impl Default for MockGateway {
    fn default() -> Self {
        Self::new()
    }
}

impl MockGateway {
    /// Completes every request immediately with the next queued response.
    pub fn new() -> Self {
        Self {
            deferred: false,
            state: Mutex::new(MockState::default()),
        }
    }

    /// Parks completions until [`Self::complete_list`] / [`Self::complete_delete`].
    pub fn deferred() -> Self {
        Self {
            deferred: true,
            ..Self::new()
        }
    }

    fn lock(&self) -> MutexGuard<'_, MockState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn push_list(&self, response: GatewayResult<PatientListResponse>) {
        self.lock().list_responses.push_back(response);
    }

    pub fn push_delete(&self, response: GatewayResult<()>) {
        self.lock().delete_responses.push_back(response);
    }

    /// Every list request received so far, oldest first.
    pub fn list_requests(&self) -> Vec<PatientListParams> {
        self.lock().list_requests.clone()
    }

    /// Every delete request received so far, oldest first.
    pub fn delete_requests(&self) -> Vec<PatientId> {
        self.lock().delete_requests.clone()
    }

    /// Completes the `index`-th list request with the next queued response.
    ///
    /// Returns `false` if that request does not exist or already completed.
    pub fn complete_list(&self, index: usize) -> bool {
        let (callback, response) = {
            let mut state = self.lock();
            let Some(callback) = state.parked_lists.get_mut(index).and_then(Option::take) else {
                return false;
            };
            (callback, next_or_missing(&mut state.list_responses))
        };
        callback(response);
        true
    }

    /// Completes the oldest parked list request.
    pub fn complete_next_list(&self) -> bool {
        let index = self.lock().parked_lists.iter().position(Option::is_some);
        index.is_some_and(|index| self.complete_list(index))
    }

    /// Completes the `index`-th delete request with the next queued response.
    pub fn complete_delete(&self, index: usize) -> bool {
        let (callback, response) = {
            let mut state = self.lock();
            let Some(callback) = state.parked_deletes.get_mut(index).and_then(Option::take) else {
                return false;
            };
            (callback, next_or_missing(&mut state.delete_responses))
        };
        callback(response);
        true
    }

    /// Completes the oldest parked delete request.
    pub fn complete_next_delete(&self) -> bool {
        let index = self.lock().parked_deletes.iter().position(Option::is_some);
        index.is_some_and(|index| self.complete_delete(index))
    }
}

fn next_or_missing<T>(queue: &mut VecDeque<GatewayResult<T>>) -> GatewayResult<T> {
    queue
        .pop_front()
        .unwrap_or_else(|| Err(GatewayError::Transport("mock: no response queued".to_owned())))
}

impl PatientGateway for MockGateway {
    fn list(&self, params: &PatientListParams, on_done: OnList) {
        let response = {
            let mut state = self.lock();
            state.list_requests.push(params.clone());
            if self.deferred {
                state.parked_lists.push(Some(on_done));
                return;
            }
            next_or_missing(&mut state.list_responses)
        };
        on_done(response);
    }

    fn delete(&self, id: PatientId, on_done: OnDelete) {
        let response = {
            let mut state = self.lock();
            state.delete_requests.push(id);
            if self.deferred {
                state.parked_deletes.push(Some(on_done));
                return;
            }
            next_or_missing(&mut state.delete_responses)
        };
        on_done(response);
    }
}

const NAMES: [&str; 6] = [
    "Jane Doe",
    "John Smith",
    "Maria Garcia",
    "Wei Chen",
    "Amara Okafor",
    "Liam O'Brien",
];

/// A realistic patient whose fields vary with `id`.
pub fn sample_patient(id: PatientId) -> Patient {
    let slot = usize::try_from(id).unwrap_or_default();
    let status = PatientStatus::ALL[slot % PatientStatus::ALL.len()];
    let notes = [
        NotesStatus::Completed,
        NotesStatus::Incomplete,
        NotesStatus::HalfCopied,
        NotesStatus::NotStarted,
    ][slot % 4];

    Patient {
        id,
        name: format!("{} #{id}", NAMES[slot % NAMES.len()]),
        status,
        date: format!("2024-03-{:02}", slot % 28 + 1),
        notes_status: notes,
        letters_status: (slot % 2 == 0).then_some(NotesStatus::Pending),
        room: format!("Room {}", slot % 12 + 1),
        location: "North Wing".to_owned(),
        collaborators: "Dr John Smith, Alice Wong".to_owned(),
    }
}

/// A list response with one [`sample_patient`] per id.
pub fn page(ids: RangeInclusive<PatientId>, next_cursor: Option<&str>) -> PatientListResponse {
    PatientListResponse {
        data: ids.map(sample_patient).collect(),
        pagination: PaginationResult {
            has_next_page: next_cursor.is_some(),
            next_cursor: next_cursor.map(str::to_owned),
        },
    }
}
