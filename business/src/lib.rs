//! Patient roster domain: wire model, display helpers, the REST gateway and
//! the pagination controller the UI drives.

mod collaborators;
mod config;
mod controller;
mod format;
mod gateway;
mod patient;
mod status_tag;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use collaborators::{
    Badge, COLLABORATOR_SEPARATOR, CollaboratorBadges, DEFAULT_MAX_BADGES, collaborator_badges,
    collaborator_label,
};
pub use config::{BusinessConfig, ConfigError, DEFAULT_PAGE_SIZE};
pub use controller::{ControllerEvent, ErrorInfo, ErrorKind, PatientListController};
pub use format::format_encounter_date;
pub use gateway::{
    GatewayError, GatewayResult, HttpGateway, OnDelete, OnList, PatientGateway,
};
pub use patient::{
    NotesStatus, PaginationResult, Patient, PatientId, PatientListParams, PatientListResponse,
    PatientStatus,
};
pub use status_tag::{StatusCategory, TagColor, tag_color};
