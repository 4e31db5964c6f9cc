//! Wire model for the `/patients` resource.
//!
//! Status enums decode through `String` so that a value the server adds later
//! does not make a whole page undecodable; such values are kept verbatim in
//! the `Unrecognized` variant and rendered with the neutral tag color.

use std::fmt;

use serde::{Deserialize, Serialize};
use ustr::Ustr;

/// Stable, never-reused patient identifier.
pub type PatientId = u64;

/// Case status of a patient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PatientStatus {
    Active,
    Discharged,
    Pending,
    InProgress,
    Ready,
    Unrecognized(Ustr),
}

impl PatientStatus {
    /// The five statuses offered by the filter control, in display order.
    pub const ALL: [Self; 5] = [
        Self::Active,
        Self::Discharged,
        Self::Pending,
        Self::InProgress,
        Self::Ready,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            Self::Active => "Active",
            Self::Discharged => "Discharged",
            Self::Pending => "Pending",
            Self::InProgress => "In Progress",
            Self::Ready => "Ready",
            Self::Unrecognized(raw) => raw.as_str(),
        }
    }
}

impl From<&str> for PatientStatus {
    fn from(value: &str) -> Self {
        match value {
            "Active" => Self::Active,
            "Discharged" => Self::Discharged,
            "Pending" => Self::Pending,
            "In Progress" => Self::InProgress,
            "Ready" => Self::Ready,
            other => Self::Unrecognized(Ustr::from(other)),
        }
    }
}

impl From<String> for PatientStatus {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl From<PatientStatus> for String {
    fn from(value: PatientStatus) -> Self {
        value.as_str().to_owned()
    }
}

impl fmt::Display for PatientStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Completion state of a patient's documentation (notes, letters).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum NotesStatus {
    NotRequired,
    Incomplete,
    Pending,
    Completed,
    HalfCopied,
    NotStarted,
    Unrecognized(Ustr),
}

impl NotesStatus {
    pub fn as_str(&self) -> &str {
        match self {
            Self::NotRequired => "Not Required",
            Self::Incomplete => "Incomplete",
            Self::Pending => "Pending",
            Self::Completed => "Completed",
            Self::HalfCopied => "1/2 Copied",
            Self::NotStarted => "Not Started",
            Self::Unrecognized(raw) => raw.as_str(),
        }
    }
}

impl From<&str> for NotesStatus {
    fn from(value: &str) -> Self {
        match value {
            "Not Required" => Self::NotRequired,
            "Incomplete" => Self::Incomplete,
            "Pending" => Self::Pending,
            "Completed" => Self::Completed,
            "1/2 Copied" => Self::HalfCopied,
            "Not Started" => Self::NotStarted,
            other => Self::Unrecognized(Ustr::from(other)),
        }
    }
}

impl From<String> for NotesStatus {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl From<NotesStatus> for String {
    fn from(value: NotesStatus) -> Self {
        value.as_str().to_owned()
    }
}

impl fmt::Display for NotesStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A patient row as returned by `GET /patients`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patient {
    pub id: PatientId,
    pub name: String,
    pub status: PatientStatus,
    /// Encounter date, usually `YYYY-MM-DD` or RFC 3339.
    pub date: String,
    pub notes_status: NotesStatus,
    /// Letters status. Older servers omit it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub letters_status: Option<NotesStatus>,
    /// Room or provider label.
    pub room: String,
    pub location: String,
    /// Comma-space separated collaborator names.
    #[serde(rename = "collabrators", alias = "collaborators", default)]
    pub collaborators: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationResult {
    pub has_next_page: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_cursor: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatientListResponse {
    pub data: Vec<Patient>,
    pub pagination: PaginationResult,
}

/// Query parameters for `GET /patients`. Absent fields use the server default.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatientListParams {
    pub cursor: Option<String>,
    pub limit: Option<usize>,
    pub status: Option<PatientStatus>,
}

impl PatientListParams {
    pub fn with_limit(limit: usize) -> Self {
        Self {
            limit: Some(limit),
            ..Self::default()
        }
    }

    /// Whether this request continues an earlier page (append) or starts over (replace).
    pub fn is_continuation(&self) -> bool {
        self.cursor.is_some()
    }

    /// Present parameters as `(name, value)` pairs, unencoded.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::with_capacity(3);
        if let Some(cursor) = &self.cursor {
            pairs.push(("cursor", cursor.clone()));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit", limit.to_string()));
        }
        if let Some(status) = &self.status {
            pairs.push(("status", status.as_str().to_owned()));
        }
        pairs
    }
}
