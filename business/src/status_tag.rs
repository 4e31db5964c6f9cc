//! Status value to tag color lookup.

use crate::patient::{NotesStatus, PatientStatus};

/// Which lookup table a status value is resolved against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCategory {
    Patient,
    Notes,
}

/// Color token for a status tag. The UI maps tokens to concrete colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TagColor {
    Green,
    Red,
    Orange,
    Blue,
    Cyan,
    Purple,
    Gray,
    #[default]
    Default,
}

impl TagColor {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Green => "green",
            Self::Red => "red",
            Self::Orange => "orange",
            Self::Blue => "blue",
            Self::Cyan => "cyan",
            Self::Purple => "purple",
            Self::Gray => "gray",
            Self::Default => "default",
        }
    }
}

const PATIENT_TAG_COLORS: [(&str, TagColor); 5] = [
    ("Active", TagColor::Green),
    ("Discharged", TagColor::Red),
    ("Pending", TagColor::Orange),
    ("In Progress", TagColor::Blue),
    ("Ready", TagColor::Cyan),
];

const NOTES_TAG_COLORS: [(&str, TagColor); 6] = [
    ("Completed", TagColor::Green),
    ("Incomplete", TagColor::Red),
    ("Pending", TagColor::Orange),
    ("1/2 Copied", TagColor::Purple),
    ("Not Started", TagColor::Gray),
    ("Not Required", TagColor::Default),
];

/// Resolves `status` in the table for `category`; unknown values get [`TagColor::Default`].
pub fn tag_color(status: &str, category: StatusCategory) -> TagColor {
    let table: &[(&str, TagColor)] = match category {
        StatusCategory::Patient => &PATIENT_TAG_COLORS,
        StatusCategory::Notes => &NOTES_TAG_COLORS,
    };

    table
        .iter()
        .find(|(value, _)| *value == status)
        .map(|(_, color)| *color)
        .unwrap_or_default()
}

impl PatientStatus {
    pub fn tag_color(&self) -> TagColor {
        tag_color(self.as_str(), StatusCategory::Patient)
    }
}

impl NotesStatus {
    pub fn tag_color(&self) -> TagColor {
        tag_color(self.as_str(), StatusCategory::Notes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ustr::Ustr;

    #[test]
    fn active_patient_is_green() {
        assert_eq!(tag_color("Active", StatusCategory::Patient), TagColor::Green);
        assert_eq!(tag_color("Active", StatusCategory::Patient).as_str(), "green");
    }

    #[test]
    fn unrecognized_status_is_default() {
        assert_eq!(
            tag_color("Transferred", StatusCategory::Patient),
            TagColor::Default
        );
        assert_eq!(tag_color("", StatusCategory::Notes), TagColor::Default);
    }

    #[test]
    fn lookup_is_per_category() {
        // "Completed" is only meaningful for notes.
        assert_eq!(tag_color("Completed", StatusCategory::Notes), TagColor::Green);
        assert_eq!(
            tag_color("Completed", StatusCategory::Patient),
            TagColor::Default
        );
        // "Pending" exists in both tables.
        assert_eq!(tag_color("Pending", StatusCategory::Patient), TagColor::Orange);
        assert_eq!(tag_color("Pending", StatusCategory::Notes), TagColor::Orange);
    }

    #[test]
    fn every_patient_status_has_a_color() {
        for status in PatientStatus::ALL {
            assert_ne!(status.tag_color(), TagColor::Default, "{status} has no color");
        }
    }

    #[test]
    fn notes_statuses_map_through_enum() {
        assert_eq!(NotesStatus::HalfCopied.tag_color(), TagColor::Purple);
        assert_eq!(NotesStatus::NotStarted.tag_color(), TagColor::Gray);
        assert_eq!(NotesStatus::NotRequired.tag_color(), TagColor::Default);
        assert_eq!(
            NotesStatus::Unrecognized(Ustr::from("Archived")).tag_color(),
            TagColor::Default
        );
    }
}
