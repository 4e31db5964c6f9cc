//! Column definitions for the patient table.

use egui_extras::Size;

/// Header row height.
pub const HEADER_HEIGHT: f32 = 36.0;

/// No column shrinks below this width.
pub const MIN_COLUMN_WIDTH: f32 = 48.0;

/// A column title and its share of the table width.
#[derive(Debug, Clone, Copy)]
pub struct ColumnSpec {
    pub title: &'static str,
    pub weight: f32,
}

impl ColumnSpec {
    const fn new(title: &'static str, weight: f32) -> Self {
        Self { title, weight }
    }
}

pub const COLUMNS: [ColumnSpec; 9] = [
    ColumnSpec::new("Patient's Name", 2.0),
    ColumnSpec::new("Encounters Date", 2.0),
    ColumnSpec::new("Status", 1.0),
    ColumnSpec::new("Notes Status", 1.0),
    ColumnSpec::new("Letters Status", 1.0),
    ColumnSpec::new("Room/Provider", 1.0),
    ColumnSpec::new("Collaborators", 2.0),
    ColumnSpec::new("Location", 1.0),
    ColumnSpec::new("Actions", 1.0),
];

fn total_weight() -> f32 {
    COLUMNS.iter().map(|column| column.weight).sum()
}

/// Strip sizes for every column, in order.
pub fn column_sizes() -> impl Iterator<Item = Size> {
    let total = total_weight();
    COLUMNS
        .iter()
        .map(move |column| Size::relative(column.weight / total).at_least(MIN_COLUMN_WIDTH))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weights_cover_all_columns() {
        assert_eq!(total_weight(), 12.0);
        assert_eq!(column_sizes().count(), COLUMNS.len());
    }
}
