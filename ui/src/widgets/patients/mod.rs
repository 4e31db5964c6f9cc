//! Patient list widgets.
//!
//! - `table`: virtualized table (header, rows, cells)
//! - `virtual_rows`: offset table and measured row heights
//! - `modals`: delete confirmation

mod modals;
pub mod table;
pub mod virtual_rows;

pub use modals::{
    CONFIRM_DELETE_LABEL, ConfirmOutcome, DELETE_DIALOG_TITLE, show_delete_patient_modal,
};
pub use table::{DELETE_BUTTON_LABEL, DeleteRequest, TableView, patients_table};
pub use virtual_rows::VirtualRows;
