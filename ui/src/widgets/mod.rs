mod collaborators;
mod error_banner;
pub mod patients;
mod status_filter;
mod status_tag;
pub mod toast;

pub use collaborators::collaborators_cell;
pub use error_banner::{BannerAction, DISMISS_LABEL, RETRY_LABEL, error_banner};
pub use patients::{
    CONFIRM_DELETE_LABEL, ConfirmOutcome, DELETE_BUTTON_LABEL, DELETE_DIALOG_TITLE,
    DeleteRequest, TableView, VirtualRows, patients_table, show_delete_patient_modal,
};
pub use status_filter::status_filter;
pub use status_tag::{missing_tag, status_tag};
pub use toast::{ToastKind, Toasts};
