mod patients_page;

pub use patients_page::{LOAD_MORE_LABEL, patients_page};
