mod alert;

pub use alert::{ErrorAlert, SuccessAlert};
