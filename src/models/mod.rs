pub mod patient;

pub use patient::{PatientDraft, PatientRecord};
