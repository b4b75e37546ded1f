use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A stored patient entry. Identifiers are assigned by the record store
/// and are unique and monotonically increasing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatientRecord {
    pub id: i64,
    pub name: String,
    pub age: i64,
    pub gender: Option<String>,
    pub blood_group: Option<String>,
    pub medical_history: Option<String>,
    pub symptoms: Vec<String>,
    /// Top-ranked condition name once a diagnosis has been run.
    pub diagnosis: Option<String>,
    pub confidence_score: Option<f64>,
    pub created_at: NaiveDateTime,
}

/// Inbound patient payload, before the store assigns an id.
///
/// Also the request shape for the diagnosis endpoint: the same
/// patient-shaped body drives both scoring and persistence, and the
/// caller persists separately after scoring.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PatientDraft {
    pub name: String,
    /// Negative ages are clamped to zero (no age signal) rather than rejected.
    #[serde(default)]
    pub age: i64,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub blood_group: Option<String>,
    #[serde(default)]
    pub medical_history: Option<String>,
    #[serde(default)]
    pub symptoms: Vec<String>,
    #[serde(default)]
    pub diagnosis: Option<String>,
    #[serde(default)]
    pub confidence_score: Option<f64>,
}

impl PatientDraft {
    /// Age with absent/negative values clamped to "no age signal".
    pub fn clamped_age(&self) -> u32 {
        self.age.max(0).min(u32::MAX as i64) as u32
    }
}
