use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ---------------------------------------------------------------------------
// Severity
// ---------------------------------------------------------------------------

/// Severity tier derived from a candidate's probability band.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Low,
    Moderate,
    High,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Moderate => "Moderate",
            Self::High => "High",
        }
    }
}

// ---------------------------------------------------------------------------
// ConditionProfile
// ---------------------------------------------------------------------------

/// One diagnosable condition in the knowledge base.
///
/// `symptom_weights` maps a normalized symptom to a weight in `[0, 1]`
/// expressing how strongly that symptom indicates the condition. The
/// two contextual boosts are data, not code: `age_sensitive` opts the
/// condition into the over-60 multiplier, and `history_trigger` is a
/// lowercase substring that, when present in the patient's medical
/// history, applies the history multiplier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConditionProfile {
    pub name: String,
    pub symptom_weights: HashMap<String, f64>,
    pub recommendations: Vec<String>,
    #[serde(default)]
    pub age_sensitive: bool,
    #[serde(default)]
    pub history_trigger: Option<String>,
}

// ---------------------------------------------------------------------------
// PatientContext
// ---------------------------------------------------------------------------

/// Transient input to one scoring call. Constructed per request,
/// never persisted by the engine.
#[derive(Debug, Clone, Default)]
pub struct PatientContext {
    /// Free-text symptom tokens. May contain duplicates and case or
    /// whitespace variants; normalization collapses them.
    pub symptoms: Vec<String>,
    /// Patient age in years. Zero means "no age signal".
    pub age: u32,
    pub medical_history: Option<String>,
}

// ---------------------------------------------------------------------------
// DiagnosisCandidate
// ---------------------------------------------------------------------------

/// One scored output row. Only conditions with at least one matched
/// symptom are emitted, ordered by descending probability.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiagnosisCandidate {
    pub disease: String,
    /// Heuristic confidence in `(0, 99.0]`, not a calibrated likelihood.
    pub probability: f64,
    pub severity: Severity,
    pub recommendations: Vec<String>,
}

// ---------------------------------------------------------------------------
// KnowledgeError
// ---------------------------------------------------------------------------

/// Knowledge base construction failures. These abort startup; the
/// engine itself is a total function and has no error paths.
#[derive(Debug, Error)]
pub enum KnowledgeError {
    #[error("Failed to read knowledge file {path}: {reason}")]
    Load { path: String, reason: String },

    #[error("Failed to parse knowledge file {path}: {reason}")]
    Parse { path: String, reason: String },

    #[error("Invalid condition '{condition}': {reason}")]
    Invalid { condition: String, reason: String },

    #[error("Knowledge base has no conditions")]
    Empty,
}
