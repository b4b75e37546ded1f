//! Per-condition raw scoring.
//!
//! The raw score is the sum of matched symptom weights, adjusted by two
//! contextual multipliers applied in a fixed order: age first, then
//! medical history. Both can apply to the same condition, compounding
//! multiplicatively.

use std::collections::BTreeSet;

use super::types::ConditionProfile;

/// Age above which age-sensitive conditions receive the boost.
pub const AGE_THRESHOLD: u32 = 60;
/// Multiplier for age-sensitive conditions when `age > AGE_THRESHOLD`.
pub const AGE_MULTIPLIER: f64 = 1.2;
/// Multiplier when the condition's history trigger appears in the
/// patient's medical history.
pub const HISTORY_MULTIPLIER: f64 = 1.3;

/// Score one condition against a normalized symptom set.
///
/// Returns `(raw_score, match_count)`. The symptom collection is a set,
/// so a duplicate occurrence of the same normalized token can never be
/// counted twice. Unknown symptoms simply match nothing.
pub fn score(
    condition: &ConditionProfile,
    symptoms: &BTreeSet<String>,
    age: u32,
    history: Option<&str>,
) -> (f64, usize) {
    let mut raw = 0.0;
    let mut matches = 0;

    for symptom in symptoms {
        if let Some(weight) = condition.symptom_weights.get(symptom) {
            raw += weight;
            matches += 1;
        }
    }

    if age > AGE_THRESHOLD && condition.age_sensitive {
        raw *= AGE_MULTIPLIER;
    }

    if let (Some(trigger), Some(history)) = (&condition.history_trigger, history) {
        // Triggers are lowercased at knowledge-base construction.
        if !history.is_empty() && history.to_lowercase().contains(trigger.as_str()) {
            raw *= HISTORY_MULTIPLIER;
        }
    }

    (raw, matches)
}
