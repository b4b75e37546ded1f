//! Candidate filtering, probability derivation, and ordering.

use std::cmp::Ordering;

use super::types::{ConditionProfile, DiagnosisCandidate, Severity};

/// Probabilities are capped below certainty.
pub const PROBABILITY_CAP: f64 = 99.0;

const HIGH_THRESHOLD: f64 = 70.0;
const MODERATE_THRESHOLD: f64 = 50.0;

/// Turn per-condition raw scores into the ordered candidate list.
///
/// Conditions with no matched symptom are dropped. The probability
/// denominator is the number of symptoms the condition *defines*, not
/// the number matched, so conditions with a large fraction of their
/// defining symptoms observed rank higher. Sorting is stable, so equal
/// probabilities keep knowledge-base declaration order.
pub fn rank(scored: Vec<(&ConditionProfile, f64, usize)>) -> Vec<DiagnosisCandidate> {
    let mut candidates: Vec<DiagnosisCandidate> = scored
        .into_iter()
        .filter(|(_, _, matches)| *matches > 0)
        .map(|(condition, raw, _)| {
            let probability =
                (raw / condition.symptom_weights.len() as f64 * 100.0).min(PROBABILITY_CAP);
            DiagnosisCandidate {
                disease: condition.name.clone(),
                probability,
                severity: severity_for(probability),
                recommendations: condition.recommendations.clone(),
            }
        })
        .collect();

    candidates.sort_by(|a, b| {
        b.probability
            .partial_cmp(&a.probability)
            .unwrap_or(Ordering::Equal)
    });
    candidates
}

/// Band a probability into a severity tier. Both thresholds are strict:
/// exactly 70.0 is Moderate, exactly 50.0 is Low.
fn severity_for(probability: f64) -> Severity {
    if probability > HIGH_THRESHOLD {
        Severity::High
    } else if probability > MODERATE_THRESHOLD {
        Severity::Moderate
    } else {
        Severity::Low
    }
}
