//! Symptom normalization.
//!
//! Matching keys are case-folded and trimmed, nothing more. No synonym
//! resolution, stemming, or spell correction: a symptom that does not
//! appear verbatim (after normalization) in a condition's weight table
//! silently contributes nothing. That boundary is deliberate.

use std::collections::BTreeSet;

/// Canonicalize one free-text symptom token for matching.
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Normalize a symptom list into the deduplicated matching set.
/// Case and whitespace variants of the same token collapse to one entry,
/// so a duplicate occurrence is never counted twice. The set is ordered,
/// which keeps weight summation deterministic across calls.
pub fn normalize_all(raw: &[String]) -> BTreeSet<String> {
    raw.iter()
        .map(|s| normalize(s))
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_folds_case_and_trims() {
        assert_eq!(normalize("  Runny Nose "), "runny nose");
        assert_eq!(normalize("COUGH"), "cough");
    }

    #[test]
    fn normalize_preserves_interior_whitespace() {
        // Only leading/trailing whitespace is trimmed.
        assert_eq!(normalize(" shortness of breath"), "shortness of breath");
    }

    #[test]
    fn normalize_all_collapses_variants() {
        let raw = vec![
            "Headache".to_string(),
            "headache ".to_string(),
            " HEADACHE".to_string(),
            "nausea".to_string(),
        ];
        let set = normalize_all(&raw);
        assert_eq!(set.len(), 2);
        assert!(set.contains("headache"));
        assert!(set.contains("nausea"));
    }

    #[test]
    fn normalize_all_drops_blank_tokens() {
        let raw = vec!["  ".to_string(), "fever".to_string()];
        let set = normalize_all(&raw);
        assert_eq!(set.len(), 1);
        assert!(set.contains("fever"));
    }
}
