use std::sync::Arc;
use std::time::Instant;

use super::knowledge::KnowledgeBase;
use super::normalize::normalize_all;
use super::ranker::rank;
use super::scoring::score;
use super::types::{DiagnosisCandidate, PatientContext};

/// The diagnosis engine: a pure, synchronous computation over the
/// immutable knowledge base and one transient patient context.
/// Any number of `predict` calls may run concurrently.
pub struct DiagnosisEngine {
    knowledge: Arc<KnowledgeBase>,
}

impl DiagnosisEngine {
    pub fn new(knowledge: Arc<KnowledgeBase>) -> Self {
        Self { knowledge }
    }

    pub fn knowledge(&self) -> &KnowledgeBase {
        &self.knowledge
    }

    /// Score every known condition against the patient context and
    /// return the ordered candidate list. Total over its inputs: an
    /// empty or entirely unrecognized symptom list yields an empty
    /// result, never an error.
    pub fn predict(&self, ctx: &PatientContext) -> Vec<DiagnosisCandidate> {
        let start = Instant::now();

        let symptoms = normalize_all(&ctx.symptoms);
        let history = ctx.medical_history.as_deref();

        let scored = self
            .knowledge
            .conditions()
            .iter()
            .map(|condition| {
                let (raw, matches) = score(condition, &symptoms, ctx.age, history);
                (condition, raw, matches)
            })
            .collect();

        let candidates = rank(scored);

        tracing::debug!(
            symptoms = symptoms.len(),
            candidates = candidates.len(),
            elapsed_us = start.elapsed().as_micros() as u64,
            "Diagnosis prediction complete"
        );

        candidates
    }
}
