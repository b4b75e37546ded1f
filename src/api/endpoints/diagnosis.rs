//! Diagnosis endpoint.
//!
//! Takes a patient-shaped payload, runs the scoring core, and returns
//! the ordered candidate list. Nothing is persisted here: the caller
//! stores the record, with the top candidate folded in, via
//! `POST /api/patients`.

use axum::extract::State;
use axum::Json;

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::diagnosis::{DiagnosisCandidate, PatientContext};
use crate::models::PatientDraft;

/// `POST /api/diagnosis` — score the payload against every known condition.
pub async fn predict(
    State(ctx): State<ApiContext>,
    Json(draft): Json<PatientDraft>,
) -> Result<Json<Vec<DiagnosisCandidate>>, ApiError> {
    let context = PatientContext {
        symptoms: draft.symptoms.clone(),
        age: draft.clamped_age(),
        medical_history: draft.medical_history.clone(),
    };

    let candidates = ctx.engine.predict(&context);

    tracing::info!(
        symptoms = draft.symptoms.len(),
        candidates = candidates.len(),
        "Diagnosis request served"
    );

    Ok(Json(candidates))
}
