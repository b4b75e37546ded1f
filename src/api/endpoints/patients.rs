//! Patient record endpoints.
//!
//! Four operations on the record store: list, detail, create, delete.
//! Non-numeric ids are rejected by the path extractor before any
//! handler runs, so the store only ever sees well-formed ids.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::models::{PatientDraft, PatientRecord};

/// `GET /api/patients` — all stored records.
pub async fn list(State(ctx): State<ApiContext>) -> Result<Json<Vec<PatientRecord>>, ApiError> {
    let records = ctx.store.fetch_all()?;
    Ok(Json(records))
}

/// `GET /api/patients/:id` — one record.
pub async fn detail(
    State(ctx): State<ApiContext>,
    Path(id): Path<i64>,
) -> Result<Json<PatientRecord>, ApiError> {
    let record = ctx
        .store
        .fetch_by_id(id)?
        .ok_or_else(|| ApiError::NotFound(format!("Patient {id} not found")))?;
    Ok(Json(record))
}

/// `POST /api/patients` — insert a record, returning it with its id.
pub async fn create(
    State(ctx): State<ApiContext>,
    Json(draft): Json<PatientDraft>,
) -> Result<(StatusCode, Json<PatientRecord>), ApiError> {
    let record = ctx.store.insert(&draft)?;
    tracing::info!(id = record.id, "Patient record created");
    Ok((StatusCode::CREATED, Json(record)))
}

/// `DELETE /api/patients/:id` — delete; 404 when nothing existed.
pub async fn remove(
    State(ctx): State<ApiContext>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    if ctx.store.delete(id)? {
        tracing::info!(id, "Patient record deleted");
        Ok(StatusCode::OK)
    } else {
        Err(ApiError::NotFound(format!("Patient {id} not found")))
    }
}
