//! Shared state for the API layer.

use std::sync::Arc;

use crate::db::PatientStore;
use crate::diagnosis::DiagnosisEngine;

/// Shared context for all API routes: the record store and the
/// diagnosis engine, both safe for concurrent use.
#[derive(Clone)]
pub struct ApiContext {
    pub store: Arc<PatientStore>,
    pub engine: Arc<DiagnosisEngine>,
}

impl ApiContext {
    pub fn new(store: Arc<PatientStore>, engine: Arc<DiagnosisEngine>) -> Self {
        Self { store, engine }
    }
}
