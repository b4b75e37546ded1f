//! Rule-based diagnosis core.
//!
//! Flow: normalize symptoms → score every condition in the knowledge
//! base → rank (filter, derive probability + severity, sort). The whole
//! pipeline is pure and synchronous; the knowledge base is the only
//! shared state and is immutable after startup.

pub mod engine;
pub mod knowledge;
pub mod normalize;
pub mod ranker;
pub mod scoring;
pub mod types;

pub use engine::DiagnosisEngine;
pub use knowledge::KnowledgeBase;
pub use types::{ConditionProfile, DiagnosisCandidate, KnowledgeError, PatientContext, Severity};
