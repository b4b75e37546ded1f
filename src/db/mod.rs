pub mod patients;
pub mod sqlite;

pub use patients::PatientStore;
pub use sqlite::{open_database, open_memory_database};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("Corrupt symptom list for patient {id}: {source}")]
    CorruptSymptoms { id: i64, source: serde_json::Error },

    #[error("Migration failed at version {version}: {reason}")]
    MigrationFailed { version: i64, reason: String },

    #[error("Database lock poisoned")]
    LockPoisoned,
}
