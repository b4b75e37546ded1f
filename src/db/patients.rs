//! Patient record store.
//!
//! A boundary collaborator, not part of the diagnosis core. SQLite keeps
//! ids unique and monotonically increasing (AUTOINCREMENT never reuses a
//! rowid, even after deletes). The connection sits behind a mutex; the
//! four operations are short and never held across await points.

use std::sync::Mutex;

use rusqlite::{params, Connection};

use crate::models::{PatientDraft, PatientRecord};

use super::DatabaseError;

pub struct PatientStore {
    conn: Mutex<Connection>,
}

/// Intermediate row shape: symptoms come out of SQLite as JSON text.
struct PatientRow {
    record: PatientRecord,
    symptoms_json: String,
}

impl PatientStore {
    pub fn new(conn: Connection) -> Self {
        Self {
            conn: Mutex::new(conn),
        }
    }

    /// Insert a new record, returning it with its assigned id.
    pub fn insert(&self, draft: &PatientDraft) -> Result<PatientRecord, DatabaseError> {
        let created_at = chrono::Local::now().naive_local();
        let symptoms_json =
            serde_json::to_string(&draft.symptoms).unwrap_or_else(|_| "[]".to_string());

        let conn = self.conn.lock().map_err(|_| DatabaseError::LockPoisoned)?;
        conn.execute(
            "INSERT INTO patients
                (name, age, gender, blood_group, medical_history, symptoms,
                 diagnosis, confidence_score, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
            params![
                draft.name,
                draft.age,
                draft.gender,
                draft.blood_group,
                draft.medical_history,
                symptoms_json,
                draft.diagnosis,
                draft.confidence_score,
                created_at,
            ],
        )?;
        let id = conn.last_insert_rowid();

        Ok(PatientRecord {
            id,
            name: draft.name.clone(),
            age: draft.age,
            gender: draft.gender.clone(),
            blood_group: draft.blood_group.clone(),
            medical_history: draft.medical_history.clone(),
            symptoms: draft.symptoms.clone(),
            diagnosis: draft.diagnosis.clone(),
            confidence_score: draft.confidence_score,
            created_at,
        })
    }

    /// Fetch all records, oldest first.
    pub fn fetch_all(&self) -> Result<Vec<PatientRecord>, DatabaseError> {
        let conn = self.conn.lock().map_err(|_| DatabaseError::LockPoisoned)?;
        let mut stmt = conn.prepare(
            "SELECT id, name, age, gender, blood_group, medical_history, symptoms,
                    diagnosis, confidence_score, created_at
             FROM patients ORDER BY id",
        )?;
        let rows = stmt.query_map([], row_to_patient)?;

        let mut records = Vec::new();
        for row in rows {
            records.push(decode_symptoms(row?)?);
        }
        Ok(records)
    }

    /// Fetch one record by id. `None` when no such record exists.
    pub fn fetch_by_id(&self, id: i64) -> Result<Option<PatientRecord>, DatabaseError> {
        let conn = self.conn.lock().map_err(|_| DatabaseError::LockPoisoned)?;
        let mut stmt = conn.prepare(
            "SELECT id, name, age, gender, blood_group, medical_history, symptoms,
                    diagnosis, confidence_score, created_at
             FROM patients WHERE id = ?1",
        )?;
        let mut rows = stmt.query_map(params![id], row_to_patient)?;

        match rows.next() {
            Some(row) => Ok(Some(decode_symptoms(row?)?)),
            None => Ok(None),
        }
    }

    /// Delete by id. Reports whether a record existed.
    pub fn delete(&self, id: i64) -> Result<bool, DatabaseError> {
        let conn = self.conn.lock().map_err(|_| DatabaseError::LockPoisoned)?;
        let deleted = conn.execute("DELETE FROM patients WHERE id = ?1", params![id])?;
        Ok(deleted > 0)
    }
}

fn row_to_patient(row: &rusqlite::Row<'_>) -> rusqlite::Result<PatientRow> {
    Ok(PatientRow {
        record: PatientRecord {
            id: row.get(0)?,
            name: row.get(1)?,
            age: row.get(2)?,
            gender: row.get(3)?,
            blood_group: row.get(4)?,
            medical_history: row.get(5)?,
            symptoms: Vec::new(),
            diagnosis: row.get(7)?,
            confidence_score: row.get(8)?,
            created_at: row.get(9)?,
        },
        symptoms_json: row.get(6)?,
    })
}

fn decode_symptoms(row: PatientRow) -> Result<PatientRecord, DatabaseError> {
    let PatientRow {
        mut record,
        symptoms_json,
    } = row;
    record.symptoms =
        serde_json::from_str(&symptoms_json).map_err(|source| DatabaseError::CorruptSymptoms {
            id: record.id,
            source,
        })?;
    Ok(record)
}
