use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single case record. `process_number` is unique across the whole store.
///
/// The enumerated columns (`sector`, `scholarship`, `status`) hold the
/// storage codes defined in [`crate::fields`]; `None` means unset.
#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct Process {
    pub id: Uuid,
    pub table_id: Option<Uuid>,
    pub name: String,
    pub registration: Option<String>,
    pub process_number: String,
    pub opened_on: Option<NaiveDate>,
    /// Null while the process is still open.
    pub returned_on: Option<NaiveDate>,
    pub sector: Option<String>,
    pub scholarship: Option<String>,
    pub status: Option<String>,
    pub subject: String,
    pub notes: String,
    pub created_at: DateTime<Utc>,
}
