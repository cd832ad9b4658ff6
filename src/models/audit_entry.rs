use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Append-only log record. Never updated or deleted; references to the
/// process, table, and actor are nulled when the referent goes away.
#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct AuditEntry {
    pub id: Uuid,
    pub process_id: Option<Uuid>,
    pub table_id: Option<Uuid>,
    pub actor_id: Option<Uuid>,
    pub action: String,
    pub details: serde_json::Value,
    pub occurred_at: DateTime<Utc>,
}
