use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A named collection of processes. Deleting a table cascades to its
/// processes; audit entries keep a nulled reference instead.
#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct ProcessTable {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub owner_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}
