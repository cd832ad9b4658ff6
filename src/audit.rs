//! Best-effort audit recording.
//!
//! Called synchronously after each mutation commits. A failed audit write
//! is logged and swallowed: it must never fail the business action that
//! triggered it.

use serde_json::json;
use sqlx::PgPool;
use uuid::Uuid;

use crate::db;
use crate::models::{Process, ProcessTable};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuditAction {
    Create,
    Update,
    Delete,
}

impl AuditAction {
    pub fn as_str(self) -> &'static str {
        match self {
            AuditAction::Create => "create",
            AuditAction::Update => "update",
            AuditAction::Delete => "delete",
        }
    }
}

pub async fn record(
    pool: &PgPool,
    actor_id: Option<Uuid>,
    action: AuditAction,
    process_id: Option<Uuid>,
    table_id: Option<Uuid>,
    details: serde_json::Value,
) {
    if let Err(e) =
        db::audit::append(pool, actor_id, action.as_str(), process_id, table_id, details).await
    {
        tracing::error!("Failed to append audit entry: {e}");
    }
}

/// Snapshot of a process's field values. For deletes the caller takes the
/// snapshot before the row is removed.
pub fn process_snapshot(action: AuditAction, process: &Process) -> serde_json::Value {
    json!({
        "action": action.as_str(),
        "entity": "process",
        "fields": {
            "name": process.name,
            "registration": process.registration,
            "process_number": process.process_number,
            "opened_on": process.opened_on,
            "returned_on": process.returned_on,
            "sector": process.sector,
            "scholarship": process.scholarship,
            "status": process.status,
            "subject": process.subject,
            "notes": process.notes,
        },
    })
}

pub fn table_snapshot(action: AuditAction, table: &ProcessTable) -> serde_json::Value {
    json!({
        "action": action.as_str(),
        "entity": "table",
        "fields": {
            "name": table.name,
            "description": table.description,
        },
    })
}
