use sqlx::PgPool;
use uuid::Uuid;

use crate::models::AuditEntry;

/// Insert-only: audit entries are never updated or deleted, and no other
/// query in this crate touches them.
pub async fn append(
    pool: &PgPool,
    actor_id: Option<Uuid>,
    action: &str,
    process_id: Option<Uuid>,
    table_id: Option<Uuid>,
    details: serde_json::Value,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        "INSERT INTO audit_entries (actor_id, action, process_id, table_id, details)
         VALUES ($1, $2, $3, $4, $5)",
    )
    .bind(actor_id)
    .bind(action)
    .bind(process_id)
    .bind(table_id)
    .bind(details)
    .execute(pool)
    .await?;
    Ok(())
}

pub async fn list(
    pool: &PgPool,
    limit: i64,
    offset: i64,
) -> Result<Vec<AuditEntry>, sqlx::Error> {
    sqlx::query_as::<_, AuditEntry>(
        "SELECT * FROM audit_entries ORDER BY occurred_at DESC LIMIT $1 OFFSET $2",
    )
    .bind(limit)
    .bind(offset)
    .fetch_all(pool)
    .await
}
