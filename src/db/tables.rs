use sqlx::PgPool;
use uuid::Uuid;

use crate::models::ProcessTable;

pub async fn list(pool: &PgPool) -> Result<Vec<ProcessTable>, sqlx::Error> {
    sqlx::query_as::<_, ProcessTable>("SELECT * FROM process_tables ORDER BY created_at DESC")
        .fetch_all(pool)
        .await
}

pub async fn create(
    pool: &PgPool,
    name: &str,
    description: Option<&str>,
    owner_id: Option<Uuid>,
) -> Result<ProcessTable, sqlx::Error> {
    sqlx::query_as::<_, ProcessTable>(
        "INSERT INTO process_tables (name, description, owner_id)
         VALUES ($1, $2, $3) RETURNING *",
    )
    .bind(name)
    .bind(description)
    .bind(owner_id)
    .fetch_one(pool)
    .await
}

pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<ProcessTable>, sqlx::Error> {
    sqlx::query_as::<_, ProcessTable>("SELECT * FROM process_tables WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn update(
    pool: &PgPool,
    id: Uuid,
    name: &str,
    description: Option<&str>,
) -> Result<ProcessTable, sqlx::Error> {
    sqlx::query_as::<_, ProcessTable>(
        "UPDATE process_tables SET name = $2, description = $3
         WHERE id = $1 RETURNING *",
    )
    .bind(id)
    .bind(name)
    .bind(description)
    .fetch_one(pool)
    .await
}

/// Deletes the table; the schema cascades to its processes and nulls the
/// references held by audit entries.
pub async fn delete(pool: &PgPool, id: Uuid) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM process_tables WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(())
}
