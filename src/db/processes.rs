use chrono::NaiveDate;
use serde::Deserialize;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::Process;

/// Field values for a process about to be created or updated. Enumerated
/// fields already hold storage codes (see [`crate::fields`]).
#[derive(Debug, Clone, Deserialize)]
pub struct NewProcess {
    pub name: String,
    pub registration: Option<String>,
    pub process_number: String,
    pub opened_on: Option<NaiveDate>,
    pub returned_on: Option<NaiveDate>,
    pub sector: Option<String>,
    pub scholarship: Option<String>,
    pub status: Option<String>,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub notes: String,
}

pub struct ListParams {
    pub table_id: Uuid,
    pub search: Option<String>,
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
}

/// Whitelist the sort column; anything unrecognized falls back to the
/// insertion-time ordering.
fn sort_clause(sort_by: Option<&str>, sort_order: Option<&str>) -> String {
    let order = match sort_order {
        Some(o) if o.eq_ignore_ascii_case("desc") => "DESC",
        _ => "ASC",
    };
    match sort_by {
        Some("name") => format!("ORDER BY lower(name) {order}"),
        Some("opened_on") => format!("ORDER BY opened_on {order} NULLS LAST"),
        Some("returned_on") => format!("ORDER BY returned_on {order} NULLS LAST"),
        _ => "ORDER BY created_at ASC".to_string(),
    }
}

pub async fn list(pool: &PgPool, params: &ListParams) -> Result<Vec<Process>, sqlx::Error> {
    let order = sort_clause(params.sort_by.as_deref(), params.sort_order.as_deref());

    if let Some(search) = &params.search {
        let pattern = format!("%{search}%");
        sqlx::query_as::<_, Process>(&format!(
            "SELECT * FROM processes
             WHERE table_id = $1
               AND (name ILIKE $2 OR process_number ILIKE $2 OR subject ILIKE $2)
             {order}"
        ))
        .bind(params.table_id)
        .bind(pattern)
        .fetch_all(pool)
        .await
    } else {
        sqlx::query_as::<_, Process>(&format!(
            "SELECT * FROM processes WHERE table_id = $1 {order}"
        ))
        .bind(params.table_id)
        .fetch_all(pool)
        .await
    }
}

pub async fn create(
    pool: &PgPool,
    table_id: Option<Uuid>,
    new: &NewProcess,
) -> Result<Process, sqlx::Error> {
    sqlx::query_as::<_, Process>(
        "INSERT INTO processes
            (table_id, name, registration, process_number, opened_on, returned_on,
             sector, scholarship, status, subject, notes)
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
         RETURNING *",
    )
    .bind(table_id)
    .bind(&new.name)
    .bind(&new.registration)
    .bind(&new.process_number)
    .bind(new.opened_on)
    .bind(new.returned_on)
    .bind(&new.sector)
    .bind(&new.scholarship)
    .bind(&new.status)
    .bind(&new.subject)
    .bind(&new.notes)
    .fetch_one(pool)
    .await
}

pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<Process>, sqlx::Error> {
    sqlx::query_as::<_, Process>("SELECT * FROM processes WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn update(pool: &PgPool, id: Uuid, new: &NewProcess) -> Result<Process, sqlx::Error> {
    sqlx::query_as::<_, Process>(
        "UPDATE processes SET
            name = $2, registration = $3, process_number = $4, opened_on = $5,
            returned_on = $6, sector = $7, scholarship = $8, status = $9,
            subject = $10, notes = $11
         WHERE id = $1 RETURNING *",
    )
    .bind(id)
    .bind(&new.name)
    .bind(&new.registration)
    .bind(&new.process_number)
    .bind(new.opened_on)
    .bind(new.returned_on)
    .bind(&new.sector)
    .bind(&new.scholarship)
    .bind(&new.status)
    .bind(&new.subject)
    .bind(&new.notes)
    .fetch_one(pool)
    .await
}

pub async fn delete(pool: &PgPool, id: Uuid) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM processes WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(())
}
