use axum::extract::{Path, State};
use axum::Json;
use serde::Deserialize;
use uuid::Uuid;

use crate::audit::{self, AuditAction};
use crate::auth::extractor::AuthUser;
use crate::db;
use crate::error::AppError;
use crate::models::ProcessTable;
use crate::state::SharedState;

#[derive(Deserialize)]
pub struct TableRequest {
    pub name: String,
    pub description: Option<String>,
}

fn validate_name(name: &str) -> Result<(), AppError> {
    if name.trim().is_empty() {
        return Err(AppError::Validation(
            "O nome da tabela é obrigatório.".to_string(),
        ));
    }
    Ok(())
}

pub async fn list(
    _auth: AuthUser,
    State(state): State<SharedState>,
) -> Result<Json<Vec<ProcessTable>>, AppError> {
    let tables = db::tables::list(&state.pool).await?;
    Ok(Json(tables))
}

pub async fn create(
    auth: AuthUser,
    State(state): State<SharedState>,
    Json(req): Json<TableRequest>,
) -> Result<Json<ProcessTable>, AppError> {
    validate_name(&req.name)?;

    let table = db::tables::create(
        &state.pool,
        req.name.trim(),
        req.description.as_deref(),
        Some(auth.user_id),
    )
    .await?;

    audit::record(
        &state.pool,
        Some(auth.user_id),
        AuditAction::Create,
        None,
        Some(table.id),
        audit::table_snapshot(AuditAction::Create, &table),
    )
    .await;

    Ok(Json(table))
}

pub async fn get(
    _auth: AuthUser,
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ProcessTable>, AppError> {
    let table = db::tables::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound("Tabela não encontrada.".to_string()))?;
    Ok(Json(table))
}

pub async fn update(
    auth: AuthUser,
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
    Json(req): Json<TableRequest>,
) -> Result<Json<ProcessTable>, AppError> {
    validate_name(&req.name)?;

    let table = db::tables::update(&state.pool, id, req.name.trim(), req.description.as_deref())
        .await
        .map_err(|e| match e {
            sqlx::Error::RowNotFound => {
                AppError::NotFound("Tabela não encontrada.".to_string())
            }
            _ => AppError::Database(e),
        })?;

    audit::record(
        &state.pool,
        Some(auth.user_id),
        AuditAction::Update,
        None,
        Some(table.id),
        audit::table_snapshot(AuditAction::Update, &table),
    )
    .await;

    Ok(Json(table))
}

pub async fn delete(
    auth: AuthUser,
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    // Snapshot before deletion; the row is gone afterwards.
    let table = db::tables::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound("Tabela não encontrada.".to_string()))?;
    let snapshot = audit::table_snapshot(AuditAction::Delete, &table);

    db::tables::delete(&state.pool, id).await?;

    audit::record(
        &state.pool,
        Some(auth.user_id),
        AuditAction::Delete,
        None,
        None,
        snapshot,
    )
    .await;

    Ok(Json(serde_json::json!({ "message": "Tabela excluída." })))
}
