use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;
use uuid::Uuid;

use crate::audit::{self, AuditAction};
use crate::auth::extractor::AuthUser;
use crate::db;
use crate::db::processes::NewProcess;
use crate::error::AppError;
use crate::models::Process;
use crate::state::SharedState;

#[derive(Deserialize)]
pub struct ListQuery {
    pub q: Option<String>,
    pub sort: Option<String>,
    pub direction: Option<String>,
}

fn validate(new: &NewProcess) -> Result<(), AppError> {
    if new.name.trim().is_empty() {
        return Err(AppError::Validation(
            "O nome do processo é obrigatório.".to_string(),
        ));
    }
    if new.process_number.trim().is_empty() {
        return Err(AppError::Validation(
            "O número do processo é obrigatório.".to_string(),
        ));
    }
    Ok(())
}

fn duplicate_number_error(e: sqlx::Error, number: &str) -> AppError {
    match e {
        sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => AppError::Conflict(
            format!("Processo com número '{number}' já existe no sistema."),
        ),
        _ => AppError::Database(e),
    }
}

pub async fn list(
    _auth: AuthUser,
    State(state): State<SharedState>,
    Path(table_id): Path<Uuid>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<Process>>, AppError> {
    db::tables::find_by_id(&state.pool, table_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Tabela não encontrada.".to_string()))?;

    let processes = db::processes::list(
        &state.pool,
        &db::processes::ListParams {
            table_id,
            search: query.q,
            sort_by: query.sort,
            sort_order: query.direction,
        },
    )
    .await?;

    Ok(Json(processes))
}

pub async fn create(
    auth: AuthUser,
    State(state): State<SharedState>,
    Path(table_id): Path<Uuid>,
    Json(req): Json<NewProcess>,
) -> Result<Json<Process>, AppError> {
    validate(&req)?;

    db::tables::find_by_id(&state.pool, table_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Tabela não encontrada.".to_string()))?;

    let process = db::processes::create(&state.pool, Some(table_id), &req)
        .await
        .map_err(|e| duplicate_number_error(e, &req.process_number))?;

    audit::record(
        &state.pool,
        Some(auth.user_id),
        AuditAction::Create,
        Some(process.id),
        process.table_id,
        audit::process_snapshot(AuditAction::Create, &process),
    )
    .await;

    Ok(Json(process))
}

pub async fn get(
    _auth: AuthUser,
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Process>, AppError> {
    let process = db::processes::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound("Processo não encontrado.".to_string()))?;
    Ok(Json(process))
}

pub async fn update(
    auth: AuthUser,
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
    Json(req): Json<NewProcess>,
) -> Result<Json<Process>, AppError> {
    validate(&req)?;

    let process = db::processes::update(&state.pool, id, &req)
        .await
        .map_err(|e| match e {
            sqlx::Error::RowNotFound => {
                AppError::NotFound("Processo não encontrado.".to_string())
            }
            _ => duplicate_number_error(e, &req.process_number),
        })?;

    audit::record(
        &state.pool,
        Some(auth.user_id),
        AuditAction::Update,
        Some(process.id),
        process.table_id,
        audit::process_snapshot(AuditAction::Update, &process),
    )
    .await;

    Ok(Json(process))
}

pub async fn delete(
    auth: AuthUser,
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    // Snapshot before deletion; the row is gone afterwards.
    let process = db::processes::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound("Processo não encontrado.".to_string()))?;
    let snapshot = audit::process_snapshot(AuditAction::Delete, &process);

    db::processes::delete(&state.pool, id).await?;

    audit::record(
        &state.pool,
        Some(auth.user_id),
        AuditAction::Delete,
        None,
        process.table_id,
        snapshot,
    )
    .await;

    Ok(Json(serde_json::json!({ "message": "Processo excluído." })))
}
