use axum::extract::{Path, Query, State};
use axum::http::header;
use axum::response::IntoResponse;
use uuid::Uuid;

use crate::auth::extractor::AuthUser;
use crate::db;
use crate::error::AppError;
use crate::export::{self, ExportQuery};
use crate::state::SharedState;

const XLSX_MIME: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Download the table's processes as xlsx (default), csv, or pdf.
pub async fn export(
    _auth: AuthUser,
    State(state): State<SharedState>,
    Path(table_id): Path<Uuid>,
    Query(query): Query<ExportQuery>,
) -> Result<impl IntoResponse, AppError> {
    let table = db::tables::find_by_id(&state.pool, table_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Tabela não encontrada.".to_string()))?;

    let mut processes = db::processes::list(
        &state.pool,
        &db::processes::ListParams {
            table_id,
            search: query.q.clone(),
            sort_by: None,
            sort_order: None,
        },
    )
    .await?;

    export::sort_processes(
        &mut processes,
        query.sort.as_deref(),
        query.direction.as_deref(),
    );

    let (bytes, mime, extension) = match query.format.as_deref().unwrap_or("xlsx") {
        "csv" => (
            export::csv::render(&processes, &table.name, &query),
            "text/csv; charset=utf-8",
            "csv",
        ),
        "pdf" => (
            export::pdf::render(&processes, &table.name, &query)
                .map_err(AppError::Internal)?,
            "application/pdf",
            "pdf",
        ),
        _ => (
            export::xlsx::render(&processes, &table.name, &query)
                .map_err(|e| AppError::Internal(e.to_string()))?,
            XLSX_MIME,
            "xlsx",
        ),
    };

    let filename = export::attachment_filename(&table.name, extension);
    Ok((
        [
            (header::CONTENT_TYPE, mime.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        bytes,
    ))
}
