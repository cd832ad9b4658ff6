use axum::extract::{Path, State};
use axum::http::HeaderMap;
use axum::Json;
use uuid::Uuid;

use crate::auth::extractor::AuthUser;
use crate::db;
use crate::error::AppError;
use crate::import;
use crate::state::SharedState;

/// Upload a spreadsheet and import its rows into the table.
///
/// Multipart with a single file field; a structured result with counts,
/// per-row errors, and the user-facing message list comes back.
pub async fn import(
    auth: AuthUser,
    State(state): State<SharedState>,
    Path(table_id): Path<Uuid>,
    headers: HeaderMap,
    body: bytes::Bytes,
) -> Result<Json<serde_json::Value>, AppError> {
    let table = db::tables::find_by_id(&state.pool, table_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Tabela não encontrada.".to_string()))?;

    let file = read_uploaded_file(&headers, body).await?;

    let result =
        import::import_processes(&state.pool, Some(auth.user_id), table.id, &file).await?;

    tracing::info!(
        "Imported {} processes into table {} ({} skipped)",
        result.imported,
        table.id,
        result.skipped
    );

    Ok(Json(serde_json::json!({
        "imported": result.imported,
        "skipped": result.skipped,
        "errors": result.errors,
        "messages": result.messages(),
    })))
}

/// Pull the first file field out of the multipart body.
async fn read_uploaded_file(headers: &HeaderMap, body: bytes::Bytes) -> Result<Vec<u8>, AppError> {
    let boundary = headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .and_then(|ct| multer::parse_boundary(ct).ok())
        .ok_or_else(|| {
            AppError::Validation("Envie o arquivo como multipart/form-data.".to_string())
        })?;

    let stream = futures_util::stream::once(async { Ok::<_, std::io::Error>(body) });
    let mut multipart = multer::Multipart::new(stream, boundary);

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Upload inválido: {e}")))?
    {
        if field.file_name().is_some() || field.name() == Some("file") {
            let data = field
                .bytes()
                .await
                .map_err(|e| AppError::Validation(format!("Falha ao ler o arquivo: {e}")))?;
            return Ok(data.to_vec());
        }
    }

    Err(AppError::Validation(
        "Nenhum arquivo encontrado no upload.".to_string(),
    ))
}
