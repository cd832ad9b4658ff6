use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;

use crate::auth::extractor::AuthUser;
use crate::db;
use crate::error::AppError;
use crate::models::AuditEntry;
use crate::state::SharedState;

#[derive(Deserialize)]
pub struct ListQuery {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// Read-only audit trail, newest first. There is deliberately no write
/// surface here beyond the recorder itself.
pub async fn list(
    auth: AuthUser,
    State(state): State<SharedState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<AuditEntry>>, AppError> {
    auth.require_admin()?;

    let limit = query.limit.unwrap_or(50).clamp(1, 200);
    let offset = query.offset.unwrap_or(0).max(0);

    let entries = db::audit::list(&state.pool, limit, offset).await?;
    Ok(Json(entries))
}
