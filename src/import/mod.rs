//! Spreadsheet import pipeline.
//!
//! Flow: parse the workbook into rows of [`sheet::RawCell`], resolve the
//! column layout from the header row, parse each data row with a pure
//! function, and insert the survivors one by one. A row failure never
//! aborts the batch; an unreadable workbook aborts before any write.

pub mod columns;
pub mod row;
pub mod sheet;

use serde::Serialize;
use sqlx::PgPool;
use uuid::Uuid;

use crate::audit::{self, AuditAction};
use crate::db;
use crate::error::AppError;
use crate::import::columns::ColumnMap;
use crate::import::row::RowOutcome;

#[derive(Debug, Clone, Serialize)]
pub struct RowError {
    pub row: usize,
    pub message: String,
}

#[derive(Debug, Default, Serialize)]
pub struct ImportResult {
    pub imported: usize,
    pub skipped: usize,
    pub errors: Vec<RowError>,
}

impl ImportResult {
    /// User-facing summary: counts, then at most two row errors spelled
    /// out, then a count of the remaining ones.
    pub fn messages(&self) -> Vec<String> {
        let mut messages = vec![format!("{} processos importados.", self.imported)];
        if self.skipped > 0 {
            messages.push(format!("{} linhas ignoradas.", self.skipped));
        }
        for err in self.errors.iter().take(2) {
            messages.push(err.message.clone());
        }
        if self.errors.len() > 2 {
            messages.push(format!("Mais {} erros encontrados.", self.errors.len() - 2));
        }
        messages
    }
}

/// Import every data row of `bytes` into `table_id`.
///
/// Duplicate process numbers are skipped with a friendly per-row message;
/// the unique constraint on `processes.process_number` is the sole
/// duplicate guard, so concurrent imports cannot slip a copy through.
pub async fn import_processes(
    pool: &PgPool,
    actor_id: Option<Uuid>,
    table_id: Uuid,
    bytes: &[u8],
) -> Result<ImportResult, AppError> {
    let rows = sheet::read_rows(bytes).map_err(|e| AppError::Parse(e.to_string()))?;

    let mut iter = rows.into_iter();
    let header = iter.next().unwrap_or_default();
    let cols = ColumnMap::resolve(&header);

    let mut result = ImportResult::default();

    // Row 1 is the header; data starts at row 2.
    for (index, cells) in iter.enumerate() {
        let row_number = index + 2;

        let parsed = match row::parse_row(&cells, &cols) {
            RowOutcome::Blank => continue,
            RowOutcome::Invalid(message) => {
                result.skipped += 1;
                result.errors.push(RowError {
                    row: row_number,
                    message: format!("Linha {row_number}: {message}"),
                });
                continue;
            }
            RowOutcome::Parsed(parsed) => parsed,
        };

        match db::processes::create(pool, Some(table_id), &parsed).await {
            Ok(process) => {
                result.imported += 1;
                audit::record(
                    pool,
                    actor_id,
                    AuditAction::Create,
                    Some(process.id),
                    Some(table_id),
                    audit::process_snapshot(AuditAction::Create, &process),
                )
                .await;
            }
            Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
                result.skipped += 1;
                result.errors.push(RowError {
                    row: row_number,
                    message: format!(
                        "Linha {row_number}: Processo com número '{}' já existe no sistema.",
                        parsed.process_number
                    ),
                });
            }
            Err(e) => {
                tracing::debug!("Import row {row_number} failed: {e}");
                result.skipped += 1;
                result.errors.push(RowError {
                    row: row_number,
                    message: format!("Linha {row_number}: {e}"),
                });
            }
        }
    }

    Ok(result)
}
