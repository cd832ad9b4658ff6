pub mod audit;
pub mod auth;
pub mod export;
pub mod import;
pub mod processes;
pub mod tables;

use axum::routing::{get, post};
use axum::Router;

use crate::state::SharedState;

pub fn api_routes() -> Router<SharedState> {
    Router::new()
        // Auth
        .route("/api/v1/auth/register", post(auth::register))
        .route("/api/v1/auth/login", post(auth::login))
        .route("/api/v1/auth/logout", post(auth::logout))
        .route("/api/v1/auth/change-password", post(auth::change_password))
        .route(
            "/api/v1/users/{id}/reset-password",
            post(auth::reset_password),
        )
        // Tables
        .route("/api/v1/tables", get(tables::list).post(tables::create))
        .route(
            "/api/v1/tables/{id}",
            get(tables::get)
                .put(tables::update)
                .delete(tables::delete),
        )
        // Processes
        .route(
            "/api/v1/tables/{id}/processes",
            get(processes::list).post(processes::create),
        )
        .route(
            "/api/v1/processes/{id}",
            get(processes::get)
                .put(processes::update)
                .delete(processes::delete),
        )
        // Spreadsheet import/export
        .route("/api/v1/tables/{id}/import", post(import::import))
        .route("/api/v1/tables/{id}/export", get(export::export))
        // Audit trail (read-only)
        .route("/api/v1/audit", get(audit::list))
}
