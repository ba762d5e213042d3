use actix_web::{get, web, HttpResponse};
use log::error;
use serde::Serialize;

use crate::model::LogEntry;
use crate::server::AppState;

const RECENT_ROW_LIMIT: usize = 5;

#[derive(Serialize)]
struct RecentRowsResponse {
    success: bool,
    last_5_rows: Vec<LogEntry>,
}

#[derive(Serialize)]
struct DiagnosticFailure {
    success: bool,
    error: String,
}

/// Checks the database by reading back the newest log rows.
#[get("/test-db")]
pub async fn test_db(state: web::Data<AppState>) -> HttpResponse {
    match state.store.recent(RECENT_ROW_LIMIT).await {
        Ok(rows) => HttpResponse::Ok().json(RecentRowsResponse {
            success: true,
            last_5_rows: rows,
        }),
        Err(e) => {
            error!("Failed to read recipe_logs: {}", e);
            HttpResponse::InternalServerError().json(DiagnosticFailure {
                success: false,
                error: e.to_string(),
            })
        }
    }
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(test_db);
}
