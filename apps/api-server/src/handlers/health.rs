//! Liveness endpoint.

use actix_web::{HttpResponse, web};
use serde::Serialize;

use crate::state::{AppState, Backends};

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub backends: Backends,
    pub timestamp: String,
}

/// GET /api/health
///
/// Reports liveness plus the storage, cache, and summarizer backends the
/// server was wired with at startup, so a dev instance running on
/// in-memory fallbacks is distinguishable from a configured deployment.
pub async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        backends: state.backends,
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}
