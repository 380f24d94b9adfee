use actix_web::{web, HttpResponse, Responder};
use serde_json::json;

use super::AppState;
use crate::db;

/// GET /health - liveness plus a database round trip.
pub async fn health(state: web::Data<AppState>) -> impl Responder {
    match db::ping(&state.pool).await {
        Ok(()) => HttpResponse::Ok().json(json!({ "status": "ok", "db": true })),
        Err(e) => {
            tracing::warn!("Health check failed: {}", e);
            HttpResponse::ServiceUnavailable().json(json!({
                "status": "degraded",
                "db": false,
                "error": e.to_string(),
            }))
        }
    }
}
