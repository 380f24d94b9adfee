use actix_web::{web, HttpResponse};

use super::AppState;
use crate::error::ApiError;
use crate::models::Shipment;

/// GET /api/shipments
pub async fn list_shipments(state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let shipments = sqlx::query_as::<_, Shipment>(
        "SELECT shipment_id, order_id, carrier, status, shipped_date \
         FROM shipments ORDER BY shipment_id",
    )
    .fetch_all(&state.pool)
    .await
    .map_err(|e| ApiError::internal("Failed to fetch shipments", e))?;

    Ok(HttpResponse::Ok().json(shipments))
}
