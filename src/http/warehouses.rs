use actix_web::{web, HttpResponse};
use serde::Deserialize;
use serde_json::json;

use super::AppState;
use crate::error::ApiError;
use crate::models::WarehouseSummary;

// ============================================================================
// Warehouse Handlers
// ============================================================================

/// GET /api/warehouses - inventory grouped by warehouse name.
pub async fn list_warehouses(state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let warehouses = sqlx::query_as::<_, WarehouseSummary>(
        "SELECT warehouse, COUNT(*)::BIGINT AS item_count FROM inventory \
         GROUP BY warehouse ORDER BY warehouse",
    )
    .fetch_all(&state.pool)
    .await
    .map_err(|e| ApiError::internal("Failed to fetch warehouses", e))?;

    Ok(HttpResponse::Ok().json(warehouses))
}

#[derive(Debug, Deserialize)]
pub struct UpdateWarehouseBody {
    pub name: String,
    pub location: Option<String>,
}

/// PUT /api/warehouses/{id}
pub async fn update_warehouse(
    state: web::Data<AppState>,
    path: web::Path<i64>,
    body: web::Json<UpdateWarehouseBody>,
) -> Result<HttpResponse, ApiError> {
    let warehouse_id = path.into_inner();

    sqlx::query("UPDATE warehouses SET name = $1, location = $2 WHERE warehouse_id = $3")
        .bind(&body.name)
        .bind(&body.location)
        .bind(warehouse_id)
        .execute(&state.pool)
        .await
        .map_err(|e| ApiError::internal("Failed to update warehouse", e))?;

    Ok(HttpResponse::Ok().json(json!({ "message": "Warehouse updated successfully" })))
}
