use std::time::Instant;

use actix_web::{web, HttpResponse};
use serde::Deserialize;
use serde_json::json;

use super::AppState;
use crate::domain::order::{OrderPlacement, OrderRequest, PlaceOrderError};
use crate::error::ApiError;
use crate::models::Order;

// ============================================================================
// Order Handlers
// ============================================================================

/// POST /api/orders - the order placement transaction.
pub async fn create_order(
    state: web::Data<AppState>,
    body: web::Json<OrderRequest>,
) -> Result<HttpResponse, ApiError> {
    let started = Instant::now();
    let placement = OrderPlacement::new(state.pool.clone());
    let result = placement.place(&body).await;
    let duration = started.elapsed().as_secs_f64();

    match result {
        Ok(order_id) => {
            state.metrics.record_order_placement(duration, None);
            Ok(HttpResponse::Ok().json(json!({
                "message": "Order and details added successfully",
                "order_id": order_id,
            })))
        }
        Err(PlaceOrderError::Invalid(errors)) => {
            state.metrics.record_order_placement(duration, Some("validation"));
            Err(ApiError::Validation(errors))
        }
        Err(PlaceOrderError::MissingProducts(ids)) => {
            state.metrics.record_order_placement(duration, Some("missing_products"));
            Err(ApiError::MissingProducts(ids))
        }
        Err(PlaceOrderError::Store(e)) => {
            state.metrics.record_order_placement(duration, Some("store"));
            Err(ApiError::internal("Failed to add order", e))
        }
    }
}

/// GET /api/orders
pub async fn list_orders(state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let orders = sqlx::query_as::<_, Order>(
        "SELECT order_id, customer_name, order_date, status FROM orders ORDER BY order_id",
    )
    .fetch_all(&state.pool)
    .await
    .map_err(|e| ApiError::internal("Failed to fetch orders", e))?;

    Ok(HttpResponse::Ok().json(orders))
}

#[derive(Debug, Deserialize)]
pub struct UpdateOrderBody {
    pub customer_name: String,
    pub status: String,
}

/// PUT /api/orders/{id}
pub async fn update_order(
    state: web::Data<AppState>,
    path: web::Path<i64>,
    body: web::Json<UpdateOrderBody>,
) -> Result<HttpResponse, ApiError> {
    let order_id = path.into_inner();

    sqlx::query("UPDATE orders SET customer_name = $1, status = $2 WHERE order_id = $3")
        .bind(&body.customer_name)
        .bind(&body.status)
        .bind(order_id)
        .execute(&state.pool)
        .await
        .map_err(|e| ApiError::internal("Failed to update order", e))?;

    Ok(HttpResponse::Ok().json(json!({ "message": "Order updated successfully" })))
}
