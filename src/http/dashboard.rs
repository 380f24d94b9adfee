use actix_web::{web, HttpResponse};
use chrono::NaiveDate;
use serde::Serialize;
use sqlx::{FromRow, PgPool};

use super::AppState;
use crate::error::ApiError;

// ============================================================================
// Dashboard Handler - composition of aggregate queries into one response
// ============================================================================

#[derive(Debug, Serialize, FromRow)]
pub struct SupplierSales {
    pub supplier_id: i64,
    pub total_sales: i64,
}

#[derive(Debug, Serialize, FromRow)]
pub struct TopProduct {
    pub name: String,
    pub total_sales: i64,
}

#[derive(Debug, Serialize, FromRow)]
pub struct TurnoverMonth {
    pub month: String,
    pub quantity: i64,
}

#[derive(Debug, Serialize, FromRow)]
pub struct DailyOrders {
    pub day: NaiveDate,
    pub orders: i64,
    pub shipments: i64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardResponse {
    pub total_orders: i64,
    pub inventory_value: f64,
    pub pending_shipments: i64,
    pub supplier_performance: Vec<SupplierSales>,
    pub top_supplier: Option<TopProduct>,
    pub inventory_turnover: Vec<TurnoverMonth>,
    pub orders_vs_shipments: Vec<DailyOrders>,
}

/// GET /api/dashboard
pub async fn dashboard(state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let response = build_dashboard(&state.pool)
        .await
        .map_err(|e| ApiError::internal("Internal server error", e))?;

    Ok(HttpResponse::Ok().json(response))
}

async fn build_dashboard(pool: &PgPool) -> Result<DashboardResponse, sqlx::Error> {
    let total_orders: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM orders")
        .fetch_one(pool)
        .await?;

    let inventory_value: f64 = sqlx::query_scalar(
        "SELECT COALESCE(SUM(i.quantity * p.cost_price), 0)::DOUBLE PRECISION \
         FROM inventory i JOIN products p ON i.product_id = p.product_id",
    )
    .fetch_one(pool)
    .await?;

    let pending_shipments: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM shipments WHERE status IN ('pending', 'processing')",
    )
    .fetch_one(pool)
    .await?;

    let supplier_performance = sqlx::query_as::<_, SupplierSales>(
        "SELECT p.supplier_id, SUM(od.quantity)::BIGINT AS total_sales \
         FROM order_details od JOIN products p ON od.product_id = p.product_id \
         WHERE p.supplier_id IS NOT NULL \
         GROUP BY p.supplier_id ORDER BY p.supplier_id",
    )
    .fetch_all(pool)
    .await?;

    let top_supplier = sqlx::query_as::<_, TopProduct>(
        "SELECT p.name, SUM(od.quantity)::BIGINT AS total_sales \
         FROM order_details od JOIN products p ON od.product_id = p.product_id \
         GROUP BY p.name ORDER BY total_sales DESC LIMIT 1",
    )
    .fetch_optional(pool)
    .await?;

    let inventory_turnover = sqlx::query_as::<_, TurnoverMonth>(
        "SELECT to_char(o.order_date, 'Mon') AS month, SUM(od.quantity)::BIGINT AS quantity \
         FROM orders o JOIN order_details od ON o.order_id = od.order_id \
         WHERE o.order_date >= CURRENT_DATE - INTERVAL '5 months' \
         GROUP BY month ORDER BY month",
    )
    .fetch_all(pool)
    .await?;

    // Shipments column is fixed at zero until a shipments-per-day feed
    // exists; the response shape already carries the field.
    let orders_vs_shipments = sqlx::query_as::<_, DailyOrders>(
        "SELECT o.order_date AS day, COUNT(*)::BIGINT AS orders, 0::BIGINT AS shipments \
         FROM orders o GROUP BY o.order_date ORDER BY day DESC LIMIT 5",
    )
    .fetch_all(pool)
    .await?;

    Ok(DashboardResponse {
        total_orders,
        inventory_value,
        pending_shipments,
        supplier_performance,
        top_supplier,
        inventory_turnover,
        orders_vs_shipments,
    })
}
