use std::sync::Arc;

use actix_web::{web, ResponseError};
use sqlx::PgPool;

use crate::config::Config;
use crate::error::ApiError;
use crate::metrics::Metrics;
use crate::validate::FieldError;

pub mod auth;
pub mod dashboard;
pub mod health;
pub mod inventory;
pub mod orders;
pub mod products;
pub mod reports;
pub mod shipments;
pub mod suppliers;
pub mod warehouses;

// ============================================================================
// HTTP Layer - routing table and shared application state
// ============================================================================

/// Shared state injected into every handler.
pub struct AppState {
    pub pool: PgPool,
    pub config: Config,
    pub metrics: Arc<Metrics>,
}

/// The full routing table.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health::health))
        .route("/metrics", web::get().to(crate::metrics::metrics_handler))
        .service(
            web::scope("/api")
                .route("/dashboard", web::get().to(dashboard::dashboard))
                .route("/orders", web::post().to(orders::create_order))
                .route("/orders", web::get().to(orders::list_orders))
                .route("/orders/{id}", web::put().to(orders::update_order))
                .route("/products", web::post().to(products::create_product))
                .route("/products", web::get().to(products::list_products))
                .route("/inventory", web::post().to(inventory::create_inventory))
                .route("/inventory", web::get().to(inventory::list_inventory))
                .route("/inventory/{id}", web::put().to(inventory::update_inventory))
                .route("/suppliers", web::post().to(suppliers::create_supplier))
                .route("/suppliers", web::get().to(suppliers::list_suppliers))
                .route("/suppliers/{id}", web::put().to(suppliers::update_supplier))
                .route("/warehouses", web::get().to(warehouses::list_warehouses))
                .route("/warehouses/{id}", web::put().to(warehouses::update_warehouse))
                .route("/shipments", web::get().to(shipments::list_shipments))
                .route("/reports/inventory", web::get().to(reports::inventory_report))
                .route("/auth/signup", web::post().to(auth::signup))
                .route("/auth/login", web::post().to(auth::login))
                .route("/auth/logout", web::post().to(auth::logout))
                .route("/auth/me", web::get().to(auth::me)),
        );
}

/// JSON extractor config: malformed bodies come back in the same
/// `{ "errors": [...] }` shape as field validation failures.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let detail = err.to_string();
        let response =
            ApiError::Validation(vec![FieldError::new("body", detail)]).error_response();
        actix_web::error::InternalError::from_response(err, response).into()
    })
}
