use actix_web::{web, HttpResponse};
use serde::Deserialize;
use serde_json::json;

use super::AppState;
use crate::error::ApiError;
use crate::models::Supplier;
use crate::validate::Validator;

// ============================================================================
// Supplier Handlers
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct SupplierBody {
    pub name: String,
    pub contact_info: Option<String>,
}

/// POST /api/suppliers
pub async fn create_supplier(
    state: web::Data<AppState>,
    body: web::Json<SupplierBody>,
) -> Result<HttpResponse, ApiError> {
    sqlx::query("INSERT INTO suppliers (name, contact_info) VALUES ($1, $2)")
        .bind(&body.name)
        .bind(&body.contact_info)
        .execute(&state.pool)
        .await
        .map_err(|e| ApiError::internal("Failed to add supplier", e))?;

    Ok(HttpResponse::Ok().json(json!({ "message": "Supplier added successfully" })))
}

/// GET /api/suppliers
pub async fn list_suppliers(state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let suppliers = sqlx::query_as::<_, Supplier>(
        "SELECT supplier_id, name, contact_info FROM suppliers ORDER BY supplier_id",
    )
    .fetch_all(&state.pool)
    .await
    .map_err(|e| ApiError::internal("Failed to fetch suppliers", e))?;

    Ok(HttpResponse::Ok().json(suppliers))
}

#[derive(Debug, Deserialize)]
pub struct UpdateSupplierBody {
    pub name: String,
    pub contact_info: String,
}

/// PUT /api/suppliers/{id}
pub async fn update_supplier(
    state: web::Data<AppState>,
    path: web::Path<i64>,
    body: web::Json<UpdateSupplierBody>,
) -> Result<HttpResponse, ApiError> {
    let mut v = Validator::new();
    v.require_non_empty("name", &body.name)
        .require_non_empty("contact_info", &body.contact_info);
    v.finish().map_err(ApiError::Validation)?;

    let supplier_id = path.into_inner();
    sqlx::query("UPDATE suppliers SET name = $1, contact_info = $2 WHERE supplier_id = $3")
        .bind(&body.name)
        .bind(&body.contact_info)
        .bind(supplier_id)
        .execute(&state.pool)
        .await
        .map_err(|e| ApiError::internal("Failed to update supplier", e))?;

    Ok(HttpResponse::Ok().json(json!({ "message": "Supplier updated successfully" })))
}
