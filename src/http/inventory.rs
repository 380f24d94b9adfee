use actix_web::{web, HttpResponse};
use serde::Deserialize;
use serde_json::json;

use super::AppState;
use crate::error::ApiError;
use crate::models::InventoryRecord;
use crate::validate::Validator;

// ============================================================================
// Inventory Handlers
// ============================================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewInventory {
    pub product_id: i64,
    pub warehouse: String,
    pub quantity: i32,
}

impl NewInventory {
    fn validate(&self) -> Result<(), Vec<crate::validate::FieldError>> {
        let mut v = Validator::new();
        v.require_min_i64("productId", self.product_id, 1)
            .require_non_empty("warehouse", &self.warehouse)
            .require_min_i32("quantity", self.quantity, 0);
        v.finish()
    }
}

/// POST /api/inventory
pub async fn create_inventory(
    state: web::Data<AppState>,
    body: web::Json<NewInventory>,
) -> Result<HttpResponse, ApiError> {
    body.validate().map_err(ApiError::Validation)?;

    sqlx::query("INSERT INTO inventory (product_id, warehouse, quantity) VALUES ($1, $2, $3)")
        .bind(body.product_id)
        .bind(&body.warehouse)
        .bind(body.quantity)
        .execute(&state.pool)
        .await
        .map_err(|e| ApiError::internal("Database insertion failed", e))?;

    Ok(HttpResponse::Ok().json(json!({ "message": "Inventory added successfully" })))
}

/// GET /api/inventory
pub async fn list_inventory(state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let inventory = sqlx::query_as::<_, InventoryRecord>(
        "SELECT inventory_id, product_id, warehouse, quantity FROM inventory ORDER BY inventory_id",
    )
    .fetch_all(&state.pool)
    .await
    .map_err(|e| ApiError::internal("Failed to fetch inventory", e))?;

    Ok(HttpResponse::Ok().json(inventory))
}

#[derive(Debug, Deserialize)]
pub struct UpdateInventoryBody {
    pub warehouse: String,
    pub quantity: i32,
}

/// PUT /api/inventory/{id}
pub async fn update_inventory(
    state: web::Data<AppState>,
    path: web::Path<i64>,
    body: web::Json<UpdateInventoryBody>,
) -> Result<HttpResponse, ApiError> {
    let mut v = Validator::new();
    v.require_non_empty("warehouse", &body.warehouse)
        .require_min_i32("quantity", body.quantity, 0);
    v.finish().map_err(ApiError::Validation)?;

    let inventory_id = path.into_inner();
    sqlx::query("UPDATE inventory SET warehouse = $1, quantity = $2 WHERE inventory_id = $3")
        .bind(&body.warehouse)
        .bind(body.quantity)
        .bind(inventory_id)
        .execute(&state.pool)
        .await
        .map_err(|e| ApiError::internal("Failed to update inventory", e))?;

    Ok(HttpResponse::Ok().json(json!({ "message": "Inventory updated successfully" })))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_inventory_allows_zero_quantity() {
        let body = NewInventory {
            product_id: 1,
            warehouse: "north".to_string(),
            quantity: 0,
        };
        assert!(body.validate().is_ok());
    }

    #[test]
    fn test_new_inventory_rejects_negative_quantity() {
        let body = NewInventory {
            product_id: 1,
            warehouse: "north".to_string(),
            quantity: -1,
        };
        let errors = body.validate().unwrap_err();
        assert_eq!(errors[0].field, "quantity");
    }

    #[test]
    fn test_new_inventory_body_is_camel_case() {
        let body: NewInventory =
            serde_json::from_str(r#"{"productId": 3, "warehouse": "east", "quantity": 10}"#)
                .unwrap();
        assert_eq!(body.product_id, 3);
    }
}
