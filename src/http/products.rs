use actix_web::{web, HttpResponse};
use serde::Deserialize;
use serde_json::json;

use super::AppState;
use crate::error::ApiError;
use crate::models::Product;
use crate::validate::Validator;

// ============================================================================
// Product Handlers
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct NewProduct {
    pub name: String,
    pub description: Option<String>,
    pub cost_price: f64,
    pub supplier_id: Option<i64>,
}

impl NewProduct {
    fn validate(&self) -> Result<(), Vec<crate::validate::FieldError>> {
        let mut v = Validator::new();
        v.require_non_empty("name", &self.name)
            .require_gt_f64("cost_price", self.cost_price, 0.0);
        if let Some(supplier_id) = self.supplier_id {
            v.require_min_i64("supplier_id", supplier_id, 1);
        }
        v.finish()
    }
}

/// POST /api/products
///
/// Supplier policy: a referenced supplier must exist; whether a supplier is
/// required at all is configured per deployment (REQUIRE_SUPPLIER_ID).
pub async fn create_product(
    state: web::Data<AppState>,
    body: web::Json<NewProduct>,
) -> Result<HttpResponse, ApiError> {
    body.validate().map_err(ApiError::Validation)?;

    if state.config.require_supplier_id && body.supplier_id.is_none() {
        return Err(ApiError::BadRequest(
            "supplier_id is required by server policy".to_string(),
        ));
    }

    if let Some(supplier_id) = body.supplier_id {
        let exists: Option<i32> =
            sqlx::query_scalar("SELECT 1 FROM suppliers WHERE supplier_id = $1 LIMIT 1")
                .bind(supplier_id)
                .fetch_optional(&state.pool)
                .await
                .map_err(|e| ApiError::internal("Failed to add product", e))?;
        if exists.is_none() {
            return Err(ApiError::BadRequest(
                "Invalid supplier_id. Supplier not found.".to_string(),
            ));
        }
    }

    sqlx::query(
        "INSERT INTO products (name, description, cost_price, supplier_id) VALUES ($1, $2, $3, $4)",
    )
    .bind(&body.name)
    .bind(&body.description)
    .bind(body.cost_price)
    .bind(body.supplier_id)
    .execute(&state.pool)
    .await
    .map_err(|e| ApiError::internal("Failed to add product", e))?;

    Ok(HttpResponse::Ok().json(json!({ "message": "Product added successfully" })))
}

/// GET /api/products
pub async fn list_products(state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let products = sqlx::query_as::<_, Product>(
        "SELECT product_id, name, description, cost_price, supplier_id \
         FROM products ORDER BY product_id",
    )
    .fetch_all(&state.pool)
    .await
    .map_err(|e| ApiError::internal("Failed to fetch products", e))?;

    Ok(HttpResponse::Ok().json(products))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_product_requires_positive_price() {
        let body = NewProduct {
            name: "Widget".to_string(),
            description: None,
            cost_price: 0.0,
            supplier_id: None,
        };
        let errors = body.validate().unwrap_err();
        assert_eq!(errors[0].field, "cost_price");
    }

    #[test]
    fn test_new_product_optional_supplier_checked_when_present() {
        let body = NewProduct {
            name: "Widget".to_string(),
            description: None,
            cost_price: 9.99,
            supplier_id: Some(0),
        };
        let errors = body.validate().unwrap_err();
        assert_eq!(errors[0].field, "supplier_id");
    }

    #[test]
    fn test_new_product_valid_without_supplier() {
        let body = NewProduct {
            name: "Widget".to_string(),
            description: Some("A fine widget".to_string()),
            cost_price: 9.99,
            supplier_id: None,
        };
        assert!(body.validate().is_ok());
    }
}
