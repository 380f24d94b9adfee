use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::validate::{FieldError, Validator};

// ============================================================================
// Order Value Objects
// ============================================================================

/// One requested line item. Duplicate product ids are legal and preserved:
/// the same product listed twice yields two detail rows.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrderLineItem {
    pub product_id: i64,
    pub quantity: i32,
}

/// A candidate order as submitted by the client, prior to any store access.
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct OrderRequest {
    pub customer_name: String,
    pub order_date: NaiveDate,
    pub status: String,
    pub products: Vec<OrderLineItem>,
}

impl OrderRequest {
    /// Structural validation: required fields, minimums, non-empty item list.
    /// Field names in the error list mirror the request body keys.
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut v = Validator::new();
        v.require_non_empty("customerName", &self.customer_name)
            .require_non_empty("status", &self.status)
            .require_min_len("products", &self.products, 1);

        for (index, item) in self.products.iter().enumerate() {
            if item.product_id < 1 {
                v.push(FieldError::new(
                    format!("products[{}].productId", index),
                    "must be an integer >= 1",
                ));
            }
            if item.quantity < 1 {
                v.push(FieldError::new(
                    format!("products[{}].quantity", index),
                    "must be an integer >= 1",
                ));
            }
        }

        v.finish()
    }

    /// The distinct set of product ids referenced by this order, in first-seen
    /// order.
    pub fn distinct_product_ids(&self) -> Vec<i64> {
        let mut seen = std::collections::HashSet::new();
        self.products
            .iter()
            .map(|item| item.product_id)
            .filter(|id| seen.insert(*id))
            .collect()
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> OrderRequest {
        OrderRequest {
            customer_name: "Alice".to_string(),
            order_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            status: "pending".to_string(),
            products: vec![
                OrderLineItem { product_id: 1, quantity: 2 },
                OrderLineItem { product_id: 2, quantity: 1 },
            ],
        }
    }

    #[test]
    fn test_valid_request_passes() {
        assert!(valid_request().validate().is_ok());
    }

    #[test]
    fn test_empty_products_rejected() {
        let mut request = valid_request();
        request.products.clear();
        let errors = request.validate().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "products");
    }

    #[test]
    fn test_zero_quantity_rejected_with_indexed_field() {
        let mut request = valid_request();
        request.products[1].quantity = 0;
        let errors = request.validate().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "products[1].quantity");
    }

    #[test]
    fn test_nonpositive_product_id_rejected() {
        let mut request = valid_request();
        request.products[0].product_id = 0;
        let errors = request.validate().unwrap_err();
        assert_eq!(errors[0].field, "products[0].productId");
    }

    #[test]
    fn test_blank_customer_name_rejected() {
        let mut request = valid_request();
        request.customer_name = "  ".to_string();
        let errors = request.validate().unwrap_err();
        assert_eq!(errors[0].field, "customerName");
    }

    #[test]
    fn test_multiple_failures_all_reported() {
        let request = OrderRequest {
            customer_name: String::new(),
            order_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            status: String::new(),
            products: vec![OrderLineItem { product_id: 0, quantity: 0 }],
        };
        let errors = request.validate().unwrap_err();
        assert_eq!(errors.len(), 4);
    }

    #[test]
    fn test_distinct_ids_preserve_first_seen_order() {
        let mut request = valid_request();
        request.products.push(OrderLineItem { product_id: 1, quantity: 3 });
        assert_eq!(request.distinct_product_ids(), vec![1, 2]);
    }

    #[test]
    fn test_request_deserializes_camel_case_body() {
        let body = r#"{
            "customerName": "Alice",
            "orderDate": "2024-01-01",
            "status": "pending",
            "products": [{"productId": 1, "quantity": 2}]
        }"#;

        let request: OrderRequest = serde_json::from_str(body).unwrap();
        assert_eq!(request.customer_name, "Alice");
        assert_eq!(request.products[0].product_id, 1);
        assert_eq!(request.order_date, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
    }

    #[test]
    fn test_bad_date_fails_deserialization() {
        let body = r#"{
            "customerName": "Alice",
            "orderDate": "not-a-date",
            "status": "pending",
            "products": [{"productId": 1, "quantity": 2}]
        }"#;

        assert!(serde_json::from_str::<OrderRequest>(body).is_err());
    }
}
