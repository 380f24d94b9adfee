use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// ============================================================================
// Domain Models - rows as stored, serialized straight to JSON
// ============================================================================

#[derive(Serialize, Deserialize, Clone, Debug, FromRow)]
pub struct Product {
    pub product_id: i64,
    pub name: String,
    pub description: Option<String>,
    pub cost_price: f64,
    pub supplier_id: Option<i64>,
}

#[derive(Serialize, Deserialize, Clone, Debug, FromRow)]
pub struct InventoryRecord {
    pub inventory_id: i64,
    pub product_id: i64,
    pub warehouse: String,
    pub quantity: i32,
}

#[derive(Serialize, Deserialize, Clone, Debug, FromRow)]
pub struct Order {
    pub order_id: i64,
    pub customer_name: String,
    pub order_date: NaiveDate,
    pub status: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, FromRow)]
pub struct Supplier {
    pub supplier_id: i64,
    pub name: String,
    pub contact_info: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, FromRow)]
pub struct Shipment {
    pub shipment_id: i64,
    pub order_id: Option<i64>,
    pub carrier: Option<String>,
    pub status: String,
    pub shipped_date: Option<NaiveDate>,
}

/// One row of the `GET /api/warehouses` grouping: inventory rows per
/// warehouse name.
#[derive(Serialize, Deserialize, Clone, Debug, FromRow)]
pub struct WarehouseSummary {
    pub warehouse: String,
    pub item_count: i64,
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_serializes_date_as_iso8601() {
        let order = Order {
            order_id: 1,
            customer_name: "Alice".to_string(),
            order_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            status: "pending".to_string(),
        };

        let json = serde_json::to_value(&order).unwrap();
        assert_eq!(json["order_date"], "2024-01-01");
        assert_eq!(json["customer_name"], "Alice");
    }

    #[test]
    fn test_product_roundtrip() {
        let product = Product {
            product_id: 7,
            name: "Widget".to_string(),
            description: None,
            cost_price: 12.5,
            supplier_id: Some(3),
        };

        let json = serde_json::to_string(&product).unwrap();
        let back: Product = serde_json::from_str(&json).unwrap();
        assert_eq!(back.product_id, 7);
        assert_eq!(back.supplier_id, Some(3));
    }

    #[test]
    fn test_shipment_optional_fields_serialize_as_null() {
        let shipment = Shipment {
            shipment_id: 1,
            order_id: None,
            carrier: None,
            status: "pending".to_string(),
            shipped_date: None,
        };

        let json = serde_json::to_value(&shipment).unwrap();
        assert!(json["order_id"].is_null());
        assert!(json["shipped_date"].is_null());
    }
}
