use sqlx::PgPool;

use super::errors::PlaceOrderError;
use super::value_objects::OrderRequest;

// ============================================================================
// Order Placement - the one real transaction in the service
// ============================================================================
//
// Protocol:
// 1. Structural validation (no store access on failure)
// 2. Begin transaction
// 3. Query which of the requested product ids exist
// 4. Requested minus existing non-empty -> rollback, report the missing ids
// 5. Insert the order header, take the generated id
// 6. Insert one detail row per input item (duplicates preserved)
// 7. Commit
//
// The sqlx transaction guard rolls back on drop, so every early return and
// every `?` on steps 3-6 leaves zero persisted rows. The pooled connection
// is returned to the pool on all exit paths. No retries: transient store
// errors surface as PlaceOrderError::Store.
//
// ============================================================================

pub struct OrderPlacement {
    pool: PgPool,
}

impl OrderPlacement {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Atomically persist an order header plus its line items.
    /// Returns the generated order id.
    pub async fn place(&self, request: &OrderRequest) -> Result<i64, PlaceOrderError> {
        request.validate().map_err(PlaceOrderError::Invalid)?;

        let mut tx = self.pool.begin().await?;

        let requested = request.distinct_product_ids();
        let existing: Vec<i64> = sqlx::query_scalar(
            "SELECT product_id FROM products WHERE product_id = ANY($1)",
        )
        .bind(&requested)
        .fetch_all(&mut *tx)
        .await?;

        let missing = missing_product_ids(&requested, &existing);
        if !missing.is_empty() {
            tx.rollback().await?;
            return Err(PlaceOrderError::MissingProducts(missing));
        }

        let order_id: i64 = sqlx::query_scalar(
            "INSERT INTO orders (customer_name, order_date, status) \
             VALUES ($1, $2, $3) RETURNING order_id",
        )
        .bind(&request.customer_name)
        .bind(request.order_date)
        .bind(&request.status)
        .fetch_one(&mut *tx)
        .await?;

        for item in &request.products {
            sqlx::query(
                "INSERT INTO order_details (order_id, product_id, quantity) \
                 VALUES ($1, $2, $3)",
            )
            .bind(order_id)
            .bind(item.product_id)
            .bind(item.quantity)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        tracing::info!(
            order_id,
            customer = %request.customer_name,
            items = request.products.len(),
            "Order placed"
        );

        Ok(order_id)
    }
}

/// The set difference requested − existing, preserving the requested order.
fn missing_product_ids(requested: &[i64], existing: &[i64]) -> Vec<i64> {
    let existing: std::collections::HashSet<i64> = existing.iter().copied().collect();
    requested
        .iter()
        .copied()
        .filter(|id| !existing.contains(id))
        .collect()
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_ids_empty_when_all_exist() {
        assert!(missing_product_ids(&[1, 2], &[1, 2, 3]).is_empty());
    }

    #[test]
    fn test_missing_ids_reports_exact_difference() {
        assert_eq!(missing_product_ids(&[1, 99], &[1]), vec![99]);
    }

    #[test]
    fn test_missing_ids_preserve_requested_order() {
        assert_eq!(missing_product_ids(&[7, 3, 5], &[3]), vec![7, 5]);
    }

    #[test]
    fn test_missing_ids_all_missing_when_store_empty() {
        assert_eq!(missing_product_ids(&[1, 2], &[]), vec![1, 2]);
    }

    // The transactional paths need a live Postgres and are integration-test
    // territory:
    // - place() persists exactly one order row and N detail rows on success
    // - missing products roll back with zero persisted rows
    // - a store error after the existence check rolls back and releases the
    //   connection
    // - two identical placements produce two distinct orders
}
