use crate::validate::FieldError;

// ============================================================================
// Order Placement Errors
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum PlaceOrderError {
    /// The request shape failed field validation; the store was not touched.
    #[error("order request failed validation")]
    Invalid(Vec<FieldError>),

    /// At least one referenced product does not exist. Carries the exact set
    /// of unknown ids so the caller can correct the request.
    #[error("unknown product ids: {0:?}")]
    MissingProducts(Vec<i64>),

    /// Store or transport failure; the transaction was rolled back.
    #[error("store error during order placement")]
    Store(#[from] sqlx::Error),
}
