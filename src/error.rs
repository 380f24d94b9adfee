use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde_json::json;

use crate::validate::FieldError;

// ============================================================================
// API Error - maps every failure to an HTTP status and JSON body
// ============================================================================
//
// Taxonomy:
// - Validation: field-level input errors, no store access attempted
// - MissingProducts: referential failure, carries the offending ids
// - BadRequest / Unauthorized: single-message client errors
// - Internal: store/transport failure; diagnostic is logged, the caller
//   only sees the generic public message
//
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("request failed validation")]
    Validation(Vec<FieldError>),

    #[error("one or more product ids do not exist")]
    MissingProducts(Vec<i64>),

    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    /// Log the underlying diagnostic and return a generic public error.
    pub fn internal(public_message: &str, err: impl std::fmt::Display) -> Self {
        tracing::error!("{}: {}", public_message, err);
        Self::Internal(public_message.to_string())
    }
}

impl From<crate::auth::AuthError> for ApiError {
    fn from(err: crate::auth::AuthError) -> Self {
        use crate::auth::AuthError;
        match err {
            AuthError::EmailTaken => ApiError::BadRequest(err.to_string()),
            AuthError::InvalidCredentials | AuthError::InvalidToken => {
                ApiError::Unauthorized(err.to_string())
            }
            AuthError::Hash => ApiError::internal("Failed to process credentials", err),
            AuthError::Store(e) => ApiError::internal("Authentication failed", e),
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::MissingProducts(_) => StatusCode::BAD_REQUEST,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match self {
            ApiError::Validation(errors) => json!({ "errors": errors }),
            ApiError::MissingProducts(ids) => json!({
                "error": "One or more productId do not exist",
                "missing_product_ids": ids,
            }),
            ApiError::BadRequest(message) => json!({ "error": message }),
            ApiError::Unauthorized(message) => json!({ "error": message }),
            ApiError::Internal(message) => json!({ "error": message }),
        };

        HttpResponse::build(self.status_code()).json(body)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_maps_to_400_with_error_list() {
        let err = ApiError::Validation(vec![FieldError::new("customerName", "must be a non-empty string")]);
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);

        let response = err.error_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_missing_products_maps_to_400() {
        let err = ApiError::MissingProducts(vec![99]);
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_internal_maps_to_500() {
        let err = ApiError::Internal("Failed to add order".to_string());
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_string(), "Failed to add order");
    }

    #[test]
    fn test_unauthorized_maps_to_401() {
        let err = ApiError::Unauthorized("Invalid or expired token".to_string());
        assert_eq!(err.status_code(), StatusCode::UNAUTHORIZED);
    }
}
