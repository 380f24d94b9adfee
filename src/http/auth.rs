use actix_web::{web, HttpRequest, HttpResponse};
use serde::Deserialize;
use serde_json::json;

use super::AppState;
use crate::auth::{bearer_token, SessionStore};
use crate::error::ApiError;
use crate::validate::{FieldError, Validator};

// ============================================================================
// Auth Handlers - signup, login, logout, me
// ============================================================================

const MIN_PASSWORD_LENGTH: usize = 8;

#[derive(Debug, Deserialize)]
pub struct SignupBody {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl SignupBody {
    fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut v = Validator::new();
        v.require_non_empty("name", &self.name);
        if !self.email.contains('@') {
            v.push(FieldError::new("email", "must be a valid email address"));
        }
        if self.password.len() < MIN_PASSWORD_LENGTH {
            v.push(FieldError::new(
                "password",
                format!("must be at least {} characters", MIN_PASSWORD_LENGTH),
            ));
        }
        v.finish()
    }
}

/// POST /api/auth/signup
pub async fn signup(
    state: web::Data<AppState>,
    body: web::Json<SignupBody>,
) -> Result<HttpResponse, ApiError> {
    body.validate().map_err(ApiError::Validation)?;

    let store = SessionStore::new(state.pool.clone());
    store.signup(&body.name, &body.email, &body.password).await?;

    Ok(HttpResponse::Ok().json(json!({ "message": "Signup successful" })))
}

#[derive(Debug, Deserialize)]
pub struct LoginBody {
    pub email: String,
    pub password: String,
}

/// POST /api/auth/login
pub async fn login(
    state: web::Data<AppState>,
    body: web::Json<LoginBody>,
) -> Result<HttpResponse, ApiError> {
    let store = SessionStore::new(state.pool.clone());
    let session = store.login(&body.email, &body.password).await?;

    Ok(HttpResponse::Ok().json(json!({
        "token": session.token,
        "expires_at": session.expires_at,
    })))
}

/// POST /api/auth/logout
pub async fn logout(
    state: web::Data<AppState>,
    request: HttpRequest,
) -> Result<HttpResponse, ApiError> {
    let token = token_from_request(&request)?;
    let store = SessionStore::new(state.pool.clone());
    store.logout(token).await?;

    Ok(HttpResponse::Ok().json(json!({ "message": "Logged out" })))
}

/// GET /api/auth/me
pub async fn me(
    state: web::Data<AppState>,
    request: HttpRequest,
) -> Result<HttpResponse, ApiError> {
    let token = token_from_request(&request)?;
    let store = SessionStore::new(state.pool.clone());
    let user = store.verify(token).await?;

    Ok(HttpResponse::Ok().json(user))
}

fn token_from_request(request: &HttpRequest) -> Result<uuid::Uuid, ApiError> {
    let header = request
        .headers()
        .get("Authorization")
        .and_then(|value| value.to_str().ok());

    bearer_token(header).ok_or_else(|| ApiError::Unauthorized("Missing bearer token".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signup_body_rejects_short_password() {
        let body = SignupBody {
            name: "Alice".to_string(),
            email: "alice@example.com".to_string(),
            password: "short".to_string(),
        };
        let errors = body.validate().unwrap_err();
        assert_eq!(errors[0].field, "password");
    }

    #[test]
    fn test_signup_body_rejects_bad_email() {
        let body = SignupBody {
            name: "Alice".to_string(),
            email: "not-an-email".to_string(),
            password: "long-enough-password".to_string(),
        };
        let errors = body.validate().unwrap_err();
        assert_eq!(errors[0].field, "email");
    }

    #[test]
    fn test_signup_body_accepts_valid_input() {
        let body = SignupBody {
            name: "Alice".to_string(),
            email: "alice@example.com".to_string(),
            password: "long-enough-password".to_string(),
        };
        assert!(body.validate().is_ok());
    }
}
