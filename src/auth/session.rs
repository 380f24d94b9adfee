use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use sqlx::PgPool;
use uuid::Uuid;

use super::crypto;
use super::errors::AuthError;

// ============================================================================
// Session Store - opaque tokens persisted alongside the business data
// ============================================================================

const SESSION_TTL_HOURS: i64 = 24;

/// A session freshly minted by a successful login.
#[derive(Debug, Clone, Serialize)]
pub struct IssuedSession {
    pub token: Uuid,
    pub expires_at: DateTime<Utc>,
}

/// The user a valid token resolves to.
#[derive(Debug, Clone, Serialize)]
pub struct AuthenticatedUser {
    pub user_id: i64,
    pub name: String,
    pub email: String,
}

pub struct SessionStore {
    pool: PgPool,
}

impl SessionStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Register a user. The password is hashed before any store access.
    pub async fn signup(&self, name: &str, email: &str, password: &str) -> Result<i64, AuthError> {
        let password_hash = crypto::hash_password(password)?;

        let taken: Option<i64> =
            sqlx::query_scalar("SELECT user_id FROM users WHERE email = $1")
                .bind(email)
                .fetch_optional(&self.pool)
                .await?;
        if taken.is_some() {
            return Err(AuthError::EmailTaken);
        }

        let user_id: i64 = sqlx::query_scalar(
            "INSERT INTO users (name, email, password_hash) VALUES ($1, $2, $3) RETURNING user_id",
        )
        .bind(name)
        .bind(email)
        .bind(&password_hash)
        .fetch_one(&self.pool)
        .await?;

        tracing::info!(user_id, "User registered");
        Ok(user_id)
    }

    /// Verify credentials and mint a session token.
    pub async fn login(&self, email: &str, password: &str) -> Result<IssuedSession, AuthError> {
        let row: Option<(i64, String)> =
            sqlx::query_as("SELECT user_id, password_hash FROM users WHERE email = $1")
                .bind(email)
                .fetch_optional(&self.pool)
                .await?;

        let (user_id, stored_hash) = row.ok_or(AuthError::InvalidCredentials)?;
        if !crypto::verify_password(password, &stored_hash) {
            return Err(AuthError::InvalidCredentials);
        }

        let token = Uuid::new_v4();
        let now = Utc::now();
        let expires_at = now + Duration::hours(SESSION_TTL_HOURS);

        sqlx::query(
            "INSERT INTO sessions (token, user_id, created_at, expires_at) VALUES ($1, $2, $3, $4)",
        )
        .bind(token)
        .bind(user_id)
        .bind(now)
        .bind(expires_at)
        .execute(&self.pool)
        .await?;

        tracing::info!(user_id, "Session issued");
        Ok(IssuedSession { token, expires_at })
    }

    /// Resolve a token to its user, rejecting unknown and expired tokens.
    pub async fn verify(&self, token: Uuid) -> Result<AuthenticatedUser, AuthError> {
        let row: Option<(i64, String, String, DateTime<Utc>)> = sqlx::query_as(
            "SELECT u.user_id, u.name, u.email, s.expires_at \
             FROM sessions s JOIN users u ON s.user_id = u.user_id \
             WHERE s.token = $1",
        )
        .bind(token)
        .fetch_optional(&self.pool)
        .await?;

        match row {
            Some((user_id, name, email, expires_at)) if expires_at > Utc::now() => {
                Ok(AuthenticatedUser { user_id, name, email })
            }
            _ => Err(AuthError::InvalidToken),
        }
    }

    /// Drop a session. Unknown tokens are a no-op.
    pub async fn logout(&self, token: Uuid) -> Result<(), AuthError> {
        sqlx::query("DELETE FROM sessions WHERE token = $1")
            .bind(token)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}

/// Extract the token from an `Authorization: Bearer <uuid>` header value.
pub fn bearer_token(header: Option<&str>) -> Option<Uuid> {
    let value = header?.strip_prefix("Bearer ")?;
    Uuid::parse_str(value.trim()).ok()
}

// ============================================================================
// Unit Tests
// ============================================================================
