// ============================================================================
// Auth Errors
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Email is already registered")]
    EmailTaken,

    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Invalid or expired token")]
    InvalidToken,

    #[error("Password hashing failed")]
    Hash,

    #[error("store error during authentication")]
    Store(#[from] sqlx::Error),
}
