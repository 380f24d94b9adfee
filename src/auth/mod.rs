// ============================================================================
// Auth Module - server-issued, server-verified session tokens
// ============================================================================
//
// Passwords are stored as Argon2id hashes only; logins mint an opaque UUID
// token persisted in the sessions table with an expiry, and every
// verification goes back to the store.
//
// ============================================================================

pub mod crypto;
pub mod errors;
pub mod session;

pub use errors::AuthError;
pub use session::{bearer_token, AuthenticatedUser, IssuedSession, SessionStore};
