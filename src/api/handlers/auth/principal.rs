//! Authenticated principal extraction.
//!
//! Flow Overview: read the session credential, resolve it to a user, and
//! return a principal that downstream handlers can use.

use axum::http::{HeaderMap, StatusCode};
use sqlx::PgPool;

use super::session::authenticate_session;

/// Authenticated user context derived from the session credential.
#[derive(Clone, Debug)]
pub struct Principal {
    pub user_id: uuid::Uuid,
    pub email: String,
}

/// Resolve a session credential into a principal, or return 401 for missing sessions.
///
/// A missing or invalid credential is a normal outcome and maps to 401; only
/// a store failure during lookup maps to 500.
///
/// # Errors
/// Returns the status code the handler should respond with.
pub async fn require_auth(headers: &HeaderMap, pool: &PgPool) -> Result<Principal, StatusCode> {
    match authenticate_session(headers, pool).await {
        Ok(Some(record)) => Ok(Principal {
            user_id: record.user_id,
            email: record.email,
        }),
        Ok(None) => Err(StatusCode::UNAUTHORIZED),
        Err(status) => Err(status),
    }
}
