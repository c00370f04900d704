//! Authenticated self-service endpoints.
//!
//! Flow Overview:
//! 1) Authenticate via session cookie or bearer token.
//! 2) Resolve the current user from the database.
//! 3) Serve the profile or refresh the last-active timestamp.

use axum::{
    extract::Extension,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Json},
};
use serde::Serialize;
use sqlx::{PgPool, Row};
use tracing::{Instrument, error};
use utoipa::ToSchema;
use uuid::Uuid;

use super::auth::principal::require_auth;
use super::auth::types::{ErrorResponse, MessageResponse, error_response};

#[derive(Debug, Serialize, ToSchema)]
pub struct MeResponse {
    pub id: String,
    pub email: String,
    pub last_active_at: Option<String>,
    pub created_at: String,
}

#[utoipa::path(
    get,
    path = "/v1/me",
    responses(
        (status = 200, description = "Return the authenticated user profile.", body = MeResponse),
        (status = 401, description = "Missing or invalid session credential.", body = ErrorResponse),
    ),
    tag = "me"
)]
pub async fn get_me(headers: HeaderMap, pool: Extension<PgPool>) -> impl IntoResponse {
    let principal = match require_auth(&headers, &pool).await {
        Ok(principal) => principal,
        Err(status) => return error_response(status),
    };

    match fetch_profile(&pool, principal.user_id).await {
        Ok(Some(profile)) => {
            let response = MeResponse {
                id: profile.id,
                email: principal.email,
                last_active_at: profile.last_active_at,
                created_at: profile.created_at,
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Ok(None) => error_response(StatusCode::NOT_FOUND),
        Err(err) => {
            error!("Failed to fetch /me profile: {err}");
            error_response(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

#[utoipa::path(
    post,
    path = "/v1/me/activity",
    responses(
        (status = 200, description = "Last-active timestamp refreshed.", body = MessageResponse),
        (status = 401, description = "Missing or invalid session credential.", body = ErrorResponse),
        (status = 500, description = "The update could not be applied.", body = ErrorResponse),
    ),
    tag = "me"
)]
pub async fn touch_activity(headers: HeaderMap, pool: Extension<PgPool>) -> impl IntoResponse {
    // Authorization is settled before any write is attempted.
    let principal = match require_auth(&headers, &pool).await {
        Ok(principal) => principal,
        Err(status) => return error_response(status),
    };

    match touch_last_active(&pool, principal.user_id).await {
        Ok(true) => (
            StatusCode::OK,
            Json(MessageResponse {
                message: "Status updated successfully".to_string(),
            }),
        )
            .into_response(),
        Ok(false) => {
            // The session outlived its user row; callers get the same coarse
            // failure as any other store problem.
            error!("User row missing for activity update: {}", principal.user_id);
            update_failed()
        }
        Err(err) => {
            error!("Failed to update last active: {err}");
            update_failed()
        }
    }
}

fn update_failed() -> axum::response::Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            error: "Failed to update status".to_string(),
        }),
    )
        .into_response()
}

struct MeProfileRow {
    id: String,
    last_active_at: Option<String>,
    created_at: String,
}

async fn fetch_profile(pool: &PgPool, user_id: Uuid) -> Result<Option<MeProfileRow>, sqlx::Error> {
    let query = r#"
        SELECT
            id::text AS id,
            CASE
                WHEN last_active_at IS NULL THEN NULL
                ELSE to_char(last_active_at AT TIME ZONE 'utc', 'YYYY-MM-DD"T"HH24:MI:SS"Z"')
            END AS last_active_at,
            to_char(created_at AT TIME ZONE 'utc', 'YYYY-MM-DD"T"HH24:MI:SS"Z"') AS created_at
        FROM users
        WHERE id = $1
        LIMIT 1
    "#;
    let span = tracing::info_span!(
        "db.query",
        db.system = "postgresql",
        db.operation = "SELECT",
        db.statement = query
    );
    let row = sqlx::query(query)
        .bind(user_id)
        .fetch_optional(pool)
        .instrument(span)
        .await?;
    Ok(row.map(|row| MeProfileRow {
        id: row.get("id"),
        last_active_at: row.get("last_active_at"),
        created_at: row.get("created_at"),
    }))
}

/// Refresh the user's last-active timestamp with a single point write.
///
/// The timestamp comes from the database clock, so concurrent heartbeats are
/// last-writer-wins under one clock. Returns `Ok(false)` when no row matched.
async fn touch_last_active(pool: &PgPool, user_id: Uuid) -> Result<bool, sqlx::Error> {
    let query = r"
        UPDATE users
        SET last_active_at = NOW()
        WHERE id = $1
    ";
    let span = tracing::info_span!(
        "db.query",
        db.system = "postgresql",
        db.operation = "UPDATE",
        db.statement = query
    );
    let result = sqlx::query(query)
        .bind(user_id)
        .execute(pool)
        .instrument(span)
        .await?;
    Ok(result.rows_affected() > 0)
}
