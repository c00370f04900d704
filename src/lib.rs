//! # Presenza (User Presence & Session Service)
//!
//! `presenza` authenticates a web application's users and records when they
//! were last active. It exposes a small HTTP API:
//!
//! - **Sign-in / sign-out** backed by Argon2id password verification and
//!   database-stored sessions. Raw session tokens are only ever held by the
//!   client; the database stores a SHA-256 hash.
//! - **Session lookup** for the frontend to restore auth state. A missing or
//!   invalid cookie is a normal outcome (204), never an error.
//! - **Activity heartbeat** (`POST /v1/me/activity`): refreshes the
//!   authenticated user's `last_active_at` timestamp with a single point
//!   write. Concurrent heartbeats are last-writer-wins by the database clock.
//!
//! User accounts are provisioned outside this service; presenza only
//! authenticates existing rows and updates their activity fields.
//!
//! Failures are reported coarsely: callers see `401`/`500` with generic JSON
//! bodies, while the underlying store errors are logged for operators.

pub mod api;
pub mod cli;

#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

pub const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH {
    Some(hash) => hash,
    None => "unknown",
};

pub const APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"),);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_git_commit_hash_format() {
        if GIT_COMMIT_HASH == "unknown" {
            // Acceptable in non-git build environments
            return;
        }
        assert!(
            GIT_COMMIT_HASH.chars().all(|c| c.is_ascii_hexdigit()),
            "GIT_COMMIT_HASH should be a hex string, got: {GIT_COMMIT_HASH}"
        );
        assert!(
            GIT_COMMIT_HASH.len() >= 7,
            "GIT_COMMIT_HASH should be at least 7 characters long, got: {GIT_COMMIT_HASH}"
        );
    }

    #[test]
    fn test_app_user_agent_format() {
        assert!(APP_USER_AGENT.starts_with(env!("CARGO_PKG_NAME")));
        assert!(APP_USER_AGENT.contains(env!("CARGO_PKG_VERSION")));
    }
}
