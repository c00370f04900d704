//! Auth handlers and supporting modules.
//!
//! This module coordinates sign-in/sign-out, session resolution, and the
//! database-backed session store.
//!
//! ## Session tokens
//!
//! Session tokens are 32 random bytes, URL-safe base64 encoded, and handed to
//! the client as an `HttpOnly` cookie (or presented as a bearer token). The
//! database only ever stores a SHA-256 hash of the token, so a leaked table
//! cannot be replayed against the API.

pub mod password;
pub(crate) mod principal;
pub(crate) mod session;
mod state;
mod storage;
pub(crate) mod types;
mod utils;

pub use state::AuthConfig;

#[cfg(test)]
mod tests;
