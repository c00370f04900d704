//! API handlers for Presenza.
//!
//! Route handlers are grouped by surface: `auth` for sign-in/sign-out and
//! session resolution, `me` for the authenticated profile and activity
//! heartbeat, plus `health` and the undocumented root route.

pub mod auth;
pub mod health;
pub mod me;
pub mod root;
