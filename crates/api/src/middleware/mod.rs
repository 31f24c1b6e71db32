//! Authentication extractors.
//!
//! - [`auth::AuthUser`] -- Verifies the Bearer token and resolves the caller's plan.

pub mod auth;
