//! Typed HTTP client for the Epic Character Dictionary API.
//!
//! - [`api`] -- [`ApiClient`], one method per endpoint.
//! - [`types`] -- wire types as the server serializes them.
//! - [`form`] -- the character form's free-text fields turned into a request.
//! - [`error`] -- [`ClientError`].

pub mod api;
pub mod error;
pub mod form;
pub mod types;

pub use api::ApiClient;
pub use error::ClientError;
