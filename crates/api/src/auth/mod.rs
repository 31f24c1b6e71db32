//! Bearer-token verification.
//!
//! - [`firebase`] -- Firebase ID tokens (RS256, Google-published keys).
//! - [`jwt`] -- HS256 shared-secret tokens for local development and tests.
//!
//! Handlers never see a verifier directly; the
//! [`AuthUser`](crate::middleware::auth::AuthUser) extractor calls the one
//! held in [`AppState`](crate::state::AppState).

use async_trait::async_trait;

pub mod firebase;
pub mod jwt;

/// Identity asserted by a successfully verified token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifiedToken {
    /// Stable user id (`sub` claim).
    pub uid: String,
    pub email: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("invalid token: {0}")]
    Invalid(#[from] jsonwebtoken::errors::Error),

    #[error("token header has no key id")]
    MissingKeyId,

    #[error("no signing key with id '{0}'")]
    UnknownKeyId(String),

    #[error("token has no subject")]
    MissingSubject,

    #[error("failed to fetch signing keys: {0}")]
    KeyFetch(#[from] reqwest::Error),
}

/// Turns a raw bearer token into a [`VerifiedToken`].
///
/// Any error means the caller is rejected; implementations must not retry.
#[async_trait]
pub trait TokenVerifier: Send + Sync {
    async fn verify(&self, token: &str) -> Result<VerifiedToken, AuthError>;
}
