//! HS256 shared-secret tokens.
//!
//! Stands in for Firebase when no project is configured: the server verifies
//! tokens signed with `JWT_SECRET`, and [`SharedSecretVerifier::issue_token`]
//! mints them for local clients and tests.

use async_trait::async_trait;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use super::{AuthError, TokenVerifier, VerifiedToken};

/// Claims carried by a shared-secret token.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject -- the user's uid.
    pub sub: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Expiration time (UTC Unix timestamp).
    pub exp: i64,
    /// Issued-at time (UTC Unix timestamp).
    pub iat: i64,
}

/// Default lifetime of issued tokens, in minutes.
const DEFAULT_TOKEN_TTL_MINS: i64 = 60;

#[derive(Clone)]
pub struct SharedSecretVerifier {
    secret: String,
    token_ttl_mins: i64,
}

impl SharedSecretVerifier {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            token_ttl_mins: DEFAULT_TOKEN_TTL_MINS,
        }
    }

    /// Sign a token for `uid` valid for the configured lifetime.
    pub fn issue_token(
        &self,
        uid: &str,
        email: Option<&str>,
    ) -> Result<String, jsonwebtoken::errors::Error> {
        let now = chrono::Utc::now().timestamp();
        let claims = Claims {
            sub: uid.to_string(),
            email: email.map(str::to_string),
            exp: now + self.token_ttl_mins * 60,
            iat: now,
        };
        self.sign(&claims)
    }

    /// Sign arbitrary claims. Lets tests craft expired or malformed tokens.
    pub fn sign(&self, claims: &Claims) -> Result<String, jsonwebtoken::errors::Error> {
        encode(
            &Header::default(), // HS256
            claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )
    }
}

#[async_trait]
impl TokenVerifier for SharedSecretVerifier {
    async fn verify(&self, token: &str) -> Result<VerifiedToken, AuthError> {
        let mut validation = Validation::default(); // HS256, validates exp
        validation.set_required_spec_claims(&["exp", "sub"]);

        let data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &validation,
        )?;

        if data.claims.sub.is_empty() {
            return Err(AuthError::MissingSubject);
        }
        Ok(VerifiedToken {
            uid: data.claims.sub,
            email: data.claims.email,
        })
    }
}
