//! Firebase ID-token verification.
//!
//! Tokens are RS256 JWTs signed by one of Google's rotating securetoken keys.
//! The published key set is fetched with reqwest and cached until the
//! refresh interval elapses; a token naming an unknown `kid` triggers one
//! early refetch, rate limited so garbage tokens cannot hammer Google.
//! Only key material is cached, never verification results.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use jsonwebtoken::jwk::JwkSet;
use jsonwebtoken::{decode, decode_header, Algorithm, DecodingKey, Validation};
use serde::Deserialize;
use tokio::sync::RwLock;

use super::{AuthError, TokenVerifier, VerifiedToken};

/// Google's JWKS endpoint for Firebase ID-token signing keys.
pub const GOOGLE_JWKS_URL: &str =
    "https://www.googleapis.com/service_accounts/v1/jwk/securetoken@system.gserviceaccount.com";

const ISSUER_PREFIX: &str = "https://securetoken.google.com/";

/// Minimum gap between refetches triggered by an unknown key id.
const MIN_REFETCH_INTERVAL: Duration = Duration::from_secs(30);

#[derive(Debug, Deserialize)]
struct FirebaseClaims {
    sub: String,
    #[serde(default)]
    email: Option<String>,
}

#[derive(Default)]
struct KeyCache {
    keys: HashMap<String, DecodingKey>,
    fetched_at: Option<Instant>,
}

impl KeyCache {
    fn older_than(&self, age: Duration) -> bool {
        self.fetched_at.map_or(true, |at| at.elapsed() >= age)
    }
}

pub struct FirebaseTokenVerifier {
    project_id: String,
    issuer: String,
    jwks_url: String,
    refresh_interval: Duration,
    http: reqwest::Client,
    cache: RwLock<KeyCache>,
}

impl FirebaseTokenVerifier {
    pub fn new(project_id: impl Into<String>, refresh_interval: Duration) -> Self {
        let project_id = project_id.into();
        Self {
            issuer: format!("{ISSUER_PREFIX}{project_id}"),
            project_id,
            jwks_url: GOOGLE_JWKS_URL.to_string(),
            refresh_interval,
            http: reqwest::Client::new(),
            cache: RwLock::new(KeyCache::default()),
        }
    }

    /// Fetch keys from `url` instead of Google's endpoint.
    pub fn with_jwks_url(mut self, url: impl Into<String>) -> Self {
        self.jwks_url = url.into();
        self
    }

    /// Pre-seed the key cache, treating the keys as freshly fetched.
    pub fn with_keys(self, keys: impl IntoIterator<Item = (String, DecodingKey)>) -> Self {
        let cache = KeyCache {
            keys: keys.into_iter().collect(),
            fetched_at: Some(Instant::now()),
        };
        Self {
            cache: RwLock::new(cache),
            ..self
        }
    }

    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    async fn decoding_key(&self, kid: &str) -> Result<DecodingKey, AuthError> {
        {
            let cache = self.cache.read().await;
            let stale = cache.older_than(self.refresh_interval);
            match cache.keys.get(kid) {
                Some(key) if !stale => return Ok(key.clone()),
                None if !stale && !cache.older_than(MIN_REFETCH_INTERVAL) => {
                    return Err(AuthError::UnknownKeyId(kid.to_string()));
                }
                _ => {}
            }
        }

        self.refresh_keys().await?;

        self.cache
            .read()
            .await
            .keys
            .get(kid)
            .cloned()
            .ok_or_else(|| AuthError::UnknownKeyId(kid.to_string()))
    }

    async fn refresh_keys(&self) -> Result<(), AuthError> {
        let set: JwkSet = self
            .http
            .get(&self.jwks_url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let mut keys = HashMap::with_capacity(set.keys.len());
        for jwk in &set.keys {
            let Some(kid) = jwk.common.key_id.clone() else {
                continue;
            };
            match DecodingKey::from_jwk(jwk) {
                Ok(key) => {
                    keys.insert(kid, key);
                }
                Err(e) => tracing::warn!(%kid, error = %e, "Skipping unusable signing key"),
            }
        }
        tracing::debug!(count = keys.len(), "Refreshed Firebase signing keys");

        let mut cache = self.cache.write().await;
        cache.keys = keys;
        cache.fetched_at = Some(Instant::now());
        Ok(())
    }
}

#[async_trait]
impl TokenVerifier for FirebaseTokenVerifier {
    async fn verify(&self, token: &str) -> Result<VerifiedToken, AuthError> {
        let header = decode_header(token)?;
        let kid = header.kid.ok_or(AuthError::MissingKeyId)?;
        let key = self.decoding_key(&kid).await?;

        let mut validation = Validation::new(Algorithm::RS256);
        validation.set_audience(&[&self.project_id]);
        validation.set_issuer(&[&self.issuer]);
        validation.set_required_spec_claims(&["exp", "sub", "aud", "iss"]);

        let data = decode::<FirebaseClaims>(token, &key, &validation)?;
        if data.claims.sub.is_empty() {
            return Err(AuthError::MissingSubject);
        }
        Ok(VerifiedToken {
            uid: data.claims.sub,
            email: data.claims.email,
        })
    }
}
