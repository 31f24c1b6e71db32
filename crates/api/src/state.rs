use std::sync::Arc;

use epicdict_db::store::DocumentStore;

use crate::auth::TokenVerifier;
use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (everything sits behind an `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Users, dictionaries and characters.
    pub store: Arc<dyn DocumentStore>,
    /// Bearer-token verifier used by the `AuthUser` extractor.
    pub verifier: Arc<dyn TokenVerifier>,
    pub config: Arc<ServerConfig>,
}
