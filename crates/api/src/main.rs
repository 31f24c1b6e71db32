use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use epicdict_api::auth::firebase::FirebaseTokenVerifier;
use epicdict_api::auth::jwt::SharedSecretVerifier;
use epicdict_api::auth::TokenVerifier;
use epicdict_api::config::{AuthConfig, ServerConfig, StoreBackend};
use epicdict_api::router::build_app_router;
use epicdict_api::state::AppState;
use epicdict_db::store::{DocumentStore, MemoryStore, PgStore};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "epicdict_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ServerConfig::from_env();
    tracing::info!(
        host = %config.host,
        port = %config.port,
        store = ?config.store_backend,
        "Loaded server configuration"
    );

    // --- Store ---
    let mut pool = None;
    let store: Arc<dyn DocumentStore> = match config.store_backend {
        StoreBackend::Postgres => {
            let database_url = config
                .database_url
                .as_deref()
                .expect("DATABASE_URL must be set");

            let pg = epicdict_db::create_pool(database_url)
                .await
                .expect("Failed to connect to database");
            tracing::info!("Database connection pool created");

            epicdict_db::health_check(&pg)
                .await
                .expect("Database health check failed");

            epicdict_db::run_migrations(&pg)
                .await
                .expect("Failed to run database migrations");
            tracing::info!("Database migrations applied");

            pool = Some(pg.clone());
            Arc::new(PgStore::new(pg))
        }
        StoreBackend::Memory => {
            tracing::warn!("Using in-memory store; data is lost on restart");
            Arc::new(MemoryStore::new())
        }
    };

    // --- Token verification ---
    let verifier: Arc<dyn TokenVerifier> = match &config.auth {
        AuthConfig::Firebase {
            project_id,
            jwks_refresh_secs,
        } => {
            tracing::info!(%project_id, "Verifying Firebase ID tokens");
            Arc::new(FirebaseTokenVerifier::new(
                project_id.clone(),
                Duration::from_secs(*jwks_refresh_secs),
            ))
        }
        AuthConfig::SharedSecret { secret } => {
            tracing::warn!("FIREBASE_PROJECT_ID not set; verifying shared-secret tokens");
            Arc::new(SharedSecretVerifier::new(secret.clone()))
        }
    };

    // --- App state ---
    let state = AppState {
        store,
        verifier,
        config: Arc::new(config.clone()),
    };

    // --- Router ---
    let app = build_app_router(state, &config);

    // --- Start server ---
    let addr = SocketAddr::new(
        config.host.parse().expect("Invalid HOST address"),
        config.port,
    );
    tracing::info!(%addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    // --- Post-shutdown cleanup ---
    if let Some(pool) = pool {
        pool.close().await;
        tracing::info!("Database pool closed");
    }
    tracing::info!("Graceful shutdown complete");
}

/// Wait for a termination signal to initiate graceful shutdown.
///
/// Handles both SIGINT (Ctrl-C) and SIGTERM (on Unix) so the server
/// shuts down cleanly whether stopped interactively or by a process
/// manager.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
