use std::str::FromStr;

/// Which [`DocumentStore`](epicdict_db::store::DocumentStore) backs the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    Postgres,
    Memory,
}

impl FromStr for StoreBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "postgres" => Ok(StoreBackend::Postgres),
            "memory" => Ok(StoreBackend::Memory),
            other => Err(format!("unknown store backend '{other}'")),
        }
    }
}

/// How bearer tokens are verified.
#[derive(Debug, Clone)]
pub enum AuthConfig {
    /// Firebase ID tokens, checked against Google's published signing keys.
    Firebase {
        project_id: String,
        /// How long fetched signing keys are trusted before a refetch.
        jwks_refresh_secs: u64,
    },
    /// HS256 tokens signed with a shared secret (local development).
    SharedSecret { secret: String },
}

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    pub store_backend: StoreBackend,
    /// Required when `store_backend` is [`StoreBackend::Postgres`].
    pub database_url: Option<String>,
    pub auth: AuthConfig,
}

const DEFAULT_JWKS_REFRESH_SECS: u64 = 3600;

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:3000`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `STORE_BACKEND`        | `postgres`                 |
    /// | `DATABASE_URL`         | required for `postgres`    |
    /// | `FIREBASE_PROJECT_ID`  | --                         |
    /// | `JWT_SECRET`           | required without a project |
    /// | `JWKS_REFRESH_SECS`    | `3600`                     |
    ///
    /// # Panics
    ///
    /// Panics on unparsable values, or when neither `FIREBASE_PROJECT_ID`
    /// nor `JWT_SECRET` is set.
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins = parse_origins(
            &std::env::var("CORS_ORIGINS").unwrap_or_else(|_| "http://localhost:3000".into()),
        );

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let store_backend: StoreBackend = std::env::var("STORE_BACKEND")
            .unwrap_or_else(|_| "postgres".into())
            .parse()
            .unwrap_or_else(|e| panic!("STORE_BACKEND: {e}"));

        let database_url = std::env::var("DATABASE_URL").ok();
        if store_backend == StoreBackend::Postgres {
            assert!(
                database_url.is_some(),
                "DATABASE_URL must be set when STORE_BACKEND=postgres"
            );
        }

        let auth = match std::env::var("FIREBASE_PROJECT_ID") {
            Ok(project_id) if !project_id.trim().is_empty() => AuthConfig::Firebase {
                project_id: project_id.trim().to_string(),
                jwks_refresh_secs: std::env::var("JWKS_REFRESH_SECS")
                    .unwrap_or_else(|_| DEFAULT_JWKS_REFRESH_SECS.to_string())
                    .parse()
                    .expect("JWKS_REFRESH_SECS must be a valid u64"),
            },
            _ => {
                let secret = std::env::var("JWT_SECRET")
                    .expect("either FIREBASE_PROJECT_ID or JWT_SECRET must be set");
                assert!(!secret.is_empty(), "JWT_SECRET must not be empty");
                AuthConfig::SharedSecret { secret }
            }
        };

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            store_backend,
            database_url,
            auth,
        }
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
