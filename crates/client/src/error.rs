use epicdict_core::error::CoreError;
use serde::Deserialize;

/// Errors from the API client.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The HTTP request itself failed (network, DNS, TLS, bad JSON).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The API answered with a non-2xx status.
    #[error("API error ({status}): {message}")]
    Api {
        status: u16,
        /// Machine-readable code from the error body, when present.
        code: Option<String>,
        message: String,
    },

    #[error("EPICDICT_API_BASE_URL is not set")]
    MissingBaseUrl,

    /// The character form could not be turned into a request.
    #[error(transparent)]
    Form(#[from] CoreError),
}

impl ClientError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            ClientError::Request(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// True for the 403 the server returns once a dictionary is full.
    pub fn is_limit_reached(&self) -> bool {
        matches!(self, ClientError::Api { status: 403, code: Some(code), .. } if code == "LIMIT_REACHED")
    }

    /// Build an [`ClientError::Api`] from a status and raw body, reading the
    /// server's `{"error", "code"}` shape when the body has it.
    pub(crate) fn from_body(status: u16, body: &str) -> Self {
        #[derive(Deserialize)]
        struct ErrorBody {
            error: String,
            code: Option<String>,
        }

        match serde_json::from_str::<ErrorBody>(body) {
            Ok(parsed) => ClientError::Api {
                status,
                code: parsed.code,
                message: parsed.error,
            },
            Err(_) => ClientError::Api {
                status,
                code: None,
                message: body.to_string(),
            },
        }
    }
}
