//! Bearer-token authentication extractor for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use epicdict_core::error::CoreError;
use epicdict_core::plans::Plan;

use crate::auth::AuthError;
use crate::error::AppError;
use crate::state::AppState;

/// Authenticated caller, resolved from `Authorization: Bearer <token>`.
///
/// - No header, not the `Bearer ` form, or an empty token: 401.
/// - Token rejected by the verifier: 403.
/// - Verified: the plan is read from the stored profile, defaulting to free
///   when there is no profile or the stored role is not recognised.
///
/// ```ignore
/// async fn my_handler(user: AuthUser) -> AppResult<Json<()>> {
///     tracing::info!(uid = %user.uid, plan = %user.plan, "handling request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub uid: String,
    /// Email claim from the token, if any.
    pub email: Option<String>,
    pub plan: Plan,
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized(
                    "Missing Authorization header".into(),
                ))
            })?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized(
                    "Invalid Authorization format. Expected: Bearer <token>".into(),
                ))
            })?;

        let verified = state.verifier.verify(token).await.map_err(|e| {
            if let AuthError::KeyFetch(err) = &e {
                tracing::error!(error = %err, "Signing keys unavailable");
            }
            AppError::Core(CoreError::Forbidden(e.to_string()))
        })?;

        let plan = match state.store.find_user(&verified.uid).await? {
            Some(user) => {
                let plan = user.plan();
                if plan.as_str() != user.role {
                    tracing::warn!(uid = %user.uid, role = %user.role, "Unknown stored role, using free plan");
                }
                plan
            }
            None => Plan::default(),
        };

        Ok(AuthUser {
            uid: verified.uid,
            email: verified.email,
            plan,
        })
    }
}
