//! Handler for profile registration.

use axum::extract::State;
use axum::Json;
use epicdict_db::models::user::RegisterUser;
use validator::Validate;

use crate::error::AppResult;
use crate::extract::AppJson;
use crate::response::MessageResponse;
use crate::state::AppState;

/// POST /api/auth/register
///
/// Creates the profile on first sign-in; afterwards refreshes the email and
/// display name while keeping the stored plan.
pub async fn register(
    State(state): State<AppState>,
    AppJson(input): AppJson<RegisterUser>,
) -> AppResult<Json<MessageResponse>> {
    input.validate()?;

    let user = state.store.register_user(&input).await?;
    tracing::info!(uid = %user.uid, role = %user.role, "User registered");

    Ok(Json(MessageResponse::new("User registered")))
}
