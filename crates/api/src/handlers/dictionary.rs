//! Handlers for the `/dictionaries` resource.
//!
//! Every operation is scoped to the authenticated owner; another user's
//! dictionary is indistinguishable from a missing one.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use epicdict_core::error::CoreError;
use epicdict_core::types::parse_id;
use epicdict_db::models::dictionary::{CreateDictionary, Dictionary};

use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::middleware::auth::AuthUser;
use crate::response::CreatedResponse;
use crate::state::AppState;

fn dictionary_not_found(id: &str) -> AppError {
    AppError::Core(CoreError::not_found("Dictionary", id))
}

/// GET /api/dictionaries
pub async fn list(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<Json<Vec<Dictionary>>> {
    let dictionaries = state.store.list_dictionaries(&user.uid).await?;
    Ok(Json(dictionaries))
}

/// POST /api/dictionaries
///
/// The quota is fixed from the caller's plan at creation time.
pub async fn create(
    State(state): State<AppState>,
    user: AuthUser,
    AppJson(input): AppJson<CreateDictionary>,
) -> AppResult<(StatusCode, Json<CreatedResponse>)> {
    let max_characters = user.plan.max_characters();
    let dictionary = state
        .store
        .create_dictionary(&user.uid, &input, max_characters)
        .await?;

    tracing::info!(
        uid = %user.uid,
        dictionary_id = dictionary.id,
        max_characters,
        "Dictionary created"
    );
    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse { id: dictionary.id }),
    ))
}

/// GET /api/dictionaries/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    user: AuthUser,
    Path(raw_id): Path<String>,
) -> AppResult<Json<Dictionary>> {
    let id = parse_id(&raw_id).ok_or_else(|| dictionary_not_found(&raw_id))?;
    let dictionary = state
        .store
        .find_dictionary(&user.uid, id)
        .await?
        .ok_or_else(|| dictionary_not_found(&raw_id))?;
    Ok(Json(dictionary))
}

/// DELETE /api/dictionaries/{id}
///
/// Removes the dictionary together with all of its characters.
pub async fn delete(
    State(state): State<AppState>,
    user: AuthUser,
    Path(raw_id): Path<String>,
) -> AppResult<StatusCode> {
    let id = parse_id(&raw_id).ok_or_else(|| dictionary_not_found(&raw_id))?;
    if state.store.delete_dictionary(&user.uid, id).await? {
        tracing::info!(uid = %user.uid, dictionary_id = id, "Dictionary deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(dictionary_not_found(&raw_id))
    }
}
