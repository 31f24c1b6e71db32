//! Handlers for the `/characters` resource.
//!
//! Characters are nested under dictionaries:
//! `/characters/{dictionary_id}[/{id}]`

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use epicdict_core::catalog::filter_characters;
use epicdict_core::error::CoreError;
use epicdict_core::types::parse_id;
use epicdict_db::models::character::{AddCharacterOutcome, Character, CreateCharacter};
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::middleware::auth::AuthUser;
use crate::query::CharacterFilterParams;
use crate::response::MessageResponse;
use crate::state::AppState;

fn not_found(entity: &'static str, id: &str) -> AppError {
    AppError::Core(CoreError::not_found(entity, id))
}

/// POST /api/characters/{dictionary_id}
///
/// Inserts behind the dictionary's quota. Checks run in a fixed order: 404
/// when the dictionary is not the caller's, 403 once it is full, then 400 for
/// an invalid body.
pub async fn create(
    State(state): State<AppState>,
    user: AuthUser,
    Path(raw_dictionary_id): Path<String>,
    AppJson(input): AppJson<CreateCharacter>,
) -> AppResult<(StatusCode, Json<MessageResponse>)> {
    let dictionary_id = parse_id(&raw_dictionary_id)
        .ok_or_else(|| not_found("Dictionary", &raw_dictionary_id))?;

    let dictionary = state
        .store
        .find_dictionary(&user.uid, dictionary_id)
        .await?
        .ok_or_else(|| not_found("Dictionary", &raw_dictionary_id))?;
    if dictionary.is_full() {
        return Err(AppError::Core(CoreError::LimitReached {
            max_characters: dictionary.max_characters,
        }));
    }

    input.validate()?;

    // The store re-checks the quota atomically.
    match state
        .store
        .add_character_within_quota(&user.uid, dictionary_id, &input)
        .await?
    {
        AddCharacterOutcome::Added(character) => {
            tracing::info!(
                uid = %user.uid,
                dictionary_id,
                character_id = character.id,
                "Character added"
            );
            Ok((
                StatusCode::CREATED,
                Json(MessageResponse::new("Character added")),
            ))
        }
        AddCharacterOutcome::LimitReached { max_characters } => {
            Err(AppError::Core(CoreError::LimitReached { max_characters }))
        }
        AddCharacterOutcome::DictionaryNotFound => {
            Err(not_found("Dictionary", &raw_dictionary_id))
        }
    }
}

/// GET /api/characters/{dictionary_id}?search=&tag=
///
/// A missing dictionary lists as empty rather than 404.
pub async fn list_by_dictionary(
    State(state): State<AppState>,
    user: AuthUser,
    Path(raw_dictionary_id): Path<String>,
    Query(params): Query<CharacterFilterParams>,
) -> AppResult<Json<Vec<Character>>> {
    let Some(dictionary_id) = parse_id(&raw_dictionary_id) else {
        return Ok(Json(Vec::new()));
    };

    let characters = state.store.list_characters(&user.uid, dictionary_id).await?;
    if !params.is_active() {
        return Ok(Json(characters));
    }

    let filtered = filter_characters(
        characters,
        params.search_term().unwrap_or_default(),
        params.tag_term().unwrap_or_default(),
    );
    Ok(Json(filtered))
}

/// GET /api/characters/{dictionary_id}/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    user: AuthUser,
    Path((raw_dictionary_id, raw_id)): Path<(String, String)>,
) -> AppResult<Json<Character>> {
    let (Some(dictionary_id), Some(id)) = (parse_id(&raw_dictionary_id), parse_id(&raw_id)) else {
        return Err(not_found("Character", &raw_id));
    };

    let character = state
        .store
        .find_character(&user.uid, dictionary_id, id)
        .await?
        .ok_or_else(|| not_found("Character", &raw_id))?;
    Ok(Json(character))
}

/// DELETE /api/characters/{dictionary_id}/{id}
///
/// Frees one slot in the dictionary's quota.
pub async fn delete(
    State(state): State<AppState>,
    user: AuthUser,
    Path((raw_dictionary_id, raw_id)): Path<(String, String)>,
) -> AppResult<StatusCode> {
    let (Some(dictionary_id), Some(id)) = (parse_id(&raw_dictionary_id), parse_id(&raw_id)) else {
        return Err(not_found("Character", &raw_id));
    };

    if state
        .store
        .delete_character(&user.uid, dictionary_id, id)
        .await?
    {
        tracing::info!(uid = %user.uid, dictionary_id, character_id = id, "Character deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found("Character", &raw_id))
    }
}
