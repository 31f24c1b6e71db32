//! Route definitions for characters, nested by dictionary.

use axum::routing::get;
use axum::Router;

use crate::handlers::character;
use crate::state::AppState;

/// Routes mounted at `/characters`.
///
/// ```text
/// GET    /{dictionary_id}          -> list_by_dictionary
/// POST   /{dictionary_id}          -> create
/// GET    /{dictionary_id}/{id}     -> get_by_id
/// DELETE /{dictionary_id}/{id}     -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/{dictionary_id}",
            get(character::list_by_dictionary).post(character::create),
        )
        .route(
            "/{dictionary_id}/{id}",
            get(character::get_by_id).delete(character::delete),
        )
}
