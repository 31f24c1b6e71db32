use axum::routing::get;
use axum::Router;

use crate::handlers::dictionary;
use crate::state::AppState;

/// Routes mounted at `/dictionaries`.
///
/// ```text
/// GET    /            -> list
/// POST   /            -> create
/// GET    /{id}        -> get_by_id
/// DELETE /{id}        -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(dictionary::list).post(dictionary::create))
        .route(
            "/{id}",
            get(dictionary::get_by_id).delete(dictionary::delete),
        )
}
