pub mod account;
pub mod auth;
pub mod character;
pub mod dictionary;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/register                                   register profile (public)
/// /plans                                           plan catalog (public)
/// /account                                         caller's plan and usage
///
/// /dictionaries                                    list, create
/// /dictionaries/{id}                               get, delete
///
/// /characters/{dictionary_id}                      list (?search=&tag=), create
/// /characters/{dictionary_id}/{id}                 get, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .merge(account::router())
        .nest("/dictionaries", dictionary::router())
        .nest("/characters", character::router())
}
