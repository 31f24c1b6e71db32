use axum::routing::get;
use axum::Router;

use crate::handlers::account;
use crate::state::AppState;

/// Routes merged at the `/api` root.
///
/// ```text
/// GET    /account     -> get_account
/// GET    /plans       -> list_plans (public)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/account", get(account::get_account))
        .route("/plans", get(account::list_plans))
}
