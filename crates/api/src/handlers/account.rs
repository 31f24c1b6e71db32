//! Handlers for the caller's account and the public plan catalog.

use axum::extract::State;
use axum::Json;
use epicdict_core::plans::{self, PlanInfo};
use serde::Serialize;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountResponse {
    pub uid: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    pub role: &'static str,
    pub plan: PlanInfo,
    pub usage: Usage,
}

/// Character slots used versus available across all dictionaries.
#[derive(Debug, Serialize)]
pub struct Usage {
    pub used: i64,
    pub total: i64,
}

/// GET /api/account
pub async fn get_account(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<Json<AccountResponse>> {
    let profile = state.store.find_user(&user.uid).await?;
    let dictionaries = state.store.list_dictionaries(&user.uid).await?;

    let used: i64 = dictionaries
        .iter()
        .map(|d| i64::from(d.character_count))
        .sum();
    let total: i64 = if dictionaries.is_empty() {
        i64::from(user.plan.max_characters())
    } else {
        dictionaries
            .iter()
            .map(|d| i64::from(d.max_characters))
            .sum()
    };

    let (email, display_name) = match profile {
        Some(p) => (p.email.or(user.email), p.display_name),
        None => (user.email, None),
    };

    Ok(Json(AccountResponse {
        uid: user.uid,
        email,
        display_name,
        role: user.plan.as_str(),
        plan: PlanInfo::from(user.plan),
        usage: Usage { used, total },
    }))
}

/// GET /api/plans
pub async fn list_plans() -> Json<Vec<PlanInfo>> {
    Json(plans::catalog())
}
