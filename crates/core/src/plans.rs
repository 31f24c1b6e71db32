//! Subscription plans and the character quota each one grants.
//!
//! The role names must match the `ck_users_role` constraint in
//! `20250601000001_create_users.sql`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub const ROLE_FREE: &str = "free";
pub const ROLE_PRO: &str = "pro";
pub const ROLE_ULTRA: &str = "ultra";

/// Subscription tier attached to a user profile.
///
/// Users without a profile, or with a role this build does not know, are
/// treated as [`Plan::Free`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Plan {
    #[default]
    Free,
    Pro,
    Ultra,
}

/// Returned when a role string does not name a known plan.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown plan: {0}")]
pub struct UnknownPlan(pub String);

impl Plan {
    /// Every plan, cheapest first.
    pub const ALL: [Plan; 3] = [Plan::Free, Plan::Pro, Plan::Ultra];

    /// Role name as stored on the user profile.
    pub fn as_str(self) -> &'static str {
        match self {
            Plan::Free => ROLE_FREE,
            Plan::Pro => ROLE_PRO,
            Plan::Ultra => ROLE_ULTRA,
        }
    }

    /// Character quota given to every dictionary created under this plan.
    pub fn max_characters(self) -> i32 {
        match self {
            Plan::Free => 20,
            Plan::Pro => 50,
            Plan::Ultra => 300,
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Plan::Free => "Free",
            Plan::Pro => "Creator Pro",
            Plan::Ultra => "Studio Ultra",
        }
    }

    pub fn monthly_price(self) -> &'static str {
        match self {
            Plan::Free => "$0/month",
            Plan::Pro => "$9.99/month",
            Plan::Ultra => "$19.99/month",
        }
    }

    pub fn features(self) -> &'static [&'static str] {
        match self {
            Plan::Free => &[
                "Up to 20 characters",
                "Basic character fields",
                "Simple organization",
                "Export to text",
            ],
            Plan::Pro => &[
                "Up to 50 characters",
                "Advanced character fields",
                "Custom tags and categories",
                "Export to multiple formats",
                "Character relationship mapping",
                "Priority support",
            ],
            Plan::Ultra => &[
                "Up to 300 characters",
                "All Creator Pro features",
                "Team collaboration",
                "Advanced analytics",
                "API access",
                "Custom integrations",
                "Dedicated support",
            ],
        }
    }

    /// Resolve the plan for an optional stored role, falling back to free.
    pub fn from_role(role: Option<&str>) -> Plan {
        role.and_then(|r| r.parse().ok()).unwrap_or_default()
    }
}

impl FromStr for Plan {
    type Err = UnknownPlan;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            ROLE_FREE => Ok(Plan::Free),
            ROLE_PRO => Ok(Plan::Pro),
            ROLE_ULTRA => Ok(Plan::Ultra),
            other => Err(UnknownPlan(other.to_string())),
        }
    }
}

impl fmt::Display for Plan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Public description of a plan, as shown on the account page.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanInfo {
    pub name: &'static str,
    pub role: Plan,
    pub max_characters: i32,
    pub price: &'static str,
    pub features: &'static [&'static str],
}

impl From<Plan> for PlanInfo {
    fn from(plan: Plan) -> Self {
        PlanInfo {
            name: plan.display_name(),
            role: plan,
            max_characters: plan.max_characters(),
            price: plan.monthly_price(),
            features: plan.features(),
        }
    }
}

/// All plans in upgrade order.
pub fn catalog() -> Vec<PlanInfo> {
    Plan::ALL.into_iter().map(PlanInfo::from).collect()
}
