//! Per-user preference row and API types.

use chrono::{DateTime, Utc};
use lifetrack_core::{Theme, Units, WeekStart};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Single-row-per-user preferences. `user_id` is a placeholder
/// identifier; there is no authentication layer.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct UserSettings {
    pub user_id: String,
    pub theme: Option<String>,
    pub default_view: Option<String>,
    pub notifications: Option<bool>,
    pub week_starts_on: Option<String>,
    pub units: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UserSettings {
    pub fn default_for_user(user_id: &str, now: DateTime<Utc>) -> Self {
        Self {
            user_id: user_id.to_string(),
            theme: None,
            default_view: None,
            notifications: None,
            week_starts_on: None,
            units: None,
            created_at: now,
            updated_at: now,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UpdateSettingsRequest {
    pub theme: Option<Theme>,
    pub default_view: Option<String>,
    pub notifications: Option<bool>,
    pub week_starts_on: Option<WeekStart>,
    pub units: Option<Units>,
}
