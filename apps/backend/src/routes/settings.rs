//! User settings endpoints

use axum::{
    extract::{Path, State},
    Json,
};
use chrono::Utc;

use crate::error::Result;
use crate::models::*;
use crate::AppState;

/// GET /api/settings/:user_id
///
/// Returns stored preferences, or defaults when the user has none yet.
pub async fn get(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<UserSettings>> {
    let settings = state
        .db
        .get_settings(&user_id)
        .await?
        .unwrap_or_else(|| UserSettings::default_for_user(&user_id, Utc::now()));
    Ok(Json(settings))
}

/// PUT /api/settings/:user_id
pub async fn update(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Json(request): Json<UpdateSettingsRequest>,
) -> Result<Json<UserSettings>> {
    let settings = state
        .db
        .upsert_settings(
            &user_id,
            request.theme.map(|t| t.as_str()),
            request.default_view.as_deref(),
            request.notifications,
            request.week_starts_on.map(|w| w.as_str()),
            request.units.map(|u| u.as_str()),
        )
        .await?;
    Ok(Json(settings))
}
