//! Per-user settings repository. One row per user id, upserted.

use super::Database;
use crate::error::Result;
use crate::models::UserSettings;

impl Database {
    pub async fn get_settings(&self, user_id: &str) -> Result<Option<UserSettings>> {
        let settings = sqlx::query_as::<_, UserSettings>(
            r#"
            SELECT user_id, theme, default_view, notifications, week_starts_on, units,
                   created_at, updated_at
            FROM user_settings
            WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(settings)
    }

    /// Insert or merge settings for a user. Only the supplied fields
    /// overwrite; NULL arguments leave existing values in place.
    pub async fn upsert_settings(
        &self,
        user_id: &str,
        theme: Option<&str>,
        default_view: Option<&str>,
        notifications: Option<bool>,
        week_starts_on: Option<&str>,
        units: Option<&str>,
    ) -> Result<UserSettings> {
        let settings = sqlx::query_as::<_, UserSettings>(
            r#"
            INSERT INTO user_settings (user_id, theme, default_view, notifications,
                                       week_starts_on, units, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, NOW())
            ON CONFLICT (user_id) DO UPDATE
            SET theme = COALESCE($2, user_settings.theme),
                default_view = COALESCE($3, user_settings.default_view),
                notifications = COALESCE($4, user_settings.notifications),
                week_starts_on = COALESCE($5, user_settings.week_starts_on),
                units = COALESCE($6, user_settings.units),
                updated_at = NOW()
            RETURNING user_id, theme, default_view, notifications, week_starts_on, units,
                      created_at, updated_at
            "#,
        )
        .bind(user_id)
        .bind(theme)
        .bind(default_view)
        .bind(notifications)
        .bind(week_starts_on)
        .bind(units)
        .fetch_one(&self.pool)
        .await?;

        Ok(settings)
    }
}
