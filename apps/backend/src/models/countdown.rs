//! Countdown entity and API types.

use chrono::{DateTime, Duration, Utc};
use lifetrack_core::TimeRemaining;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Countdown {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub target_date: DateTime<Utc>,
    pub color: String,
    pub icon: Option<String>,
    pub is_archived: bool,
    pub created_at: DateTime<Utc>,
}

impl Countdown {
    pub fn with_time_remaining(self, now: DateTime<Utc>) -> CountdownWithTime {
        let time_remaining = TimeRemaining::between(now, self.target_date);
        CountdownWithTime {
            countdown: self,
            time_remaining,
        }
    }
}

/// Countdown plus its derived time-remaining breakdown.
#[derive(Debug, Serialize)]
pub struct CountdownWithTime {
    #[serde(flatten)]
    pub countdown: Countdown,
    pub time_remaining: TimeRemaining,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CreateCountdownRequest {
    pub title: String,
    pub description: Option<String>,
    pub target_date: DateTime<Utc>,
    pub color: String,
    pub icon: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UpdateCountdownRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub target_date: Option<DateTime<Utc>>,
    pub color: Option<String>,
    pub icon: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ListCountdownsQuery {
    pub include_archived: Option<bool>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CountdownsSummary {
    pub total: usize,
    pub upcoming: usize,
    pub past: usize,
}

impl CountdownsSummary {
    pub fn compute(countdowns: &[Countdown], now: DateTime<Utc>) -> Self {
        let upcoming = countdowns.iter().filter(|c| c.target_date >= now).count();
        Self {
            total: countdowns.len(),
            upcoming,
            past: countdowns.len() - upcoming,
        }
    }
}

/// Unarchived countdowns whose target falls within the next 7 days.
pub fn upcoming_within_week(countdowns: Vec<Countdown>, now: DateTime<Utc>) -> Vec<Countdown> {
    let horizon = now + Duration::days(7);
    let mut upcoming: Vec<Countdown> = countdowns
        .into_iter()
        .filter(|c| c.target_date >= now && c.target_date <= horizon)
        .collect();
    upcoming.sort_by_key(|c| c.target_date);
    upcoming
}
