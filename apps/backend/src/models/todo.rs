//! Todo entity and API types.

use chrono::{DateTime, Utc};
use lifetrack_core::{derived_completion, Priority};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Todo row. Priority is stored as its wire literal.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Todo {
    pub id: Uuid,
    pub text: String,
    pub is_completed: bool,
    pub due_date: Option<DateTime<Utc>>,
    pub is_daily: bool,
    pub last_completed_at: Option<DateTime<Utc>>,
    pub priority: Option<String>,
    pub category: Option<String>,
    pub parent_id: Option<Uuid>,
    pub level: i32,
    pub created_at: DateTime<Utc>,
}

impl Todo {
    /// View of this todo as of `now`, with the daily-reset correction
    /// applied to the completion flag. Storage is never touched.
    pub fn view(&self, now: DateTime<Utc>) -> TodoView {
        TodoView {
            id: self.id,
            text: self.text.clone(),
            is_completed: derived_completion(
                self.is_daily,
                self.is_completed,
                self.last_completed_at,
                now,
            ),
            due_date: self.due_date,
            is_daily: self.is_daily,
            last_completed_at: self.last_completed_at,
            priority: self.priority.clone(),
            category: self.category.clone(),
            parent_id: self.parent_id,
            level: self.level,
            created_at: self.created_at,
        }
    }
}

/// Todo as reported to clients: same shape as the stored record but
/// `is_completed` is derived for daily todos.
#[derive(Debug, Clone, Serialize)]
pub struct TodoView {
    pub id: Uuid,
    pub text: String,
    pub is_completed: bool,
    pub due_date: Option<DateTime<Utc>>,
    pub is_daily: bool,
    pub last_completed_at: Option<DateTime<Utc>>,
    pub priority: Option<String>,
    pub category: Option<String>,
    pub parent_id: Option<Uuid>,
    pub level: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CreateTodoRequest {
    pub text: String,
    pub due_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub is_daily: bool,
    pub priority: Option<Priority>,
    pub category: Option<String>,
    pub parent_id: Option<Uuid>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UpdateTodoRequest {
    pub text: String,
    pub due_date: Option<DateTime<Utc>>,
    pub is_daily: bool,
    pub priority: Option<Priority>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UpdateDueDateRequest {
    pub due_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UpdatePriorityRequest {
    pub priority: Option<Priority>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ListTodosQuery {
    pub include_completed: Option<bool>,
    pub filter_daily: Option<bool>,
}

/// Incomplete todos bucketed by priority.
#[derive(Debug, Serialize)]
pub struct TodosByPriority {
    pub high: Vec<Todo>,
    pub medium: Vec<Todo>,
    pub low: Vec<Todo>,
    pub none: Vec<Todo>,
}

impl TodosByPriority {
    pub fn bucket(todos: Vec<Todo>) -> Self {
        let mut buckets = Self {
            high: Vec::new(),
            medium: Vec::new(),
            low: Vec::new(),
            none: Vec::new(),
        };
        for todo in todos {
            match todo.priority.as_deref() {
                Some("high") => buckets.high.push(todo),
                Some("medium") => buckets.medium.push(todo),
                Some("low") => buckets.low.push(todo),
                _ => buckets.none.push(todo),
            }
        }
        buckets
    }
}

/// Daily task completion summary, computed over derived views.
#[derive(Debug, Serialize, Deserialize)]
pub struct DailySummary {
    pub total: usize,
    pub completed: usize,
    pub remaining: usize,
    pub percentage: i32,
}

impl DailySummary {
    pub fn compute(daily: &[TodoView]) -> Self {
        let total = daily.len();
        let completed = daily.iter().filter(|t| t.is_completed).count();
        let percentage = if total > 0 {
            ((completed as f64 / total as f64) * 100.0).round() as i32
        } else {
            0
        };
        Self {
            total,
            completed,
            remaining: total - completed,
            percentage,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use pretty_assertions::assert_eq;

    fn now() -> DateTime<Utc> {
        "2026-08-23T09:00:00Z".parse().unwrap()
    }

    fn todo(is_daily: bool, is_completed: bool, completed_at: Option<DateTime<Utc>>) -> Todo {
        Todo {
            id: Uuid::new_v4(),
            text: "water plants".to_string(),
            is_completed,
            due_date: None,
            is_daily,
            last_completed_at: completed_at,
            priority: None,
            category: None,
            parent_id: None,
            level: 0,
            created_at: now() - Duration::days(3),
        }
    }

    #[test]
    fn view_resets_stale_daily_completion() {
        let stored = todo(true, true, Some(now() - Duration::days(1)));
        let view = stored.view(now());
        assert!(!view.is_completed);
        // Stored record keeps its flag.
        assert!(stored.is_completed);
    }

    #[test]
    fn view_keeps_todays_completion() {
        let stored = todo(true, true, Some(now() - Duration::hours(1)));
        assert!(stored.view(now()).is_completed);
    }

    #[test]
    fn daily_summary_counts_derived_flags() {
        let views: Vec<TodoView> = vec![
            todo(true, true, Some(now())).view(now()),
            todo(true, true, Some(now() - Duration::days(2))).view(now()),
            todo(true, false, None).view(now()),
        ];
        let summary = DailySummary::compute(&views);
        assert_eq!(summary.total, 3);
        assert_eq!(summary.completed, 1);
        assert_eq!(summary.remaining, 2);
        assert_eq!(summary.percentage, 33);
    }

    #[test]
    fn empty_daily_summary_is_zero_percent() {
        let summary = DailySummary::compute(&[]);
        assert_eq!(summary.percentage, 0);
    }

    #[test]
    fn priority_buckets() {
        let mut high = todo(false, false, None);
        high.priority = Some("high".to_string());
        let mut low = todo(false, false, None);
        low.priority = Some("low".to_string());
        let plain = todo(false, false, None);

        let buckets = TodosByPriority::bucket(vec![high, low, plain]);
        assert_eq!(buckets.high.len(), 1);
        assert_eq!(buckets.medium.len(), 0);
        assert_eq!(buckets.low.len(), 1);
        assert_eq!(buckets.none.len(), 1);
    }
}
