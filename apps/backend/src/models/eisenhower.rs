//! Eisenhower matrix entity, summaries, and API types.

use chrono::{DateTime, Utc};
use lifetrack_core::Quadrant;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Matrix task row. Quadrant is stored as its wire literal.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct EisenhowerTask {
    pub id: Uuid,
    pub text: String,
    pub quadrant: String,
    pub is_completed: bool,
    pub completed_at: Option<DateTime<Utc>>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl EisenhowerTask {
    pub fn in_quadrant(&self, quadrant: Quadrant) -> bool {
        self.quadrant == quadrant.as_str()
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CreateTaskRequest {
    pub text: String,
    pub quadrant: Quadrant,
    pub notes: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UpdateTaskRequest {
    pub text: Option<String>,
    pub quadrant: Option<Quadrant>,
    pub notes: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MoveTaskRequest {
    pub quadrant: Quadrant,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct IncludeCompletedQuery {
    pub include_completed: Option<bool>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ClearCompletedQuery {
    pub quadrant: Option<Quadrant>,
}

/// Tasks organized into the four quadrant buckets.
#[derive(Debug, Serialize)]
pub struct Matrix {
    pub urgent_important: Vec<EisenhowerTask>,
    pub not_urgent_important: Vec<EisenhowerTask>,
    pub urgent_not_important: Vec<EisenhowerTask>,
    pub not_urgent_not_important: Vec<EisenhowerTask>,
}

impl Matrix {
    pub fn bucket(tasks: Vec<EisenhowerTask>) -> Self {
        let mut matrix = Self {
            urgent_important: Vec::new(),
            not_urgent_important: Vec::new(),
            urgent_not_important: Vec::new(),
            not_urgent_not_important: Vec::new(),
        };
        for task in tasks {
            match Quadrant::from_str(&task.quadrant) {
                Some(Quadrant::UrgentImportant) => matrix.urgent_important.push(task),
                Some(Quadrant::NotUrgentImportant) => matrix.not_urgent_important.push(task),
                Some(Quadrant::UrgentNotImportant) => matrix.urgent_not_important.push(task),
                Some(Quadrant::NotUrgentNotImportant) | None => {
                    matrix.not_urgent_not_important.push(task)
                }
            }
        }
        matrix
    }
}

/// Active/completed counts for one quadrant.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct QuadrantSummary {
    pub total: usize,
    pub completed: usize,
}

/// Per-quadrant counts plus totals.
#[derive(Debug, Serialize)]
pub struct MatrixSummary {
    pub urgent_important: QuadrantSummary,
    pub not_urgent_important: QuadrantSummary,
    pub urgent_not_important: QuadrantSummary,
    pub not_urgent_not_important: QuadrantSummary,
    pub total_active: usize,
    pub total_completed: usize,
}

impl MatrixSummary {
    pub fn compute(tasks: &[EisenhowerTask]) -> Self {
        let summarize = |quadrant: Quadrant| QuadrantSummary {
            total: tasks
                .iter()
                .filter(|t| t.in_quadrant(quadrant) && !t.is_completed)
                .count(),
            completed: tasks
                .iter()
                .filter(|t| t.in_quadrant(quadrant) && t.is_completed)
                .count(),
        };
        Self {
            urgent_important: summarize(Quadrant::UrgentImportant),
            not_urgent_important: summarize(Quadrant::NotUrgentImportant),
            urgent_not_important: summarize(Quadrant::UrgentNotImportant),
            not_urgent_not_important: summarize(Quadrant::NotUrgentNotImportant),
            total_active: tasks.iter().filter(|t| !t.is_completed).count(),
            total_completed: tasks.iter().filter(|t| t.is_completed).count(),
        }
    }
}

/// Focus recommendation with the counts that drove it.
#[derive(Debug, Serialize)]
pub struct FocusResponse {
    pub priority: lifetrack_core::FocusPriority,
    pub recommendation: &'static str,
    pub urgent_important_count: usize,
    pub not_urgent_important_count: usize,
}

impl FocusResponse {
    pub fn compute(tasks: &[EisenhowerTask]) -> Self {
        let open = |quadrant: Quadrant| {
            tasks
                .iter()
                .filter(|t| t.in_quadrant(quadrant) && !t.is_completed)
                .count()
        };
        let urgent_important_count = open(Quadrant::UrgentImportant);
        let not_urgent_important_count = open(Quadrant::NotUrgentImportant);
        let focus =
            lifetrack_core::recommend_focus(urgent_important_count, not_urgent_important_count);
        Self {
            priority: focus.priority,
            recommendation: focus.recommendation,
            urgent_important_count,
            not_urgent_important_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lifetrack_core::FocusPriority;
    use pretty_assertions::assert_eq;

    fn task(quadrant: Quadrant, is_completed: bool) -> EisenhowerTask {
        EisenhowerTask {
            id: Uuid::new_v4(),
            text: "task".to_string(),
            quadrant: quadrant.as_str().to_string(),
            is_completed,
            completed_at: None,
            notes: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn matrix_buckets_by_quadrant() {
        let tasks = vec![
            task(Quadrant::UrgentImportant, false),
            task(Quadrant::UrgentImportant, true),
            task(Quadrant::NotUrgentNotImportant, false),
        ];
        let matrix = Matrix::bucket(tasks);
        assert_eq!(matrix.urgent_important.len(), 2);
        assert_eq!(matrix.not_urgent_important.len(), 0);
        assert_eq!(matrix.not_urgent_not_important.len(), 1);
    }

    #[test]
    fn summary_separates_active_and_completed() {
        let tasks = vec![
            task(Quadrant::UrgentImportant, false),
            task(Quadrant::UrgentImportant, true),
            task(Quadrant::UrgentNotImportant, true),
        ];
        let summary = MatrixSummary::compute(&tasks);
        assert_eq!(
            summary.urgent_important,
            QuadrantSummary {
                total: 1,
                completed: 1
            }
        );
        assert_eq!(summary.total_active, 1);
        assert_eq!(summary.total_completed, 2);
    }

    #[test]
    fn focus_prefers_open_urgent_important() {
        let tasks = vec![
            task(Quadrant::UrgentImportant, false),
            task(Quadrant::NotUrgentImportant, false),
        ];
        let focus = FocusResponse::compute(&tasks);
        assert_eq!(focus.priority, FocusPriority::UrgentImportant);
        assert_eq!(focus.urgent_important_count, 1);
    }

    #[test]
    fn focus_schedules_when_urgent_done() {
        let tasks = vec![
            task(Quadrant::UrgentImportant, true),
            task(Quadrant::NotUrgentImportant, false),
        ];
        let focus = FocusResponse::compute(&tasks);
        assert_eq!(focus.priority, FocusPriority::NotUrgentImportant);
    }

    #[test]
    fn focus_none_when_important_work_is_done() {
        let tasks = vec![task(Quadrant::UrgentNotImportant, false)];
        let focus = FocusResponse::compute(&tasks);
        assert_eq!(focus.priority, FocusPriority::None);
    }
}
