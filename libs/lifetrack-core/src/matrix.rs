//! Eisenhower matrix focus heuristic.

use serde::Serialize;

/// Which quadrant the focus recommendation points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FocusPriority {
    #[serde(rename = "urgent-important")]
    UrgentImportant,
    #[serde(rename = "not-urgent-important")]
    NotUrgentImportant,
    #[serde(rename = "none")]
    None,
}

/// Focus recommendation derived from open task counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Focus {
    pub priority: FocusPriority,
    pub recommendation: &'static str,
}

/// Pick the quadrant to work on next.
///
/// Open urgent-important tasks always win; otherwise open
/// not-urgent-important tasks should be scheduled; otherwise there is
/// nothing left but delegation or elimination.
pub fn recommend_focus(open_urgent_important: usize, open_not_urgent_important: usize) -> Focus {
    if open_urgent_important > 0 {
        Focus {
            priority: FocusPriority::UrgentImportant,
            recommendation: "Focus on urgent and important tasks first (Do First)",
        }
    } else if open_not_urgent_important > 0 {
        Focus {
            priority: FocusPriority::NotUrgentImportant,
            recommendation: "Schedule time for important but not urgent tasks",
        }
    } else {
        Focus {
            priority: FocusPriority::None,
            recommendation: "Great job! Consider delegating or eliminating remaining tasks",
        }
    }
}
