//! Todo hierarchy rules and daily-reset view derivation.

use chrono::{DateTime, Utc};

use crate::error::{DomainError, Result};

/// Deepest allowed subtask level (0 = top level, 1 = subtask,
/// 2 = sub-subtask).
pub const MAX_TODO_LEVEL: i32 = 2;

/// Level for a new child of a todo at `parent_level`.
pub fn child_level(parent_level: i32) -> Result<i32> {
    let level = parent_level + 1;
    if level > MAX_TODO_LEVEL {
        return Err(DomainError::MaxDepthExceeded);
    }
    Ok(level)
}

/// Completion flag as reported to clients.
///
/// A daily todo completed on an earlier calendar day than `now` reads
/// as incomplete. This is a view-level correction only; stored state
/// stays untouched until the user toggles again.
pub fn derived_completion(
    is_daily: bool,
    is_completed: bool,
    last_completed_at: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
) -> bool {
    if is_daily && is_completed {
        if let Some(completed) = last_completed_at {
            if completed.date_naive() < now.date_naive() {
                return false;
            }
        }
    }
    is_completed
}
