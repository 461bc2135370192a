//! Filter types for querying tasks.

use super::{Priority, TaskStatus};

/// Filter options for querying tasks across plans.
#[derive(Debug, Clone, Default)]
pub struct TaskFilter {
    /// Restrict to tasks belonging to a specific plan
    pub plan_id: Option<u64>,

    /// Filter by task status
    pub status: Option<TaskStatus>,

    /// Filter by task priority
    pub priority: Option<Priority>,
}

impl TaskFilter {
    /// Create a filter matching every task of a single plan.
    pub fn for_plan(plan_id: u64) -> Self {
        Self {
            plan_id: Some(plan_id),
            ..Default::default()
        }
    }
}

