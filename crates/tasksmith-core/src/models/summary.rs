//! Plan summary types and functionality.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::{Plan, TaskStatus};

/// Summary information about a plan with task statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanSummary {
    /// Plan ID
    pub id: u64,
    /// ID of the goal this plan belongs to
    pub goal_id: u64,
    /// Title of the plan
    pub title: String,
    /// Optional description of the plan
    pub description: Option<String>,
    /// Total estimated duration in working days
    pub estimated_days: u32,
    /// Creation timestamp
    pub created_at: Timestamp,
    /// Last update timestamp
    pub updated_at: Timestamp,
    /// Total number of tasks
    pub total_tasks: u32,
    /// Number of completed tasks
    pub completed_tasks: u32,
    /// Number of tasks not yet completed or cancelled
    pub pending_tasks: u32,
}

impl From<&Plan> for PlanSummary {
    fn from(plan: &Plan) -> Self {
        let total_tasks = plan.tasks.len() as u32;
        let completed_tasks = plan
            .tasks
            .iter()
            .filter(|task| task.status == TaskStatus::Completed)
            .count() as u32;
        let cancelled_tasks = plan
            .tasks
            .iter()
            .filter(|task| task.status == TaskStatus::Cancelled)
            .count() as u32;

        Self {
            id: plan.id,
            goal_id: plan.goal_id,
            title: plan.title.clone(),
            description: plan.description.clone(),
            estimated_days: plan.estimated_days,
            created_at: plan.created_at,
            updated_at: plan.updated_at,
            total_tasks,
            completed_tasks,
            pending_tasks: total_tasks - completed_tasks - cancelled_tasks,
        }
    }
}
