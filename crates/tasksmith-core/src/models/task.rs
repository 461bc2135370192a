//! Task model definition and related functionality.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::{Priority, TaskStatus};

/// Represents a single actionable unit within a plan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Task {
    /// Unique identifier for the task
    pub id: u64,

    /// ID of the parent plan
    pub plan_id: u64,

    /// Brief title of the task
    pub title: String,

    /// Detailed description of the task
    pub description: Option<String>,

    /// Priority of the task
    pub priority: Priority,

    /// Current status of the task
    pub status: TaskStatus,

    /// Estimated effort in hours (always at least 1)
    pub estimated_hours: u32,

    /// When the task is due (UTC)
    pub due_date: Timestamp,

    /// IDs of tasks within the same plan that must precede this one.
    /// Only tasks at an earlier position may appear here.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub depends_on: Vec<u64>,

    /// Order of the task within the plan (0-indexed)
    pub position: u32,

    /// Timestamp when the task was created (UTC)
    pub created_at: Timestamp,

    /// Timestamp when the task was last updated (UTC)
    pub updated_at: Timestamp,
}
