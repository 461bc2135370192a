//! Plan model definition and related functionality.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::Task;

/// Represents one generated breakdown of a goal into tasks.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Plan {
    /// Unique identifier for the plan
    pub id: u64,

    /// ID of the goal this plan belongs to
    pub goal_id: u64,

    /// Title of the plan
    pub title: String,

    /// Optional description of the plan
    pub description: Option<String>,

    /// Total estimated duration in working days
    pub estimated_days: u32,

    /// Human-readable explanation of the template choice and scaling
    /// applied when this plan was generated
    pub rationale: String,

    /// Timestamp when the plan was created (UTC)
    pub created_at: Timestamp,

    /// Timestamp when the plan was last modified (UTC)
    pub updated_at: Timestamp,

    /// Associated tasks in plan order
    #[serde(default)]
    pub tasks: Vec<Task>,
}
