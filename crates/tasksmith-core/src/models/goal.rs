//! Goal model definition and related functionality.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::Plan;

/// Represents a user goal with its generated plans.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Goal {
    /// Unique identifier for the goal
    pub id: u64,

    /// Short title of the goal
    pub title: String,

    /// Optional longer description or context
    pub description: Option<String>,

    /// The raw free-text objective as the user entered it. This is the
    /// text the plan generator classifies and customizes tasks from.
    pub user_input: String,

    /// Timestamp when the goal was created (UTC)
    pub created_at: Timestamp,

    /// Timestamp when the goal was last modified (UTC)
    pub updated_at: Timestamp,

    /// Generated plans for this goal (eager-loaded on show)
    #[serde(default)]
    pub plans: Vec<Plan>,
}
