//! Parameter structures for Tasksmith operations
//!
//! This module contains shared parameter structures that can be used across
//! different interfaces (CLI, future REST API, etc.) without
//! framework-specific derives or dependencies. These structures provide a
//! clean interface for passing data between different layers of the
//! application.
//!
//! ## Architecture: Parameter Wrapper Pattern
//!
//! Interface layers define their own wrapper structs (e.g. clap `Args`
//! types in the CLI) and convert into these core parameters via `From`
//! impls. That keeps the core free of UI framework dependencies while the
//! planner methods accept one canonical parameter type per operation.
//!
//! String-typed fields such as `status` and `priority` are parsed and
//! validated by `validate()` methods on the parameter structs, so bad
//! values surface as `InvalidInput` errors before any database work
//! happens.

use serde::{Deserialize, Serialize};

use crate::error::{invalid_input, Result};
use crate::models::{Priority, TaskFilter, TaskStatus};

/// Generic parameters for operations requiring just an ID.
///
/// Used for operations like show_goal, show_plan, and show_task.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Id {
    /// The ID of the resource to operate on
    pub id: u64,
}

/// Parameters for creating a new goal.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateGoal {
    /// Title of the goal (required)
    pub title: String,
    /// Optional detailed description of the goal
    pub description: Option<String>,
    /// The raw text the user submitted; defaults to the title when absent
    pub user_input: Option<String>,
}

/// Parameters for updating an existing goal.
///
/// Allows partial updates; unset fields keep their current values.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateGoal {
    /// Goal ID to update (required)
    pub id: u64,
    /// Updated title of the goal
    pub title: Option<String>,
    /// Updated detailed description of the goal
    pub description: Option<String>,
}

/// Parameters for deleting a goal and everything under it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeleteGoal {
    /// Goal ID to delete
    pub id: u64,
    /// Deletion is destructive and must be explicitly confirmed
    #[serde(default)]
    pub confirmed: bool,
}

/// Parameters for generating a plan from a free-text goal.
///
/// This is the primary entry point of the system: it creates the goal,
/// runs the generator, and persists the resulting plan and tasks.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GeneratePlan {
    /// Free-text goal to break down (required)
    pub goal: String,
    /// Requested timeline in weeks (required, at least 1)
    pub timeline_weeks: u32,
    /// Optional extra context considered during classification
    pub context: Option<String>,
    /// Optional plan title; derived from the goal when absent
    pub title: Option<String>,
}

/// Parameters for listing plans.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListPlans {
    /// Restrict to plans belonging to a specific goal
    pub goal_id: Option<u64>,
}

/// Parameters for deleting a plan and its tasks.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeletePlan {
    /// Plan ID to delete
    pub id: u64,
    /// Deletion is destructive and must be explicitly confirmed
    #[serde(default)]
    pub confirmed: bool,
}

/// Parameters for adding a task to an existing plan.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AddTask {
    /// ID of the plan to add the task to
    pub plan_id: u64,
    /// Title of the task (required)
    pub title: String,
    /// Optional detailed description of the task
    pub description: Option<String>,
    /// Priority ('low', 'medium', 'high', or 'urgent'); defaults to medium
    pub priority: Option<String>,
    /// Estimated effort in hours; defaults to 1
    pub estimated_hours: Option<u32>,
    /// Due date as an RFC 3339 timestamp; derived from the estimate when
    /// absent
    pub due_date: Option<String>,
    /// IDs of existing tasks in the same plan this task depends on
    #[serde(default)]
    pub depends_on: Vec<u64>,
}

impl AddTask {
    /// Validate task creation parameters.
    ///
    /// Returns the parsed priority, the estimated hours with the default
    /// applied, and the parsed due date if one was given.
    ///
    /// # Errors
    ///
    /// * `PlannerError::InvalidInput` - When the priority or due date
    ///   string is invalid, or the estimate is zero
    pub fn validate(&self) -> Result<(Priority, u32, Option<jiff::Timestamp>)> {
        let priority = match &self.priority {
            Some(priority_str) => priority_str.parse::<Priority>().map_err(|_| {
                invalid_input(
                    "priority",
                    format!(
                        "Invalid priority: {priority_str}. Must be 'low', 'medium', 'high', or 'urgent'"
                    ),
                )
            })?,
            None => Priority::default(),
        };

        let estimated_hours = self.estimated_hours.unwrap_or(1);
        if estimated_hours == 0 {
            return Err(invalid_input(
                "estimated_hours",
                "Estimated hours must be at least 1",
            ));
        }

        let due_date = self
            .due_date
            .as_deref()
            .map(|due| {
                due.parse::<jiff::Timestamp>().map_err(|_| {
                    invalid_input(
                        "due_date",
                        format!("Invalid due date: {due}. Expected an RFC 3339 timestamp"),
                    )
                })
            })
            .transpose()?;

        Ok((priority, estimated_hours, due_date))
    }
}

/// Parameters for listing tasks across plans.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListTasks {
    /// Restrict to tasks belonging to a specific plan
    pub plan_id: Option<u64>,
    /// Filter by status ('pending', 'in_progress', 'completed', 'cancelled')
    pub status: Option<String>,
    /// Filter by priority ('low', 'medium', 'high', 'urgent')
    pub priority: Option<String>,
}

impl ListTasks {
    /// Parse the filter strings into a typed [`TaskFilter`].
    ///
    /// # Errors
    ///
    /// * `PlannerError::InvalidInput` - When the status or priority string
    ///   is invalid
    pub fn validate(&self) -> Result<TaskFilter> {
        let status = self
            .status
            .as_deref()
            .map(|status_str| {
                status_str.parse::<TaskStatus>().map_err(|_| {
                    invalid_input(
                        "status",
                        format!(
                            "Invalid status: {status_str}. Must be 'pending', 'in_progress', 'completed', or 'cancelled'"
                        ),
                    )
                })
            })
            .transpose()?;

        let priority = self
            .priority
            .as_deref()
            .map(|priority_str| {
                priority_str.parse::<Priority>().map_err(|_| {
                    invalid_input(
                        "priority",
                        format!(
                            "Invalid priority: {priority_str}. Must be 'low', 'medium', 'high', or 'urgent'"
                        ),
                    )
                })
            })
            .transpose()?;

        Ok(TaskFilter {
            plan_id: self.plan_id,
            status,
            priority,
        })
    }
}

/// Parameters for updating an existing task.
///
/// Allows partial updates to task properties; unset fields keep their
/// current values.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateTask {
    /// Task ID to update (required)
    pub id: u64,
    /// Updated title of the task
    pub title: Option<String>,
    /// Updated detailed description of the task
    pub description: Option<String>,
    /// New priority ('low', 'medium', 'high', or 'urgent')
    pub priority: Option<String>,
    /// New status ('pending', 'in_progress', 'completed', or 'cancelled')
    pub status: Option<String>,
    /// Updated effort estimate in hours
    pub estimated_hours: Option<u32>,
    /// Updated due date as an RFC 3339 timestamp
    pub due_date: Option<String>,
    /// Replacement dependency list; must reference earlier tasks in the
    /// same plan
    pub depends_on: Option<Vec<u64>>,
}

impl UpdateTask {
    /// Validate task update parameters and return the parsed fields.
    ///
    /// # Errors
    ///
    /// * `PlannerError::InvalidInput` - When the status, priority, or due
    ///   date string is invalid, or the estimate is zero
    pub fn validate(
        &self,
    ) -> Result<(
        Option<TaskStatus>,
        Option<Priority>,
        Option<jiff::Timestamp>,
    )> {
        let status = self
            .status
            .as_deref()
            .map(|status_str| {
                status_str.parse::<TaskStatus>().map_err(|_| {
                    invalid_input(
                        "status",
                        format!(
                            "Invalid status: {status_str}. Must be 'pending', 'in_progress', 'completed', or 'cancelled'"
                        ),
                    )
                })
            })
            .transpose()?;

        let priority = self
            .priority
            .as_deref()
            .map(|priority_str| {
                priority_str.parse::<Priority>().map_err(|_| {
                    invalid_input(
                        "priority",
                        format!(
                            "Invalid priority: {priority_str}. Must be 'low', 'medium', 'high', or 'urgent'"
                        ),
                    )
                })
            })
            .transpose()?;

        if self.estimated_hours == Some(0) {
            return Err(invalid_input(
                "estimated_hours",
                "Estimated hours must be at least 1",
            ));
        }

        let due_date = self
            .due_date
            .as_deref()
            .map(|due| {
                due.parse::<jiff::Timestamp>().map_err(|_| {
                    invalid_input(
                        "due_date",
                        format!("Invalid due date: {due}. Expected an RFC 3339 timestamp"),
                    )
                })
            })
            .transpose()?;

        Ok((status, priority, due_date))
    }
}
