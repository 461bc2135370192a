//! Request types for updating models.

use jiff::Timestamp;

use super::{Priority, TaskStatus};

/// Parameters for updating a task to reduce function argument count.
///
/// All fields are optional; unset fields keep their current value.
#[derive(Debug, Default)]
pub struct UpdateTaskRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub priority: Option<Priority>,
    pub status: Option<TaskStatus>,
    pub estimated_hours: Option<u32>,
    pub due_date: Option<Timestamp>,
    pub depends_on: Option<Vec<u64>>,
}

impl UpdateTaskRequest {
    /// True when no field is set, i.e. the update is a no-op.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.priority.is_none()
            && self.status.is_none()
            && self.estimated_hours.is_none()
            && self.due_date.is_none()
            && self.depends_on.is_none()
    }
}

impl TryFrom<crate::params::UpdateTask> for UpdateTaskRequest {
    type Error = crate::PlannerError;

    /// Convert UpdateTask parameters into a validated UpdateTaskRequest.
    ///
    /// Parses the string-typed status, priority, and due date fields into
    /// their typed counterparts, failing with `InvalidInput` on bad values.
    fn try_from(params: crate::params::UpdateTask) -> Result<Self, Self::Error> {
        let (status, priority, due_date) = params.validate()?;

        Ok(Self {
            title: params.title,
            description: params.description,
            priority,
            status,
            estimated_hours: params.estimated_hours,
            due_date,
            depends_on: params.depends_on,
        })
    }
}
