//! Task operations for the Planner.

use tokio::task;

use super::Planner;
use crate::{
    error::{ConfigResultExt, PlannerError, Result},
    models::{Task, UpdateTaskRequest},
    params::{AddTask, Id, ListTasks, UpdateTask},
};

impl Planner {
    /// Retrieves a single task by its ID.
    pub async fn get_task(&self, params: &Id) -> Result<Option<Task>> {
        let db_path = self.db_path.clone();
        let task_id = params.id;

        task::spawn_blocking(move || {
            let db = crate::db::Database::new(&db_path)?;
            db.get_task(task_id)
        })
        .await
        .config_context("Task join error")?
    }

    /// Lists tasks with optional plan/status/priority filters.
    pub async fn list_tasks(&self, params: &ListTasks) -> Result<crate::display::Tasks> {
        let filter = params.validate()?;
        let db_path = self.db_path.clone();

        let tasks = task::spawn_blocking(move || {
            let db = crate::db::Database::new(&db_path)?;
            db.list_tasks(&filter)
        })
        .await
        .config_context("Task join error")??;

        Ok(crate::display::Tasks(tasks))
    }

    /// Appends a new task to an existing plan.
    pub async fn add_task(&self, params: &AddTask) -> Result<Task> {
        let (priority, estimated_hours, due_date) = params.validate()?;
        let db_path = self.db_path.clone();
        let plan_id = params.plan_id;
        let title = params.title.clone();
        let description = params.description.clone();
        let depends_on = params.depends_on.clone();

        task::spawn_blocking(move || {
            let mut db = crate::db::Database::new(&db_path)?;
            db.add_task(
                plan_id,
                &title,
                description.as_deref(),
                priority,
                estimated_hours,
                due_date,
                depends_on,
            )
        })
        .await
        .config_context("Task join error")?
    }

    /// Updates task details and returns the updated task.
    pub async fn update_task(&self, params: &UpdateTask) -> Result<Task> {
        let task_id = params.id;
        let request = UpdateTaskRequest::try_from(params.clone())?;
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let mut db = crate::db::Database::new(&db_path)?;
            db.update_task(task_id, request)?;
            db.get_task(task_id)?
                .ok_or(PlannerError::TaskNotFound { id: task_id })
        })
        .await
        .config_context("Task join error")?
    }
}
