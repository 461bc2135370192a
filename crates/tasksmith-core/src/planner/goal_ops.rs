//! Goal operations for the Planner.

use tokio::task;

use super::Planner;
use crate::{
    error::{ConfigResultExt, PlannerError, Result},
    models::Goal,
    params::{CreateGoal, DeleteGoal, Id, UpdateGoal},
};

impl Planner {
    /// Creates a new goal. The raw user input defaults to the title when
    /// not provided separately.
    pub async fn create_goal(&self, params: &CreateGoal) -> Result<Goal> {
        let db_path = self.db_path.clone();
        let title = params.title.clone();
        let description = params.description.clone();
        let user_input = params.user_input.clone().unwrap_or_else(|| title.clone());

        task::spawn_blocking(move || {
            let mut db = crate::db::Database::new(&db_path)?;
            db.create_goal(&title, description.as_deref(), &user_input)
        })
        .await
        .config_context("Task join error")?
    }

    /// Retrieves a goal by its ID with its plans and tasks loaded.
    pub async fn get_goal(&self, params: &Id) -> Result<Option<Goal>> {
        let db_path = self.db_path.clone();
        let goal_id = params.id;

        task::spawn_blocking(move || {
            let db = crate::db::Database::new(&db_path)?;
            db.get_goal(goal_id)
        })
        .await
        .config_context("Task join error")?
    }

    /// Lists all goals, newest first.
    pub async fn list_goals(&self) -> Result<crate::display::Goals> {
        let db_path = self.db_path.clone();

        let goals = task::spawn_blocking(move || {
            let db = crate::db::Database::new(&db_path)?;
            db.list_goals()
        })
        .await
        .config_context("Task join error")??;

        Ok(crate::display::Goals(goals))
    }

    /// Updates a goal's title and/or description and returns the updated
    /// goal.
    pub async fn update_goal(&self, params: &UpdateGoal) -> Result<Goal> {
        let db_path = self.db_path.clone();
        let goal_id = params.id;
        let title = params.title.clone();
        let description = params.description.clone();

        task::spawn_blocking(move || {
            let mut db = crate::db::Database::new(&db_path)?;
            db.update_goal(goal_id, title.as_deref(), description.as_deref())?;
            db.get_goal(goal_id)?
                .ok_or(PlannerError::GoalNotFound { id: goal_id })
        })
        .await
        .config_context("Task join error")?
    }

    /// Permanently deletes a goal with all its plans and tasks.
    ///
    /// Requires explicit confirmation via the `confirmed` field to prevent
    /// accidental deletion. Uses get-before-delete to return the deleted
    /// goal for display, or None if it doesn't exist.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::InvalidInput` if `confirmed` is false
    pub async fn delete_goal(&self, params: &DeleteGoal) -> Result<Option<Goal>> {
        if !params.confirmed {
            return Err(PlannerError::InvalidInput {
                field: "confirmed".to_string(),
                reason: "Goal deletion removes all its plans and tasks. Set 'confirmed' to true to proceed with permanent deletion.".to_string(),
            });
        }

        let id_params = Id { id: params.id };
        let goal = self.get_goal(&id_params).await?;

        if goal.is_some() {
            let db_path = self.db_path.clone();
            let goal_id = params.id;

            task::spawn_blocking(move || {
                let mut db = crate::db::Database::new(&db_path)?;
                db.delete_goal(goal_id)
            })
            .await
            .config_context("Task join error")??;
        }

        Ok(goal)
    }
}
