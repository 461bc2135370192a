//! Plan operations for the Planner.

use tokio::task;

use super::Planner;
use crate::{
    error::{ConfigResultExt, PlannerError, Result},
    generator::{generate_with_fallback, GenerateRequest},
    models::Plan,
    params::{DeletePlan, GeneratePlan, Id, ListPlans},
};

impl Planner {
    /// Generates and persists a plan for a free-text goal.
    ///
    /// This is the system's primary operation: it runs the generator (via
    /// the provider seam when one is configured), creates the goal record,
    /// and stores the plan and its tasks in one transaction. Invalid input
    /// fails before anything is written.
    pub async fn generate_plan(&self, params: &GeneratePlan) -> Result<Plan> {
        let db_path = self.db_path.clone();
        let provider = self.provider.clone();
        let goal_text = params.goal.trim().to_string();
        let title = params.title.clone();
        let request = GenerateRequest {
            goal: params.goal.clone(),
            timeline_weeks: params.timeline_weeks,
            context: params.context.clone(),
        };

        task::spawn_blocking(move || {
            let generated = generate_with_fallback(provider.as_deref(), &request)?;

            let mut db = crate::db::Database::new(&db_path)?;
            let goal = db.create_goal(&goal_text, None, &goal_text)?;

            let plan_title = title.unwrap_or_else(|| format!("Plan for {goal_text}"));
            let description = format!("Generated plan for: {goal_text}");
            db.create_plan_with_tasks(goal.id, &plan_title, Some(&description), &generated)
        })
        .await
        .config_context("Task join error")?
    }

    /// Retrieves a plan by its ID with its tasks loaded.
    pub async fn get_plan(&self, params: &Id) -> Result<Option<Plan>> {
        let db_path = self.db_path.clone();
        let plan_id = params.id;

        task::spawn_blocking(move || {
            let db = crate::db::Database::new(&db_path)?;
            db.get_plan(plan_id)
        })
        .await
        .config_context("Task join error")?
    }

    /// Lists plans with their tasks, optionally restricted to one goal.
    pub async fn list_plans(&self, params: &ListPlans) -> Result<Vec<Plan>> {
        let db_path = self.db_path.clone();
        let goal_id = params.goal_id;

        task::spawn_blocking(move || {
            let db = crate::db::Database::new(&db_path)?;
            db.list_plans(goal_id)
        })
        .await
        .config_context("Task join error")?
    }

    /// Lists plan summaries with task counts for list display.
    pub async fn list_plan_summaries(
        &self,
        params: &ListPlans,
    ) -> Result<crate::display::PlanSummaries> {
        let db_path = self.db_path.clone();
        let goal_id = params.goal_id;

        let summaries = task::spawn_blocking(move || {
            let db = crate::db::Database::new(&db_path)?;
            db.list_plan_summaries(goal_id)
        })
        .await
        .config_context("Task join error")??;

        Ok(crate::display::PlanSummaries(summaries))
    }

    /// Permanently deletes a plan and all its tasks.
    ///
    /// Requires explicit confirmation via the `confirmed` field. Uses
    /// get-before-delete to return the deleted plan for display, or None
    /// if it doesn't exist.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::InvalidInput` if `confirmed` is false
    pub async fn delete_plan(&self, params: &DeletePlan) -> Result<Option<Plan>> {
        if !params.confirmed {
            return Err(PlannerError::InvalidInput {
                field: "confirmed".to_string(),
                reason: "Plan deletion requires explicit confirmation. Set 'confirmed' to true to proceed with permanent deletion.".to_string(),
            });
        }

        let id_params = Id { id: params.id };
        let plan = self.get_plan(&id_params).await?;

        if plan.is_some() {
            let db_path = self.db_path.clone();
            let plan_id = params.id;

            task::spawn_blocking(move || {
                let mut db = crate::db::Database::new(&db_path)?;
                db.delete_plan(plan_id)
            })
            .await
            .config_context("Task join error")??;
        }

        Ok(plan)
    }
}
