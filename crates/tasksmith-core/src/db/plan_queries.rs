//! Plan CRUD operations and queries.

use jiff::Timestamp;
use rusqlite::{params, types::Type, OptionalExtension};

use crate::{
    error::{DatabaseResultExt, PlannerError, Result},
    generator::GeneratedPlan,
    models::{Plan, PlanSummary, Task, TaskStatus},
};

// SQL queries as const strings
const INSERT_PLAN_SQL: &str = "INSERT INTO plans (goal_id, title, description, estimated_days, rationale, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)";
const SELECT_PLAN_SQL: &str = "SELECT id, goal_id, title, description, estimated_days, rationale, created_at, updated_at FROM plans WHERE id = ?1";
const SELECT_PLANS_SQL: &str = "SELECT id, goal_id, title, description, estimated_days, rationale, created_at, updated_at FROM plans";
const INSERT_TASK_SQL: &str = "INSERT INTO tasks (plan_id, title, description, priority, status, estimated_hours, due_date, depends_on, position, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)";
const CHECK_GOAL_EXISTS_SQL: &str = "SELECT EXISTS(SELECT 1 FROM goals WHERE id = ?1)";
const CHECK_PLAN_EXISTS_SQL: &str = "SELECT EXISTS(SELECT 1 FROM plans WHERE id = ?1)";
const UPDATE_GOAL_TIMESTAMP_SQL: &str = "UPDATE goals SET updated_at = ?1 WHERE id = ?2";
const UPDATE_GOAL_TIMESTAMP_BY_PLAN_SQL: &str =
    "UPDATE goals SET updated_at = ?1 WHERE id = (SELECT goal_id FROM plans WHERE id = ?2)";
const DELETE_PLAN_TASKS_SQL: &str = "DELETE FROM tasks WHERE plan_id = ?1";
const DELETE_PLAN_SQL: &str = "DELETE FROM plans WHERE id = ?1";

const PLAN_SUMMARY_COLUMNS: &str = "id, goal_id, title, description, estimated_days, created_at, updated_at, total_tasks, completed_tasks, pending_tasks";
const PLAN_SUMMARIES_VIEW: &str = "plan_summaries";

impl super::Database {
    /// Helper function to construct a Plan from a database row
    fn build_plan_from_row(row: &rusqlite::Row) -> rusqlite::Result<Plan> {
        Ok(Plan {
            id: row.get::<_, i64>(0)? as u64,
            goal_id: row.get::<_, i64>(1)? as u64,
            title: row.get(2)?,
            description: row.get(3)?,
            estimated_days: row.get::<_, i64>(4)? as u32,
            rationale: row.get(5)?,
            created_at: row.get::<_, String>(6)?.parse::<Timestamp>().map_err(|e| {
                rusqlite::Error::FromSqlConversionFailure(6, Type::Text, Box::new(e))
            })?,
            updated_at: row.get::<_, String>(7)?.parse::<Timestamp>().map_err(|e| {
                rusqlite::Error::FromSqlConversionFailure(7, Type::Text, Box::new(e))
            })?,
            tasks: Vec::new(),
        })
    }

    /// Persists a generated plan and all its tasks for a goal in one
    /// transaction.
    ///
    /// Generated tasks reference their dependencies by list index; those
    /// indices are mapped to the real row IDs assigned during insertion.
    pub fn create_plan_with_tasks(
        &mut self,
        goal_id: u64,
        title: &str,
        description: Option<&str>,
        generated: &GeneratedPlan,
    ) -> Result<Plan> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let goal_exists: bool = tx
            .query_row(CHECK_GOAL_EXISTS_SQL, params![goal_id as i64], |row| {
                row.get(0)
            })
            .map_err(|e| PlannerError::database_error("Failed to check goal existence", e))?;

        if !goal_exists {
            return Err(PlannerError::GoalNotFound { id: goal_id });
        }

        let now = Timestamp::now();
        let now_str = now.to_string();

        tx.execute(
            INSERT_PLAN_SQL,
            params![
                goal_id as i64,
                title,
                description,
                i64::from(generated.estimated_days),
                &generated.rationale,
                &now_str,
                &now_str
            ],
        )
        .map_err(|e| PlannerError::database_error("Failed to insert plan", e))?;

        let plan_id = tx.last_insert_rowid() as u64;

        let mut task_ids: Vec<u64> = Vec::with_capacity(generated.tasks.len());
        let mut tasks: Vec<Task> = Vec::with_capacity(generated.tasks.len());

        for (position, task) in generated.tasks.iter().enumerate() {
            // Map dependency indices to the row IDs assigned above
            let mut depends_on: Vec<u64> = Vec::with_capacity(task.depends_on.len());
            for &index in &task.depends_on {
                let dep_id = task_ids.get(index).copied().ok_or_else(|| {
                    PlannerError::invalid_input(
                        "depends_on",
                        format!("Task at position {position} references a later task"),
                    )
                })?;
                depends_on.push(dep_id);
            }

            let depends_str = if depends_on.is_empty() {
                None
            } else {
                Some(
                    depends_on
                        .iter()
                        .map(u64::to_string)
                        .collect::<Vec<_>>()
                        .join(","),
                )
            };

            tx.execute(
                INSERT_TASK_SQL,
                params![
                    plan_id as i64,
                    &task.title,
                    &task.description,
                    task.priority.as_str(),
                    TaskStatus::Pending.as_str(),
                    i64::from(task.estimated_hours),
                    task.due_date.to_string(),
                    depends_str.as_deref(),
                    position as i64,
                    &now_str,
                    &now_str
                ],
            )
            .map_err(|e| PlannerError::database_error("Failed to insert task", e))?;

            let id = tx.last_insert_rowid() as u64;
            task_ids.push(id);

            tasks.push(Task {
                id,
                plan_id,
                title: task.title.clone(),
                description: Some(task.description.clone()),
                priority: task.priority,
                status: TaskStatus::Pending,
                estimated_hours: task.estimated_hours,
                due_date: task.due_date,
                depends_on,
                position: position as u32,
                created_at: now,
                updated_at: now,
            });
        }

        // Touch the parent goal
        tx.execute(UPDATE_GOAL_TIMESTAMP_SQL, params![&now_str, goal_id as i64])
            .map_err(|e| PlannerError::database_error("Failed to update goal timestamp", e))?;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(Plan {
            id: plan_id,
            goal_id,
            title: title.into(),
            description: description.map(String::from),
            estimated_days: generated.estimated_days,
            rationale: generated.rationale.clone(),
            created_at: now,
            updated_at: now,
            tasks,
        })
    }

    /// Retrieves a plan by its ID, eagerly loading its tasks.
    pub fn get_plan(&self, id: u64) -> Result<Option<Plan>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_PLAN_SQL)
            .map_err(|e| PlannerError::database_error("Failed to prepare query", e))?;

        let mut plan = stmt
            .query_row(params![id as i64], Self::build_plan_from_row)
            .optional()
            .map_err(|e| PlannerError::database_error("Failed to query plan", e))?;

        if let Some(ref mut plan) = plan {
            plan.tasks = self.get_tasks(plan.id)?;
        }

        Ok(plan)
    }

    /// Lists plans with their tasks, optionally restricted to one goal.
    pub fn list_plans(&self, goal_id: Option<u64>) -> Result<Vec<Plan>> {
        let mut query = SELECT_PLANS_SQL.to_string();
        if goal_id.is_some() {
            query.push_str(" WHERE goal_id = ?1");
        }
        query.push_str(" ORDER BY created_at DESC");

        let mut stmt = self
            .connection
            .prepare(&query)
            .map_err(|e| PlannerError::database_error("Failed to prepare query", e))?;

        let mut plans = match goal_id {
            Some(goal_id) => stmt.query_map(params![goal_id as i64], Self::build_plan_from_row),
            None => stmt.query_map([], Self::build_plan_from_row),
        }
        .map_err(|e| PlannerError::database_error("Failed to query plans", e))?
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|e| PlannerError::database_error("Failed to fetch plans", e))?;

        for plan in &mut plans {
            plan.tasks = self.get_tasks(plan.id)?;
        }

        Ok(plans)
    }

    /// Lists plan summaries with task counts, optionally restricted to one
    /// goal.
    pub fn list_plan_summaries(&self, goal_id: Option<u64>) -> Result<Vec<PlanSummary>> {
        let mut query = format!("SELECT {PLAN_SUMMARY_COLUMNS} FROM {PLAN_SUMMARIES_VIEW}");
        if goal_id.is_some() {
            query.push_str(" WHERE goal_id = ?1");
        }
        query.push_str(" ORDER BY created_at DESC");

        let mut stmt = self
            .connection
            .prepare(&query)
            .map_err(|e| PlannerError::database_error("Failed to prepare query", e))?;

        let build = |row: &rusqlite::Row| -> rusqlite::Result<PlanSummary> {
            Ok(PlanSummary {
                id: row.get::<_, i64>(0)? as u64,
                goal_id: row.get::<_, i64>(1)? as u64,
                title: row.get(2)?,
                description: row.get(3)?,
                estimated_days: row.get::<_, i64>(4)? as u32,
                created_at: row.get::<_, String>(5)?.parse::<Timestamp>().map_err(|e| {
                    rusqlite::Error::FromSqlConversionFailure(5, Type::Text, Box::new(e))
                })?,
                updated_at: row.get::<_, String>(6)?.parse::<Timestamp>().map_err(|e| {
                    rusqlite::Error::FromSqlConversionFailure(6, Type::Text, Box::new(e))
                })?,
                total_tasks: row.get::<_, i64>(7)? as u32,
                completed_tasks: row.get::<_, i64>(8)? as u32,
                pending_tasks: row.get::<_, i64>(9)? as u32,
            })
        };

        let summaries = match goal_id {
            Some(goal_id) => stmt.query_map(params![goal_id as i64], build),
            None => stmt.query_map([], build),
        }
        .map_err(|e| PlannerError::database_error("Failed to query plan summaries", e))?
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|e| PlannerError::database_error("Failed to fetch plan summaries", e))?;

        Ok(summaries)
    }

    /// Permanently deletes a plan and all its associated tasks from the
    /// database. This operation cannot be undone.
    pub fn delete_plan(&mut self, id: u64) -> Result<()> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let exists: bool = tx
            .query_row(CHECK_PLAN_EXISTS_SQL, params![id as i64], |row| row.get(0))
            .map_err(|e| PlannerError::database_error("Failed to check plan existence", e))?;

        if !exists {
            return Err(PlannerError::PlanNotFound { id });
        }

        // Touch the parent goal while the plan row still exists
        let now_str = Timestamp::now().to_string();
        tx.execute(
            UPDATE_GOAL_TIMESTAMP_BY_PLAN_SQL,
            params![&now_str, id as i64],
        )
        .map_err(|e| PlannerError::database_error("Failed to update goal timestamp", e))?;

        tx.execute(DELETE_PLAN_TASKS_SQL, params![id as i64])
            .map_err(|e| PlannerError::database_error("Failed to delete plan tasks", e))?;
        tx.execute(DELETE_PLAN_SQL, params![id as i64])
            .map_err(|e| PlannerError::database_error("Failed to delete plan", e))?;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(())
    }
}
