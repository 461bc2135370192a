//! Goal CRUD operations and queries.

use jiff::Timestamp;
use rusqlite::{params, types::Type, OptionalExtension};

use crate::{
    error::{DatabaseResultExt, PlannerError, Result},
    models::Goal,
};

// SQL queries as const strings
const INSERT_GOAL_SQL: &str = "INSERT INTO goals (title, description, user_input, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5)";
const SELECT_GOAL_SQL: &str = "SELECT id, title, description, user_input, created_at, updated_at FROM goals WHERE id = ?1";
const SELECT_ALL_GOALS_SQL: &str = "SELECT id, title, description, user_input, created_at, updated_at FROM goals ORDER BY created_at DESC";
const SELECT_GOAL_DETAILS_SQL: &str = "SELECT title, description FROM goals WHERE id = ?1";
const UPDATE_GOAL_SQL: &str =
    "UPDATE goals SET title = ?1, description = ?2, updated_at = ?3 WHERE id = ?4";
const CHECK_GOAL_EXISTS_SQL: &str = "SELECT EXISTS(SELECT 1 FROM goals WHERE id = ?1)";
const DELETE_GOAL_TASKS_SQL: &str =
    "DELETE FROM tasks WHERE plan_id IN (SELECT id FROM plans WHERE goal_id = ?1)";
const DELETE_GOAL_PLANS_SQL: &str = "DELETE FROM plans WHERE goal_id = ?1";
const DELETE_GOAL_SQL: &str = "DELETE FROM goals WHERE id = ?1";

impl super::Database {
    /// Helper function to construct a Goal from a database row
    fn build_goal_from_row(row: &rusqlite::Row) -> rusqlite::Result<Goal> {
        Ok(Goal {
            id: row.get::<_, i64>(0)? as u64,
            title: row.get(1)?,
            description: row.get(2)?,
            user_input: row.get(3)?,
            created_at: row.get::<_, String>(4)?.parse::<Timestamp>().map_err(|e| {
                rusqlite::Error::FromSqlConversionFailure(4, Type::Text, Box::new(e))
            })?,
            updated_at: row.get::<_, String>(5)?.parse::<Timestamp>().map_err(|e| {
                rusqlite::Error::FromSqlConversionFailure(5, Type::Text, Box::new(e))
            })?,
            plans: Vec::new(),
        })
    }

    /// Creates a new goal from the user's free-text input.
    pub fn create_goal(
        &mut self,
        title: &str,
        description: Option<&str>,
        user_input: &str,
    ) -> Result<Goal> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let now = Timestamp::now();
        let now_str = now.to_string();

        tx.execute(
            INSERT_GOAL_SQL,
            params![title, description, user_input, &now_str, &now_str],
        )
        .map_err(|e| PlannerError::database_error("Failed to insert goal", e))?;

        let id = tx.last_insert_rowid() as u64;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(Goal {
            id,
            title: title.into(),
            description: description.map(String::from),
            user_input: user_input.into(),
            created_at: now,
            updated_at: now,
            plans: Vec::new(),
        })
    }

    /// Retrieves a goal by its ID, eagerly loading its plans and tasks.
    pub fn get_goal(&self, id: u64) -> Result<Option<Goal>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_GOAL_SQL)
            .map_err(|e| PlannerError::database_error("Failed to prepare query", e))?;

        let mut goal = stmt
            .query_row(params![id as i64], Self::build_goal_from_row)
            .optional()
            .map_err(|e| PlannerError::database_error("Failed to query goal", e))?;

        if let Some(ref mut goal) = goal {
            goal.plans = self.list_plans(Some(goal.id))?;
        }

        Ok(goal)
    }

    /// Lists all goals, newest first. Plans are not loaded.
    pub fn list_goals(&self) -> Result<Vec<Goal>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_ALL_GOALS_SQL)
            .map_err(|e| PlannerError::database_error("Failed to prepare query", e))?;

        let goals = stmt
            .query_map([], Self::build_goal_from_row)
            .map_err(|e| PlannerError::database_error("Failed to query goals", e))?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| PlannerError::database_error("Failed to fetch goals", e))?;

        Ok(goals)
    }

    /// Updates a goal's title and/or description, keeping unchanged fields.
    pub fn update_goal(
        &mut self,
        id: u64,
        title: Option<&str>,
        description: Option<&str>,
    ) -> Result<()> {
        // Nothing to update
        if title.is_none() && description.is_none() {
            return Ok(());
        }

        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let (current_title, current_description): (String, Option<String>) = tx
            .query_row(SELECT_GOAL_DETAILS_SQL, params![id as i64], |row| {
                Ok((row.get(0)?, row.get(1)?))
            })
            .map_err(|e| {
                if matches!(e, rusqlite::Error::QueryReturnedNoRows) {
                    PlannerError::GoalNotFound { id }
                } else {
                    PlannerError::database_error("Failed to get current goal", e)
                }
            })?;

        let new_title = title.map(String::from).unwrap_or(current_title);
        let new_description = description.map(String::from).or(current_description);
        let now_str = Timestamp::now().to_string();

        tx.execute(
            UPDATE_GOAL_SQL,
            params![&new_title, &new_description, &now_str, id as i64],
        )
        .map_err(|e| PlannerError::database_error("Failed to update goal", e))?;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(())
    }

    /// Permanently deletes a goal together with all its plans and tasks.
    /// This operation cannot be undone.
    pub fn delete_goal(&mut self, id: u64) -> Result<()> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let exists: bool = tx
            .query_row(CHECK_GOAL_EXISTS_SQL, params![id as i64], |row| row.get(0))
            .map_err(|e| PlannerError::database_error("Failed to check goal existence", e))?;

        if !exists {
            return Err(PlannerError::GoalNotFound { id });
        }

        // Cascade explicitly even though foreign keys would handle it
        tx.execute(DELETE_GOAL_TASKS_SQL, params![id as i64])
            .map_err(|e| PlannerError::database_error("Failed to delete goal tasks", e))?;
        tx.execute(DELETE_GOAL_PLANS_SQL, params![id as i64])
            .map_err(|e| PlannerError::database_error("Failed to delete goal plans", e))?;
        tx.execute(DELETE_GOAL_SQL, params![id as i64])
            .map_err(|e| PlannerError::database_error("Failed to delete goal", e))?;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(())
    }
}
