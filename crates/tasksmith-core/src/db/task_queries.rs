//! Task CRUD operations and queries.

use jiff::{Span, Timestamp};
use rusqlite::{params, types::Type, OptionalExtension};

use crate::{
    error::{DatabaseResultExt, PlannerError, Result},
    generator::schedule::WORK_HOURS_PER_DAY,
    models::{Priority, Task, TaskFilter, TaskStatus, UpdateTaskRequest},
};

// SQL queries as const strings
const CHECK_PLAN_EXISTS_SQL: &str = "SELECT EXISTS(SELECT 1 FROM plans WHERE id = ?1)";
const GET_NEXT_POSITION_SQL: &str =
    "SELECT COALESCE(MAX(position), -1) + 1 FROM tasks WHERE plan_id = ?1";
const INSERT_TASK_SQL: &str = "INSERT INTO tasks (plan_id, title, description, priority, status, estimated_hours, due_date, depends_on, position, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)";
const UPDATE_PLAN_TIMESTAMP_SQL: &str = "UPDATE plans SET updated_at = ?1 WHERE id = ?2";
const UPDATE_PLAN_TIMESTAMP_BY_TASK_SQL: &str =
    "UPDATE plans SET updated_at = ?1 WHERE id = (SELECT plan_id FROM tasks WHERE id = ?2)";
const CHECK_TASK_IN_PLAN_SQL: &str =
    "SELECT EXISTS(SELECT 1 FROM tasks WHERE id = ?1 AND plan_id = ?2)";
const CHECK_EARLIER_TASK_IN_PLAN_SQL: &str =
    "SELECT EXISTS(SELECT 1 FROM tasks WHERE id = ?1 AND plan_id = ?2 AND position < ?3)";
const SELECT_TASK_DETAILS_SQL: &str = "SELECT title, description, priority, status, estimated_hours, due_date, depends_on, plan_id, position FROM tasks WHERE id = ?1";
const UPDATE_TASK_SQL: &str = "UPDATE tasks SET title = ?1, description = ?2, priority = ?3, status = ?4, estimated_hours = ?5, due_date = ?6, depends_on = ?7, updated_at = ?8 WHERE id = ?9";
const SELECT_TASKS_BY_PLAN_SQL: &str = "SELECT id, plan_id, title, description, priority, status, estimated_hours, due_date, depends_on, position, created_at, updated_at FROM tasks WHERE plan_id = ?1 ORDER BY position";
const SELECT_TASK_BY_ID_SQL: &str = "SELECT id, plan_id, title, description, priority, status, estimated_hours, due_date, depends_on, position, created_at, updated_at FROM tasks WHERE id = ?1";
const SELECT_TASKS_BASE_SQL: &str = "SELECT id, plan_id, title, description, priority, status, estimated_hours, due_date, depends_on, position, created_at, updated_at FROM tasks";

fn join_depends_on(depends_on: &[u64]) -> Option<String> {
    if depends_on.is_empty() {
        None
    } else {
        Some(
            depends_on
                .iter()
                .map(u64::to_string)
                .collect::<Vec<_>>()
                .join(","),
        )
    }
}

impl super::Database {
    /// Helper function to construct a Task from a database row
    fn build_task_from_row(row: &rusqlite::Row) -> rusqlite::Result<Task> {
        let priority_str: String = row.get(4)?;
        let priority = priority_str.parse::<Priority>().map_err(|_| {
            rusqlite::Error::FromSqlConversionFailure(
                4,
                Type::Text,
                format!("Invalid priority: {priority_str}").into(),
            )
        })?;

        let status_str: String = row.get(5)?;
        let status = status_str.parse::<TaskStatus>().map_err(|_| {
            rusqlite::Error::FromSqlConversionFailure(
                5,
                Type::Text,
                format!("Invalid status: {status_str}").into(),
            )
        })?;

        // Parse dependency IDs from comma-separated string
        let depends_str: Option<String> = row.get(8)?;
        let depends_on = depends_str
            .map(|s| {
                s.split(',')
                    .map(|id| {
                        id.parse::<u64>().map_err(|e| {
                            rusqlite::Error::FromSqlConversionFailure(8, Type::Text, Box::new(e))
                        })
                    })
                    .collect::<rusqlite::Result<Vec<_>>>()
            })
            .transpose()?
            .unwrap_or_default();

        Ok(Task {
            id: row.get::<_, i64>(0)? as u64,
            plan_id: row.get::<_, i64>(1)? as u64,
            title: row.get(2)?,
            description: row.get(3)?,
            priority,
            status,
            estimated_hours: row.get::<_, i64>(6)? as u32,
            due_date: row.get::<_, String>(7)?.parse::<Timestamp>().map_err(|e| {
                rusqlite::Error::FromSqlConversionFailure(7, Type::Text, Box::new(e))
            })?,
            depends_on,
            position: row.get::<_, i64>(9)? as u32,
            created_at: row
                .get::<_, String>(10)?
                .parse::<Timestamp>()
                .map_err(|e| {
                    rusqlite::Error::FromSqlConversionFailure(10, Type::Text, Box::new(e))
                })?,
            updated_at: row
                .get::<_, String>(11)?
                .parse::<Timestamp>()
                .map_err(|e| {
                    rusqlite::Error::FromSqlConversionFailure(11, Type::Text, Box::new(e))
                })?,
        })
    }

    /// Appends a new task to the end of the specified plan.
    ///
    /// Dependencies must reference existing tasks in the same plan. When no
    /// due date is given, one is derived from the estimated hours.
    pub fn add_task(
        &mut self,
        plan_id: u64,
        title: &str,
        description: Option<&str>,
        priority: Priority,
        estimated_hours: u32,
        due_date: Option<Timestamp>,
        depends_on: Vec<u64>,
    ) -> Result<Task> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let plan_exists: bool = tx
            .query_row(CHECK_PLAN_EXISTS_SQL, params![plan_id as i64], |row| {
                row.get(0)
            })
            .map_err(|e| PlannerError::database_error("Failed to check plan existence", e))?;

        if !plan_exists {
            return Err(PlannerError::PlanNotFound { id: plan_id });
        }

        // New tasks go last, so any existing task in the plan is a valid
        // dependency.
        for &dep in &depends_on {
            let valid: bool = tx
                .query_row(
                    CHECK_TASK_IN_PLAN_SQL,
                    params![dep as i64, plan_id as i64],
                    |row| row.get(0),
                )
                .map_err(|e| PlannerError::database_error("Failed to check dependency", e))?;

            if !valid {
                return Err(PlannerError::invalid_input(
                    "depends_on",
                    format!("Task {dep} does not exist in plan {plan_id}"),
                ));
            }
        }

        let next_position: i64 = tx
            .query_row(GET_NEXT_POSITION_SQL, params![plan_id as i64], |row| {
                row.get(0)
            })
            .map_err(|e| PlannerError::database_error("Failed to get next task position", e))?;

        let now = Timestamp::now();
        let now_str = now.to_string();

        let due_date = match due_date {
            Some(due) => due,
            None => {
                let days = estimated_hours.div_ceil(WORK_HOURS_PER_DAY).max(1);
                let span = Span::new()
                    .try_hours(i64::from(days) * 24)
                    .map_err(|e| PlannerError::invalid_input("estimated_hours", e.to_string()))?;
                now.checked_add(span)
                    .map_err(|e| PlannerError::invalid_input("estimated_hours", e.to_string()))?
            }
        };

        let depends_str = join_depends_on(&depends_on);

        tx.execute(
            INSERT_TASK_SQL,
            params![
                plan_id as i64,
                title,
                description,
                priority.as_str(),
                TaskStatus::Pending.as_str(),
                i64::from(estimated_hours),
                due_date.to_string(),
                depends_str.as_deref(),
                next_position,
                &now_str,
                &now_str
            ],
        )
        .map_err(|e| PlannerError::database_error("Failed to insert task", e))?;

        let id = tx.last_insert_rowid() as u64;

        // Touch the parent plan
        tx.execute(UPDATE_PLAN_TIMESTAMP_SQL, params![&now_str, plan_id as i64])
            .map_err(|e| PlannerError::database_error("Failed to update plan timestamp", e))?;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(Task {
            id,
            plan_id,
            title: title.into(),
            description: description.map(String::from),
            priority,
            status: TaskStatus::Pending,
            estimated_hours,
            due_date,
            depends_on,
            position: next_position as u32,
            created_at: now,
            updated_at: now,
        })
    }

    /// Updates task details using a request struct to reduce argument count.
    ///
    /// Unset fields keep their current values. Replacement dependencies are
    /// re-validated: they must reference earlier tasks in the same plan.
    pub fn update_task(&mut self, task_id: u64, request: UpdateTaskRequest) -> Result<()> {
        if request.is_empty() {
            return Ok(());
        }

        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        type TaskDetails = (
            String,
            Option<String>,
            String,
            String,
            i64,
            String,
            Option<String>,
            i64,
            i64,
        );

        let (
            current_title,
            current_description,
            current_priority,
            current_status,
            current_hours,
            current_due,
            current_depends,
            plan_id,
            position,
        ): TaskDetails = tx
            .query_row(SELECT_TASK_DETAILS_SQL, params![task_id as i64], |row| {
                Ok((
                    row.get(0)?,
                    row.get(1)?,
                    row.get(2)?,
                    row.get(3)?,
                    row.get(4)?,
                    row.get(5)?,
                    row.get(6)?,
                    row.get(7)?,
                    row.get(8)?,
                ))
            })
            .map_err(|e| {
                if matches!(e, rusqlite::Error::QueryReturnedNoRows) {
                    PlannerError::TaskNotFound { id: task_id }
                } else {
                    PlannerError::database_error("Failed to get current task", e)
                }
            })?;

        // Validate replacement dependencies against earlier tasks in the plan
        if let Some(ref depends_on) = request.depends_on {
            for &dep in depends_on {
                let valid: bool = tx
                    .query_row(
                        CHECK_EARLIER_TASK_IN_PLAN_SQL,
                        params![dep as i64, plan_id, position],
                        |row| row.get(0),
                    )
                    .map_err(|e| PlannerError::database_error("Failed to check dependency", e))?;

                if !valid {
                    return Err(PlannerError::invalid_input(
                        "depends_on",
                        format!("Task {dep} is not an earlier task in the same plan"),
                    ));
                }
            }
        }

        let new_title = request.title.unwrap_or(current_title);
        let new_description = request.description.or(current_description);
        let new_priority = request
            .priority
            .map(|p| p.as_str().into())
            .unwrap_or(current_priority);
        let new_status = request
            .status
            .map(|s| s.as_str().into())
            .unwrap_or(current_status);
        let new_hours = request
            .estimated_hours
            .map(i64::from)
            .unwrap_or(current_hours);
        let new_due = request
            .due_date
            .map(|due| due.to_string())
            .unwrap_or(current_due);
        let new_depends = request
            .depends_on
            .map(|deps| join_depends_on(&deps))
            .unwrap_or(current_depends);

        let now_str = Timestamp::now().to_string();

        tx.execute(
            UPDATE_TASK_SQL,
            params![
                &new_title,
                &new_description,
                &new_priority,
                &new_status,
                new_hours,
                &new_due,
                &new_depends,
                &now_str,
                task_id as i64
            ],
        )
        .map_err(|e| PlannerError::database_error("Failed to update task", e))?;

        // Touch the parent plan
        tx.execute(
            UPDATE_PLAN_TIMESTAMP_BY_TASK_SQL,
            params![&now_str, task_id as i64],
        )
        .map_err(|e| PlannerError::database_error("Failed to update plan timestamp", e))?;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(())
    }

    /// Retrieves all tasks for a given plan, in position order.
    pub fn get_tasks(&self, plan_id: u64) -> Result<Vec<Task>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_TASKS_BY_PLAN_SQL)
            .map_err(|e| PlannerError::database_error("Failed to prepare query", e))?;

        let tasks = stmt
            .query_map(params![plan_id as i64], Self::build_task_from_row)
            .map_err(|e| PlannerError::database_error("Failed to query tasks", e))?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| PlannerError::database_error("Failed to fetch tasks", e))?;

        Ok(tasks)
    }

    /// Retrieves a single task by its ID.
    pub fn get_task(&self, task_id: u64) -> Result<Option<Task>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_TASK_BY_ID_SQL)
            .map_err(|e| PlannerError::database_error("Failed to prepare query", e))?;

        let task = stmt
            .query_row(params![task_id as i64], Self::build_task_from_row)
            .optional()
            .map_err(|e| PlannerError::database_error("Failed to get task", e))?;

        Ok(task)
    }

    /// Lists tasks across plans with optional plan/status/priority filters.
    pub fn list_tasks(&self, filter: &TaskFilter) -> Result<Vec<Task>> {
        let mut query = SELECT_TASKS_BASE_SQL.to_string();

        let mut conditions = Vec::new();
        let mut params_vec: Vec<Box<dyn rusqlite::ToSql>> = Vec::new();

        if let Some(plan_id) = filter.plan_id {
            conditions.push("plan_id = ?");
            params_vec.push(Box::new(plan_id as i64));
        }
        if let Some(status) = filter.status {
            conditions.push("status = ?");
            params_vec.push(Box::new(status.as_str().to_string()));
        }
        if let Some(priority) = filter.priority {
            conditions.push("priority = ?");
            params_vec.push(Box::new(priority.as_str().to_string()));
        }

        if !conditions.is_empty() {
            query.push_str(" WHERE ");
            query.push_str(&conditions.join(" AND "));
        }

        query.push_str(" ORDER BY plan_id, position");

        let mut stmt = self
            .connection
            .prepare(&query)
            .map_err(|e| PlannerError::database_error("Failed to prepare query", e))?;

        let params_refs: Vec<&dyn rusqlite::ToSql> = params_vec.iter().map(|b| &**b).collect();

        let tasks = stmt
            .query_map(&params_refs[..], Self::build_task_from_row)
            .map_err(|e| PlannerError::database_error("Failed to query tasks", e))?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| PlannerError::database_error("Failed to fetch tasks", e))?;

        Ok(tasks)
    }
}
