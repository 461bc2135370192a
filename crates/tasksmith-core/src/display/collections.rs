//! Collection wrapper types for displaying groups of domain objects.
//!
//! This module provides wrapper types that format collections of domain
//! objects with consistent structure and empty collection handling.

use std::{fmt, ops::Index};

use crate::models::{Goal, PlanSummary, Task};

/// Newtype wrapper for displaying collections of goals.
///
/// Formats each goal using its own Display implementation and handles
/// empty collections gracefully.
pub struct Goals(pub Vec<Goal>);

impl Goals {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of goals in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get a reference to the goal at the given index.
    pub fn get(&self, index: usize) -> Option<&Goal> {
        self.0.get(index)
    }

    /// Get an iterator over the goals.
    pub fn iter(&self) -> std::slice::Iter<'_, Goal> {
        self.0.iter()
    }
}

impl Index<usize> for Goals {
    type Output = Goal;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl IntoIterator for Goals {
    type Item = Goal;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Goals {
    type Item = &'a Goal;
    type IntoIter = std::slice::Iter<'a, Goal>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Goals {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No goals found.")
        } else {
            for goal in &self.0 {
                writeln!(f, "{goal}")?;
            }
            Ok(())
        }
    }
}

/// Newtype wrapper for displaying collections of plan summaries.
///
/// This provides clean Display formatting for plan collections without
/// title handling, allowing consumers to handle titles separately. Handles
/// empty collections gracefully.
pub struct PlanSummaries(pub Vec<PlanSummary>);

impl PlanSummaries {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of plan summaries in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get a reference to the plan summary at the given index.
    pub fn get(&self, index: usize) -> Option<&PlanSummary> {
        self.0.get(index)
    }

    /// Get an iterator over the plan summaries.
    pub fn iter(&self) -> std::slice::Iter<'_, PlanSummary> {
        self.0.iter()
    }
}

impl Index<usize> for PlanSummaries {
    type Output = PlanSummary;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl IntoIterator for PlanSummaries {
    type Item = PlanSummary;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a PlanSummaries {
    type Item = &'a PlanSummary;
    type IntoIter = std::slice::Iter<'a, PlanSummary>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for PlanSummaries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No plans found.")
        } else {
            for plan in &self.0 {
                write!(f, "{plan}")?;
            }
            Ok(())
        }
    }
}

/// Newtype wrapper for displaying collections of tasks.
///
/// This wrapper provides Display implementation for collections of tasks
/// without requiring title formatting logic. It handles empty collections
/// gracefully and formats each task using the existing Task Display trait.
pub struct Tasks(pub Vec<Task>);

impl Tasks {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of tasks in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get a reference to the task at the given index.
    pub fn get(&self, index: usize) -> Option<&Task> {
        self.0.get(index)
    }

    /// Get an iterator over the tasks.
    pub fn iter(&self) -> std::slice::Iter<'_, Task> {
        self.0.iter()
    }
}

impl Index<usize> for Tasks {
    type Output = Task;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl IntoIterator for Tasks {
    type Item = Task;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Tasks {
    type Item = &'a Task;
    type IntoIter = std::slice::Iter<'a, Task>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Tasks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No tasks found.")
        } else {
            for task in &self.0 {
                write!(f, "{task}")?;
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;

    use super::*;
    use crate::models::{Priority, TaskStatus};

    fn create_test_plan_summary() -> PlanSummary {
        PlanSummary {
            id: 1,
            goal_id: 1,
            title: "Test Plan".to_string(),
            description: Some("A test plan".to_string()),
            estimated_days: 14,
            created_at: Timestamp::from_second(1640995200).unwrap(), // 2022-01-01 00:00:00 UTC
            updated_at: Timestamp::from_second(1640995200).unwrap(),
            total_tasks: 3,
            completed_tasks: 1,
            pending_tasks: 2,
        }
    }

    fn create_test_task() -> Task {
        Task {
            id: 1,
            plan_id: 1,
            title: "Test Task".to_string(),
            description: Some("A test task".to_string()),
            priority: Priority::High,
            status: TaskStatus::Pending,
            estimated_hours: 8,
            due_date: Timestamp::from_second(1640995200).unwrap(),
            depends_on: vec![],
            position: 0,
            created_at: Timestamp::from_second(1640995200).unwrap(),
            updated_at: Timestamp::from_second(1640995200).unwrap(),
        }
    }

    #[test]
    fn test_plan_summaries_display() {
        let summaries = PlanSummaries(vec![create_test_plan_summary()]);
        let output = format!("{summaries}");
        assert!(output.contains("Test Plan"));
        assert!(output.contains("ID: 1"));
        assert!(output.contains("(1/3)"));

        let empty_summaries = PlanSummaries(vec![]);
        let empty_output = format!("{empty_summaries}");
        assert_eq!(empty_output, "No plans found.\n");
    }

    #[test]
    fn test_tasks_display_empty() {
        let tasks = Tasks(vec![]);
        let output = format!("{tasks}");
        assert_eq!(output, "No tasks found.\n");
    }

    #[test]
    fn test_tasks_display_single_task() {
        let tasks = Tasks(vec![create_test_task()]);
        let output = format!("{tasks}");

        assert!(output.contains("Test Task"));
        assert!(output.contains("○ Pending"));
        assert!(output.contains("Priority: high"));
        assert!(output.contains("Estimated: 8h"));
    }

    #[test]
    fn test_tasks_display_dependencies() {
        let mut task = create_test_task();
        task.depends_on = vec![3, 4];
        let output = format!("{}", Tasks(vec![task]));
        assert!(output.contains("Depends on: #3, #4"));
    }

    #[test]
    fn test_goals_display_empty() {
        let goals = Goals(vec![]);
        assert_eq!(format!("{goals}"), "No goals found.\n");
    }
}
