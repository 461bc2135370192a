//! Display implementations for domain models.
//!
//! This module contains all Display trait implementations for the core
//! domain models, separated from the model definitions to maintain clean
//! separation of concerns.
//!
//! The Display implementations provide:
//! - Markdown-formatted output for rich terminal display
//! - Consistent formatting with status icons and structured sections
//! - Context-aware display behavior for different use cases

use std::fmt;

use super::datetime::{DueDate, LocalDateTime};
use crate::models::{Goal, Plan, PlanSummary, Priority, Task, TaskStatus};

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}. {}", self.id, self.title)?;
        writeln!(f)?;

        // Metadata section
        writeln!(f, "- Created: {}", LocalDateTime(&self.created_at))?;
        writeln!(f, "- Updated: {}", LocalDateTime(&self.updated_at))?;

        // Description as a paragraph
        if let Some(desc) = &self.description {
            writeln!(f)?;
            writeln!(f, "{desc}")?;
        }

        // Plans are only loaded for detail views; skip the section when
        // the list is empty so list output stays compact.
        if !self.plans.is_empty() {
            writeln!(f, "\n## Plans")?;
            writeln!(f)?;
            for plan in &self.plans {
                writeln!(
                    f,
                    "- {}. {} ({} tasks, ~{} days)",
                    plan.id,
                    plan.title,
                    plan.tasks.len(),
                    plan.estimated_days
                )?;
            }
        }

        Ok(())
    }
}

impl fmt::Display for Plan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}. {}", self.id, self.title)?;
        writeln!(f)?;

        // Metadata section
        writeln!(f, "- Goal ID: {}", self.goal_id)?;
        writeln!(f, "- Estimated duration: {} days", self.estimated_days)?;
        writeln!(f, "- Created: {}", LocalDateTime(&self.created_at))?;
        writeln!(f, "- Updated: {}", LocalDateTime(&self.updated_at))?;

        // Description as a paragraph
        if let Some(desc) = &self.description {
            writeln!(f)?;
            writeln!(f, "{desc}")?;
        }

        if !self.rationale.is_empty() {
            writeln!(f, "\n## Rationale")?;
            writeln!(f)?;
            writeln!(f, "{}", self.rationale)?;
        }

        if !self.tasks.is_empty() {
            writeln!(f, "\n## Tasks")?;
            writeln!(f)?;
            for task in &self.tasks {
                write!(f, "{task}")?;
            }
        } else {
            writeln!(f, "\nNo tasks in this plan.")?;
        }

        Ok(())
    }
}

impl Task {
    /// Format the task using the clean, compact display format.
    ///
    /// This uses the same format whether the task is displayed standalone
    /// or within a plan context.
    fn fmt_task(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "### {}. {} ({})",
            self.id,
            self.title,
            self.status.with_icon()
        )?;
        writeln!(f)?;

        if let Some(desc) = &self.description {
            writeln!(f, "{desc}")?;
            writeln!(f)?;
        }

        writeln!(f, "- Priority: {}", self.priority)?;
        writeln!(f, "- Estimated: {}h", self.estimated_hours)?;
        writeln!(f, "- Due: {}", DueDate(&self.due_date))?;

        if !self.depends_on.is_empty() {
            let deps = self
                .depends_on
                .iter()
                .map(|id| format!("#{id}"))
                .collect::<Vec<_>>()
                .join(", ");
            writeln!(f, "- Depends on: {deps}")?;
        }

        writeln!(f)?;

        Ok(())
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_task(f)
    }
}

impl fmt::Display for PlanSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let progress = if self.total_tasks > 0 {
            format!(" ({}/{})", self.completed_tasks, self.total_tasks)
        } else {
            String::new()
        };

        writeln!(f, "## {} (ID: {}){progress}", self.title, self.id)?;
        writeln!(f)?;

        if let Some(desc) = &self.description {
            writeln!(f, "- **Description**: {desc}")?;
        }

        writeln!(f, "- **Goal ID**: {}", self.goal_id)?;
        writeln!(f, "- **Duration**: ~{} days", self.estimated_days)?;
        writeln!(f, "- **Created**: {}", LocalDateTime(&self.created_at))?;
        writeln!(f)?; // Add blank line after each plan

        Ok(())
    }
}
