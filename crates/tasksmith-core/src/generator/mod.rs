//! Rule-based plan generation.
//!
//! The generator turns a free-text goal and a timeline into an ordered
//! task breakdown. It classifies the goal into a [`Category`] by keyword
//! matching, pulls that category's fixed template, customizes task text
//! around the goal, scales hour estimates to the requested timeline, and
//! assigns due dates and dependencies. The whole thing is table lookup
//! plus linear arithmetic, so identical inputs always produce identical
//! output.
//!
//! [`generate`] stamps due dates from the current time; [`generate_from`]
//! takes an explicit start timestamp.

pub mod provider;
pub mod schedule;
pub mod templates;


pub use provider::{generate_with_fallback, PlanProvider, RuleBasedProvider};
pub use templates::Category;

use jiff::{Span, Timestamp};

use crate::error::{invalid_input, Result};
use crate::models::Priority;
use schedule::{due_offsets, scale_hours, MAX_TIMELINE_WEEKS, WORK_HOURS_PER_DAY};

/// Input to the plan generator.
#[derive(Debug, Clone)]
pub struct GenerateRequest {
    /// Free-text goal to break down
    pub goal: String,
    /// Requested timeline in weeks (must be at least 1)
    pub timeline_weeks: u32,
    /// Optional extra context considered during classification
    pub context: Option<String>,
}

/// One task produced by the generator, not yet persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedTask {
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub estimated_hours: u32,
    pub due_date: Timestamp,
    /// Indices into the generated task list, always earlier than this task.
    pub depends_on: Vec<usize>,
}

/// A complete generated breakdown for one goal.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedPlan {
    pub category: Category,
    /// Human-readable explanation of the template choice and scaling
    pub rationale: String,
    /// Total estimated duration in working days
    pub estimated_days: u32,
    pub tasks: Vec<GeneratedTask>,
}

/// Generate a plan with due dates anchored at the current time.
pub fn generate(request: &GenerateRequest) -> Result<GeneratedPlan> {
    generate_from(request, Timestamp::now())
}

/// Generate a plan with due dates anchored at an explicit start timestamp.
pub fn generate_from(request: &GenerateRequest, start: Timestamp) -> Result<GeneratedPlan> {
    if request.goal.trim().is_empty() {
        return Err(invalid_input("goal", "goal text must not be empty"));
    }
    if request.timeline_weeks == 0 {
        return Err(invalid_input(
            "timeline_weeks",
            "timeline must be at least one week",
        ));
    }
    if request.timeline_weeks > MAX_TIMELINE_WEEKS {
        return Err(invalid_input(
            "timeline_weeks",
            format!("timeline must be at most {MAX_TIMELINE_WEEKS} weeks"),
        ));
    }

    let category = Category::classify(&request.goal, request.context.as_deref());
    let template = category.template();

    let scaled_hours: Vec<u32> = template
        .tasks
        .iter()
        .map(|task| scale_hours(task.hours, request.timeline_weeks, template.reference_weeks))
        .collect();
    let offsets = due_offsets(&scaled_hours, request.timeline_weeks);

    let goal = request.goal.trim();
    let mut tasks = Vec::with_capacity(template.tasks.len());
    for ((template_task, hours), offset) in template.tasks.iter().zip(&scaled_hours).zip(&offsets) {
        let title = customize_title(template_task.title, goal);
        let description = describe(&title, goal);
        let span = Span::new()
            .try_hours(i64::from(*offset) * 24)
            .map_err(|err| invalid_input("timeline_weeks", err.to_string()))?;
        let due_date = start
            .checked_add(span)
            .map_err(|err| invalid_input("timeline_weeks", err.to_string()))?;

        tasks.push(GeneratedTask {
            title,
            description,
            priority: template_task.priority,
            estimated_hours: *hours,
            due_date,
            depends_on: template_task.depends_on.to_vec(),
        });
    }

    let total_hours: u32 = scaled_hours.iter().sum();
    let estimated_days = (total_hours / WORK_HOURS_PER_DAY).max(1);
    let rationale = build_rationale(goal, category, tasks.len(), request.timeline_weeks, template.reference_weeks);

    Ok(GeneratedPlan {
        category,
        rationale,
        estimated_days,
        tasks,
    })
}

/// Swap the generic "Product" subject in template titles for a noun closer
/// to the goal.
fn customize_title(base_title: &str, goal: &str) -> String {
    let goal_lower = goal.to_lowercase();

    let subject = if goal_lower.contains("app") || goal_lower.contains("mobile") {
        "App"
    } else if goal_lower.contains("website") || goal_lower.contains("web") {
        "Website"
    } else if goal_lower.contains("business") {
        "Business"
    } else {
        return base_title.to_string();
    };

    // Whole-word replacement so "Production" stays intact.
    base_title
        .split(' ')
        .map(|word| if word == "Product" { subject } else { word })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Build a task description by matching the title against known phases and
/// interpolating the goal text.
fn describe(title: &str, goal: &str) -> String {
    let title_lower = title.to_lowercase();
    let goal_lower = goal.to_lowercase();

    if title_lower.contains("market research") {
        format!("Research the target market for {goal_lower} to understand user needs and competition.")
    } else if title_lower.contains("requirements") {
        format!("Define clear requirements and specifications for {goal_lower}.")
    } else if title_lower.contains("set up") || title_lower.contains("environment") {
        format!("Set up the working environment and necessary tools for {goal_lower}.")
    } else if title_lower.contains("design") || title_lower.contains("wireframes") {
        format!("Create designs and mockups for {goal_lower} focusing on user experience.")
    } else if title_lower.contains("implement") || title_lower.contains("develop") {
        format!("Implement the core functionality for {goal_lower}.")
    } else if title_lower.contains("test") || title_lower.contains("validate") {
        format!("Test {goal_lower} thoroughly to ensure quality and functionality.")
    } else if title_lower.contains("deploy") {
        format!("Deploy {goal_lower} to the production environment.")
    } else if title_lower.contains("document") {
        format!("Create comprehensive documentation for {goal_lower}.")
    } else if title_lower.contains("marketing") {
        format!("Develop marketing strategy and materials for {goal_lower}.")
    } else {
        format!("Complete the {title_lower} phase for {goal_lower}.")
    }
}

fn build_rationale(
    goal: &str,
    category: Category,
    task_count: usize,
    timeline_weeks: u32,
    reference_weeks: u32,
) -> String {
    format!(
        "Analyzed the goal '{goal}' and identified it as a {category} project. \
         Generated {task_count} actionable tasks based on established practice for \
         this type of project. Scaled effort estimates from the template's \
         {reference_weeks}-week reference timeline to the requested \
         {timeline_weeks}-week timeline. Tasks are ordered with dependencies to \
         ensure smooth progression, and priorities reflect each task's importance \
         to the outcome."
    )
}
