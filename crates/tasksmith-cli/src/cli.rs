//! Command-line interface definitions and command handlers
//!
//! This module defines the CLI argument structures using clap's derive API
//! and the [`Cli`] handler that executes commands against the core planner.
//! It implements the CLI side of the parameter wrapper pattern:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Business Logic
//! ```
//!
//! Each command has a clap `Args` struct with CLI-specific attributes
//! (flags, help text, value delimiters) and a `From` conversion into the
//! framework-free parameter type from `tasksmith_core::params`. That keeps
//! the core reusable from other interfaces while the conversion stays
//! explicit and verifiable at compile time.

use anyhow::{bail, Result};
use clap::{Args, Subcommand, ValueEnum};
use tasksmith_core::{
    display::{CreateResult, DeleteResult, OperationStatus, UpdateResult},
    params::{
        AddTask, CreateGoal, DeleteGoal, DeletePlan, GeneratePlan, Id, ListPlans, ListTasks,
        UpdateGoal, UpdateTask,
    },
    Planner,
};

use crate::renderer::TerminalRenderer;

/// Create a new goal
#[derive(Args)]
pub struct CreateGoalArgs {
    /// Title of the goal
    pub title: String,
    /// Optional description providing more context about the goal
    #[arg(short, long)]
    pub description: Option<String>,
}

impl From<CreateGoalArgs> for CreateGoal {
    fn from(val: CreateGoalArgs) -> Self {
        CreateGoal {
            title: val.title,
            description: val.description,
            user_input: None,
        }
    }
}

/// Show details of a specific goal
#[derive(Args)]
pub struct ShowGoalArgs {
    /// ID of the goal to display
    #[arg(help = "Unique identifier of the goal to show details for")]
    pub id: u64,
}

impl From<ShowGoalArgs> for Id {
    fn from(val: ShowGoalArgs) -> Self {
        Id { id: val.id }
    }
}

/// Update a goal's title or description
#[derive(Args)]
pub struct UpdateGoalArgs {
    /// ID of the goal to update
    pub id: u64,
    /// Updated title for the goal
    #[arg(short, long)]
    pub title: Option<String>,
    /// Updated description for the goal
    #[arg(short, long)]
    pub description: Option<String>,
}

impl From<UpdateGoalArgs> for UpdateGoal {
    fn from(val: UpdateGoalArgs) -> Self {
        UpdateGoal {
            id: val.id,
            title: val.title,
            description: val.description,
        }
    }
}

/// Delete a goal permanently
#[derive(Args)]
pub struct DeleteGoalArgs {
    /// ID of the goal to delete
    #[arg(help = "Unique identifier of the goal to permanently delete")]
    pub id: u64,
    /// Confirm the deletion (required to prevent accidental deletion)
    #[arg(long)]
    pub confirm: bool,
}

impl From<DeleteGoalArgs> for DeleteGoal {
    fn from(val: DeleteGoalArgs) -> Self {
        DeleteGoal {
            id: val.id,
            confirmed: val.confirm,
        }
    }
}

#[derive(Subcommand)]
pub enum GoalCommands {
    /// Create a new goal
    #[command(alias = "c")]
    Create(CreateGoalArgs),
    /// List all goals
    #[command(aliases = ["l", "ls"])]
    List,
    /// Show details of a specific goal
    #[command(alias = "s")]
    Show(ShowGoalArgs),
    /// Update a goal's title or description
    #[command(alias = "u")]
    Update(UpdateGoalArgs),
    /// Delete a goal permanently
    #[command(aliases = ["d", "rm"])]
    Delete(DeleteGoalArgs),
}

/// Generate a plan from a free-text goal
///
/// This is the primary workflow: the goal text is classified, a task
/// template is selected and scaled to the requested timeline, and the
/// resulting plan is stored together with a newly created goal record.
#[derive(Args)]
pub struct GeneratePlanArgs {
    /// Free-text goal to break down into tasks
    pub goal: String,
    /// Timeline for the plan in weeks
    #[arg(short = 'w', long, default_value_t = 4)]
    pub weeks: u32,
    /// Additional context considered when classifying the goal
    #[arg(short, long)]
    pub context: Option<String>,
    /// Custom title for the plan (derived from the goal when omitted)
    #[arg(short, long)]
    pub title: Option<String>,
}

impl From<GeneratePlanArgs> for GeneratePlan {
    fn from(val: GeneratePlanArgs) -> Self {
        GeneratePlan {
            goal: val.goal,
            timeline_weeks: val.weeks,
            context: val.context,
            title: val.title,
        }
    }
}

/// List plans with their task counts
#[derive(Args)]
pub struct ListPlansArgs {
    /// Only show plans belonging to this goal
    #[arg(long)]
    pub goal_id: Option<u64>,
}

impl From<ListPlansArgs> for ListPlans {
    fn from(val: ListPlansArgs) -> Self {
        ListPlans {
            goal_id: val.goal_id,
        }
    }
}

/// Show details of a specific plan
#[derive(Args)]
pub struct ShowPlanArgs {
    /// ID of the plan to display
    #[arg(help = "Unique identifier of the plan to show details for")]
    pub id: u64,
}

impl From<ShowPlanArgs> for Id {
    fn from(val: ShowPlanArgs) -> Self {
        Id { id: val.id }
    }
}

/// Delete a plan permanently
#[derive(Args)]
pub struct DeletePlanArgs {
    /// ID of the plan to delete
    #[arg(help = "Unique identifier of the plan to permanently delete")]
    pub id: u64,
    /// Confirm the deletion (required to prevent accidental deletion)
    #[arg(long)]
    pub confirm: bool,
}

impl From<DeletePlanArgs> for DeletePlan {
    fn from(val: DeletePlanArgs) -> Self {
        DeletePlan {
            id: val.id,
            confirmed: val.confirm,
        }
    }
}

#[derive(Subcommand)]
pub enum PlanCommands {
    /// Generate a plan from a free-text goal
    #[command(alias = "g")]
    Generate(GeneratePlanArgs),
    /// List plans with their task counts
    #[command(aliases = ["l", "ls"])]
    List(ListPlansArgs),
    /// Show details of a specific plan
    #[command(alias = "s")]
    Show(ShowPlanArgs),
    /// Delete a plan permanently
    #[command(aliases = ["d", "rm"])]
    Delete(DeletePlanArgs),
}

/// Add a new task to a plan
#[derive(Args)]
pub struct AddTaskArgs {
    /// ID of the plan to add the task to
    #[arg(help = "Unique identifier of the plan to add this task to")]
    pub plan_id: u64,
    /// Title of the task
    pub title: String,
    /// Optional detailed description of what needs to be done
    #[arg(short, long)]
    pub description: Option<String>,
    /// Priority of the task
    #[arg(short, long)]
    pub priority: Option<PriorityArg>,
    /// Estimated effort in hours
    #[arg(short = 'e', long)]
    pub hours: Option<u32>,
    /// Due date as an RFC 3339 timestamp, e.g. 2026-09-01T17:00:00Z
    #[arg(long)]
    pub due_date: Option<String>,
    /// IDs of tasks in the same plan this task depends on - comma-separated
    #[arg(long, value_delimiter = ',')]
    pub depends_on: Vec<u64>,
}

impl From<AddTaskArgs> for AddTask {
    fn from(val: AddTaskArgs) -> Self {
        AddTask {
            plan_id: val.plan_id,
            title: val.title,
            description: val.description,
            priority: val.priority.map(|p| p.to_string()),
            estimated_hours: val.hours,
            due_date: val.due_date,
            depends_on: val.depends_on,
        }
    }
}

/// List tasks with optional filters
#[derive(Args)]
pub struct ListTasksArgs {
    /// Only show tasks belonging to this plan
    #[arg(long)]
    pub plan_id: Option<u64>,
    /// Filter by status
    #[arg(short, long)]
    pub status: Option<TaskStatusArg>,
    /// Filter by priority
    #[arg(short, long)]
    pub priority: Option<PriorityArg>,
}

impl From<ListTasksArgs> for ListTasks {
    fn from(val: ListTasksArgs) -> Self {
        ListTasks {
            plan_id: val.plan_id,
            status: val.status.map(|s| s.to_string()),
            priority: val.priority.map(|p| p.to_string()),
        }
    }
}

/// Show details of a specific task
#[derive(Args)]
pub struct ShowTaskArgs {
    /// ID of the task to display
    #[arg(help = "Unique identifier of the task to show details for")]
    pub id: u64,
}

impl From<ShowTaskArgs> for Id {
    fn from(val: ShowTaskArgs) -> Self {
        Id { id: val.id }
    }
}

/// Update a task's status or details
#[derive(Args)]
pub struct UpdateTaskArgs {
    /// ID of the task to update
    #[arg(help = "Unique identifier of the task to update")]
    pub id: u64,
    /// New status for the task
    #[arg(short, long)]
    pub status: Option<TaskStatusArg>,
    /// New priority for the task
    #[arg(short, long)]
    pub priority: Option<PriorityArg>,
    /// Updated title for the task
    #[arg(short, long)]
    pub title: Option<String>,
    /// Updated detailed description of what needs to be done
    #[arg(short, long)]
    pub description: Option<String>,
    /// Updated effort estimate in hours
    #[arg(short = 'e', long)]
    pub hours: Option<u32>,
    /// Updated due date as an RFC 3339 timestamp
    #[arg(long)]
    pub due_date: Option<String>,
    /// Replacement dependency list - comma-separated task IDs
    #[arg(long, value_delimiter = ',')]
    pub depends_on: Option<Vec<u64>>,
}

impl From<UpdateTaskArgs> for UpdateTask {
    fn from(val: UpdateTaskArgs) -> Self {
        UpdateTask {
            id: val.id,
            title: val.title,
            description: val.description,
            priority: val.priority.map(|p| p.to_string()),
            status: val.status.map(|s| s.to_string()),
            estimated_hours: val.hours,
            due_date: val.due_date,
            depends_on: val.depends_on,
        }
    }
}

#[derive(Subcommand)]
pub enum TaskCommands {
    /// Add a new task to a plan
    #[command(alias = "a")]
    Add(AddTaskArgs),
    /// List tasks with optional filters
    #[command(aliases = ["l", "ls"])]
    List(ListTasksArgs),
    /// Show details of a specific task
    #[command(alias = "s")]
    Show(ShowTaskArgs),
    /// Update a task's status or details
    #[command(alias = "u")]
    Update(UpdateTaskArgs),
}

/// Command-line argument representation of task status values
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum TaskStatusArg {
    /// Mark task as pending
    Pending,
    /// Mark task as in progress
    InProgress,
    /// Mark task as completed
    Completed,
    /// Mark task as cancelled
    Cancelled,
}

impl std::fmt::Display for TaskStatusArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TaskStatusArg::Pending => write!(f, "pending"),
            TaskStatusArg::InProgress => write!(f, "in_progress"),
            TaskStatusArg::Completed => write!(f, "completed"),
            TaskStatusArg::Cancelled => write!(f, "cancelled"),
        }
    }
}

/// Command-line argument representation of task priority values
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum PriorityArg {
    Low,
    Medium,
    High,
    Urgent,
}

impl std::fmt::Display for PriorityArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PriorityArg::Low => write!(f, "low"),
            PriorityArg::Medium => write!(f, "medium"),
            PriorityArg::High => write!(f, "high"),
            PriorityArg::Urgent => write!(f, "urgent"),
        }
    }
}

/// Command handler connecting parsed arguments to planner operations.
///
/// Each handler converts the CLI arguments into core parameters, runs the
/// operation, wraps the outcome in the matching display type, and renders
/// the markdown through the terminal renderer.
pub struct Cli {
    planner: Planner,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(planner: Planner, renderer: TerminalRenderer) -> Self {
        Self { planner, renderer }
    }

    pub async fn handle_goal_command(&self, command: GoalCommands) -> Result<()> {
        match command {
            GoalCommands::Create(args) => {
                let goal = self.planner.create_goal(&args.into()).await?;
                self.renderer.render(&CreateResult::new(goal).to_string())
            }
            GoalCommands::List => self.list_goals().await,
            GoalCommands::Show(args) => {
                let params: Id = args.into();
                match self.planner.get_goal(&params).await? {
                    Some(goal) => self.renderer.render(&goal.to_string()),
                    None => bail!("Goal with ID {} not found", params.id),
                }
            }
            GoalCommands::Update(args) => {
                let changes = changed_fields(&[
                    ("title", args.title.is_some()),
                    ("description", args.description.is_some()),
                ]);
                let goal = self.planner.update_goal(&args.into()).await?;
                self.renderer
                    .render(&UpdateResult::with_changes(goal, changes).to_string())
            }
            GoalCommands::Delete(args) => {
                let params: DeleteGoal = args.into();
                match self.planner.delete_goal(&params).await? {
                    Some(goal) => self.renderer.render(&DeleteResult::new(goal).to_string()),
                    None => self.renderer.render(
                        &OperationStatus::failure(format!(
                            "Goal with ID {} not found",
                            params.id
                        ))
                        .to_string(),
                    ),
                }
            }
        }
    }

    pub async fn handle_plan_command(&self, command: PlanCommands) -> Result<()> {
        match command {
            PlanCommands::Generate(args) => {
                let plan = self.planner.generate_plan(&args.into()).await?;
                self.renderer.render(&CreateResult::new(plan).to_string())
            }
            PlanCommands::List(args) => {
                let summaries = self.planner.list_plan_summaries(&args.into()).await?;
                self.renderer.render(&format!("# Plans\n\n{summaries}"))
            }
            PlanCommands::Show(args) => {
                let params: Id = args.into();
                match self.planner.get_plan(&params).await? {
                    Some(plan) => self.renderer.render(&plan.to_string()),
                    None => bail!("Plan with ID {} not found", params.id),
                }
            }
            PlanCommands::Delete(args) => {
                let params: DeletePlan = args.into();
                match self.planner.delete_plan(&params).await? {
                    Some(plan) => self.renderer.render(&DeleteResult::new(plan).to_string()),
                    None => self.renderer.render(
                        &OperationStatus::failure(format!(
                            "Plan with ID {} not found",
                            params.id
                        ))
                        .to_string(),
                    ),
                }
            }
        }
    }

    pub async fn handle_task_command(&self, command: TaskCommands) -> Result<()> {
        match command {
            TaskCommands::Add(args) => {
                let task = self.planner.add_task(&args.into()).await?;
                self.renderer.render(&CreateResult::new(task).to_string())
            }
            TaskCommands::List(args) => {
                let tasks = self.planner.list_tasks(&args.into()).await?;
                self.renderer.render(&format!("# Tasks\n\n{tasks}"))
            }
            TaskCommands::Show(args) => {
                let params: Id = args.into();
                match self.planner.get_task(&params).await? {
                    Some(task) => self.renderer.render(&task.to_string()),
                    None => bail!("Task with ID {} not found", params.id),
                }
            }
            TaskCommands::Update(args) => {
                let changes = changed_fields(&[
                    ("status", args.status.is_some()),
                    ("priority", args.priority.is_some()),
                    ("title", args.title.is_some()),
                    ("description", args.description.is_some()),
                    ("estimated hours", args.hours.is_some()),
                    ("due date", args.due_date.is_some()),
                    ("dependencies", args.depends_on.is_some()),
                ]);
                let task = self.planner.update_task(&args.into()).await?;
                self.renderer
                    .render(&UpdateResult::with_changes(task, changes).to_string())
            }
        }
    }

    pub async fn list_goals(&self) -> Result<()> {
        let goals = self.planner.list_goals().await?;
        self.renderer.render(&format!("# Goals\n\n{goals}"))
    }
}

/// Collect the names of fields the user supplied on the command line.
fn changed_fields(fields: &[(&str, bool)]) -> Vec<String> {
    fields
        .iter()
        .filter(|(_, set)| *set)
        .map(|(name, _)| format!("Updated {name}"))
        .collect()
}
