use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{GoalCommands, PlanCommands, TaskCommands};

/// Main command-line interface for the Tasksmith planning tool
///
/// Tasksmith turns free-text goals into structured, actionable plans. A goal
/// is broken down into a plan of ordered tasks with effort estimates, due
/// dates, and dependencies, all of which can then be tracked and updated from
/// the command line.
#[derive(Parser)]
#[command(version, about, name = "tsk")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/tasksmith/tasksmith.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Tasksmith CLI
///
/// The CLI is organized into three main command categories:
/// - `goal`: Operations for managing goals (create, list, update, delete)
/// - `plan`: Operations for generating and managing plans
/// - `task`: Operations for managing individual tasks within plans
#[derive(Subcommand)]
pub enum Commands {
    /// Manage goals
    #[command(alias = "g")]
    Goal {
        #[command(subcommand)]
        command: GoalCommands,
    },
    /// Generate and manage plans
    #[command(alias = "p")]
    Plan {
        #[command(subcommand)]
        command: PlanCommands,
    },
    /// Manage tasks within plans
    #[command(alias = "t")]
    Task {
        #[command(subcommand)]
        command: TaskCommands,
    },
}
