//! Tasksmith CLI Application
//!
//! Command-line interface for the tasksmith goal planning tool.

mod args;
mod cli;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use renderer::TerminalRenderer;
use tasksmith_core::PlannerBuilder;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        no_color,
        command,
    } = Args::parse();

    let planner = PlannerBuilder::new()
        .with_database_path(database_file)
        .build()
        .await
        .context("Failed to initialize planner")?;

    let renderer = TerminalRenderer::new(!no_color);

    info!("Tasksmith started");

    match command {
        Some(Goal { command }) => {
            Cli::new(planner, renderer)
                .handle_goal_command(command)
                .await
        }
        Some(Plan { command }) => {
            Cli::new(planner, renderer)
                .handle_plan_command(command)
                .await
        }
        Some(Task { command }) => {
            Cli::new(planner, renderer)
                .handle_task_command(command)
                .await
        }
        None => Cli::new(planner, renderer).list_goals().await,
    }
}
