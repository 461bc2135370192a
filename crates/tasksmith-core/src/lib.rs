//! Core library for the Tasksmith goal planning application.
//!
//! This crate provides the core business logic for turning free-text goals
//! into actionable task plans, including the rule-based plan generator,
//! database operations, data models, and error handling.
//!
//! # Plan Generation
//!
//! The [`generator`] module classifies a goal into a category by keyword
//! matching, selects a fixed task template, and scales effort estimates
//! and due dates to the requested timeline. An optional
//! [`generator::PlanProvider`] can be plugged in ahead of the local
//! generator; provider failures silently fall back to the rule-based
//! logic.
//!
//! # Display Architecture
//!
//! The crate implements a Display-based architecture for formatting output:
//!
//! - **Domain Models** ([`models`]): Implement [`std::fmt::Display`] for
//!   direct formatting
//! - **Display Wrappers** ([`display`]): Provide contextual and specialized
//!   formatting
//! - **Terminal Rendering**: Rich markdown output via the CLI's terminal
//!   renderer
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use tasksmith_core::{params::GeneratePlan, PlannerBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Create a planner instance
//! let planner = PlannerBuilder::new()
//!     .with_database_path(Some("test.db"))
//!     .build()
//!     .await?;
//!
//! // Generate a plan from a free-text goal
//! let params = GeneratePlan {
//!     goal: "Launch a mobile app".to_string(),
//!     timeline_weeks: 8,
//!     context: None,
//!     title: None,
//! };
//!
//! let plan = planner.generate_plan(&params).await?;
//! println!("Generated plan: {plan}");
//! # Ok(())
//! # }
//! ```

pub mod db;
pub mod display;
pub mod error;
pub mod generator;
pub mod models;
pub mod params;
pub mod planner;

// Re-export commonly used types
pub use db::Database;
pub use display::{
    CreateResult, DeleteResult, Goals, OperationStatus, PlanSummaries, Tasks, UpdateResult,
};
pub use error::{PlannerError, Result};
pub use generator::{Category, GenerateRequest, GeneratedPlan, GeneratedTask, PlanProvider};
pub use models::{
    Goal, Plan, PlanSummary, Priority, Task, TaskFilter, TaskStatus, UpdateTaskRequest,
};
pub use params::{
    AddTask, CreateGoal, DeleteGoal, DeletePlan, GeneratePlan, Id, ListPlans, ListTasks,
    UpdateGoal, UpdateTask,
};
pub use planner::{Planner, PlannerBuilder};
