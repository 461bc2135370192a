//! High-level planner API for managing goals, plans, and tasks.
//!
//! This module provides the main [`Planner`] interface for interacting with
//! the Tasksmith planning system. The planner acts as the central
//! coordinator between the application layers and the database,
//! implementing all business logic for goal, plan, and task operations.
//!
//! # Architecture Overview
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   Operations    │    │    Generator    │    │    Database     │
//! │ (goal_ops,      │───▶│ (rule-based,    │    │   (via db/)     │
//! │  plan_ops,      │    │  provider seam) │───▶│                 │
//! │  task_ops)      │    └─────────────────┘    └─────────────────┘
//! └─────────────────┘
//! ```
//!
//! ## Submodules
//!
//! - [`builder`]: Factory for creating [`Planner`] instances with
//!   configuration
//! - [`goal_ops`]: Goal operations (create, show, list, update, delete)
//! - [`plan_ops`]: Plan operations (generate, show, list, delete)
//! - [`task_ops`]: Task operations (show, list, add, update)
//!
//! All operations are async and run their database work on a blocking
//! thread. Destructive operations require an explicit confirmation flag
//! and return the deleted resource for display.
//!
//! # Usage Examples
//!
//! ```rust,no_run
//! use tasksmith_core::{params::GeneratePlan, PlannerBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let planner = PlannerBuilder::new().build().await?;
//!
//! let plan = planner
//!     .generate_plan(&GeneratePlan {
//!         goal: "Launch a mobile app".to_string(),
//!         timeline_weeks: 8,
//!         context: None,
//!         title: None,
//!     })
//!     .await?;
//! println!("{plan}");
//! # Ok(())
//! # }
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use crate::generator::PlanProvider;

// Module declarations
pub mod builder;
pub mod goal_ops;
pub mod plan_ops;
pub mod task_ops;

// Re-export the main types
pub use builder::PlannerBuilder;

/// Main planner interface for managing goals, plans, and tasks.
pub struct Planner {
    pub(crate) db_path: PathBuf,
    /// Optional external plan provider tried before the local generator
    pub(crate) provider: Option<Arc<dyn PlanProvider>>,
}

impl Planner {
    /// Creates a new planner with the specified database path.
    pub(crate) fn new(db_path: PathBuf, provider: Option<Arc<dyn PlanProvider>>) -> Self {
        Self { db_path, provider }
    }
}
