//! Data models for goals, plans, and tasks.
//!
//! This module contains the core domain models of the Tasksmith system.
//! A [`Goal`] is the user's free-text objective; each goal owns generated
//! [`Plan`]s, and each plan owns an ordered list of [`Task`]s with
//! priorities, due dates, and intra-plan dependencies.
//!
//! Display implementations for these models live in
//! [`crate::display::models`] to keep data structures separate from
//! presentation logic.

pub mod filters;
pub mod goal;
pub mod plan;
pub mod requests;
pub mod status;
pub mod summary;
pub mod task;

#[cfg(test)]
mod tests;

// Re-export all public types at the models level
pub use filters::TaskFilter;
pub use goal::Goal;
pub use plan::Plan;
pub use requests::UpdateTaskRequest;
pub use status::{Priority, TaskStatus};
pub use summary::PlanSummary;
pub use task::Task;
