//! Display formatting functions and result types.
//!
//! This module provides wrapper types for collections and operation
//! results, enabling consistent markdown formatting across different
//! output contexts (lists, operations, etc.).
//!
//! # Architecture: Display Functions and Wrappers
//!
//! Display implementations on the domain models handle single-resource
//! formatting; this module adds newtype wrappers for collections and
//! operation results on top of them.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │ Wrapper Types   │    │   Formatted     │
//! │ (Goal, Plan,    │───▶│ (collections,   │───▶│    Output       │
//! │  Task)          │    │  results)       │    │   (Terminal)    │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`collections`]: Collection wrapper types (Goals, PlanSummaries, Tasks)
//! - [`results`]: Operation result types (CreateResult, UpdateResult,
//!   DeleteResult)
//! - [`status`]: Status and confirmation messages (OperationStatus)
//! - [`datetime`]: Date/time formatting utilities
//! - [`models`]: Display implementations for domain models
//!
//! All formatters produce markdown for rich terminal display; headers,
//! metadata, and content follow a standard structure.

pub mod collections;
pub mod datetime;
pub mod models;
pub mod results;
pub mod status;

// Re-export commonly used types for convenience
pub use collections::{Goals, PlanSummaries, Tasks};
pub use datetime::LocalDateTime;
pub use results::{CreateResult, DeleteResult, UpdateResult};
pub use status::OperationStatus;
