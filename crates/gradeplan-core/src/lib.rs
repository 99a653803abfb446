//! gradeplan Core - Course model and error types for score planning
//!
//! This crate provides the plain data the planner works on:
//! - Completed and planned course records
//! - Difficulty bands used for labeling suggestions
//! - The planning request and allocation result types
//! - The error taxonomy shared by every gradeplan crate

pub mod average;
pub mod band;
pub mod course;
pub mod error;
pub mod request;
pub mod result;


pub use average::{weighted_average, WeightedTotal};
pub use band::{BandThresholds, DifficultyBand};
pub use course::{CompletedCourse, PlannedCourse, MAX_SCORE, MIN_SCORE};
pub use error::{GradePlanError, Result};
pub use request::PlanningRequest;
pub use result::{AllocationResult, CourseTarget, Suggestion};
