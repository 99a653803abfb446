//! gradeplan - Course Score Planning in Rust
//!
//! Give it the courses you finished, the courses ahead with the score range
//! you expect in each, and the average you want. It returns the target
//! score per course that gets there with the least effort, or the closest
//! you can get plus what to change.
//!
//! # Example
//!
//! ```rust
//! use gradeplan::prelude::*;
//!
//! let request = PlanningRequest::new(85.0)
//!     .with_completed(CompletedCourse::new("Calculus", 4.0, 82.0))
//!     .with_planned(PlannedCourse::new("Databases", 3.0, 70.0, 95.0, 0.2))
//!     .with_planned(PlannedCourse::new("Compilers", 3.0, 70.0, 95.0, 0.9));
//!
//! let result = plan_with_config(&request, &PlannerConfig::default()).unwrap();
//! assert!(result.feasible);
//! assert_eq!(result.target_for("Databases"), Some(95.0));
//! ```

// Model types
pub use gradeplan_core::{
    weighted_average, AllocationResult, BandThresholds, CompletedCourse, CourseTarget,
    DifficultyBand, GradePlanError, PlannedCourse, PlanningRequest, Result, Suggestion,
};

// Configuration
pub use gradeplan_config::{ConfigError, PlannerConfig};

// Engine
pub use gradeplan_solver::{allocate, analyze, FeasibilityVerdict, Infeasibility};

#[cfg(feature = "console")]
pub mod console;

mod planner;
pub use planner::{plan, plan_with_config, CONFIG_FILE};

pub mod prelude {
    pub use super::{plan, plan_with_config};
    pub use super::{
        AllocationResult, CompletedCourse, PlannedCourse, PlannerConfig, PlanningRequest,
        Suggestion,
    };
}
