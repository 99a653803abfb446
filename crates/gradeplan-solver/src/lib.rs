//! gradeplan Solver Engine
//!
//! This crate provides the planning engine:
//! - Feasibility analysis (attainable bounds, shortfall)
//! - Greedy cheapest-first score allocation
//! - Suggestion generation for feasible and infeasible plans
//!
//! Logging levels:
//! - **INFO**: analysis verdicts and allocation summaries
//! - **WARN**: infeasible targets
//! - **DEBUG**: individual greedy steps

pub mod allocator;
pub mod feasibility;


pub use allocator::allocate;
pub use feasibility::{analyze, FeasibilityVerdict, Infeasibility};
