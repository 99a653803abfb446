//! Feasibility analysis: can the target be reached inside every planned
//! course's score range?

use gradeplan_config::PlannerConfig;
use gradeplan_core::{PlanningRequest, Result};
use tracing::{info, warn};

/// Why a target cannot be met.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Infeasibility {
    /// Target exceeds the average reached with every maximum score.
    TargetTooHigh { shortfall: f64 },
    /// Target lies below the average reached with every minimum score.
    TargetTooLow { surplus: f64 },
}

/// Outcome of [`analyze`].
#[derive(Debug, Clone, PartialEq)]
pub struct FeasibilityVerdict {
    pub feasible: bool,
    pub target_average: f64,
    pub total_credits: f64,
    pub completed_weighted_sum: f64,
    /// Average with every planned course at its minimum.
    pub min_attainable_average: f64,
    /// Average with every planned course at its maximum.
    pub max_attainable_average: f64,
    /// `max(target - max_attainable, 0)`
    pub shortfall: f64,
    /// `max(min_attainable - target, 0)`
    pub surplus: f64,
}

impl FeasibilityVerdict {
    /// Weighted sum the planned courses must contribute to hit the target.
    pub fn required_planned_sum(&self) -> f64 {
        self.target_average * self.total_credits - self.completed_weighted_sum
    }

    /// Returns the reason the target is unreachable, if it is.
    pub fn infeasibility(&self) -> Option<Infeasibility> {
        if self.feasible {
            None
        } else if self.shortfall > 0.0 {
            Some(Infeasibility::TargetTooHigh {
                shortfall: self.shortfall,
            })
        } else {
            Some(Infeasibility::TargetTooLow {
                surplus: self.surplus,
            })
        }
    }
}

/// Determines whether `request.target_average` is attainable.
///
/// The request is validated first; malformed input fails with
/// `GradePlanError::InvalidInput` before any arithmetic.
///
/// # Examples
///
/// ```
/// use gradeplan_config::PlannerConfig;
/// use gradeplan_core::{CompletedCourse, PlannedCourse, PlanningRequest};
/// use gradeplan_solver::analyze;
///
/// let request = PlanningRequest::new(90.0)
///     .with_completed(CompletedCourse::new("Algebra", 2.0, 80.0))
///     .with_planned(PlannedCourse::new("Geometry", 2.0, 70.0, 95.0, 0.5));
///
/// let verdict = analyze(&request, &PlannerConfig::default()).unwrap();
/// assert!(!verdict.feasible);
/// assert_eq!(verdict.max_attainable_average, 87.5);
/// assert_eq!(verdict.shortfall, 2.5);
/// ```
pub fn analyze(request: &PlanningRequest, config: &PlannerConfig) -> Result<FeasibilityVerdict> {
    request.validate()?;

    let completed = request.completed_total();
    let total_credits = completed.credits + request.planned_credits();
    let (min_sum, max_sum) = request.planned.iter().fold((0.0, 0.0), |(lo, hi), c| {
        (lo + c.credits * c.min_score, hi + c.credits * c.max_score)
    });

    let min_attainable_average = (completed.weighted_sum + min_sum) / total_credits;
    let max_attainable_average = (completed.weighted_sum + max_sum) / total_credits;
    let target = request.target_average;
    let tol = config.tolerance;

    let feasible =
        min_attainable_average - tol <= target && target <= max_attainable_average + tol;
    let shortfall = if feasible {
        0.0
    } else {
        (target - max_attainable_average).max(0.0)
    };
    let surplus = if feasible {
        0.0
    } else {
        (min_attainable_average - target).max(0.0)
    };

    info!(
        event = "analyze",
        feasible,
        target_average = target,
        min_average = min_attainable_average,
        max_average = max_attainable_average,
        planned_count = request.planned.len() as u64,
    );
    if !feasible {
        warn!(
            event = "infeasible",
            shortfall, surplus, "target average is outside the attainable range"
        );
    }

    Ok(FeasibilityVerdict {
        feasible,
        target_average: target,
        total_credits,
        completed_weighted_sum: completed.weighted_sum,
        min_attainable_average,
        max_attainable_average,
        shortfall,
        surplus,
    })
}
