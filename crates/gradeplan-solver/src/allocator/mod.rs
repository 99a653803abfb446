//! Score allocation.
//!
//! Feasible verdicts get a minimal-effort assignment that hits the target
//! exactly. Infeasible verdicts fall back to the assignment closest to the
//! target (all maxima or all minima) plus adjustment hints.

mod greedy;
mod suggestion;

#[cfg(test)]
mod tests;

use gradeplan_config::PlannerConfig;
use gradeplan_core::{
    AllocationResult, CourseTarget, GradePlanError, PlannedCourse, PlanningRequest, Result,
    MAX_SCORE,
};
use tracing::info;

use crate::feasibility::{FeasibilityVerdict, Infeasibility};

pub use greedy::{cost_order, distribute};

/// Computes target scores for every planned course.
///
/// The request is re-validated so malformed input never reaches the
/// allocation step, whatever verdict is passed in.
///
/// # Errors
///
/// - `GradePlanError::InvalidInput` for malformed requests.
/// - `GradePlanError::UnreachableState` when a verdict marked feasible
///   cannot be honored.
///
/// # Examples
///
/// ```
/// use gradeplan_config::PlannerConfig;
/// use gradeplan_core::{PlannedCourse, PlanningRequest};
/// use gradeplan_solver::{allocate, analyze};
///
/// let request = PlanningRequest::new(80.0)
///     .with_planned(PlannedCourse::new("Easy", 1.0, 60.0, 100.0, 0.1))
///     .with_planned(PlannedCourse::new("Hard", 1.0, 60.0, 100.0, 0.9));
/// let config = PlannerConfig::default();
///
/// let verdict = analyze(&request, &config).unwrap();
/// let result = allocate(&request, &verdict, &config).unwrap();
///
/// assert!(result.feasible);
/// assert_eq!(result.target_for("Easy"), Some(100.0));
/// assert_eq!(result.target_for("Hard"), Some(60.0));
/// ```
pub fn allocate(
    request: &PlanningRequest,
    verdict: &FeasibilityVerdict,
    config: &PlannerConfig,
) -> Result<AllocationResult> {
    request.validate()?;

    let result = match verdict.infeasibility() {
        None => allocate_feasible(request, verdict, config)?,
        Some(Infeasibility::TargetTooHigh { shortfall }) => {
            let scores: Vec<f64> = request.planned.iter().map(|c| c.max_score).collect();
            let suggestions = suggestion::target_too_high(request, verdict, shortfall, config);
            build_result(
                request,
                &scores,
                verdict.max_attainable_average,
                false,
                suggestions,
                config,
            )
        }
        Some(Infeasibility::TargetTooLow { .. }) => {
            let scores: Vec<f64> = request.planned.iter().map(|c| c.min_score).collect();
            let suggestions = suggestion::target_too_low(verdict);
            build_result(
                request,
                &scores,
                verdict.min_attainable_average,
                false,
                suggestions,
                config,
            )
        }
    };

    info!(
        event = "allocate_end",
        feasible = result.feasible,
        achieved_average = result.achieved_average,
        total_effort = result.total_effort,
        suggestion_count = result.suggestions.len() as u64,
    );
    Ok(result)
}

fn allocate_feasible(
    request: &PlanningRequest,
    verdict: &FeasibilityVerdict,
    config: &PlannerConfig,
) -> Result<AllocationResult> {
    let slack = average_slack(request, verdict, config);
    let sum_tolerance = slack * verdict.total_credits;
    let scores = distribute(&request.planned, verdict.required_planned_sum(), sum_tolerance)?;

    let achieved = achieved_average(request, verdict, &scores);
    if (achieved - verdict.target_average).abs() > slack {
        return Err(GradePlanError::UnreachableState(format!(
            "allocation reached {achieved} but the verdict promised {}",
            verdict.target_average
        )));
    }

    let suggestions = suggestion::feasible(request, &scores, achieved, config);
    Ok(build_result(
        request,
        &scores,
        achieved,
        true,
        suggestions,
        config,
    ))
}

/// Allowed gap between the achieved and promised average.
///
/// Never below the round-off of summing `planned + 1` credit-weighted
/// scores, so a zero tolerance only narrows the feasibility band.
fn average_slack(
    request: &PlanningRequest,
    verdict: &FeasibilityVerdict,
    config: &PlannerConfig,
) -> f64 {
    let terms = request.planned.len() as f64 + 1.0;
    let round_off = f64::EPSILON * MAX_SCORE * terms * verdict.total_credits.max(1.0);
    config.tolerance.max(round_off)
}

fn achieved_average(
    request: &PlanningRequest,
    verdict: &FeasibilityVerdict,
    scores: &[f64],
) -> f64 {
    let planned_sum: f64 = request
        .planned
        .iter()
        .zip(scores)
        .map(|(c, x)| c.credits * x)
        .sum();
    (verdict.completed_weighted_sum + planned_sum) / verdict.total_credits
}

fn build_result(
    request: &PlanningRequest,
    scores: &[f64],
    achieved_average: f64,
    feasible: bool,
    suggestions: Vec<gradeplan_core::Suggestion>,
    config: &PlannerConfig,
) -> AllocationResult {
    let targets: Vec<CourseTarget> = request
        .planned
        .iter()
        .zip(scores)
        .map(|(course, &score)| course_target(course, score, config))
        .collect();
    let total_effort = targets.iter().map(|t| t.effort).sum();

    AllocationResult {
        targets,
        achieved_average,
        feasible,
        total_effort,
        suggestions,
    }
}

fn course_target(course: &PlannedCourse, score: f64, config: &PlannerConfig) -> CourseTarget {
    CourseTarget {
        name: course.name.clone(),
        score,
        band: config.bands.classify(course.difficulty),
        effort: course.effort_at(score),
    }
}
