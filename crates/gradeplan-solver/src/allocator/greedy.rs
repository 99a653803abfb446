//! Cheapest-first distribution of the required weighted sum.
//!
//! The objective `sum(difficulty_i * (x_i - min_i))` is separable and
//! linear, so raising courses in ascending `difficulty / credits` order
//! until the equality is met is exact (fractional knapsack).

use gradeplan_core::{GradePlanError, PlannedCourse, Result};
use tracing::debug;

/// Returns course indices in the order the greedy raises them.
///
/// Ascending cost per credit-weighted point; ties go to the larger
/// headroom, then to input order.
pub fn cost_order(courses: &[PlannedCourse]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..courses.len()).collect();
    order.sort_by(|&a, &b| {
        let (ca, cb) = (&courses[a], &courses[b]);
        ca.cost_per_unit()
            .total_cmp(&cb.cost_per_unit())
            .then_with(|| cb.headroom().total_cmp(&ca.headroom()))
            .then_with(|| a.cmp(&b))
    });
    order
}

/// Assigns scores so that `sum(credits_i * x_i) == required_sum` at minimal
/// effort.
///
/// Every course starts at its minimum. A residual within `sum_tolerance`
/// counts as met; a larger one left after saturating every course is an
/// `UnreachableState` error.
pub fn distribute(
    courses: &[PlannedCourse],
    required_sum: f64,
    sum_tolerance: f64,
) -> Result<Vec<f64>> {
    let mut scores: Vec<f64> = courses.iter().map(|c| c.min_score).collect();
    let base_sum: f64 = courses.iter().map(|c| c.credits * c.min_score).sum();
    let mut residual = required_sum - base_sum;

    if residual < -sum_tolerance {
        return Err(GradePlanError::UnreachableState(format!(
            "minimum scores already exceed the required weighted sum by {}",
            -residual
        )));
    }

    for idx in cost_order(courses) {
        if residual <= sum_tolerance {
            break;
        }
        let course = &courses[idx];
        let capacity = course.credits * course.headroom();
        if capacity <= 0.0 {
            continue;
        }

        if capacity <= residual {
            scores[idx] = course.max_score;
            residual -= capacity;
        } else {
            scores[idx] = (course.min_score + residual / course.credits).min(course.max_score);
            residual = 0.0;
        }

        debug!(
            event = "raise",
            course = %course.name,
            score = scores[idx],
            residual,
        );
    }

    if residual > sum_tolerance {
        return Err(GradePlanError::UnreachableState(format!(
            "every planned course is at its maximum but {residual} weighted points remain"
        )));
    }
    Ok(scores)
}
