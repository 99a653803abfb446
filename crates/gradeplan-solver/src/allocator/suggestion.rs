//! Adjustment hints attached to allocation results.

use gradeplan_config::PlannerConfig;
use gradeplan_core::{DifficultyBand, PlanningRequest, Suggestion, MAX_SCORE};

use crate::feasibility::FeasibilityVerdict;

/// Hints for a plan that meets the target.
///
/// Targets are grouped by difficulty band, easiest first. When the minima
/// alone are enough that is said up front.
pub(super) fn feasible(
    request: &PlanningRequest,
    scores: &[f64],
    achieved: f64,
    config: &PlannerConfig,
) -> Vec<Suggestion> {
    let mut suggestions = Vec::new();
    if request.planned.is_empty() {
        return suggestions;
    }

    let at_minimum = request
        .planned
        .iter()
        .zip(scores)
        .all(|(c, &x)| x <= c.min_score);
    if at_minimum {
        suggestions.push(Suggestion::MinimumsSuffice { average: achieved });
    }

    for band in DifficultyBand::ALL {
        let courses: Vec<(String, f64)> = request
            .planned
            .iter()
            .zip(scores)
            .filter(|(c, _)| config.bands.classify(c.difficulty) == band)
            .map(|(c, &x)| (c.name.clone(), x))
            .collect();
        if !courses.is_empty() {
            suggestions.push(Suggestion::FocusBand { band, courses });
        }
    }
    suggestions
}

/// Hints for a target above the best attainable average.
pub(super) fn target_too_high(
    request: &PlanningRequest,
    verdict: &FeasibilityVerdict,
    shortfall: f64,
    config: &PlannerConfig,
) -> Vec<Suggestion> {
    let mut suggestions = vec![Suggestion::TargetUnreachable {
        best_average: verdict.max_attainable_average,
        gap: shortfall,
    }];

    // Weighted points missing from the numerator.
    let missing = shortfall * verdict.total_credits;

    let mut offenders: Vec<usize> = (0..request.planned.len())
        .filter(|&i| request.planned[i].max_score < MAX_SCORE)
        .collect();
    offenders.sort_by(|&a, &b| {
        let (ca, cb) = (&request.planned[a], &request.planned[b]);
        (cb.headroom() * cb.credits)
            .total_cmp(&(ca.headroom() * ca.credits))
            .then_with(|| a.cmp(&b))
    });

    for idx in offenders.into_iter().take(config.suggestion_limit) {
        let course = &request.planned[idx];
        let needed = course.max_score + missing / course.credits;
        suggestions.push(Suggestion::RaiseMaximum {
            course: course.name.clone(),
            current_max: course.max_score,
            proposed_max: needed.min(MAX_SCORE),
            closes_gap: needed <= MAX_SCORE + config.tolerance,
        });
    }

    if config.add_course_score > verdict.target_average {
        suggestions.push(Suggestion::AddCourses {
            credits: missing / (config.add_course_score - verdict.target_average),
            at_score: config.add_course_score,
        });
    }

    suggestions.push(Suggestion::LowerTarget {
        to: verdict.max_attainable_average,
    });
    suggestions
}

/// Hints for a target below what minimum scores already give.
pub(super) fn target_too_low(verdict: &FeasibilityVerdict) -> Vec<Suggestion> {
    vec![
        Suggestion::TargetBelowMinimum {
            min_average: verdict.min_attainable_average,
        },
        Suggestion::RaiseTarget {
            to: verdict.min_attainable_average,
        },
    ]
}
