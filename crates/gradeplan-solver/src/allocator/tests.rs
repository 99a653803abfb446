//! Tests for score allocation.

use gradeplan_config::PlannerConfig;
use gradeplan_core::{DifficultyBand, GradePlanError, PlannedCourse, PlanningRequest, Suggestion};
use gradeplan_test::{
    assert_close, completed_only, grid_min_effort, inverted_range, semester_plan, three_way_plan,
    unreachable_plan, GridSearch,
};

use super::*;
use crate::feasibility::analyze;

fn plan(request: &PlanningRequest, config: &PlannerConfig) -> Result<AllocationResult> {
    let verdict = analyze(request, config)?;
    allocate(request, &verdict, config)
}

#[test]
fn test_semester_plan_cheapest_first() {
    let result = plan(&semester_plan(), &PlannerConfig::default()).unwrap();

    assert!(result.feasible);
    assert_close(result.achieved_average, 87.0);
    // Web开发 costs 0.12 per weighted point, 数据结构 0.267.
    assert_eq!(result.target_for("Web开发"), Some(98.0));
    assert_close(result.target_for("数据结构").unwrap(), 70.0 + 23.5 / 3.0);
    assert_close(result.total_effort, 0.3 * 18.0 + 0.8 * (23.5 / 3.0));

    assert_eq!(result.suggestions.len(), 2);
    assert!(matches!(
        &result.suggestions[0],
        Suggestion::FocusBand { band: DifficultyBand::Medium, courses } if courses[0].0 == "Web开发"
    ));
    assert!(matches!(
        &result.suggestions[1],
        Suggestion::FocusBand { band: DifficultyBand::Hard, courses } if courses[0].0 == "数据结构"
    ));
}

#[test]
fn test_unreachable_target_falls_back_to_maxima() {
    let request = unreachable_plan();
    let result = plan(&request, &PlannerConfig::default()).unwrap();

    assert!(!result.feasible);
    assert_eq!(result.achieved_average, 87.5);
    assert_eq!(result.target_for("Geometry"), Some(95.0));
    assert_eq!(
        result.suggestions,
        vec![
            Suggestion::TargetUnreachable {
                best_average: 87.5,
                gap: 2.5,
            },
            Suggestion::RaiseMaximum {
                course: "Geometry".to_string(),
                current_max: 95.0,
                proposed_max: 100.0,
                closes_gap: true,
            },
            Suggestion::AddCourses {
                credits: 2.0,
                at_score: 95.0,
            },
            Suggestion::LowerTarget { to: 87.5 },
        ]
    );
}

#[test]
fn test_offenders_ranked_by_weighted_headroom() {
    let config = PlannerConfig::default().with_suggestion_limit(2);
    let result = plan(&three_way_plan(90.0), &config).unwrap();

    assert!(!result.feasible);
    assert_close(result.achieved_average, 86.0);
    for target in &result.targets {
        let course = three_way_plan(90.0)
            .planned
            .into_iter()
            .find(|c| c.name == target.name)
            .unwrap();
        assert_eq!(target.score, course.max_score);
    }

    let raised: Vec<_> = result
        .suggestions
        .iter()
        .filter_map(|s| match s {
            Suggestion::RaiseMaximum {
                course,
                proposed_max,
                closes_gap,
                ..
            } => Some((course.as_str(), *proposed_max, *closes_gap)),
            _ => None,
        })
        .collect();
    assert_eq!(raised.len(), 2);
    assert_eq!(raised[0].0, "Compilers");
    assert_close(raised[0].1, 98.0);
    assert!(raised[0].2);
    assert_eq!(raised[1], ("Statistics", 100.0, false));
    assert_eq!(
        result.suggestions.last(),
        Some(&Suggestion::LowerTarget {
            to: result.achieved_average
        })
    );
}

#[test]
fn test_courses_at_hundred_not_proposed() {
    let request = PlanningRequest::new(99.0)
        .with_planned(PlannedCourse::new("Capped", 2.0, 80.0, 100.0, 0.5))
        .with_planned(PlannedCourse::new("Open", 1.0, 60.0, 90.0, 0.5));
    let result = plan(&request, &PlannerConfig::default()).unwrap();

    assert!(!result.feasible);
    assert!(result.suggestions.iter().all(|s| !matches!(
        s,
        Suggestion::RaiseMaximum { course, .. } if course == "Capped"
    )));
    assert!(!result.suggestions.is_empty());
}

#[test]
fn test_no_add_courses_hint_above_assumed_score() {
    let request = PlanningRequest::new(97.0)
        .with_planned(PlannedCourse::new("Only", 1.0, 60.0, 90.0, 0.5));
    let result = plan(&request, &PlannerConfig::default()).unwrap();

    assert!(!result
        .suggestions
        .iter()
        .any(|s| matches!(s, Suggestion::AddCourses { .. })));
}

#[test]
fn test_target_below_minimum_keeps_minima() {
    let result = plan(&three_way_plan(60.0), &PlannerConfig::default()).unwrap();

    assert!(!result.feasible);
    assert_close(result.achieved_average, 69.0);
    assert_eq!(result.total_effort, 0.0);
    assert_eq!(result.target_for("Ethics"), Some(75.0));
    assert_eq!(
        result.suggestions,
        vec![
            Suggestion::TargetBelowMinimum { min_average: 69.0 },
            Suggestion::RaiseTarget { to: 69.0 },
        ]
    );
}

#[test]
fn test_invalid_input_never_allocated() {
    let config = PlannerConfig::default();
    let err = plan(&inverted_range(), &config).unwrap_err();
    assert!(err.is_invalid_input());

    // A verdict computed for a valid request cannot smuggle bad input in.
    let verdict = analyze(&unreachable_plan(), &config).unwrap();
    let err = allocate(&inverted_range(), &verdict, &config).unwrap_err();
    assert!(err.is_invalid_input());
}

#[test]
fn test_completed_only() {
    let result = plan(&completed_only(), &PlannerConfig::default()).unwrap();

    assert!(result.feasible);
    assert!(result.targets.is_empty());
    assert!(result.score_map().is_empty());
    assert_close(result.achieved_average, 85.0);
    assert!(result.suggestions.is_empty());
}

#[test]
fn test_minimums_suffice() {
    let result = plan(&three_way_plan(69.0), &PlannerConfig::default()).unwrap();

    assert!(result.feasible);
    assert_eq!(result.total_effort, 0.0);
    assert_eq!(
        result.suggestions[0],
        Suggestion::MinimumsSuffice { average: 69.0 }
    );
}

#[test]
fn test_equality_and_bounds_hold() {
    let config = PlannerConfig::default();
    for step in 0..=34 {
        let target = 69.0 + step as f64 * 0.5;
        let request = three_way_plan(target);
        let result = plan(&request, &config).unwrap();
        assert!(result.feasible, "target {target}");

        let completed = request.completed_total();
        let mut weighted = completed.weighted_sum;
        for (course, target) in request.planned.iter().zip(&result.targets) {
            assert!(target.score >= course.min_score && target.score <= course.max_score);
            weighted += course.credits * target.score;
        }
        assert!((weighted - target * request.total_credits()).abs() <= 1e-6);
    }
}

#[test]
fn test_three_way_partial_raise() {
    let result = plan(&three_way_plan(80.0), &PlannerConfig::default()).unwrap();

    assert_eq!(result.target_for("Ethics"), Some(95.0));
    assert_eq!(result.target_for("Statistics"), Some(92.0));
    assert_close(result.target_for("Compilers").unwrap(), 65.5);
}

#[test]
fn test_greedy_matches_grid_search() {
    let config = PlannerConfig::default();
    for target in [70.0, 73.5, 77.0, 80.0, 82.25, 85.0] {
        let request = three_way_plan(target);
        let result = plan(&request, &config).unwrap();
        let grid = grid_min_effort(&request, GridSearch::default()).unwrap();

        assert!(
            result.total_effort <= grid + 1e-6,
            "target {target}: greedy {} vs grid {grid}",
            result.total_effort
        );
    }

    let pair = semester_plan();
    let result = plan(&pair, &config).unwrap();
    let grid = grid_min_effort(&pair, GridSearch::default()).unwrap();
    assert!(result.total_effort <= grid + 1e-6);
}

#[test]
fn test_equal_cost_prefers_larger_headroom() {
    let request = PlanningRequest::new(65.0)
        .with_planned(PlannedCourse::new("Narrow", 2.0, 60.0, 70.0, 0.4))
        .with_planned(PlannedCourse::new("Wide", 2.0, 60.0, 90.0, 0.4));
    let result = plan(&request, &PlannerConfig::default()).unwrap();

    assert_eq!(result.target_for("Narrow"), Some(60.0));
    assert_close(result.target_for("Wide").unwrap(), 70.0);
}

#[test]
fn test_cost_order() {
    let request = three_way_plan(80.0);
    assert_eq!(cost_order(&request.planned), vec![0, 2, 1]);

    let free = vec![
        PlannedCourse::new("Paid", 1.0, 50.0, 60.0, 0.1),
        PlannedCourse::new("Free", 1.0, 50.0, 60.0, 0.0),
    ];
    assert_eq!(cost_order(&free), vec![1, 0]);
}

#[test]
fn test_allocate_is_idempotent() {
    let config = PlannerConfig::default();
    let request = three_way_plan(78.3);
    let verdict = analyze(&request, &config).unwrap();

    let first = allocate(&request, &verdict, &config).unwrap();
    let second = allocate(&request, &verdict, &config).unwrap();
    assert_eq!(first, second);
    assert_eq!(
        first.achieved_average.to_bits(),
        second.achieved_average.to_bits()
    );
}

#[test]
fn test_forged_feasible_verdict_is_unreachable() {
    let config = PlannerConfig::default();
    let request = three_way_plan(90.0);
    let mut verdict = analyze(&request, &config).unwrap();
    verdict.feasible = true;
    verdict.shortfall = 0.0;

    let err = allocate(&request, &verdict, &config).unwrap_err();
    assert!(matches!(err, GradePlanError::UnreachableState(_)));
}

#[test]
fn test_distribute_rejects_overshoot() {
    let courses = vec![PlannedCourse::new("A", 2.0, 80.0, 90.0, 0.5)];

    let err = distribute(&courses, 100.0, 1e-6).unwrap_err();
    assert!(matches!(err, GradePlanError::UnreachableState(_)));
    assert_eq!(distribute(&courses, 170.0, 1e-6).unwrap(), vec![85.0]);
}

#[test]
fn test_custom_bands() {
    let config = PlannerConfig::default().with_bands(gradeplan_core::BandThresholds {
        medium_from: 0.1,
        hard_from: 0.25,
    });
    let result = plan(&semester_plan(), &config).unwrap();

    let bands: Vec<_> = result.targets.iter().map(|t| t.band).collect();
    assert_eq!(bands, vec![DifficultyBand::Hard, DifficultyBand::Hard]);
}

#[test]
fn test_zero_tolerance_feasible_targets_allocate() {
    let config = PlannerConfig::default().with_tolerance(0.0);
    let mut checked = 0;
    for k in 0..=170 {
        let target = 69.0 + 0.1 * k as f64;
        let request = three_way_plan(target);
        let verdict = analyze(&request, &config).unwrap();
        if !verdict.feasible {
            continue;
        }

        let result = allocate(&request, &verdict, &config)
            .unwrap_or_else(|e| panic!("target {target}: {e}"));
        assert!(result.feasible);
        assert!((result.achieved_average - target).abs() <= 1e-9, "target {target}");
        for (course, t) in request.planned.iter().zip(&result.targets) {
            assert!(t.score >= course.min_score && t.score <= course.max_score);
        }
        checked += 1;
    }
    assert!(checked > 150);
}
