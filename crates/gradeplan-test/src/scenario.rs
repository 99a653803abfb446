//! Named planning requests.

use gradeplan_core::{CompletedCourse, PlannedCourse, PlanningRequest};

/// One long completed record plus two planned courses, target 87.
///
/// Web开发 is the cheaper course per credit (0.3 / 2.5 vs 0.8 / 3).
pub fn semester_plan() -> PlanningRequest {
    semester_plan_with_target(87.0)
}

/// [`semester_plan`] with another target.
pub fn semester_plan_with_target(target: f64) -> PlanningRequest {
    PlanningRequest::new(target)
        .with_completed(CompletedCourse::new("已修课程", 130.0, 87.0))
        .with_planned(PlannedCourse::new("数据结构", 3.0, 70.0, 95.0, 0.8))
        .with_planned(PlannedCourse::new("Web开发", 2.5, 80.0, 98.0, 0.3))
}

/// Target above the best attainable average (87.5).
pub fn unreachable_plan() -> PlanningRequest {
    PlanningRequest::new(90.0)
        .with_completed(CompletedCourse::new("Algebra", 2.0, 80.0))
        .with_planned(PlannedCourse::new("Geometry", 2.0, 70.0, 95.0, 0.5))
}

/// A planned course whose minimum exceeds its maximum.
pub fn inverted_range() -> PlanningRequest {
    PlanningRequest::new(80.0)
        .with_completed(CompletedCourse::new("Algebra", 2.0, 80.0))
        .with_planned(PlannedCourse::new("Inverted", 2.0, 90.0, 70.0, 0.5))
}

/// Completed courses only; target equals their average (85).
pub fn completed_only() -> PlanningRequest {
    PlanningRequest::new(85.0)
        .with_completed(CompletedCourse::new("Calculus", 3.0, 80.0))
        .with_completed(CompletedCourse::new("Physics", 3.0, 90.0))
}

/// Three planned courses with distinct costs per credit.
pub fn three_way_plan(target: f64) -> PlanningRequest {
    PlanningRequest::new(target)
        .with_completed(CompletedCourse::new("Intro", 4.0, 78.0))
        .with_planned(PlannedCourse::new("Ethics", 2.0, 75.0, 95.0, 0.2))
        .with_planned(PlannedCourse::new("Compilers", 4.0, 60.0, 85.0, 0.9))
        .with_planned(PlannedCourse::new("Statistics", 3.0, 65.0, 92.0, 0.5))
}
