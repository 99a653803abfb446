//! Planning request: everything one allocation run needs.

use std::collections::HashSet;

use crate::average::WeightedTotal;
use crate::course::{CompletedCourse, PlannedCourse};
use crate::error::{GradePlanError, Result};

/// Input of a planning run.
///
/// Built fresh by the caller for every run; nothing is cached between
/// runs.
///
/// # Examples
///
/// ```
/// use gradeplan_core::{CompletedCourse, PlannedCourse, PlanningRequest};
///
/// let request = PlanningRequest::new(85.0)
///     .with_completed(CompletedCourse::new("Calculus", 4.0, 82.0))
///     .with_planned(PlannedCourse::new("Databases", 3.0, 70.0, 95.0, 0.4));
///
/// assert_eq!(request.total_credits(), 7.0);
/// assert!(request.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlanningRequest {
    #[cfg_attr(feature = "serde", serde(default))]
    pub completed: Vec<CompletedCourse>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub planned: Vec<PlannedCourse>,
    pub target_average: f64,
}

impl PlanningRequest {
    /// Creates an empty request aiming at `target_average`.
    pub fn new(target_average: f64) -> Self {
        Self {
            completed: Vec::new(),
            planned: Vec::new(),
            target_average,
        }
    }

    pub fn with_completed(mut self, course: CompletedCourse) -> Self {
        self.completed.push(course);
        self
    }

    pub fn with_planned(mut self, course: PlannedCourse) -> Self {
        self.planned.push(course);
        self
    }

    pub fn with_target(mut self, target_average: f64) -> Self {
        self.target_average = target_average;
        self
    }

    /// Credit-weighted total of the completed courses.
    pub fn completed_total(&self) -> WeightedTotal {
        self.completed
            .iter()
            .map(|c| (c.credits, c.score))
            .collect()
    }

    pub fn planned_credits(&self) -> f64 {
        self.planned.iter().map(|c| c.credits).sum()
    }

    pub fn total_credits(&self) -> f64 {
        self.completed_total().credits + self.planned_credits()
    }

    /// Validates every course, the target and the credit total.
    ///
    /// The first problem found is reported; nothing is corrected.
    pub fn validate(&self) -> Result<()> {
        for course in &self.completed {
            course.validate()?;
        }

        let mut seen = HashSet::with_capacity(self.planned.len());
        for course in &self.planned {
            course.validate()?;
            if !seen.insert(course.name.as_str()) {
                return Err(GradePlanError::invalid(format!(
                    "planned course '{}' appears more than once",
                    course.name
                )));
            }
        }

        if !self.target_average.is_finite() {
            return Err(GradePlanError::invalid(format!(
                "target_average must be finite, got {}",
                self.target_average
            )));
        }

        let total = self.total_credits();
        if !total.is_finite() {
            return Err(GradePlanError::invalid(format!(
                "total credits overflow, got {total}"
            )));
        }
        if total <= 0.0 {
            return Err(GradePlanError::invalid(format!(
                "total credits must be positive, got {total}"
            )));
        }

        let completed_sum = self.completed_total().weighted_sum;
        let max_planned_sum: f64 = self.planned.iter().map(|c| c.credits * c.max_score).sum();
        if !completed_sum.is_finite() || !(completed_sum + max_planned_sum).is_finite() {
            return Err(GradePlanError::invalid(
                "credit-weighted score sum overflows; credits are too large",
            ));
        }
        Ok(())
    }
}
