//! Completed and planned course records.

use crate::error::{GradePlanError, Result};

/// Lowest representable score.
pub const MIN_SCORE: f64 = 0.0;

/// Highest representable score.
pub const MAX_SCORE: f64 = 100.0;

/// A course that already has a final score.
///
/// Completed courses are locked: they contribute a fixed
/// `credits * score` term to the weighted sum.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CompletedCourse {
    pub name: String,
    pub credits: f64,
    pub score: f64,
}

impl CompletedCourse {
    pub fn new(name: impl Into<String>, credits: f64, score: f64) -> Self {
        Self {
            name: name.into(),
            credits,
            score,
        }
    }

    /// Returns `credits * score`.
    #[inline]
    pub fn weighted_score(&self) -> f64 {
        self.credits * self.score
    }

    /// Checks credits and score ranges.
    pub fn validate(&self) -> Result<()> {
        check_credits("completed", &self.name, self.credits)?;
        check_score("completed", &self.name, "score", self.score)
    }
}

/// A course still to be taken, with the score range the student expects
/// to land in and how hard each extra point feels.
///
/// # Examples
///
/// ```
/// use gradeplan_core::{DifficultyBand, PlannedCourse};
///
/// let course = PlannedCourse::new("Compilers", 4.0, 60.0, 90.0, 0.8);
/// assert_eq!(course.headroom(), 30.0);
/// assert_eq!(course.cost_per_unit(), 0.2);
/// assert_eq!(course.band(), DifficultyBand::Hard);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlannedCourse {
    pub name: String,
    pub credits: f64,
    pub min_score: f64,
    pub max_score: f64,
    /// Effort per point, in `[0, 1]`.
    pub difficulty: f64,
}

impl PlannedCourse {
    pub fn new(
        name: impl Into<String>,
        credits: f64,
        min_score: f64,
        max_score: f64,
        difficulty: f64,
    ) -> Self {
        Self {
            name: name.into(),
            credits,
            min_score,
            max_score,
            difficulty,
        }
    }

    /// Width of the attainable score range.
    #[inline]
    pub fn headroom(&self) -> f64 {
        self.max_score - self.min_score
    }

    /// Effort needed to add one credit-weighted point to the weighted sum.
    #[inline]
    pub fn cost_per_unit(&self) -> f64 {
        self.difficulty / self.credits
    }

    /// Difficulty band under the default thresholds.
    pub fn band(&self) -> crate::band::DifficultyBand {
        crate::band::DifficultyBand::of(self.difficulty)
    }

    /// Effort spent when the course is targeted at `score`.
    #[inline]
    pub fn effort_at(&self, score: f64) -> f64 {
        self.difficulty * (score - self.min_score)
    }

    /// Checks credits, score bounds, range ordering and difficulty.
    pub fn validate(&self) -> Result<()> {
        check_credits("planned", &self.name, self.credits)?;
        check_score("planned", &self.name, "min_score", self.min_score)?;
        check_score("planned", &self.name, "max_score", self.max_score)?;
        if self.min_score > self.max_score {
            return Err(GradePlanError::invalid(format!(
                "planned course '{}': min_score {} exceeds max_score {}",
                self.name, self.min_score, self.max_score
            )));
        }
        if !self.difficulty.is_finite() || !(0.0..=1.0).contains(&self.difficulty) {
            return Err(GradePlanError::invalid(format!(
                "planned course '{}': difficulty {} must be within [0, 1]",
                self.name, self.difficulty
            )));
        }
        Ok(())
    }
}

fn check_credits(kind: &str, name: &str, credits: f64) -> Result<()> {
    if credits.is_finite() && credits > 0.0 {
        Ok(())
    } else {
        Err(GradePlanError::invalid(format!(
            "{kind} course '{name}': credits must be positive, got {credits}"
        )))
    }
}

fn check_score(kind: &str, name: &str, field: &str, score: f64) -> Result<()> {
    if score.is_finite() && (MIN_SCORE..=MAX_SCORE).contains(&score) {
        Ok(())
    } else {
        Err(GradePlanError::invalid(format!(
            "{kind} course '{name}': {field} {score} must be within [{MIN_SCORE}, {MAX_SCORE}]"
        )))
    }
}
