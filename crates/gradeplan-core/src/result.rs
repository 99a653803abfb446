//! Allocation results and the hints attached to them.

use std::collections::BTreeMap;
use std::fmt;

use crate::band::DifficultyBand;

/// Target score chosen for one planned course.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CourseTarget {
    pub name: String,
    pub score: f64,
    pub band: DifficultyBand,
    /// `difficulty * (score - min_score)`
    pub effort: f64,
}

/// Outcome of a planning run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AllocationResult {
    /// One entry per planned course, in request order.
    pub targets: Vec<CourseTarget>,
    pub achieved_average: f64,
    pub feasible: bool,
    /// Sum of per-course effort.
    pub total_effort: f64,
    pub suggestions: Vec<Suggestion>,
}

impl AllocationResult {
    /// Looks up the target score of a planned course by name.
    pub fn target_for(&self, name: &str) -> Option<f64> {
        self.targets.iter().find(|t| t.name == name).map(|t| t.score)
    }

    /// Course name to target score.
    pub fn score_map(&self) -> BTreeMap<String, f64> {
        self.targets
            .iter()
            .map(|t| (t.name.clone(), t.score))
            .collect()
    }

    /// Suggestions rendered as display strings.
    pub fn suggestion_messages(&self) -> Vec<String> {
        self.suggestions.iter().map(ToString::to_string).collect()
    }
}

/// A human-readable adjustment hint.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum Suggestion {
    /// Targets of one difficulty band.
    FocusBand {
        band: DifficultyBand,
        courses: Vec<(String, f64)>,
    },
    /// Every planned course at its minimum already meets the target.
    MinimumsSuffice { average: f64 },
    /// Even maximum scores everywhere fall short of the target.
    TargetUnreachable { best_average: f64, gap: f64 },
    /// Raising this course's ceiling would recover part or all of the gap.
    RaiseMaximum {
        course: String,
        current_max: f64,
        proposed_max: f64,
        closes_gap: bool,
    },
    /// Extra high-scoring credits that would close the gap.
    AddCourses { credits: f64, at_score: f64 },
    /// Settle for the best attainable average.
    LowerTarget { to: f64 },
    /// Minimum scores already exceed the target.
    TargetBelowMinimum { min_average: f64 },
    /// Aim for what minimum effort already yields.
    RaiseTarget { to: f64 },
}

impl fmt::Display for Suggestion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Suggestion::FocusBand { band, courses } => {
                let heading = match band {
                    DifficultyBand::Easy => "Easy courses (earn your points here)",
                    DifficultyBand::Medium => "Medium courses",
                    DifficultyBand::Hard => "Hard courses (securing the target is enough)",
                };
                write!(f, "{heading}:")?;
                for (name, score) in courses {
                    write!(f, " {name} -> {score:.1};")?;
                }
                Ok(())
            }
            Suggestion::MinimumsSuffice { average } => write!(
                f,
                "Minimum scores already give {average:.2}; a normal study pace is enough"
            ),
            Suggestion::TargetUnreachable { best_average, gap } => write!(
                f,
                "Even top scores in every planned course only reach {best_average:.2}, {gap:.2} short of the target"
            ),
            Suggestion::RaiseMaximum {
                course,
                current_max,
                proposed_max,
                closes_gap,
            } => {
                if *closes_gap {
                    write!(
                        f,
                        "Raise the ceiling of '{course}' from {current_max:.1} to {proposed_max:.1} to close the gap on its own (more study effort than estimated)"
                    )
                } else {
                    write!(
                        f,
                        "Raise the ceiling of '{course}' from {current_max:.1} to {proposed_max:.1} to narrow the gap (more study effort than estimated)"
                    )
                }
            }
            Suggestion::AddCourses { credits, at_score } => write!(
                f,
                "Add about {credits:.1} credits of courses expected to score {at_score:.0} or more"
            ),
            Suggestion::LowerTarget { to } => {
                write!(f, "Lower the target average to {to:.2}")
            }
            Suggestion::TargetBelowMinimum { min_average } => write!(
                f,
                "Minimum scores already give {min_average:.2}, above the target"
            ),
            Suggestion::RaiseTarget { to } => {
                write!(f, "Raise the target average to {to:.2}")
            }
        }
    }
}
