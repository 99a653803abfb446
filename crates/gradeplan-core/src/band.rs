//! Difficulty bands for labeling planned courses.

use std::fmt;

/// Coarse difficulty label derived from a course's difficulty coefficient.
///
/// Bands only drive suggestion grouping. The allocation objective always
/// uses the raw coefficient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum DifficultyBand {
    /// `[0, medium_from)`
    Easy,
    /// `[medium_from, hard_from)`
    Medium,
    /// `[hard_from, 1]`
    Hard,
}

impl DifficultyBand {
    /// All bands, easiest first.
    pub const ALL: [DifficultyBand; 3] = [
        DifficultyBand::Easy,
        DifficultyBand::Medium,
        DifficultyBand::Hard,
    ];

    /// Classifies a difficulty using the default thresholds (0.3 / 0.7).
    pub fn of(difficulty: f64) -> Self {
        BandThresholds::default().classify(difficulty)
    }
}

impl fmt::Display for DifficultyBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            DifficultyBand::Easy => "easy",
            DifficultyBand::Medium => "medium",
            DifficultyBand::Hard => "hard",
        };
        f.write_str(label)
    }
}

/// Lower bounds of the medium and hard bands.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "snake_case"))]
pub struct BandThresholds {
    pub medium_from: f64,
    pub hard_from: f64,
}

impl Default for BandThresholds {
    fn default() -> Self {
        BandThresholds {
            medium_from: 0.3,
            hard_from: 0.7,
        }
    }
}

impl BandThresholds {
    pub fn classify(&self, difficulty: f64) -> DifficultyBand {
        if difficulty < self.medium_from {
            DifficultyBand::Easy
        } else if difficulty < self.hard_from {
            DifficultyBand::Medium
        } else {
            DifficultyBand::Hard
        }
    }

    /// Thresholds are usable when `0 <= medium_from <= hard_from <= 1`.
    pub fn is_ordered(&self) -> bool {
        (0.0..=1.0).contains(&self.medium_from)
            && (0.0..=1.0).contains(&self.hard_from)
            && self.medium_from <= self.hard_from
    }
}
