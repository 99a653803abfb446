//! Credit-weighted sums and averages.

/// Running credit-weighted total of a set of scores.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct WeightedTotal {
    /// Sum of credits.
    pub credits: f64,
    /// Sum of `credits * score`.
    pub weighted_sum: f64,
}

impl WeightedTotal {
    pub const ZERO: WeightedTotal = WeightedTotal {
        credits: 0.0,
        weighted_sum: 0.0,
    };

    /// Adds one course's contribution.
    #[inline]
    pub fn add(self, credits: f64, score: f64) -> Self {
        WeightedTotal {
            credits: self.credits + credits,
            weighted_sum: self.weighted_sum + credits * score,
        }
    }

    /// Returns the weighted average, or `None` when no credits were added.
    pub fn average(&self) -> Option<f64> {
        if self.credits > 0.0 {
            Some(self.weighted_sum / self.credits)
        } else {
            None
        }
    }
}

impl FromIterator<(f64, f64)> for WeightedTotal {
    fn from_iter<I: IntoIterator<Item = (f64, f64)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(WeightedTotal::ZERO, |acc, (credits, score)| acc.add(credits, score))
    }
}

/// Computes the weighted average of `(credits, score)` pairs.
///
/// # Examples
///
/// ```
/// use gradeplan_core::weighted_average;
///
/// let avg = weighted_average([(3.0, 90.0), (1.0, 70.0)]);
/// assert_eq!(avg, Some(85.0));
/// assert_eq!(weighted_average(std::iter::empty()), None);
/// ```
pub fn weighted_average<I>(pairs: I) -> Option<f64>
where
    I: IntoIterator<Item = (f64, f64)>,
{
    pairs.into_iter().collect::<WeightedTotal>().average()
}
