//! Brute-force reference search over a score grid.
//!
//! Used to spot-check allocation optimality on requests with at most three
//! planned courses.

use gradeplan_core::PlanningRequest;

/// Grid resolution and equality slack.
#[derive(Debug, Clone, Copy)]
pub struct GridSearch {
    pub step: f64,
    pub tolerance: f64,
}

impl Default for GridSearch {
    fn default() -> Self {
        Self {
            step: 0.25,
            tolerance: 1e-6,
        }
    }
}

/// Returns the lowest effort found on the grid, or `None` when no grid
/// point meets the target.
///
/// All but the last planned course are enumerated on the grid; the last one
/// is solved from the equality and kept when it lands inside its range.
///
/// # Panics
///
/// Panics when the request has no planned courses or more than three.
pub fn grid_min_effort(request: &PlanningRequest, search: GridSearch) -> Option<f64> {
    let planned = &request.planned;
    assert!(
        (1..=3).contains(&planned.len()),
        "grid search supports one to three planned courses"
    );

    let completed = request.completed_total();
    let total = completed.credits + request.planned_credits();
    let required = request.target_average * total - completed.weighted_sum;

    let (free, last) = planned.split_at(planned.len() - 1);
    let last = &last[0];
    let axes: Vec<Vec<f64>> = free
        .iter()
        .map(|c| axis(c.min_score, c.max_score, search.step))
        .collect();

    let mut best: Option<f64> = None;
    let mut point = vec![0.0; free.len()];
    visit(&axes, 0, &mut point, &mut |xs: &[f64]| {
        let partial: f64 = free.iter().zip(xs).map(|(c, x)| c.credits * x).sum();
        let x_last = (required - partial) / last.credits;
        if x_last < last.min_score - search.tolerance || x_last > last.max_score + search.tolerance {
            return;
        }
        let effort: f64 = free
            .iter()
            .zip(xs)
            .map(|(c, &x)| c.effort_at(x))
            .sum::<f64>()
            + last.effort_at(x_last);
        best = Some(best.map_or(effort, |b| b.min(effort)));
    });
    best
}

fn axis(min: f64, max: f64, step: f64) -> Vec<f64> {
    let mut values = Vec::new();
    let mut x = min;
    while x < max {
        values.push(x);
        x += step;
    }
    values.push(max);
    values
}

fn visit(axes: &[Vec<f64>], depth: usize, point: &mut [f64], f: &mut dyn FnMut(&[f64])) {
    if depth == axes.len() {
        f(point);
        return;
    }
    for &x in &axes[depth] {
        point[depth] = x;
        visit(axes, depth + 1, point, f);
    }
}
