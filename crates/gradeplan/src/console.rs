//! Colorful console output for planner events.
//!
//! Provides a custom `tracing` layer that formats analyzer and allocator
//! events with colors. Enabled with the `console` feature.

use std::io::{self, Write};
use std::sync::OnceLock;

use owo_colors::OwoColorize;
use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: OnceLock<()> = OnceLock::new();

/// Default filter when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "gradeplan_solver=info";

/// Initializes the planner console output.
///
/// Safe to call multiple times - only the first call has effect. Does
/// nothing if another global subscriber is already installed.
pub fn init() {
    INIT.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(PlannerConsoleLayer)
            .try_init();
    });
}

/// A tracing layer that formats planner events with colors.
pub struct PlannerConsoleLayer;

impl<S: Subscriber> Layer<S> for PlannerConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        if !event.metadata().target().starts_with("gradeplan") {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let output = format_planner_event(&visitor);
        if !output.is_empty() {
            let _ = writeln!(io::stdout(), "{}", output);
        }
    }
}

#[derive(Debug, Default)]
struct EventVisitor {
    event: Option<String>,
    message: Option<String>,
    course: Option<String>,
    feasible: Option<bool>,
    target_average: Option<f64>,
    min_average: Option<f64>,
    max_average: Option<f64>,
    shortfall: Option<f64>,
    surplus: Option<f64>,
    achieved_average: Option<f64>,
    total_effort: Option<f64>,
    score: Option<f64>,
    residual: Option<f64>,
    planned_count: Option<u64>,
    suggestion_count: Option<u64>,
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let s = format!("{:?}", value);
        self.record_str(field, s.trim_matches('"'));
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        match field.name() {
            "event" => self.event = Some(value.to_string()),
            "message" => self.message = Some(value.to_string()),
            "course" => self.course = Some(value.to_string()),
            _ => {}
        }
    }

    fn record_f64(&mut self, field: &Field, value: f64) {
        match field.name() {
            "target_average" => self.target_average = Some(value),
            "min_average" => self.min_average = Some(value),
            "max_average" => self.max_average = Some(value),
            "shortfall" => self.shortfall = Some(value),
            "surplus" => self.surplus = Some(value),
            "achieved_average" => self.achieved_average = Some(value),
            "total_effort" => self.total_effort = Some(value),
            "score" => self.score = Some(value),
            "residual" => self.residual = Some(value),
            _ => {}
        }
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        match field.name() {
            "planned_count" => self.planned_count = Some(value),
            "suggestion_count" => self.suggestion_count = Some(value),
            _ => {}
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.record_u64(field, value.max(0) as u64);
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        if field.name() == "feasible" {
            self.feasible = Some(value);
        }
    }
}

fn format_planner_event(v: &EventVisitor) -> String {
    match v.event.as_deref().unwrap_or("") {
        "analyze" => format_analyze(v),
        "infeasible" => format_infeasible(v),
        "raise" => format_raise(v),
        "allocate_end" => format_allocate_end(v),
        _ => String::new(),
    }
}

fn format_analyze(v: &EventVisitor) -> String {
    format!(
        "{} {} {} {} planned course(s), target ({}), attainable range ({} .. {})",
        timestamp().bright_black(),
        "INFO".bright_green(),
        "[Analyzer]".bright_cyan(),
        v.planned_count.unwrap_or(0).to_string().bright_yellow(),
        format_average(v.target_average).white().bold(),
        format_average(v.min_average).yellow(),
        format_average(v.max_average).yellow(),
    )
}

fn format_infeasible(v: &EventVisitor) -> String {
    let detail = match (v.shortfall, v.surplus) {
        (Some(s), _) if s > 0.0 => format!("short by {:.2}", s),
        (_, Some(s)) if s > 0.0 => format!("exceeded by {:.2} at minimum scores", s),
        _ => "outside the attainable range".to_string(),
    };
    format!(
        "{} {} {} target unreachable: {}",
        timestamp().bright_black(),
        "WARN".bright_yellow(),
        "[Analyzer]".bright_cyan(),
        detail.bright_red(),
    )
}

fn format_raise(v: &EventVisitor) -> String {
    format!(
        "    {} {:<20} -> {} | residual {}",
        "->".bright_blue(),
        v.course.as_deref().unwrap_or("?").white(),
        format_average(v.score).bright_green(),
        format!("{:.3}", v.residual.unwrap_or(0.0)).bright_black(),
    )
}

fn format_allocate_end(v: &EventVisitor) -> String {
    let feasible = v.feasible.unwrap_or(false);
    let status = if feasible {
        "FEASIBLE PLAN".bright_green().bold().to_string()
    } else {
        "BEST EFFORT (target not reachable)".bright_red().bold().to_string()
    };
    format!(
        "{} {} {} {}: achieved average ({}), effort ({}), suggestions ({})",
        timestamp().bright_black(),
        "INFO".bright_green(),
        "[Allocator]".bright_cyan(),
        status,
        format_average(v.achieved_average).bright_magenta(),
        format!("{:.3}", v.total_effort.unwrap_or(0.0)).yellow(),
        v.suggestion_count.unwrap_or(0).to_string().white(),
    )
}

fn format_average(value: Option<f64>) -> String {
    value.map_or_else(|| "N/A".to_string(), |v| format!("{:.2}", v))
}

fn timestamp() -> String {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| {
            let secs = d.as_secs() % 100000;
            let millis = d.subsec_millis();
            format!("{:5}.{:03}", secs, millis)
        })
        .unwrap_or_else(|_| "    0.000".to_string())
}
