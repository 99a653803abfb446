//! Planning entry point that hides the analyze/allocate wiring.

use std::io::ErrorKind;
use std::path::Path;

use gradeplan_config::{ConfigError, PlannerConfig};
use gradeplan_core::{AllocationResult, PlanningRequest, Result};
use gradeplan_solver::{allocate, analyze};
use tracing::{debug, warn};

/// Config file picked up by [`plan`] from the working directory.
pub const CONFIG_FILE: &str = "gradeplan.toml";

/// Plans target scores using `gradeplan.toml` when present, defaults
/// otherwise.
pub fn plan(request: &PlanningRequest) -> Result<AllocationResult> {
    let config = load_config_or_default(CONFIG_FILE);
    plan_with_config(request, &config)
}

/// Loads `path`, falling back to defaults.
///
/// A missing file is silent; any other load failure is logged before
/// falling back.
pub(crate) fn load_config_or_default(path: impl AsRef<Path>) -> PlannerConfig {
    let path = path.as_ref();
    match PlannerConfig::load(path) {
        Ok(config) => config,
        Err(ConfigError::Io(err)) if err.kind() == ErrorKind::NotFound => PlannerConfig::default(),
        Err(err) => {
            warn!(
                event = "config_ignored",
                path = %path.display(),
                error = %err,
                "falling back to default planner config"
            );
            PlannerConfig::default()
        }
    }
}

/// Runs feasibility analysis then allocation with an explicit config.
pub fn plan_with_config(
    request: &PlanningRequest,
    config: &PlannerConfig,
) -> Result<AllocationResult> {
    debug!(
        event = "plan_start",
        completed_count = request.completed.len() as u64,
        planned_count = request.planned.len() as u64,
        target_average = request.target_average,
    );
    let verdict = analyze(request, config)?;
    allocate(request, &verdict, config)
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use tracing::{Event, Level, Subscriber};
    use tracing_subscriber::layer::{Context, SubscriberExt};
    use tracing_subscriber::Layer;

    use super::*;

    /// Counts WARN events.
    #[derive(Clone, Default)]
    struct WarnCounter(Arc<AtomicUsize>);

    impl<S: Subscriber> Layer<S> for WarnCounter {
        fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
            if *event.metadata().level() == Level::WARN {
                self.0.fetch_add(1, Ordering::SeqCst);
            }
        }
    }

    fn count_warnings(path: &Path) -> (PlannerConfig, usize) {
        let counter = WarnCounter::default();
        let subscriber = tracing_subscriber::registry().with(counter.clone());
        let config = tracing::subscriber::with_default(subscriber, || load_config_or_default(path));
        (config, counter.0.load(Ordering::SeqCst))
    }

    #[test]
    fn test_missing_config_uses_defaults() {
        let (config, warnings) = count_warnings(Path::new("no/such/dir/gradeplan.toml"));
        assert_eq!(config, PlannerConfig::default());
        assert_eq!(warnings, 0);
    }

    #[test]
    fn test_invalid_config_falls_back_to_defaults() {
        let path = std::env::temp_dir().join(format!(
            "gradeplan-invalid-{}.toml",
            std::process::id()
        ));
        std::fs::write(&path, "tolerance = -1.0\n").unwrap();

        let (config, warnings) = count_warnings(&path);
        let _ = std::fs::remove_file(&path);
        assert_eq!(config, PlannerConfig::default());
        assert_eq!(warnings, 1);
    }
}
