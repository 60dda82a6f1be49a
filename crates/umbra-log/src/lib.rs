//! Logging setup for Umbra binaries.
//!
//! Library crates only emit `tracing` events; this crate installs the
//! subscriber. Console output carries uptime, target, and level. Debug builds
//! can also write JSON lines to a file.

use std::path::{Path, PathBuf};

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};
use umbra_config::Config;

/// Filter used when neither `RUST_LOG` nor the config names one.
pub const DEFAULT_FILTER: &str = "info";

/// Name of the JSON log file inside the log directory.
pub const LOG_FILE_NAME: &str = "umbra.log";

/// Filter directives from the config's log level, falling back to [`DEFAULT_FILTER`].
pub fn filter_directives(config: Option<&Config>) -> String {
    config
        .map(|c| c.debug.log_level.trim())
        .filter(|level| !level.is_empty())
        .unwrap_or(DEFAULT_FILTER)
        .to_string()
}

/// Path of the JSON log file, if file logging applies.
pub fn log_file_path(log_dir: Option<&Path>, debug_build: bool, config: Option<&Config>) -> Option<PathBuf> {
    if !debug_build || config.is_some_and(|c| !c.debug.file_logging) {
        return None;
    }
    log_dir.map(|dir| dir.join(LOG_FILE_NAME))
}

/// Install the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over the config's `debug.log_level`. In debug
/// builds with a `log_dir`, events are also written as JSON to
/// `log_dir/umbra.log`. Calling this twice panics, as with any global
/// subscriber.
///
/// ```no_run
/// use umbra_config::Config;
/// use umbra_log::init_logging;
///
/// let config = Config::default();
/// init_logging(Some(std::path::Path::new("./logs")), cfg!(debug_assertions), Some(&config));
/// ```
pub fn init_logging(log_dir: Option<&Path>, debug_build: bool, config: Option<&Config>) {
    let directives = filter_directives(config);
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&directives));

    let console_layer = fmt::layer()
        .with_target(true)
        .with_level(true)
        .with_timer(fmt::time::uptime());

    let subscriber = tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer);

    if let Some(path) = log_file_path(log_dir, debug_build, config)
        && let Some(dir) = path.parent()
        && std::fs::create_dir_all(dir).is_ok()
        && let Ok(log_file) = std::fs::File::create(&path)
    {
        let file_layer = fmt::layer()
            .with_writer(log_file)
            .with_ansi(false)
            .with_target(true)
            .with_timer(fmt::time::uptime())
            .json();

        subscriber.with(file_layer).init();
        tracing::debug!("Writing JSON logs to {}", path.display());
        return;
    }

    subscriber.init();
}

/// An `EnvFilter` built from [`DEFAULT_FILTER`].
pub fn default_env_filter() -> EnvFilter {
    EnvFilter::new(DEFAULT_FILTER)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter() {
        assert!(format!("{}", default_env_filter()).contains("info"));
    }

    #[test]
    fn test_directives_from_config() {
        let mut config = Config::default();
        config.debug.log_level = "debug,umbra_lighting=trace".to_string();
        assert_eq!(filter_directives(Some(&config)), "debug,umbra_lighting=trace");

        config.debug.log_level = "  ".to_string();
        assert_eq!(filter_directives(Some(&config)), "info");
        assert_eq!(filter_directives(None), "info");
    }

    #[test]
    fn test_subsystem_filters_parse() {
        for filter in ["info", "warn,umbra_lighting=debug", "error,umbra_walls=trace"] {
            assert!(EnvFilter::try_new(filter).is_ok(), "Failed to parse filter: {filter}");
        }
    }

    #[test]
    fn test_file_logging_only_in_debug_builds() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(log_file_path(Some(dir.path()), false, None), None);
        assert_eq!(log_file_path(None, true, None), None);
        assert_eq!(
            log_file_path(Some(dir.path()), true, None),
            Some(dir.path().join("umbra.log"))
        );

        let mut config = Config::default();
        config.debug.file_logging = false;
        assert_eq!(log_file_path(Some(dir.path()), true, Some(&config)), None);
    }

    #[test]
    fn test_json_layer_writes_parseable_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(LOG_FILE_NAME);
        let file = std::fs::File::create(&path).unwrap();

        let subscriber = tracing_subscriber::registry().with(
            fmt::layer()
                .with_writer(std::sync::Mutex::new(file))
                .with_ansi(false)
                .json(),
        );
        tracing::subscriber::with_default(subscriber, || {
            tracing::info!(tiles = 42, "Lighting pass done");
        });

        let contents = std::fs::read_to_string(&path).unwrap();
        let line = contents.lines().next().unwrap();
        let value: serde_json::Value = serde_json::from_str(line).unwrap();
        assert_eq!(value["level"], "INFO");
        assert_eq!(value["fields"]["tiles"], 42);
    }
}
