//! Logging setup and helpers

use std::fmt::Debug;

use serde::Serialize;
use tracing_subscriber::EnvFilter;

/// Filter used by `--debug`.
pub const DEBUG_FILTER: &str = "formkit=debug";

/// Filter used when neither `--debug`, `RUST_LOG` nor `log_filter` is set.
pub const DEFAULT_FILTER: &str = "warn";

/// Wrapper for printing serializable values in logs as YAML.
///
/// ```ignore
/// debug!("state: {}", Pretty(&playground.get_state()));
/// ```
///
/// Falls back to `{:#?}` if YAML serialization fails.
pub struct Pretty<T>(pub T);

impl<T: Serialize + Debug> std::fmt::Display for Pretty<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match serde_yaml_ng::to_string(&self.0) {
            Ok(yaml) => write!(f, "\n{}", yaml),
            Err(_) => write!(f, "\n{:#?}", self.0),
        }
    }
}

impl<T: Serialize + Debug> std::fmt::Debug for Pretty<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(self, f)
    }
}

/// Choose the log filter: `--debug` wins, then `RUST_LOG`, then the
/// configured filter, then [`DEFAULT_FILTER`].
pub fn env_filter(debug: bool, configured: Option<&str>) -> EnvFilter {
    if debug {
        return EnvFilter::new(DEBUG_FILTER);
    }
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(configured.unwrap_or(DEFAULT_FILTER)))
}

/// Install the stderr subscriber. Safe to call more than once.
pub fn init_tracing(debug: bool, configured: Option<&str>) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(debug, configured))
        .with_target(false)
        .with_ansi(false)
        .with_writer(std::io::stderr)
        .try_init();
}
