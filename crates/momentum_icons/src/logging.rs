//! Structured logging setup for tools built on the icon table.
//!
//! Provides:
//! - Build-type conditional log levels
//! - Environment variable override via MOMENTUM_ICONS_LOG or RUST_LOG
//! - Output on stderr, so exported data on stdout stays clean

use tracing_subscriber::EnvFilter;

/// Logging configuration.
#[derive(Debug)]
pub struct LogConfig {
    /// Whether to emit ANSI colors
    pub ansi: bool,
    /// Optional custom log filter
    pub log_filter: Option<String>,
}

impl LogConfig {
    /// Create a new logging configuration.
    pub fn new() -> Self {
        Self { ansi: true, log_filter: None }
    }

    /// Set custom log filter.
    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = Some(filter.into());
        self
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Initialize logging with the given configuration.
///
/// Does nothing if a global subscriber is already installed.
pub fn init_logging(config: LogConfig) {
    let env_filter = build_env_filter(config.log_filter.as_deref());

    let result = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(env_filter)
        .with_ansi(config.ansi)
        .with_target(false)
        .with_thread_ids(false)
        .try_init();

    if let Err(e) = result {
        tracing::debug!(error = %e, "Logging already initialized");
    }
}

/// Build the environment filter from config or defaults.
fn build_env_filter(custom_filter: Option<&str>) -> EnvFilter {
    // Priority: custom filter > MOMENTUM_ICONS_LOG > RUST_LOG > default
    if let Some(filter) = custom_filter {
        return EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new(default_log_filter()));
    }

    EnvFilter::try_from_env("MOMENTUM_ICONS_LOG")
        .or_else(|_| EnvFilter::try_from_env("RUST_LOG"))
        .unwrap_or_else(|_| EnvFilter::new(default_log_filter()))
}

/// Get the default log filter based on build type.
pub fn default_log_filter() -> &'static str {
    #[cfg(debug_assertions)]
    {
        "debug,momentum_icons=trace,momentum_icons_catalog=trace"
    }
    #[cfg(not(debug_assertions))]
    {
        "warn,momentum_icons=info,momentum_icons_catalog=info"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_parses() {
        assert!(EnvFilter::try_new(default_log_filter()).is_ok());
    }

    #[test]
    fn test_custom_filter() {
        let filter = build_env_filter(Some("momentum_icons=warn"));
        assert!(filter.to_string().contains("momentum_icons=warn"));
    }

    #[test]
    fn test_init_twice_is_harmless() {
        init_logging(LogConfig::new().with_filter("off"));
        init_logging(LogConfig::new().with_filter("off"));
    }
}
