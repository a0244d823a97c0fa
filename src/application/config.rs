use std::path::PathBuf;
use std::time::Duration;

/// Runtime settings, assembled from command-line flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub tick_interval: Duration,
    pub seed: Option<u64>,
    pub log: LogConfig,
}

/// Where and how loudly to log.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogConfig {
    pub verbose: bool,
    pub file: Option<PathBuf>,
}

// --- Defaults ---

const DEFAULT_TICK_MS: u64 = 500;

const MIN_TICK_MS: u64 = 1;

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            tick_interval: Duration::from_millis(DEFAULT_TICK_MS),
            seed: None,
            log: LogConfig::default(),
        }
    }
}

impl AppConfig {
    /// Builds a config, falling back to defaults for anything not given.
    /// A zero tick period is clamped to 1 ms.
    #[must_use]
    pub fn new(tick_ms: Option<u64>, seed: Option<u64>, log: LogConfig) -> Self {
        let tick_ms = tick_ms.unwrap_or(DEFAULT_TICK_MS).max(MIN_TICK_MS);
        Self {
            tick_interval: Duration::from_millis(tick_ms),
            seed,
            log,
        }
    }
}
