//! Search configuration for the planner.

/// Configuration parameters for the exhaustive search.
///
/// These only tune logging. The search always visits every configuration and
/// reports the same answer whatever the values.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// How many configurations pass between progress log lines.
    pub progress_interval: u64,

    /// Search spaces larger than this are logged as a warning before starting.
    pub large_search_warning: u128,
}

impl SearchConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(progress_interval: u64, large_search_warning: u128) -> Self {
        Self {
            progress_interval,
            large_search_warning,
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            progress_interval: 1_000_000,
            large_search_warning: 10_000_000,
        }
    }
}
