//! Observing a running search.
//!
//! The planner reports its lifecycle to a `SearchMonitor`: start, every
//! visited configuration, every incumbent improvement, and finish. Monitors
//! only observe; they cannot stop or steer the enumeration. Callbacks run
//! on the search thread for every configuration, so keep them cheap.

use tracing::{debug, info, warn};

use super::config::SearchConfig;
use super::stats::SearchStats;

/// Hooks invoked by the planner. Every method defaults to doing nothing.
pub trait SearchMonitor {
    /// Called once before the first configuration.
    ///
    /// `search_space` is the number of configurations that will be visited,
    /// or `None` if it does not fit in a `u128`.
    fn on_start(&mut self, _trips: usize, _search_space: Option<u128>) {}

    /// Called after each configuration has been validated (and scored, if valid).
    fn on_configuration(&mut self, _cursors: &[usize], _valid: bool, _stats: &SearchStats) {}

    /// Called when a configuration replaces the incumbent.
    fn on_incumbent(&mut self, _benefit: f64, _cursors: &[usize], _stats: &SearchStats) {}

    /// Called once after enumeration is exhausted.
    fn on_finish(&mut self, _stats: &SearchStats) {}
}

/// A monitor that ignores every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpMonitor;

impl SearchMonitor for NoOpMonitor {}

/// A monitor that reports progress through `tracing`.
#[derive(Debug, Clone)]
pub struct LogMonitor {
    progress_interval: u64,
    large_search_warning: u128,
    search_space: Option<u128>,
}

impl LogMonitor {
    /// Create a log monitor using the thresholds from `config`.
    pub fn new(config: &SearchConfig) -> Self {
        Self {
            progress_interval: config.progress_interval,
            large_search_warning: config.large_search_warning,
            search_space: None,
        }
    }
}

impl SearchMonitor for LogMonitor {
    fn on_start(&mut self, trips: usize, search_space: Option<u128>) {
        self.search_space = search_space;
        match search_space {
            Some(size) if size > self.large_search_warning => {
                warn!(
                    trips,
                    configurations = %size,
                    "search space is large; exhaustive search may take a long time"
                );
            }
            Some(size) => info!(trips, configurations = %size, "starting exhaustive search"),
            None => warn!(
                trips,
                "search space overflows u128; exhaustive search will not finish in practice"
            ),
        }
    }

    fn on_configuration(&mut self, _cursors: &[usize], _valid: bool, stats: &SearchStats) {
        if self.progress_interval > 0 && stats.configurations % self.progress_interval == 0 {
            info!(
                visited = stats.configurations,
                total = ?self.search_space,
                valid = stats.valid_configurations,
                "search progress"
            );
        }
    }

    fn on_incumbent(&mut self, benefit: f64, cursors: &[usize], stats: &SearchStats) {
        debug!(benefit, ?cursors, visited = stats.configurations, "new incumbent");
    }

    fn on_finish(&mut self, stats: &SearchStats) {
        info!(
            configurations = stats.configurations,
            valid = stats.valid_configurations,
            improvements = stats.improvements,
            elapsed_ms = stats.elapsed.as_millis() as u64,
            "search finished"
        );
    }
}
