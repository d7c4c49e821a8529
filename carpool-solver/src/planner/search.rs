//! Exhaustive search over every joint role configuration.
//!
//! The loop walks the odometer from the all-zero configuration to
//! exhaustion. For each configuration it recounts seat occupancy, checks
//! feasibility, scores feasible configurations against the incumbent, and
//! then advances. Nothing is pruned: the cost is the product of every
//! trip's option count, exponential in the number of trips.

use std::time::Instant;

use crate::domain::Trips;

use super::config::SearchConfig;
use super::extract::{Assignment, extract};
use super::incumbent::{Incumbent, score};
use super::monitor::{LogMonitor, SearchMonitor};
use super::state::SearchState;
use super::stats::SearchStats;
use super::validate::is_valid;

/// Result of a search.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// The best assignment found.
    pub assignment: Assignment,

    /// Cursors of the reported configuration; empty if nothing was feasible.
    pub best_cursors: Vec<usize>,

    /// Counters collected during the search.
    pub stats: SearchStats,
}

/// Exhaustive planner over a fixed trip set.
pub struct Planner<'a> {
    trips: &'a Trips,
    config: &'a SearchConfig,
}

impl<'a> Planner<'a> {
    /// Create a new planner.
    pub fn new(trips: &'a Trips, config: &'a SearchConfig) -> Self {
        Self { trips, config }
    }

    /// Search with progress reported through `tracing`.
    pub fn search(&self) -> SearchResult {
        let mut monitor = LogMonitor::new(self.config);
        self.search_with(&mut monitor)
    }

    /// Search, reporting every event to `monitor`.
    pub fn search_with<M: SearchMonitor>(&self, monitor: &mut M) -> SearchResult {
        let trips = self.trips;
        let started = Instant::now();
        let mut stats = SearchStats::default();
        let mut state = SearchState::new(trips);
        let mut incumbent = Incumbent::new();

        monitor.on_start(trips.len(), trips.search_space_size());

        loop {
            state.recompute_occupancy(trips);
            stats.configurations += 1;

            let valid = is_valid(trips, &state);
            if valid {
                stats.valid_configurations += 1;
                let benefit = score(trips, &state);
                if incumbent.offer(benefit, &state) {
                    stats.improvements += 1;
                    monitor.on_incumbent(benefit, state.cursors(), &stats);
                }
            }
            monitor.on_configuration(state.cursors(), valid, &stats);

            if !state.advance(trips) {
                break;
            }
        }

        stats.elapsed = started.elapsed();
        monitor.on_finish(&stats);

        SearchResult {
            assignment: extract(trips, &incumbent),
            best_cursors: incumbent.cursors().to_vec(),
            stats,
        }
    }
}
