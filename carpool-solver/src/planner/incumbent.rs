//! Benefit scoring and the best configuration seen so far.

use crate::domain::{Role, Trips};

use super::state::SearchState;

/// Total benefit of the current configuration.
///
/// Only riders contribute. Benefits are summed in declaration order from
/// `+0.0`, so the same configuration always produces the same total.
pub fn score(trips: &Trips, state: &SearchState) -> f64 {
    trips
        .iter()
        .zip(state.cursors())
        .filter(|(trip, cursor)| matches!(trip.options()[**cursor], Role::RideWith(_)))
        .fold(0.0, |total, (trip, _)| total + trip.benefit())
}

/// The best feasible configuration found during a search.
///
/// Starts empty, which ranks below every achievable score, so the first
/// feasible configuration always becomes the incumbent.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Incumbent {
    benefit: Option<f64>,
    cursors: Vec<usize>,
}

impl Incumbent {
    /// Create an empty incumbent.
    pub fn new() -> Self {
        Self::default()
    }

    /// Offer a feasible configuration with the given score.
    ///
    /// The configuration is installed only if it strictly beats the current
    /// best; ties keep the earlier configuration. Returns whether it was
    /// installed.
    pub fn offer(&mut self, score: f64, state: &SearchState) -> bool {
        let improves = match self.benefit {
            None => true,
            Some(best) => score > best,
        };
        if improves {
            self.benefit = Some(score);
            self.cursors.clear();
            self.cursors.extend_from_slice(state.cursors());
        }
        improves
    }

    /// Benefit of the incumbent, if one was installed.
    pub fn benefit(&self) -> Option<f64> {
        self.benefit
    }

    /// Cursors of the incumbent configuration, empty if none was installed.
    pub fn cursors(&self) -> &[usize] {
        &self.cursors
    }

    /// Returns true until the first configuration is installed.
    pub fn is_empty(&self) -> bool {
        self.benefit.is_none()
    }
}
