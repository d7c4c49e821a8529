//! Search state and the configuration odometer.
//!
//! A configuration is one cursor per trip, each indexing into that trip's
//! options. Advancing treats the cursors as a mixed-radix counter over trips
//! in declaration order: the last trip turns fastest and carries into the
//! one before it. Starting from all zeros, every combination is visited
//! exactly once before the counter wraps back to all zeros.

use crate::domain::{Role, TripIndex, Trips};

/// Mutable state of one search: the current configuration and the seat
/// occupancy it implies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchState {
    cursors: Vec<usize>,
    occupied: Vec<i64>,
}

impl SearchState {
    /// Start at the all-zero configuration (every trip on its first option).
    pub fn new(trips: &Trips) -> Self {
        Self {
            cursors: vec![0; trips.len()],
            occupied: vec![0; trips.len()],
        }
    }

    /// Rebuild a state at the given configuration, with occupancy computed.
    ///
    /// # Panics
    ///
    /// Panics if `cursors` does not hold one in-range cursor per trip.
    pub fn from_cursors(trips: &Trips, cursors: &[usize]) -> Self {
        assert_eq!(cursors.len(), trips.len(), "one cursor per trip");
        for (trip, &cursor) in trips.iter().zip(cursors) {
            assert!(cursor < trip.options().len(), "cursor out of range for trip {}", trip.id());
        }
        let mut state = Self {
            cursors: cursors.to_vec(),
            occupied: vec![0; trips.len()],
        };
        state.recompute_occupancy(trips);
        state
    }

    /// The current cursor of every trip, in declaration order.
    pub fn cursors(&self) -> &[usize] {
        &self.cursors
    }

    /// The role trip `index` plays in the current configuration.
    pub fn role(&self, trips: &Trips, index: TripIndex) -> Role {
        trips[index].options()[self.cursors[index.0]]
    }

    /// Seats currently taken in trip `index`'s vehicle.
    pub fn occupied(&self, index: TripIndex) -> i64 {
        self.occupied[index.0]
    }

    /// Move to the next configuration.
    ///
    /// Returns false once every configuration has been visited; the cursors
    /// are then all zero again.
    pub fn advance(&mut self, trips: &Trips) -> bool {
        for (cursor, trip) in self.cursors.iter_mut().zip(trips.iter()).rev() {
            if *cursor + 1 < trip.options().len() {
                *cursor += 1;
                return true;
            }
            *cursor = 0;
        }
        false
    }

    /// Recount every driver's occupied seats from the current ride roles.
    pub fn recompute_occupancy(&mut self, trips: &Trips) {
        self.occupied.iter_mut().for_each(|seats| *seats = 0);
        for (trip, &cursor) in trips.iter().zip(&self.cursors) {
            if let Role::RideWith(driver) = trip.options()[cursor] {
                self.occupied[driver.0] += i64::from(trip.passenger_count());
            }
        }
    }
}
