//! Feasibility of a configuration.
//!
//! A configuration is feasible when every driver's occupied seats fit its
//! capacity and every rider's chosen driver is actually driving. Occupancy
//! must be recomputed for the current configuration before these checks.

use crate::domain::{Role, TripIndex, Trips};

use super::state::SearchState;

/// Check whether a single trip's current role is consistent.
pub fn is_trip_valid(trips: &Trips, state: &SearchState, index: TripIndex) -> bool {
    match state.role(trips, index) {
        Role::Drive => state.occupied(index) <= trips[index].capacity(),
        Role::Walk => true,
        Role::RideWith(driver) => state.role(trips, driver).is_drive(),
    }
}

/// Check whether every trip's current role is consistent.
pub fn is_valid(trips: &Trips, state: &SearchState) -> bool {
    (0..trips.len()).all(|i| is_trip_valid(trips, state, TripIndex(i)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Trip, TripId};

    fn push(
        trips: &mut Trips,
        name: &str,
        walk: bool,
        drive: bool,
        people: u32,
        seats: i64,
    ) -> TripIndex {
        let id = TripId::parse(name).unwrap();
        trips.push(Trip::new(id, walk, drive, people, seats, 1.0).unwrap()).unwrap()
    }

    #[test]
    fn walker_always_valid() {
        let mut trips = Trips::new();
        let a = push(&mut trips, "A", true, false, 1, 0);
        let state = SearchState::from_cursors(&trips, &[0]);
        assert!(is_trip_valid(&trips, &state, a));
        assert!(is_valid(&trips, &state));
    }

    #[test]
    fn empty_driver_valid_with_zero_capacity() {
        let mut trips = Trips::new();
        let a = push(&mut trips, "A", false, true, 1, 1);
        let state = SearchState::from_cursors(&trips, &[0]);
        assert_eq!(trips[a].capacity(), 0);
        assert!(is_trip_valid(&trips, &state, a));
    }

    #[test]
    fn driver_with_negative_capacity_invalid() {
        let mut trips = Trips::new();
        let a = push(&mut trips, "A", false, true, 2, 1);
        let state = SearchState::from_cursors(&trips, &[0]);
        assert!(!is_trip_valid(&trips, &state, a));
        assert!(!is_valid(&trips, &state));
    }

    #[test]
    fn rider_needs_driving_driver() {
        let mut trips = Trips::new();
        let d = push(&mut trips, "D", true, true, 1, 4);
        let p = push(&mut trips, "P", true, false, 1, 0);
        trips.add_sharing(p, d);

        // D drives, P rides
        let state = SearchState::from_cursors(&trips, &[0, 1]);
        assert!(is_trip_valid(&trips, &state, p));
        assert!(is_valid(&trips, &state));

        // D walks, P rides
        let state = SearchState::from_cursors(&trips, &[1, 1]);
        assert!(!is_trip_valid(&trips, &state, p));
        assert!(!is_valid(&trips, &state));
    }

    #[test]
    fn rider_cannot_chain_through_another_rider() {
        let mut trips = Trips::new();
        let a = push(&mut trips, "A", true, true, 1, 4);
        let b = push(&mut trips, "B", true, true, 1, 4);
        trips.add_sharing(a, b);
        trips.add_sharing(b, a);

        // Both ride with each other
        let state = SearchState::from_cursors(&trips, &[2, 2]);
        assert!(!is_valid(&trips, &state));
    }

    #[test]
    fn over_capacity_invalid() {
        let mut trips = Trips::new();
        let d = push(&mut trips, "D", false, true, 1, 3);
        let p = push(&mut trips, "P", true, false, 1, 0);
        let q = push(&mut trips, "Q", true, false, 2, 0);
        trips.add_sharing(p, d);
        trips.add_sharing(q, d);

        // capacity 2: P alone fits, Q alone fits, both do not
        let state = SearchState::from_cursors(&trips, &[0, 1, 0]);
        assert!(is_valid(&trips, &state));
        let state = SearchState::from_cursors(&trips, &[0, 0, 1]);
        assert!(is_valid(&trips, &state));
        let state = SearchState::from_cursors(&trips, &[0, 1, 1]);
        assert!(!is_trip_valid(&trips, &state, d));
    }

    #[test]
    fn self_ride_never_valid() {
        let mut trips = Trips::new();
        let a = push(&mut trips, "A", true, true, 1, 4);
        trips.add_sharing(a, a);
        let state = SearchState::from_cursors(&trips, &[2]);
        assert!(!is_valid(&trips, &state));
    }
}
