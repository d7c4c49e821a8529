//! Turning the incumbent into a driver → passengers assignment.

use crate::domain::{TripId, TripIndex, Trips};

use super::incumbent::Incumbent;
use super::state::SearchState;

/// One driver and the trips riding with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriverAssignment {
    pub driver: TripId,
    /// Passenger ids, sorted.
    pub passengers: Vec<TripId>,
}

/// The reported answer of a search.
#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    /// Total benefit of the best configuration.
    pub max_benefit: f64,

    /// Drivers carrying at least one passenger, in declaration order.
    pub drivers: Vec<DriverAssignment>,
}

impl Assignment {
    /// An answer with no benefit and no drivers.
    pub fn empty() -> Self {
        Self {
            max_benefit: 0.0,
            drivers: Vec::new(),
        }
    }
}

/// Replay the incumbent's configuration and collect who rides with whom.
///
/// Drivers without riders are left out even though they drive. Calling this
/// twice on the same incumbent gives the same answer.
pub fn extract(trips: &Trips, incumbent: &Incumbent) -> Assignment {
    let Some(max_benefit) = incumbent.benefit() else {
        return Assignment::empty();
    };

    let state = SearchState::from_cursors(trips, incumbent.cursors());
    let mut passengers: Vec<Vec<TripId>> = vec![Vec::new(); trips.len()];

    for (i, trip) in trips.iter().enumerate() {
        if let Some(driver) = state.role(trips, TripIndex(i)).driver() {
            passengers[driver.0].push(trip.id().clone());
        }
    }

    let drivers = trips
        .iter()
        .zip(passengers)
        .enumerate()
        .filter(|(i, (_, riders))| {
            !riders.is_empty() && state.role(trips, TripIndex(*i)).is_drive()
        })
        .map(|(_, (trip, mut riders))| {
            riders.sort();
            DriverAssignment {
                driver: trip.id().clone(),
                passengers: riders,
            }
        })
        .collect();

    Assignment {
        max_benefit,
        drivers,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Trip;

    fn id(s: &str) -> TripId {
        TripId::parse(s).unwrap()
    }

    fn push(trips: &mut Trips, name: &str, walk: bool, drive: bool) -> TripIndex {
        trips
            .push(Trip::new(id(name), walk, drive, 1, 5, 1.0).unwrap())
            .unwrap()
    }

    fn incumbent_at(trips: &Trips, cursors: &[usize], benefit: f64) -> Incumbent {
        let mut incumbent = Incumbent::new();
        incumbent.offer(benefit, &SearchState::from_cursors(trips, cursors));
        incumbent
    }

    #[test]
    fn empty_incumbent_gives_empty_assignment() {
        let trips = Trips::new();
        let assignment = extract(&trips, &Incumbent::new());
        assert_eq!(assignment, Assignment::empty());
    }

    #[test]
    fn passengers_sorted_by_id() {
        let mut trips = Trips::new();
        let d = push(&mut trips, "D", false, true);
        let z = push(&mut trips, "z", true, false);
        let b = push(&mut trips, "b", true, false);
        let ten = push(&mut trips, "10", true, false);
        for p in [z, b, ten] {
            trips.add_sharing(p, d);
        }

        let incumbent = incumbent_at(&trips, &[0, 1, 1, 1], 3.0);
        let assignment = extract(&trips, &incumbent);

        assert_eq!(assignment.max_benefit, 3.0);
        assert_eq!(assignment.drivers.len(), 1);
        assert_eq!(assignment.drivers[0].driver, id("D"));
        assert_eq!(assignment.drivers[0].passengers, vec![id("10"), id("b"), id("z")]);
    }

    #[test]
    fn idle_drivers_not_reported() {
        let mut trips = Trips::new();
        let d1 = push(&mut trips, "D1", false, true);
        push(&mut trips, "D2", false, true);
        let p = push(&mut trips, "P", true, false);
        trips.add_sharing(p, d1);

        let incumbent = incumbent_at(&trips, &[0, 0, 1], 1.0);
        let assignment = extract(&trips, &incumbent);

        assert_eq!(assignment.drivers.len(), 1);
        assert_eq!(assignment.drivers[0].driver, id("D1"));
    }

    #[test]
    fn drivers_in_declaration_order() {
        let mut trips = Trips::new();
        let y = push(&mut trips, "Y", false, true);
        let x = push(&mut trips, "X", false, true);
        let p = push(&mut trips, "P", true, false);
        let q = push(&mut trips, "Q", true, false);
        trips.add_sharing(p, x);
        trips.add_sharing(q, y);

        let incumbent = incumbent_at(&trips, &[0, 0, 1, 1], 2.0);
        let assignment = extract(&trips, &incumbent);

        let drivers: Vec<_> = assignment.drivers.iter().map(|d| d.driver.as_str()).collect();
        assert_eq!(drivers, vec!["Y", "X"]);
    }

    #[test]
    fn extraction_is_idempotent() {
        let mut trips = Trips::new();
        let d = push(&mut trips, "D", true, true);
        let p = push(&mut trips, "P", true, false);
        let q = push(&mut trips, "Q", true, false);
        trips.add_sharing(q, d);
        trips.add_sharing(p, d);

        let incumbent = incumbent_at(&trips, &[0, 1, 1], 2.0);
        let first = extract(&trips, &incumbent);
        let second = extract(&trips, &incumbent);
        assert_eq!(first, second);
    }
}
