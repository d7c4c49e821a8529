//! Trips and the fixed trip collection.
//!
//! A `Trip` holds a participant's static attributes and its ordered list of
//! role options. `Trips` owns every trip in declaration order and resolves
//! ids to indices. Neither type carries search state; that lives in
//! `planner::SearchState`.

use std::collections::HashMap;

use super::{DomainError, Role, TripId, TripIndex};

/// One participant in the sharing problem.
#[derive(Debug, Clone, PartialEq)]
pub struct Trip {
    id: TripId,
    benefit: f64,
    passenger_count: u32,
    capacity: i64,
    can_walk: bool,
    can_drive: bool,
    options: Vec<Role>,
}

impl Trip {
    /// Create a trip.
    ///
    /// `seats` is the raw seat count of the trip's vehicle; the stored
    /// capacity excludes the trip's own passengers and may be negative.
    /// Options start as `[Drive?, Walk?]` in that order.
    pub fn new(
        id: TripId,
        can_walk: bool,
        can_drive: bool,
        passenger_count: u32,
        seats: i64,
        benefit: f64,
    ) -> Result<Self, DomainError> {
        if !can_walk && !can_drive {
            return Err(DomainError::NoRole(id));
        }
        if passenger_count == 0 {
            return Err(DomainError::InvalidPassengerCount(id));
        }
        if !benefit.is_finite() || benefit < 0.0 {
            return Err(DomainError::InvalidBenefit { id, benefit });
        }

        let mut options = Vec::with_capacity(2);
        if can_drive {
            options.push(Role::Drive);
        }
        if can_walk {
            options.push(Role::Walk);
        }

        Ok(Self {
            id,
            benefit,
            passenger_count,
            capacity: seats.saturating_sub(i64::from(passenger_count)),
            can_walk,
            can_drive,
            options,
        })
    }

    pub fn id(&self) -> &TripId {
        &self.id
    }

    /// Benefit gained when this trip rides with someone.
    pub fn benefit(&self) -> f64 {
        self.benefit
    }

    pub fn passenger_count(&self) -> u32 {
        self.passenger_count
    }

    /// Seats offered to others, net of the trip's own passengers.
    pub fn capacity(&self) -> i64 {
        self.capacity
    }

    pub fn can_walk(&self) -> bool {
        self.can_walk
    }

    pub fn can_drive(&self) -> bool {
        self.can_drive
    }

    /// A trip that drives but never rides or walks.
    pub fn is_exclusive_driver(&self) -> bool {
        self.can_drive && !self.can_walk
    }

    /// The ordered role options. Never empty.
    pub fn options(&self) -> &[Role] {
        &self.options
    }
}

/// The fixed set of trips in declaration order.
#[derive(Debug, Clone, Default)]
pub struct Trips {
    trips: Vec<Trip>,
    by_id: HashMap<TripId, TripIndex>,
}

impl Trips {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a trip, returning its index.
    pub fn push(&mut self, trip: Trip) -> Result<TripIndex, DomainError> {
        if self.by_id.contains_key(trip.id()) {
            return Err(DomainError::DuplicateTrip(trip.id.clone()));
        }
        let index = TripIndex(self.trips.len());
        self.by_id.insert(trip.id.clone(), index);
        self.trips.push(trip);
        Ok(index)
    }

    /// Declare that `passenger` may ride with `driver`'s vehicle.
    ///
    /// Edges are directional. Exclusive drivers never ride, so an edge from
    /// one is dropped. Returns whether a ride option was added.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn add_sharing(&mut self, passenger: TripIndex, driver: TripIndex) -> bool {
        assert!(driver.0 < self.trips.len(), "driver index out of bounds");
        let trip = &mut self.trips[passenger.0];
        if trip.is_exclusive_driver() {
            return false;
        }
        trip.options.push(Role::RideWith(driver));
        true
    }

    /// Look up a trip's index by id.
    pub fn index_of(&self, id: &TripId) -> Option<TripIndex> {
        self.by_id.get(id).copied()
    }

    pub fn get(&self, index: TripIndex) -> Option<&Trip> {
        self.trips.get(index.0)
    }

    pub fn len(&self) -> usize {
        self.trips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trips.is_empty()
    }

    /// Iterate trips in declaration order.
    pub fn iter(&self) -> std::slice::Iter<'_, Trip> {
        self.trips.iter()
    }

    /// Number of joint configurations an exhaustive search visits.
    ///
    /// Returns `None` if the product overflows `u128`.
    pub fn search_space_size(&self) -> Option<u128> {
        self.trips
            .iter()
            .try_fold(1u128, |acc, trip| acc.checked_mul(trip.options.len() as u128))
    }
}

impl std::ops::Index<TripIndex> for Trips {
    type Output = Trip;

    fn index(&self, index: TripIndex) -> &Trip {
        &self.trips[index.0]
    }
}
