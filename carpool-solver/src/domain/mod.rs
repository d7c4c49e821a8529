//! Domain types for the ride-sharing search.
//!
//! This module contains the trip model: identifiers, roles and the fixed
//! trip collection. All types enforce their invariants at construction
//! time, so the planner can trust that every trip has at least one option.

mod error;
mod role;
mod trip;
mod trip_id;

pub use error::DomainError;
pub use role::Role;
pub use trip::{Trip, Trips};
pub use trip_id::{InvalidTripId, TripId, TripIndex};
