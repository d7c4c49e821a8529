//! Domain error types.
//!
//! These errors represent trips that cannot take part in a search. They are
//! distinct from file format errors, which live in the input layer.

use super::TripId;

/// Domain-level errors for trip construction.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DomainError {
    /// Trip can neither walk nor drive, so it has no role at all
    #[error("trip {0} can neither walk nor drive")]
    NoRole(TripId),

    /// Trip brings no people
    #[error("trip {0} must carry at least one passenger")]
    InvalidPassengerCount(TripId),

    /// Benefit is negative or not a finite number
    #[error("trip {id} has invalid benefit {benefit}")]
    InvalidBenefit { id: TripId, benefit: f64 },

    /// Trip id declared twice
    #[error("trip {0} is declared more than once")]
    DuplicateTrip(TripId),
}
