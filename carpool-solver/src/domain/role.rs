//! Trip roles.

use super::TripIndex;

/// The role a trip plays in one configuration.
///
/// # Examples
///
/// ```
/// use carpool_solver::domain::{Role, TripIndex};
///
/// assert!(Role::Drive.is_drive());
/// assert_eq!(Role::RideWith(TripIndex(3)).driver(), Some(TripIndex(3)));
/// assert_eq!(Role::Walk.driver(), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// Travel independently.
    Walk,
    /// Offer seats to other trips.
    Drive,
    /// Ride as a passenger with the given trip's driver.
    RideWith(TripIndex),
}

impl Role {
    /// Returns true for the driver role.
    pub fn is_drive(self) -> bool {
        matches!(self, Role::Drive)
    }

    /// Returns the driver this role rides with, if it is a ride role.
    pub fn driver(self) -> Option<TripIndex> {
        match self {
            Role::RideWith(driver) => Some(driver),
            Role::Walk | Role::Drive => None,
        }
    }
}
