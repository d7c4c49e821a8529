//! Exhaustive ride-sharing planner.
//!
//! Given trips that may walk, drive, or ride with another trip's driver,
//! finds the role assignment with the largest total benefit that respects
//! every driver's seat capacity.

pub mod domain;
pub mod input;
pub mod output;
pub mod planner;
pub mod synthetic;
