//! Exhaustive ride-sharing planner.
//!
//! This module implements the core search that answers: "which trips should
//! drive, which should ride with whom, and which should walk, so that total
//! benefit is as large as possible?"
//!
//! The search enumerates every joint role configuration with an odometer,
//! keeps the feasible configuration with the highest benefit, and finally
//! replays it into a driver → passengers assignment.

mod config;
mod extract;
mod incumbent;
mod monitor;
mod search;
mod state;
mod stats;
mod validate;


pub use config::SearchConfig;
pub use extract::{Assignment, DriverAssignment, extract};
pub use incumbent::{Incumbent, score};
pub use monitor::{LogMonitor, NoOpMonitor, SearchMonitor};
pub use search::{Planner, SearchResult};
pub use state::SearchState;
pub use stats::SearchStats;
pub use validate::{is_trip_valid, is_valid};
