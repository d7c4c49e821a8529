//! Instance file reader.
//!
//! The format is line-oriented with whitespace-separated fields:
//!
//! ```text
//! <num_trips>
//! <trip_id> <can_ride:0|1> <can_drive:0|1> <passenger_count> <seats> <benefit>   (num_trips lines)
//! <num_edges>
//! <trip_id> <driver_trip_id>                                                     (num_edges lines)
//! ```
//!
//! Blank lines are skipped and fields beyond the required ones are ignored.
//! Edges may only mention trips declared above them.

mod error;

use std::path::Path;
use std::str::{FromStr, SplitWhitespace};

use tracing::debug;

use crate::domain::{Trip, TripId, TripIndex, Trips};

pub use error::ParseError;

/// Read and parse an instance file.
pub fn read_instance(path: impl AsRef<Path>) -> Result<Trips, ParseError> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path).map_err(|source| ParseError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_instance(&contents)
}

/// Parse an instance from its text.
///
/// # Examples
///
/// ```
/// use carpool_solver::input::parse_instance;
///
/// let trips = parse_instance("2\nA 1 0 1 0 5\nB 0 1 1 3 0\n1\nA B\n").unwrap();
/// assert_eq!(trips.len(), 2);
/// ```
pub fn parse_instance(text: &str) -> Result<Trips, ParseError> {
    let mut lines = Lines::new(text);
    let mut trips = Trips::new();

    let num_trips: usize = lines.count("trip count")?;
    for _ in 0..num_trips {
        let mut record = lines.record("trip record")?;
        let line = record.line;

        let id = record.id("trip_id")?;
        let can_walk = record.flag("can_ride")?;
        let can_drive = record.flag("can_drive")?;
        let passenger_count: u32 = record.number("passenger_count")?;
        let seats: i64 = record.number("capacity")?;
        let benefit: f64 = record.number("benefit")?;

        let trip = Trip::new(id, can_walk, can_drive, passenger_count, seats, benefit)
            .map_err(|source| ParseError::InvalidTrip { line, source })?;
        trips
            .push(trip)
            .map_err(|source| ParseError::InvalidTrip { line, source })?;
    }

    let num_edges: usize = lines.count("edge count")?;
    let mut dropped = 0usize;
    for _ in 0..num_edges {
        let mut record = lines.record("edge record")?;
        let passenger = record.trip_ref(&trips, "trip_id")?;
        let driver = record.trip_ref(&trips, "other_trip_id")?;
        if !trips.add_sharing(passenger, driver) {
            dropped += 1;
        }
    }

    debug!(trips = trips.len(), edges = num_edges, dropped, "parsed instance");
    Ok(trips)
}

/// Non-blank lines with their 1-based line numbers.
struct Lines<'a> {
    inner: std::iter::Enumerate<std::str::Lines<'a>>,
}

impl<'a> Lines<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            inner: text.lines().enumerate(),
        }
    }

    fn record(&mut self, expected: &'static str) -> Result<Record<'a>, ParseError> {
        self.inner
            .by_ref()
            .find(|(_, line)| !line.trim().is_empty())
            .map(|(idx, line)| Record {
                line: idx + 1,
                fields: line.split_whitespace(),
            })
            .ok_or(ParseError::MissingLine { expected })
    }

    fn count(&mut self, expected: &'static str) -> Result<usize, ParseError> {
        self.record(expected)?.number(expected)
    }
}

/// The fields of one line.
struct Record<'a> {
    line: usize,
    fields: SplitWhitespace<'a>,
}

impl<'a> Record<'a> {
    fn field(&mut self, field: &'static str) -> Result<&'a str, ParseError> {
        self.fields.next().ok_or(ParseError::MissingField {
            line: self.line,
            field,
        })
    }

    fn number<T: FromStr>(&mut self, field: &'static str) -> Result<T, ParseError> {
        let value = self.field(field)?;
        value.parse().map_err(|_| ParseError::InvalidNumber {
            line: self.line,
            field,
            value: value.to_string(),
        })
    }

    fn flag(&mut self, field: &'static str) -> Result<bool, ParseError> {
        match self.field(field)? {
            "0" => Ok(false),
            "1" => Ok(true),
            other => Err(ParseError::InvalidFlag {
                line: self.line,
                field,
                value: other.to_string(),
            }),
        }
    }

    fn id(&mut self, field: &'static str) -> Result<TripId, ParseError> {
        let value = self.field(field)?;
        TripId::parse(value).map_err(|_| ParseError::InvalidId {
            line: self.line,
            value: value.to_string(),
        })
    }

    fn trip_ref(&mut self, trips: &Trips, field: &'static str) -> Result<TripIndex, ParseError> {
        let id = self.id(field)?;
        trips.index_of(&id).ok_or_else(|| ParseError::UnknownTrip {
            line: self.line,
            id: id.to_string(),
        })
    }
}
