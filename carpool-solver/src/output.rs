//! Result file rendering.
//!
//! The first line holds the number of reported drivers and the maximum
//! benefit; each following line holds a driver id and its sorted passengers.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use crate::planner::Assignment;

/// Errors that can occur while writing a result file.
#[derive(Debug, thiserror::Error)]
pub enum OutputError {
    /// File could not be written
    #[error("failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Format a benefit so it always shows a fractional part (`5.0`, not `5`).
///
/// Magnitudes of `1e16` and above, or below `1e-4`, use scientific notation
/// with a signed exponent of at least two digits (`1e+16`, `2.5e-07`).
pub fn format_benefit(benefit: f64) -> String {
    let text = format!("{benefit:?}");
    let Some((mantissa, exponent)) = text.split_once('e') else {
        return text;
    };
    let (sign, digits) = match exponent.strip_prefix('-') {
        Some(digits) => ('-', digits),
        None => ('+', exponent),
    };
    format!("{mantissa}e{sign}{digits:0>2}")
}

/// Render an assignment in the result file format.
///
/// # Examples
///
/// ```
/// use carpool_solver::output::render;
/// use carpool_solver::planner::Assignment;
///
/// assert_eq!(render(&Assignment::empty()), "0 0.0\n");
/// ```
pub fn render(assignment: &Assignment) -> String {
    let mut out = String::new();
    // Writing to a String cannot fail
    let _ = writeln!(
        out,
        "{} {}",
        assignment.drivers.len(),
        format_benefit(assignment.max_benefit)
    );
    for driver in &assignment.drivers {
        out.push_str(driver.driver.as_str());
        for passenger in &driver.passengers {
            out.push(' ');
            out.push_str(passenger.as_str());
        }
        out.push('\n');
    }
    out
}

/// Render an assignment and write it to `path`.
pub fn write_assignment(
    path: impl AsRef<Path>,
    assignment: &Assignment,
) -> Result<(), OutputError> {
    let path = path.as_ref();
    std::fs::write(path, render(assignment)).map_err(|source| OutputError::Io {
        path: path.to_path_buf(),
        source,
    })
}
