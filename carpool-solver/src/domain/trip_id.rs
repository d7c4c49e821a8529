//! Trip identifier types.

use std::fmt;

/// Error returned when parsing an invalid trip id.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid trip id: {reason}")]
pub struct InvalidTripId {
    reason: &'static str,
}

/// An opaque trip identifier as it appears in the instance file.
///
/// Ids are compared and ordered by their text, so `"10"` sorts before `"9"`.
/// The only validation is that an id is non-empty and contains no whitespace.
///
/// # Examples
///
/// ```
/// use carpool_solver::domain::TripId;
///
/// let id = TripId::parse("t42").unwrap();
/// assert_eq!(id.as_str(), "t42");
///
/// assert!(TripId::parse("").is_err());
/// assert!(TripId::parse("a b").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TripId(String);

impl TripId {
    /// Parse a trip id from a token.
    pub fn parse(s: &str) -> Result<Self, InvalidTripId> {
        if s.is_empty() {
            return Err(InvalidTripId {
                reason: "trip id cannot be empty",
            });
        }
        if s.chars().any(char::is_whitespace) {
            return Err(InvalidTripId {
                reason: "trip id cannot contain whitespace",
            });
        }
        Ok(TripId(s.to_string()))
    }

    /// Returns the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for TripId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TripId({})", self.0)
    }
}

impl fmt::Display for TripId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Position of a trip in declaration order.
///
/// Declaration order is the one fixed ordering used by enumeration, validation
/// and result extraction alike.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TripIndex(pub usize);

impl fmt::Display for TripIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_ids() {
        assert!(TripId::parse("1").is_ok());
        assert!(TripId::parse("A").is_ok());
        assert!(TripId::parse("trip-7").is_ok());
    }

    #[test]
    fn reject_empty() {
        assert!(TripId::parse("").is_err());
    }

    #[test]
    fn reject_whitespace() {
        assert!(TripId::parse(" ").is_err());
        assert!(TripId::parse("a\tb").is_err());
    }

    #[test]
    fn orders_by_text() {
        let ten = TripId::parse("10").unwrap();
        let nine = TripId::parse("9").unwrap();
        assert!(ten < nine);
    }

    #[test]
    fn display_is_raw_text() {
        let id = TripId::parse("B").unwrap();
        assert_eq!(id.to_string(), "B");
        assert_eq!(format!("{id:?}"), "TripId(B)");
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Any non-whitespace token parses back to itself
        #[test]
        fn roundtrip(s in "[A-Za-z0-9_-]{1,12}") {
            let id = TripId::parse(&s).unwrap();
            prop_assert_eq!(id.as_str(), s.as_str());
        }

        /// Ordering of ids matches ordering of their text
        #[test]
        fn ordering_matches_text(a in "[a-z0-9]{1,6}", b in "[a-z0-9]{1,6}") {
            let ia = TripId::parse(&a).unwrap();
            let ib = TripId::parse(&b).unwrap();
            prop_assert_eq!(ia.cmp(&ib), a.cmp(&b));
        }
    }
}
