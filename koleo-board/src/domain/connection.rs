//! Legs and connections (itineraries).

use chrono::{DateTime, FixedOffset};

use super::CarrierId;
use super::error::DomainError;

/// A single train ride within a connection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Leg {
    pub carrier: CarrierId,
    pub departure: DateTime<FixedOffset>,
    pub arrival: DateTime<FixedOffset>,
}

impl Leg {
    pub fn new(
        carrier: CarrierId,
        departure: DateTime<FixedOffset>,
        arrival: DateTime<FixedOffset>,
    ) -> Self {
        Self {
            carrier,
            departure,
            arrival,
        }
    }
}

/// One proposed journey, made of one or more legs.
///
/// The number of changes always equals `legs().len() - 1`; this is checked
/// on construction, so code holding a `Connection` can rely on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Connection {
    legs: Vec<Leg>,
    changes: u32,
    travel_time_mins: u32,
}

impl Connection {
    /// Create a connection, checking the change count against the legs.
    pub fn new(legs: Vec<Leg>, changes: u32, travel_time_mins: u32) -> Result<Self, DomainError> {
        if legs.is_empty() {
            return Err(DomainError::EmptyConnection);
        }

        if changes as usize != legs.len() - 1 {
            return Err(DomainError::ChangeCountMismatch {
                changes,
                legs: legs.len(),
            });
        }

        Ok(Self {
            legs,
            changes,
            travel_time_mins,
        })
    }

    /// Create a connection whose change count is derived from its legs.
    pub fn from_legs(legs: Vec<Leg>, travel_time_mins: u32) -> Result<Self, DomainError> {
        let changes = legs.len().saturating_sub(1) as u32;
        Self::new(legs, changes, travel_time_mins)
    }

    /// The legs in departure order.
    pub fn legs(&self) -> &[Leg] {
        &self.legs
    }

    pub fn changes(&self) -> u32 {
        self.changes
    }

    /// Total travel time in minutes, as reported by the journey API.
    pub fn travel_time_mins(&self) -> u32 {
        self.travel_time_mins
    }

    pub fn is_direct(&self) -> bool {
        self.changes == 0
    }

    /// Departure of the first leg.
    pub fn departure(&self) -> DateTime<FixedOffset> {
        self.legs[0].departure
    }

    /// Arrival of the last leg.
    pub fn arrival(&self) -> DateTime<FixedOffset> {
        self.legs[self.legs.len() - 1].arrival
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(s: &str) -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339(s).unwrap()
    }

    fn leg(carrier: u32, dep: &str, arr: &str) -> Leg {
        Leg::new(CarrierId(carrier), at(dep), at(arr))
    }

    #[test]
    fn direct_connection() {
        let c = Connection::new(
            vec![leg(28, "2024-03-15T07:05:00+01:00", "2024-03-15T09:30:00+01:00")],
            0,
            145,
        )
        .unwrap();

        assert!(c.is_direct());
        assert_eq!(c.legs().len(), 1);
        assert_eq!(c.travel_time_mins(), 145);
        assert_eq!(c.departure(), at("2024-03-15T07:05:00+01:00"));
        assert_eq!(c.arrival(), at("2024-03-15T09:30:00+01:00"));
    }

    #[test]
    fn one_change() {
        let c = Connection::new(
            vec![
                leg(28, "2024-03-15T07:05:00+01:00", "2024-03-15T09:30:00+01:00"),
                leg(3, "2024-03-15T09:45:00+01:00", "2024-03-15T10:10:00+01:00"),
            ],
            1,
            185,
        )
        .unwrap();

        assert!(!c.is_direct());
        assert_eq!(c.changes(), 1);
        assert_eq!(c.arrival(), at("2024-03-15T10:10:00+01:00"));
    }

    #[test]
    fn reject_empty() {
        assert_eq!(
            Connection::new(vec![], 0, 10),
            Err(DomainError::EmptyConnection)
        );
        assert_eq!(
            Connection::from_legs(vec![], 10),
            Err(DomainError::EmptyConnection)
        );
    }

    #[test]
    fn reject_change_mismatch() {
        let legs = vec![
            leg(28, "2024-03-15T07:05:00+01:00", "2024-03-15T09:30:00+01:00"),
            leg(3, "2024-03-15T09:45:00+01:00", "2024-03-15T10:10:00+01:00"),
        ];
        assert_eq!(
            Connection::new(legs, 0, 185),
            Err(DomainError::ChangeCountMismatch {
                changes: 0,
                legs: 2
            })
        );
    }
}
