//! Domain error types.
//!
//! These errors represent validation failures and data-quality defects
//! in the domain layer. They are distinct from API/IO errors.

use std::fmt;

use super::CarrierId;

/// Domain-level errors for validation and data consistency.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// Connection has no legs
    #[error("connection must have at least one leg")]
    EmptyConnection,

    /// Reported change count disagrees with the number of legs
    #[error("connection reports {changes} changes but has {legs} legs")]
    ChangeCountMismatch { changes: u32, legs: usize },
}

/// Which carrier table an id was missing from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarrierField {
    Label,
    Color,
}

impl fmt::Display for CarrierField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CarrierField::Label => f.write_str("label"),
            CarrierField::Color => f.write_str("color"),
        }
    }
}

/// A carrier id returned by the journey API has no display metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("no {field} known for carrier {carrier}")]
pub struct MissingCarrierMetadata {
    pub carrier: CarrierId,
    pub field: CarrierField,
}
