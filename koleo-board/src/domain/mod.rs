//! Domain types for the rail board.
//!
//! This module contains the core domain model types that represent
//! validated journey data. Types enforce their invariants at construction
//! time, so code that receives them can trust their validity.

mod carrier;
mod connection;
mod error;
mod station;

pub use carrier::{CarrierId, CarrierRegistry, Color, InvalidColor};
pub use connection::{Connection, Leg};
pub use error::{CarrierField, DomainError, MissingCarrierMetadata};
pub use station::{InvalidSlug, SelectionPreference, Station, StationId, StationSlug};
