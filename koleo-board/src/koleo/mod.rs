//! Koleo journey API client.
//!
//! Two endpoints are used:
//! - `GET /stations` returns the whole station directory in one response
//! - `GET /connections` returns itineraries between two station slugs for
//!   a given instant, earliest departure first
//!
//! Both require the `X-KOLEO-Version` and `X-KOLEO-Client` headers.

mod client;
mod convert;
mod error;
mod types;

pub use client::{JourneyApi, KoleoClient, KoleoConfig};
pub use convert::ConversionError;
pub use error::KoleoError;
pub use types::{ConnectionDto, ConnectionsResponse, StationDto, TrainDto};
