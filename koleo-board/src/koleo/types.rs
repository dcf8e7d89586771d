//! Journey API response DTOs.
//!
//! These types map directly to the JSON the API returns. Only the fields
//! we consume are declared; everything else in the payload is ignored.

use serde::Deserialize;

/// A station record from `GET /stations`.
#[derive(Debug, Clone, Deserialize)]
pub struct StationDto {
    pub id: u64,
    pub name: String,
    pub name_slug: String,
}

/// Response from `GET /connections`.
#[derive(Debug, Clone, Deserialize)]
pub struct ConnectionsResponse {
    /// Connections, earliest departure first.
    pub connections: Vec<ConnectionDto>,
}

/// One itinerary in a connections response.
#[derive(Debug, Clone, Deserialize)]
pub struct ConnectionDto {
    /// Number of train changes.
    pub changes: u32,

    /// Total travel time in minutes.
    pub travel_time: u32,

    /// Train legs in departure order.
    pub trains: Vec<TrainDto>,
}

/// A train leg within a connection.
#[derive(Debug, Clone, Deserialize)]
pub struct TrainDto {
    /// Carrier (brand) id.
    pub brand_id: u32,

    /// Departure timestamp (RFC 3339 with offset).
    pub departure: String,

    /// Arrival timestamp (RFC 3339 with offset).
    pub arrival: String,
}
