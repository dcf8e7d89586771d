//! Conversion from journey API DTOs to domain types.

use chrono::{DateTime, FixedOffset};
use tracing::warn;

use crate::domain::{CarrierId, Connection, DomainError, Leg, Station, StationSlug};

use super::types::{ConnectionDto, StationDto, TrainDto};

/// Error during DTO to domain conversion.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConversionError {
    /// Failed to parse a timestamp
    #[error("invalid timestamp: {0}")]
    InvalidTime(String),

    /// Connection violates a domain invariant
    #[error("invalid connection: {0}")]
    InvalidConnection(#[from] DomainError),
}

/// Convert the station directory, skipping records with unusable slugs.
pub fn convert_stations(stations: Vec<StationDto>) -> Vec<Station> {
    stations
        .into_iter()
        .filter_map(|s| match StationSlug::parse(&s.name_slug) {
            Ok(slug) => Some(Station::new(s.id, s.name, slug)),
            Err(e) => {
                warn!(station = %s.name, slug = %s.name_slug, error = %e, "skipping station");
                None
            }
        })
        .collect()
}

/// Convert a list of connections, preserving their order.
pub fn convert_connections(
    connections: &[ConnectionDto],
) -> Result<Vec<Connection>, ConversionError> {
    connections.iter().map(convert_connection).collect()
}

fn convert_connection(dto: &ConnectionDto) -> Result<Connection, ConversionError> {
    let legs = dto
        .trains
        .iter()
        .map(convert_train)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Connection::new(legs, dto.changes, dto.travel_time)?)
}

fn convert_train(dto: &TrainDto) -> Result<Leg, ConversionError> {
    Ok(Leg::new(
        CarrierId(dto.brand_id),
        parse_timestamp(&dto.departure)?,
        parse_timestamp(&dto.arrival)?,
    ))
}

fn parse_timestamp(s: &str) -> Result<DateTime<FixedOffset>, ConversionError> {
    DateTime::parse_from_rfc3339(s).map_err(|_| ConversionError::InvalidTime(s.to_string()))
}
