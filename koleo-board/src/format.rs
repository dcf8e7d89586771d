//! Itinerary formatting.
//!
//! Turns connections into a rendering-agnostic display model: carrier badge
//! label and color per leg, wall-clock times, and summary texts for changes
//! and duration. Any surface (terminal, HTML, JSON) renders from this model.

use chrono::{DateTime, FixedOffset};
use serde::Serialize;

use crate::domain::{CarrierRegistry, Color, Connection, Leg, MissingCarrierMetadata};

/// Connections shown per direction.
pub const DEFAULT_LIMIT: usize = 3;

/// Arrow color between departure and arrival of one train.
pub const SAME_TRAIN_COLOR: Color = Color::rgb(0x1A, 0x7E, 0xEE);

/// Arrow color between two trains (a change).
pub const CHANGE_COLOR: Color = Color::rgb(0x55, 0x55, 0x55);

/// Visual link between two times on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Connector {
    /// Departure to arrival on the same train.
    SameTrain,
    /// Arrival of one train to departure of the next.
    Change,
}

impl Connector {
    pub fn color(self) -> Color {
        match self {
            Connector::SameTrain => SAME_TRAIN_COLOR,
            Connector::Change => CHANGE_COLOR,
        }
    }
}

/// One leg as shown on the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayLeg {
    pub label: String,
    pub color: Color,
    pub departure_text: String,
    pub arrival_text: String,
    pub is_last_leg: bool,
}

impl DisplayLeg {
    /// Connector drawn after this leg's arrival, if another leg follows.
    pub fn connector_after(&self) -> Option<Connector> {
        (!self.is_last_leg).then_some(Connector::Change)
    }
}

/// One connection as shown on the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayConnection {
    pub legs: Vec<DisplayLeg>,
    pub change_text: String,
    pub duration_text: String,
}

/// Format the first `limit` connections, keeping their order.
///
/// Fails on the first leg whose carrier has no label or color.
pub fn format_connections(
    connections: &[Connection],
    registry: &CarrierRegistry,
    limit: usize,
) -> Result<Vec<DisplayConnection>, MissingCarrierMetadata> {
    connections
        .iter()
        .take(limit)
        .map(|c| format_connection(c, registry))
        .collect()
}

/// Format a single connection.
pub fn format_connection(
    connection: &Connection,
    registry: &CarrierRegistry,
) -> Result<DisplayConnection, MissingCarrierMetadata> {
    let last = connection.legs().len() - 1;
    let legs = connection
        .legs()
        .iter()
        .enumerate()
        .map(|(i, leg)| format_leg(leg, i == last, registry))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(DisplayConnection {
        legs,
        change_text: change_text(connection.changes()),
        duration_text: duration_text(connection.travel_time_mins()),
    })
}

fn format_leg(
    leg: &Leg,
    is_last_leg: bool,
    registry: &CarrierRegistry,
) -> Result<DisplayLeg, MissingCarrierMetadata> {
    Ok(DisplayLeg {
        label: registry.label(leg.carrier)?.to_string(),
        color: registry.color(leg.carrier)?,
        departure_text: clock_text(&leg.departure),
        arrival_text: clock_text(&leg.arrival),
        is_last_leg,
    })
}

/// "direct train", "1 change", "{n} changes".
pub fn change_text(changes: u32) -> String {
    match changes {
        0 => "direct train".to_string(),
        1 => "1 change".to_string(),
        n => format!("{n} changes"),
    }
}

/// Travel time in whole minutes, never split into hours.
pub fn duration_text(minutes: u32) -> String {
    format!("{minutes} min")
}

/// 24-hour `HH:MM` in the timestamp's own offset; seconds are dropped.
pub fn clock_text(time: &DateTime<FixedOffset>) -> String {
    time.format("%H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CarrierField, CarrierId};

    fn at(s: &str) -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339(s).unwrap()
    }

    fn leg(carrier: u32, dep: &str, arr: &str) -> Leg {
        Leg::new(
            CarrierId(carrier),
            at(&format!("2024-03-15T{dep}+01:00")),
            at(&format!("2024-03-15T{arr}+01:00")),
        )
    }

    fn direct(dep: &str) -> Connection {
        Connection::from_legs(vec![leg(28, dep, "23:00:00")], 90).unwrap()
    }

    #[test]
    fn change_text_boundaries() {
        assert_eq!(change_text(0), "direct train");
        assert_eq!(change_text(1), "1 change");
        assert_eq!(change_text(2), "2 changes");
        assert_eq!(change_text(11), "11 changes");
    }

    #[test]
    fn duration_is_not_split() {
        assert_eq!(duration_text(45), "45 min");
        assert_eq!(duration_text(185), "185 min");
        assert_eq!(duration_text(0), "0 min");
    }

    #[test]
    fn clock_text_pads_and_drops_seconds() {
        assert_eq!(clock_text(&at("2024-03-15T07:05:32+01:00")), "07:05");
        assert_eq!(clock_text(&at("2024-03-15T23:59:59.999+01:00")), "23:59");
        assert_eq!(clock_text(&at("2024-03-15T00:00:00Z")), "00:00");
    }

    #[test]
    fn clock_text_uses_timestamp_offset() {
        assert_eq!(clock_text(&at("2024-07-01T06:15:00+02:00")), "06:15");
        assert_eq!(clock_text(&at("2024-07-01T04:15:00Z")), "04:15");
    }

    #[test]
    fn formats_two_leg_connection() {
        let connection = Connection::new(
            vec![
                leg(28, "07:05:32", "09:30:00"),
                leg(3, "09:45:00", "10:10:00"),
            ],
            1,
            185,
        )
        .unwrap();

        let display = format_connection(&connection, &CarrierRegistry::koleo()).unwrap();

        assert_eq!(display.change_text, "1 change");
        assert_eq!(display.duration_text, "185 min");
        assert_eq!(display.legs.len(), 2);

        let first = &display.legs[0];
        assert_eq!(first.label, "IC");
        assert_eq!(first.color, Color::rgb(0xEF, 0x7F, 0x0B));
        assert_eq!(first.departure_text, "07:05");
        assert_eq!(first.arrival_text, "09:30");
        assert!(!first.is_last_leg);
        assert_eq!(first.connector_after(), Some(Connector::Change));

        let second = &display.legs[1];
        assert_eq!(second.label, "REG");
        assert!(second.is_last_leg);
        assert_eq!(second.connector_after(), None);
    }

    #[test]
    fn takes_prefix_in_input_order() {
        let connections = vec![
            direct("08:00:00"),
            direct("06:00:00"),
            direct("07:00:00"),
            direct("05:00:00"),
        ];

        let display =
            format_connections(&connections, &CarrierRegistry::koleo(), DEFAULT_LIMIT).unwrap();
        let times: Vec<&str> = display
            .iter()
            .map(|c| c.legs[0].departure_text.as_str())
            .collect();
        assert_eq!(times, vec!["08:00", "06:00", "07:00"]);
    }

    #[test]
    fn fewer_than_limit() {
        let display =
            format_connections(&[direct("08:00:00")], &CarrierRegistry::koleo(), 3).unwrap();
        assert_eq!(display.len(), 1);
        assert_eq!(display[0].change_text, "direct train");

        assert!(format_connections(&[], &CarrierRegistry::koleo(), 3)
            .unwrap()
            .is_empty());
    }

    #[test]
    fn unknown_carrier_fails() {
        let connection = Connection::new(
            vec![
                leg(28, "07:05:00", "09:30:00"),
                leg(999, "09:45:00", "10:10:00"),
            ],
            1,
            185,
        )
        .unwrap();

        let err = format_connections(&[connection], &CarrierRegistry::koleo(), 3).unwrap_err();
        assert_eq!(err.carrier, CarrierId(999));
        assert_eq!(err.field, CarrierField::Label);
    }

    #[test]
    fn unknown_carrier_beyond_limit_is_ignored() {
        let mut connections = vec![direct("06:00:00"), direct("07:00:00"), direct("08:00:00")];
        connections.push(Connection::from_legs(vec![leg(999, "09:00:00", "10:00:00")], 60).unwrap());

        assert!(format_connections(&connections, &CarrierRegistry::koleo(), 3).is_ok());
    }

    #[test]
    fn connector_colors() {
        assert_eq!(Connector::SameTrain.color().to_string(), "#1A7EEE");
        assert_eq!(Connector::Change.color().to_string(), "#555555");
    }

    #[test]
    fn serializes_for_json_surfaces() {
        let display = format_connection(&direct("07:05:00"), &CarrierRegistry::koleo()).unwrap();
        let json = serde_json::to_value(&display).unwrap();
        assert_eq!(json["change_text"], "direct train");
        assert_eq!(json["legs"][0]["label"], "IC");
        assert_eq!(json["legs"][0]["color"], "#EF7F0B");
        assert_eq!(json["legs"][0]["is_last_leg"], true);
        assert_eq!(serde_json::to_value(Connector::SameTrain).unwrap(), "same_train");
    }
}
