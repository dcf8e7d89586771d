//! The two entry flows and the direction-labeled board they produce.
//!
//! Configuration asks for a departure and an arrival station and saves the
//! pair. Display loads the pair, searches both directions and formats each
//! one independently: a failure in one direction is kept in that direction's
//! section and never affects the other.

use chrono::{DateTime, Utc};
use futures::future::join;
use serde::Serialize;
use tracing::{info, warn};

use crate::clock::Clock;
use crate::domain::{CarrierRegistry, SelectionPreference, Station};
use crate::error::Error;
use crate::format::{DisplayConnection, format_connections};
use crate::koleo::JourneyApi;
use crate::picker::{Pick, Prompter, pick};
use crate::preferences::PreferenceStore;

pub const DEPARTURE_TITLE: &str = "Choose departure station";
pub const ARRIVAL_TITLE: &str = "Choose arrival station";

/// Result of the configuration flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigureOutcome {
    /// Both stations chosen and saved.
    Saved(SelectionPreference),
    /// The user cancelled; nothing was written.
    Cancelled,
}

/// Fetch the directory, ask for both stations and save the pair.
pub async fn configure<A, P>(
    api: &A,
    prompter: &mut P,
    store: &PreferenceStore,
) -> Result<ConfigureOutcome, Error>
where
    A: JourneyApi,
    P: Prompter + ?Sized,
{
    let directory = api.stations().await.map_err(Error::DirectoryUnavailable)?;
    info!(stations = directory.len(), "loaded station directory");

    let Pick::Chosen(departure) = pick(prompter, DEPARTURE_TITLE, &directory)? else {
        info!("departure selection cancelled");
        return Ok(ConfigureOutcome::Cancelled);
    };

    let Pick::Chosen(arrival) = pick(prompter, ARRIVAL_TITLE, &directory)? else {
        info!("arrival selection cancelled");
        return Ok(ConfigureOutcome::Cancelled);
    };

    let preference = SelectionPreference::new(departure, arrival);
    store.save(&preference)?;
    info!(
        departure = %preference.departure_station.name,
        arrival = %preference.arrival_station.name,
        path = %store.path().display(),
        "saved station pair"
    );

    Ok(ConfigureOutcome::Saved(preference))
}

/// An ordered station pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Direction {
    pub origin: Station,
    pub destination: Station,
}

impl Direction {
    pub fn new(origin: Station, destination: Station) -> Self {
        Self {
            origin,
            destination,
        }
    }

    /// Both directions of a saved pair: outbound first.
    pub fn both(preference: &SelectionPreference) -> [Direction; 2] {
        let outbound = Direction::new(
            preference.departure_station.clone(),
            preference.arrival_station.clone(),
        );
        let inbound = outbound.reversed();
        [outbound, inbound]
    }

    pub fn reversed(&self) -> Self {
        Self::new(self.destination.clone(), self.origin.clone())
    }

    /// Section header, e.g. "Warszawa Centralna - Kraków Główny".
    pub fn header(&self) -> String {
        format!("{} - {}", self.origin.name, self.destination.name)
    }
}

/// Display model for one direction.
#[derive(Debug)]
pub struct DirectionBoard {
    pub direction: Direction,
    pub connections: Result<Vec<DisplayConnection>, Error>,
}

impl DirectionBoard {
    /// Flattened, serializable form for rendering surfaces.
    pub fn view(&self) -> DirectionView {
        let (connections, error) = match &self.connections {
            Ok(connections) => (connections.clone(), None),
            Err(e) => (Vec::new(), Some(e.to_string())),
        };

        DirectionView {
            header: self.direction.header(),
            origin: self.direction.origin.name.clone(),
            destination: self.direction.destination.name.clone(),
            connections,
            error,
        }
    }
}

/// Serializable view of one direction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DirectionView {
    pub header: String,
    pub origin: String,
    pub destination: String,
    pub connections: Vec<DisplayConnection>,
    pub error: Option<String>,
}

/// Both directions, outbound first.
#[derive(Debug)]
pub struct Board {
    pub directions: Vec<DirectionBoard>,
}

impl Board {
    pub fn views(&self) -> Vec<DirectionView> {
        self.directions.iter().map(DirectionBoard::view).collect()
    }

    /// True if any direction failed.
    pub fn has_errors(&self) -> bool {
        self.directions.iter().any(|d| d.connections.is_err())
    }
}

/// Search and format one direction, departing from `at` onwards.
pub async fn build_direction<A: JourneyApi>(
    api: &A,
    registry: &CarrierRegistry,
    at: DateTime<Utc>,
    direction: Direction,
    limit: usize,
) -> DirectionBoard {
    let connections = search_and_format(api, registry, at, &direction, limit).await;

    match &connections {
        Ok(shown) => info!(direction = %direction.header(), shown = shown.len(), "direction ready"),
        Err(e) => warn!(direction = %direction.header(), error = %e, "direction failed"),
    }

    DirectionBoard {
        direction,
        connections,
    }
}

async fn search_and_format<A: JourneyApi>(
    api: &A,
    registry: &CarrierRegistry,
    at: DateTime<Utc>,
    direction: &Direction,
    limit: usize,
) -> Result<Vec<DisplayConnection>, Error> {
    let connections = api
        .connections(
            &direction.origin.name_slug,
            &direction.destination.name_slug,
            at,
        )
        .await
        .map_err(|source| Error::SearchUnavailable {
            origin: direction.origin.name.clone(),
            destination: direction.destination.name.clone(),
            source,
        })?;

    Ok(format_connections(&connections, registry, limit)?)
}

/// Build the board for a saved pair. Both directions are searched
/// concurrently from the same instant and reported separately.
pub async fn build_board<A: JourneyApi>(
    api: &A,
    registry: &CarrierRegistry,
    clock: &dyn Clock,
    preference: &SelectionPreference,
    limit: usize,
) -> Board {
    let [outbound, inbound] = Direction::both(preference);
    let now = clock.now();

    let (outbound, inbound) = join(
        build_direction(api, registry, now, outbound, limit),
        build_direction(api, registry, now, inbound, limit),
    )
    .await;

    Board {
        directions: vec![outbound, inbound],
    }
}

/// Load the saved pair and build its board.
///
/// Fails only if no usable pair is saved; search failures are kept per
/// direction inside the board.
pub async fn load_board<A: JourneyApi>(
    api: &A,
    registry: &CarrierRegistry,
    clock: &dyn Clock,
    store: &PreferenceStore,
    limit: usize,
) -> Result<Board, Error> {
    let preference = store.load()?;
    Ok(build_board(api, registry, clock, &preference, limit).await)
}
