//! Journey API HTTP client.
//!
//! Every request carries the two client-identification headers the API
//! expects. Requests are single-attempt: there is no retry and, unless one
//! is configured, no timeout beyond the transport default.

use std::future::Future;

use chrono::{DateTime, SecondsFormat, Utc};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::domain::{Connection, Station, StationSlug};

use super::convert::{convert_connections, convert_stations};
use super::error::KoleoError;
use super::types::{ConnectionsResponse, StationDto};

/// Default base URL for the journey API.
const DEFAULT_BASE_URL: &str = "https://koleo.pl/api/v2/main";

/// Default value of the `X-KOLEO-Version` header.
const DEFAULT_API_VERSION: &str = "1";

/// Default value of the `X-KOLEO-Client` header.
const DEFAULT_CLIENT_ID: &str = "iOS-310";

const VERSION_HEADER: &str = "x-koleo-version";
const CLIENT_HEADER: &str = "x-koleo-client";

/// Longest body excerpt kept in a JSON error.
const MAX_ERROR_BODY: usize = 500;

/// Access to station and connection data.
///
/// Implemented by [`KoleoClient`]; tests substitute fakes.
pub trait JourneyApi: Send + Sync {
    /// Fetch the full station directory.
    fn stations(&self) -> impl Future<Output = Result<Vec<Station>, KoleoError>> + Send;

    /// Search connections from `origin` to `destination` departing around `at`.
    ///
    /// Connections come back earliest departure first.
    fn connections(
        &self,
        origin: &StationSlug,
        destination: &StationSlug,
        at: DateTime<Utc>,
    ) -> impl Future<Output = Result<Vec<Connection>, KoleoError>> + Send;
}

/// Configuration for the journey API client.
#[derive(Debug, Clone)]
pub struct KoleoConfig {
    /// Base URL for the API
    pub base_url: String,
    /// Value sent as `X-KOLEO-Version`
    pub api_version: String,
    /// Value sent as `X-KOLEO-Client`
    pub client_id: String,
    /// Request timeout in seconds; `None` keeps the transport default
    pub timeout_secs: Option<u64>,
}

impl KoleoConfig {
    /// Create a config pointing at the production API.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
            client_id: DEFAULT_CLIENT_ID.to_string(),
            timeout_secs: None,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Set the client-identification header values.
    pub fn with_client(mut self, api_version: impl Into<String>, client_id: impl Into<String>) -> Self {
        self.api_version = api_version.into();
        self.client_id = client_id.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = Some(secs);
        self
    }
}

impl Default for KoleoConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Client for the journey API.
#[derive(Debug, Clone)]
pub struct KoleoClient {
    http: reqwest::Client,
    base_url: String,
}

impl KoleoClient {
    /// Create a new client with the given configuration.
    pub fn new(config: KoleoConfig) -> Result<Self, KoleoError> {
        let mut headers = HeaderMap::new();

        let version = HeaderValue::from_str(&config.api_version)
            .map_err(|_| KoleoError::InvalidHeader("X-KOLEO-Version"))?;
        headers.insert(HeaderName::from_static(VERSION_HEADER), version);

        let client = HeaderValue::from_str(&config.client_id)
            .map_err(|_| KoleoError::InvalidHeader("X-KOLEO-Client"))?;
        headers.insert(HeaderName::from_static(CLIENT_HEADER), client);

        let mut builder = reqwest::Client::builder().default_headers(headers);
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(std::time::Duration::from_secs(secs));
        }

        Ok(Self {
            http: builder.build()?,
            base_url: config.base_url,
        })
    }

    /// Fetch all stations from the API.
    pub async fn fetch_stations(&self) -> Result<Vec<Station>, KoleoError> {
        let url = format!("{}/stations", self.base_url);
        debug!(%url, "fetching station directory");

        let response = self.http.get(&url).send().await?;
        let stations: Vec<StationDto> = decode(response).await?;

        debug!(count = stations.len(), "station directory received");
        Ok(convert_stations(stations))
    }

    /// Search connections between two stations for the given instant.
    pub async fn search(
        &self,
        origin: &StationSlug,
        destination: &StationSlug,
        at: DateTime<Utc>,
    ) -> Result<Vec<Connection>, KoleoError> {
        let url = format!("{}/connections", self.base_url);
        let date = at.to_rfc3339_opts(SecondsFormat::Millis, true);
        debug!(%origin, %destination, %date, "searching connections");

        let response = self
            .http
            .get(&url)
            .query(&[
                ("query[start_station]", origin.as_str()),
                ("query[end_station]", destination.as_str()),
                ("query[date]", date.as_str()),
            ])
            .send()
            .await?;

        let body: ConnectionsResponse = decode(response).await?;
        debug!(count = body.connections.len(), "connections received");

        Ok(convert_connections(&body.connections)?)
    }
}

impl JourneyApi for KoleoClient {
    async fn stations(&self) -> Result<Vec<Station>, KoleoError> {
        self.fetch_stations().await
    }

    async fn connections(
        &self,
        origin: &StationSlug,
        destination: &StationSlug,
        at: DateTime<Utc>,
    ) -> Result<Vec<Connection>, KoleoError> {
        self.search(origin, destination, at).await
    }
}

/// Check the response status and decode its JSON body.
async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, KoleoError> {
    let status = response.status();

    if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
        return Err(KoleoError::Unauthorized);
    }

    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(KoleoError::Api {
            status: status.as_u16(),
            message: body,
        });
    }

    let body = response.text().await?;

    serde_json::from_str(&body).map_err(|e| KoleoError::Json {
        message: e.to_string(),
        body: Some(body.chars().take(MAX_ERROR_BODY).collect()),
    })
}
