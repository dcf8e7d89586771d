//! Station types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Error returned when parsing an invalid station slug.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid station slug: {reason}")]
pub struct InvalidSlug {
    reason: &'static str,
}

/// Numeric station identifier assigned by the journey API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StationId(pub u64);

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A URL-safe station identifier, distinct from the display name.
///
/// Slugs are non-empty and consist only of ASCII letters, digits, `-` and `_`,
/// so they can be placed in a query string without escaping.
///
/// # Examples
///
/// ```
/// use koleo_board::domain::StationSlug;
///
/// let slug = StationSlug::parse("warszawa-centralna").unwrap();
/// assert_eq!(slug.as_str(), "warszawa-centralna");
///
/// assert!(StationSlug::parse("").is_err());
/// assert!(StationSlug::parse("kraków").is_err());
/// assert!(StationSlug::parse("a b").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct StationSlug(String);

impl StationSlug {
    /// Parse a slug from a string.
    pub fn parse(s: &str) -> Result<Self, InvalidSlug> {
        if s.is_empty() {
            return Err(InvalidSlug {
                reason: "must not be empty",
            });
        }

        if !s
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
        {
            return Err(InvalidSlug {
                reason: "must contain only ASCII letters, digits, '-' or '_'",
            });
        }

        Ok(Self(s.to_string()))
    }

    /// Returns the slug as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for StationSlug {
    type Error = InvalidSlug;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<StationSlug> for String {
    fn from(slug: StationSlug) -> Self {
        slug.0
    }
}

impl fmt::Debug for StationSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationSlug({})", self.0)
    }
}

impl fmt::Display for StationSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A station from the directory.
///
/// Serialized with the same field names the journey API uses, so a saved
/// preference holds full station records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Station {
    pub id: StationId,
    pub name: String,
    pub name_slug: StationSlug,
}

impl Station {
    /// Create a new station.
    pub fn new(id: u64, name: impl Into<String>, name_slug: StationSlug) -> Self {
        Self {
            id: StationId(id),
            name: name.into(),
            name_slug,
        }
    }
}

/// The saved origin/destination pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionPreference {
    pub departure_station: Station,
    pub arrival_station: Station,
}

impl SelectionPreference {
    pub fn new(departure_station: Station, arrival_station: Station) -> Self {
        Self {
            departure_station,
            arrival_station,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slug(s: &str) -> StationSlug {
        StationSlug::parse(s).unwrap()
    }

    #[test]
    fn parse_valid_slugs() {
        assert!(StationSlug::parse("wc").is_ok());
        assert!(StationSlug::parse("krakow-glowny").is_ok());
        assert!(StationSlug::parse("bielsko_biala_gl").is_ok());
        assert!(StationSlug::parse("Gdynia-2").is_ok());
    }

    #[test]
    fn reject_non_url_safe() {
        assert!(StationSlug::parse("").is_err());
        assert!(StationSlug::parse("kraków").is_err());
        assert!(StationSlug::parse("a/b").is_err());
        assert!(StationSlug::parse("a&b").is_err());
        assert!(StationSlug::parse("a b").is_err());
    }

    #[test]
    fn debug_and_display() {
        let s = slug("wc");
        assert_eq!(format!("{}", s), "wc");
        assert_eq!(format!("{:?}", s), "StationSlug(wc)");
    }

    #[test]
    fn station_uses_api_field_names() {
        let station = Station::new(33700, "Warszawa Centralna", slug("warszawa-centralna"));
        let json = serde_json::to_value(&station).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": 33700,
                "name": "Warszawa Centralna",
                "name_slug": "warszawa-centralna"
            })
        );
    }

    #[test]
    fn deserialize_rejects_bad_slug() {
        let json = r#"{"id": 1, "name": "X", "name_slug": "not a slug"}"#;
        assert!(serde_json::from_str::<Station>(json).is_err());
    }

    #[test]
    fn preference_uses_camel_case_keys() {
        let pref = SelectionPreference::new(
            Station::new(1, "Warszawa Centralna", slug("wc")),
            Station::new(2, "Kraków Główny", slug("kg")),
        );
        let json = serde_json::to_value(&pref).unwrap();
        assert!(json.get("departureStation").is_some());
        assert!(json.get("arrivalStation").is_some());
        assert_eq!(json["arrivalStation"]["name_slug"], "kg");
    }
}
