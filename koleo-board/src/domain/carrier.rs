//! Carrier (rail brand) identifiers and their display styling.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::{CarrierField, MissingCarrierMetadata};

/// Numeric brand identifier returned by the journey API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CarrierId(pub u32);

impl fmt::Display for CarrierId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error returned when parsing an invalid color.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid color: {reason}")]
pub struct InvalidColor {
    reason: &'static str,
}

/// An RGB color.
///
/// Parsed from `#RRGGBB` (either case) and displayed as uppercase `#RRGGBB`.
///
/// # Examples
///
/// ```
/// use koleo_board::domain::Color;
///
/// let c = Color::parse("#adb3b3").unwrap();
/// assert_eq!(c.to_string(), "#ADB3B3");
/// assert_eq!((c.r, c.g, c.b), (0xAD, 0xB3, 0xB3));
///
/// assert!(Color::parse("ADB3B3").is_err());
/// assert!(Color::parse("#ADB3").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a color from `#RRGGBB` notation.
    pub fn parse(s: &str) -> Result<Self, InvalidColor> {
        let hex = s.strip_prefix('#').ok_or(InvalidColor {
            reason: "must start with '#'",
        })?;

        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(InvalidColor {
                reason: "expected 6 hex digits",
            });
        }

        let channel = |i: usize| {
            u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| InvalidColor {
                reason: "expected 6 hex digits",
            })
        };

        Ok(Self {
            r: channel(0)?,
            g: channel(2)?,
            b: channel(4)?,
        })
    }
}

impl TryFrom<String> for Color {
    type Error = InvalidColor;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Color({self})")
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// Brand labels as shown on the badge, keyed by carrier id.
const LABELS: &[(u32, &str)] = &[
    (6, "ARRIVARP"),
    (51, "CD"),
    (2, "EIC"),
    (29, "EIP"),
    (28, "IC"),
    (57, "KOLEO BUS"),
    (47, "LEO"),
    (52, "LEO_PLUS"),
    (40, "MultiPlaza"),
    (59, "Kulturzug"),
    (20, "PRS"),
    (58, "KDR"),
    (38, "SKPL"),
    (54, "RKW"),
    (45, "KDP"),
    (53, "UZ"),
    (56, "SLONECZNY"),
    (33, "KML"),
    (4, "IR"),
    (10, "KD"),
    (14, "KM"),
    (11, "KS"),
    (12, "KW"),
    (13, "LKA"),
    (46, "LP"),
    (43, "LS"),
    (18, "MR"),
    (49, "PKS"),
    (5, "RE"),
    (3, "REG"),
    (27, "SKM"),
    (9, "SKMT"),
    (48, "sR"),
    (1, "TLK"),
    (8, "WKD"),
];

/// Badge background colors, keyed by carrier id.
const COLORS: &[(u32, Color)] = &[
    (6, Color::rgb(0x01, 0x80, 0x91)),
    (51, Color::rgb(0xFD, 0x66, 0x08)),
    (2, Color::rgb(0x6C, 0x72, 0x7A)),
    (29, Color::rgb(0x10, 0x2C, 0x76)),
    (28, Color::rgb(0xEF, 0x7F, 0x0B)),
    (57, Color::rgb(0x00, 0x75, 0xE2)),
    (47, Color::rgb(0xFD, 0x66, 0x08)),
    (52, Color::rgb(0xFD, 0x66, 0x08)),
    (40, Color::rgb(0x01, 0x80, 0x91)),
    (59, Color::rgb(0x2A, 0x2A, 0x28)),
    (20, Color::rgb(0xE5, 0x00, 0x00)),
    (58, Color::rgb(0x2A, 0x2A, 0x28)),
    (38, Color::rgb(0x0C, 0x5D, 0xC5)),
    (54, Color::rgb(0xAD, 0xB3, 0xB3)),
    (45, Color::rgb(0x2A, 0x2A, 0x28)),
    (53, Color::rgb(0xAD, 0xB3, 0xB3)),
    (56, Color::rgb(0x00, 0xA3, 0x4F)),
    (33, Color::rgb(0xFB, 0xBF, 0x00)),
    (4, Color::rgb(0xE5, 0x00, 0x00)),
    (10, Color::rgb(0x2A, 0x2A, 0x28)),
    (14, Color::rgb(0x00, 0xA3, 0x4F)),
    (11, Color::rgb(0x00, 0x9E, 0xDC)),
    (12, Color::rgb(0x9D, 0x0A, 0x0E)),
    (13, Color::rgb(0xAD, 0xB3, 0xB3)),
    (46, Color::rgb(0xAD, 0xB3, 0xB3)),
    (43, Color::rgb(0xAD, 0xB3, 0xB3)),
    (18, Color::rgb(0xE5, 0x00, 0x00)),
    (49, Color::rgb(0xAD, 0xB3, 0xB3)),
    (5, Color::rgb(0xAD, 0xB3, 0xB3)),
    (3, Color::rgb(0xE5, 0x00, 0x00)),
    (27, Color::rgb(0xFF, 0x11, 0x00)),
    (9, Color::rgb(0x00, 0x39, 0x55)),
    (48, Color::rgb(0xE5, 0x00, 0x00)),
    (1, Color::rgb(0xF8, 0x65, 0x05)),
    (8, Color::rgb(0x05, 0x45, 0xCB)),
];

/// Read-only lookup of carrier labels and colors.
///
/// Built once at startup and passed by reference; lookups for an id missing
/// from either table fail with [`MissingCarrierMetadata`].
#[derive(Debug, Clone)]
pub struct CarrierRegistry {
    labels: HashMap<CarrierId, String>,
    colors: HashMap<CarrierId, Color>,
}

impl CarrierRegistry {
    /// Create a registry from explicit label and color tables.
    pub fn new(labels: HashMap<CarrierId, String>, colors: HashMap<CarrierId, Color>) -> Self {
        Self { labels, colors }
    }

    /// The brand table used by the Koleo journey API.
    pub fn koleo() -> Self {
        let labels = LABELS
            .iter()
            .map(|&(id, label)| (CarrierId(id), label.to_string()))
            .collect();
        let colors = COLORS
            .iter()
            .map(|&(id, color)| (CarrierId(id), color))
            .collect();
        Self::new(labels, colors)
    }

    /// Look up the badge label for a carrier.
    pub fn label(&self, id: CarrierId) -> Result<&str, MissingCarrierMetadata> {
        self.labels
            .get(&id)
            .map(String::as_str)
            .ok_or(MissingCarrierMetadata {
                carrier: id,
                field: CarrierField::Label,
            })
    }

    /// Look up the badge color for a carrier.
    pub fn color(&self, id: CarrierId) -> Result<Color, MissingCarrierMetadata> {
        self.colors.get(&id).copied().ok_or(MissingCarrierMetadata {
            carrier: id,
            field: CarrierField::Color,
        })
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Display then parse returns the same color
        #[test]
        fn display_parse_roundtrip(r: u8, g: u8, b: u8) {
            let color = Color::rgb(r, g, b);
            prop_assert_eq!(Color::parse(&color.to_string()).unwrap(), color);
        }

        /// Parsing ignores hex digit case
        #[test]
        fn case_insensitive(s in "[0-9a-f]{6}") {
            let lower = Color::parse(&format!("#{s}")).unwrap();
            let upper = Color::parse(&format!("#{}", s.to_uppercase())).unwrap();
            prop_assert_eq!(lower, upper);
        }
    }
}
