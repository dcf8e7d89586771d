//! Presentation surfaces for the board.
//!
//! Every surface consumes the same direction-labeled views, so adding a
//! surface never touches searching or formatting.

mod html;
mod text;

use clap::ValueEnum;

use crate::board::DirectionView;
use crate::domain::Color;
use crate::error::Error;

pub use html::{BoardTemplate, render_html};
pub use text::render_text;

/// Page background.
pub const BACKGROUND_COLOR: Color = Color::rgb(0x15, 0x15, 0x15);

/// Foreground text.
pub const TEXT_COLOR: Color = Color::rgb(0xFF, 0xFF, 0xFF);

/// Output surface selectable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Surface {
    #[default]
    Text,
    Json,
    Html,
}

/// Render views onto the chosen surface.
pub fn render(surface: Surface, directions: Vec<DirectionView>, color: bool) -> Result<String, Error> {
    match surface {
        Surface::Text => Ok(render_text(&directions, color)),
        Surface::Json => Ok(render_json(&directions)),
        Surface::Html => Ok(render_html(directions, 0)?),
    }
}

/// Render views as pretty-printed JSON.
pub fn render_json(directions: &[DirectionView]) -> String {
    format!("{:#}", serde_json::json!({ "directions": directions }))
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::board::testing::{one_change, station};
    use crate::board::{Direction, DirectionBoard};
    use crate::domain::CarrierRegistry;
    use crate::format::format_connections;
    use crate::koleo::KoleoError;

    /// Outbound with one two-leg connection, inbound failed.
    pub(crate) fn sample_views() -> Vec<DirectionView> {
        let outbound = Direction::new(
            station(1, "Warszawa Centralna", "wc"),
            station(2, "Kraków Główny", "kg"),
        );
        let inbound = outbound.reversed();

        let connections = format_connections(&[one_change()], &CarrierRegistry::koleo(), 3);

        vec![
            DirectionBoard {
                direction: outbound,
                connections: connections.map_err(Error::from),
            }
            .view(),
            DirectionBoard {
                direction: inbound,
                connections: Err(Error::SearchUnavailable {
                    origin: "Kraków Główny".into(),
                    destination: "Warszawa Centralna".into(),
                    source: KoleoError::Unauthorized,
                }),
            }
            .view(),
        ]
    }

    #[test]
    fn json_surface() {
        let json: serde_json::Value = serde_json::from_str(&render_json(&sample_views())).unwrap();
        let directions = json["directions"].as_array().unwrap();

        assert_eq!(directions.len(), 2);
        assert_eq!(directions[0]["header"], "Warszawa Centralna - Kraków Główny");
        assert_eq!(directions[0]["connections"][0]["change_text"], "1 change");
        assert_eq!(directions[0]["connections"][0]["legs"][1]["label"], "REG");
        assert!(directions[0]["error"].is_null());
        assert!(directions[1]["error"].as_str().unwrap().contains("unauthorized"));
    }

    #[test]
    fn render_dispatches_by_surface() {
        let text = render(Surface::Text, sample_views(), false).unwrap();
        assert!(text.starts_with("Warszawa Centralna - Kraków Główny\n"));

        let html = render(Surface::Html, sample_views(), false).unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));

        let json = render(Surface::Json, sample_views(), false).unwrap();
        assert!(json.starts_with('{'));
    }
}
