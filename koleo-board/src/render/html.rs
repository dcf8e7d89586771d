//! Askama template for the HTML widget page.

use askama::Template;

use crate::board::DirectionView;
use crate::domain::Color;
use crate::format::Connector;

use super::{BACKGROUND_COLOR, TEXT_COLOR};

/// Full board page.
#[derive(Template)]
#[template(path = "board.html")]
pub struct BoardTemplate {
    pub title: String,
    pub directions: Vec<DirectionView>,
    pub background: Color,
    pub text_color: Color,
    /// Connector between a leg's departure and arrival.
    pub same_train: Connector,
    /// Seconds between automatic reloads; 0 disables reloading.
    pub refresh_secs: u32,
}

impl BoardTemplate {
    pub fn new(directions: Vec<DirectionView>, refresh_secs: u32) -> Self {
        let title = directions
            .first()
            .map(|d| d.header.clone())
            .unwrap_or_else(|| "Connections".to_string());

        Self {
            title,
            directions,
            background: BACKGROUND_COLOR,
            text_color: TEXT_COLOR,
            same_train: Connector::SameTrain,
            refresh_secs,
        }
    }
}

/// Render the board as a standalone HTML page.
pub fn render_html(directions: Vec<DirectionView>, refresh_secs: u32) -> Result<String, askama::Error> {
    BoardTemplate::new(directions, refresh_secs).render()
}
