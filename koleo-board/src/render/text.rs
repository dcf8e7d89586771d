//! Terminal rendering.

use std::fmt::Write;

use crate::board::DirectionView;
use crate::domain::Color;
use crate::format::{Connector, DisplayConnection, DisplayLeg};

use super::TEXT_COLOR;

/// Width of the details line and divider.
const LINE_WIDTH: usize = 40;

const RESET: &str = "\x1b[0m";

/// Render the board as plain text, optionally with 24-bit ANSI colors.
pub fn render_text(directions: &[DirectionView], color: bool) -> String {
    let mut out = String::new();

    for (i, direction) in directions.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(&direction.header);
        out.push_str("\n\n");

        if let Some(error) = &direction.error {
            let _ = writeln!(out, "  ! {error}");
            continue;
        }

        if direction.connections.is_empty() {
            out.push_str("  no connections\n");
            continue;
        }

        for connection in &direction.connections {
            render_connection(&mut out, connection, color);
        }
    }

    out
}

fn render_connection(out: &mut String, connection: &DisplayConnection, color: bool) {
    let hours: Vec<String> = connection
        .legs
        .iter()
        .map(|leg| render_leg(leg, color))
        .collect();
    out.push_str(&hours.join(" "));
    out.push('\n');

    let pad = LINE_WIDTH.saturating_sub(connection.change_text.chars().count());
    let _ = writeln!(
        out,
        "{}{:>pad$}",
        connection.change_text, connection.duration_text
    );
    out.push_str(&"─".repeat(LINE_WIDTH));
    out.push('\n');
}

fn render_leg(leg: &DisplayLeg, color: bool) -> String {
    let mut s = format!(
        "{} {} {} {}",
        badge(&leg.label, leg.color, color),
        leg.departure_text,
        arrow(Connector::SameTrain, color),
        leg.arrival_text
    );
    if let Some(connector) = leg.connector_after() {
        s.push_str("  ");
        s.push_str(&arrow(connector, color));
        s.push(' ');
    }
    s
}

fn badge(label: &str, background: Color, color: bool) -> String {
    if !color {
        return format!("[{label}]");
    }
    format!(
        "\x1b[48;2;{};{};{}m\x1b[38;2;{};{};{}m {label} {RESET}",
        background.r, background.g, background.b, TEXT_COLOR.r, TEXT_COLOR.g, TEXT_COLOR.b
    )
}

fn arrow(connector: Connector, color: bool) -> String {
    let symbol = match connector {
        Connector::SameTrain => "›",
        Connector::Change => "»",
    };
    if !color {
        return symbol.to_string();
    }
    let c = connector.color();
    format!("\x1b[38;2;{};{};{}m{symbol}{RESET}", c.r, c.g, c.b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::tests::sample_views;

    #[test]
    fn plain_text_layout() {
        let text = render_text(&sample_views(), false);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "Warszawa Centralna - Kraków Główny");
        assert_eq!(lines[1], "");
        assert_eq!(lines[2], "[IC] 07:05 › 09:30  »  [REG] 09:45 › 10:10");
        assert_eq!(lines[3], format!("1 change{:>32}", "185 min"));
        assert_eq!(lines[3].chars().count(), LINE_WIDTH);
        assert_eq!(lines[4].chars().count(), LINE_WIDTH);
        assert_eq!(lines[5], "");
        assert_eq!(lines[6], "Kraków Główny - Warszawa Centralna");
        assert!(lines[8].starts_with("  ! search Kraków Główny - Warszawa Centralna unavailable"));
    }

    #[test]
    fn empty_direction() {
        let mut views = sample_views();
        views[1].error = None;
        let text = render_text(&views, false);
        assert!(text.ends_with("  no connections\n"));
    }

    #[test]
    fn ansi_colors() {
        let text = render_text(&sample_views(), true);
        assert!(text.contains("\x1b[48;2;239;127;11m\x1b[38;2;255;255;255m IC \x1b[0m"));
        assert!(text.contains("\x1b[38;2;26;126;238m›\x1b[0m"));
        assert!(text.contains("\x1b[38;2;85;85;85m»\x1b[0m"));
    }
}
