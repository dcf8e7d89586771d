//! Glanceable rail connections between two saved stations.
//!
//! Configuration picks a departure and an arrival station from the Koleo
//! station directory and saves the pair. Display searches both directions
//! for the current moment and shows the next three connections each way,
//! with carrier badges, times, changes and travel time.

pub mod board;
pub mod clock;
pub mod domain;
pub mod error;
pub mod format;
pub mod koleo;
pub mod picker;
pub mod preferences;
pub mod render;
pub mod web;

pub use error::Error;
