//! Web surface for the board.
//!
//! Serves the board as an HTML page and as JSON, rebuilt on every request.

mod routes;
mod state;

pub use routes::{AppError, create_router};
pub use state::AppState;
