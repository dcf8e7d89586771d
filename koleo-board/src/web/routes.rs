//! HTTP route handlers.
//!
//! Every page load is one refresh of the board: the saved pair is read and
//! both directions are searched again.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
};
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::board::{Board, load_board};
use crate::error::Error;
use crate::koleo::JourneyApi;
use crate::render::{BoardTemplate, render_json};

use super::state::AppState;

/// Create the application router.
pub fn create_router<A: JourneyApi + 'static>(state: AppState<A>) -> Router {
    Router::new()
        .route("/", get(board_page::<A>))
        .route("/board.json", get(board_json::<A>))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

async fn current_board<A: JourneyApi>(state: &AppState<A>) -> Result<Board, AppError> {
    load_board(
        state.api.as_ref(),
        &state.registry,
        state.clock.as_ref(),
        &state.store,
        state.limit,
    )
    .await
    .map_err(AppError::from)
}

/// The board as an HTML page.
async fn board_page<A: JourneyApi>(State(state): State<AppState<A>>) -> Result<Response, AppError> {
    let board = current_board(&state).await?;
    let template = BoardTemplate::new(board.views(), state.refresh_secs);

    let html = askama::Template::render(&template).map_err(|e| AppError::Internal {
        message: format!("Template error: {}", e),
    })?;

    Ok(Html(html).into_response())
}

/// The board as JSON.
async fn board_json<A: JourneyApi>(State(state): State<AppState<A>>) -> Result<Response, AppError> {
    let board = current_board(&state).await?;
    let body = render_json(&board.views());

    Ok((
        [(axum::http::header::CONTENT_TYPE, "application/json")],
        body,
    )
        .into_response())
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    /// No station pair has been configured
    NotConfigured { message: String },
    Internal { message: String },
}

impl From<Error> for AppError {
    fn from(e: Error) -> Self {
        match e {
            Error::NoPreferenceSaved { .. } => AppError::NotConfigured {
                message: e.to_string(),
            },
            _ => AppError::Internal {
                message: e.to_string(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::NotConfigured { message } => (StatusCode::SERVICE_UNAVAILABLE, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        warn!(%status, %message, "request failed");

        let body = Json(serde_json::json!({ "error": message }));
        (status, body).into_response()
    }
}
