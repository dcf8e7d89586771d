//! Errors surfaced by the configure and display flows.

use std::io;
use std::path::PathBuf;

use crate::domain::MissingCarrierMetadata;
use crate::koleo::KoleoError;
use crate::preferences::PreferenceError;

/// Top-level error for the entry points.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Station directory could not be fetched or decoded
    #[error("station directory unavailable: {0}")]
    DirectoryUnavailable(#[source] KoleoError),

    /// Connection search for one direction failed
    #[error("search {origin} - {destination} unavailable: {source}")]
    SearchUnavailable {
        origin: String,
        destination: String,
        #[source]
        source: KoleoError,
    },

    /// Display mode needs a saved station pair
    #[error("no stations saved at {}; run `koleo-board configure` first", path.display())]
    NoPreferenceSaved { path: PathBuf },

    /// Preference file unreadable or unwritable
    #[error(transparent)]
    Preferences(PreferenceError),

    /// A leg's carrier has no label or color
    #[error(transparent)]
    MissingCarrierMetadata(#[from] MissingCarrierMetadata),

    /// Interactive prompt failed
    #[error("prompt failed: {0}")]
    Prompt(#[from] io::Error),

    /// API client could not be built
    #[error("cannot create API client: {0}")]
    Client(#[source] KoleoError),

    /// Binding or running the HTTP server failed
    #[error("server failed: {0}")]
    Serve(#[source] io::Error),

    /// Rendering to a surface failed
    #[error("render failed: {0}")]
    Render(#[from] askama::Error),
}

impl From<PreferenceError> for Error {
    fn from(err: PreferenceError) -> Self {
        match err {
            PreferenceError::NotSaved { path } => Error::NoPreferenceSaved { path },
            other => Error::Preferences(other),
        }
    }
}
