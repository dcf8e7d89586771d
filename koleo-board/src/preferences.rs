//! On-disk store for the chosen station pair.

use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::SelectionPreference;

/// Default preference file, relative to the working directory.
pub const DEFAULT_PATH: &str = "koleo-widget-cache.json";

/// Errors from the preference store.
#[derive(Debug, thiserror::Error)]
pub enum PreferenceError {
    /// Configuration has never been run
    #[error("no stations saved at {}; run `koleo-board configure` first", path.display())]
    NotSaved { path: PathBuf },

    /// The file exists but does not hold a preference record
    #[error("preference file {} is corrupt: {source}", path.display())]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Reading or writing the file failed
    #[error("preference file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// JSON file holding one [`SelectionPreference`].
#[derive(Debug, Clone)]
pub struct PreferenceStore {
    path: PathBuf,
}

impl PreferenceStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Overwrite the saved preference.
    ///
    /// Writes a sibling temporary file and renames it into place, so readers
    /// see either the old record or the new one. Creates parent directories
    /// if they don't exist.
    pub fn save(&self, preference: &SelectionPreference) -> Result<(), PreferenceError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
        }

        let json =
            serde_json::to_string_pretty(preference).map_err(|e| self.io_error(io::Error::other(e)))?;

        let tmp = self.tmp_path();
        std::fs::write(&tmp, json).map_err(|e| self.io_error(e))?;
        if let Err(e) = std::fs::rename(&tmp, &self.path) {
            let _ = std::fs::remove_file(&tmp);
            return Err(self.io_error(e));
        }

        debug!(path = %self.path.display(), "saved station preference");
        Ok(())
    }

    /// Load the saved preference.
    pub fn load(&self) -> Result<SelectionPreference, PreferenceError> {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(PreferenceError::NotSaved {
                    path: self.path.clone(),
                });
            }
            Err(e) => return Err(self.io_error(e)),
        };

        serde_json::from_str(&contents).map_err(|e| PreferenceError::Corrupt {
            path: self.path.clone(),
            source: e,
        })
    }

    /// Get the preference file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn io_error(&self, source: io::Error) -> PreferenceError {
        PreferenceError::Io {
            path: self.path.clone(),
            source,
        }
    }
}
