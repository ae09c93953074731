//! Error types for loading menu definitions.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when loading a menu definition.
///
/// Resolution itself never fails; only the loading surface does.
#[derive(Debug, Error)]
pub enum MenuError {
    /// The definition file could not be read.
    #[error("Failed to read menu file '{}': {source}", path.display())]
    Io {
        /// The file that was being read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The definition is not valid JSON or has the wrong shape.
    #[error("Invalid menu definition: {0}")]
    Parse(#[from] serde_json::Error),
}
