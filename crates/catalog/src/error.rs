use std::path::PathBuf;

use guide_core::model::{CatalogError, ParseIdError};
use thiserror::Error;

/// Errors surfaced while loading a catalog from a source.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CatalogLoadError {
    #[error("failed to read catalog file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("catalog document is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error(transparent)]
    InvalidId(#[from] ParseIdError),

    #[error(transparent)]
    Invalid(#[from] CatalogError),
}
