//! Shared error types for the services crate.

use catalog::CatalogLoadError;
use thiserror::Error;

/// Errors emitted while building a `ChecklistService`.
///
/// Interaction operations never fail; only catalog loading can.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChecklistServiceError {
    #[error(transparent)]
    Catalog(#[from] CatalogLoadError),
}
