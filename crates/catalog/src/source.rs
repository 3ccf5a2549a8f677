use std::path::PathBuf;

use guide_core::model::Catalog;
use tracing::info;

use crate::builtin;
use crate::error::CatalogLoadError;
use crate::records::CatalogDocument;

/// Contract for anything that can supply the immutable content catalog.
pub trait CatalogSource: Send + Sync {
    /// Load and validate the catalog.
    ///
    /// # Errors
    ///
    /// Returns `CatalogLoadError` if the content cannot be read or fails validation.
    fn load(&self) -> Result<Catalog, CatalogLoadError>;

    /// Short human-readable description used in logs.
    fn describe(&self) -> String;
}

/// The catalog compiled into the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinCatalog;

impl CatalogSource for BuiltinCatalog {
    fn load(&self) -> Result<Catalog, CatalogLoadError> {
        let catalog = builtin::catalog()?;
        log_loaded(&self.describe(), &catalog);
        Ok(catalog)
    }

    fn describe(&self) -> String {
        "builtin".to_owned()
    }
}

/// A catalog document stored as JSON on disk.
#[derive(Debug, Clone)]
pub struct JsonFileCatalog {
    path: PathBuf,
}

impl JsonFileCatalog {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CatalogSource for JsonFileCatalog {
    fn load(&self) -> Result<Catalog, CatalogLoadError> {
        let raw = std::fs::read_to_string(&self.path).map_err(|source| CatalogLoadError::Io {
            path: self.path.clone(),
            source,
        })?;
        let catalog = CatalogDocument::from_json_str(&raw)?.into_catalog()?;
        log_loaded(&self.describe(), &catalog);
        Ok(catalog)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

fn log_loaded(source: &str, catalog: &Catalog) {
    info!(
        source,
        stages = catalog.stages().len(),
        steps = catalog.step_count(),
        "catalog loaded"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_source_loads() {
        let catalog = BuiltinCatalog.load().unwrap();
        assert_eq!(catalog.stages().len(), 5);
        assert_eq!(BuiltinCatalog.describe(), "builtin");
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let source = JsonFileCatalog::new("/definitely/not/here/catalog.json");
        let err = source.load().unwrap_err();
        assert!(matches!(err, CatalogLoadError::Io { .. }));
        assert!(err.to_string().contains("catalog.json"));
    }
}
