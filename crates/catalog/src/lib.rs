#![forbid(unsafe_code)]

pub mod builtin;
pub mod error;
pub mod records;
pub mod source;

pub use error::CatalogLoadError;
pub use records::CatalogDocument;
pub use source::{BuiltinCatalog, CatalogSource, JsonFileCatalog};
