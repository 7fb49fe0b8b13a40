//! Error types for the animal catalog.

use derive_more::{Display, Error};
use tracing::instrument;

/// Lookup and validation failures.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum FactError {
    /// No animal with this name in the catalog.
    #[display("Unknown animal: {}", _0)]
    UnknownAnimal(#[error(not(source))] String),

    /// The catalog lists no animals.
    #[display("Catalog has no animals")]
    EmptyCatalog,

    /// The animal has an empty fact list.
    #[display("Animal {} has no facts", _0)]
    NoFacts(#[error(not(source))] String),
}

/// Catalog loading error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Catalog error: {} at {}:{}", message, file, line)]
pub struct CatalogError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl CatalogError {
    /// Creates a new catalog error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<toml::de::Error> for CatalogError {
    #[track_caller]
    fn from(err: toml::de::Error) -> Self {
        Self::new(format!("Failed to parse catalog: {}", err))
    }
}
