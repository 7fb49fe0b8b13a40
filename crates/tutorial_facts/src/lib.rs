//! Animal fun facts: a catalog of animals and random fact selection.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod catalog;
mod error;

pub use catalog::{Animal, Catalog, DEFAULT_HEADING};
pub use error::{CatalogError, FactError};
