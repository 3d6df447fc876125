//! Catalog error types.
//!
//! Malformed *fields* never error: normalization coerces them to defaults.
//! Only a document that is not a product list at all is rejected.

use thiserror::Error;

/// Errors that can occur when loading the product collection.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// The product document could not be parsed as a list of records.
    #[error("invalid product document: {0}")]
    InvalidDocument(#[from] serde_json::Error),
}
