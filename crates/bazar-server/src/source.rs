//! Product collection source.
//!
//! Every page render fetches the collection fresh; nothing is cached
//! between requests, so an updated document shows up on the next load.

use bazar_catalog::catalog::{parse_products, Product};
use bazar_catalog::CatalogError;

/// Failure while fetching or decoding the product collection.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("product source request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("product source returned status {0}")]
    Status(u16),

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// Fetch and parse the product collection from `url`.
pub async fn fetch_products(client: &reqwest::Client, url: &str) -> Result<Vec<Product>, SourceError> {
    let response = client
        .get(url)
        .header("cache-control", "no-store")
        .header("accept", "application/json")
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        return Err(SourceError::Status(status.as_u16()));
    }

    let body = response.bytes().await?;
    Ok(parse_products(&body)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_error_converts() {
        let err = parse_products(b"not json").unwrap_err();
        let source: SourceError = err.into();
        assert!(matches!(source, SourceError::Catalog(_)));
    }
}
