//! Catalog domain types and listing logic for the bazar storefront.
//!
//! This crate is the pure core of the storefront. It knows nothing about
//! HTTP or HTML:
//!
//! - **Catalog**: the canonical [`catalog::Product`] shape, produced once
//!   from the loosely-typed product feed, plus category derivation and the
//!   featured picks for the landing page
//! - **Search**: listing queries parsed from URL parameters, filter
//!   predicates, and sorting
//! - **Toman**: integer prices in the display currency and discount math
//!
//! # Example
//!
//! ```rust
//! use bazar_catalog::prelude::*;
//!
//! let products = parse_products(br#"[
//!     {"slug": "usb-c", "title": "USB-C Cable", "category": "accessories",
//!      "price_toman": 100000, "discount_percent": 10, "in_stock": true}
//! ]"#).unwrap();
//!
//! let query = ListingQuery::from_query_string("filter=discount&sort=cheap");
//! let results = run_listing(&products, &query);
//! assert_eq!(results.total, 1);
//! assert_eq!(results.products[0].final_price().new_price, Toman::new(90_000));
//! ```

pub mod catalog;
pub mod error;
pub mod search;
pub mod toman;

pub use error::CatalogError;
pub use toman::{FinalPrice, Toman};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CatalogError;
    pub use crate::toman::{FinalPrice, Toman};

    pub use crate::catalog::{
        categories, deals, find_by_slug, newest, normalize_products, parse_products, Product,
        ProductRecord,
    };

    pub use crate::search::{run_listing, Filter, ListingQuery, ListingResults, SortOrder};
}
