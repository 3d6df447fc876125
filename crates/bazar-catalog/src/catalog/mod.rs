//! Product catalog module.
//!
//! Contains the canonical product shape, wire-format normalization,
//! category derivation, and the landing-page featured picks.

mod category;
mod featured;
mod product;

pub use category::categories;
pub use featured::{deals, newest, FEATURED_LIMIT};
pub use product::{find_by_slug, normalize_products, parse_products, Product, ProductRecord};
