//! Listing pipeline: filter, then sort, on a copy of the collection.

use crate::catalog::Product;
use crate::search::{ListingQuery, SortOrder};

/// The outcome of one listing computation.
#[derive(Debug, Clone, PartialEq)]
pub struct ListingResults {
    /// Products to display, in final order.
    pub products: Vec<Product>,
    /// Filtered count, shown as the result badge.
    pub total: usize,
}

/// Run a query against the immutable product collection.
///
/// Pure and idempotent: same inputs, same output. The source slice is
/// never mutated; filtering and sorting happen on a copy.
pub fn run_listing(products: &[Product], query: &ListingQuery) -> ListingResults {
    let filters = query.filters();

    let mut list: Vec<Product> = products
        .iter()
        .filter(|p| filters.iter().all(|f| f.matches(p)))
        .cloned()
        .collect();

    match query.sort {
        // Stable sorts: price ties keep their document order.
        SortOrder::Cheapest => list.sort_by_key(|p| p.final_price().new_price),
        SortOrder::MostExpensive => {
            list.sort_by(|a, b| b.final_price().new_price.cmp(&a.final_price().new_price))
        }
        SortOrder::Newest => list.reverse(),
    }

    let total = list.len();
    ListingResults {
        products: list,
        total,
    }
}
