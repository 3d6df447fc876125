//! Listing search module.
//!
//! Contains the view query state, filter predicates, and the listing
//! pipeline that turns the immutable collection into an ordered grid.

mod filter;
mod query;
mod results;

pub use filter::Filter;
pub use query::{percent_decode, ListingQuery, SortOrder};
pub use results::{run_listing, ListingResults};
