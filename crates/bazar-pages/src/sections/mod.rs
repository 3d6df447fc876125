//! Section renderers for the storefront pages.

mod cards;
mod detail;
mod home;
mod listing;

pub use cards::*;
pub use detail::*;
pub use home::*;
pub use listing::*;
