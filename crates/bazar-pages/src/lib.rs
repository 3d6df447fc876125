//! HTML rendering for the bazar storefront.
//!
//! Pages are pure functions from the immutable product collection and an
//! explicit view-state value to a complete HTML document. Control changes
//! resubmit a GET form, so the URL stays the single source of view state;
//! nothing here mutates anything. Every interpolated field is escaped at
//! the call site.

pub mod pages;
pub mod sections;
pub mod shell;
pub mod store;

pub use pages::{render_detail, render_error_page, render_home, render_listing};
pub use store::StoreProfile;
