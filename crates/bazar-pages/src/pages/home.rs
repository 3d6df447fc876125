//! Landing page.

use bazar_catalog::catalog::{categories, deals, newest, Product};

use crate::sections::{render_categories, render_featured_row};
use crate::store::StoreProfile;

use super::storefront_shell;

/// Render the landing page: category tiles, the discounted row, and the
/// newest-arrivals row, all derived from the same product collection.
pub fn render_home(products: &[Product], store: &StoreProfile) -> String {
    let mut body = String::new();
    body.push_str(&render_categories(&categories(products)));
    body.push('\n');
    body.push_str(&render_featured_row("تخفیف‌دارها", &deals(products)));
    body.push('\n');
    body.push_str(&render_featured_row("جدیدترین‌ها", &newest(products)));

    storefront_shell(&store.name, store).render(&body)
}
