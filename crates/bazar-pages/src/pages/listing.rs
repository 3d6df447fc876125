//! Product listing page.

use bazar_catalog::catalog::{categories, Product};
use bazar_catalog::search::{run_listing, ListingQuery};

use crate::sections::{render_controls, render_results, CONTROLS_SCRIPT};
use crate::store::StoreProfile;

use super::storefront_shell;

/// Render the listing page for the given query. Filters and sort run here,
/// so the page always matches its URL.
pub fn render_listing(products: &[Product], query: &ListingQuery, store: &StoreProfile) -> String {
    let results = run_listing(products, query);

    let mut body = String::new();
    body.push_str(&render_controls(&categories(products), query));
    body.push('\n');
    body.push_str(&render_results(&results.products, results.total));
    body.push('\n');
    body.push_str(CONTROLS_SCRIPT);

    let title = format!("محصولات | {}", store.name);
    storefront_shell(&title, store).render(&body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bazar_catalog::catalog::parse_products;

    #[test]
    fn test_listing_applies_query() {
        let products = parse_products(
            br#"[
                {"slug": "a", "title": "Cable A", "price_toman": 100000,
                 "discount_percent": 10, "in_stock": true},
                {"slug": "b", "title": "Charger B", "price_toman": 50000, "in_stock": true}
            ]"#,
        )
        .unwrap();

        let query = ListingQuery::from_query_string("filter=discount");
        let html = render_listing(&products, &query, &StoreProfile::default());

        assert!(html.contains("1 محصول"));
        assert!(html.contains("Cable A"));
        assert!(!html.contains("Charger B"));
    }

    #[test]
    fn test_listing_default_shows_everything_newest_first() {
        let products = parse_products(
            br#"[
                {"slug": "a", "title": "First", "price_toman": 1000, "in_stock": true},
                {"slug": "b", "title": "Second", "price_toman": 2000, "in_stock": true}
            ]"#,
        )
        .unwrap();

        let query = ListingQuery::from_query_string("");
        let html = render_listing(&products, &query, &StoreProfile::default());

        assert!(html.contains("2 محصول"));
        // Later document entries render first.
        let second = html.find("Second").unwrap();
        let first = html.find("First").unwrap();
        assert!(second < first);
    }
}
