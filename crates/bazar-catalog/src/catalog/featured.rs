//! Featured picks for the landing page.

use crate::catalog::Product;

/// Maximum number of cards in each landing-page row.
pub const FEATURED_LIMIT: usize = 8;

/// Up to eight discounted products, in data-document order.
pub fn deals(products: &[Product]) -> Vec<Product> {
    products
        .iter()
        .filter(|p| p.has_discount())
        .take(FEATURED_LIMIT)
        .cloned()
        .collect()
}

/// Up to eight most recently listed products.
///
/// The feed carries no timestamps; position in the document is the
/// recency proxy, so the newest products are the last ones listed.
pub fn newest(products: &[Product]) -> Vec<Product> {
    products.iter().rev().take(FEATURED_LIMIT).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::parse_products;

    fn fixture(count: usize) -> Vec<Product> {
        let records: Vec<String> = (0..count)
            .map(|i| {
                format!(
                    r#"{{"slug": "p{i}", "price_toman": 1000, "discount_percent": {}}}"#,
                    if i % 2 == 0 { 10 } else { 0 }
                )
            })
            .collect();
        parse_products(format!("[{}]", records.join(",")).as_bytes()).unwrap()
    }

    #[test]
    fn test_deals_are_discounted_and_capped() {
        let products = fixture(30);
        let picks = deals(&products);

        assert_eq!(picks.len(), FEATURED_LIMIT);
        assert!(picks.iter().all(|p| p.has_discount()));
        // Document order preserved: first discounted records win.
        assert_eq!(picks[0].slug, "p0");
        assert_eq!(picks[1].slug, "p2");
    }

    #[test]
    fn test_deals_fewer_than_limit() {
        let products = fixture(3);
        assert_eq!(deals(&products).len(), 2);
    }

    #[test]
    fn test_newest_reverses() {
        let products = fixture(10);
        let picks = newest(&products);

        assert_eq!(picks.len(), FEATURED_LIMIT);
        assert_eq!(picks[0].slug, "p9");
        assert_eq!(picks[7].slug, "p2");
    }

    #[test]
    fn test_empty_collection() {
        assert!(deals(&[]).is_empty());
        assert!(newest(&[]).is_empty());
    }
}
