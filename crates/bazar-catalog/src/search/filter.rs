//! Listing filter predicates.

use crate::catalog::Product;

/// A single listing predicate.
///
/// The active predicates of a query combine with AND; each one is an
/// independent, order-insensitive check against one product.
#[derive(Debug, Clone, PartialEq)]
pub enum Filter {
    /// Case-insensitive substring match against the title, short
    /// description, or category (OR across the three fields).
    Text(String),
    /// Exact category match.
    Category(String),
    /// Keep only in-stock products.
    InStock,
    /// Keep only discounted products.
    Discounted,
}

impl Filter {
    /// Create a text filter.
    pub fn text(term: impl Into<String>) -> Self {
        Filter::Text(term.into())
    }

    /// Create a category filter.
    pub fn category(name: impl Into<String>) -> Self {
        Filter::Category(name.into())
    }

    /// Whether a product passes this predicate.
    pub fn matches(&self, product: &Product) -> bool {
        match self {
            Filter::Text(term) => {
                let term = term.to_lowercase();
                let field_matches = |field: Option<&str>| {
                    field.is_some_and(|f| f.to_lowercase().contains(&term))
                };

                field_matches(Some(&product.title))
                    || field_matches(product.short_desc.as_deref())
                    || field_matches(product.category.as_deref())
            }
            Filter::Category(cat) => product.category.as_deref() == Some(cat.as_str()),
            Filter::InStock => product.in_stock,
            Filter::Discounted => product.has_discount(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::parse_products;

    fn fixture() -> Vec<Product> {
        parse_products(
            br#"[
                {"slug": "a", "title": "USB Cable", "short_desc": "fast charging",
                 "category": "accessories", "price_toman": 100000,
                 "discount_percent": 10, "in_stock": true},
                {"slug": "b", "title": "Headset", "category": "audio",
                 "price_toman": 50000, "in_stock": false}
            ]"#,
        )
        .unwrap()
    }

    #[test]
    fn test_text_matches_any_field() {
        let products = fixture();

        // Title, case-insensitive.
        assert!(Filter::text("usb").matches(&products[0]));
        // Short description.
        assert!(Filter::text("charging").matches(&products[0]));
        // Category.
        assert!(Filter::text("audio").matches(&products[1]));

        assert!(!Filter::text("laptop").matches(&products[0]));
    }

    #[test]
    fn test_text_ignores_missing_fields() {
        let products = parse_products(br#"[{"slug": "x", "title": "Bare"}]"#).unwrap();
        assert!(!Filter::text("anything").matches(&products[0]));
        assert!(Filter::text("bare").matches(&products[0]));
    }

    #[test]
    fn test_category_is_exact() {
        let products = fixture();
        assert!(Filter::category("accessories").matches(&products[0]));
        assert!(!Filter::category("access").matches(&products[0]));
        assert!(!Filter::category("accessories").matches(&products[1]));
    }

    #[test]
    fn test_stock_and_discount() {
        let products = fixture();
        assert!(Filter::InStock.matches(&products[0]));
        assert!(!Filter::InStock.matches(&products[1]));
        assert!(Filter::Discounted.matches(&products[0]));
        assert!(!Filter::Discounted.matches(&products[1]));
    }
}
