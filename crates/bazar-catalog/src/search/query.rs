//! Listing query state parsed from URL parameters.

use crate::search::Filter;

/// Sort order for the listing grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Most recently listed first (document order, reversed).
    #[default]
    Newest,
    /// Ascending by final price.
    Cheapest,
    /// Descending by final price.
    MostExpensive,
}

impl SortOrder {
    /// All orders, in the order the sort select shows them.
    pub const ALL: [SortOrder; 3] = [Self::Newest, Self::Cheapest, Self::MostExpensive];

    /// Parse the `sort` URL parameter. Anything unrecognized falls back
    /// to the default order.
    pub fn from_param(s: &str) -> Self {
        match s {
            "cheap" => Self::Cheapest,
            "expensive" => Self::MostExpensive,
            _ => Self::Newest,
        }
    }

    /// The URL parameter value for this order.
    pub fn as_param(&self) -> &'static str {
        match self {
            Self::Newest => "new",
            Self::Cheapest => "cheap",
            Self::MostExpensive => "expensive",
        }
    }

    /// Label shown in the sort select.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Newest => "جدیدترین",
            Self::Cheapest => "ارزان‌ترین",
            Self::MostExpensive => "گران‌ترین",
        }
    }
}

/// The view query state driving one listing render.
///
/// Derived entirely from the request URL, recomputed per request, never
/// stored anywhere. Rendering a listing is a pure function of this value
/// and the immutable product collection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListingQuery {
    /// Free-text search term.
    pub term: String,
    /// Exact category to keep.
    pub category: Option<String>,
    /// Keep only in-stock products.
    pub in_stock_only: bool,
    /// Keep only discounted products.
    pub discount_only: bool,
    /// Grid ordering.
    pub sort: SortOrder,
}

impl ListingQuery {
    /// Parse the recognized parameters from a raw query string.
    ///
    /// Recognized: `q` (search term), `cat` (exact category), `filter`
    /// (`discount` preselects the discount checkbox), `sort`, and `stock`
    /// (the in-stock checkbox as resubmitted by the listing form).
    /// Unknown parameters are ignored.
    pub fn from_query_string(qs: &str) -> Self {
        let mut query = ListingQuery::default();

        for pair in qs.split('&') {
            let mut parts = pair.splitn(2, '=');
            let key = parts.next().unwrap_or("");
            let value = parts.next().unwrap_or("");
            let decoded = percent_decode(value);

            match key {
                "q" => query.term = decoded.trim().to_string(),
                "cat" => {
                    if !decoded.is_empty() {
                        query.category = Some(decoded);
                    }
                }
                "filter" => {
                    if decoded == "discount" {
                        query.discount_only = true;
                    }
                }
                "stock" => query.in_stock_only = decoded == "1" || decoded == "on",
                "sort" => query.sort = SortOrder::from_param(&decoded),
                _ => {}
            }
        }

        query
    }

    /// The active filter predicates, in application order.
    pub fn filters(&self) -> Vec<Filter> {
        let mut filters = Vec::new();

        if !self.term.is_empty() {
            filters.push(Filter::Text(self.term.clone()));
        }
        if let Some(cat) = &self.category {
            filters.push(Filter::Category(cat.clone()));
        }
        if self.in_stock_only {
            filters.push(Filter::InStock);
        }
        if self.discount_only {
            filters.push(Filter::Discounted);
        }

        filters
    }
}

/// Decode a percent-encoded query value, with `+` as space.
///
/// Bytes are accumulated before UTF-8 decoding so multi-byte sequences
/// (Persian category names in particular) survive the round trip.
pub fn percent_decode(s: &str) -> String {
    let mut bytes = Vec::with_capacity(s.len());
    let mut input = s.bytes().peekable();

    while let Some(b) = input.next() {
        match b {
            b'%' => {
                let hi = input.next();
                let lo = input.next();
                match (hi, lo) {
                    (Some(hi), Some(lo)) => {
                        let hex = [hi, lo];
                        match u8::from_str_radix(std::str::from_utf8(&hex).unwrap_or(""), 16) {
                            Ok(byte) => bytes.push(byte),
                            Err(_) => {
                                bytes.push(b'%');
                                bytes.extend_from_slice(&hex);
                            }
                        }
                    }
                    _ => bytes.push(b'%'),
                }
            }
            b'+' => bytes.push(b' '),
            other => bytes.push(other),
        }
    }

    String::from_utf8_lossy(&bytes).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let query = ListingQuery::from_query_string("");
        assert_eq!(query, ListingQuery::default());
        assert_eq!(query.sort, SortOrder::Newest);
        assert!(query.filters().is_empty());
    }

    #[test]
    fn test_recognized_parameters() {
        let query =
            ListingQuery::from_query_string("q=usb+cable&cat=accessories&filter=discount&sort=cheap");

        assert_eq!(query.term, "usb cable");
        assert_eq!(query.category.as_deref(), Some("accessories"));
        assert!(query.discount_only);
        assert!(!query.in_stock_only);
        assert_eq!(query.sort, SortOrder::Cheapest);
        assert_eq!(query.filters().len(), 3);
    }

    #[test]
    fn test_unknown_parameters_ignored() {
        let query = ListingQuery::from_query_string("page=3&utm_source=x&sort=expensive");
        assert_eq!(query.sort, SortOrder::MostExpensive);
        assert!(query.term.is_empty());
    }

    #[test]
    fn test_unrecognized_filter_value() {
        let query = ListingQuery::from_query_string("filter=clearance");
        assert!(!query.discount_only);
    }

    #[test]
    fn test_sort_fallback() {
        assert_eq!(SortOrder::from_param("cheap"), SortOrder::Cheapest);
        assert_eq!(SortOrder::from_param("expensive"), SortOrder::MostExpensive);
        assert_eq!(SortOrder::from_param("new"), SortOrder::Newest);
        assert_eq!(SortOrder::from_param("whatever"), SortOrder::Newest);
    }

    #[test]
    fn test_percent_decode_multibyte() {
        // "لوازم جانبی" percent-encoded as a browser submits it.
        let encoded = "%D9%84%D9%88%D8%A7%D8%B2%D9%85+%D8%AC%D8%A7%D9%86%D8%A8%DB%8C";
        assert_eq!(percent_decode(encoded), "لوازم جانبی");
    }

    #[test]
    fn test_percent_decode_malformed() {
        assert_eq!(percent_decode("100%"), "100%");
        assert_eq!(percent_decode("a%zzb"), "a%zzb");
    }

    #[test]
    fn test_category_in_query() {
        let query = ListingQuery::from_query_string(
            "cat=%D9%84%D9%88%D8%A7%D8%B2%D9%85",
        );
        assert_eq!(query.category.as_deref(), Some("لوازم"));
    }
}
