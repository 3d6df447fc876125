//! Canonical product shape and wire-format normalization.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::CatalogError;
use crate::toman::{FinalPrice, Toman};

/// A product as it appears in the data document.
///
/// The feed is hand-maintained and loosely typed: prices arrive as numbers
/// or numeric strings, `in_stock` as anything truthy, and images in three
/// different shapes. Every field defaults to JSON null and is coerced
/// during normalization; a malformed field degrades to a default value,
/// it never rejects the record.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductRecord {
    #[serde(default)]
    pub slug: Value,
    #[serde(default)]
    pub title: Value,
    #[serde(default)]
    pub short_desc: Value,
    #[serde(default)]
    pub category: Value,
    #[serde(default)]
    pub price_toman: Value,
    #[serde(default)]
    pub discount_percent: Value,
    #[serde(default)]
    pub in_stock: Value,
    #[serde(default)]
    pub images: Value,
    #[serde(default)]
    pub image: Value,
}

/// The canonical in-memory product, produced once at data-load time and
/// consumed read-only everywhere else.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Product {
    /// Unique identifier used in detail-page URLs.
    pub slug: String,
    /// Display name.
    pub title: String,
    /// Short description for cards and the detail page.
    pub short_desc: Option<String>,
    /// Category name used for grouping and filtering.
    pub category: Option<String>,
    /// Base price in whole toman.
    pub price_toman: Toman,
    /// Discount in percent, clamped into 0..=100. Zero means no discount.
    pub discount_percent: u8,
    pub in_stock: bool,
    /// Ordered image URLs; the first entry is the primary image.
    pub images: Vec<String>,
}

impl Product {
    /// Build the canonical shape from a raw feed record.
    pub fn from_record(record: &ProductRecord) -> Self {
        let price = coerce_number(&record.price_toman).round().max(0.0) as i64;
        let discount = coerce_number(&record.discount_percent).round().clamp(0.0, 100.0) as u8;

        Self {
            slug: coerce_string(&record.slug),
            title: coerce_string(&record.title),
            short_desc: coerce_optional(&record.short_desc),
            category: coerce_optional(&record.category),
            price_toman: Toman::new(price),
            discount_percent: discount,
            in_stock: coerce_bool(&record.in_stock),
            images: normalize_images(record),
        }
    }

    /// The price pair to display: old + new when discounted, new only
    /// otherwise.
    pub fn final_price(&self) -> FinalPrice {
        FinalPrice::compute(self.price_toman, self.discount_percent)
    }

    pub fn has_discount(&self) -> bool {
        self.discount_percent > 0
    }

    /// The primary image, when the product has any image at all.
    pub fn primary_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }
}

/// Parse a product document (a JSON array of records) into canonical
/// products. The only fatal case is a document that is not a record list.
pub fn parse_products(bytes: &[u8]) -> Result<Vec<Product>, CatalogError> {
    let records: Vec<ProductRecord> = serde_json::from_slice(bytes)?;
    Ok(normalize_products(&records))
}

/// Normalize a batch of raw records.
pub fn normalize_products(records: &[ProductRecord]) -> Vec<Product> {
    records.iter().map(Product::from_record).collect()
}

/// Look up a product by its URL slug.
///
/// Slugs are stringified during normalization, so a numeric slug in the
/// feed still matches the (always string) URL parameter.
pub fn find_by_slug<'a>(products: &'a [Product], slug: &str) -> Option<&'a Product> {
    products.iter().find(|p| p.slug == slug)
}

fn coerce_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        _ => String::new(),
    }
}

fn coerce_optional(value: &Value) -> Option<String> {
    let s = coerce_string(value);
    if s.is_empty() {
        None
    } else {
        Some(s)
    }
}

fn coerce_number(value: &Value) -> f64 {
    match value {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => s.trim().parse().unwrap_or(0.0),
        _ => 0.0,
    }
}

fn coerce_bool(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        _ => false,
    }
}

/// Image URLs with the three-way fallback the feed relies on: an `images`
/// array, then an `images` string, then an `image` string.
fn normalize_images(record: &ProductRecord) -> Vec<String> {
    match &record.images {
        Value::Array(entries) => {
            return entries
                .iter()
                .map(coerce_string)
                .filter(|s| !s.is_empty())
                .collect();
        }
        Value::String(s) if !s.trim().is_empty() => return vec![s.trim().to_string()],
        _ => {}
    }

    match &record.image {
        Value::String(s) if !s.trim().is_empty() => vec![s.trim().to_string()],
        _ => Vec::new(),
    }
}
