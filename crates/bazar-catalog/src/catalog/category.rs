//! Category derivation.

use crate::catalog::Product;

/// Distinct non-empty category names, in order of first appearance.
///
/// The same list drives the landing-page tiles and the category select on
/// the listing page, so both surfaces always agree.
pub fn categories(products: &[Product]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for product in products {
        if let Some(cat) = &product.category {
            if !seen.iter().any(|c| c == cat) {
                seen.push(cat.clone());
            }
        }
    }
    seen
}
