//! Landing page sections: category tiles and featured rows.

use bazar_catalog::catalog::Product;

use super::cards::{render_category_card, render_product_card};

/// Render the category tiles section.
pub fn render_categories(categories: &[String]) -> String {
    let tiles: String = categories
        .iter()
        .map(|cat| render_category_card(cat))
        .collect();

    format!(
        r#"<section class="cats" data-section="categories">
    <h2>دسته‌بندی‌ها</h2>
    <div class="grid">{}</div>
</section>"#,
        tiles
    )
}

/// Render one featured row (deals or newest) with a static heading.
pub fn render_featured_row(heading: &str, products: &[Product]) -> String {
    let cards: String = products.iter().map(render_product_card).collect();

    format!(
        r#"<section class="featured" data-section="featured">
    <h2>{}</h2>
    <div class="grid">{}</div>
</section>"#,
        heading, cards
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use bazar_catalog::catalog::parse_products;

    #[test]
    fn test_categories_render_as_tiles() {
        let html = render_categories(&["x".to_string(), "y".to_string()]);
        assert_eq!(html.matches("class=\"card cat\"").count(), 2);
    }

    #[test]
    fn test_featured_row() {
        let products =
            parse_products(br#"[{"slug": "a", "title": "t", "price_toman": 1000}]"#).unwrap();
        let html = render_featured_row("جدیدترین‌ها", &products);
        assert!(html.contains("جدیدترین‌ها"));
        assert_eq!(html.matches("class=\"card product\"").count(), 1);
    }
}
