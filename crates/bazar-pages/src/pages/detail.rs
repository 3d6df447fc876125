//! Product detail page.

use bazar_catalog::catalog::Product;

use crate::sections::{render_gallery, render_info, render_not_found, GALLERY_SCRIPT};
use crate::store::StoreProfile;

use super::storefront_shell;

/// Render the detail page for a resolved slug. `None` renders the
/// not-found state inside the regular shell.
pub fn render_detail(product: Option<&Product>, store: &StoreProfile) -> String {
    match product {
        Some(product) => {
            let mut body = String::new();
            body.push_str(r#"<div class="detail" id="p">"#);
            body.push('\n');
            body.push_str(&render_gallery(product));
            body.push('\n');
            body.push_str(&render_info(product, store));
            body.push_str("\n</div>\n");
            body.push_str(GALLERY_SCRIPT);

            let title = format!("{} | {}", product.title, store.name);
            storefront_shell(&title, store).render(&body)
        }
        None => {
            let title = format!("محصول یافت نشد | {}", store.name);
            storefront_shell(&title, store).render(&render_not_found())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bazar_catalog::catalog::parse_products;

    #[test]
    fn test_detail_renders_gallery_and_info() {
        let products = parse_products(
            r#"[{"slug": "usb-c", "title": "کابل USB-C", "category": "کابل",
                 "price_toman": 120000, "discount_percent": 25, "in_stock": true,
                 "images": ["a.jpg", "b.jpg"]}]"#
            .as_bytes(),
        )
        .unwrap();

        let html = render_detail(Some(&products[0]), &StoreProfile::default());
        assert!(html.contains("کابل USB-C"));
        assert!(html.contains("mainImage"));
        assert!(html.contains("سفارش در واتساپ"));
        assert!(html.contains("90,000 تومان"));
        assert!(html.contains("25% تخفیف"));
    }

    #[test]
    fn test_detail_not_found() {
        let html = render_detail(None, &StoreProfile::default());
        assert!(html.contains("محصول یافت نشد."));
        assert!(!html.contains("mainImage"));
    }
}
