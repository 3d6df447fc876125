//! Card renderers shared by the landing and listing grids.

use bazar_catalog::catalog::Product;

/// Render one product card linking to its detail page.
pub fn render_product_card(product: &Product) -> String {
    let price = product.final_price();

    let price_html = if price.is_discounted() {
        format!(
            r#"<div class="price">
            <div class="price__old">{}</div>
            <div class="price__new">{}</div>
        </div>"#,
            price.old_price.display(),
            price.new_price.display()
        )
    } else {
        format!(
            r#"<div class="price">
            <div class="price__new">{}</div>
        </div>"#,
            price.new_price.display()
        )
    };

    let image_html = match product.primary_image() {
        Some(src) => format!(
            r#"<img src="{}" alt="{}" loading="lazy">"#,
            html_escape(src),
            html_escape(&product.title)
        ),
        None => "تصویر".to_string(),
    };

    format!(
        r#"<a class="card product" href="/product?slug={slug}">
    <div class="product__img">{image}</div>
    <div class="product__title">{title}</div>
    <div class="row">
        {price}
        {badge}
    </div>
</a>"#,
        slug = url_encode(&product.slug),
        image = image_html,
        title = html_escape(&product.title),
        price = price_html,
        badge = render_badge(product),
    )
}

/// Stock/discount badge for a product. Out-of-stock wins over discount.
pub fn render_badge(product: &Product) -> String {
    if !product.in_stock {
        r#"<span class="badge badge--out">ناموجود</span>"#.to_string()
    } else if product.has_discount() {
        format!(
            r#"<span class="badge badge--off">{}% تخفیف</span>"#,
            product.discount_percent
        )
    } else {
        r#"<span class="badge">موجود</span>"#.to_string()
    }
}

/// Render one category tile linking to the filtered listing.
pub fn render_category_card(name: &str) -> String {
    format!(
        r#"<a class="card cat" href="/products?cat={}">
    <div class="cat__icon">#</div>
    <div class="cat__name">{}</div>
</a>"#,
        url_encode(name),
        html_escape(name)
    )
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

fn url_encode(s: &str) -> String {
    let mut result = String::with_capacity(s.len() * 3);
    for byte in s.as_bytes() {
        match byte {
            b'a'..=b'z' | b'A'..=b'Z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                result.push(*byte as char)
            }
            _ => result.push_str(&format!("%{:02X}", byte)),
        }
    }
    result
}
