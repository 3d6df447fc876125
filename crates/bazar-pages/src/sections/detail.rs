//! Product detail sections: gallery, info block, order links.

use bazar_catalog::catalog::Product;

use super::cards::render_badge;
use crate::store::StoreProfile;

/// Render the image gallery with an optional thumbnail switcher.
///
/// Thumbnails only appear when the product carries more than one image;
/// a single image renders without the switcher and no image at all falls
/// back to a text placeholder.
pub fn render_gallery(product: &Product) -> String {
    let main = match product.primary_image() {
        Some(src) => format!(
            r#"<img src="{}" alt="{}">"#,
            html_escape(src),
            html_escape(&product.title)
        ),
        None => "تصویر".to_string(),
    };

    let thumbs = if product.images.len() > 1 {
        let buttons: String = product
            .images
            .iter()
            .enumerate()
            .map(|(idx, src)| {
                format!(
                    r#"<button class="thumb{active}" type="button" data-src="{src}">
            <img src="{src}" alt="{alt} {n}" loading="lazy">
        </button>"#,
                    active = if idx == 0 { " thumb--active" } else { "" },
                    src = html_escape(src),
                    alt = html_escape(&product.title),
                    n = idx + 1
                )
            })
            .collect();
        format!(r#"<div class="thumbs">{}</div>"#, buttons)
    } else {
        String::new()
    };

    format!(
        r#"<div class="gallery" data-section="gallery">
    <div class="gallery__main" id="mainImage">{main}</div>
    {thumbs}
    <div class="divider"></div>
    <div class="muted">دسته: {category}</div>
    <div class="muted">وضعیت: {stock}</div>
</div>"#,
        main = main,
        thumbs = thumbs,
        category = html_escape(product.category.as_deref().unwrap_or("-")),
        stock = if product.in_stock { "موجود" } else { "ناموجود" },
    )
}

/// Render the info block: title, description, price, badge, actions.
pub fn render_info(product: &Product, store: &StoreProfile) -> String {
    let price = product.final_price();

    let old_html = if price.is_discounted() {
        format!(
            r#"<div class="price__old">{}</div>"#,
            price.old_price.display()
        )
    } else {
        String::new()
    };

    let desc = product
        .short_desc
        .as_deref()
        .unwrap_or("توضیحات محصول اینجا قرار می‌گیرد.");

    format!(
        r#"<div class="info" data-section="info">
    <h1>{title}</h1>
    <p>{desc}</p>
    <div class="row">
        <div class="price">
            {old_html}
            <div class="price__new">{new_price}</div>
        </div>
        {badge}
    </div>
    <div class="divider"></div>
    <div class="actions">
        <a class="btn btn--primary" href="/products">بازگشت به محصولات</a>
        <a class="btn" href="{whatsapp}" target="_blank" rel="noopener">سفارش در واتساپ</a>
        <a class="btn btn--ghost" href="{telegram}" target="_blank" rel="noopener">تلگرام</a>
    </div>
</div>"#,
        title = html_escape(&product.title),
        desc = html_escape(desc),
        old_html = old_html,
        new_price = price.new_price.display(),
        badge = render_badge(product),
        whatsapp = html_escape(&whatsapp_link(&product.title, store)),
        telegram = html_escape(&format!("https://t.me/{}", store.telegram_id)),
    )
}

/// Outbound WhatsApp link with the prefilled order message.
///
/// The message wording matters: links already in circulation carry it, so
/// it is reproduced verbatim with the product title spliced in.
pub fn whatsapp_link(title: &str, store: &StoreProfile) -> String {
    let message = format!("سلام، برای خرید {} راهنمایی می‌خواستم.", title);
    format!(
        "https://wa.me/{}?text={}",
        store.whatsapp_number,
        url_encode(&message)
    )
}

/// Render the not-found state shown for an unmatched slug.
pub fn render_not_found() -> String {
    r#"<div class="card not-found" data-section="info">محصول یافت نشد.</div>"#.to_string()
}

/// Inline script wiring the thumbnail switcher.
pub const GALLERY_SCRIPT: &str = r#"<script>
document.querySelectorAll('.thumb').forEach(btn => {
    btn.addEventListener('click', () => {
        const src = btn.dataset.src;
        const main = document.querySelector('#mainImage img');
        if (src && main) main.src = src;
        document.querySelectorAll('.thumb').forEach(x => x.classList.remove('thumb--active'));
        btn.classList.add('thumb--active');
    });
});
</script>"#;

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

#[cfg(test)]
mod tests {
    use super::*;
    use bazar_catalog::catalog::parse_products;

    fn product(json: &str) -> Product {
        parse_products(format!("[{}]", json).as_bytes())
            .unwrap()
            .remove(0)
    }

    #[test]
    fn test_thumbs_only_for_multiple_images() {
        let single = product(r#"{"slug": "a", "title": "t", "images": ["one.jpg"]}"#);
        assert!(!render_gallery(&single).contains("thumbs"));

        let multi = product(r#"{"slug": "a", "title": "t", "images": ["one.jpg", "two.jpg"]}"#);
        let html = render_gallery(&multi);
        assert!(html.contains("thumbs"));
        assert_eq!(html.matches("<button class=\"thumb").count(), 2);
        assert_eq!(html.matches("thumb--active").count(), 1);
    }

    #[test]
    fn test_gallery_placeholder() {
        let bare = product(r#"{"slug": "a", "title": "t"}"#);
        let html = render_gallery(&bare);
        assert!(html.contains("تصویر"));
        assert!(html.contains("دسته: -"));
    }

    #[test]
    fn test_info_uses_description_placeholder() {
        let bare = product(r#"{"slug": "a", "title": "t", "in_stock": true}"#);
        let html = render_info(&bare, &StoreProfile::default());
        assert!(html.contains("توضیحات محصول اینجا قرار می‌گیرد."));
    }

    #[test]
    fn test_whatsapp_link_carries_title() {
        let store = StoreProfile {
            whatsapp_number: "989000000000".to_string(),
            ..Default::default()
        };
        let link = whatsapp_link("USB Cable", &store);

        assert!(link.starts_with("https://wa.me/989000000000?text="));
        // The product title survives encoding; spaces become %20.
        assert!(link.contains("USB%20Cable"));
        // The Persian wording is percent-encoded, never raw.
        assert!(!link.contains("سلام"));
    }

    #[test]
    fn test_info_escapes_fields() {
        let hostile = product(r#"{"slug": "a", "title": "<b>x</b>", "short_desc": "\"quoted\""}"#);
        let html = render_info(&hostile, &StoreProfile::default());
        assert!(!html.contains("<b>x</b>"));
        assert!(html.contains("&lt;b&gt;x&lt;/b&gt;"));
        assert!(html.contains("&quot;quoted&quot;"));
    }

    #[test]
    fn test_not_found() {
        assert!(render_not_found().contains("محصول یافت نشد."));
    }
}
