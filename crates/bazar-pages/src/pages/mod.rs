//! Complete storefront pages assembled from sections.

mod detail;
mod home;
mod listing;

pub use detail::render_detail;
pub use home::render_home;
pub use listing::render_listing;

use crate::shell::{HeadContent, Shell};
use crate::store::StoreProfile;

/// Build the shared storefront shell: RTL document, site header with the
/// store logo and a search form, embedded styles.
pub(crate) fn storefront_shell(title: &str, store: &StoreProfile) -> Shell {
    let head = HeadContent::new(html_escape(title)).with_style(STOREFRONT_STYLES);

    let header = format!(
        r#"<body>
<header class="site-header">
    <a class="logo" href="/">{}</a>
    <form class="header-search" action="/products" method="get">
        <input type="search" name="q" placeholder="جستجو...">
        <button type="submit">جستجو</button>
    </form>
</header>
<main>
"#,
        html_escape(&store.name)
    );

    Shell::new(head).with_body_start(header)
}

/// Render a standalone error page. Used when the product source cannot be
/// reached; it carries no catalog state, so nothing stale is shown.
pub fn render_error_page(title: &str, message: &str, store: &StoreProfile) -> String {
    let section = format!(
        r#"<section class="error-state" data-section="error">
    <h1>{}</h1>
    <p>{}</p>
    <a class="btn btn--primary" href="/">بازگشت به خانه</a>
</section>"#,
        html_escape(title),
        html_escape(message)
    );

    storefront_shell(title, store).render(&section)
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

const STOREFRONT_STYLES: &str = r#"
:root {
    --bg: #f6f7f9;
    --card: #ffffff;
    --ink: #1d2433;
    --muted: #6b7280;
    --accent: #0f766e;
    --danger: #b91c1c;
    --line: #e5e7eb;
}
* { box-sizing: border-box; }
body {
    margin: 0;
    background: var(--bg);
    color: var(--ink);
    font-family: Tahoma, "Segoe UI", sans-serif;
    line-height: 1.6;
}
main { max-width: 1080px; margin: 0 auto; padding: 16px; }
.site-header {
    display: flex;
    align-items: center;
    justify-content: space-between;
    gap: 12px;
    padding: 12px 16px;
    background: var(--card);
    border-bottom: 1px solid var(--line);
}
.logo { font-weight: bold; font-size: 1.2rem; color: var(--accent); text-decoration: none; }
.header-search { display: flex; gap: 6px; }
.header-search input { padding: 6px 10px; border: 1px solid var(--line); border-radius: 8px; }
.grid {
    display: grid;
    grid-template-columns: repeat(auto-fill, minmax(180px, 1fr));
    gap: 12px;
}
.card {
    background: var(--card);
    border: 1px solid var(--line);
    border-radius: 12px;
    padding: 12px;
    text-decoration: none;
    color: inherit;
    display: block;
}
.product__img, .gallery__main {
    display: flex;
    align-items: center;
    justify-content: center;
    background: var(--bg);
    border-radius: 8px;
    min-height: 140px;
    overflow: hidden;
    color: var(--muted);
}
.product__img img, .gallery__main img { width: 100%; height: 100%; object-fit: cover; }
.product__title { margin: 8px 0 4px; font-weight: bold; }
.row { display: flex; align-items: center; justify-content: space-between; gap: 8px; }
.price__old { color: var(--muted); text-decoration: line-through; font-size: 0.85rem; }
.price__new { color: var(--accent); font-weight: bold; }
.badge {
    font-size: 0.75rem;
    padding: 2px 8px;
    border-radius: 999px;
    background: var(--bg);
    color: var(--muted);
    white-space: nowrap;
}
.badge--off { background: #fef3c7; color: #92400e; }
.badge--out { background: #fee2e2; color: var(--danger); }
.cats h2, .featured h2 { margin: 20px 0 10px; }
.cat { text-align: center; }
.cat__icon { font-size: 1.4rem; color: var(--accent); }
.controls {
    display: flex;
    flex-wrap: wrap;
    align-items: center;
    gap: 10px;
    background: var(--card);
    border: 1px solid var(--line);
    border-radius: 12px;
    padding: 12px;
    margin-bottom: 14px;
}
.controls input[type="search"], .controls select {
    padding: 6px 10px;
    border: 1px solid var(--line);
    border-radius: 8px;
}
.count { color: var(--muted); margin-bottom: 10px; }
.detail { display: grid; grid-template-columns: 1fr 1fr; gap: 16px; }
@media (max-width: 720px) { .detail { grid-template-columns: 1fr; } }
.thumbs { display: flex; gap: 8px; margin-top: 8px; }
.thumb {
    border: 2px solid transparent;
    border-radius: 8px;
    padding: 0;
    width: 64px;
    height: 64px;
    overflow: hidden;
    cursor: pointer;
    background: var(--bg);
}
.thumb img { width: 100%; height: 100%; object-fit: cover; }
.thumb--active { border-color: var(--accent); }
.divider { border-top: 1px solid var(--line); margin: 12px 0; }
.muted { color: var(--muted); font-size: 0.9rem; }
.actions { display: flex; flex-wrap: wrap; gap: 8px; }
.btn {
    display: inline-block;
    padding: 8px 16px;
    border: 1px solid var(--line);
    border-radius: 8px;
    background: var(--card);
    color: inherit;
    text-decoration: none;
    cursor: pointer;
}
.btn--primary { background: var(--accent); border-color: var(--accent); color: #fff; }
.btn--ghost { background: transparent; }
.not-found { text-align: center; padding: 40px; color: var(--muted); }
.error-state { text-align: center; padding: 48px 16px; }
button[type="submit"] {
    padding: 6px 14px;
    border: none;
    border-radius: 8px;
    background: var(--accent);
    color: #fff;
    cursor: pointer;
}
"#;
