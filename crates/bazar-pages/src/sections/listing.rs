//! Listing page sections: filter controls, result grid, count line.

use bazar_catalog::catalog::Product;
use bazar_catalog::search::{ListingQuery, SortOrder};

use super::cards::render_product_card;

/// Render the control bar, reflecting the current query state.
///
/// The controls are a plain GET form back to the listing route, so the
/// rendered page is always reproducible from its URL alone.
pub fn render_controls(categories: &[String], query: &ListingQuery) -> String {
    let category_options: String = categories
        .iter()
        .map(|cat| {
            let selected = if query.category.as_deref() == Some(cat.as_str()) {
                " selected"
            } else {
                ""
            };
            let cat = html_escape(cat);
            format!(r#"<option value="{cat}"{selected}>{cat}</option>"#)
        })
        .collect();

    let sort_options: String = SortOrder::ALL
        .iter()
        .map(|order| {
            let selected = if *order == query.sort { " selected" } else { "" };
            format!(
                r#"<option value="{}"{}>{}</option>"#,
                order.as_param(),
                selected,
                order.display_name()
            )
        })
        .collect();

    format!(
        r#"<form class="controls" action="/products" method="get" data-section="controls">
    <input type="search" name="q" value="{term}" placeholder="جستجوی محصول...">
    <select name="cat" aria-label="دسته">
        <option value="">همه دسته‌ها</option>
        {category_options}
    </select>
    <select name="sort" aria-label="مرتب‌سازی">
        {sort_options}
    </select>
    <label><input type="checkbox" name="stock" value="1"{stock}> فقط موجود</label>
    <label><input type="checkbox" name="filter" value="discount"{discount}> فقط تخفیف‌دار</label>
    <button type="submit">اعمال</button>
</form>"#,
        term = html_escape(&query.term),
        category_options = category_options,
        sort_options = sort_options,
        stock = checked(query.in_stock_only),
        discount = checked(query.discount_only),
    )
}

/// Render the result grid with its count line.
pub fn render_results(products: &[Product], total: usize) -> String {
    let cards: String = products.iter().map(render_product_card).collect();

    format!(
        r#"<section class="results" data-section="results">
    <div class="count" id="count">{total} محصول</div>
    <div class="grid" id="list">{cards}</div>
</section>"#
    )
}

/// Inline script resubmitting the form when any control changes, mirroring
/// the immediate re-render the controls had as a client-side view.
pub const CONTROLS_SCRIPT: &str = r#"<script>
document.querySelectorAll('.controls select, .controls input[type="checkbox"]').forEach(el => {
    el.addEventListener('change', () => el.form.submit());
});
</script>"#;

fn checked(on: bool) -> &'static str {
    if on {
        " checked"
    } else {
        ""
    }
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
