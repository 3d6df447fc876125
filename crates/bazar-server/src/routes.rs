//! Request routing and page dispatch.

use std::convert::Infallible;
use std::sync::Arc;

use bytes::Bytes;
use http_body_util::{BodyExt, Full};
use hyper::body::Incoming;
use hyper::{Method, Request, Response, StatusCode};
use tracing::{debug, error};

use bazar_catalog::catalog::find_by_slug;
use bazar_catalog::search::{percent_decode, ListingQuery};
use bazar_pages::{render_detail, render_error_page, render_home, render_listing};

use crate::config::ServerConfig;
use crate::source::fetch_products;

type BoxBody = http_body_util::combinators::BoxBody<Bytes, hyper::Error>;

/// Shared per-server state handed to every connection task.
pub struct AppState {
    pub config: ServerConfig,
    pub client: reqwest::Client,
}

/// The storefront's routes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    Listing,
    Detail,
    NotFound,
}

impl Route {
    pub fn from_path(path: &str) -> Self {
        match path {
            "/" | "/index.html" => Route::Home,
            "/products" => Route::Listing,
            "/product" => Route::Detail,
            _ => Route::NotFound,
        }
    }
}

/// Handle one request end to end: fetch the collection fresh, run the
/// route's page renderer, wrap the result in an HTML response.
pub async fn handle_request(
    state: Arc<AppState>,
    req: Request<Incoming>,
) -> Result<Response<BoxBody>, Infallible> {
    debug!(method = %req.method(), uri = %req.uri(), "handling request");

    if req.method() != Method::GET {
        return Ok(status_page(
            StatusCode::METHOD_NOT_ALLOWED,
            render_error_page(
                "درخواست نامعتبر",
                "این صفحه فقط با GET در دسترس است.",
                &state.config.store,
            ),
        ));
    }

    let path = req.uri().path().to_string();
    let query = req.uri().query().unwrap_or("").to_string();
    let route = Route::from_path(&path);

    if route == Route::NotFound {
        return Ok(status_page(
            StatusCode::NOT_FOUND,
            render_error_page("صفحه پیدا نشد", "آدرس وارد شده وجود ندارد.", &state.config.store),
        ));
    }

    // Fetched per request. A failure here is fatal for the page; no
    // stale catalog is ever shown.
    let products = match fetch_products(&state.client, &state.config.products_url).await {
        Ok(products) => products,
        Err(err) => {
            error!(url = %state.config.products_url, error = %err, "product source unavailable");
            return Ok(status_page(
                StatusCode::BAD_GATEWAY,
                render_error_page(
                    "خطا در دریافت محصولات",
                    "فهرست محصولات در دسترس نیست. لطفاً بعداً دوباره تلاش کنید.",
                    &state.config.store,
                ),
            ));
        }
    };

    let html = match route {
        Route::Home => render_home(&products, &state.config.store),
        Route::Listing => {
            let listing_query = ListingQuery::from_query_string(&query);
            render_listing(&products, &listing_query, &state.config.store)
        }
        Route::Detail => {
            let slug = slug_param(&query);
            let product = slug.as_deref().and_then(|s| find_by_slug(&products, s));
            let status = if product.is_some() {
                StatusCode::OK
            } else {
                StatusCode::NOT_FOUND
            };
            return Ok(status_page(
                status,
                render_detail(product, &state.config.store),
            ));
        }
        Route::NotFound => unreachable!(),
    };

    Ok(status_page(StatusCode::OK, html))
}

/// Extract and decode the `slug` parameter from a raw query string.
fn slug_param(query: &str) -> Option<String> {
    query
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == "slug")
        .map(|(_, value)| percent_decode(value))
        .filter(|slug| !slug.is_empty())
}

fn status_page(status: StatusCode, html: String) -> Response<BoxBody> {
    let mut response = Response::new(full_body(html));
    *response.status_mut() = status;
    response.headers_mut().insert(
        hyper::header::CONTENT_TYPE,
        hyper::header::HeaderValue::from_static("text/html; charset=utf-8"),
    );
    response
}

fn full_body<T: Into<Bytes>>(chunk: T) -> BoxBody {
    Full::new(chunk.into())
        .map_err(|never| match never {})
        .boxed()
}
