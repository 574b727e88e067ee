//! Axum routes serving the rendered pages.

use crate::{Route, render_not_found, render_page};
use axum::Router;
use axum::http::StatusCode;
use axum::response::Html;
use axum::routing::get;
use tracing::debug;

/// One `GET` route per [`Route`], plus a 404 fallback.
pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Route::ALL
        .into_iter()
        .fold(Router::new(), |router, route| {
            router.route(
                route.path(),
                get(move || async move {
                    debug!(path = route.path(), "Rendering page");
                    Html(render_page(route))
                }),
            )
        })
        .fallback(not_found)
}

async fn not_found() -> (StatusCode, Html<String>) {
    (StatusCode::NOT_FOUND, Html(render_not_found()))
}
