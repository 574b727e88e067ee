//! # RegScope public pages
//!
//! Server-side rendered landing page and the destination pages it links to.
//! All content is static; rendering performs no I/O and always yields the
//! same document for the same route.
//!
//! ```rust
//! use regscope_landing::{Route, render_page};
//!
//! let html = render_page(Route::Landing);
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! assert!(html.contains("Why Choose RegScope?"));
//! ```

pub mod components;
pub mod content;
pub mod routes;
#[cfg(feature = "server")]
pub mod server;

use components::{NotFoundPage, PageBody};
use dioxus::prelude::*;

pub use content::{Icon, LandingPage, Region, landing_page};
pub use routes::{NavLink, Route, Target};

pub const STYLESHEET: &str = "https://cdn.jsdelivr.net/npm/tailwindcss@2.2.19/dist/tailwind.min.css";
const NOT_FOUND_TITLE: &str = "RegScope | Page Not Found";

/// Renders `route` as a complete HTML document.
#[must_use]
pub fn render_page(route: Route) -> String {
    document(route.title(), rsx! { PageBody { route } })
}

/// Renders the 404 page.
#[must_use]
pub fn render_not_found() -> String {
    document(NOT_FOUND_TITLE, rsx! { NotFoundPage {} })
}

/// Wraps the rendered body in the HTML5 document shell. `title` is always one
/// of the constant route titles and is emitted as-is.
fn document(title: &'static str, body: Element) -> String {
    let body = dioxus_ssr::render_element(body);

    format!(
        "<!DOCTYPE html><html lang=\"en\"><head><meta charset=\"utf-8\">\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\
         <title>{title}</title><link rel=\"stylesheet\" href=\"{STYLESHEET}\"></head>\
         <body>{body}</body></html>"
    )
}
