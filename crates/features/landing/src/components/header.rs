use crate::components::IconMark;
use crate::content::{HEADER_LINKS, Icon, Region};
use crate::routes::{NavLink, Route};
use dioxus::prelude::*;
use regscope_domain::constants::PRODUCT_NAME;

#[component]
pub fn SiteHeader() -> Element {
    rsx! {
        header {
            id: Region::Header.id(),
            class: "bg-gray-900/90 border-b border-slate-800 sticky top-0 z-20 backdrop-blur",
            nav { class: "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 h-16 flex items-center justify-between",
                a { class: "flex items-center", href: Route::Landing.path(),
                    span { class: "bg-blue-600 w-8 h-8 flex items-center justify-center rounded-lg shadow-md",
                        IconMark { icon: Icon::FileText, class: "text-white w-5 h-5" }
                    }
                    span { class: "ml-2 text-xl font-bold text-white", {PRODUCT_NAME} }
                }
                div { class: "flex items-center gap-6",
                    for link in HEADER_LINKS {
                        HeaderLink { key: "{link.label}", link }
                    }
                }
            }
        }
    }
}

#[component]
fn HeaderLink(link: NavLink) -> Element {
    let class = if link.target.route() == Some(Route::Signup) {
        "bg-blue-600 text-white px-4 py-2 rounded-lg font-semibold hover:bg-blue-700 transition-colors"
    } else {
        "text-gray-300 hover:text-blue-200 transition-colors"
    };

    rsx! {
        a { class, href: link.href(), {link.label} }
    }
}
