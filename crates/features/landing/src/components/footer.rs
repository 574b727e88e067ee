use crate::components::IconMark;
use crate::content::{Footer, Icon, LinkGroup, Region};
use dioxus::prelude::*;

#[component]
pub fn SiteFooter(footer: Footer) -> Element {
    rsx! {
        footer { id: Region::Footer.id(), class: "bg-gray-900 text-white py-12 border-t border-slate-800",
            div { class: "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8",
                div { class: "grid md:grid-cols-4 gap-8",
                    div {
                        div { class: "flex items-center mb-4",
                            div { class: "bg-blue-600 w-8 h-8 flex items-center justify-center rounded-lg shadow-md",
                                IconMark { icon: Icon::FileText, class: "text-white w-5 h-5" }
                            }
                            span { class: "ml-2 text-xl font-bold", {footer.brand} }
                        }
                        p { class: "text-gray-400", {footer.tagline} }
                    }
                    for group in footer.groups {
                        FooterGroup { key: "{group.title}", group }
                    }
                }
                div { class: "border-t border-slate-800 mt-8 pt-8 text-center text-gray-400",
                    p { {footer.copyright} }
                }
            }
        }
    }
}

#[component]
fn FooterGroup(group: LinkGroup) -> Element {
    rsx! {
        div {
            h3 { class: "text-lg font-semibold mb-4 text-blue-300", {group.title} }
            ul { class: "space-y-2 text-gray-400",
                for link in group.links {
                    li { key: "{link.label}",
                        a { class: "hover:text-blue-200 transition-colors", href: link.href(), {link.label} }
                    }
                }
            }
        }
    }
}
