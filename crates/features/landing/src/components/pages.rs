//! Destination pages linked from the landing page.

use crate::components::{IconMark, LandingBody, SiteFooter, SiteHeader};
use crate::content::{Icon, landing_page};
use crate::routes::Route;
use dioxus::prelude::*;
use regscope_domain::areas::ComplianceAreas;
use regscope_domain::regulations::{CATALOGUE, RegulationGroup, SUPPORTED_REGULATIONS};

/// Body of any route.
#[component]
pub fn PageBody(route: Route) -> Element {
    match route {
        Route::Landing => rsx! { LandingBody {} },
        Route::Signup => rsx! { SignupPage {} },
        Route::Compliance => rsx! { CompliancePage {} },
        Route::Regulations => rsx! { RegulationsPage {} },
    }
}

#[component]
fn Shell(heading: &'static str, lead: &'static str, children: Element) -> Element {
    rsx! {
        div { class: "min-h-screen bg-gradient-to-br from-gray-900 to-slate-950 text-gray-100 font-sans antialiased",
            SiteHeader {}
            main { class: "max-w-6xl mx-auto py-20 px-4 sm:px-6 lg:px-8",
                h1 { class: "text-3xl md:text-4xl font-bold text-white mb-4", {heading} }
                p { class: "text-lg text-gray-300 mb-12 max-w-2xl", {lead} }
                {children}
            }
            SiteFooter { footer: landing_page().footer }
        }
    }
}

#[component]
pub fn SignupPage() -> Element {
    let cta = landing_page().cta;

    rsx! {
        Shell {
            heading: "Start Your Free Trial",
            lead: "Create a RegScope workspace and run your first AML screening in minutes.",
            div { class: "p-8 bg-slate-800 rounded-lg border border-slate-700 shadow-2xl text-center",
                h2 { class: "text-2xl font-semibold text-white mb-4", {cta.headline} }
                p { class: "text-gray-300 mb-8", {cta.text} }
                a {
                    class: "bg-blue-600 text-white px-8 py-4 rounded-lg text-lg font-semibold hover:bg-blue-700 transition-colors inline-flex items-center",
                    href: Route::Compliance.path(),
                    "Explore Compliance Coverage"
                    IconMark { icon: Icon::ArrowRight, class: "ml-2 w-5 h-5" }
                }
            }
        }
    }
}

#[component]
pub fn CompliancePage() -> Element {
    rsx! {
        Shell {
            heading: "Compliance Coverage",
            lead: "Automated checks across the frameworks that matter to payment, lending and trading platforms.",
            div { class: "grid md:grid-cols-2 gap-8",
                div { class: "p-6 bg-slate-800 rounded-lg border border-slate-700",
                    h2 { class: "text-xl font-semibold text-white mb-4", "Supported Regulations" }
                    ul { class: "space-y-2 text-gray-300",
                        for name in SUPPORTED_REGULATIONS {
                            li { key: "{name}", {*name} }
                        }
                    }
                }
                div { class: "p-6 bg-slate-800 rounded-lg border border-slate-700",
                    h2 { class: "text-xl font-semibold text-white mb-4", "Compliance Areas" }
                    ul { class: "space-y-2 text-gray-300",
                        for (_, key, label) in ComplianceAreas::LABELS {
                            li { key: "{key}", "data-area": key, {label} }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn RegulationsPage() -> Element {
    rsx! {
        Shell {
            heading: "Regulation Catalogue",
            lead: "Financial regulations RegScope monitors, grouped by category.",
            div { class: "grid md:grid-cols-2 gap-8",
                for group in CATALOGUE {
                    CatalogueGroup { key: "{group.key}", group: *group }
                }
            }
        }
    }
}

#[component]
fn CatalogueGroup(group: RegulationGroup) -> Element {
    rsx! {
        div { id: group.key, class: "p-6 bg-slate-800 rounded-lg border border-slate-700",
            h2 { class: "text-xl font-semibold text-blue-300 mb-4", {group.title} }
            ul { class: "space-y-3",
                for regulation in group.regulations {
                    li { key: "{regulation.id}", "data-regulation": regulation.id,
                        p { class: "text-white font-medium", {regulation.name} }
                        p { class: "text-sm text-gray-400", {regulation.jurisdiction} }
                    }
                }
            }
        }
    }
}

#[component]
pub fn NotFoundPage() -> Element {
    rsx! {
        Shell {
            heading: "Page Not Found",
            lead: "The page you are looking for does not exist.",
            a { class: "text-blue-300 hover:text-blue-200", href: Route::Landing.path(), "Back to RegScope" }
        }
    }
}
