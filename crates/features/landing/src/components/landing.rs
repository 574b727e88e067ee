use crate::components::{IconMark, SiteFooter, SiteHeader};
use crate::content::{CallToAction, FeatureCard, Features, Hero, Icon, Region, landing_page};
use dioxus::prelude::*;

/// Landing page: header, hero, features, call-to-action and footer.
#[component]
pub fn LandingBody() -> Element {
    let page = landing_page();

    rsx! {
        div { class: "min-h-screen bg-gradient-to-br from-gray-900 to-slate-950 text-gray-100 font-sans antialiased",
            SiteHeader {}
            HeroSection { hero: page.hero }
            FeaturesSection { features: page.features }
            CallToActionSection { cta: page.cta }
            SiteFooter { footer: page.footer }
        }
    }
}

#[component]
pub fn HeroSection(hero: Hero) -> Element {
    rsx! {
        section {
            id: Region::Hero.id(),
            class: "relative overflow-hidden py-24 px-4 sm:px-6 lg:px-8 text-center bg-gray-900/70",
            div { class: "relative max-w-4xl mx-auto z-10",
                h1 { class: "text-4xl md:text-5xl lg:text-6xl font-extrabold text-white mb-6 leading-tight drop-shadow-2xl",
                    {hero.headline}
                    span { class: "text-blue-400", {hero.highlight} }
                }
                p { class: "text-lg md:text-xl text-gray-300 max-w-2xl mx-auto opacity-90 font-medium leading-relaxed",
                    {hero.lead}
                }
                div { class: "flex flex-col sm:flex-row gap-4 justify-center mt-8",
                    a {
                        class: "bg-blue-600 text-white px-8 py-4 rounded-lg text-lg font-semibold hover:bg-blue-700 transition-colors flex items-center justify-center shadow-lg transform hover:-translate-y-1",
                        href: hero.primary.href(),
                        {hero.primary.label}
                        IconMark { icon: Icon::ArrowRight, class: "ml-2 w-5 h-5" }
                    }
                    a {
                        class: "border-2 border-blue-600 text-blue-300 px-8 py-4 rounded-lg text-lg font-semibold hover:bg-slate-800 transition-colors shadow-lg transform hover:-translate-y-1",
                        href: hero.secondary.href(),
                        {hero.secondary.label}
                    }
                }
            }
        }
    }
}

#[component]
pub fn FeaturesSection(features: Features) -> Element {
    rsx! {
        section {
            id: Region::Features.id(),
            class: "py-24 px-4 sm:px-6 lg:px-8 bg-gradient-to-br from-gray-900/80 to-slate-950/80",
            div { class: "max-w-6xl mx-auto",
                div { class: "text-center mb-16",
                    h2 { class: "text-3xl md:text-4xl font-bold text-white mb-4", {features.heading} }
                    p { class: "text-lg text-gray-300 max-w-2xl mx-auto", {features.intro} }
                }
                div { class: "grid md:grid-cols-3 gap-8",
                    for card in features.cards {
                        FeatureCardView { key: "{card.title}", card }
                    }
                }
            }
        }
    }
}

#[component]
pub fn FeatureCardView(card: FeatureCard) -> Element {
    let badge = card.accent.badge_class();
    let icon_class = card.accent.icon_class();

    rsx! {
        article { class: "text-center p-6 bg-slate-800 rounded-lg border border-slate-700 shadow-2xl transform hover:-translate-y-2 hover:scale-105 transition-all duration-300 ease-in-out",
            div { class: badge,
                IconMark { icon: card.icon, class: icon_class }
            }
            h3 { class: "text-xl font-semibold text-white mb-2", {card.title} }
            p { class: "text-gray-300", {card.description} }
        }
    }
}

#[component]
pub fn CallToActionSection(cta: CallToAction) -> Element {
    rsx! {
        section { id: Region::CallToAction.id(), class: "py-24 bg-gradient-to-r from-blue-900 to-blue-950",
            div { class: "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 text-center",
                h2 { class: "text-3xl md:text-4xl font-bold text-white mb-4", {cta.headline} }
                p { class: "text-lg text-blue-100 mb-8 max-w-2xl mx-auto", {cta.text} }
                a {
                    class: "bg-blue-300 text-slate-900 px-8 py-4 rounded-lg text-lg font-semibold hover:bg-blue-200 transition-colors inline-flex items-center shadow-lg transform hover:-translate-y-1",
                    href: cta.action.href(),
                    {cta.action.label}
                    IconMark { icon: Icon::ArrowRight, class: "ml-2 w-5 h-5" }
                }
            }
        }
    }
}
