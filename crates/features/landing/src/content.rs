//! Typed, compile-time content of the landing page.
//!
//! Components read from [`landing_page`]; tests can assert against the same
//! values without parsing HTML.

use crate::routes::{NavLink, Route};

/// Icons used by the page, rendered as `lucide-*` class markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::IntoStaticStr)]
#[strum(serialize_all = "kebab-case")]
pub enum Icon {
    FileText,
    Shield,
    Brain,
    ArrowRight,
}

impl Icon {
    /// Lucide icon name, e.g. `file-text`.
    #[must_use]
    pub fn name(self) -> &'static str {
        self.into()
    }

    #[must_use]
    pub fn class(self) -> String {
        format!("lucide lucide-{}", self.name())
    }
}

/// Colour family of a feature card badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum Accent {
    Blue,
    Green,
    Purple,
}

impl Accent {
    #[must_use]
    pub fn badge_class(self) -> String {
        let colour: &'static str = self.into();
        format!(
            "bg-{colour}-900/60 w-16 h-16 rounded-full flex items-center justify-center mx-auto mb-4 border border-{colour}-700/30 shadow-inner"
        )
    }

    #[must_use]
    pub fn icon_class(self) -> String {
        let colour: &'static str = self.into();
        format!("text-{colour}-300 w-8 h-8")
    }
}

/// Page regions in render order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    Header,
    Hero,
    Features,
    CallToAction,
    Footer,
}

impl Region {
    pub const ORDER: [Self; 5] =
        [Self::Header, Self::Hero, Self::Features, Self::CallToAction, Self::Footer];

    /// Value of the region's `id` attribute.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Header => "header",
            Self::Hero => "hero",
            Self::Features => "features",
            Self::CallToAction => "cta",
            Self::Footer => "footer",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hero {
    pub headline: &'static str,
    pub highlight: &'static str,
    pub lead: &'static str,
    pub primary: NavLink,
    pub secondary: NavLink,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureCard {
    pub icon: Icon,
    pub accent: Accent,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Features {
    pub heading: &'static str,
    pub intro: &'static str,
    pub cards: [FeatureCard; 3],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallToAction {
    pub headline: &'static str,
    pub text: &'static str,
    pub action: NavLink,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkGroup {
    pub title: &'static str,
    pub links: [NavLink; 3],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Footer {
    pub brand: &'static str,
    pub tagline: &'static str,
    pub groups: [LinkGroup; 3],
    pub copyright: &'static str,
}

/// Everything the landing page shows, below the shared header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LandingPage {
    pub hero: Hero,
    pub features: Features,
    pub cta: CallToAction,
    pub footer: Footer,
}

/// Links shown in the shared header, after the brand mark.
pub const HEADER_LINKS: [NavLink; 3] = [
    NavLink::to("Compliance", Route::Compliance),
    NavLink::to("Regulations", Route::Regulations),
    NavLink::to("Sign Up", Route::Signup),
];

const LANDING: LandingPage = LandingPage {
    hero: Hero {
        headline: "AI-Powered Global",
        highlight: " FinTech Compliance",
        lead: "Comprehensive regulatory intelligence for financial services. Navigate PSD2, AML/KYC, \
               MiFID II, PCI-DSS, and global fintech regulations with AI-powered compliance \
               monitoring and risk assessment.",
        primary: NavLink::to("Start Free Trial", Route::Signup),
        secondary: NavLink::to("Learn More", Route::Compliance),
    },
    features: Features {
        heading: "Why Choose RegScope?",
        intro: "Enterprise-grade compliance intelligence designed specifically for fintech and \
                financial services.",
        cards: [
            FeatureCard {
                icon: Icon::FileText,
                accent: Accent::Blue,
                title: "FinTech Compliance Analysis",
                description: "AI-powered analysis of policies, agreements, and documentation \
                              against PSD2, MiFID II, AML/KYC, and global fintech regulations.",
            },
            FeatureCard {
                icon: Icon::Shield,
                accent: Accent::Green,
                title: "Multi-Jurisdiction Monitoring",
                description: "Real-time monitoring across EU, US, UK, Singapore, and global \
                              financial regulations with automated compliance reporting.",
            },
            FeatureCard {
                icon: Icon::Brain,
                accent: Accent::Purple,
                title: "Regulatory Risk Intelligence",
                description: "Advanced AML/KYC screening, transaction monitoring, and proactive \
                              risk identification with actionable compliance insights.",
            },
        ],
    },
    cta: CallToAction {
        headline: "Ready to Transform Your FinTech Compliance?",
        text: "Join leading financial institutions and fintech companies using RegScope for \
               global regulatory compliance.",
        action: NavLink::to("Get Started Today", Route::Signup),
    },
    footer: Footer {
        brand: "LegalGuard",
        tagline: "AI-powered legal compliance platform for modern businesses.",
        groups: [
            LinkGroup {
                title: "Product",
                links: [
                    NavLink::to("Compliance", Route::Compliance),
                    NavLink::to("Regulations", Route::Regulations),
                    NavLink::to("Pricing", Route::Signup),
                ],
            },
            LinkGroup {
                title: "Company",
                links: [
                    NavLink::placeholder("About"),
                    NavLink::placeholder("Contact"),
                    NavLink::placeholder("Support"),
                ],
            },
            LinkGroup {
                title: "Legal",
                links: [
                    NavLink::placeholder("Privacy Policy"),
                    NavLink::placeholder("Terms of Service"),
                    NavLink::placeholder("Cookie Policy"),
                ],
            },
        ],
        copyright: "\u{a9} 2024 LegalGuard. All rights reserved.",
    },
};

#[must_use]
pub const fn landing_page() -> &'static LandingPage {
    &LANDING
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::Target;

    #[test]
    fn icon_names_are_kebab_case() {
        assert_eq!(Icon::FileText.name(), "file-text");
        assert_eq!(Icon::ArrowRight.class(), "lucide lucide-arrow-right");
    }

    #[test]
    fn footer_product_links_navigate_and_the_rest_do_not() {
        let footer = landing_page().footer;
        let [product, company, legal] = footer.groups;

        assert!(product.links.iter().all(|l| l.target.is_navigable()));
        assert!(
            company.links.iter().chain(legal.links.iter()).all(|l| l.target == Target::Placeholder)
        );
    }

    #[test]
    fn region_ids_are_unique() {
        let mut ids: Vec<_> = Region::ORDER.iter().map(|r| r.id()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), Region::ORDER.len());
    }
}
