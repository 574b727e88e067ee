mod footer;
mod header;
mod icon;
mod landing;
mod pages;

pub use footer::SiteFooter;
pub use header::SiteHeader;
pub use icon::IconMark;
pub use landing::{CallToActionSection, FeatureCardView, FeaturesSection, HeroSection, LandingBody};
pub use pages::{CompliancePage, NotFoundPage, PageBody, RegulationsPage, SignupPage};
