//! Public routes and the links that point at them.

/// A page the site can navigate to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Landing,
    Signup,
    Compliance,
    Regulations,
}

impl Route {
    pub const ALL: [Self; 4] = [Self::Landing, Self::Signup, Self::Compliance, Self::Regulations];

    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Landing => "/",
            Self::Signup => "/signup",
            Self::Compliance => "/compliance",
            Self::Regulations => "/regulations",
        }
    }

    /// Document title.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Landing => "RegScope | AI-Powered Global FinTech Compliance",
            Self::Signup => "RegScope | Start Your Free Trial",
            Self::Compliance => "RegScope | Compliance Coverage",
            Self::Regulations => "RegScope | Regulation Catalogue",
        }
    }

    /// Resolves a request path; a single trailing slash is tolerated.
    #[must_use]
    pub fn from_path(path: &str) -> Option<Self> {
        let trimmed = match path {
            "/" => path,
            _ => path.strip_suffix('/').unwrap_or(path),
        };
        Self::ALL.into_iter().find(|route| route.path() == trimmed)
    }
}

/// Where a link goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Route(Route),
    /// Rendered as `href="#"`; does not leave the current page.
    Placeholder,
}

impl Target {
    #[must_use]
    pub const fn href(self) -> &'static str {
        match self {
            Self::Route(route) => route.path(),
            Self::Placeholder => "#",
        }
    }

    #[must_use]
    pub const fn is_navigable(self) -> bool {
        matches!(self, Self::Route(_))
    }

    #[must_use]
    pub const fn route(self) -> Option<Route> {
        match self {
            Self::Route(route) => Some(route),
            Self::Placeholder => None,
        }
    }
}

/// A labelled link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub target: Target,
}

impl NavLink {
    #[must_use]
    pub const fn to(label: &'static str, route: Route) -> Self {
        Self { label, target: Target::Route(route) }
    }

    #[must_use]
    pub const fn placeholder(label: &'static str) -> Self {
        Self { label, target: Target::Placeholder }
    }

    #[must_use]
    pub const fn href(&self) -> &'static str {
        self.target.href()
    }
}
