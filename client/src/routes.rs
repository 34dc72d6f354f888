//! Route table for the portfolio site.
//!
//! SYSTEM CONTEXT
//! ==============
//! `AppRoute` is the single source of truth for which paths exist. The Leptos
//! router in `app` matches the segment constants below, and the static host
//! uses `AppRoute::resolve` to decide whether an unknown file path is a page.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

/// First path segment of the Ellie & Piper landing page.
pub const ELLIE_PIPER_SEGMENT: &str = "ellie-piper";
/// Second path segment of the Ellie & Piper landing page.
pub const BALLOONS_SEGMENT: &str = "balloons";

/// Document title shown for locations outside the route table.
pub const NOT_FOUND_TITLE: &str = "Page Not Found";

/// Every page the router can render.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AppRoute {
    /// `/`, the design card index.
    Portfolio,
    /// `/ellie-piper/balloons`, the balloon services landing page.
    ElliePiperBalloons,
}

impl AppRoute {
    pub const ALL: [Self; 2] = [Self::Portfolio, Self::ElliePiperBalloons];

    /// Canonical location path.
    pub const fn path(self) -> &'static str {
        match self {
            Self::Portfolio => "/",
            Self::ElliePiperBalloons => "/ellie-piper/balloons",
        }
    }

    /// Document title set while the page is mounted.
    pub const fn title(self) -> &'static str {
        match self {
            Self::Portfolio => "Design Portfolio",
            Self::ElliePiperBalloons => "Ellie & Piper - Balloons",
        }
    }

    /// Map a browser location to a route.
    ///
    /// Query strings and fragments are ignored, and a single trailing slash is
    /// tolerated on non-root paths.
    pub fn resolve(location: &str) -> Option<Self> {
        let path = location.split(['?', '#']).next().unwrap_or_default();
        let path = if path.len() > 1 { path.strip_suffix('/').unwrap_or(path) } else { path };
        Self::ALL.into_iter().find(|route| route.path() == path)
    }
}
