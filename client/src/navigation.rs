//! Navigation targets for portfolio cards.
//!
//! DESIGN
//! ======
//! A card either transitions the in-app router or opens an external site in a
//! fresh browsing context. `NavigationTarget` makes that a tagged variant so
//! an internal target can only name a route that exists, and the card
//! component has exactly one place to branch.

use std::borrow::Cow;

use crate::routes::AppRoute;

#[cfg(test)]
#[path = "navigation_test.rs"]
mod navigation_test;

/// `target` attribute for links that open a new browsing context.
pub const NEW_CONTEXT_TARGET: &str = "_blank";
/// `rel` attribute that stops the opened page from reaching back through
/// `window.opener` or seeing a referrer.
pub const NEW_CONTEXT_REL: &str = "noopener noreferrer";

/// Errors from converting a raw `(path, external)` pair into a target.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NavigationError {
    #[error("no route matches internal path `{0}`")]
    UnknownRoute(String),
    #[error("external target `{0}` is not an absolute http(s) URL")]
    NotAbsoluteUrl(String),
}

/// Absolute URL of a site outside this application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalUrl(Cow<'static, str>);

impl ExternalUrl {
    /// Wrap a compile-time URL. Checked later by `catalog::validate`.
    pub const fn from_static(url: &'static str) -> Self {
        Self(Cow::Borrowed(url))
    }

    /// Parse a runtime URL, rejecting anything that is not absolute http(s).
    pub fn parse(url: &str) -> Result<Self, NavigationError> {
        Self::check(url)?;
        Ok(Self(Cow::Owned(url.to_owned())))
    }

    /// Verify `url` has an `http`/`https` scheme and a non-empty host.
    pub fn check(url: &str) -> Result<(), NavigationError> {
        let not_absolute = || NavigationError::NotAbsoluteUrl(url.to_owned());

        if url.chars().any(char::is_whitespace) {
            return Err(not_absolute());
        }
        let (scheme, rest) = url.split_once("://").ok_or_else(not_absolute)?;
        if !scheme.eq_ignore_ascii_case("http") && !scheme.eq_ignore_ascii_case("https") {
            return Err(not_absolute());
        }
        let authority = rest.split(['/', '?', '#']).next().unwrap_or_default();
        let host = authority.rsplit('@').next().unwrap_or_default();
        let host = host.split(':').next().unwrap_or_default();
        if host.is_empty() {
            return Err(not_absolute());
        }
        Ok(())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Where a card sends the visitor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationTarget {
    /// Router transition within the current browsing context.
    Internal(AppRoute),
    /// External site opened in a new browsing context.
    External(ExternalUrl),
}

impl NavigationTarget {
    /// Convert the flat record shape (`path` plus an `external` flag that
    /// defaults to false) into a target.
    pub fn from_parts(path: &str, external: bool) -> Result<Self, NavigationError> {
        if external {
            ExternalUrl::parse(path).map(Self::External)
        } else {
            AppRoute::resolve(path)
                .map(Self::Internal)
                .ok_or_else(|| NavigationError::UnknownRoute(path.to_owned()))
        }
    }

    pub const fn external(url: &'static str) -> Self {
        Self::External(ExternalUrl::from_static(url))
    }

    pub fn href(&self) -> &str {
        match self {
            Self::Internal(route) => route.path(),
            Self::External(url) => url.as_str(),
        }
    }

    pub const fn is_external(&self) -> bool {
        matches!(self, Self::External(_))
    }

    /// `target` attribute for the wrapping anchor, if any.
    pub const fn target_attr(&self) -> Option<&'static str> {
        match self {
            Self::Internal(_) => None,
            Self::External(_) => Some(NEW_CONTEXT_TARGET),
        }
    }

    /// `rel` attribute for the wrapping anchor, if any.
    pub const fn rel_attr(&self) -> Option<&'static str> {
        match self {
            Self::Internal(_) => None,
            Self::External(_) => Some(NEW_CONTEXT_REL),
        }
    }

    /// External cards carry a "Live" badge over their thumbnail.
    pub const fn shows_live_badge(&self) -> bool {
        self.is_external()
    }
}
