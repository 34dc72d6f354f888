//! Static content records rendered by the pages.
//!
//! Both record sets are fixed at compile time. `validate` is run once at
//! startup (and in tests) to catch malformed entries before they reach the
//! browser.

use std::collections::HashSet;

use crate::navigation::{NavigationError, NavigationTarget};
use crate::routes::AppRoute;

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

/// One portfolio entry on the index page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DesignCard {
    pub title: &'static str,
    /// Short summary. The tile marks it for a two-line clamp.
    pub description: &'static str,
    pub thumbnail: &'static str,
    /// Chip labels in display order.
    pub tags: &'static [&'static str],
    pub target: NavigationTarget,
}

/// One service tile on the balloon landing page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceCard {
    /// Glyph identifier resolved by the injected glyph renderer.
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub static DESIGNS: &[DesignCard] = &[
    DesignCard {
        title: "Ellie & Piper - Balloon Services",
        description: "Luxury balloon installation landing page with glassmorphism cards and full-screen hero.",
        thumbnail: "https://images.unsplash.com/photo-1530103862676-de8c9debad1d?w=600&h=400&fit=crop",
        tags: &["Landing Page", "Luxury", "Full-Screen"],
        target: NavigationTarget::Internal(AppRoute::ElliePiperBalloons),
    },
    DesignCard {
        title: "VB Scheduler",
        description: "Full-stack volleyball scheduling app with real-time availability coordination, heatmap visualization, and mobile-first design.",
        thumbnail: "https://images.unsplash.com/photo-1612872087720-bb876e2e67d1?w=600&h=400&fit=crop",
        tags: &["Full-Stack", "FastAPI", "Real-Time"],
        target: NavigationTarget::external("https://vbscheduler.onrender.com"),
    },
];

pub static SERVICES: [ServiceCard; 3] = [
    ServiceCard {
        icon: "corporate_fare",
        title: "Corporate Events",
        description: "Elevate your brand identity with sophisticated, custom-branded displays that leave a lasting impression on clients and partners.",
    },
    ServiceCard {
        icon: "favorite",
        title: "Bridal Showers",
        description: "Create whimsical and elegant arrangements tailored to your specific theme and floral vision for your special day.",
    },
    ServiceCard {
        icon: "child_care",
        title: "Baby Showers",
        description: "Celebrate new beginnings with soft palettes, playful designs, and organic textures that capture the joy of the occasion.",
    },
];

/// What is wrong with a single catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogProblem {
    #[error("title is empty")]
    EmptyTitle,
    #[error("thumbnail is empty")]
    EmptyThumbnail,
    #[error("glyph identifier is empty")]
    EmptyIcon,
    #[error("a tag is empty")]
    EmptyTag,
    #[error("duplicate key `{0}`")]
    DuplicateKey(String),
    #[error(transparent)]
    Target(#[from] NavigationError),
}

/// A problem located at `index` in one of the record lists.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{list} #{index} ({title}): {problem}")]
pub struct CatalogIssue {
    pub list: &'static str,
    pub index: usize,
    pub title: &'static str,
    pub problem: CatalogProblem,
}

/// Check the shipped design and service lists.
pub fn validate() -> Vec<CatalogIssue> {
    let mut issues = validate_designs(DESIGNS);
    issues.extend(validate_services(&SERVICES));
    issues
}

/// Check design cards. Targets are re-parsed from their raw path and flag.
/// Card hrefs double as list keys, so they must be unique.
pub fn validate_designs(cards: &[DesignCard]) -> Vec<CatalogIssue> {
    let mut issues = Vec::new();
    let mut seen = HashSet::new();

    for (index, card) in cards.iter().enumerate() {
        let mut report = |problem: CatalogProblem| {
            issues.push(CatalogIssue { list: "design", index, title: card.title, problem });
        };

        if card.title.trim().is_empty() {
            report(CatalogProblem::EmptyTitle);
        }
        if card.thumbnail.trim().is_empty() {
            report(CatalogProblem::EmptyThumbnail);
        }
        if card.tags.iter().any(|tag| tag.trim().is_empty()) {
            report(CatalogProblem::EmptyTag);
        }
        if let Err(e) = NavigationTarget::from_parts(card.target.href(), card.target.is_external()) {
            report(CatalogProblem::Target(e));
        }
        if !seen.insert(card.target.href().to_owned()) {
            report(CatalogProblem::DuplicateKey(card.target.href().to_owned()));
        }
    }

    issues
}

/// Check service cards. Titles double as list keys.
pub fn validate_services(services: &[ServiceCard]) -> Vec<CatalogIssue> {
    let mut issues = Vec::new();
    let mut seen = HashSet::new();

    for (index, service) in services.iter().enumerate() {
        let mut report = |problem: CatalogProblem| {
            issues.push(CatalogIssue { list: "service", index, title: service.title, problem });
        };

        if service.title.trim().is_empty() {
            report(CatalogProblem::EmptyTitle);
        }
        if service.icon.trim().is_empty() {
            report(CatalogProblem::EmptyIcon);
        }
        if !seen.insert(service.title) {
            report(CatalogProblem::DuplicateKey(service.title.to_owned()));
        }
    }

    issues
}
