//! Portfolio tile for a single design card.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::catalog::DesignCard;
use crate::glyphs::use_glyphs;
use crate::navigation::NavigationTarget;

/// Glyph shown inside the "Live" badge on external cards.
pub const LIVE_GLYPH: &str = "open_in_new";
pub const LIVE_LABEL: &str = "Live";
pub const COMING_SOON_TEXT: &str = "More designs coming soon...";

const TILE_CLASS: &str = "design-tile";

#[cfg(test)]
#[path = "design_card_test.rs"]
mod design_card_test;

/// A card wrapped in the navigation element its target calls for.
///
/// Internal targets go through the router (`<A>`), so the page swaps without
/// a reload. External targets open in a new browsing context with opener and
/// referrer stripped.
#[component]
pub fn DesignTile(card: &'static DesignCard) -> impl IntoView {
    match &card.target {
        NavigationTarget::Internal(route) => view! {
            <A href=route.path() attr:class=TILE_CLASS>
                <TileBody card=card/>
            </A>
        }
        .into_any(),
        NavigationTarget::External(url) => view! {
            <a
                class=TILE_CLASS
                href=url.as_str()
                target=card.target.target_attr()
                rel=card.target.rel_attr()
            >
                <TileBody card=card/>
            </a>
        }
        .into_any(),
    }
}

#[component]
fn TileBody(card: &'static DesignCard) -> impl IntoView {
    let live = card.target.shows_live_badge();

    view! {
        <div class="design-tile__thumb">
            <img class="design-tile__image" src=card.thumbnail alt=card.title/>
            {live.then(|| view! { <LiveBadge/> })}
        </div>
        <div class="design-tile__content">
            <h2 class="design-tile__title">{card.title}</h2>
            <p class="design-tile__description design-tile__description--clamp-2">
                {card.description}
            </p>
            <TagChips tags=card.tags/>
        </div>
    }
}

#[component]
fn LiveBadge() -> impl IntoView {
    let glyphs = use_glyphs();

    view! {
        <span class="design-tile__live">
            {glyphs.render(LIVE_GLYPH)}
            {LIVE_LABEL}
        </span>
    }
}

/// Tag chips in source order. An empty list renders an empty row.
#[component]
pub fn TagChips(tags: &'static [&'static str]) -> impl IntoView {
    view! {
        <div class="design-tile__tags">
            {tags
                .iter()
                .map(|tag| view! { <span class="design-tile__tag">{*tag}</span> })
                .collect::<Vec<_>>()}
        </div>
    }
}

/// Dashed trailing tile that closes the grid.
#[component]
pub fn ComingSoonTile() -> impl IntoView {
    view! {
        <div class="design-tile design-tile--placeholder">
            <span class="design-tile__placeholder-text">{COMING_SOON_TEXT}</span>
        </div>
    }
}
