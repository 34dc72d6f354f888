//! Portfolio index page listing every design card.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::catalog::DESIGNS;
use crate::components::design_card::{ComingSoonTile, DesignTile};
use crate::routes::AppRoute;

pub const HEADING: &str = "Design Portfolio";
pub const SUBHEADING: &str = "A collection of web design explorations and implementations.";

/// Header plus a grid with one tile per design and a trailing placeholder.
#[component]
pub fn PortfolioPage() -> impl IntoView {
    log::debug!("portfolio page: rendering {} designs", DESIGNS.len());

    view! {
        <Title text=AppRoute::Portfolio.title()/>
        <div class="portfolio-page">
            <header class="portfolio-page__header">
                <h1 class="portfolio-page__title">{HEADING}</h1>
                <p class="portfolio-page__subtitle">{SUBHEADING}</p>
            </header>

            <main class="portfolio-page__main">
                <div class="portfolio-page__grid">
                    {DESIGNS
                        .iter()
                        .map(|card| view! { <DesignTile card=card/> })
                        .collect::<Vec<_>>()}
                    <ComingSoonTile/>
                </div>
            </main>
        </div>
    }
}
