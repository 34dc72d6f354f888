//! Ellie & Piper balloon services landing page.
//!
//! Static marketing layout: hero with nav overlay, service tiles, footer, and
//! a floating link back to the portfolio. Only the logo and the back link
//! navigate; every other link and button is presentational.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use crate::catalog::SERVICES;
use crate::components::logo::{Logo, LogoVariant};
use crate::components::service_card::ServiceRow;
use crate::glyphs::use_glyphs;
use crate::routes::AppRoute;

#[cfg(test)]
#[path = "balloons_test.rs"]
mod balloons_test;

pub const HERO_IMAGE_URL: &str = "https://lh3.googleusercontent.com/aida-public/AB6AXuAGSlEuwqfYhoQQyFAU7zIMFM5YIMb1LeKnFgWcToTZI2Vk8Y7RCTMuUDf2XFg0AgepeT9hDELjBz95Z0vD7PCiCskksXYmqGY3iE5e0I3c8y_IvhtZNU2ZYs0tC6PTBGeLr7q7MtGJ4XI5m47zzH0X3dir5iDJMo1OoxRpgEUYdxWwMf6JyaH4sjLWagq32Usq28D5ZfpA_q4Hh17VzLSiwsmwPngGWflFBXyGePVu3p8Ch1Brj41QGdJSLC8_YoI-pUW6EXwRKcA";
/// Darkens the top edge and the bottom half so white text stays legible.
pub const HERO_OVERLAY_STYLE: &str =
    "background: linear-gradient(to bottom, rgba(0,0,0,0.2) 0%, rgba(0,0,0,0) 40%, rgba(0,0,0,0.7) 100%)";

pub const HEADING: &str = "Luxury Balloon Installations";
pub const SUBHEADING: &str = "Elevating corporate events, bridal showers, and baby showers across Greater Boston with editorial design.";
pub const CTA_LABEL: &str = "Book a Consultation";
pub const CART_LABEL: &str = "Cart";

pub const NAV_LOGO: LogoVariant = LogoVariant::NavGoldChampagne;

/// A top-bar link. Exactly one is marked active.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub active: bool,
}

pub const NAV_LINKS: [NavLink; 4] = [
    NavLink { label: "Shop", active: false },
    NavLink { label: "Rentals", active: false },
    NavLink { label: "Balloon Services", active: true },
    NavLink { label: "Inspiration", active: false },
];

pub const SOCIAL_GLYPHS: [&str; 3] = ["camera", "alternate_email", "location_on"];
pub const LEGAL_LINKS: [&str; 3] = ["Privacy Policy", "Terms of Service", "Contact Us"];
pub const COPYRIGHT: &str = "© 2024 Ellie and Piper. All rights reserved.";

pub const BACK_TARGET: AppRoute = AppRoute::Portfolio;
pub const BACK_GLYPH: &str = "arrow_back";
pub const BACK_LABEL: &str = "Portfolio";

/// Inline style carrying the hero photograph.
pub fn hero_background_style() -> String {
    format!("background-image: url('{HERO_IMAGE_URL}')")
}

fn nav_link_class(link: NavLink) -> &'static str {
    if link.active {
        "balloons-nav__link balloons-nav__link--active"
    } else {
        "balloons-nav__link"
    }
}

#[component]
pub fn BalloonsPage() -> impl IntoView {
    log::debug!("balloons page: rendering {} services", SERVICES.len());

    view! {
        <Title text=AppRoute::ElliePiperBalloons.title()/>
        <div class="balloons-page">
            <section class="balloons-hero">
                <div class="balloons-hero__backdrop">
                    <div class="balloons-hero__image" style=hero_background_style()></div>
                    <div class="balloons-hero__overlay" style=HERO_OVERLAY_STYLE></div>
                </div>

                <NavBar/>

                <div class="balloons-hero__intro">
                    <h1 class="balloons-hero__heading">{HEADING}</h1>
                    <p class="balloons-hero__subheading">{SUBHEADING}</p>
                </div>

                <div class="balloons-hero__bottom">
                    <div class="balloons-hero__cta-row">
                        <button class="balloons-hero__cta" type="button">{CTA_LABEL}</button>
                    </div>
                    <div class="balloons-hero__services">
                        <ServiceRow services=SERVICES.as_slice()/>
                    </div>
                </div>
            </section>

            <Footer/>
            <BackToPortfolio/>
        </div>
    }
}

#[component]
fn NavBar() -> impl IntoView {
    view! {
        <header class="balloons-nav">
            <A href=AppRoute::Portfolio.path() attr:class="balloons-nav__home">
                <Logo variant=NAV_LOGO class="balloons-nav__logo"/>
            </A>
            <nav class="balloons-nav__links">
                {NAV_LINKS
                    .iter()
                    .map(|link| view! { <a class=nav_link_class(*link) href="#">{link.label}</a> })
                    .collect::<Vec<_>>()}
                <button class="balloons-nav__cart" type="button">{CART_LABEL}</button>
            </nav>
        </header>
    }
}

#[component]
fn Footer() -> impl IntoView {
    let glyphs = use_glyphs();

    view! {
        <footer class="balloons-footer">
            <div class="balloons-footer__social">
                {SOCIAL_GLYPHS
                    .iter()
                    .map(|glyph| view! { <a class="balloons-footer__icon" href="#">{glyphs.render(glyph)}</a> })
                    .collect::<Vec<_>>()}
            </div>
            <div class="balloons-footer__legal">
                {LEGAL_LINKS
                    .iter()
                    .map(|label| view! { <a class="balloons-footer__link" href="#">{*label}</a> })
                    .collect::<Vec<_>>()}
            </div>
            <p class="balloons-footer__copyright">{COPYRIGHT}</p>
        </footer>
    }
}

/// Fixed bottom-left pill that returns to the portfolio through the router.
#[component]
fn BackToPortfolio() -> impl IntoView {
    let arrow = use_glyphs().render(BACK_GLYPH);

    view! {
        <A href=BACK_TARGET.path() attr:class="balloons-page__back">
            {arrow}
            {BACK_LABEL}
        </A>
    }
}
