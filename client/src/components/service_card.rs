//! Glass tile for one balloon service.

use leptos::prelude::*;

use crate::catalog::ServiceCard;
use crate::glyphs::use_glyphs;

#[component]
pub fn ServiceTile(service: &'static ServiceCard) -> impl IntoView {
    let glyphs = use_glyphs();

    view! {
        <div class="service-tile">
            <div class="service-tile__icon">{glyphs.render(service.icon)}</div>
            <div class="service-tile__text">
                <h3 class="service-tile__title">{service.title}</h3>
                <p class="service-tile__description">{service.description}</p>
            </div>
        </div>
    }
}

/// Service tiles in list order.
#[component]
pub fn ServiceRow(services: &'static [ServiceCard]) -> impl IntoView {
    view! {
        <div class="service-row">
            {services
                .iter()
                .map(|service| view! { <ServiceTile service=service/> })
                .collect::<Vec<_>>()}
        </div>
    }
}

#[cfg(test)]
#[path = "service_card_test.rs"]
mod service_card_test;
