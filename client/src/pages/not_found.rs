//! Fallback page for locations outside the route table.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

use crate::routes::{AppRoute, NOT_FOUND_TITLE};

#[component]
pub fn NotFoundPage() -> impl IntoView {
    let path = use_location().pathname.get_untracked();
    log::warn!("no route matches {path}");

    view! {
        <Title text=NOT_FOUND_TITLE/>
        <div class="not-found-page">
            <h1 class="not-found-page__title">"Page not found"</h1>
            <p class="not-found-page__path">{path}</p>
            <A href=AppRoute::Portfolio.path() attr:class="not-found-page__home">
                "Back to portfolio"
            </A>
        </div>
    }
}
