//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::provide_meta_context;
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::glyphs::Glyphs;
use crate::pages::{balloons::BalloonsPage, not_found::NotFoundPage, portfolio::PortfolioPage};
use crate::routes::{BALLOONS_SEGMENT, ELLIE_PIPER_SEGMENT};

/// Root application component.
///
/// Provides the glyph renderer and maps each `AppRoute` to its page. Any
/// other location falls through to `NotFoundPage`.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(Glyphs::default());

    view! {
        <Router>
            <Routes fallback=|| view! { <NotFoundPage/> }>
                <Route path=StaticSegment("") view=PortfolioPage/>
                <Route
                    path=(StaticSegment(ELLIE_PIPER_SEGMENT), StaticSegment(BALLOONS_SEGMENT))
                    view=BalloonsPage
                />
            </Routes>
        </Router>
    }
}
