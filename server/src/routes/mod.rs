//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The host serves the compiled client bundle. Files that exist are served
//! as-is; every other path gets `index.html` so the in-browser router can take
//! over, with a 404 status when the path is not a known page.

pub mod site;

use std::path::Path;

use axum::Router;
use axum::handler::Handler;
use axum::http::StatusCode;
use axum::routing::get;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use self::site::SiteState;

/// Static bundle with history-API fallback, plus `/healthz`.
pub fn app(site_dir: &Path) -> Router {
    let site = SiteState::new(site_dir);
    let bundle = ServeDir::new(site_dir)
        .append_index_html_on_directories(true)
        .fallback(site::spa_index.with_state(site));

    Router::new()
        .route("/healthz", get(healthz))
        .fallback_service(bundle)
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
