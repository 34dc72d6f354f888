//! History-API fallback for client-side routes.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use axum::extract::State;
use axum::http::{StatusCode, Uri};
use axum::response::{Html, IntoResponse, Response};
use portfolio_client::routes::AppRoute;

#[derive(Clone, Debug)]
pub struct SiteState {
    index_html: Arc<PathBuf>,
}

impl SiteState {
    pub fn new(site_dir: &Path) -> Self {
        Self { index_html: Arc::new(site_dir.join("index.html")) }
    }
}

/// Status for a path that matched no bundle file: 200 when the client router
/// knows the page, 404 otherwise.
pub fn fallback_status(path: &str) -> StatusCode {
    if AppRoute::resolve(path).is_some() {
        StatusCode::OK
    } else {
        StatusCode::NOT_FOUND
    }
}

/// Serve `index.html` for a path with no matching file.
pub async fn spa_index(State(site): State<SiteState>, uri: Uri) -> Response {
    let status = fallback_status(uri.path());
    if status == StatusCode::NOT_FOUND {
        tracing::debug!(path = %uri.path(), "no client route; serving index with 404");
    }

    match tokio::fs::read_to_string(site.index_html.as_path()).await {
        Ok(html) => (status, Html(html)).into_response(),
        Err(e) => {
            tracing::error!(error = %e, path = %site.index_html.display(), "client bundle index unreadable");
            (StatusCode::INTERNAL_SERVER_ERROR, "client bundle is missing index.html").into_response()
        }
    }
}

#[cfg(test)]
#[path = "site_test.rs"]
mod tests;
