// Read-only static file routes for the page and the compiled client bundle.

use axum::Router;
use std::path::Path;
use tower_http::services::ServeDir;

/// URL prefix the client bundle is served under.
pub const BUNDLE_ROUTE: &str = "/build";

/// Serves `bundle_dir` under `/build` and `public_dir` for everything else.
///
/// Directory requests resolve to `index.html`. Only GET and HEAD are
/// answered; other methods get 405.
pub fn router(public_dir: &Path, bundle_dir: &Path) -> Router {
    Router::new()
        .nest_service(BUNDLE_ROUTE, ServeDir::new(bundle_dir))
        .fallback_service(ServeDir::new(public_dir).append_index_html_on_directories(true))
}
