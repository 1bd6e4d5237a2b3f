//! Route tables and the assembled application router.

mod api;
mod common;

pub use api::api_routes;
pub use common::common_routes;

use crate::state::AppState;
use axum::Router;
use tower::ServiceBuilder;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Full application: common routes at the root, data routes under `/api`, request tracing and
/// a body size limit from settings. With `static_dir` set, unmatched paths are served from it
/// (`/` resolves to its `index.html`).
pub fn app(state: AppState) -> Router {
    let body_limit = state.settings.body_limit_bytes;
    let static_dir = state.settings.static_dir.clone();
    let mut router = Router::new()
        .merge(common_routes(state.clone()))
        .nest("/api", api_routes(state));
    if let Some(dir) = static_dir {
        tracing::info!(dir = %dir, "serving static assets");
        router = router.fallback_service(ServeDir::new(dir));
    }
    router.layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(RequestBodyLimitLayer::new(body_limit)),
    )
}
