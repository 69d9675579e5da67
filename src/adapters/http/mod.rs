//! HTTP adapters - REST API implementations.

pub mod ledger;

pub use ledger::{ledger_router, LedgerAppState};

use axum::Router;
use http::HeaderValue;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Full application router: ledger routes plus tracing and CORS.
///
/// An empty origin list allows any origin. Origins that are not valid header
/// values are skipped with a warning.
pub fn app_router(state: LedgerAppState, cors_origins: &[String]) -> Router {
    ledger_router()
        .layer(cors_layer(cors_origins))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let cors = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    if origins.is_empty() {
        return cors.allow_origin(Any);
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Skipping invalid CORS origin");
                None
            }
        })
        .collect();
    cors.allow_origin(allowed)
}
