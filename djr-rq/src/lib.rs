//! djr-rq library - Request Relay module
//!
//! Relays audience song requests: catalog search on the read side, Google
//! Form submission on the write side. One outbound call per operation, no
//! retry, no state of its own.

use axum::Router;

use crate::services::{FormClient, ItunesClient};

pub mod api;
pub mod services;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Catalog search client (read side)
    pub itunes: ItunesClient,
    /// Destination form client (write side)
    pub form: FormClient,
}

impl AppState {
    /// Create new application state
    pub fn new(itunes: ItunesClient, form: FormClient) -> Self {
        Self { itunes, form }
    }
}

/// Build application router
///
/// Cross-origin headers are permissive: the relay fronts a public static
/// page and carries no credentials. They are set on every response so the
/// explicit OPTIONS route can answer preflight with 204 itself.
pub fn build_router(state: AppState) -> Router {
    use axum::http::{header, HeaderValue};
    use axum::routing::{get, post};
    use tower_http::set_header::SetResponseHeaderLayer;

    Router::new()
        .route("/api/search", get(api::search_songs))
        .route(
            "/api/request",
            post(api::submit_request)
                .options(api::preflight)
                .fallback(api::method_not_allowed),
        )
        .merge(api::health_routes())
        .with_state(state)
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static("GET,POST,OPTIONS"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static("Content-Type"),
        ))
}
