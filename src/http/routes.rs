use super::handlers;
use super::state::AppState;
use axum::{
    http::{header, Method},
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Create the HTTP router with the relay route
pub fn create_router(state: AppState) -> Router {
    // Permissive CORS contract: any origin, POST/OPTIONS, Content-Type.
    // The layer answers preflight requests before they reach a handler,
    // so OPTIONS never touches the credential or the body.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Relay route: POST forwards, anything else is a 405
        .route(
            "/",
            post(handlers::relay).fallback(handlers::method_not_allowed),
        )
        // Add tracing middleware for request logging
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
