use axum::{
    error_handling::HandleErrorLayer,
    http::{Method, StatusCode},
    middleware,
    response::Response,
    routing::{get, post},
    BoxError, Router,
};
use std::any::Any;
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::{
    catch_panic::CatchPanicLayer,
    compression::CompressionLayer,
    cors::{self, AllowHeaders, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    config::{Config, CorsConfig},
    error::error_response,
    handlers::ai,
    middleware::logging,
    routes::{health, thoughts},
    state::AppState,
};

pub fn build_router(state: Arc<AppState>) -> Router {
    let config = Arc::clone(&state.config);

    with_middleware(routes(), &config).with_state(state)
}

fn routes() -> Router<Arc<AppState>> {
    Router::new()
        // Liveness
        .route("/", get(health::home))
        .route("/health", get(health::health_check))
        // Echo only
        .route("/save", post(thoughts::save_thought))
        // Context + provider fan-out
        .route("/ai", post(ai::generate))
}

/// Wrap `router` in the service middleware stack.
///
/// Panics are caught inside the CORS layer so a 500 still carries the
/// allow-origin headers.
pub fn with_middleware<S>(router: Router<S>, config: &Config) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    let server_timeout = Duration::from_secs(config.server.request_timeout_secs);

    router
        .layer(middleware::from_fn(logging::log_request))
        .layer(
            ServiceBuilder::new()
                .layer(HandleErrorLayer::new(handle_timeout))
                .timeout(server_timeout),
        )
        .layer(CompressionLayer::new())
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(build_cors_layer(&config.cors))
        .layer(TraceLayer::new_for_http())
}

pub fn build_cors_layer(config: &CorsConfig) -> CorsLayer {
    if !config.enabled {
        return CorsLayer::permissive();
    }

    let layer = CorsLayer::new().allow_methods([Method::GET, Method::POST, Method::OPTIONS]);

    if config.origins.iter().any(|o| o == "*") {
        // wildcard origins cannot be combined with credentials
        layer.allow_origin(cors::Any).allow_headers(cors::Any)
    } else {
        let parsed_origins: Vec<axum::http::HeaderValue> = config
            .origins
            .iter()
            .filter_map(|o| o.parse::<axum::http::HeaderValue>().ok())
            .collect();

        layer
            .allow_origin(parsed_origins)
            .allow_headers(AllowHeaders::mirror_request())
            .allow_credentials(config.allow_credentials)
    }
}

async fn handle_timeout(err: BoxError) -> Response {
    if err.is::<tower::timeout::error::Elapsed>() {
        tracing::warn!("Request exceeded server timeout");
        error_response(StatusCode::REQUEST_TIMEOUT, "Request timed out")
    } else {
        tracing::error!(error = %err, "Unhandled middleware error");
        error_response(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
    }
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = err
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| err.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    tracing::error!(panic = %detail, "Handler panicked");

    error_response(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
}
