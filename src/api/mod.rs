mod error;
mod handlers;

pub use error::ApiError;
pub use handlers::{encode_skipped, LOGSHEET_NO_HEADER, SKIPPED_DOCKETS_HEADER, WELCOME};

use axum::{
    http::{HeaderName, HeaderValue},
    routing::{any, get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

use crate::config::ServerConfig;
use crate::registry::Registry;

pub fn create_router(registry: Registry) -> Router {
    create_router_with_config(registry, &ServerConfig::default())
}

pub fn create_router_with_config(registry: Registry, config: &ServerConfig) -> Router {
    Router::new()
        .route("/", any(handlers::welcome))
        .route("/health", get(handlers::health))
        // Dockets
        .route("/docket", post(handlers::create_docket))
        .route("/docket/{order_no}", get(handlers::get_docket))
        .route("/dockets", get(handlers::list_dockets))
        // Logsheets
        .route("/logsheet", post(handlers::create_logsheet))
        .route("/logsheet/{logsheet_no}", get(handlers::get_logsheet))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors_layer(config)),
        )
        .with_state(registry)
}

fn cors_layer(config: &ServerConfig) -> CorsLayer {
    match config.allowed_origins() {
        Some(origins) if !origins.is_empty() => {
            let origins: Vec<HeaderValue> = origins
                .iter()
                .filter_map(|o| match HeaderValue::from_str(o) {
                    Ok(value) => Some(value),
                    Err(_) => {
                        tracing::warn!("Ignoring invalid CORS origin: {}", o);
                        None
                    }
                })
                .collect();
            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(Any)
                .allow_headers(Any)
                .expose_headers([
                    HeaderName::from_static(LOGSHEET_NO_HEADER),
                    HeaderName::from_static(SKIPPED_DOCKETS_HEADER),
                ])
        }
        _ => CorsLayer::permissive(),
    }
}
