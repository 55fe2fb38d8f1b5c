//! HTTP routes served by axum.

pub mod chat;
pub mod error;
pub mod health;
pub mod json_body;

pub use error::{ApiError, ApiResult};

use crate::pipeline::AiPipeline;
use crate::{Error, Result};
use axum::{
    http::{header, HeaderValue, Method},
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

/// Shared state for all HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    pub pipeline: Arc<AiPipeline>,
}

impl AppState {
    pub fn new(pipeline: AiPipeline) -> Self {
        Self {
            pipeline: Arc::new(pipeline),
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/chat", post(chat::chat))
        .route("/health", get(health::health))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .with_state(state)
}

/// CORS policy for the browser front-end.
///
/// A `*` entry allows any origin without credentials; an explicit origin list
/// also allows credentials.
pub fn cors_layer(allowed_origins: &[String]) -> Result<CorsLayer> {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    if allowed_origins.iter().any(|o| o == "*") {
        Ok(layer.allow_origin(AllowOrigin::any()))
    } else {
        let origins = allowed_origins
            .iter()
            .map(|origin| {
                HeaderValue::from_str(origin)
                    .map_err(|e| Error::Config(format!("Invalid CORS origin '{}': {}", origin, e)))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(layer
            .allow_origin(AllowOrigin::list(origins))
            .allow_credentials(true))
    }
}
