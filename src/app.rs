//! Application wiring: settings, model, pipeline and HTTP server.

use crate::ai::GeminiModel;
use crate::api::{self, AppState};
use crate::pipeline::AiPipeline;
use crate::settings::Settings;
use crate::Result;
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

pub struct App {
    settings: Settings,
    router: Router,
}

impl App {
    /// Build the app with the Gemini model named in `settings`.
    pub fn new(settings: Settings) -> Result<Self> {
        let model = GeminiModel::new_with_client(
            settings.api_key.clone(),
            settings.model_name.clone(),
            settings.request_timeout,
            reqwest::Client::new(),
        );
        info!("Model provider: Gemini (model: {})", model.model());

        Self::with_pipeline(settings, AiPipeline::new(Arc::new(model)))
    }

    /// Build the app around an existing pipeline.
    ///
    /// This is primarily useful for integration tests and local harnesses that
    /// need to inject mocks.
    pub fn with_pipeline(settings: Settings, pipeline: AiPipeline) -> Result<Self> {
        let state = AppState::new(pipeline);
        let router = api::router(state).layer(api::cors_layer(&settings.allowed_origins)?);

        Ok(Self { settings, router })
    }

    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Bind `host:port` and serve until Ctrl+C.
    pub async fn run(self, host: &str) -> Result<()> {
        let listener = TcpListener::bind((host, self.settings.port)).await?;
        self.serve(listener).await
    }

    /// Serve on an already bound listener until Ctrl+C.
    pub async fn serve(self, listener: TcpListener) -> Result<()> {
        info!("Listening on http://{}", listener.local_addr()?);

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        info!("Server stopped");
        Ok(())
    }
}

/// Resolves when Ctrl+C is pressed.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
