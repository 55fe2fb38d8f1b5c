use super::client::GeminiHttpClient;
use super::types::{Content, GenerateContentRequest, GenerateContentResponse, Part};
use crate::ai::AiModel;
use crate::{Error, Result};
use async_trait::async_trait;
use std::time::Duration;

/// [`AiModel`] backed by Gemini's `generateContent` endpoint.
pub struct GeminiModel {
    http: GeminiHttpClient,
}

impl GeminiModel {
    pub fn new(api_key: String, model: String) -> Self {
        Self::new_with_client(api_key, model, None, reqwest::Client::new())
    }

    pub fn new_with_client(
        api_key: String,
        model: String,
        timeout: Option<Duration>,
        client: reqwest::Client,
    ) -> Self {
        Self {
            http: GeminiHttpClient::new_with_client(api_key, model, timeout, client),
        }
    }

    /// Point the model at a different API host.
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.http = self.http.with_base_url(base_url);
        self
    }

    pub fn model(&self) -> &str {
        self.http.model()
    }
}

#[async_trait]
impl AiModel for GeminiModel {
    async fn generate_text(&self, message: &str, conversation_id: Option<&str>) -> Result<String> {
        tracing::debug!(
            model = self.http.model(),
            conversation_id = conversation_id.unwrap_or("-"),
            "Sending generateContent request to Gemini"
        );

        let request = GenerateContentRequest {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part::Text {
                    text: message.to_string(),
                }],
            }],
        };

        let response: GenerateContentResponse = self.http.generate_content(&request).await?;

        response.text().ok_or_else(|| {
            let reason = response.finish_reason().unwrap_or("no candidates");
            tracing::warn!("Gemini returned no text (finish reason: {})", reason);
            Error::AiProvider(format!(
                "No text in Gemini response (finish reason: {})",
                reason
            ))
        })
    }

    async fn generate_image(&self, _prompt: &str) -> Result<String> {
        // TODO: call an image-capable Gemini model once responses carry a hosted URL
        Ok(String::new())
    }
}
