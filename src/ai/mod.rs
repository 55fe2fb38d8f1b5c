//! Model adapter interface and its implementations
//!
//! [`AiModel`] is the seam between the pipeline and a concrete provider.
//! Production traffic goes to [`GeminiModel`]; [`MockModel`] stands in for it
//! in tests and local harnesses.

pub mod gemini;
pub mod mock;

pub use gemini::GeminiModel;
pub use mock::MockModel;

use crate::Result;
use async_trait::async_trait;

#[async_trait]
pub trait AiModel: Send + Sync {
    /// Generate a text reply for a single user message.
    async fn generate_text(&self, message: &str, conversation_id: Option<&str>) -> Result<String>;

    /// Generate an image for `prompt` and return its URL.
    async fn generate_image(&self, prompt: &str) -> Result<String>;
}
