//! Orchestration between the HTTP layer and the model adapter.

use crate::ai::AiModel;
use crate::models::ChatResponse;
use crate::Result;
use std::sync::Arc;

pub struct AiPipeline {
    model: Arc<dyn AiModel>,
}

impl AiPipeline {
    pub fn new(model: Arc<dyn AiModel>) -> Self {
        Self { model }
    }

    /// Produce a reply for `message`.
    ///
    /// `conversation_id` is handed to the model and echoed back untouched; no
    /// history is kept. Image generation is never requested, so `image_url`
    /// is always empty.
    pub async fn get_response(
        &self,
        message: &str,
        conversation_id: Option<String>,
    ) -> Result<ChatResponse> {
        let reply = self
            .model
            .generate_text(message, conversation_id.as_deref())
            .await?;

        Ok(ChatResponse {
            reply,
            image_url: Some(String::new()),
            conversation_id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::MockModel;
    use crate::Error;

    #[tokio::test]
    async fn test_get_response_wraps_reply() {
        let model = Arc::new(MockModel::new().with_text_response("hi there".to_string()));
        let pipeline = AiPipeline::new(model.clone());

        let response = pipeline.get_response("hello", None).await.unwrap();

        assert_eq!(response.reply, "hi there");
        assert_eq!(response.image_url.as_deref(), Some(""));
        assert_eq!(response.conversation_id, None);
    }

    #[tokio::test]
    async fn test_conversation_id_passes_through() {
        let model = Arc::new(MockModel::new());
        let pipeline = AiPipeline::new(model.clone());

        let response = pipeline
            .get_response("hello", Some("conv-42".to_string()))
            .await
            .unwrap();

        assert_eq!(response.conversation_id.as_deref(), Some("conv-42"));
        assert_eq!(
            model.received_conversation_ids(),
            vec![Some("conv-42".to_string())]
        );
    }

    #[tokio::test]
    async fn test_never_requests_images() {
        let model = Arc::new(MockModel::new());
        let pipeline = AiPipeline::new(model.clone());

        pipeline.get_response("draw me a dragon", None).await.unwrap();

        assert_eq!(model.get_text_call_count(), 1);
        assert_eq!(model.get_image_call_count(), 0);
    }

    #[tokio::test]
    async fn test_model_errors_propagate() {
        let model = Arc::new(MockModel::new().with_error("boom".to_string()));
        let pipeline = AiPipeline::new(model);

        let err = pipeline.get_response("hello", None).await.unwrap_err();
        assert!(matches!(err, Error::AiProvider(ref msg) if msg == "boom"));
    }
}
