use super::AiModel;
use crate::{Error, Result};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

/// In-memory [`AiModel`] with scripted replies.
pub struct MockModel {
    text_responses: Arc<Mutex<Vec<String>>>,
    error: Option<String>,
    text_call_count: Arc<Mutex<usize>>,
    image_call_count: Arc<Mutex<usize>>,
    conversation_ids: Arc<Mutex<Vec<Option<String>>>>,
}

impl MockModel {
    pub fn new() -> Self {
        Self {
            text_responses: Arc::new(Mutex::new(Vec::new())),
            error: None,
            text_call_count: Arc::new(Mutex::new(0)),
            image_call_count: Arc::new(Mutex::new(0)),
            conversation_ids: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_text_response(self, response: String) -> Self {
        self.text_responses.lock().unwrap().push(response);
        self
    }

    /// Make every call fail with `Error::AiProvider(message)`.
    pub fn with_error(mut self, message: String) -> Self {
        self.error = Some(message);
        self
    }

    pub fn get_text_call_count(&self) -> usize {
        *self.text_call_count.lock().unwrap()
    }

    pub fn get_image_call_count(&self) -> usize {
        *self.image_call_count.lock().unwrap()
    }

    /// Conversation ids passed to `generate_text`, in call order.
    pub fn received_conversation_ids(&self) -> Vec<Option<String>> {
        self.conversation_ids.lock().unwrap().clone()
    }
}

impl Default for MockModel {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AiModel for MockModel {
    async fn generate_text(&self, message: &str, conversation_id: Option<&str>) -> Result<String> {
        let mut count = self.text_call_count.lock().unwrap();
        *count += 1;
        self.conversation_ids
            .lock()
            .unwrap()
            .push(conversation_id.map(str::to_string));

        if let Some(message) = &self.error {
            return Err(Error::AiProvider(message.clone()));
        }

        let responses = self.text_responses.lock().unwrap();
        if responses.is_empty() {
            // Default mock response
            Ok(format!("Echo: {}", message))
        } else {
            let index = (*count - 1) % responses.len();
            Ok(responses[index].clone())
        }
    }

    async fn generate_image(&self, _prompt: &str) -> Result<String> {
        *self.image_call_count.lock().unwrap() += 1;

        if let Some(message) = &self.error {
            return Err(Error::AiProvider(message.clone()));
        }
        Ok(String::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_model_default_reply() {
        let model = MockModel::new();

        let reply = model.generate_text("hello", None).await.unwrap();
        assert_eq!(reply, "Echo: hello");
    }

    #[tokio::test]
    async fn test_mock_model_custom_responses() {
        let model = MockModel::new()
            .with_text_response("first".to_string())
            .with_text_response("second".to_string());

        assert_eq!(model.generate_text("a", None).await.unwrap(), "first");
        assert_eq!(model.generate_text("b", None).await.unwrap(), "second");

        // Should cycle back
        assert_eq!(model.generate_text("c", None).await.unwrap(), "first");
    }

    #[tokio::test]
    async fn test_mock_model_error() {
        let model = MockModel::new().with_error("upstream down".to_string());

        let err = model.generate_text("hello", None).await.unwrap_err();
        assert!(matches!(err, Error::AiProvider(ref msg) if msg == "upstream down"));
        assert_eq!(model.get_text_call_count(), 1);
    }

    #[tokio::test]
    async fn test_mock_model_records_calls() {
        let model = MockModel::new();

        model.generate_text("a", Some("c-1")).await.unwrap();
        model.generate_text("b", None).await.unwrap();
        model.generate_image("castle").await.unwrap();

        assert_eq!(model.get_text_call_count(), 2);
        assert_eq!(model.get_image_call_count(), 1);
        assert_eq!(
            model.received_conversation_ids(),
            vec![Some("c-1".to_string()), None]
        );
    }
}
