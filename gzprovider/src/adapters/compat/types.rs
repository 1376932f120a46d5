//! Adapter-side request and response values for chat-completions calls.

use gzcommon::GenerationOptions;

use crate::{Message, ModelResponse, ProviderId};

pub const NO_RESPONSE_PLACEHOLDER: &str = "No response generated";

#[derive(Debug, Clone, PartialEq)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<Message>,
    pub max_tokens: Option<u32>,
    pub temperature: Option<f32>,
}

impl ChatCompletionRequest {
    pub fn new(model: impl Into<String>, messages: Vec<Message>, options: GenerationOptions) -> Self {
        Self {
            model: model.into(),
            messages,
            max_tokens: options.max_tokens,
            temperature: options.temperature,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ChatCompletionResponse {
    pub model: Option<String>,
    /// Content of the first choice, if the backend returned one.
    pub content: Option<String>,
}

impl ChatCompletionResponse {
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            model: None,
            content: Some(content.into()),
        }
    }

    pub fn content_or_placeholder(&self) -> String {
        match self.content.as_deref() {
            Some(content) if !content.is_empty() => content.to_string(),
            _ => NO_RESPONSE_PLACEHOLDER.to_string(),
        }
    }

    pub fn into_model_response(self, provider: ProviderId, requested_model: String) -> ModelResponse {
        let content = self.content_or_placeholder();
        ModelResponse {
            provider,
            model: self.model.unwrap_or(requested_model),
            content,
        }
    }
}
