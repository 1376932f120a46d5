//! Chat-completions HTTP payload serde models and conversion helpers.

use serde::{Deserialize, Serialize};

use super::types::{ChatCompletionRequest, ChatCompletionResponse};

pub(crate) const MAX_ERROR_BODY_BYTES: usize = 4096;

pub(crate) fn extract_error_message(body: &str) -> Option<String> {
    let parsed = serde_json::from_str::<ApiErrorEnvelope>(body).ok()?;
    match parsed.error {
        ApiErrorField::Detailed { message } => Some(message),
        ApiErrorField::Plain(message) => Some(message),
    }
}

pub(crate) fn truncate(input: &str, max: usize) -> String {
    if input.len() <= max {
        return input.to_string();
    }

    let mut end = max;
    while !input.is_char_boundary(end) {
        end -= 1;
    }

    let mut output = input[..end].to_string();
    output.push_str("...");
    output
}

#[derive(Debug, Deserialize)]
struct ApiErrorEnvelope {
    error: ApiErrorField,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ApiErrorField {
    Detailed { message: String },
    Plain(String),
}

#[derive(Debug, Serialize)]
pub(crate) struct ApiRequest<'a> {
    pub model: &'a str,
    pub messages: Vec<ApiMessage<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
}

#[derive(Debug, Serialize)]
pub(crate) struct ApiMessage<'a> {
    pub role: &'static str,
    pub content: &'a str,
}

impl<'a> From<&'a ChatCompletionRequest> for ApiRequest<'a> {
    fn from(value: &'a ChatCompletionRequest) -> Self {
        Self {
            model: &value.model,
            messages: value
                .messages
                .iter()
                .map(|message| ApiMessage {
                    role: message.role.as_str(),
                    content: &message.content,
                })
                .collect(),
            max_tokens: value.max_tokens,
            temperature: value.temperature,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiResponse {
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub choices: Vec<ApiChoice>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiChoice {
    #[serde(default)]
    pub message: Option<ApiChoiceMessage>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiChoiceMessage {
    #[serde(default)]
    pub content: Option<String>,
}

impl From<ApiResponse> for ChatCompletionResponse {
    fn from(value: ApiResponse) -> Self {
        let content = value
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message)
            .and_then(|message| message.content);

        Self {
            model: value.model,
            content,
        }
    }
}
