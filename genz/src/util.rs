//! Small convenience constructors for common types.

use crate::{ChatRequest, Message, ProviderId, Role};

pub fn system_message(content: impl Into<String>) -> Message {
    Message::new(Role::System, content)
}

pub fn user_message(content: impl Into<String>) -> Message {
    Message::new(Role::User, content)
}

pub fn assistant_message(content: impl Into<String>) -> Message {
    Message::new(Role::Assistant, content)
}

/// Single-turn request against `selector`.
pub fn ask(selector: impl Into<String>, prompt: impl Into<String>) -> ChatRequest {
    ChatRequest::new(vec![user_message(prompt)]).with_model(selector)
}

pub fn parse_provider_id(value: &str) -> Option<ProviderId> {
    match value.trim().to_ascii_lowercase().as_str() {
        "groq" | "g" => Some(ProviderId::Groq),
        "huggingface" | "hugging-face" | "hf" => Some(ProviderId::HuggingFace),
        "openrouter" | "or" => Some(ProviderId::OpenRouter),
        "search" | "web" | "serper" => Some(ProviderId::Search),
        _ => None,
    }
}
