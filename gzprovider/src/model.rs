//! Provider-agnostic request, response, and message model types.
//!
//! ```rust
//! use gzprovider::{Message, ModelRequest, ProviderErrorKind, Role};
//!
//! let ok = ModelRequest::new_validated(
//!     "llama-3.3-70b-versatile",
//!     vec![Message::new(Role::User, "hi")],
//! );
//! assert!(ok.is_ok());
//!
//! let err = ModelRequest::new_validated("", vec![Message::new(Role::User, "hi")])
//!     .err()
//!     .expect("empty model should fail");
//! assert_eq!(err.kind, ProviderErrorKind::InvalidRequest);
//! ```

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::ProviderError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProviderId {
    Groq,
    HuggingFace,
    OpenRouter,
    Search,
}

impl ProviderId {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Groq => "groq",
            Self::HuggingFace => "huggingface",
            Self::OpenRouter => "openrouter",
            Self::Search => "search",
        }
    }

    /// Model id used when this provider is reached through the fallback chain.
    pub const fn default_model(self) -> &'static str {
        match self {
            Self::Groq => "llama-3.3-70b-versatile",
            Self::HuggingFace => "Qwen/Qwen2.5-72B-Instruct",
            Self::OpenRouter => "google/gemma-2-27b-it",
            Self::Search => "web-search",
        }
    }

    pub const fn is_language_model(self) -> bool {
        !matches!(self, Self::Search)
    }
}

impl Display for ProviderId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

impl Role {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::System => "system",
            Self::User => "user",
            Self::Assistant => "assistant",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self::new(Role::System, content)
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content)
    }
}

/// A search-backed reference, in engine rank order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Citation {
    pub title: String,
    pub url: String,
    pub snippet: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelResponse {
    pub provider: ProviderId,
    pub model: String,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelRequest {
    pub model: String,
    pub messages: Vec<Message>,
}

impl ModelRequest {
    pub fn new(model: impl Into<String>, messages: Vec<Message>) -> Self {
        Self {
            model: model.into(),
            messages,
        }
    }

    pub fn new_validated(
        model: impl Into<String>,
        messages: Vec<Message>,
    ) -> Result<Self, ProviderError> {
        let request = Self::new(model, messages);
        request.validate()?;
        Ok(request)
    }

    pub fn validate(&self) -> Result<(), ProviderError> {
        if self.model.trim().is_empty() {
            return Err(ProviderError::invalid_request("model must not be empty"));
        }

        if self.messages.is_empty() {
            return Err(ProviderError::invalid_request(
                "at least one message is required",
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ProviderErrorKind;

    #[test]
    fn provider_id_display_is_stable() {
        assert_eq!(ProviderId::Groq.to_string(), "groq");
        assert_eq!(ProviderId::HuggingFace.to_string(), "huggingface");
        assert_eq!(ProviderId::OpenRouter.to_string(), "openrouter");
        assert_eq!(ProviderId::Search.to_string(), "search");
    }

    #[test]
    fn only_search_is_not_a_language_model() {
        assert!(ProviderId::Groq.is_language_model());
        assert!(ProviderId::HuggingFace.is_language_model());
        assert!(ProviderId::OpenRouter.is_language_model());
        assert!(!ProviderId::Search.is_language_model());
    }

    #[test]
    fn model_request_validate_enforces_contract() {
        let blank_model = ModelRequest::new("   ", vec![Message::user("hi")]);
        let err = blank_model.validate().expect_err("blank model must fail");
        assert_eq!(err.kind, ProviderErrorKind::InvalidRequest);

        let no_messages = ModelRequest::new("llama-3.3-70b-versatile", Vec::new());
        let err = no_messages
            .validate()
            .expect_err("empty messages must fail");
        assert_eq!(err.kind, ProviderErrorKind::InvalidRequest);

        let valid = ModelRequest::new("llama-3.3-70b-versatile", vec![Message::user("hi")]);
        assert!(valid.validate().is_ok());
    }

    #[test]
    fn messages_use_lowercase_roles_on_the_wire() {
        let json = serde_json::to_string(&Message::assistant("hello")).expect("serialize");
        assert_eq!(json, r#"{"role":"assistant","content":"hello"}"#);

        let parsed: Message =
            serde_json::from_str(r#"{"role":"system","content":"be brief"}"#).expect("parse");
        assert_eq!(parsed, Message::system("be brief"));

        let unknown = serde_json::from_str::<Message>(r#"{"role":"tool","content":"x"}"#);
        assert!(unknown.is_err());
    }
}
