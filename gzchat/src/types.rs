//! Chat request and reply values.

use gzprovider::{Citation, CredentialStore, Message, ProviderId, ProviderResult, Role};

#[derive(Debug, Clone, Default)]
pub struct ChatRequest {
    pub messages: Vec<Message>,
    /// Compound model selector; absent or blank selects the default model.
    pub model: Option<String>,
    pub api_keys: CredentialStore,
}

impl ChatRequest {
    pub fn new(messages: Vec<Message>) -> Self {
        Self {
            messages,
            ..Self::default()
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    pub fn with_api_keys(mut self, api_keys: CredentialStore) -> Self {
        self.api_keys = api_keys;
        self
    }

    /// Content of the most recent user message, or an empty string.
    pub fn last_user_content(&self) -> &str {
        self.messages
            .iter()
            .rev()
            .find(|message| message.role == Role::User)
            .map(|message| message.content.as_str())
            .unwrap_or("")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchAnswer {
    pub content: String,
    pub citations: Vec<Citation>,
}

impl SearchAnswer {
    pub fn without_citations(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            citations: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatReply {
    pub content: String,
    /// Present only for search-routed requests.
    pub citations: Option<Vec<Citation>>,
    pub provider: ProviderId,
    /// True when the answer did not come from the directly addressed provider.
    pub was_fallback: bool,
}

impl ChatReply {
    pub fn direct(provider: ProviderId, content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            citations: None,
            provider,
            was_fallback: false,
        }
    }
}

impl From<SearchAnswer> for ChatReply {
    fn from(value: SearchAnswer) -> Self {
        Self {
            content: value.content,
            citations: Some(value.citations),
            provider: ProviderId::Search,
            was_fallback: false,
        }
    }
}

impl From<ProviderResult> for ChatReply {
    fn from(value: ProviderResult) -> Self {
        Self {
            content: value.content,
            citations: None,
            provider: value.provider,
            was_fallback: true,
        }
    }
}
