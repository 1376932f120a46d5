//! OpenRouter provider with app attribution headers.

use std::sync::Arc;
use std::time::Duration;

use gzcommon::GenerationOptions;
use reqwest::Client;

use crate::adapters::compat::{ChatCompletionRequest, ChatCompletionsTransport, HttpChatTransport};
use crate::deadline::with_deadline;
use crate::{
    ModelProvider, ModelRequest, ModelResponse, ProviderError, ProviderFuture, ProviderId,
    SecretString,
};

pub const OPENROUTER_CHAT_COMPLETIONS_URL: &str = "https://openrouter.ai/api/v1/chat/completions";
pub const OPENROUTER_TIMEOUT: Duration = Duration::from_secs(30);
pub const DEFAULT_APP_URL: &str = "https://genz-ai.vercel.app";
pub const DEFAULT_APP_TITLE: &str = "GenZ AI";

/// Values sent as `HTTP-Referer` and `X-Title`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribution {
    pub referer: String,
    pub title: String,
}

impl Default for Attribution {
    fn default() -> Self {
        Self {
            referer: DEFAULT_APP_URL.to_string(),
            title: DEFAULT_APP_TITLE.to_string(),
        }
    }
}

#[derive(Clone)]
pub struct OpenRouterProvider {
    transport: Arc<dyn ChatCompletionsTransport>,
    options: GenerationOptions,
    timeout: Duration,
}

impl OpenRouterProvider {
    pub fn new(transport: Arc<dyn ChatCompletionsTransport>) -> Self {
        Self {
            transport,
            options: GenerationOptions::new(4096, 0.7),
            timeout: OPENROUTER_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn default_http_transport(client: Client, attribution: &Attribution) -> HttpChatTransport {
        HttpChatTransport::new(client, OPENROUTER_CHAT_COMPLETIONS_URL)
            .with_header("HTTP-Referer", attribution.referer.clone())
            .with_header("X-Title", attribution.title.clone())
    }

    pub fn options(&self) -> GenerationOptions {
        self.options
    }

    pub(crate) fn build_request(&self, request: ModelRequest) -> ChatCompletionRequest {
        ChatCompletionRequest::new(request.model, request.messages, self.options)
    }
}

impl ModelProvider for OpenRouterProvider {
    fn id(&self) -> ProviderId {
        ProviderId::OpenRouter
    }

    fn timeout(&self) -> Duration {
        self.timeout
    }

    fn complete<'a>(
        &'a self,
        request: ModelRequest,
        credential: Option<&'a SecretString>,
    ) -> ProviderFuture<'a, Result<ModelResponse, ProviderError>> {
        Box::pin(async move {
            let api_key = credential.ok_or_else(|| {
                ProviderError::missing_credential("OpenRouter API key not available")
            })?;
            request.validate()?;

            let completion = self.build_request(request);
            let model = completion.model.clone();
            let response =
                with_deadline(self.timeout, self.transport.complete(completion, api_key)).await?;

            Ok(response.into_model_response(ProviderId::OpenRouter, model))
        })
    }
}
