//! Groq provider over the chat-completions transport.

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

pub const GROQ_CHAT_COMPLETIONS_URL: &str = "https://api.groq.com/openai/v1/chat/completions";
pub const GROQ_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Clone)]
pub struct GroqProvider {
    transport: Arc<dyn ChatCompletionsTransport>,
    options: GenerationOptions,
    timeout: Duration,
}

impl GroqProvider {
    pub fn new(transport: Arc<dyn ChatCompletionsTransport>) -> Self {
        Self {
            transport,
            options: GenerationOptions::new(4096, 0.7),
            timeout: GROQ_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn default_http_transport(client: Client) -> HttpChatTransport {
        HttpChatTransport::new(client, GROQ_CHAT_COMPLETIONS_URL)
    }

    pub fn options(&self) -> GenerationOptions {
        self.options
    }

    pub(crate) fn build_request(&self, request: ModelRequest) -> ChatCompletionRequest {
        ChatCompletionRequest::new(request.model, request.messages, self.options)
    }
}

impl ModelProvider for GroqProvider {
    fn id(&self) -> ProviderId {
        ProviderId::Groq
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
            let api_key =
                credential.ok_or_else(|| ProviderError::missing_credential("Groq API key not available"))?;
            request.validate()?;

            let completion = self.build_request(request);
            let model = completion.model.clone();
            let response =
                with_deadline(self.timeout, self.transport.complete(completion, api_key)).await?;

            Ok(response.into_model_response(ProviderId::Groq, model))
        })
    }
}
