//! Hugging Face inference router provider.
//!
//! The router answers 503 while a model is cold; that status is reported as
//! [`crate::ProviderErrorKind::ModelLoading`] instead of a generic API error.

use std::sync::Arc;
use std::time::Duration;

use gzcommon::GenerationOptions;
use reqwest::Client;

use crate::adapters::compat::{
    ChatCompletionRequest, ChatCompletionsTransport, HttpChatTransport, StatusPolicy,
};
use crate::deadline::with_deadline;
use crate::{
    ModelProvider, ModelRequest, ModelResponse, ProviderError, ProviderFuture, ProviderId,
    SecretString,
};

pub const HUGGINGFACE_CHAT_COMPLETIONS_URL: &str = "https://router.huggingface.co/v1/chat/completions";
pub const HUGGINGFACE_TIMEOUT: Duration = Duration::from_secs(60);

#[derive(Clone)]
pub struct HuggingFaceProvider {
    transport: Arc<dyn ChatCompletionsTransport>,
    options: GenerationOptions,
    timeout: Duration,
}

impl HuggingFaceProvider {
    pub fn new(transport: Arc<dyn ChatCompletionsTransport>) -> Self {
        Self {
            transport,
            options: GenerationOptions::new(2048, 0.7),
            timeout: HUGGINGFACE_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn default_http_transport(client: Client) -> HttpChatTransport {
        HttpChatTransport::new(client, HUGGINGFACE_CHAT_COMPLETIONS_URL)
            .with_status_policy(StatusPolicy::model_loading_on_unavailable())
    }

    pub fn options(&self) -> GenerationOptions {
        self.options
    }

    pub(crate) fn build_request(&self, request: ModelRequest) -> ChatCompletionRequest {
        ChatCompletionRequest::new(request.model, request.messages, self.options)
    }
}

impl ModelProvider for HuggingFaceProvider {
    fn id(&self) -> ProviderId {
        ProviderId::HuggingFace
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
                ProviderError::missing_credential("HuggingFace API key not available")
            })?;
            request.validate()?;

            let completion = self.build_request(request);
            let model = completion.model.clone();
            let response =
                with_deadline(self.timeout, self.transport.complete(completion, api_key)).await?;

            Ok(response.into_model_response(ProviderId::HuggingFace, model))
        })
    }
}
