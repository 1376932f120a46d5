//! Request entry point: validation, routing, and two-tier fallback.

use std::sync::Arc;

use gzprovider::{
    CredentialStore, Credentials, DEFAULT_MODEL_SELECTOR, FallbackChain, FallbackHooks,
    FallbackOrchestrator, Message, ModelRequest, ModelResponse, ProviderError, ProviderId,
    ProviderRegistry, ResolvedModel, SearchProvider, resolve_model,
};
use tracing::{error, info, warn};

use crate::search::SearchPipeline;
use crate::{ChatError, ChatReply, ChatRequest};

pub const DEFAULT_SYSTEM_PROMPT: &str = "You are GenZ AI, a helpful, fast, and friendly assistant. You provide clear, accurate, and concise responses. When providing code, always format it properly in markdown code blocks with the language specified. You were developed by Owais Ahmad Dar from Kashmir, India.";

#[derive(Clone)]
pub struct ChatService {
    registry: Arc<ProviderRegistry>,
    orchestrator: FallbackOrchestrator,
    search: SearchPipeline,
    process_credentials: Arc<CredentialStore>,
    system_prompt: String,
}

impl ChatService {
    pub fn builder(
        registry: Arc<ProviderRegistry>,
        search: Arc<dyn SearchProvider>,
    ) -> ChatServiceBuilder {
        ChatServiceBuilder::new(registry, search)
    }

    pub fn system_prompt(&self) -> &str {
        &self.system_prompt
    }

    pub fn orchestrator(&self) -> &FallbackOrchestrator {
        &self.orchestrator
    }

    pub async fn respond(&self, mut request: ChatRequest) -> Result<ChatReply, ChatError> {
        if request.messages.is_empty() {
            return Err(ChatError::invalid_request(
                "messages must be a non-empty array",
            ));
        }

        let credentials = Credentials::new(
            std::mem::take(&mut request.api_keys),
            Arc::clone(&self.process_credentials),
        );
        let selector = request
            .model
            .as_deref()
            .filter(|model| !model.trim().is_empty())
            .unwrap_or(DEFAULT_MODEL_SELECTOR);
        let resolved = resolve_model(selector);

        if resolved.provider == ProviderId::Search {
            let answer = self
                .search
                .answer(request.last_user_content(), &credentials)
                .await;
            return Ok(ChatReply::from(answer));
        }

        let mut messages = Vec::with_capacity(request.messages.len() + 1);
        messages.push(Message::system(self.system_prompt.clone()));
        messages.extend(request.messages);

        match self.call_direct(&resolved, &messages, &credentials).await {
            Ok(response) => {
                info!(
                    phase = "chat",
                    event = "direct_success",
                    provider = %resolved.provider,
                    model = %response.model,
                    "provider answered directly"
                );
                return Ok(ChatReply::direct(resolved.provider, response.content));
            }
            Err(direct_error) => {
                warn!(
                    phase = "chat",
                    event = "direct_failure",
                    provider = %resolved.provider,
                    model = %resolved.model_id,
                    error_kind = direct_error.kind.code(),
                    error = %direct_error.message,
                    "direct provider call failed, trying fallback chain"
                );
            }
        }

        match self
            .orchestrator
            .call_with_fallback(&messages, &credentials)
            .await
        {
            Ok(result) => Ok(ChatReply::from(result)),
            Err(fallback_error) => {
                let chat_error = ChatError::from(fallback_error);
                error!(
                    phase = "chat",
                    event = "request_failed",
                    code = chat_error.code(),
                    error = %chat_error.message,
                    "chat request failed"
                );
                Err(chat_error)
            }
        }
    }

    async fn call_direct(
        &self,
        resolved: &ResolvedModel,
        messages: &[Message],
        credentials: &Credentials,
    ) -> Result<ModelResponse, ProviderError> {
        let provider = self.registry.get(resolved.provider).ok_or_else(|| {
            ProviderError::other(format!("no adapter registered for {}", resolved.provider))
        })?;

        let request = ModelRequest::new(resolved.model_id.clone(), messages.to_vec());
        provider
            .complete(request, credentials.resolve(resolved.provider))
            .await
    }
}

pub struct ChatServiceBuilder {
    registry: Arc<ProviderRegistry>,
    search: Arc<dyn SearchProvider>,
    chain: FallbackChain,
    hooks: Option<Arc<dyn FallbackHooks>>,
    process_credentials: Arc<CredentialStore>,
    system_prompt: String,
}

impl ChatServiceBuilder {
    pub fn new(registry: Arc<ProviderRegistry>, search: Arc<dyn SearchProvider>) -> Self {
        Self {
            registry,
            search,
            chain: FallbackChain::default(),
            hooks: None,
            process_credentials: Arc::new(CredentialStore::new()),
            system_prompt: DEFAULT_SYSTEM_PROMPT.to_string(),
        }
    }

    pub fn chain(mut self, chain: FallbackChain) -> Self {
        self.chain = chain;
        self
    }

    pub fn hooks(mut self, hooks: Arc<dyn FallbackHooks>) -> Self {
        self.hooks = Some(hooks);
        self
    }

    pub fn process_credentials(mut self, credentials: Arc<CredentialStore>) -> Self {
        self.process_credentials = credentials;
        self
    }

    pub fn system_prompt(mut self, system_prompt: impl Into<String>) -> Self {
        self.system_prompt = system_prompt.into();
        self
    }

    pub fn build(self) -> ChatService {
        let mut orchestrator = FallbackOrchestrator::new(Arc::clone(&self.registry), self.chain);
        if let Some(hooks) = self.hooks {
            orchestrator = orchestrator.with_hooks(hooks);
        }

        ChatService {
            search: SearchPipeline::new(self.search, orchestrator.clone()),
            registry: self.registry,
            orchestrator,
            process_credentials: self.process_credentials,
            system_prompt: self.system_prompt,
        }
    }
}
