//! Builds the provider registry, search backend, and chat service from [`GenzConfig`].

use std::sync::Arc;

use gzchat::ChatService;
use gzobserve::{
    CompositeFallbackHooks, MetricsObservabilityHooks, SafeFallbackHooks,
    TracingObservabilityHooks,
};
use gzprovider::{ProviderError, ProviderRegistry, SearchProvider};
use reqwest::Client;
use tracing::info;

use crate::GenzConfig;

/// Shared HTTP client; per-request deadlines are enforced by each adapter.
pub fn http_client() -> Result<Client, ProviderError> {
    Client::builder()
        .build()
        .map_err(|err| ProviderError::transport(err.to_string()))
}

/// Registers every compiled-in language-model adapter.
pub fn build_registry(config: &GenzConfig, client: &Client) -> ProviderRegistry {
    let mut registry = ProviderRegistry::new();
    register_groq(&mut registry, config, client);
    register_huggingface(&mut registry, config, client);
    register_openrouter(&mut registry, config, client);
    registry
}

#[cfg(feature = "provider-groq")]
fn register_groq(registry: &mut ProviderRegistry, config: &GenzConfig, client: &Client) {
    use gzprovider::adapters::groq::GroqProvider;

    let mut transport = GroqProvider::default_http_transport(client.clone());
    if let Some(endpoint) = &config.endpoints.groq {
        transport = transport.with_endpoint(endpoint.clone());
    }
    registry.register(GroqProvider::new(Arc::new(transport)));
}

#[cfg(not(feature = "provider-groq"))]
fn register_groq(_registry: &mut ProviderRegistry, _config: &GenzConfig, _client: &Client) {}

#[cfg(feature = "provider-huggingface")]
fn register_huggingface(registry: &mut ProviderRegistry, config: &GenzConfig, client: &Client) {
    use gzprovider::adapters::huggingface::HuggingFaceProvider;

    let mut transport = HuggingFaceProvider::default_http_transport(client.clone());
    if let Some(endpoint) = &config.endpoints.huggingface {
        transport = transport.with_endpoint(endpoint.clone());
    }
    registry.register(HuggingFaceProvider::new(Arc::new(transport)));
}

#[cfg(not(feature = "provider-huggingface"))]
fn register_huggingface(_registry: &mut ProviderRegistry, _config: &GenzConfig, _client: &Client) {}

#[cfg(feature = "provider-openrouter")]
fn register_openrouter(registry: &mut ProviderRegistry, config: &GenzConfig, client: &Client) {
    use gzprovider::adapters::openrouter::OpenRouterProvider;

    let mut transport =
        OpenRouterProvider::default_http_transport(client.clone(), &config.attribution());
    if let Some(endpoint) = &config.endpoints.openrouter {
        transport = transport.with_endpoint(endpoint.clone());
    }
    registry.register(OpenRouterProvider::new(Arc::new(transport)));
}

#[cfg(not(feature = "provider-openrouter"))]
fn register_openrouter(_registry: &mut ProviderRegistry, _config: &GenzConfig, _client: &Client) {}

#[cfg(feature = "search-serper")]
pub fn build_search_provider(
    config: &GenzConfig,
    client: &Client,
) -> Result<Arc<dyn SearchProvider>, ProviderError> {
    use gzprovider::adapters::serper::SerperSearchProvider;

    let mut search = SerperSearchProvider::new(client.clone());
    if let Some(endpoint) = &config.endpoints.search {
        search = search.with_endpoint(endpoint.clone());
    }
    Ok(Arc::new(search))
}

#[cfg(not(feature = "search-serper"))]
pub fn build_search_provider(
    _config: &GenzConfig,
    _client: &Client,
) -> Result<Arc<dyn SearchProvider>, ProviderError> {
    Err(ProviderError::invalid_request(
        "search-serper feature is not enabled on genz",
    ))
}

/// Tracing and metrics hooks, each isolated so a panicking hook cannot fail a request.
pub fn default_hooks() -> CompositeFallbackHooks {
    CompositeFallbackHooks::new()
        .with(Arc::new(SafeFallbackHooks::new(TracingObservabilityHooks)))
        .with(Arc::new(SafeFallbackHooks::new(MetricsObservabilityHooks)))
}

pub fn build_chat_service(config: &GenzConfig) -> Result<ChatService, ProviderError> {
    let client = http_client()?;
    let registry = Arc::new(build_registry(config, &client));
    let search = build_search_provider(config, &client)?;
    info!(
        phase = "startup",
        event = "providers_registered",
        providers = ?registry.ids(),
        "language-model adapters registered"
    );

    Ok(ChatService::builder(registry, search)
        .hooks(Arc::new(default_hooks()))
        .process_credentials(Arc::new(config.keys.clone()))
        .system_prompt(config.system_prompt.clone())
        .build())
}

#[cfg(all(
    test,
    feature = "provider-groq",
    feature = "provider-huggingface",
    feature = "provider-openrouter",
    feature = "search-serper"
))]
mod tests {
    use gzprovider::ProviderId;

    use super::*;

    #[test]
    fn registry_holds_every_language_model_adapter() {
        let config = GenzConfig::from_lookup(|_| None).expect("defaults");
        let client = http_client().expect("client");
        let registry = build_registry(&config, &client);

        assert_eq!(
            registry.ids(),
            vec![ProviderId::Groq, ProviderId::HuggingFace, ProviderId::OpenRouter]
        );
        assert!(!registry.contains(ProviderId::Search));
    }

    #[test]
    fn chat_service_uses_configured_system_prompt() {
        let config = GenzConfig::from_lookup(|name| {
            (name == "GENZ_SYSTEM_PROMPT").then(|| "Be brief.".to_string())
        })
        .expect("config");
        let service = build_chat_service(&config).expect("service");

        assert_eq!(service.system_prompt(), "Be brief.");
        assert_eq!(service.orchestrator().chain().len(), 3);
        assert_eq!(default_hooks().len(), 2);
    }
}
