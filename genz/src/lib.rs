//! Multi-provider chat gateway.
//!
//! Re-exports the genz workspace crates and wires them into a runnable HTTP
//! service: environment configuration, adapter construction, observability
//! hooks, and the axum router.
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use genz::{GenzConfig, build_chat_service, init_tracing, serve};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
//! init_tracing();
//! let config = GenzConfig::from_env()?;
//! let service = Arc::new(build_chat_service(&config)?);
//! let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
//! serve(listener, service, std::future::pending()).await?;
//! # Ok(())
//! # }
//! ```

mod macros;

pub mod config;
pub mod prelude;
pub mod providers;
pub mod server;
pub mod telemetry;
pub mod util;

pub use gzchat;
pub use gzcommon;
pub use gzobserve;
pub use gzprovider;

pub use gzchat::{
    ChatError, ChatErrorKind, ChatReply, ChatRequest, ChatService, ChatServiceBuilder,
    DEFAULT_SYSTEM_PROMPT, SearchAnswer, SearchPipeline,
};
pub use gzcommon::{BoxFuture, GenerationOptions};
pub use gzprovider::{
    Citation, CredentialStore, Credentials, DEFAULT_MODEL_SELECTOR, FallbackChain, FallbackHooks,
    Message, ModelProvider, ModelRequest, ModelResponse, ProviderError, ProviderErrorKind,
    ProviderId, ProviderRegistry, Role, SearchHit, SearchProvider, SecretString, catalog_entries,
    resolve_model,
};

pub use config::{ConfigError, DEFAULT_BIND_ADDR, EndpointOverrides, GenzConfig};
pub use providers::{
    build_chat_service, build_registry, build_search_provider, default_hooks, http_client,
};
pub use server::{router, serve};
pub use telemetry::init_tracing;
pub use util::{
    ask, assistant_message, parse_provider_id, system_message, user_message,
};
