//! Provider layer for the genz chat gateway.
//!
//! Holds the provider-agnostic message model, the failure taxonomy adapters
//! classify into, layered credentials, the model-selector resolver, the
//! chat-completions adapters, and the sequential fallback orchestrator.
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use gzprovider::{FallbackChain, FallbackOrchestrator, ProviderId, ProviderRegistry};
//!
//! let orchestrator = FallbackOrchestrator::new(Arc::new(ProviderRegistry::new()), FallbackChain::default());
//! let order = orchestrator
//!     .chain()
//!     .candidates()
//!     .iter()
//!     .map(|candidate| candidate.provider)
//!     .collect::<Vec<_>>();
//!
//! assert_eq!(order, vec![ProviderId::Groq, ProviderId::HuggingFace, ProviderId::OpenRouter]);
//! ```

pub mod adapters;
pub mod credentials;
pub mod deadline;
pub mod error;
pub mod fallback;
pub mod model;
pub mod prelude;
pub mod provider;
pub mod registry;
pub mod resolver;
pub mod search;

pub use credentials::{CredentialStore, Credentials, PROCESS_KEY_VARS, SecretString};
pub use deadline::with_deadline;
pub use error::{ProviderError, ProviderErrorKind};
pub use fallback::{
    AttemptFailure, FallbackCandidate, FallbackChain, FallbackError, FallbackHooks,
    FallbackOrchestrator, NoopFallbackHooks, ProviderResult,
};
pub use model::{Citation, Message, ModelRequest, ModelResponse, ProviderId, Role};
pub use provider::{ModelProvider, ProviderFuture};
pub use registry::ProviderRegistry;
pub use resolver::{
    CatalogEntry, DEFAULT_MODEL_SELECTOR, MODEL_CATALOG, ModelInfo, ResolvedModel,
    catalog_entries, resolve_model, selector_prefix,
};
pub use search::{SearchHit, SearchProvider};
