//! Common `gzprovider` imports for downstream crates.

pub use crate::{
    Citation, CredentialStore, Credentials, FallbackChain, FallbackError, FallbackHooks,
    FallbackOrchestrator, Message, ModelProvider, ModelRequest, ModelResponse, ProviderError,
    ProviderErrorKind, ProviderId, ProviderRegistry, ProviderResult, Role, SearchHit,
    SearchProvider, SecretString, resolve_model,
};
pub use gzcommon::{BoxFuture, GenerationOptions};
