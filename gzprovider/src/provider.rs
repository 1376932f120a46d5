use std::time::Duration;

use gzcommon::BoxFuture;

use crate::{ModelRequest, ModelResponse, ProviderError, ProviderId, SecretString};

pub type ProviderFuture<'a, T> = BoxFuture<'a, T>;

/// A chat-completion backend reachable through one credential.
///
/// Implementations fail with [`crate::ProviderErrorKind::MissingCredential`] before any
/// network activity when `credential` is `None`, and with
/// [`crate::ProviderErrorKind::Timeout`] once [`ModelProvider::timeout`] elapses.
pub trait ModelProvider: Send + Sync {
    fn id(&self) -> ProviderId;

    fn timeout(&self) -> Duration;

    fn complete<'a>(
        &'a self,
        request: ModelRequest,
        credential: Option<&'a SecretString>,
    ) -> ProviderFuture<'a, Result<ModelResponse, ProviderError>>;
}
