//! Sequential cross-provider fallback.
//!
//! Candidates are tried strictly in chain order, skipping those without a usable
//! credential. The first success wins; every failure is recorded and the loop
//! moves on. A provider is never retried against itself.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::{
    Credentials, Message, ModelRequest, ProviderError, ProviderId, ProviderRegistry,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FallbackCandidate {
    pub provider: ProviderId,
    pub model: String,
}

impl FallbackCandidate {
    pub fn new(provider: ProviderId, model: impl Into<String>) -> Self {
        Self {
            provider,
            model: model.into(),
        }
    }

    pub fn with_default_model(provider: ProviderId) -> Self {
        Self::new(provider, provider.default_model())
    }
}

/// Ordered candidate list. The default order is groq, huggingface, openrouter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FallbackChain {
    candidates: Vec<FallbackCandidate>,
}

impl FallbackChain {
    pub fn new(candidates: Vec<FallbackCandidate>) -> Self {
        Self { candidates }
    }

    pub fn candidates(&self) -> &[FallbackCandidate] {
        &self.candidates
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}

impl Default for FallbackChain {
    fn default() -> Self {
        Self::new(vec![
            FallbackCandidate::with_default_model(ProviderId::Groq),
            FallbackCandidate::with_default_model(ProviderId::HuggingFace),
            FallbackCandidate::with_default_model(ProviderId::OpenRouter),
        ])
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderResult {
    pub content: String,
    pub provider: ProviderId,
    pub model: String,
    pub was_fallback: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttemptFailure {
    pub provider: ProviderId,
    pub error: ProviderError,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FallbackError {
    /// No candidate had a usable credential; nothing was attempted.
    NoCredentials,
    Exhausted { failures: Vec<AttemptFailure> },
}

impl Display for FallbackError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoCredentials => f.write_str("API_KEY_MISSING: no provider has a usable API key"),
            Self::Exhausted { failures } => {
                f.write_str("ALL_FAILED: all providers failed")?;
                for (index, failure) in failures.iter().enumerate() {
                    let separator = if index == 0 { " (" } else { "; " };
                    write!(f, "{separator}{}: {}", failure.provider, failure.error)?;
                }
                if !failures.is_empty() {
                    f.write_str(")")?;
                }
                Ok(())
            }
        }
    }
}

impl Error for FallbackError {}

/// Observation points around each fallback attempt. `position` is zero-based
/// within the credentialed candidates.
pub trait FallbackHooks: Send + Sync {
    fn on_attempt_start(&self, _provider: ProviderId, _model: &str, _position: usize) {}

    fn on_attempt_failure(
        &self,
        _provider: ProviderId,
        _position: usize,
        _elapsed: Duration,
        _error: &ProviderError,
    ) {
    }

    fn on_success(&self, _provider: ProviderId, _position: usize, _elapsed: Duration) {}

    fn on_exhausted(&self, _failures: &[AttemptFailure]) {}
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NoopFallbackHooks;

impl FallbackHooks for NoopFallbackHooks {}

#[derive(Clone)]
pub struct FallbackOrchestrator {
    registry: Arc<ProviderRegistry>,
    chain: FallbackChain,
    hooks: Arc<dyn FallbackHooks>,
}

impl FallbackOrchestrator {
    pub fn new(registry: Arc<ProviderRegistry>, chain: FallbackChain) -> Self {
        Self {
            registry,
            chain,
            hooks: Arc::new(NoopFallbackHooks),
        }
    }

    pub fn with_hooks(mut self, hooks: Arc<dyn FallbackHooks>) -> Self {
        self.hooks = hooks;
        self
    }

    pub fn chain(&self) -> &FallbackChain {
        &self.chain
    }

    pub fn registry(&self) -> &Arc<ProviderRegistry> {
        &self.registry
    }

    pub async fn call_with_fallback(
        &self,
        messages: &[Message],
        credentials: &Credentials,
    ) -> Result<ProviderResult, FallbackError> {
        let candidates = self
            .chain
            .candidates()
            .iter()
            .filter(|candidate| credentials.is_available(candidate.provider))
            .collect::<Vec<_>>();

        if candidates.is_empty() {
            return Err(FallbackError::NoCredentials);
        }

        let mut failures = Vec::with_capacity(candidates.len());

        for (position, candidate) in candidates.into_iter().enumerate() {
            self.hooks
                .on_attempt_start(candidate.provider, &candidate.model, position);
            let started = Instant::now();

            let outcome = match self.registry.get(candidate.provider) {
                Some(provider) => {
                    let request = ModelRequest::new(candidate.model.clone(), messages.to_vec());
                    provider
                        .complete(request, credentials.resolve(candidate.provider))
                        .await
                }
                None => Err(ProviderError::other(format!(
                    "no adapter registered for {}",
                    candidate.provider
                ))),
            };

            match outcome {
                Ok(response) => {
                    self.hooks
                        .on_success(candidate.provider, position, started.elapsed());
                    return Ok(ProviderResult {
                        content: response.content,
                        provider: candidate.provider,
                        model: response.model,
                        was_fallback: position > 0,
                    });
                }
                Err(error) => {
                    self.hooks.on_attempt_failure(
                        candidate.provider,
                        position,
                        started.elapsed(),
                        &error,
                    );
                    failures.push(AttemptFailure {
                        provider: candidate.provider,
                        error,
                    });
                }
            }
        }

        self.hooks.on_exhausted(&failures);
        Err(FallbackError::Exhausted { failures })
    }
}
