//! Tracing-based observability hooks for fallback attempts.
//!
//! ```rust
//! use gzobserve::TracingObservabilityHooks;
//! use gzprovider::FallbackHooks;
//!
//! fn accepts_fallback_hooks(_hooks: &dyn FallbackHooks) {}
//!
//! let hooks = TracingObservabilityHooks;
//! accepts_fallback_hooks(&hooks);
//! ```

use std::time::Duration;

use gzprovider::{AttemptFailure, FallbackHooks, ProviderError, ProviderId};

#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObservabilityHooks;

impl FallbackHooks for TracingObservabilityHooks {
    fn on_attempt_start(&self, provider: ProviderId, model: &str, position: usize) {
        tracing::info!(
            phase = "provider",
            event = "attempt_start",
            provider = %provider,
            model,
            position
        );
    }

    fn on_attempt_failure(
        &self,
        provider: ProviderId,
        position: usize,
        elapsed: Duration,
        error: &ProviderError,
    ) {
        tracing::warn!(
            phase = "provider",
            event = "attempt_failure",
            provider = %provider,
            position,
            elapsed_ms = elapsed.as_millis() as u64,
            error_kind = error.kind.code(),
            error = %error.message
        );
    }

    fn on_success(&self, provider: ProviderId, position: usize, elapsed: Duration) {
        tracing::info!(
            phase = "provider",
            event = "success",
            provider = %provider,
            position,
            fallback = position > 0,
            elapsed_ms = elapsed.as_millis() as u64
        );
    }

    fn on_exhausted(&self, failures: &[AttemptFailure]) {
        let providers = failures
            .iter()
            .map(|failure| format!("{}={}", failure.provider, failure.error.kind.code()))
            .collect::<Vec<_>>()
            .join(",");

        tracing::error!(
            phase = "provider",
            event = "exhausted",
            attempts = failures.len(),
            providers = %providers
        );
    }
}
