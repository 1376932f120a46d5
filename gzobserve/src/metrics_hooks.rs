//! Metrics-based observability hooks for fallback attempts.
//!
//! ```rust
//! use gzobserve::MetricsObservabilityHooks;
//! use gzprovider::FallbackHooks;
//!
//! fn accepts_fallback_hooks(_hooks: &dyn FallbackHooks) {}
//!
//! let hooks = MetricsObservabilityHooks;
//! accepts_fallback_hooks(&hooks);
//! ```

use std::time::Duration;

use gzprovider::{AttemptFailure, FallbackHooks, ProviderError, ProviderId};

#[derive(Debug, Clone, Copy, Default)]
pub struct MetricsObservabilityHooks;

impl FallbackHooks for MetricsObservabilityHooks {
    fn on_attempt_start(&self, provider: ProviderId, model: &str, _position: usize) {
        metrics::counter!(
            "genz_provider_attempt_total",
            "provider" => provider.to_string(),
            "model" => model.to_string()
        )
        .increment(1);
    }

    fn on_attempt_failure(
        &self,
        provider: ProviderId,
        _position: usize,
        elapsed: Duration,
        error: &ProviderError,
    ) {
        metrics::counter!(
            "genz_provider_failure_total",
            "provider" => provider.to_string(),
            "error_kind" => error.kind.code()
        )
        .increment(1);
        metrics::histogram!(
            "genz_provider_attempt_duration_seconds",
            "provider" => provider.to_string(),
            "outcome" => "failure"
        )
        .record(elapsed.as_secs_f64());
    }

    fn on_success(&self, provider: ProviderId, position: usize, elapsed: Duration) {
        metrics::counter!(
            "genz_provider_success_total",
            "provider" => provider.to_string(),
            "fallback" => if position > 0 { "true" } else { "false" }
        )
        .increment(1);
        metrics::histogram!(
            "genz_provider_attempt_duration_seconds",
            "provider" => provider.to_string(),
            "outcome" => "success"
        )
        .record(elapsed.as_secs_f64());
    }

    fn on_exhausted(&self, failures: &[AttemptFailure]) {
        metrics::counter!("genz_fallback_exhausted_total").increment(1);
        metrics::histogram!("genz_fallback_exhausted_attempts").record(failures.len() as f64);
    }
}
