use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::Arc;
use std::time::Duration;

use gzprovider::{AttemptFailure, FallbackHooks, ProviderError, ProviderId};

/// Runs the wrapped hooks but swallows any panic they raise.
pub struct SafeFallbackHooks<H> {
    inner: H,
}

impl<H> SafeFallbackHooks<H> {
    pub fn new(inner: H) -> Self {
        Self { inner }
    }
}

impl<H> FallbackHooks for SafeFallbackHooks<H>
where
    H: FallbackHooks,
{
    fn on_attempt_start(&self, provider: ProviderId, model: &str, position: usize) {
        let _ = catch_unwind(AssertUnwindSafe(|| {
            self.inner.on_attempt_start(provider, model, position)
        }));
    }

    fn on_attempt_failure(
        &self,
        provider: ProviderId,
        position: usize,
        elapsed: Duration,
        error: &ProviderError,
    ) {
        let _ = catch_unwind(AssertUnwindSafe(|| {
            self.inner
                .on_attempt_failure(provider, position, elapsed, error)
        }));
    }

    fn on_success(&self, provider: ProviderId, position: usize, elapsed: Duration) {
        let _ = catch_unwind(AssertUnwindSafe(|| {
            self.inner.on_success(provider, position, elapsed)
        }));
    }

    fn on_exhausted(&self, failures: &[AttemptFailure]) {
        let _ = catch_unwind(AssertUnwindSafe(|| self.inner.on_exhausted(failures)));
    }
}

/// Fans every callback out to each registered hook, in registration order.
#[derive(Default, Clone)]
pub struct CompositeFallbackHooks {
    hooks: Vec<Arc<dyn FallbackHooks>>,
}

impl CompositeFallbackHooks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, hooks: Arc<dyn FallbackHooks>) -> Self {
        self.hooks.push(hooks);
        self
    }

    pub fn len(&self) -> usize {
        self.hooks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hooks.is_empty()
    }
}

impl FallbackHooks for CompositeFallbackHooks {
    fn on_attempt_start(&self, provider: ProviderId, model: &str, position: usize) {
        for hooks in &self.hooks {
            hooks.on_attempt_start(provider, model, position);
        }
    }

    fn on_attempt_failure(
        &self,
        provider: ProviderId,
        position: usize,
        elapsed: Duration,
        error: &ProviderError,
    ) {
        for hooks in &self.hooks {
            hooks.on_attempt_failure(provider, position, elapsed, error);
        }
    }

    fn on_success(&self, provider: ProviderId, position: usize, elapsed: Duration) {
        for hooks in &self.hooks {
            hooks.on_success(provider, position, elapsed);
        }
    }

    fn on_exhausted(&self, failures: &[AttemptFailure]) {
        for hooks in &self.hooks {
            hooks.on_exhausted(failures);
        }
    }
}
