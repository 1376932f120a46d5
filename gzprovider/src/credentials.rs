//! Layered per-request credential resolution.
//!
//! A caller-supplied key always wins over the process-wide key for the same
//! provider. A provider with neither is unusable and is skipped by the fallback
//! chain without error.
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use gzprovider::{CredentialStore, Credentials, ProviderId};
//!
//! let process = Arc::new(CredentialStore::new().with_key(ProviderId::Groq, "gsk-process"));
//! let caller = CredentialStore::new().with_key(ProviderId::Groq, "gsk-caller");
//!
//! let credentials = Credentials::new(caller, process);
//! assert_eq!(
//!     credentials.resolve(ProviderId::Groq).map(|key| key.expose()),
//!     Some("gsk-caller")
//! );
//! assert!(!credentials.is_available(ProviderId::OpenRouter));
//! ```

use std::collections::HashMap;
use std::sync::Arc;

use crate::ProviderId;

/// Environment variable holding the process-wide key for each provider.
pub const PROCESS_KEY_VARS: [(ProviderId, &str); 4] = [
    (ProviderId::Groq, "GROQ_API_KEY"),
    (ProviderId::HuggingFace, "HF_API_KEY"),
    (ProviderId::OpenRouter, "OPENROUTER_API_KEY"),
    (ProviderId::Search, "SEARCH_API_KEY"),
];

#[derive(Clone, PartialEq, Eq)]
pub struct SecretString {
    value: String,
}

impl SecretString {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    pub fn expose(&self) -> &str {
        self.value.as_str()
    }

    pub fn is_blank(&self) -> bool {
        self.value.trim().is_empty()
    }
}

impl std::fmt::Debug for SecretString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("[REDACTED]")
    }
}

impl Drop for SecretString {
    fn drop(&mut self) {
        // SAFETY: zero bytes are valid UTF-8.
        unsafe {
            self.value.as_mut_vec().fill(0);
        }
    }
}

/// One layer of provider keys.
#[derive(Debug, Clone, Default)]
pub struct CredentialStore {
    keys: HashMap<ProviderId, SecretString>,
}

impl CredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads every provider key through `lookup`, keyed by [`PROCESS_KEY_VARS`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut store = Self::new();
        for (provider, var) in PROCESS_KEY_VARS {
            if let Some(value) = lookup(var) {
                store.set(provider, value);
            }
        }
        store
    }

    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Stores `key` unless it is blank. Returns whether the key was kept.
    pub fn set(&mut self, provider: ProviderId, key: impl Into<String>) -> bool {
        let secret = SecretString::new(key);
        if secret.is_blank() {
            return false;
        }

        self.keys.insert(provider, secret);
        true
    }

    pub fn with_key(mut self, provider: ProviderId, key: impl Into<String>) -> Self {
        self.set(provider, key);
        self
    }

    pub fn with_optional_key(self, provider: ProviderId, key: Option<impl Into<String>>) -> Self {
        match key {
            Some(key) => self.with_key(provider, key),
            None => self,
        }
    }

    pub fn get(&self, provider: ProviderId) -> Option<&SecretString> {
        self.keys.get(&provider)
    }

    pub fn contains(&self, provider: ProviderId) -> bool {
        self.keys.contains_key(&provider)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

/// Caller-supplied keys layered over the shared process-wide keys.
#[derive(Debug, Clone, Default)]
pub struct Credentials {
    caller: CredentialStore,
    process: Arc<CredentialStore>,
}

impl Credentials {
    pub fn new(caller: CredentialStore, process: Arc<CredentialStore>) -> Self {
        Self { caller, process }
    }

    pub fn process_only(process: Arc<CredentialStore>) -> Self {
        Self::new(CredentialStore::new(), process)
    }

    pub fn resolve(&self, provider: ProviderId) -> Option<&SecretString> {
        self.caller
            .get(provider)
            .or_else(|| self.process.get(provider))
    }

    pub fn is_available(&self, provider: ProviderId) -> bool {
        self.resolve(provider).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn secret_debug_is_redacted() {
        let secret = SecretString::new("gsk-live-123");
        assert_eq!(format!("{secret:?}"), "[REDACTED]");
        assert_eq!(secret.expose(), "gsk-live-123");
    }

    #[test]
    fn blank_keys_are_treated_as_absent() {
        let mut store = CredentialStore::new();
        assert!(!store.set(ProviderId::Groq, ""));
        assert!(!store.set(ProviderId::Groq, "   "));
        assert!(store.is_empty());

        let credentials = Credentials::new(
            CredentialStore::new().with_key(ProviderId::Groq, ""),
            Arc::new(CredentialStore::new().with_key(ProviderId::Groq, "gsk-process")),
        );
        assert_eq!(
            credentials.resolve(ProviderId::Groq).map(SecretString::expose),
            Some("gsk-process")
        );
    }

    #[test]
    fn caller_key_overrides_process_key() {
        let process = Arc::new(
            CredentialStore::new()
                .with_key(ProviderId::Groq, "process-groq")
                .with_key(ProviderId::HuggingFace, "process-hf"),
        );
        let caller = CredentialStore::new().with_key(ProviderId::HuggingFace, "caller-hf");
        let credentials = Credentials::new(caller, process);

        assert_eq!(
            credentials.resolve(ProviderId::Groq).map(SecretString::expose),
            Some("process-groq")
        );
        assert_eq!(
            credentials
                .resolve(ProviderId::HuggingFace)
                .map(SecretString::expose),
            Some("caller-hf")
        );
        assert!(!credentials.is_available(ProviderId::Search));
    }

    #[test]
    fn from_lookup_reads_each_named_variable() {
        let store = CredentialStore::from_lookup(|name| match name {
            "GROQ_API_KEY" => Some("gsk".to_string()),
            "SEARCH_API_KEY" => Some("serper".to_string()),
            "HF_API_KEY" => Some(String::new()),
            _ => None,
        });

        assert_eq!(store.len(), 2);
        assert!(store.contains(ProviderId::Groq));
        assert!(store.contains(ProviderId::Search));
        assert!(!store.contains(ProviderId::HuggingFace));
    }

    #[test]
    fn optional_keys_only_apply_when_present() {
        let store = CredentialStore::new()
            .with_optional_key(ProviderId::OpenRouter, Some("sk-or"))
            .with_optional_key(ProviderId::Groq, None::<String>);

        assert!(store.contains(ProviderId::OpenRouter));
        assert!(!store.contains(ProviderId::Groq));
    }
}
