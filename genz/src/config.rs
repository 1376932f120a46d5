//! Environment-driven gateway configuration.
//!
//! Blank variables are treated as unset.
//!
//! ```rust
//! use genz::GenzConfig;
//!
//! let config = GenzConfig::from_lookup(|name| match name {
//!     "GENZ_BIND_ADDR" => Some("127.0.0.1:8080".to_string()),
//!     "GROQ_API_KEY" => Some("gsk-test".to_string()),
//!     _ => None,
//! })
//! .expect("valid config");
//!
//! assert_eq!(config.bind_addr.port(), 8080);
//! assert_eq!(config.app_title, "GenZ AI");
//! ```

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::net::SocketAddr;

use gzchat::DEFAULT_SYSTEM_PROMPT;
use gzprovider::CredentialStore;
use gzprovider::adapters::openrouter::{Attribution, DEFAULT_APP_TITLE, DEFAULT_APP_URL};

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    pub variable: &'static str,
    pub message: String,
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid {}: {}", self.variable, self.message)
    }
}

impl Error for ConfigError {}

/// Base-URL overrides for self-hosted gateways and tests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EndpointOverrides {
    pub groq: Option<String>,
    pub huggingface: Option<String>,
    pub openrouter: Option<String>,
    pub search: Option<String>,
}

#[derive(Debug, Clone)]
pub struct GenzConfig {
    pub bind_addr: SocketAddr,
    pub app_url: String,
    pub app_title: String,
    pub system_prompt: String,
    pub keys: CredentialStore,
    pub endpoints: EndpointOverrides,
}

impl GenzConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let bind = var("GENZ_BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind.parse::<SocketAddr>().map_err(|err| ConfigError {
            variable: "GENZ_BIND_ADDR",
            message: format!("{bind:?}: {err}"),
        })?;

        Ok(Self {
            bind_addr,
            app_url: var("GENZ_APP_URL")
                .or_else(|| var("NEXT_PUBLIC_APP_URL"))
                .unwrap_or_else(|| DEFAULT_APP_URL.to_string()),
            app_title: var("GENZ_APP_TITLE").unwrap_or_else(|| DEFAULT_APP_TITLE.to_string()),
            system_prompt: var("GENZ_SYSTEM_PROMPT")
                .unwrap_or_else(|| DEFAULT_SYSTEM_PROMPT.to_string()),
            keys: CredentialStore::from_lookup(&var),
            endpoints: EndpointOverrides {
                groq: var("GENZ_GROQ_URL"),
                huggingface: var("GENZ_HF_URL"),
                openrouter: var("GENZ_OPENROUTER_URL"),
                search: var("GENZ_SEARCH_URL"),
            },
        })
    }

    pub fn attribution(&self) -> Attribution {
        Attribution {
            referer: self.app_url.clone(),
            title: self.app_title.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use gzprovider::ProviderId;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect::<HashMap<_, _>>();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let config = GenzConfig::from_lookup(lookup(&[])).expect("defaults are valid");

        assert_eq!(config.bind_addr.to_string(), DEFAULT_BIND_ADDR);
        assert_eq!(config.app_url, "https://genz-ai.vercel.app");
        assert_eq!(config.app_title, "GenZ AI");
        assert_eq!(config.system_prompt, DEFAULT_SYSTEM_PROMPT);
        assert!(config.keys.is_empty());
        assert_eq!(config.endpoints, EndpointOverrides::default());
    }

    #[test]
    fn blank_values_are_unset_and_legacy_app_url_is_honored() {
        let config = GenzConfig::from_lookup(lookup(&[
            ("GENZ_APP_URL", "  "),
            ("NEXT_PUBLIC_APP_URL", "https://legacy.example.test"),
            ("GROQ_API_KEY", ""),
            ("HF_API_KEY", "hf-key"),
            ("GENZ_SEARCH_URL", "http://127.0.0.1:9000/search"),
        ]))
        .expect("valid config");

        assert_eq!(config.app_url, "https://legacy.example.test");
        assert!(!config.keys.contains(ProviderId::Groq));
        assert!(config.keys.contains(ProviderId::HuggingFace));
        assert_eq!(
            config.endpoints.search.as_deref(),
            Some("http://127.0.0.1:9000/search")
        );
        assert_eq!(config.attribution().referer, "https://legacy.example.test");
    }

    #[test]
    fn invalid_bind_address_is_reported() {
        let error = GenzConfig::from_lookup(lookup(&[("GENZ_BIND_ADDR", "not-an-addr")]))
            .expect_err("invalid address");

        assert_eq!(error.variable, "GENZ_BIND_ADDR");
        assert!(error.to_string().starts_with("invalid GENZ_BIND_ADDR"));
    }
}
