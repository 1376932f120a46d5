//! Typed adapter failures, classified at the point of detection.
//!
//! ```rust
//! use gzprovider::{ProviderError, ProviderErrorKind};
//!
//! let limited = ProviderError::rate_limited("rate limit exceeded");
//! assert_eq!(limited.kind, ProviderErrorKind::RateLimited);
//! assert_eq!(limited.to_string(), "RATE_LIMIT: rate limit exceeded");
//! ```

use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderErrorKind {
    MissingCredential,
    RateLimited,
    Unauthorized,
    ModelLoading,
    InvalidRequest,
    Api,
    Timeout,
    Transport,
    Other,
}

impl ProviderErrorKind {
    pub const fn code(self) -> &'static str {
        match self {
            Self::MissingCredential => "NO_KEY",
            Self::RateLimited => "RATE_LIMIT",
            Self::Unauthorized => "UNAUTHORIZED",
            Self::ModelLoading => "MODEL_LOADING",
            Self::InvalidRequest => "INVALID_REQUEST",
            Self::Api => "API_ERROR",
            Self::Timeout => "TIMEOUT",
            Self::Transport => "NETWORK_ERROR",
            Self::Other => "UNKNOWN",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderError {
    pub kind: ProviderErrorKind,
    pub message: String,
}

impl ProviderError {
    pub fn new(kind: ProviderErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn missing_credential(message: impl Into<String>) -> Self {
        Self::new(ProviderErrorKind::MissingCredential, message)
    }

    pub fn rate_limited(message: impl Into<String>) -> Self {
        Self::new(ProviderErrorKind::RateLimited, message)
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(ProviderErrorKind::Unauthorized, message)
    }

    pub fn model_loading(message: impl Into<String>) -> Self {
        Self::new(ProviderErrorKind::ModelLoading, message)
    }

    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(ProviderErrorKind::InvalidRequest, message)
    }

    pub fn api(message: impl Into<String>) -> Self {
        Self::new(ProviderErrorKind::Api, message)
    }

    pub fn timeout(message: impl Into<String>) -> Self {
        Self::new(ProviderErrorKind::Timeout, message)
    }

    pub fn transport(message: impl Into<String>) -> Self {
        Self::new(ProviderErrorKind::Transport, message)
    }

    pub fn other(message: impl Into<String>) -> Self {
        Self::new(ProviderErrorKind::Other, message)
    }
}

impl Display for ProviderError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.kind.code(), self.message)
    }
}

impl Error for ProviderError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn helper_builders_assign_expected_kinds() {
        assert_eq!(
            ProviderError::missing_credential("no key").kind,
            ProviderErrorKind::MissingCredential
        );
        assert_eq!(
            ProviderError::unauthorized("bad key").kind,
            ProviderErrorKind::Unauthorized
        );
        assert_eq!(
            ProviderError::model_loading("warming up").kind,
            ProviderErrorKind::ModelLoading
        );
        assert_eq!(ProviderError::api("boom").kind, ProviderErrorKind::Api);
        assert_eq!(
            ProviderError::transport("reset").kind,
            ProviderErrorKind::Transport
        );
    }

    #[test]
    fn display_prefixes_the_stable_code() {
        assert_eq!(
            ProviderError::timeout("request timed out").to_string(),
            "TIMEOUT: request timed out"
        );
        assert_eq!(
            ProviderError::missing_credential("Groq API key not available").to_string(),
            "NO_KEY: Groq API key not available"
        );
        assert_eq!(ProviderError::other("?").to_string(), "UNKNOWN: ?");
    }
}
