//! User-facing error taxonomy for chat requests.
//!
//! Every failure that escapes the entry point is mapped onto one of a fixed set
//! of kinds. Each kind has a stable code, a fixed user message, and an HTTP
//! status. Provider details stay in [`ChatError::message`] for logs only.

use std::error::Error;
use std::fmt::{Display, Formatter};

use gzprovider::{FallbackError, ProviderError, ProviderErrorKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatErrorKind {
    RateLimit,
    ApiKeyMissing,
    ApiError,
    NetworkError,
    InvalidRequest,
    Timeout,
    AllFailed,
    Unknown,
}

impl ChatErrorKind {
    pub const fn code(self) -> &'static str {
        match self {
            Self::RateLimit => "RATE_LIMIT",
            Self::ApiKeyMissing => "API_KEY_MISSING",
            Self::ApiError => "API_ERROR",
            Self::NetworkError => "NETWORK_ERROR",
            Self::InvalidRequest => "INVALID_REQUEST",
            Self::Timeout => "TIMEOUT",
            Self::AllFailed => "ALL_FAILED",
            Self::Unknown => "UNKNOWN",
        }
    }

    pub const fn user_message(self) -> &'static str {
        match self {
            Self::RateLimit => "Taking a quick breather! Please try again in a moment.",
            Self::ApiKeyMissing => {
                "Service temporarily unavailable. Please try again or add your own API key in Settings."
            }
            Self::ApiError => "Something went wrong. Please try again in a moment.",
            Self::NetworkError => "Connection issue. Please check your internet and try again.",
            Self::InvalidRequest => "Something went wrong with your request. Please try again.",
            Self::Timeout => "Request took too long. Please try with a shorter message.",
            Self::AllFailed => {
                "All services are busy. Please try again later or add your own API key in Settings."
            }
            Self::Unknown => "Something went wrong. Please try again.",
        }
    }

    pub const fn http_status(self) -> u16 {
        match self {
            Self::InvalidRequest => 400,
            _ => 500,
        }
    }
}

impl From<ProviderErrorKind> for ChatErrorKind {
    fn from(value: ProviderErrorKind) -> Self {
        match value {
            ProviderErrorKind::MissingCredential | ProviderErrorKind::Unauthorized => {
                Self::ApiKeyMissing
            }
            ProviderErrorKind::RateLimited => Self::RateLimit,
            ProviderErrorKind::ModelLoading | ProviderErrorKind::Api => Self::ApiError,
            ProviderErrorKind::InvalidRequest => Self::InvalidRequest,
            ProviderErrorKind::Timeout => Self::Timeout,
            ProviderErrorKind::Transport => Self::NetworkError,
            ProviderErrorKind::Other => Self::Unknown,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatError {
    pub kind: ChatErrorKind,
    pub message: String,
}

impl ChatError {
    pub fn new(kind: ChatErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(ChatErrorKind::InvalidRequest, message)
    }

    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn user_message(&self) -> &'static str {
        self.kind.user_message()
    }

    pub fn http_status(&self) -> u16 {
        self.kind.http_status()
    }
}

impl Display for ChatError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.kind.code(), self.message)
    }
}

impl Error for ChatError {}

impl From<ProviderError> for ChatError {
    fn from(value: ProviderError) -> Self {
        ChatError::new(value.kind.into(), value.message)
    }
}

impl From<FallbackError> for ChatError {
    fn from(value: FallbackError) -> Self {
        let kind = match &value {
            FallbackError::NoCredentials => ChatErrorKind::ApiKeyMissing,
            FallbackError::Exhausted { .. } => ChatErrorKind::AllFailed,
        };
        ChatError::new(kind, value.to_string())
    }
}
