//! Shared plumbing for OpenAI-compatible chat-completions backends.

mod serde_api;
mod transport;
mod types;

pub use transport::{ChatCompletionsTransport, HttpChatTransport, StatusPolicy};
pub use types::{ChatCompletionRequest, ChatCompletionResponse, NO_RESPONSE_PLACEHOLDER};

pub(crate) use serde_api::truncate;
