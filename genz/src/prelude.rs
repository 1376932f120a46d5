//! Common imports for most genz applications.

pub use crate::{
    ChatError, ChatErrorKind, ChatReply, ChatRequest, ChatService, ChatServiceBuilder,
    CredentialStore, GenzConfig, Message, ModelProvider, ProviderError, ProviderId, Role,
    SearchProvider,
};
pub use crate::{
    ask, assistant_message, build_chat_service, init_tracing, parse_provider_id, router, serve,
    system_message, user_message,
};
pub use crate::{gz_messages, gz_msg};
