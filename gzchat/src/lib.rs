//! Chat entry point over the genz provider layer.
//!
//! ```rust
//! use gzchat::{ChatErrorKind, ChatRequest};
//! use gzprovider::Message;
//!
//! let request = ChatRequest::new(vec![Message::user("first"), Message::assistant("ok"), Message::user("second")])
//!     .with_model("web:web-search");
//! assert_eq!(request.last_user_content(), "second");
//! assert_eq!(ChatErrorKind::InvalidRequest.code(), "INVALID_REQUEST");
//! ```

mod error;
pub mod search;
mod service;
mod types;

pub mod prelude {
    pub use crate::{
        ChatError, ChatErrorKind, ChatReply, ChatRequest, ChatService, ChatServiceBuilder,
        SearchAnswer, SearchPipeline,
    };
}

pub use error::{ChatError, ChatErrorKind};
pub use search::SearchPipeline;
pub use service::{ChatService, ChatServiceBuilder, DEFAULT_SYSTEM_PROMPT};
pub use types::{ChatReply, ChatRequest, SearchAnswer};
