//! HTTP surface: `POST /api/chat`, `GET /api/models`, and `GET /health`.
//!
//! Chat bodies use the browser client's camelCase shape:
//!
//! ```json
//! {
//!   "messages": [{"role": "user", "content": "hello"}],
//!   "model": "g:llama-3.3-70b-versatile",
//!   "apiKeys": {"groq": "gsk-..."}
//! }
//! ```

use std::future::Future;
use std::sync::Arc;

use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use gzchat::{ChatError, ChatErrorKind, ChatReply, ChatRequest, ChatService};
use gzprovider::{CatalogEntry, Citation, CredentialStore, Message, ProviderId, catalog_entries};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tracing::{info, warn};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatBody {
    #[serde(default)]
    pub messages: Vec<Message>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub api_keys: ApiKeysBody,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiKeysBody {
    pub groq: Option<String>,
    pub huggingface: Option<String>,
    pub openrouter: Option<String>,
    pub search: Option<String>,
}

impl From<ApiKeysBody> for CredentialStore {
    fn from(value: ApiKeysBody) -> Self {
        CredentialStore::new()
            .with_optional_key(ProviderId::Groq, value.groq)
            .with_optional_key(ProviderId::HuggingFace, value.huggingface)
            .with_optional_key(ProviderId::OpenRouter, value.openrouter)
            .with_optional_key(ProviderId::Search, value.search)
    }
}

impl From<ChatBody> for ChatRequest {
    fn from(value: ChatBody) -> Self {
        let mut request = ChatRequest::new(value.messages).with_api_keys(value.api_keys.into());
        request.model = value.model;
        request
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatResponseBody {
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub citations: Option<Vec<Citation>>,
}

impl From<ChatReply> for ChatResponseBody {
    fn from(value: ChatReply) -> Self {
        Self {
            content: value.content,
            citations: value.citations,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorBody {
    pub error: &'static str,
    pub code: &'static str,
}

/// Wraps [`ChatError`] so handlers can return it directly.
#[derive(Debug)]
pub struct ApiError(pub ChatError);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.http_status())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let body = ErrorBody {
            error: self.0.user_message(),
            code: self.0.code(),
        };
        (status, Json(body)).into_response()
    }
}

impl From<ChatError> for ApiError {
    fn from(value: ChatError) -> Self {
        Self(value)
    }
}

pub fn router(service: Arc<ChatService>) -> Router {
    Router::new()
        .route("/api/chat", post(chat))
        .route("/api/models", get(models))
        .route("/health", get(health))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(service)
}

async fn chat(
    State(service): State<Arc<ChatService>>,
    body: Result<Json<ChatBody>, JsonRejection>,
) -> Result<Json<ChatResponseBody>, ApiError> {
    let Json(body) = body.map_err(|rejection| {
        warn!(
            phase = "http",
            event = "bad_body",
            error = %rejection.body_text(),
            "rejected chat body"
        );
        ChatError::new(ChatErrorKind::InvalidRequest, rejection.body_text())
    })?;

    let reply = service.respond(body.into()).await?;
    Ok(Json(reply.into()))
}

async fn models() -> Json<Vec<CatalogEntry>> {
    Json(catalog_entries())
}

async fn health() -> &'static str {
    "ok"
}

/// Serves until `shutdown` resolves.
pub async fn serve(
    listener: TcpListener,
    service: Arc<ChatService>,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> std::io::Result<()> {
    if let Ok(addr) = listener.local_addr() {
        info!(phase = "http", event = "listening", %addr, "genz gateway listening");
    }

    axum::serve(listener, router(service))
        .with_graceful_shutdown(shutdown)
        .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chat_body_accepts_camel_case_keys_and_drops_blank_ones() {
        let body: ChatBody = serde_json::from_str(
            r#"{
                "messages": [{"role": "user", "content": "hi"}],
                "model": "hf:Qwen/Qwen2.5-72B-Instruct",
                "apiKeys": {"groq": "gsk-caller", "openrouter": "  "}
            }"#,
        )
        .expect("parse");

        let request = ChatRequest::from(body);
        assert_eq!(request.messages, vec![Message::user("hi")]);
        assert_eq!(request.model.as_deref(), Some("hf:Qwen/Qwen2.5-72B-Instruct"));
        assert!(request.api_keys.contains(ProviderId::Groq));
        assert!(!request.api_keys.contains(ProviderId::OpenRouter));
        assert_eq!(request.api_keys.len(), 1);
    }

    #[test]
    fn missing_fields_default_to_empty() {
        let body: ChatBody = serde_json::from_str("{}").expect("parse");
        assert!(body.messages.is_empty());
        assert!(body.model.is_none());
    }

    #[test]
    fn response_omits_citations_unless_search_answered() {
        let direct = ChatResponseBody::from(ChatReply::direct(ProviderId::Groq, "hello!"));
        assert_eq!(
            serde_json::to_value(&direct).expect("json"),
            serde_json::json!({"content": "hello!"})
        );

        let searched = ChatResponseBody {
            content: "found".to_string(),
            citations: Some(Vec::new()),
        };
        assert_eq!(
            serde_json::to_value(&searched).expect("json"),
            serde_json::json!({"content": "found", "citations": []})
        );
    }

    #[test]
    fn errors_map_to_status_and_user_message() {
        let response = ApiError(ChatError::invalid_request("empty")).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response =
            ApiError(ChatError::new(ChatErrorKind::AllFailed, "everything failed")).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
