//! Chat-completions transport trait and reqwest-based HTTP implementation.

use reqwest::{Client, StatusCode};

use crate::{ProviderError, ProviderFuture, SecretString};

use super::serde_api::{
    ApiRequest, ApiResponse, MAX_ERROR_BODY_BYTES, extract_error_message, truncate,
};
use super::types::{ChatCompletionRequest, ChatCompletionResponse};

pub trait ChatCompletionsTransport: Send + Sync + std::fmt::Debug {
    fn complete<'a>(
        &'a self,
        request: ChatCompletionRequest,
        api_key: &'a SecretString,
    ) -> ProviderFuture<'a, Result<ChatCompletionResponse, ProviderError>>;
}

/// Backend-specific interpretation of non-success statuses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatusPolicy {
    /// Treat 503 as a cold model rather than a generic API failure.
    pub unavailable_means_loading: bool,
}

impl StatusPolicy {
    pub fn model_loading_on_unavailable() -> Self {
        Self {
            unavailable_means_loading: true,
        }
    }

    pub fn classify(&self, status: StatusCode, body: &str) -> ProviderError {
        match status {
            StatusCode::TOO_MANY_REQUESTS => ProviderError::rate_limited(
                extract_error_message(body).unwrap_or_else(|| "rate limit exceeded".to_string()),
            ),
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => ProviderError::unauthorized(
                extract_error_message(body)
                    .unwrap_or_else(|| format!("credential rejected with status {status}")),
            ),
            StatusCode::SERVICE_UNAVAILABLE if self.unavailable_means_loading => {
                ProviderError::model_loading("model is loading, retry shortly")
            }
            StatusCode::BAD_REQUEST => ProviderError::invalid_request(format!(
                "http {status}: {}",
                truncate(body, MAX_ERROR_BODY_BYTES)
            )),
            _ => ProviderError::api(format!(
                "http {status}: {}",
                truncate(body, MAX_ERROR_BODY_BYTES)
            )),
        }
    }
}

#[derive(Debug, Clone)]
pub struct HttpChatTransport {
    client: Client,
    endpoint: String,
    headers: Vec<(String, String)>,
    policy: StatusPolicy,
}

impl HttpChatTransport {
    pub fn new(client: Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
            headers: Vec::new(),
            policy: StatusPolicy::default(),
        }
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn with_status_policy(mut self, policy: StatusPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }

    pub fn status_policy(&self) -> StatusPolicy {
        self.policy
    }
}

pub(crate) fn map_reqwest_error(err: reqwest::Error) -> ProviderError {
    if err.is_timeout() {
        ProviderError::timeout(err.to_string())
    } else if err.is_decode() {
        ProviderError::other(format!("malformed response body: {err}"))
    } else {
        ProviderError::transport(err.to_string())
    }
}

impl ChatCompletionsTransport for HttpChatTransport {
    fn complete<'a>(
        &'a self,
        request: ChatCompletionRequest,
        api_key: &'a SecretString,
    ) -> ProviderFuture<'a, Result<ChatCompletionResponse, ProviderError>> {
        Box::pin(async move {
            let body = ApiRequest::from(&request);
            let mut builder = self
                .client
                .post(&self.endpoint)
                .bearer_auth(api_key.expose())
                .json(&body);

            for (name, value) in &self.headers {
                builder = builder.header(name.as_str(), value.as_str());
            }

            let response = builder.send().await.map_err(map_reqwest_error)?;

            let status = response.status();
            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                return Err(self.policy.classify(status, &body));
            }

            let parsed: ApiResponse = response.json().await.map_err(map_reqwest_error)?;
            Ok(ChatCompletionResponse::from(parsed))
        })
    }
}
