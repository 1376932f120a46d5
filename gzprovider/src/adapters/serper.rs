//! Serper (Google) web search adapter.

use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::adapters::compat::truncate;
use crate::deadline::with_deadline;
use crate::search::{SearchHit, SearchProvider};
use crate::{ProviderError, ProviderFuture, SecretString};

pub const SERPER_SEARCH_URL: &str = "https://google.serper.dev/search";
pub const SERPER_TIMEOUT: Duration = Duration::from_secs(15);

#[derive(Debug, Clone)]
pub struct SerperSearchProvider {
    client: Client,
    endpoint: String,
    timeout: Duration,
}

impl SerperSearchProvider {
    pub fn new(client: Client) -> Self {
        Self {
            client,
            endpoint: SERPER_SEARCH_URL.to_string(),
            timeout: SERPER_TIMEOUT,
        }
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn fetch(
        &self,
        query: &str,
        limit: usize,
        credential: &SecretString,
    ) -> Result<Vec<SearchHit>, ProviderError> {
        let response = self
            .client
            .post(&self.endpoint)
            .header("X-API-KEY", credential.expose())
            .json(&SerperRequest { q: query, num: limit })
            .send()
            .await
            .map_err(map_send_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::api(format!(
                "search http {status}: {}",
                truncate(&body, 4096)
            )));
        }

        let parsed = response
            .json::<SerperResponse>()
            .await
            .map_err(map_send_error)?;

        Ok(parsed
            .organic
            .into_iter()
            .take(limit)
            .map(|result| SearchHit {
                title: result.title,
                link: result.link,
                snippet: result.snippet,
            })
            .collect())
    }
}

impl SearchProvider for SerperSearchProvider {
    fn timeout(&self) -> Duration {
        self.timeout
    }

    fn search<'a>(
        &'a self,
        query: &'a str,
        limit: usize,
        credential: &'a SecretString,
    ) -> ProviderFuture<'a, Result<Vec<SearchHit>, ProviderError>> {
        Box::pin(with_deadline(self.timeout, self.fetch(query, limit, credential)))
    }
}

fn map_send_error(err: reqwest::Error) -> ProviderError {
    if err.is_timeout() {
        ProviderError::timeout(err.to_string())
    } else if err.is_decode() {
        ProviderError::other(format!("malformed search response: {err}"))
    } else {
        ProviderError::transport(err.to_string())
    }
}

#[derive(Debug, Serialize)]
struct SerperRequest<'a> {
    q: &'a str,
    num: usize,
}

#[derive(Debug, Deserialize)]
struct SerperResponse {
    #[serde(default)]
    organic: Vec<SerperOrganic>,
}

#[derive(Debug, Deserialize)]
struct SerperOrganic {
    #[serde(default)]
    title: String,
    #[serde(default)]
    link: String,
    #[serde(default)]
    snippet: String,
}
