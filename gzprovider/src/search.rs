//! Web search contract used by the search-augmentation pipeline.

use std::time::Duration;

use crate::{Citation, ProviderError, ProviderFuture, SecretString};

/// One organic result, in engine rank order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchHit {
    pub title: String,
    pub link: String,
    pub snippet: String,
}

impl From<SearchHit> for Citation {
    fn from(value: SearchHit) -> Self {
        Self {
            title: value.title,
            url: value.link,
            snippet: value.snippet,
        }
    }
}

pub trait SearchProvider: Send + Sync {
    fn timeout(&self) -> Duration;

    /// Returns at most `limit` hits. A non-success response is an error.
    fn search<'a>(
        &'a self,
        query: &'a str,
        limit: usize,
        credential: &'a SecretString,
    ) -> ProviderFuture<'a, Result<Vec<SearchHit>, ProviderError>>;
}
