#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use std::time::Duration;

use gzprovider::{
    Message, ModelProvider, ModelRequest, ModelResponse, ProviderError, ProviderFuture,
    ProviderId, ProviderRegistry, SearchHit, SearchProvider, SecretString,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderCall {
    pub provider: ProviderId,
    pub model: String,
    pub key: String,
    pub messages: Vec<Message>,
}

pub type ProviderCalls = Arc<Mutex<Vec<ProviderCall>>>;

pub struct ScriptedProvider {
    pub id: ProviderId,
    pub outcome: Result<String, ProviderError>,
    pub calls: ProviderCalls,
}

impl ModelProvider for ScriptedProvider {
    fn id(&self) -> ProviderId {
        self.id
    }

    fn timeout(&self) -> Duration {
        Duration::from_secs(30)
    }

    fn complete<'a>(
        &'a self,
        request: ModelRequest,
        credential: Option<&'a SecretString>,
    ) -> ProviderFuture<'a, Result<ModelResponse, ProviderError>> {
        Box::pin(async move {
            let Some(key) = credential else {
                return Err(ProviderError::missing_credential("no key"));
            };
            self.calls.lock().expect("calls lock").push(ProviderCall {
                provider: self.id,
                model: request.model.clone(),
                key: key.expose().to_string(),
                messages: request.messages.clone(),
            });
            self.outcome.clone().map(|content| ModelResponse {
                provider: self.id,
                model: request.model,
                content,
            })
        })
    }
}

pub fn scripted_registry(
    outcomes: Vec<(ProviderId, Result<&str, ProviderError>)>,
) -> (Arc<ProviderRegistry>, ProviderCalls) {
    let calls = ProviderCalls::default();
    let mut registry = ProviderRegistry::new();
    for (id, outcome) in outcomes {
        registry.register(ScriptedProvider {
            id,
            outcome: outcome.map(str::to_string),
            calls: Arc::clone(&calls),
        });
    }
    (Arc::new(registry), calls)
}

#[derive(Default)]
pub struct FakeSearch {
    pub outcome: Mutex<Option<Result<Vec<SearchHit>, ProviderError>>>,
    pub queries: Mutex<Vec<(String, usize, String)>>,
}

impl FakeSearch {
    pub fn returning(outcome: Result<Vec<SearchHit>, ProviderError>) -> Self {
        Self {
            outcome: Mutex::new(Some(outcome)),
            queries: Mutex::new(Vec::new()),
        }
    }

    pub fn query_count(&self) -> usize {
        self.queries.lock().expect("queries lock").len()
    }
}

impl SearchProvider for FakeSearch {
    fn timeout(&self) -> Duration {
        Duration::from_secs(15)
    }

    fn search<'a>(
        &'a self,
        query: &'a str,
        limit: usize,
        credential: &'a SecretString,
    ) -> ProviderFuture<'a, Result<Vec<SearchHit>, ProviderError>> {
        Box::pin(async move {
            self.queries.lock().expect("queries lock").push((
                query.to_string(),
                limit,
                credential.expose().to_string(),
            ));
            self.outcome
                .lock()
                .expect("outcome lock")
                .clone()
                .unwrap_or_else(|| Ok(Vec::new()))
        })
    }
}

pub fn hits(count: usize) -> Vec<SearchHit> {
    (1..=count)
        .map(|rank| SearchHit {
            title: format!("Title {rank}"),
            link: format!("https://example.test/{rank}"),
            snippet: format!("Snippet {rank}"),
        })
        .collect()
}
