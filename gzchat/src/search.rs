//! Search-augmented answers.
//!
//! One search call, then one summarization pass through the fallback
//! orchestrator. This pipeline never fails: a missing key, a search failure, or
//! a summarization failure each degrade to a renderable answer.

use std::sync::Arc;

use gzprovider::{
    Citation, Credentials, FallbackOrchestrator, Message, ProviderErrorKind, ProviderId,
    SearchHit, SearchProvider,
};
use tracing::warn;

use crate::SearchAnswer;

pub const SEARCH_RESULT_LIMIT: usize = 5;

pub const SEARCH_UNAVAILABLE_MESSAGE: &str = "Web search is not available right now. Please try again later or add your Serper API key in Settings.";

pub const SUMMARY_SYSTEM_PROMPT: &str = "You are a helpful assistant. Summarize the search results and provide a comprehensive answer. Cite sources using [1], [2], etc.";

const SEARCH_APOLOGY: &str = "I couldn't complete the web search right now.";

#[derive(Clone)]
pub struct SearchPipeline {
    search: Arc<dyn SearchProvider>,
    orchestrator: FallbackOrchestrator,
}

impl SearchPipeline {
    pub fn new(search: Arc<dyn SearchProvider>, orchestrator: FallbackOrchestrator) -> Self {
        Self {
            search,
            orchestrator,
        }
    }

    pub async fn answer(&self, query: &str, credentials: &Credentials) -> SearchAnswer {
        let Some(search_key) = credentials.resolve(ProviderId::Search) else {
            return SearchAnswer::without_citations(SEARCH_UNAVAILABLE_MESSAGE);
        };

        let hits = match self
            .search
            .search(query, SEARCH_RESULT_LIMIT, search_key)
            .await
        {
            Ok(hits) => hits,
            Err(error) => {
                warn!(
                    phase = "search",
                    event = "search_failed",
                    error_kind = error.kind.code(),
                    error = %error.message,
                    "web search failed"
                );
                let hint = if error.kind == ProviderErrorKind::Timeout {
                    "The search took too long."
                } else {
                    "Please try again in a moment."
                };
                return SearchAnswer::without_citations(format!("{SEARCH_APOLOGY} {hint}"));
            }
        };

        let context = build_context(&hits);
        let citations = hits.into_iter().map(Citation::from).collect::<Vec<_>>();

        let content = match self
            .orchestrator
            .call_with_fallback(&summary_messages(query, &context), credentials)
            .await
        {
            Ok(result) => result.content,
            Err(error) => {
                warn!(
                    phase = "search",
                    event = "summary_failed",
                    citations = citations.len(),
                    error = %error,
                    "summarization failed, returning raw search context"
                );
                format!("Here's what I found:\n\n{context}")
            }
        };

        SearchAnswer { content, citations }
    }
}

/// Numbered `[n] title\nsnippet` blocks, blank-line separated, 1-indexed.
pub fn build_context(hits: &[SearchHit]) -> String {
    hits.iter()
        .enumerate()
        .map(|(index, hit)| format!("[{}] {}\n{}", index + 1, hit.title, hit.snippet))
        .collect::<Vec<_>>()
        .join("\n\n")
}

pub fn summary_messages(query: &str, context: &str) -> Vec<Message> {
    vec![
        Message::system(SUMMARY_SYSTEM_PROMPT),
        Message::user(format!("Question: {query}\n\nSearch Results:\n{context}")),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hit(title: &str, snippet: &str) -> SearchHit {
        SearchHit {
            title: title.to_string(),
            link: format!("https://example.test/{title}"),
            snippet: snippet.to_string(),
        }
    }

    #[test]
    fn context_is_numbered_in_rank_order() {
        let context = build_context(&[hit("Rust", "A language"), hit("Tokio", "A runtime")]);
        assert_eq!(context, "[1] Rust\nA language\n\n[2] Tokio\nA runtime");
        assert_eq!(build_context(&[]), "");
    }

    #[test]
    fn summary_prompt_carries_question_and_context() {
        let messages = summary_messages("what is rust", "[1] Rust\nA language");
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].content, SUMMARY_SYSTEM_PROMPT);
        assert_eq!(
            messages[1].content,
            "Question: what is rust\n\nSearch Results:\n[1] Rust\nA language"
        );
    }
}
