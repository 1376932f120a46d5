mod support;

use std::sync::Arc;

use gzchat::search::{SEARCH_UNAVAILABLE_MESSAGE, SUMMARY_SYSTEM_PROMPT};
use gzchat::{ChatRequest, ChatService};
use gzprovider::{CredentialStore, Message, ProviderError, ProviderId};

use support::{FakeSearch, ProviderCalls, hits, scripted_registry};

fn keys_with_search() -> Arc<CredentialStore> {
    Arc::new(
        CredentialStore::new()
            .with_key(ProviderId::Groq, "env-groq")
            .with_key(ProviderId::Search, "env-serper"),
    )
}

fn service(
    search: Arc<FakeSearch>,
    summary: Result<&str, ProviderError>,
    keys: Arc<CredentialStore>,
) -> (ChatService, ProviderCalls) {
    let (registry, calls) = scripted_registry(vec![(ProviderId::Groq, summary)]);
    let service = ChatService::builder(registry, search)
        .process_credentials(keys)
        .build();
    (service, calls)
}

fn search_request(messages: Vec<Message>) -> ChatRequest {
    ChatRequest::new(messages).with_model("web:web-search")
}

#[tokio::test]
async fn missing_search_key_is_a_soft_failure_without_network() {
    let search = Arc::new(FakeSearch::returning(Ok(hits(3))));
    let (service, calls) = service(
        search.clone(),
        Ok("unused"),
        Arc::new(CredentialStore::new().with_key(ProviderId::Groq, "env-groq")),
    );

    let reply = service
        .respond(search_request(vec![Message::user("rust")]))
        .await
        .expect("search never fails");

    assert_eq!(reply.content, SEARCH_UNAVAILABLE_MESSAGE);
    assert_eq!(reply.citations, Some(Vec::new()));
    assert_eq!(search.query_count(), 0);
    assert!(calls.lock().expect("calls lock").is_empty());
}

#[tokio::test]
async fn successful_search_is_summarized_with_citations() {
    let search = Arc::new(FakeSearch::returning(Ok(hits(5))));
    let (service, calls) = service(search.clone(), Ok("Rust is great [1]."), keys_with_search());

    let reply = service
        .respond(search_request(vec![
            Message::user("old question"),
            Message::assistant("old answer"),
            Message::user("what is rust"),
        ]))
        .await
        .expect("search never fails");

    assert_eq!(reply.content, "Rust is great [1].");
    assert_eq!(reply.provider, ProviderId::Search);
    let citations = reply.citations.expect("citations");
    assert_eq!(citations.len(), 5);
    assert_eq!(citations[0].url, "https://example.test/1");
    assert_eq!(citations[4].title, "Title 5");

    let queries = search.queries.lock().expect("queries lock").clone();
    assert_eq!(
        queries,
        vec![("what is rust".to_string(), 5, "env-serper".to_string())]
    );

    let calls = calls.lock().expect("calls lock");
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].messages[0], Message::system(SUMMARY_SYSTEM_PROMPT));
    assert!(calls[0].messages[1].content.starts_with("Question: what is rust\n\nSearch Results:\n[1] Title 1\nSnippet 1"));
}

#[tokio::test]
async fn summary_failure_keeps_citations_and_raw_context() {
    let search = Arc::new(FakeSearch::returning(Ok(hits(2))));
    let (service, _calls) = service(
        search,
        Err(ProviderError::rate_limited("429")),
        keys_with_search(),
    );

    let reply = service
        .respond(search_request(vec![Message::user("tokio")]))
        .await
        .expect("search never fails");

    assert_eq!(
        reply.content,
        "Here's what I found:\n\n[1] Title 1\nSnippet 1\n\n[2] Title 2\nSnippet 2"
    );
    assert_eq!(reply.citations.map(|c| c.len()), Some(2));
}

#[tokio::test]
async fn search_timeout_apologizes_about_duration() {
    let search = Arc::new(FakeSearch::returning(Err(ProviderError::timeout("15s"))));
    let (service, calls) = service(search, Ok("unused"), keys_with_search());

    let reply = service
        .respond(search_request(vec![Message::user("slow")]))
        .await
        .expect("search never fails");

    assert_eq!(
        reply.content,
        "I couldn't complete the web search right now. The search took too long."
    );
    assert_eq!(reply.citations, Some(Vec::new()));
    assert!(calls.lock().expect("calls lock").is_empty());
}

#[tokio::test]
async fn search_backend_error_apologizes_generically() {
    let search = Arc::new(FakeSearch::returning(Err(ProviderError::api("http 500"))));
    let (service, _calls) = service(search, Ok("unused"), keys_with_search());

    let reply = service
        .respond(search_request(vec![Message::user("q")]))
        .await
        .expect("search never fails");

    assert_eq!(
        reply.content,
        "I couldn't complete the web search right now. Please try again in a moment."
    );
}

#[tokio::test]
async fn caller_search_key_and_missing_user_message() {
    let search = Arc::new(FakeSearch::returning(Ok(Vec::new())));
    let (service, _calls) = service(search.clone(), Ok("nothing found"), keys_with_search());

    service
        .respond(
            search_request(vec![Message::assistant("only assistant")])
                .with_api_keys(CredentialStore::new().with_key(ProviderId::Search, "caller-serper")),
        )
        .await
        .expect("search never fails");

    let queries = search.queries.lock().expect("queries lock").clone();
    assert_eq!(queries, vec![(String::new(), 5, "caller-serper".to_string())]);
}
