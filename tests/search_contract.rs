use std::sync::Arc;

use context_search::corpus::Corpus;
use context_search::document::{Document, DocumentId};
use context_search::search;
use context_search::selection::{ContextSearcher, ScoringConfig};
use context_search::types::{Query, SearchResult};

fn make_doc(id: &str, title: &str, content: &str) -> Document {
    Document::new(DocumentId::new(id).unwrap(), title, content, "test_source")
}

fn ids(results: &[SearchResult]) -> Vec<&str> {
    results.iter().map(|r| r.id.as_str()).collect()
}

#[test]
fn golden_lease_agreement() {
    let corpus = Corpus::builtin();
    let results = search("lease agreement", &corpus);

    assert_eq!(ids(&results), vec!["lease-context", "services-contract-context"]);
    assert_eq!(results[0].relevance_score, 1.0);
    assert!((results[1].relevance_score - 0.5).abs() < 1e-5);
}

#[test]
fn golden_no_match() {
    let corpus = Corpus::builtin();
    assert!(search("xyzzy-nonexistent", &corpus).is_empty());
}

#[test]
fn golden_webhooks() {
    let corpus = Corpus::builtin();
    let results = search("webhooks", &corpus);

    assert_eq!(ids(&results), vec!["doc-2"]);
    assert!((results[0].relevance_score - 0.9).abs() < 1e-5);
    assert_eq!(results[0].title, "Getting Started with Webhooks");
    assert_eq!(results[0].source, "Integration Guide");
    assert_eq!(results[0].key_takeaways.len(), 4);
}

#[test]
fn golden_api() {
    let corpus = Corpus::builtin();
    let results = search("API", &corpus);

    // doc-3 only mentions the API in keywords and content.
    assert_eq!(ids(&results), vec!["doc-1", "doc-3"]);
    assert!((results[0].relevance_score - 0.9).abs() < 1e-5);
    assert!((results[1].relevance_score - 0.5).abs() < 1e-5);
}

#[test]
fn ties_keep_corpus_order_and_truncate_to_five() {
    let corpus = Corpus::builtin();
    // Every builtin document scores 0.9 on "e".
    let results = search("e", &corpus);

    assert_eq!(
        ids(&results),
        vec!["lease-context", "services-contract-context", "doc-1", "doc-2", "doc-3"]
    );
    assert!(results.iter().all(|r| r.relevance_score == results[0].relevance_score));
}

#[test]
fn blank_query_returns_nothing() {
    let corpus = Corpus::builtin();
    assert!(search("", &corpus).is_empty());
    assert!(search("   ", &corpus).is_empty());
}

#[test]
fn empty_corpus_returns_nothing() {
    let corpus = Corpus::new(Vec::new()).unwrap();
    assert!(search("anything", &corpus).is_empty());
}

#[test]
fn searcher_matches_free_function() {
    let corpus = Arc::new(Corpus::builtin());
    let searcher = ContextSearcher::with_defaults(Arc::clone(&corpus));

    for query in ["lease agreement", "webhooks", "api authentication tokens", "e", "nothing-here"] {
        assert_eq!(searcher.search(query), search(query, &corpus), "query {query:?}");
    }
}

#[test]
fn threshold_is_exclusive() {
    let corpus = Arc::new(
        Corpus::new(vec![
            make_doc("title-hit", "alpha", "x"),
            make_doc("content-hit", "x", "alpha"),
        ])
        .unwrap(),
    );

    let config = ScoringConfig {
        min_score: 0.2,
        ..ScoringConfig::v0()
    };
    let searcher = ContextSearcher::with_config(Arc::clone(&corpus), &config).unwrap();
    assert_eq!(ids(&searcher.search("alpha")), vec!["title-hit"]);

    let default_searcher = ContextSearcher::with_defaults(corpus);
    assert_eq!(ids(&default_searcher.search("alpha")), vec!["title-hit", "content-hit"]);
}

#[test]
fn custom_result_limit() {
    let corpus = Arc::new(Corpus::builtin());
    let config = ScoringConfig {
        max_results: 2,
        ..ScoringConfig::v0()
    };
    let searcher = ContextSearcher::with_config(corpus, &config).unwrap();
    assert_eq!(ids(&searcher.search("e")), vec!["lease-context", "services-contract-context"]);
}

#[test]
fn custom_weights_reorder_results() {
    let corpus = Arc::new(
        Corpus::new(vec![
            make_doc("title-hit", "alpha", "x"),
            make_doc("content-hit", "x", "alpha"),
        ])
        .unwrap(),
    );

    let config = ScoringConfig {
        content_weight: 0.9,
        ..ScoringConfig::v0()
    };
    let searcher = ContextSearcher::with_config(corpus, &config).unwrap();
    assert_eq!(ids(&searcher.search("alpha")), vec!["content-hit", "title-hit"]);
}

#[test]
fn rank_exposes_score_details() {
    let corpus = Arc::new(Corpus::builtin());
    let searcher = ContextSearcher::with_defaults(corpus);
    let ranked = searcher.rank(&Query::new("lease agreement"));

    let top = &ranked[0];
    assert_eq!(top.document.id.as_str(), "lease-context");
    assert_eq!(top.score_details.title_matches, 2);
    assert_eq!(top.score_details.keyword_matches, 2);
    assert_eq!(top.score_details.content_matches, 2);
    assert_eq!(top.score_details.matched_terms, vec!["lease", "agreement"]);
    assert!(top.score_details.raw_score > 1.0);
    assert_eq!(top.score, 1.0);
}

#[test]
fn idempotent_for_unchanged_corpus() {
    let corpus = Arc::new(Corpus::builtin());
    let searcher = ContextSearcher::with_defaults(corpus);

    let first = searcher.search("legal contract");
    let second = searcher.search("legal contract");
    assert_eq!(first, second);
    assert!(!first.is_empty());
}

#[test]
fn searcher_is_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Corpus>();
    assert_send_sync::<ContextSearcher>();
}
