pub mod config;
pub mod ranking;

use std::cmp::Ordering;
use std::sync::Arc;

use crate::corpus::Corpus;
use crate::document::Document;
use crate::types::search_result::{Query, ScoredDocument, SearchResult};
pub use config::{ConfigError, ScoringConfig};
pub use ranking::{KeywordScorer, Scorer};

/// Runs queries against one injected, read-only corpus.
#[derive(Debug, Clone)]
pub struct ContextSearcher<S = KeywordScorer> {
	corpus: Arc<Corpus>,
	scorer: S,
	min_score: f32,
	max_results: usize,
}

impl ContextSearcher<KeywordScorer> {
	/// Searcher with the v0 scoring constants.
	pub fn with_defaults(corpus: Arc<Corpus>) -> Self {
		let config = ScoringConfig::v0();
		Self {
			corpus,
			scorer: KeywordScorer::default(),
			min_score: config.min_score,
			max_results: config.max_results,
		}
	}

	pub fn with_config(corpus: Arc<Corpus>, config: &ScoringConfig) -> Result<Self, ConfigError> {
		let scorer = KeywordScorer::new(config)?;
		Ok(Self {
			corpus,
			scorer,
			min_score: config.min_score,
			max_results: config.max_results,
		})
	}
}

impl<S> ContextSearcher<S>
where
	S: Scorer,
{
	/// Searcher with a custom scorer; selection limits come from `config`.
	pub fn new(corpus: Arc<Corpus>, scorer: S, config: &ScoringConfig) -> Result<Self, ConfigError> {
		config.validate()?;
		Ok(Self {
			corpus,
			scorer,
			min_score: config.min_score,
			max_results: config.max_results,
		})
	}

	pub fn corpus(&self) -> &Corpus {
		&self.corpus
	}

	pub fn search(&self, raw: &str) -> Vec<SearchResult> {
		self.search_query(&Query::new(raw))
	}

	pub fn search_query(&self, query: &Query) -> Vec<SearchResult> {
		let ranked = self.rank(query);
		let results: Vec<SearchResult> = ranked.iter().map(SearchResult::from_scored).collect();

		tracing::debug!(
			query = %query.raw,
			terms = query.terms.len(),
			candidates = self.corpus.len(),
			returned = results.len(),
			"Search completed"
		);

		results
	}

	/// Scored, filtered, ordered and truncated documents, with score details.
	pub fn rank<'a>(&'a self, query: &Query) -> Vec<ScoredDocument<'a>> {
		rank_documents(
			self.corpus.documents(),
			&self.scorer,
			query,
			self.min_score,
			self.max_results,
		)
	}
}

/// Search `corpus` with the v0 scoring constants.
pub fn search(query: &str, corpus: &Corpus) -> Vec<SearchResult> {
	let config = ScoringConfig::v0();
	rank_documents(
		corpus.documents(),
		&KeywordScorer::default(),
		&Query::new(query),
		config.min_score,
		config.max_results,
	)
	.iter()
	.map(SearchResult::from_scored)
	.collect()
}

fn rank_documents<'a, S: Scorer>(
	documents: &'a [Document],
	scorer: &S,
	query: &Query,
	min_score: f32,
	max_results: usize,
) -> Vec<ScoredDocument<'a>> {
	if query.is_empty() {
		return Vec::new();
	}

	// 1. Scoring Phase
	let mut scored_docs: Vec<ScoredDocument<'a>> = documents
		.iter()
		.map(|doc| {
			let details = scorer.score(doc, query);
			let score = scorer.score_value(&details);
			ScoredDocument {
				document: doc,
				score,
				score_details: details,
			}
		})
		.filter(|sdoc| sdoc.score > min_score)
		.collect();

	// 2. Ordering Phase
	// Stable sort by score desc; ties keep corpus order
	scored_docs.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));

	debug_assert!(scored_docs.windows(2).all(|w| w[0].score >= w[1].score));

	// 3. Truncation Phase
	scored_docs.truncate(max_results);

	scored_docs
}
