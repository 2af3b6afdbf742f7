use serde::{Deserialize, Serialize};

use crate::document::Document;

/// A normalized query.
/// Normalization rules:
/// - Lowercase
/// - Split on whitespace
/// - Duplicate terms are kept (each one scores on its own)
#[derive(Debug, Clone)]
pub struct Query {
    pub raw: String,
    pub terms: Vec<String>,
}

impl Query {
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let terms = raw
            .to_lowercase()
            .split_whitespace()
            .map(|s| s.to_string())
            .collect();

        Self { raw, terms }
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Distinct terms, in first-seen order.
    pub fn distinct_terms(&self) -> Vec<&str> {
        let mut seen = Vec::with_capacity(self.terms.len());
        for term in &self.terms {
            if !seen.contains(&term.as_str()) {
                seen.push(term.as_str());
            }
        }
        seen
    }
}

/// A document returned by a search.
/// Carries everything a caller renders; scoring keywords are not part of it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    pub id: String,
    pub title: String,
    pub content: String,
    pub key_takeaways: Vec<String>,
    pub source: String,
    pub relevance_score: f32,
}

impl SearchResult {
    pub fn from_scored(scored: &ScoredDocument<'_>) -> Self {
        let doc = scored.document;
        SearchResult {
            id: doc.id.as_str().to_string(),
            title: doc.title.clone(),
            content: doc.content.clone(),
            key_takeaways: doc.key_takeaways.clone(),
            source: doc.source.clone(),
            relevance_score: scored.score,
        }
    }

    /// Plain-text export used when a result is copied out of the results view.
    pub fn to_markdown(&self) -> String {
        let takeaways = self
            .key_takeaways
            .iter()
            .map(|t| format!("• {t}"))
            .collect::<Vec<_>>()
            .join("\n");

        format!(
            "# {}\n\n## Content\n{}\n\n## Key Takeaways\n{}\n\nSource: {}",
            self.title, self.content, takeaways, self.source
        )
    }
}

/// Internal: a document that has been scored but not yet selected.
/// Holds a reference to the corpus entry to avoid cloning content prematurely.
#[derive(Debug, Clone)]
pub struct ScoredDocument<'a> {
    pub document: &'a Document,

    pub score: f32,
    pub score_details: ScoreDetails,
}

/// Detailed scoring components, kept so a score can be explained.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScoreDetails {
    /// Query terms (duplicates included) found in the title.
    pub title_matches: usize,
    /// Query terms (duplicates included) found inside at least one keyword.
    pub keyword_matches: usize,
    /// Query terms (duplicates included) found in the content.
    pub content_matches: usize,
    /// Distinct query terms found anywhere in title, content or keywords.
    pub matched_terms: Vec<String>,
    /// Weighted sum plus multi-term bonus, before clamping.
    pub raw_score: f32,
}
