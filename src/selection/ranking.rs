use crate::document::Document;
use crate::types::search_result::{Query, ScoreDetails};

use super::config::{ConfigError, ScoringConfig};

pub trait Scorer {
    fn score(&self, doc: &Document, query: &Query) -> ScoreDetails;

    fn score_value(&self, details: &ScoreDetails) -> f32 {
        // Raw scores are sums of non-negative weights; only the top needs a clamp.
        let score = details.raw_score.min(1.0);
        debug_assert!((0.0..=1.0).contains(&score), "score {score} out of range [0.0, 1.0]");
        score
    }
}

/// Weighted substring matching over title, keywords and content.
#[derive(Debug, Clone)]
pub struct KeywordScorer {
    title_weight: f32,
    keyword_weight: f32,
    content_weight: f32,
    multi_term_bonus: f32,
}

impl KeywordScorer {
    pub fn new(config: &ScoringConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_weights(config))
    }

    fn from_weights(config: &ScoringConfig) -> Self {
        Self {
            title_weight: config.title_weight,
            keyword_weight: config.keyword_weight,
            content_weight: config.content_weight,
            multi_term_bonus: config.multi_term_bonus,
        }
    }
}

impl Default for KeywordScorer {
    fn default() -> Self {
        Self::from_weights(&ScoringConfig::v0())
    }
}

impl Scorer for KeywordScorer {
    fn score(&self, doc: &Document, query: &Query) -> ScoreDetails {
        if query.terms.is_empty() {
            return ScoreDetails::default();
        }

        let title = doc.title.to_lowercase();
        let content = doc.content.to_lowercase();
        // Keywords are stored lowercase.
        let haystack = format!("{} {} {}", title, content, doc.keywords.join(" "));

        let mut details = ScoreDetails::default();
        let mut raw_score = 0.0;

        // Each occurrence of a term scores, so repeated terms count again.
        for term in &query.terms {
            if title.contains(term.as_str()) {
                raw_score += self.title_weight;
                details.title_matches += 1;
            }
            if doc.keywords.iter().any(|k| k.contains(term.as_str())) {
                raw_score += self.keyword_weight;
                details.keyword_matches += 1;
            }
            if content.contains(term.as_str()) {
                raw_score += self.content_weight;
                details.content_matches += 1;
            }
        }

        details.matched_terms = query
            .distinct_terms()
            .into_iter()
            .filter(|term| haystack.contains(term))
            .map(str::to_string)
            .collect();

        if details.matched_terms.len() > 1 {
            raw_score += self.multi_term_bonus * (details.matched_terms.len() - 1) as f32;
        }

        details.raw_score = raw_score;
        details
    }
}
