//! Canned document generation.
//!
//! Nothing is generated for real: a recognised request replays one of the
//! fixed templates, together with the context document it claims to use.
//! Every other query falls through to a plain search.

pub mod templates;

use serde::Serialize;

use crate::document::DocumentId;
use crate::selection::{ContextSearcher, Scorer};
use crate::types::search_result::{Query, SearchResult};
pub use templates::{GenerationStage, TemplateKind};

/// A replayed template and the context it was "built" from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeneratedDocument {
    pub kind: TemplateKind,
    pub title: &'static str,
    pub body: &'static str,
    pub stages: &'static [GenerationStage],
    /// `None` when the corpus lacks the template's context entry.
    pub context: Option<SearchResult>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "data", rename_all = "lowercase")]
pub enum Response {
    Generated(GeneratedDocument),
    Results(Vec<SearchResult>),
}

pub struct DocumentGenerator<'a, S> {
    searcher: &'a ContextSearcher<S>,
}

impl<'a, S> DocumentGenerator<'a, S>
where
    S: Scorer,
{
    pub fn new(searcher: &'a ContextSearcher<S>) -> Self {
        Self { searcher }
    }

    pub fn respond(&self, raw: &str) -> Response {
        let query = Query::new(raw.trim());
        if query.is_empty() {
            return Response::Results(Vec::new());
        }

        match TemplateKind::detect(&query) {
            Some(kind) => {
                tracing::debug!(query = %query.raw, template = kind.tag(), "Template request detected");
                Response::Generated(self.generate(kind))
            }
            None => Response::Results(self.searcher.search_query(&query)),
        }
    }

    pub fn generate(&self, kind: TemplateKind) -> GeneratedDocument {
        // The template's own context entry is picked outright, not ranked.
        let context = self
            .searcher
            .corpus()
            .get(&DocumentId::from_static(kind.context_document_id()))
            .cloned()
            .map(|doc| SearchResult {
                id: doc.id.as_str().to_string(),
                title: doc.title,
                content: doc.content,
                key_takeaways: doc.key_takeaways,
                source: doc.source,
                relevance_score: 1.0,
            });

        GeneratedDocument {
            kind,
            title: kind.title(),
            body: kind.body(),
            stages: kind.stages(),
            context,
        }
    }
}
