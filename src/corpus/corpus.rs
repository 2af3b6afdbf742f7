// Read-only by construction:
// no mutation
// no "add document" methods
// runtime reads only

use std::collections::BTreeSet;
use std::fs;
use std::io::Read;
use std::path::Path;

use thiserror::Error;

use crate::document::Document;
use crate::types::identifiers::{CorpusVersion, DocumentId};

#[derive(Debug, Error)]
pub enum CorpusError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Duplicate document ID: {0}")]
    DuplicateDocumentId(String),
}

/// The fixed collection of documents a searcher runs against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Corpus {
    documents: Vec<Document>,
    version: CorpusVersion,
}

impl Corpus {
    /// Build a corpus, keeping the given order.
    pub fn new(documents: Vec<Document>) -> Result<Self, CorpusError> {
        let mut seen = BTreeSet::new();
        for doc in &documents {
            if !seen.insert(doc.id.as_str()) {
                return Err(CorpusError::DuplicateDocumentId(doc.id.as_str().to_string()));
            }
        }

        Ok(Self::from_unique(documents))
    }

    pub(crate) fn from_unique(documents: Vec<Document>) -> Self {
        let version = CorpusVersion::from_documents(&documents);
        Corpus { documents, version }
    }

    /// Read a JSON array of documents.
    pub fn from_json_reader(reader: impl Read) -> Result<Self, CorpusError> {
        let documents: Vec<Document> = serde_json::from_reader(reader)?;
        Self::new(documents)
    }

    pub fn load(path: &Path) -> Result<Self, CorpusError> {
        let f = fs::File::open(path)?;
        let corpus = Self::from_json_reader(std::io::BufReader::new(f))?;

        tracing::info!(
            path = %path.display(),
            documents = corpus.len(),
            version = %corpus.version,
            "Corpus loaded"
        );

        Ok(corpus)
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    pub fn get(&self, id: &DocumentId) -> Option<&Document> {
        self.documents.iter().find(|doc| &doc.id == id)
    }

    pub fn version(&self) -> &CorpusVersion {
        &self.version
    }
}
