use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;
use thiserror::Error;

use crate::document::Document;

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DocumentId(String);

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DocumentIdError {
    #[error("Document ID must not be empty")]
    Empty,
}

impl DocumentId {
    pub fn new(id: impl Into<String>) -> Result<Self, DocumentIdError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(DocumentIdError::Empty);
        }
        Ok(DocumentId(id))
    }

    /// For compiled-in identifiers that are known to be non-empty.
    pub(crate) fn from_static(id: &'static str) -> Self {
        debug_assert!(!id.trim().is_empty());
        DocumentId(id.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for DocumentId {
    type Error = DocumentIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        DocumentId::new(value)
    }
}

impl From<DocumentId> for String {
    fn from(id: DocumentId) -> Self {
        id.0
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Content hash of a whole corpus, in corpus order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CorpusVersion(String);

impl CorpusVersion {
    pub fn from_documents(documents: &[Document]) -> Self {
        let mut hasher = Sha256::new();

        // Every field is length-prefixed so that moving text between
        // adjacent fields changes the hash.
        for doc in documents {
            update_field(&mut hasher, doc.id.as_str());
            update_field(&mut hasher, &doc.title);
            update_field(&mut hasher, &doc.content);
            update_field(&mut hasher, &doc.source);

            hasher.update((doc.key_takeaways.len() as u64).to_le_bytes());
            for takeaway in &doc.key_takeaways {
                update_field(&mut hasher, takeaway);
            }

            hasher.update((doc.keywords.len() as u64).to_le_bytes());
            for keyword in &doc.keywords {
                update_field(&mut hasher, keyword);
            }
        }

        let hash = hasher.finalize();
        let hex = hex::encode(hash);

        CorpusVersion(format!("sha256:{hex}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn update_field(hasher: &mut Sha256, field: &str) {
    hasher.update((field.len() as u64).to_le_bytes());
    hasher.update(field.as_bytes());
}

impl fmt::Display for CorpusVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
