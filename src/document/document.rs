use serde::{Deserialize, Serialize};

use crate::types::identifiers::DocumentId;

/// The atomic unit of searchable context.
///
/// Keywords are always stored lowercase; they feed the scorer and are never
/// returned to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "DocumentRecord")]
pub struct Document {
    pub id: DocumentId,
    pub title: String,
    pub content: String,
    pub key_takeaways: Vec<String>,
    pub source: String,
    pub keywords: Vec<String>,
}

impl Document {
    pub fn new(
        id: DocumentId,
        title: impl Into<String>,
        content: impl Into<String>,
        source: impl Into<String>,
    ) -> Self {
        Document {
            id,
            title: title.into(),
            content: content.into(),
            key_takeaways: Vec::new(),
            source: source.into(),
            keywords: Vec::new(),
        }
    }

    pub fn with_key_takeaways<I, T>(mut self, takeaways: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.key_takeaways = takeaways.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_keywords<I, T>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.keywords = normalize_keywords(keywords.into_iter().map(Into::into));
        self
    }
}

fn normalize_keywords(keywords: impl Iterator<Item = String>) -> Vec<String> {
    keywords.map(|k| k.to_lowercase()).collect()
}

// Wire shape of a document. Deserialization goes through here so keyword
// normalization also applies to documents loaded from JSON.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct DocumentRecord {
    id: DocumentId,
    title: String,
    content: String,
    #[serde(default)]
    key_takeaways: Vec<String>,
    source: String,
    #[serde(default)]
    keywords: Vec<String>,
}

impl From<DocumentRecord> for Document {
    fn from(record: DocumentRecord) -> Self {
        Document {
            id: record.id,
            title: record.title,
            content: record.content,
            key_takeaways: record.key_takeaways,
            source: record.source,
            keywords: normalize_keywords(record.keywords.into_iter()),
        }
    }
}
