pub mod identifiers;
pub mod search_result;

pub use identifiers::{CorpusVersion, DocumentId, DocumentIdError};
pub use search_result::{Query, ScoreDetails, ScoredDocument, SearchResult};
