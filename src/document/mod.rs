pub mod document;

pub use crate::types::identifiers::{DocumentId, DocumentIdError};
pub use document::Document;
