pub mod builtin;
pub mod corpus;

pub use builtin::{LEASE_CONTEXT_ID, SERVICES_CONTEXT_ID};
pub use corpus::{Corpus, CorpusError};
