//! Keyword relevance search over a fixed corpus of context documents.
//!
//! `context-search` scores every document of an injected, read-only
//! [`corpus::Corpus`] against a free-text query by weighted substring
//! matching on title, keywords and content, then keeps the best few
//! results. Scoring is pure: the same query against the same corpus always
//! yields the same ordered results.
//!
//! The [`generation`] module layers the canned contract templates on top:
//! recognised lease or services requests replay a fixed document, anything
//! else is answered with search results.

pub mod corpus;
pub mod document;
pub mod generation;
pub mod selection;
pub mod types;

pub use selection::search;
