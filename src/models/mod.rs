// file: src/models/mod.rs
// description: data models module exports
// reference: internal module structure

pub mod account;
pub mod document;
pub mod envelope;
pub mod response;

pub use account::{AccountInfo, AccountTable};
pub use document::{MetaDocument, RawText, ResultDocument, SourceDocument};
pub use envelope::{DocumentEnvelope, EnvelopeTemplate};
pub use response::SearchResponse;
