// file: src/mapper/mod.rs
// description: document mapper module exports and public api
// reference: search response to bulk envelope mapping

mod batch;
mod document;
pub mod fields;
mod report;

pub use batch::{DocumentMapper, MappedSearch, ResponseSet};
pub use document::{build_meta_document, build_result_document};
pub use report::{BatchReport, BatchStats, SkipReason, SkippedSearch};
