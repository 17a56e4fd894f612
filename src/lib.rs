// file: src/lib.rs
// description: library entry point and public api exports
// reference: rust library patterns
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/readme.md"))]

pub mod config;
pub mod error;
pub mod exporter;
pub mod mapper;
pub mod models;
pub mod utils;

pub use config::{Config, IndexConfig, LoggingConfig};
pub use error::{MapperError, Result};
pub use exporter::{BulkExporter, ExportManifest};
pub use mapper::{
    BatchReport, BatchStats, DocumentMapper, MappedSearch, ResponseSet, SkipReason,
    SkippedSearch, build_meta_document, build_result_document,
};
pub use models::{
    AccountInfo, AccountTable, DocumentEnvelope, EnvelopeTemplate, MetaDocument, RawText,
    ResultDocument, SearchResponse, SourceDocument,
};
pub use utils::Validator;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        let config = Config::default_config();
        let mapper = DocumentMapper::from_config(&config).unwrap();
        let report = mapper.map_all_searches(&ResponseSet::new(), &AccountTable::new(), 0);
        assert!(report.documents.is_empty());
    }
}
