// file: src/exporter/mod.rs
// description: exporter module exports
// reference: internal module structure

pub mod bulk;

pub use bulk::{BulkExporter, ExportManifest};
