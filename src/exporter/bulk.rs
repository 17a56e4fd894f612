// file: src/exporter/bulk.rs
// description: renders envelopes as an elasticsearch bulk body or a json array
// reference: https://www.elastic.co/guide/en/elasticsearch/reference/current/docs-bulk.html

use crate::error::Result;
use crate::models::DocumentEnvelope;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::io::Write;
use tracing::debug;

pub struct BulkExporter;

#[derive(Serialize)]
struct BulkAction<'a> {
    index: ActionTarget<'a>,
}

#[derive(Serialize)]
struct ActionTarget<'a> {
    #[serde(rename = "_index")]
    index: &'a str,
    #[serde(rename = "_type")]
    doc_type: &'a str,
    #[serde(rename = "_id")]
    id: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportManifest {
    pub exported_at: String,
    pub indexes: Vec<String>,
    pub total_documents: usize,
    pub first_id: Option<u64>,
    pub last_id: Option<u64>,
}

impl BulkExporter {
    /// Writes the bulk body produced by `to_ndjson`.
    pub fn write_ndjson<W: Write>(
        documents: &[DocumentEnvelope],
        mut writer: W,
    ) -> Result<ExportManifest> {
        let body = Self::to_ndjson(documents)?;
        writer.write_all(body.as_bytes())?;
        writer.flush()?;

        Ok(Self::manifest(documents))
    }

    /// One action line and one `_source` line per envelope, each newline-terminated
    /// as the bulk API requires.
    pub fn to_ndjson(documents: &[DocumentEnvelope]) -> Result<String> {
        let mut body = String::new();
        for document in documents {
            let action = BulkAction {
                index: ActionTarget {
                    index: &document.index,
                    doc_type: &document.doc_type,
                    id: document.id,
                },
            };
            body.push_str(&serde_json::to_string(&action)?);
            body.push('\n');
            body.push_str(&serde_json::to_string(&document.source)?);
            body.push('\n');
        }

        debug!("Rendered {} documents as bulk body", documents.len());
        Ok(body)
    }

    pub fn to_json_array(documents: &[DocumentEnvelope], pretty: bool) -> Result<String> {
        let rendered = if pretty {
            serde_json::to_string_pretty(documents)?
        } else {
            serde_json::to_string(documents)?
        };
        Ok(rendered)
    }

    pub fn manifest(documents: &[DocumentEnvelope]) -> ExportManifest {
        let mut indexes: Vec<String> = Vec::new();
        for document in documents {
            if !indexes.contains(&document.index) {
                indexes.push(document.index.clone());
            }
        }

        ExportManifest {
            exported_at: Utc::now().to_rfc3339(),
            indexes,
            total_documents: documents.len(),
            first_id: documents.iter().map(|doc| doc.id).min(),
            last_id: documents.iter().map(|doc| doc.id).max(),
        }
    }
}
