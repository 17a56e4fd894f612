// file: src/models/envelope.rs
// description: bulk-index envelope and the read-only template it is stamped from
// reference: https://www.elastic.co/guide/en/elasticsearch/reference/current/docs-bulk.html

use crate::error::{MapperError, Result};
use crate::models::SourceDocument;
use crate::utils::Validator;
use serde::{Deserialize, Serialize};

/// Target index and type shared by every document of a batch.
///
/// Deserializes from the upstream envelope shape
/// (`{"_index": .., "_type": .., "_id": null, "_source": ""}`); the placeholder
/// `_id`/`_source` slots are ignored because each document gets its own envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "TemplateFields")]
pub struct EnvelopeTemplate {
    #[serde(rename = "_index")]
    index: String,
    #[serde(rename = "_type")]
    doc_type: String,
}

#[derive(Deserialize)]
struct TemplateFields {
    #[serde(rename = "_index")]
    index: String,
    #[serde(rename = "_type")]
    doc_type: String,
}

impl TryFrom<TemplateFields> for EnvelopeTemplate {
    type Error = MapperError;

    fn try_from(fields: TemplateFields) -> Result<Self> {
        EnvelopeTemplate::new(&fields.index, &fields.doc_type)
    }
}

impl EnvelopeTemplate {
    pub fn new(index: &str, doc_type: &str) -> Result<Self> {
        Validator::validate_index_name(index)?;
        Validator::validate_doc_type(doc_type)?;

        Ok(Self {
            index: index.to_string(),
            doc_type: doc_type.to_string(),
        })
    }

    pub fn index(&self) -> &str {
        &self.index
    }

    pub fn doc_type(&self) -> &str {
        &self.doc_type
    }

    /// Builds a new, independent envelope for one document.
    pub fn stamp(&self, id: u64, source: impl Into<SourceDocument>) -> DocumentEnvelope {
        DocumentEnvelope {
            index: self.index.clone(),
            doc_type: self.doc_type.clone(),
            id,
            source: source.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentEnvelope {
    #[serde(rename = "_index")]
    pub index: String,
    #[serde(rename = "_type")]
    pub doc_type: String,
    #[serde(rename = "_id")]
    pub id: u64,
    #[serde(rename = "_source")]
    pub source: SourceDocument,
}
