// file: src/models/document.rs
// description: index document bodies derived from one search response
// reference: internal data structures

use serde::{Deserialize, Serialize};
use std::fmt;

/// Pre-formatted text that renderers must emit as-is, without another escaping pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawText(String);

impl RawText {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RawText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Query-level metadata for one search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetaDocument {
    #[serde(rename = "account_holder")]
    pub account_holder: String,
    #[serde(rename = "account_number")]
    pub account_number: String,
    pub kind: String,
    pub template: RawText,
    pub title: String,
    /// Taken from `searchInformation`, which supersedes the request echo.
    pub total_results: String,
    pub search_terms: String,
    pub count: i64,
    pub language: String,
    pub input_encoding: String,
    pub output_encoding: String,
    pub safe: String,
    pub cx: String,
    pub filter: String,
    pub exact_terms: String,
    pub date_restrict: String,
    pub search_time: f64,
    pub formatted_search_time: String,
}

/// One search result item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultDocument {
    pub account_holder: String,
    pub account_number: String,
    pub kind: String,
    pub cx: String,
    pub title: String,
    pub link: String,
    pub snippet: String,
}

/// Body of a bulk envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SourceDocument {
    Meta(MetaDocument),
    Result(ResultDocument),
}

impl SourceDocument {
    pub fn title(&self) -> &str {
        match self {
            SourceDocument::Meta(meta) => &meta.title,
            SourceDocument::Result(result) => &result.title,
        }
    }

    pub fn is_meta(&self) -> bool {
        matches!(self, SourceDocument::Meta(_))
    }
}

impl From<MetaDocument> for SourceDocument {
    fn from(meta: MetaDocument) -> Self {
        SourceDocument::Meta(meta)
    }
}

impl From<ResultDocument> for SourceDocument {
    fn from(result: ResultDocument) -> Self {
        SourceDocument::Result(result)
    }
}
