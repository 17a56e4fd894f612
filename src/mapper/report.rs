// file: src/mapper/report.rs
// description: per-batch outcome, skipped identifiers and summary statistics
// reference: pipeline statistics reporting

use crate::models::DocumentEnvelope;
use crate::utils::logging::{format_error, format_success, format_warning};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    MissingAccountInfo,
    MalformedResponse(String),
    IdOverflow(String),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::MissingAccountInfo => f.write_str("identifier missing from account table"),
            SkipReason::MalformedResponse(message) => write!(f, "malformed response: {}", message),
            SkipReason::IdOverflow(message) => write!(f, "id overflow: {}", message),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedSearch {
    pub search_id: String,
    pub reason: SkipReason,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BatchStats {
    pub searches_mapped: usize,
    pub missing_accounts: usize,
    pub malformed_responses: usize,
    pub id_overflows: usize,
    pub documents_created: usize,
}

impl BatchStats {
    pub fn searches_seen(&self) -> usize {
        self.searches_mapped + self.missing_accounts + self.malformed_responses + self.id_overflows
    }

    pub fn success_rate(&self) -> f64 {
        let total = self.searches_seen();
        if total == 0 {
            return 0.0;
        }
        (self.searches_mapped as f64 / total as f64) * 100.0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BatchReport {
    pub documents: Vec<DocumentEnvelope>,
    pub skipped: Vec<SkippedSearch>,
    /// First id not consumed by this batch.
    pub next_id: u64,
    pub stats: BatchStats,
}

impl BatchReport {
    pub(crate) fn new(start_id: u64) -> Self {
        Self {
            documents: Vec::new(),
            skipped: Vec::new(),
            next_id: start_id,
            stats: BatchStats::default(),
        }
    }

    pub(crate) fn push_documents(&mut self, documents: Vec<DocumentEnvelope>, next_id: u64) {
        self.stats.searches_mapped += 1;
        self.stats.documents_created += documents.len();
        self.documents.extend(documents);
        self.next_id = next_id;
    }

    pub(crate) fn push_skipped(&mut self, search_id: &str, reason: SkipReason) {
        match reason {
            SkipReason::MissingAccountInfo => self.stats.missing_accounts += 1,
            SkipReason::MalformedResponse(_) => self.stats.malformed_responses += 1,
            SkipReason::IdOverflow(_) => self.stats.id_overflows += 1,
        }
        self.skipped.push(SkippedSearch {
            search_id: search_id.to_string(),
            reason,
        });
    }

    pub fn into_documents(self) -> Vec<DocumentEnvelope> {
        self.documents
    }

    pub fn format(&self, colored_output: bool) -> String {
        let mut output = format_success(
            &format!(
                "Mapped {} of {} searches into {} documents ({:.1}%)",
                self.stats.searches_mapped,
                self.stats.searches_seen(),
                self.stats.documents_created,
                self.stats.success_rate()
            ),
            colored_output,
        );
        output.push('\n');

        for skipped in &self.skipped {
            let line = format!("{}: {}", skipped.search_id, skipped.reason);
            let line = match skipped.reason {
                SkipReason::MissingAccountInfo => format_warning(&line, colored_output),
                SkipReason::MalformedResponse(_) | SkipReason::IdOverflow(_) => {
                    format_error(&line, colored_output)
                }
            };
            output.push_str(&line);
            output.push('\n');
        }

        output
    }
}
