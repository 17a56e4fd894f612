// file: src/mapper/batch.rs
// description: maps search responses into ordered bulk envelopes with running ids
// reference: per-identifier processing with recoverable failures

use crate::config::Config;
use crate::error::{MapperError, Result};
use crate::mapper::document::{build_meta_document, build_result_document};
use crate::mapper::report::{BatchReport, SkipReason};
use crate::models::{AccountInfo, AccountTable, DocumentEnvelope, EnvelopeTemplate, SearchResponse};
use std::collections::BTreeMap;
use tracing::{debug, error, info, warn};

/// Responses keyed by search identifier, iterated in identifier order.
pub type ResponseSet = BTreeMap<String, SearchResponse>;

#[derive(Debug, Clone, PartialEq)]
pub struct MappedSearch {
    pub documents: Vec<DocumentEnvelope>,
    pub next_id: u64,
}

#[derive(Debug, Clone)]
pub struct DocumentMapper {
    template: EnvelopeTemplate,
    start_id: u64,
}

impl DocumentMapper {
    pub fn new(template: EnvelopeTemplate) -> Self {
        Self {
            template,
            start_id: 0,
        }
    }

    /// Mapper stamping `[index]` envelopes and numbering batches from `index.start_id`.
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self::new(config.envelope_template()?).with_start_id(config.index.start_id))
    }

    pub fn with_start_id(mut self, start_id: u64) -> Self {
        self.start_id = start_id;
        self
    }

    pub fn template(&self) -> &EnvelopeTemplate {
        &self.template
    }

    pub fn start_id(&self) -> u64 {
        self.start_id
    }

    /// One meta envelope at `start_id`, then one envelope per result item at
    /// `start_id + 1 + index`.
    ///
    /// A response without `items` (Google omits the key for empty result sets) maps to
    /// the meta envelope alone instead of being rejected. Fails with `IdOverflow` when
    /// the ids would run past `u64::MAX`.
    pub fn map_search(
        &self,
        response: &SearchResponse,
        account: &AccountInfo,
        start_id: u64,
    ) -> Result<MappedSearch> {
        let item_count = response.item_count()?;
        let count = item_count as u64 + 1;
        let next_id = start_id
            .checked_add(count)
            .ok_or(MapperError::IdOverflow { start_id, count })?;
        let mut documents = Vec::with_capacity(item_count + 1);

        documents.push(
            self.template
                .stamp(start_id, build_meta_document(response, account)?),
        );

        for index in 0..item_count {
            // bounded by next_id, checked above
            let id = start_id + 1 + index as u64;
            documents.push(
                self.template
                    .stamp(id, build_result_document(response, account, index)?),
            );
        }

        Ok(MappedSearch { documents, next_id })
    }

    /// Maps every response starting from the configured start id.
    pub fn map_batch<'a, I, K>(&self, responses: I, accounts: &AccountTable) -> BatchReport
    where
        I: IntoIterator<Item = (K, &'a SearchResponse)>,
        K: AsRef<str>,
    {
        self.map_all_searches(responses, accounts, self.start_id)
    }

    /// Maps every response in iteration order. Identifiers without account info or
    /// with a malformed response are skipped and consume no ids.
    pub fn map_all_searches<'a, I, K>(
        &self,
        responses: I,
        accounts: &AccountTable,
        start_id: u64,
    ) -> BatchReport
    where
        I: IntoIterator<Item = (K, &'a SearchResponse)>,
        K: AsRef<str>,
    {
        let report = responses.into_iter().fold(
            BatchReport::new(start_id),
            |mut report, (search_id, response)| {
                let search_id = search_id.as_ref();

                match self.map_identifier(search_id, response, accounts, report.next_id) {
                    Ok(mapped) => {
                        debug!(
                            "Mapped search {} into {} documents (ids {}..{})",
                            search_id,
                            mapped.documents.len(),
                            report.next_id,
                            mapped.next_id
                        );
                        report.push_documents(mapped.documents, mapped.next_id);
                    }
                    Err(MapperError::MissingAccountInfo { .. }) => {
                        warn!("Identifier missing from account table: {}", search_id);
                        report.push_skipped(search_id, SkipReason::MissingAccountInfo);
                    }
                    Err(e @ MapperError::IdOverflow { .. }) => {
                        error!("Failed to number search {}: {}", search_id, e);
                        report.push_skipped(search_id, SkipReason::IdOverflow(e.to_string()));
                    }
                    Err(e) => {
                        error!("Failed to map search {}: {}", search_id, e);
                        report.push_skipped(search_id, SkipReason::MalformedResponse(e.to_string()));
                    }
                }

                report
            },
        );

        info!(
            "Mapped {} searches into {} documents, skipped {}",
            report.stats.searches_mapped,
            report.stats.documents_created,
            report.skipped.len()
        );

        report
    }

    fn map_identifier(
        &self,
        search_id: &str,
        response: &SearchResponse,
        accounts: &AccountTable,
        start_id: u64,
    ) -> Result<MappedSearch> {
        let account = accounts
            .get(search_id)
            .ok_or_else(|| MapperError::MissingAccountInfo {
                search_id: search_id.to_string(),
            })?;

        self.map_search(response, account, start_id)
    }
}
