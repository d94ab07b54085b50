//! Phonebook service.
//!
//! Fetches contacts from a source, converts them in parallel and assembles the
//! phonebook in source order.

use crate::conversion::preference::clear_shortcuts;
use crate::conversion::{Converter, Outcome, PhonebookSettings};
use crate::error::{PhonebookError, PhonebookResult};
use crate::metrics::Metrics;
use crate::models::{OutputEntry, Phonebook, SourceContact};
use crate::sources::ContactSource;
use async_trait::async_trait;
use futures::stream::{self, StreamExt, TryStreamExt};
use std::sync::Arc;
use tracing::{info, warn};

/// Phonebook service trait for business operations.
#[async_trait]
pub trait PhonebookService: Send + Sync {
    /// Fetch all contacts and convert them into a phonebook.
    async fn build_phonebook(&self) -> PhonebookResult<Phonebook>;

    /// Convert already fetched contacts, keeping their order.
    async fn convert_all(&self, contacts: Vec<SourceContact>) -> PhonebookResult<Vec<OutputEntry>>;
}

/// Default implementation of PhonebookService.
pub struct PhonebookServiceImpl {
    source: Arc<dyn ContactSource>,
    converter: Arc<Converter>,
    settings: PhonebookSettings,
    workers: usize,
    metrics: Metrics,
}

impl PhonebookServiceImpl {
    /// Create a new phonebook service.
    ///
    /// # Arguments
    /// * `source` - ContactSource contacts are fetched from
    /// * `converter` - Validated converter shared by all workers
    /// * `settings` - Target phonebook
    /// * `workers` - Maximum number of concurrent conversion tasks
    pub fn new(
        source: Arc<dyn ContactSource>,
        converter: Arc<Converter>,
        settings: PhonebookSettings,
        workers: usize,
    ) -> Self {
        Self {
            source,
            converter,
            settings,
            workers: workers.max(1),
            metrics: Metrics::new(),
        }
    }

    /// Metrics of the latest `build_phonebook` run.
    ///
    /// Direct `convert_all` calls add to the current counts.
    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// Split contacts into at most `workers` consecutive batches.
    fn batches(&self, contacts: Vec<SourceContact>) -> Vec<Vec<SourceContact>> {
        let batch_size = contacts.len().div_ceil(self.workers).max(1);
        let mut batches = Vec::new();
        let mut contacts = contacts.into_iter().peekable();

        while contacts.peek().is_some() {
            batches.push(contacts.by_ref().take(batch_size).collect());
        }
        batches
    }
}

#[async_trait]
impl PhonebookService for PhonebookServiceImpl {
    async fn build_phonebook(&self) -> PhonebookResult<Phonebook> {
        self.metrics.reset();
        let contacts = self.source.fetch_contacts().await?;
        info!(
            source = %self.source.name(),
            contacts = contacts.len(),
            phonebook = %self.settings.name,
            "Building phonebook"
        );

        let entries = self.convert_all(contacts).await?;
        self.metrics.log_summary();

        Ok(Phonebook {
            id: self.settings.id,
            name: self.settings.name.clone(),
            entries,
        })
    }

    async fn convert_all(&self, contacts: Vec<SourceContact>) -> PhonebookResult<Vec<OutputEntry>> {
        let batches = self.batches(contacts);

        // buffered() yields results in submission order
        let outcomes: Vec<Vec<Outcome>> = stream::iter(batches)
            .map(|batch| {
                let converter = Arc::clone(&self.converter);
                tokio::task::spawn_blocking(move || {
                    batch
                        .iter()
                        .map(|contact| converter.process(contact))
                        .collect::<Vec<_>>()
                })
            })
            .buffered(self.workers)
            .map_err(|e| PhonebookError::Worker(e.to_string()))
            .try_collect()
            .await?;

        let mut entries = Vec::new();
        for outcome in outcomes.into_iter().flatten() {
            self.metrics.record_outcome(&outcome);
            entries.extend(outcome.into_entries());
        }

        if !self.settings.supports_shortcuts() {
            let stripped = entries
                .iter()
                .flat_map(|e| e.numbers.iter())
                .filter(|n| n.has_shortcut())
                .count();
            if stripped > 0 {
                warn!(
                    phonebook_id = self.settings.id,
                    stripped, "Only phonebook 0 stores quickdial and vanity, dropping them"
                );
            }
            for entry in &mut entries {
                clear_shortcuts(&mut entry.numbers);
            }
        }

        Ok(entries)
    }
}
