//! Conversion counters.
//!
//! Tracks how many contacts were converted, dropped, or split across entries.

use crate::conversion::Outcome;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Metrics collector for conversion runs.
#[derive(Debug, Clone)]
pub struct Metrics {
    /// Contacts handed to the converter
    contacts_seen_total: Arc<AtomicU64>,

    /// Contacts rejected by include/exclude filters
    contacts_filtered_total: Arc<AtomicU64>,

    /// Contacts dropped for lack of phone numbers
    contacts_without_phone_total: Arc<AtomicU64>,

    /// Contacts spread over more than one entry
    contacts_split_total: Arc<AtomicU64>,

    /// Entries emitted
    entries_emitted_total: Arc<AtomicU64>,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Metrics {
    /// Create a new metrics collector.
    pub fn new() -> Self {
        Self {
            contacts_seen_total: Arc::new(AtomicU64::new(0)),
            contacts_filtered_total: Arc::new(AtomicU64::new(0)),
            contacts_without_phone_total: Arc::new(AtomicU64::new(0)),
            contacts_split_total: Arc::new(AtomicU64::new(0)),
            entries_emitted_total: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Record the outcome of converting one contact.
    pub fn record_outcome(&self, outcome: &Outcome) {
        self.contacts_seen_total.fetch_add(1, Ordering::Relaxed);

        match outcome {
            Outcome::Filtered => {
                self.contacts_filtered_total.fetch_add(1, Ordering::Relaxed);
            }
            Outcome::NoPhones => {
                self.contacts_without_phone_total
                    .fetch_add(1, Ordering::Relaxed);
            }
            Outcome::Converted(entries) => {
                if entries.len() > 1 {
                    self.contacts_split_total.fetch_add(1, Ordering::Relaxed);
                }
                self.entries_emitted_total
                    .fetch_add(entries.len() as u64, Ordering::Relaxed);
            }
        }
    }

    pub fn contacts_seen_total(&self) -> u64 {
        self.contacts_seen_total.load(Ordering::Relaxed)
    }

    pub fn contacts_filtered_total(&self) -> u64 {
        self.contacts_filtered_total.load(Ordering::Relaxed)
    }

    pub fn contacts_without_phone_total(&self) -> u64 {
        self.contacts_without_phone_total.load(Ordering::Relaxed)
    }

    pub fn contacts_split_total(&self) -> u64 {
        self.contacts_split_total.load(Ordering::Relaxed)
    }

    pub fn entries_emitted_total(&self) -> u64 {
        self.entries_emitted_total.load(Ordering::Relaxed)
    }

    /// Reset all metrics to zero.
    pub fn reset(&self) {
        self.contacts_seen_total.store(0, Ordering::Relaxed);
        self.contacts_filtered_total.store(0, Ordering::Relaxed);
        self.contacts_without_phone_total.store(0, Ordering::Relaxed);
        self.contacts_split_total.store(0, Ordering::Relaxed);
        self.entries_emitted_total.store(0, Ordering::Relaxed);
    }

    /// Get a summary of all metrics.
    pub fn summary(&self) -> MetricsSummary {
        MetricsSummary {
            contacts_seen_total: self.contacts_seen_total(),
            contacts_filtered_total: self.contacts_filtered_total(),
            contacts_without_phone_total: self.contacts_without_phone_total(),
            contacts_split_total: self.contacts_split_total(),
            entries_emitted_total: self.entries_emitted_total(),
        }
    }

    /// Emit the current summary as a structured log event.
    pub fn log_summary(&self) {
        let summary = self.summary();
        tracing::info!(
            contacts = summary.contacts_seen_total,
            filtered = summary.contacts_filtered_total,
            without_phone = summary.contacts_without_phone_total,
            split = summary.contacts_split_total,
            entries = summary.entries_emitted_total,
            "Conversion completed"
        );
    }
}

/// A snapshot of metrics values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricsSummary {
    pub contacts_seen_total: u64,
    pub contacts_filtered_total: u64,
    pub contacts_without_phone_total: u64,
    pub contacts_split_total: u64,
    pub entries_emitted_total: u64,
}
