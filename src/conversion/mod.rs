//! Contact conversion engine.
//!
//! Turns one [`SourceContact`] into zero or more appliance [`OutputEntry`] values:
//!
//! 1. filter by category/group membership
//! 2. drop contacts without phone numbers
//! 3. classify phones (after character replacement) and emails
//! 4. attach quickdial/vanity to the preferred number
//! 5. mark VIPs
//! 6. synthesize the realName
//! 7. split numbers into capacity-bounded entries
//!
//! The engine is pure: a [`Converter`] holds only validated, immutable configuration
//! and can be shared across threads.

pub mod classify;
pub mod config;
pub mod filter;
pub mod name;
pub mod preference;
pub mod split;

pub use classify::{Classified, FAX_TARGET_TYPE, UNMAPPED_TARGET_TYPE};
pub use config::{
    Capacity, ConfigFile, ConversionConfig, Conversions, Filters, GroupSelector, OrderedMapping,
    PhonebookSettings,
};
pub use name::NameTemplate;

use crate::error::ConfigResult;
use crate::models::{OutputEntry, SourceContact};
use std::num::NonZeroUsize;
use tracing::{debug, trace, warn};

/// Result of running one contact through the pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Rejected by include/exclude rules
    Filtered,
    /// No phone numbers to store
    NoPhones,
    /// Converted into one or more entries
    Converted(Vec<OutputEntry>),
}

impl Outcome {
    pub fn into_entries(self) -> Vec<OutputEntry> {
        match self {
            Outcome::Converted(entries) => entries,
            Outcome::Filtered | Outcome::NoPhones => Vec::new(),
        }
    }
}

/// A validated conversion configuration, ready to convert contacts.
#[derive(Debug, Clone)]
pub struct Converter {
    config: ConversionConfig,
    templates: Vec<NameTemplate>,
    max_numbers: NonZeroUsize,
    max_emails: Option<NonZeroUsize>,
}

impl Converter {
    /// Validate the configuration and prepare templates.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` for zero capacities, malformed templates or
    /// empty replacement patterns.
    pub fn new(config: ConversionConfig) -> ConfigResult<Self> {
        let (max_numbers, max_emails) = config.capacity.limits()?;
        let templates = config.conversions.templates()?;
        config.conversions.check_replacements()?;

        Ok(Self {
            config,
            templates,
            max_numbers,
            max_emails,
        })
    }

    pub fn config(&self) -> &ConversionConfig {
        &self.config
    }

    /// Run one contact through the pipeline and report what happened.
    pub fn process(&self, contact: &SourceContact) -> Outcome {
        if !filter::passes(contact, &self.config.filters) {
            debug!(contact_id = %contact.id, "Contact rejected by filters");
            return Outcome::Filtered;
        }

        if contact.phones.is_empty() {
            debug!(contact_id = %contact.id, "Contact has no phone numbers, skipping");
            return Outcome::NoPhones;
        }

        let conversions = &self.config.conversions;
        let phones = classify::classify(
            &contact.phones,
            &conversions.phone_types,
            Some(&conversions.phone_replace_characters),
        );
        let emails = classify::classify_emails(&contact.emails, &conversions.email_types);

        let numbers = preference::resolve_preference(
            phones,
            contact.quickdial.as_deref(),
            contact.vanity.as_deref(),
        );

        let is_vip = filter::intersects(&conversions.vip, contact);
        let real_name = name::synthesize(&contact.names, &self.templates);

        let chunks = split::distribute(&numbers, &emails, self.max_numbers, self.max_emails);
        if chunks.len() > 1 {
            debug!(
                contact_id = %contact.id,
                numbers = numbers.len(),
                entries = chunks.len(),
                "Contact split over several entries"
            );
        }
        let placed: usize = chunks.iter().map(|(_, emails)| emails.len()).sum();
        if self.max_emails.is_some() && placed < emails.len() {
            warn!(
                contact_id = %contact.id,
                dropped = emails.len() - placed,
                entries = chunks.len(),
                "Not enough entries for all emails, dropping the rest"
            );
        }

        let entries: Vec<OutputEntry> = chunks
            .into_iter()
            .map(|(numbers, emails)| OutputEntry {
                source_id: contact.id.clone(),
                real_name: real_name.clone(),
                is_vip,
                numbers,
                emails,
            })
            .collect();

        trace!(contact_id = %contact.id, real_name = %real_name, is_vip, "Contact converted");
        Outcome::Converted(entries)
    }

    /// Convert one contact into appliance entries.
    pub fn convert(&self, contact: &SourceContact) -> Vec<OutputEntry> {
        self.process(contact).into_entries()
    }
}

/// Convert one contact with a configuration that has not been validated yet.
///
/// Prefer building a [`Converter`] once when converting many contacts.
pub fn convert(contact: &SourceContact, config: &ConversionConfig) -> ConfigResult<Vec<OutputEntry>> {
    Ok(Converter::new(config.clone())?.convert(contact))
}
