//! Conversion configuration.
//!
//! The configuration document is JSON. Mapping sections (`phoneTypes`, `emailTypes`,
//! `phoneReplaceCharacters`) are objects whose key order is significant, so they are
//! read into an [`OrderedMapping`] that keeps document order.

use super::name::NameTemplate;
use crate::error::{ConfigError, ConfigResult};
use serde::de::{self, MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeSet;
use std::fmt;
use std::num::NonZeroUsize;
use std::path::Path;

/// Appliance limit on phone numbers per phonebook entry.
pub const DEFAULT_MAX_NUMBERS_PER_ENTRY: usize = 9;

/// Phonebook name used by the appliance when none is configured.
pub const DEFAULT_PHONEBOOK_NAME: &str = "Telefonbuch";

/// A string-to-string mapping that keeps declaration order.
///
/// Deserializes from a JSON object (document order) or from a list of
/// `[key, value]` pairs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderedMapping(Vec<(String, String)>);

impl OrderedMapping {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Iterate over `(key, value)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for OrderedMapping
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

impl Serialize for OrderedMapping {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_map(self.0.iter().map(|(k, v)| (k, v)))
    }
}

struct OrderedMappingVisitor;

impl<'de> Visitor<'de> for OrderedMappingVisitor {
    type Value = OrderedMapping;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("an object or a list of [key, value] pairs")
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut pairs = Vec::with_capacity(map.size_hint().unwrap_or(0));
        while let Some((key, value)) = map.next_entry::<String, String>()? {
            pairs.push((key, value));
        }
        Ok(OrderedMapping(pairs))
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut pairs = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(pair) = seq.next_element::<(String, String)>()? {
            pairs.push(pair);
        }
        Ok(OrderedMapping(pairs))
    }

    // PHP-style configs write an empty mapping as `[]`; `null` is treated the same.
    fn visit_unit<E>(self) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(OrderedMapping::new())
    }
}

impl<'de> Deserialize<'de> for OrderedMapping {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(OrderedMappingVisitor)
    }
}

/// A set of categories and groups a contact can be a member of.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct GroupSelector {
    #[serde(alias = "category")]
    pub categories: BTreeSet<String>,

    #[serde(alias = "group")]
    pub groups: BTreeSet<String>,
}

impl GroupSelector {
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty() && self.groups.is_empty()
    }
}

/// Include and exclude rules applied before conversion.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Filters {
    /// Empty or absent means every contact passes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include: Option<GroupSelector>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude: Option<GroupSelector>,
}

/// Field-mapping rules.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct Conversions {
    pub vip: GroupSelector,

    /// realName templates, first fully resolved one wins
    pub real_name: Vec<String>,

    /// Source tag to appliance number type; order is output priority
    pub phone_types: OrderedMapping,

    pub email_types: OrderedMapping,

    /// Literal substitutions applied to every phone number, in order
    pub phone_replace_characters: OrderedMapping,
}

impl Conversions {
    /// Parse every realName template in order.
    pub fn templates(&self) -> ConfigResult<Vec<NameTemplate>> {
        self.real_name
            .iter()
            .map(|t| NameTemplate::parse(t))
            .collect()
    }

    /// Reject empty replacement patterns.
    pub fn check_replacements(&self) -> ConfigResult<()> {
        for (pattern, replacement) in self.phone_replace_characters.iter() {
            if pattern.is_empty() {
                return Err(ConfigError::InvalidReplacement(format!(
                    "empty pattern (replacement {:?})",
                    replacement
                )));
            }
        }
        Ok(())
    }
}

/// Appliance storage limits.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct Capacity {
    pub max_numbers_per_entry: usize,

    /// `None` keeps every email on every entry
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_emails_per_entry: Option<usize>,
}

impl Default for Capacity {
    fn default() -> Self {
        Self {
            max_numbers_per_entry: DEFAULT_MAX_NUMBERS_PER_ENTRY,
            max_emails_per_entry: None,
        }
    }
}

impl Capacity {
    /// Number and email limits per entry.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidCapacity` for a zero limit.
    pub fn limits(&self) -> ConfigResult<(NonZeroUsize, Option<NonZeroUsize>)> {
        let max_numbers = NonZeroUsize::new(self.max_numbers_per_entry).ok_or_else(|| {
            ConfigError::InvalidCapacity {
                field: "maxNumbersPerEntry".to_string(),
            }
        })?;
        let max_emails = self
            .max_emails_per_entry
            .map(|n| {
                NonZeroUsize::new(n).ok_or_else(|| ConfigError::InvalidCapacity {
                    field: "maxEmailsPerEntry".to_string(),
                })
            })
            .transpose()?;
        Ok((max_numbers, max_emails))
    }
}

/// Everything the engine needs to convert contacts.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ConversionConfig {
    pub filters: Filters,
    pub conversions: Conversions,
    pub capacity: Capacity,
}

impl ConversionConfig {
    /// Check every rule that would make conversion ill-defined.
    ///
    /// # Errors
    ///
    /// - `ConfigError::InvalidCapacity` for a zero capacity
    /// - `ConfigError::MalformedTemplate` for an unparsable realName template
    /// - `ConfigError::InvalidReplacement` for an empty replacement pattern
    pub fn validate(&self) -> ConfigResult<()> {
        self.capacity.limits()?;
        self.conversions.templates()?;
        self.conversions.check_replacements()
    }
}

/// Phonebook the converted entries are written to.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PhonebookSettings {
    /// Only phonebook 0 can store quickdial and vanity numbers
    pub id: u32,
    pub name: String,
}

impl Default for PhonebookSettings {
    fn default() -> Self {
        Self {
            id: 0,
            name: DEFAULT_PHONEBOOK_NAME.to_string(),
        }
    }
}

impl PhonebookSettings {
    pub fn supports_shortcuts(&self) -> bool {
        self.id == 0
    }
}

/// The configuration document as stored on disk.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ConfigFile {
    #[serde(default)]
    pub phonebook: PhonebookSettings,

    #[serde(flatten)]
    pub conversion: ConversionConfig,
}

impl ConfigFile {
    /// Parse and validate a configuration document.
    pub fn from_json_str(json: &str) -> ConfigResult<Self> {
        let file: ConfigFile = serde_json::from_str(json)?;
        file.conversion.validate()?;
        Ok(file)
    }

    /// Read, parse and validate a configuration file.
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        tracing::info!(config_path = %path.display(), "Loading conversion configuration");

        let content = std::fs::read_to_string(path)?;
        let file = Self::from_json_str(&content)?;

        tracing::debug!(
            phonebook_id = file.phonebook.id,
            templates = file.conversion.conversions.real_name.len(),
            phone_types = file.conversion.conversions.phone_types.len(),
            max_numbers = file.conversion.capacity.max_numbers_per_entry,
            "Conversion configuration loaded"
        );
        Ok(file)
    }
}
