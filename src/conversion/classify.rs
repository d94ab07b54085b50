//! Type classification of phone numbers and email addresses.
//!
//! Tags are matched against mapping keys in mapping order, so the mapping decides
//! both the target type and the output position of every value.

use super::config::OrderedMapping;
use crate::models::{ClassifiedEmail, TypedValue};

/// Tag that always classifies a number as fax.
pub const FAX_TAG: &str = "fax";

/// Appliance type used for fax numbers.
pub const FAX_TARGET_TYPE: &str = "fax_work";

/// Appliance type for values none of whose tags is mapped.
pub const UNMAPPED_TARGET_TYPE: &str = "other";

/// Tags marking the preferred number of a contact.
pub const PREFERRED_TAGS: [&str; 2] = ["pref", "preferred"];

/// A value with its resolved type and sort bucket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classified {
    pub value: String,
    pub target_type: String,

    /// Position of the matching mapping key; unmapped values sort last
    pub bucket: usize,

    /// Whether the raw tags carry a preferred marker
    pub preferred: bool,
}

/// Apply literal replacements left to right.
pub fn apply_replacements(value: &str, rules: &OrderedMapping) -> String {
    rules
        .iter()
        .fold(value.to_string(), |acc, (pattern, replacement)| {
            acc.replace(pattern, replacement)
        })
}

fn resolve_type(entry: &TypedValue, mapping: &OrderedMapping, fax_override: bool) -> (usize, String) {
    let (bucket, target_type) = mapping
        .iter()
        .enumerate()
        .find(|(_, (key, _))| entry.has_tag(key))
        .map(|(idx, (_, target))| (idx, target))
        .unwrap_or((mapping.len(), UNMAPPED_TARGET_TYPE));

    if fax_override && entry.has_tag(FAX_TAG) {
        (bucket, FAX_TARGET_TYPE.to_string())
    } else {
        (bucket, target_type.to_string())
    }
}

/// Classify raw phone entries and order them by mapping position.
///
/// Ties keep their input order. When `replace_rules` is given, values are
/// rewritten before classification. A `fax` tag always yields the fax type.
pub fn classify(
    entries: &[TypedValue],
    mapping: &OrderedMapping,
    replace_rules: Option<&OrderedMapping>,
) -> Vec<Classified> {
    classify_with(entries, mapping, replace_rules, true)
}

/// Classify email addresses into appliance email entries.
pub fn classify_emails(emails: &[TypedValue], mapping: &OrderedMapping) -> Vec<ClassifiedEmail> {
    classify_with(emails, mapping, None, false)
        .into_iter()
        .map(|c| ClassifiedEmail {
            value: c.value,
            target_type: c.target_type,
        })
        .collect()
}

fn classify_with(
    entries: &[TypedValue],
    mapping: &OrderedMapping,
    replace_rules: Option<&OrderedMapping>,
    fax_override: bool,
) -> Vec<Classified> {
    let mut classified: Vec<Classified> = entries
        .iter()
        .map(|entry| {
            let value = match replace_rules {
                Some(rules) => apply_replacements(&entry.value, rules),
                None => entry.value.clone(),
            };
            let (bucket, target_type) = resolve_type(entry, mapping, fax_override);
            Classified {
                value,
                target_type,
                bucket,
                preferred: PREFERRED_TAGS.iter().any(|tag| entry.has_tag(tag)),
            }
        })
        .collect();

    // sort_by_key is stable
    classified.sort_by_key(|c| c.bucket);
    classified
}
