//! Appliance-format phonebook entries produced by the conversion engine.

use serde::{Deserialize, Serialize};

/// A phone number mapped to its appliance target type.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ClassifiedNumber {
    /// Number after character replacement
    pub value: String,

    /// Appliance number type (e.g. `home`, `mobile`, `fax_work`)
    pub target_type: String,

    #[serde(default)]
    pub is_preferred: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quickdial: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vanity: Option<String>,
}

impl ClassifiedNumber {
    /// Whether this number carries quickdial or vanity metadata.
    pub fn has_shortcut(&self) -> bool {
        self.quickdial.is_some() || self.vanity.is_some()
    }
}

/// An email address mapped to its appliance classifier.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ClassifiedEmail {
    pub value: String,
    pub target_type: String,
}

/// One appliance phonebook record.
///
/// A contact with more numbers than an entry can hold is spread over several
/// entries sharing `source_id`, `real_name` and `is_vip`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct OutputEntry {
    pub source_id: String,
    pub real_name: String,
    pub is_vip: bool,
    pub numbers: Vec<ClassifiedNumber>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub emails: Vec<ClassifiedEmail>,
}

/// The assembled phonebook handed to the downstream document writer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Phonebook {
    pub id: u32,
    pub name: String,
    pub entries: Vec<OutputEntry>,
}

impl Phonebook {
    /// Number of entries that carry quickdial or vanity metadata.
    pub fn shortcut_count(&self) -> usize {
        self.entries
            .iter()
            .flat_map(|e| e.numbers.iter())
            .filter(|n| n.has_shortcut())
            .count()
    }
}
