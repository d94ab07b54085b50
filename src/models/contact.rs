//! Source contact model as yielded by a directory source.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Semantic name part a realName template can reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NamePart {
    First,
    Last,
    Prefix,
    Suffix,
    Nickname,
    Organization,
    Full,
}

impl NamePart {
    /// Canonical placeholder spelling.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::First => "firstname",
            Self::Last => "lastname",
            Self::Prefix => "prefix",
            Self::Suffix => "suffix",
            Self::Nickname => "nickname",
            Self::Organization => "organization",
            Self::Full => "fullname",
        }
    }
}

impl FromStr for NamePart {
    type Err = String;

    /// Parse a placeholder name, case-insensitively and with short aliases.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "firstname" | "first" => Ok(Self::First),
            "lastname" | "last" => Ok(Self::Last),
            "prefix" => Ok(Self::Prefix),
            "suffix" => Ok(Self::Suffix),
            "nickname" => Ok(Self::Nickname),
            "organization" | "org" => Ok(Self::Organization),
            "fullname" | "full" => Ok(Self::Full),
            other => Err(format!("unknown name part '{}'", other)),
        }
    }
}

impl fmt::Display for NamePart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Name parts of a contact. Every part is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct NameParts {
    #[serde(alias = "firstname", skip_serializing_if = "Option::is_none")]
    pub first: Option<String>,

    #[serde(alias = "lastname", skip_serializing_if = "Option::is_none")]
    pub last: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub suffix: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,

    #[serde(alias = "org", skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,

    /// Full display name
    #[serde(alias = "fullname", skip_serializing_if = "Option::is_none")]
    pub full: Option<String>,
}

impl NameParts {
    /// Look up a part, treating blank strings as absent.
    pub fn get(&self, part: NamePart) -> Option<&str> {
        let value = match part {
            NamePart::First => &self.first,
            NamePart::Last => &self.last,
            NamePart::Prefix => &self.prefix,
            NamePart::Suffix => &self.suffix,
            NamePart::Nickname => &self.nickname,
            NamePart::Organization => &self.organization,
            NamePart::Full => &self.full,
        };
        value.as_deref().filter(|v| !v.trim().is_empty())
    }
}

/// A phone number or email address together with its raw type tags.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct TypedValue {
    pub value: String,

    /// Raw type tags as found in the source record (e.g. `WORK`, `pref`)
    #[serde(alias = "types", skip_serializing_if = "BTreeSet::is_empty")]
    pub type_tags: BTreeSet<String>,
}

impl TypedValue {
    /// Create a value with the given tags.
    pub fn new<I, S>(value: impl Into<String>, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            value: value.into(),
            type_tags: tags.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether any tag equals `tag`, ignoring ASCII case.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.type_tags.iter().any(|t| t.eq_ignore_ascii_case(tag))
    }
}

/// An address-book contact as delivered by a directory source.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SourceContact {
    /// Opaque stable identifier (vCard UID or equivalent)
    pub id: String,

    pub names: NameParts,

    #[serde(skip_serializing_if = "BTreeSet::is_empty")]
    pub categories: BTreeSet<String>,

    #[serde(skip_serializing_if = "BTreeSet::is_empty")]
    pub groups: BTreeSet<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub phones: Vec<TypedValue>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub emails: Vec<TypedValue>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub quickdial: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub vanity: Option<String>,
}

impl SourceContact {
    /// Create an empty contact with the given identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    /// Append a phone number.
    pub fn with_phone<I, S>(mut self, value: impl Into<String>, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.phones.push(TypedValue::new(value, tags));
        self
    }

    /// Append an email address.
    pub fn with_email<I, S>(mut self, value: impl Into<String>, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.emails.push(TypedValue::new(value, tags));
        self
    }
}
