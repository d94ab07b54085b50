//! realName synthesis from an ordered list of templates.
//!
//! A template such as `{lastname}, {firstname}` only matches a contact when every
//! placeholder it references has a non-blank value. The first matching template
//! wins; no partially substituted text is ever produced.

use crate::error::{ConfigError, ConfigResult};
use crate::models::{NamePart, NameParts};
use once_cell::sync::Lazy;
use regex::Regex;

static PLACEHOLDER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{([^{}]*)\}").expect("Failed to compile placeholder regex"));

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Part(NamePart),
}

/// A parsed realName template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameTemplate {
    source: String,
    segments: Vec<Segment>,
}

impl NameTemplate {
    /// Parse a template, rejecting stray braces and unknown placeholders.
    pub fn parse(template: &str) -> ConfigResult<Self> {
        let malformed = |reason: String| ConfigError::MalformedTemplate {
            template: template.to_string(),
            reason,
        };

        let mut segments = Vec::new();
        let mut last = 0;

        for found in PLACEHOLDER_RE.find_iter(template) {
            push_literal(&mut segments, &template[last..found.start()]).map_err(malformed)?;

            let inner = &found.as_str()[1..found.as_str().len() - 1];
            if inner.trim().is_empty() {
                return Err(malformed("empty placeholder".to_string()));
            }
            let part = inner.parse::<NamePart>().map_err(malformed)?;
            segments.push(Segment::Part(part));

            last = found.end();
        }
        push_literal(&mut segments, &template[last..]).map_err(malformed)?;

        Ok(Self {
            source: template.to_string(),
            segments,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Name parts referenced by this template, in order of appearance.
    pub fn placeholders(&self) -> impl Iterator<Item = NamePart> + '_ {
        self.segments.iter().filter_map(|s| match s {
            Segment::Part(part) => Some(*part),
            Segment::Literal(_) => None,
        })
    }

    /// Substitute every placeholder, or `None` if any part is missing.
    pub fn render(&self, names: &NameParts) -> Option<String> {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Part(part) => out.push_str(names.get(*part)?),
            }
        }
        Some(out)
    }
}

fn push_literal(segments: &mut Vec<Segment>, literal: &str) -> Result<(), String> {
    if literal.contains('{') {
        return Err("unclosed placeholder".to_string());
    }
    if literal.contains('}') {
        return Err("unmatched closing brace".to_string());
    }
    if !literal.is_empty() {
        segments.push(Segment::Literal(literal.to_string()));
    }
    Ok(())
}

/// Derive the display name from the first fully resolvable template.
///
/// Returns an empty string when no template resolves.
pub fn synthesize(names: &NameParts, templates: &[NameTemplate]) -> String {
    templates
        .iter()
        .find_map(|template| template.render(names))
        .unwrap_or_default()
}
