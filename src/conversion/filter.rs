//! Category and group membership rules.

use super::config::{Filters, GroupSelector};
use crate::models::SourceContact;

/// Whether the contact shares at least one category or group with the selector.
pub fn intersects(selector: &GroupSelector, contact: &SourceContact) -> bool {
    !selector.categories.is_disjoint(&contact.categories)
        || !selector.groups.is_disjoint(&contact.groups)
}

/// Decide whether a contact is eligible for conversion.
///
/// A non-empty include list admits only members; exclude always wins.
pub fn passes(contact: &SourceContact, filters: &Filters) -> bool {
    if let Some(include) = filters.include.as_ref().filter(|s| !s.is_empty()) {
        if !intersects(include, contact) {
            return false;
        }
    }

    match &filters.exclude {
        Some(exclude) => !intersects(exclude, contact),
        None => true,
    }
}
