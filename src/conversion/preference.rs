//! Preferred-number resolution.

use super::classify::Classified;
use crate::models::ClassifiedNumber;

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .filter(|v| !v.trim().is_empty())
        .map(str::to_string)
}

/// Attach quickdial and vanity to the first number carrying a preferred marker.
///
/// Order and values are unchanged; every other number has neither field set.
/// Without a marked number, no number receives the metadata.
pub fn resolve_preference(
    classified: Vec<Classified>,
    quickdial: Option<&str>,
    vanity: Option<&str>,
) -> Vec<ClassifiedNumber> {
    let preferred = classified.iter().position(|c| c.preferred);

    classified
        .into_iter()
        .enumerate()
        .map(|(idx, c)| {
            let is_preferred = Some(idx) == preferred;
            ClassifiedNumber {
                value: c.value,
                target_type: c.target_type,
                is_preferred,
                quickdial: if is_preferred { non_blank(quickdial) } else { None },
                vanity: if is_preferred { non_blank(vanity) } else { None },
            }
        })
        .collect()
}

/// Remove quickdial and vanity from every number.
pub fn clear_shortcuts(numbers: &mut [ClassifiedNumber]) {
    for number in numbers {
        number.quickdial = None;
        number.vanity = None;
    }
}
