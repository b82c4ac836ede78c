//! Composite document per course

use crate::normalize::Normalizer;
use coursefinder_core::Item;

/// Build the tag for one course: stemmed name, cleaned difficulty, stemmed
/// description and stemmed skills, in that order.
///
/// Institution is display-only and never part of the tag. Empty fields are
/// skipped so the result never contains doubled spaces.
pub fn compose_tag(normalizer: &Normalizer, item: &Item) -> String {
    let parts = [
        normalizer.normalize(&item.name),
        normalizer.clean(&item.difficulty),
        normalizer.normalize(&item.description),
        normalizer.normalize(&item.skills),
    ];
    parts
        .iter()
        .filter(|part| !part.is_empty())
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(" ")
}
