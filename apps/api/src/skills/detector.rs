use std::collections::BTreeSet;

use tracing::debug;

use crate::skills::bank::SKILL_BANK;
use crate::skills::normalizer::{contains_phrase, normalize_text};

/// Scans `text` for every bank skill appearing as a standalone token or phrase.
///
/// Returns the detected canonical skills sorted and deduplicated. Empty text
/// yields an empty list.
pub fn detect_skills(text: &str) -> Vec<String> {
    let normalized = normalize_text(text);
    if normalized.is_empty() {
        return Vec::new();
    }

    let found: BTreeSet<&str> = SKILL_BANK
        .iter()
        .copied()
        .filter(|skill| contains_phrase(&normalized, skill))
        .collect();

    debug!("Detected {} bank skills in {} chars", found.len(), text.len());

    found.into_iter().map(String::from).collect()
}
