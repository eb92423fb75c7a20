//! Text normalization: turns free-form résumé text into the canonical,
//! alias-expanded search string the detector scans.
//!
//! Algorithm:
//! 1. Lowercase.
//! 2. Replace every run of characters outside `[a-z0-9.#\s]` with a space
//!    (keeps `c#` and `.net` intact).
//! 3. Collapse whitespace to single spaces and trim.
//! 4. Build the compact form (all whitespace removed).
//! 5. For each alias whose variant occurs anywhere in the compact form, append
//!    ` <canonical>` unless that canonical phrase is already present.
//!
//! Step 5 substring matching is loose: `k8s` fires even inside a
//! longer token. Step 5 repeats until nothing new is appended, which makes
//! `normalize_text` idempotent.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::skills::bank::ALIASES;

static STRIP_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-z0-9.#\s]+").unwrap());
static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Steps 1–3: lowercase, strip punctuation, collapse whitespace.
pub fn canonicalize(text: &str) -> String {
    let lowered = text.to_lowercase();
    let stripped = STRIP_RE.replace_all(&lowered, " ");
    WHITESPACE_RE.replace_all(&stripped, " ").trim().to_string()
}

/// Full normalization of free text, including alias expansion.
pub fn normalize_text(text: &str) -> String {
    let mut normalized = canonicalize(text);

    loop {
        let compact: String = normalized.split_whitespace().collect();
        let mut appended = false;

        for (variant, canonical) in ALIASES {
            if compact.contains(variant) && !contains_phrase(&normalized, canonical) {
                normalized.push(' ');
                normalized.push_str(canonical);
                appended = true;
            }
        }

        if !appended {
            return normalized;
        }
    }
}

/// True when `phrase` occurs in `text` bounded on both sides by the string
/// edge or a whitespace character.
pub fn contains_phrase(text: &str, phrase: &str) -> bool {
    if phrase.is_empty() {
        return false;
    }

    text.match_indices(phrase).any(|(start, _)| {
        let end = start + phrase.len();
        let before_ok = text[..start]
            .chars()
            .next_back()
            .map_or(true, char::is_whitespace);
        let after_ok = text[end..].chars().next().map_or(true, char::is_whitespace);
        before_ok && after_ok
    })
}

/// Canonical form of a single skill label: trimmed, lowercased, single-spaced.
///
/// Unlike [`canonicalize`] this keeps punctuation, so `ci/cd` survives.
pub fn normalize_skill(skill: &str) -> String {
    skill
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Normalizes every item and drops empties and repeats, keeping first-occurrence order.
pub fn unique_normalized<I, S>(items: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = HashSet::new();
    items
        .into_iter()
        .map(|item| normalize_skill(item.as_ref()))
        .filter(|item| !item.is_empty() && seen.insert(item.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonicalize_keeps_dot_and_hash() {
        assert_eq!(
            canonicalize("  Skills: C#, .NET;  Java/Spring!! "),
            "skills c# .net java spring"
        );
    }

    #[test]
    fn test_canonicalize_empty_and_blank() {
        assert_eq!(canonicalize(""), "");
        assert_eq!(canonicalize(" \n\t "), "");
        assert_eq!(normalize_text("   "), "");
    }

    #[test]
    fn test_alias_springboot_expands() {
        let normalized = normalize_text("Built services with SpringBoot");
        assert_eq!(normalized, "built services with springboot spring boot");
    }

    #[test]
    fn test_alias_matches_across_spaces_in_compact_form() {
        // Both aliases fire on the compact form, but their phrases are already there.
        let normalized = normalize_text("Power BI dashboards, Machine-Learning");
        assert_eq!(normalized, "power bi dashboards machine learning");
    }

    #[test]
    fn test_alias_matching_is_substring_based() {
        let normalized = normalize_text("ran xk8sy clusters");
        assert!(normalized.ends_with(" kubernetes"));
    }

    #[test]
    fn test_alias_applied_in_table_order() {
        let normalized = normalize_text("nodejs and postgres with k8s");
        assert_eq!(
            normalized,
            "nodejs and postgres with k8s node postgresql kubernetes"
        );
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let samples = [
            "",
            "Java, Spring Boot, REST APIs, PostgreSQL",
            "springboot restful nodejs postgres k8s dotnet aspnet",
            "MachineLearning / DeepLearning / PowerBI",
            "C# .NET developer — 5 yrs — CI/CD pipelines",
            "   mixed\tWHITESPACE\n\nand ünïcödé text   ",
            "restapispringboot",
        ];
        for sample in samples {
            let once = normalize_text(sample);
            let twice = normalize_text(&once);
            assert_eq!(once, twice, "not idempotent for {sample:?}");
        }
    }

    #[test]
    fn test_contains_phrase_requires_boundaries() {
        assert!(contains_phrase("java spring", "java"));
        assert!(contains_phrase("spring boot", "spring boot"));
        assert!(!contains_phrase("javascript", "java"));
        assert!(!contains_phrase("go-to", "go"));
        assert!(!contains_phrase("mongo db", "go"));
        assert!(contains_phrase("i use go daily", "go"));
        assert!(!contains_phrase("", "go"));
    }

    #[test]
    fn test_contains_phrase_later_occurrence() {
        // First hit is inside "javascript", second is standalone.
        assert!(contains_phrase("javascript and java", "java"));
    }

    #[test]
    fn test_normalize_skill() {
        assert_eq!(normalize_skill("  Spring   Boot "), "spring boot");
        assert_eq!(normalize_skill("CI/CD"), "ci/cd");
        assert_eq!(normalize_skill(&normalize_skill(" REST  Api")), "rest api");
    }

    #[test]
    fn test_unique_normalized_preserves_first_occurrence() {
        let items = ["Python", "sql", " python ", "", "SQL", "Java"];
        assert_eq!(unique_normalized(items), vec!["python", "sql", "java"]);
    }
}
