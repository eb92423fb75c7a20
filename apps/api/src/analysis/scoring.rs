//! Match scoring: detected skills vs a role blueprint, and ranking of every
//! catalog track by that score.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::catalog::{self, RoleEntry};
use crate::skills::unique_normalized;

/// Number of tracks returned by [`rank_tracks`].
pub const TOP_TRACKS: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchScore {
    pub score: u32, // 0 – 100
    pub matched: Vec<String>,
    pub missing: Vec<String>,
}

/// One catalog track scored against a detected skill set.
#[derive(Debug, Clone, Serialize)]
pub struct RankedTrack {
    pub role: &'static str,
    pub category: &'static str,
    pub track: &'static str,
    pub title: &'static str,
    pub path: &'static str,
    pub score: u32,
}

/// Scores `detected` against `blueprint`.
///
/// Both inputs are normalized and deduplicated first. `matched` and `missing`
/// partition the blueprint in its original order. The percentage is
/// `100 × matched / blueprint` rounded half-to-even, and 0 for an empty blueprint.
pub fn match_score<D, B>(detected: &[D], blueprint: &[B]) -> MatchScore
where
    D: AsRef<str>,
    B: AsRef<str>,
{
    let detected: HashSet<String> = unique_normalized(detected).into_iter().collect();
    let blueprint = unique_normalized(blueprint);

    let (matched, missing): (Vec<String>, Vec<String>) = blueprint
        .iter()
        .cloned()
        .partition(|skill| detected.contains(skill));

    MatchScore {
        score: percentage(matched.len(), blueprint.len()),
        matched,
        missing,
    }
}

/// Integer round-half-to-even of `100 × part / whole`; 0 when `whole` is 0.
fn percentage(part: usize, whole: usize) -> u32 {
    if whole == 0 {
        return 0;
    }
    let scaled = part * 100;
    let quotient = scaled / whole;
    let remainder = scaled % whole;

    let rounded = match (remainder * 2).cmp(&whole) {
        std::cmp::Ordering::Greater => quotient + 1,
        std::cmp::Ordering::Equal if quotient % 2 == 1 => quotient + 1,
        _ => quotient,
    };
    rounded as u32
}

/// Scores `detected` against every catalog track and returns the best
/// [`TOP_TRACKS`], highest first. Ties keep catalog declaration order.
pub fn rank_tracks<D: AsRef<str>>(detected: &[D]) -> Vec<RankedTrack> {
    rank_entries(detected, &catalog::flatten())
}

fn rank_entries<D: AsRef<str>>(detected: &[D], entries: &[RoleEntry]) -> Vec<RankedTrack> {
    let mut ranked: Vec<RankedTrack> = entries
        .iter()
        .map(|entry| RankedTrack {
            role: entry.role,
            category: entry.category,
            track: entry.track,
            title: entry.title,
            path: entry.path,
            score: match_score(detected, entry.skills).score,
        })
        .collect();

    // sort_by is stable
    ranked.sort_by(|a, b| b.score.cmp(&a.score));
    ranked.truncate(TOP_TRACKS);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_of_three_rounds_to_67() {
        let result = match_score(&["python", "sql"], &["python", "sql", "java"]);
        assert_eq!(
            result,
            MatchScore {
                score: 67,
                matched: vec!["python".to_string(), "sql".to_string()],
                missing: vec!["java".to_string()],
            }
        );
    }

    #[test]
    fn test_empty_blueprint_scores_zero() {
        let result = match_score(&["python"], &[] as &[&str]);
        assert_eq!(result.score, 0);
        assert!(result.matched.is_empty());
        assert!(result.missing.is_empty());
    }

    #[test]
    fn test_empty_detected_scores_zero() {
        let result = match_score(&[] as &[&str], &["python", "sql"]);
        assert_eq!(result.score, 0);
        assert_eq!(result.missing, vec!["python", "sql"]);
    }

    #[test]
    fn test_full_match_scores_100() {
        let result = match_score(&["SQL", "python", "extra"], &["python", "sql"]);
        assert_eq!(result.score, 100);
        assert!(result.missing.is_empty());
    }

    #[test]
    fn test_inputs_normalized_and_deduplicated() {
        let result = match_score(
            &[" Spring  Boot ", "GIT"],
            &["spring boot", "Spring Boot", "git", "docker", "Docker "],
        );
        assert_eq!(result.matched, vec!["spring boot", "git"]);
        assert_eq!(result.missing, vec!["docker"]);
        assert_eq!(result.score, 67);
    }

    #[test]
    fn test_matched_and_missing_partition_blueprint_in_order() {
        let blueprint = ["kafka", "java", "sql", "redis", "docker", "git"];
        let result = match_score(&["git", "sql", "kafka"], &blueprint);
        let mut merged: Vec<&str> = Vec::new();
        let (mut m, mut x) = (result.matched.iter(), result.missing.iter());
        let (mut next_m, mut next_x) = (m.next(), x.next());
        for skill in blueprint {
            if next_m.map(String::as_str) == Some(skill) {
                merged.push(skill);
                next_m = m.next();
            } else if next_x.map(String::as_str) == Some(skill) {
                merged.push(skill);
                next_x = x.next();
            }
        }
        assert_eq!(merged, blueprint);
        assert!(result.matched.iter().all(|s| !result.missing.contains(s)));
    }

    #[test]
    fn test_percentage_rounds_half_to_even() {
        assert_eq!(percentage(1, 8), 12); // 12.5
        assert_eq!(percentage(3, 8), 38); // 37.5
        assert_eq!(percentage(1, 3), 33);
        assert_eq!(percentage(1, 40), 2); // 2.5
        assert_eq!(percentage(0, 5), 0);
        assert_eq!(percentage(5, 5), 100);
        assert_eq!(percentage(0, 0), 0);
    }

    #[test]
    fn test_score_bounded() {
        for n in 0..=12 {
            let blueprint: Vec<String> = (0..12).map(|i| format!("skill{i}")).collect();
            let detected: Vec<String> = blueprint.iter().take(n).cloned().collect();
            let score = match_score(&detected, &blueprint).score;
            assert!(score <= 100);
        }
    }

    #[test]
    fn test_rank_exact_track_first() {
        let entry = catalog::lookup("Cloud/DevOps", "Cloud Engineer", "AWS").unwrap();
        let ranked = rank_tracks(entry.skills);
        assert_eq!(ranked[0].title, "Cloud Engineer");
        assert_eq!(ranked[0].score, 100);
        assert!(ranked.len() <= TOP_TRACKS);
    }

    #[test]
    fn test_rank_sorted_descending_and_truncated() {
        let ranked = rank_tracks(&["python", "sql", "git", "docker", "aws"]);
        assert_eq!(ranked.len(), TOP_TRACKS);
        assert!(ranked.windows(2).all(|w| w[0].score >= w[1].score));
    }

    #[test]
    fn test_rank_ties_keep_declaration_order() {
        let entries = catalog::flatten();
        let ranked = rank_entries(&["nothing-matches"], &entries);
        let expected: Vec<&str> = entries.iter().take(TOP_TRACKS).map(|e| e.title).collect();
        let got: Vec<&str> = ranked.iter().map(|r| r.title).collect();
        assert_eq!(got, expected);
        assert!(ranked.iter().all(|r| r.score == 0));
    }

    #[test]
    fn test_rank_full_match_beats_earlier_entries() {
        let entries = [
            RoleEntry {
                role: "A",
                category: "A",
                track: "A",
                title: "First",
                path: "A",
                skills: &["gamma"],
            },
            RoleEntry {
                role: "B",
                category: "B",
                track: "B",
                title: "Second",
                path: "B",
                skills: &["alpha", "beta"],
            },
        ];
        let ranked = rank_entries(&["alpha", "beta"], &entries);
        assert_eq!((ranked[0].title, ranked[0].score), ("Second", 100));
        assert_eq!((ranked[1].title, ranked[1].score), ("First", 0));
    }
}
