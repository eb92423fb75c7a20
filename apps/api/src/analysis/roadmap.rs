//! Learning roadmap: classifies each blueprint skill into a difficulty tier,
//! attaches an estimated duration, and orders the steps so skills already
//! held come first, then easiest, then shortest.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::catalog;
use crate::skills::normalize_skill;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Easy = 1,
    Intermediate = 2,
    Advanced = 3,
}

impl Difficulty {
    pub fn level(self) -> u8 {
        self as u8
    }

    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Advanced => "Advanced",
        }
    }

    /// Estimated weeks to learn a skill of this tier.
    pub fn weeks(self) -> u32 {
        match self {
            Difficulty::Easy => 2,
            Difficulty::Intermediate => 4,
            Difficulty::Advanced => 8,
        }
    }
}

const EASY_SKILLS: &[&str] = &[
    "html", "css", "sql", "excel", "git", "python", "java", "javascript", "statistics",
    "networking", "linux",
];

const INTERMEDIATE_SKILLS: &[&str] = &[
    "pandas", "numpy", "rest api", "spring", "spring boot", "flask", "django", "react", "node",
    "docker", "power bi", "tableau", "fastapi", "express", "mongodb", "postgresql", "mysql",
];

const ADVANCED_SKILLS: &[&str] = &[
    "kubernetes", "microservices", "kafka", "spark", "airflow", "mlops", "terraform",
    "transformers", "pytorch", "data warehousing", "feature engineering", "model deployment",
    "model evaluation", "ci/cd",
];

/// Hand-curated tier membership. Skills outside every tier are Intermediate.
#[derive(Debug, Clone)]
pub struct DifficultyTiers {
    easy: HashSet<&'static str>,
    intermediate: HashSet<&'static str>,
    advanced: HashSet<&'static str>,
}

impl Default for DifficultyTiers {
    fn default() -> Self {
        Self {
            easy: EASY_SKILLS.iter().copied().collect(),
            intermediate: INTERMEDIATE_SKILLS.iter().copied().collect(),
            advanced: ADVANCED_SKILLS.iter().copied().collect(),
        }
    }
}

impl DifficultyTiers {
    pub fn classify(&self, skill: &str) -> Difficulty {
        if self.easy.contains(skill) {
            Difficulty::Easy
        } else if self.intermediate.contains(skill) {
            Difficulty::Intermediate
        } else if self.advanced.contains(skill) {
            Difficulty::Advanced
        } else {
            Difficulty::Intermediate
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoadmapStep {
    pub skill: String,
    pub level: u8,
    pub level_label: String,
    pub weeks: u32,
    pub has: bool,
}

/// Builds the ordered roadmap for a blueprint given the detected skills.
pub fn build_roadmap<B, D>(blueprint: &[B], detected: &[D], tiers: &DifficultyTiers) -> Vec<RoadmapStep>
where
    B: AsRef<str>,
    D: AsRef<str>,
{
    let detected: HashSet<String> = detected.iter().map(|s| normalize_skill(s.as_ref())).collect();

    let mut steps: Vec<RoadmapStep> = blueprint
        .iter()
        .map(|skill| {
            let skill = normalize_skill(skill.as_ref());
            let difficulty = tiers.classify(&skill);
            RoadmapStep {
                has: detected.contains(&skill),
                level: difficulty.level(),
                level_label: difficulty.label().to_string(),
                weeks: difficulty.weeks(),
                skill,
            }
        })
        .collect();

    // Stable: equal keys keep blueprint order.
    steps.sort_by_key(|step| (!step.has, step.level, step.weeks));
    steps
}

/// Roadmap for a catalog triple; empty when the triple is unknown.
pub fn roadmap_for_track<D: AsRef<str>>(
    role: &str,
    category: &str,
    track: &str,
    detected: &[D],
    tiers: &DifficultyTiers,
) -> Vec<RoadmapStep> {
    match catalog::lookup(role, category, track) {
        Some(entry) => build_roadmap(entry.skills, detected, tiers),
        None => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skills(steps: &[RoadmapStep]) -> Vec<&str> {
        steps.iter().map(|s| s.skill.as_str()).collect()
    }

    #[test]
    fn test_owned_then_easy_medium_hard() {
        let steps = build_roadmap(
            &["kubernetes", "html", "pandas"],
            &["html"],
            &DifficultyTiers::default(),
        );
        assert_eq!(skills(&steps), vec!["html", "pandas", "kubernetes"]);

        assert!(steps[0].has);
        assert_eq!((steps[0].level, steps[0].weeks), (1, 2));
        assert_eq!(steps[0].level_label, "Easy");

        assert!(!steps[1].has);
        assert_eq!((steps[1].level, steps[1].weeks), (2, 4));
        assert_eq!(steps[1].level_label, "Intermediate");

        assert!(!steps[2].has);
        assert_eq!((steps[2].level, steps[2].weeks), (3, 8));
        assert_eq!(steps[2].level_label, "Advanced");
    }

    #[test]
    fn test_owned_hard_skill_precedes_unowned_easy() {
        let steps = build_roadmap(&["git", "kafka"], &["kafka"], &DifficultyTiers::default());
        assert_eq!(skills(&steps), vec!["kafka", "git"]);
    }

    #[test]
    fn test_unknown_skill_defaults_to_intermediate() {
        let tiers = DifficultyTiers::default();
        assert_eq!(tiers.classify("jetpack"), Difficulty::Intermediate);
        let steps = build_roadmap(&["jetpack"], &[] as &[&str], &tiers);
        assert_eq!((steps[0].level, steps[0].weeks), (2, 4));
    }

    #[test]
    fn test_ties_keep_blueprint_order() {
        let steps = build_roadmap(
            &["docker", "jetpack", "react", "sql", "css"],
            &[] as &[&str],
            &DifficultyTiers::default(),
        );
        assert_eq!(skills(&steps), vec!["sql", "css", "docker", "jetpack", "react"]);
    }

    #[test]
    fn test_blueprint_skills_normalized() {
        let steps = build_roadmap(&[" HTML "], &["html"], &DifficultyTiers::default());
        assert_eq!(steps[0].skill, "html");
        assert!(steps[0].has);
    }

    #[test]
    fn test_unknown_triple_yields_empty_roadmap() {
        let steps = roadmap_for_track("Nope", "Nope", "Nope", &["java"], &DifficultyTiers::default());
        assert!(steps.is_empty());
    }

    #[test]
    fn test_catalog_track_roadmap_covers_blueprint() {
        let steps = roadmap_for_track(
            "Developer",
            "Backend Developer",
            "Java",
            &["java", "docker"],
            &DifficultyTiers::default(),
        );
        let entry = catalog::lookup("Developer", "Backend Developer", "Java").unwrap();
        assert_eq!(steps.len(), entry.skills.len());
        assert_eq!(skills(&steps[..2]), vec!["java", "docker"]);
    }
}
