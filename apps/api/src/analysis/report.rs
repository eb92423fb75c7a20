use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::analysis::scoring::match_score;
use crate::catalog::RoleEntry;
use crate::skills::{detect_skills, unique_normalized};

/// Characters of extracted résumé text kept in the analysis record.
pub const PREVIEW_CHARS: usize = 600;

/// The "current analysis" of one session. Replaced wholesale by every new
/// upload, never updated in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub analysis_id: Uuid,
    pub role: String,
    pub category: String,
    pub track: String,
    pub title: String,
    pub path: String,
    pub score: u32,
    pub blueprint: Vec<String>,
    pub detected: Vec<String>,
    pub matched: Vec<String>,
    pub missing: Vec<String>,
    pub preview: String,
    pub analyzed_at: DateTime<Utc>,
}

/// Detects skills in `resume_text` and scores them against the entry's blueprint.
pub fn analyze_text(entry: &RoleEntry, resume_text: &str) -> AnalysisResult {
    let blueprint = unique_normalized(entry.skills);
    let detected = unique_normalized(detect_skills(resume_text));
    let scored = match_score(&detected, &blueprint);

    AnalysisResult {
        analysis_id: Uuid::new_v4(),
        role: entry.role.to_string(),
        category: entry.category.to_string(),
        track: entry.track.to_string(),
        title: entry.title.to_string(),
        path: entry.path.to_string(),
        score: scored.score,
        blueprint,
        detected,
        matched: scored.matched,
        missing: scored.missing,
        preview: resume_text.chars().take(PREVIEW_CHARS).collect(),
        analyzed_at: Utc::now(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    fn python_web() -> RoleEntry {
        catalog::lookup("Developer", "Web Developer", "Python").unwrap()
    }

    #[test]
    fn test_analyze_text_scores_blueprint() {
        let text = "Python developer: Flask, Django, REST APIs, PostgreSQL (postgres), Git, Docker";
        let result = analyze_text(&python_web(), text);

        assert_eq!(result.title, "Python Web Developer");
        assert_eq!(result.blueprint.len(), 12);
        for skill in ["python", "flask", "django", "rest api", "postgresql", "git", "docker"] {
            assert!(result.matched.contains(&skill.to_string()), "missing match {skill}");
        }
        assert!(result.missing.contains(&"aws".to_string()));
        assert_eq!(result.matched.len() + result.missing.len(), result.blueprint.len());
        assert_eq!(result.score, 58); // 7 / 12
    }

    #[test]
    fn test_analyze_empty_text_is_zero_not_error() {
        let result = analyze_text(&python_web(), "");
        assert_eq!(result.score, 0);
        assert!(result.detected.is_empty());
        assert!(result.matched.is_empty());
        assert_eq!(result.missing, result.blueprint);
        assert_eq!(result.preview, "");
    }

    #[test]
    fn test_preview_truncated_by_chars() {
        let text = "é".repeat(PREVIEW_CHARS + 50);
        let result = analyze_text(&python_web(), &text);
        assert_eq!(result.preview.chars().count(), PREVIEW_CHARS);
    }

    #[test]
    fn test_each_analysis_gets_fresh_id() {
        let a = analyze_text(&python_web(), "python");
        let b = analyze_text(&python_web(), "python");
        assert_ne!(a.analysis_id, b.analysis_id);
    }
}
