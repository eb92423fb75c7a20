//! Advisor: answers free-text questions about the analyzed role.
//!
//! With a chat collaborator configured, the question is forwarded together with
//! a system prompt describing the current analysis. Without one, a
//! deterministic answer is assembled from the matched and missing skills.

pub mod prompts;

use serde::Serialize;
use tracing::{info, warn};

use crate::analysis::report::AnalysisResult;
use crate::errors::AppError;
use crate::llm_client::{prompts::ANSWER_STYLE_RULES, ChatCompleter, LlmError};

use prompts::{
    AI_OFF_NOTICE, EMPTY_ANSWER, ENABLE_AI_TIP, MENTOR_SYSTEM_TEMPLATE, RESUME_TIPS,
};

const RESUME_MISSING_LIMIT: usize = 10;
const SKILL_LIST_LIMIT: usize = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AnswerSource {
    Ai,
    Fallback,
}

#[derive(Debug, Clone, Serialize)]
pub struct AdvisorAnswer {
    pub ok: bool,
    pub answer: String,
    pub source: AnswerSource,
}

/// Builds the mentor system prompt for `analysis`.
pub fn build_system_prompt(analysis: &AnalysisResult) -> String {
    MENTOR_SYSTEM_TEMPLATE
        .replace("{title}", &analysis.title)
        .replace("{path}", &analysis.path)
        .replace("{score}", &analysis.score.to_string())
        .replace("{blueprint}", &analysis.blueprint.join(", "))
        .replace("{detected}", &analysis.detected.join(", "))
        .replace("{matched}", &analysis.matched.join(", "))
        .replace("{missing}", &analysis.missing.join(", "))
        .replace("{preview}", &analysis.preview)
        .replace("{rules}", ANSWER_STYLE_RULES)
}

/// Deterministic answer used when no chat collaborator is configured.
pub fn fallback_answer(analysis: &AnalysisResult, question: &str) -> String {
    let title = if analysis.title.is_empty() {
        "Selected Role"
    } else {
        analysis.title.as_str()
    };

    let mut lines = vec![AI_OFF_NOTICE.to_string(), format!("Role: {title}")];

    if question.to_lowercase().contains("resume") {
        lines.push("Quick resume upgrades:".to_string());
        if !analysis.missing.is_empty() {
            lines.push(format!(
                "- Add missing keywords in Skills: {}",
                head(&analysis.missing, RESUME_MISSING_LIMIT)
            ));
        }
        lines.extend(RESUME_TIPS.iter().map(|tip| tip.to_string()));
    } else {
        if !analysis.missing.is_empty() {
            lines.push(format!(
                "Missing skills to learn next: {}",
                head(&analysis.missing, SKILL_LIST_LIMIT)
            ));
        }
        if !analysis.matched.is_empty() {
            lines.push(format!(
                "Your strong skills: {}",
                head(&analysis.matched, SKILL_LIST_LIMIT)
            ));
        }
        lines.push(ENABLE_AI_TIP.to_string());
    }

    lines.join("\n")
}

fn head(items: &[String], limit: usize) -> String {
    items
        .iter()
        .take(limit)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Answers `question` about `analysis`.
///
/// A missing collaborator is not an error: the fallback answer is returned.
/// A collaborator failure is reported as `AppError::Llm`.
pub async fn ask(
    chat: Option<&dyn ChatCompleter>,
    analysis: &AnalysisResult,
    question: &str,
) -> Result<AdvisorAnswer, AppError> {
    let question = question.trim();
    if question.is_empty() {
        return Err(AppError::Validation("Type a question first.".to_string()));
    }

    let Some(chat) = chat else {
        info!("Chat collaborator not configured; using fallback answer");
        return Ok(AdvisorAnswer {
            ok: true,
            answer: fallback_answer(analysis, question),
            source: AnswerSource::Fallback,
        });
    };

    let system = build_system_prompt(analysis);
    let answer = match chat.complete(&system, question).await {
        Ok(answer) => answer,
        Err(LlmError::EmptyContent) => EMPTY_ANSWER.to_string(),
        Err(e) => {
            warn!("Chat completion failed for {}: {e}", analysis.title);
            return Err(AppError::Llm(e.to_string()));
        }
    };

    Ok(AdvisorAnswer {
        ok: true,
        answer,
        source: AnswerSource::Ai,
    })
}
