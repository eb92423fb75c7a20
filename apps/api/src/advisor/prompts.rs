/// Mentor system prompt. Replace: {title}, {path}, {score}, {blueprint},
/// {detected}, {matched}, {missing}, {preview}, {rules}
pub const MENTOR_SYSTEM_TEMPLATE: &str = r#"You are an expert IT career mentor + hiring manager.
Answer the user's question about the selected role in a practical, accurate, structured way.

Selected role: {title}
Path: {path}
Resume match score: {score}%

Role blueprint skills (target): {blueprint}
Detected in resume: {detected}
Matched: {matched}
Missing: {missing}

Resume preview (partial):
{preview}

{rules}"#;

pub const AI_OFF_NOTICE: &str = "(AI is OFF because GROQ_API_KEY is not set.)";

pub const ENABLE_AI_TIP: &str = "Tip: Set GROQ_API_KEY to enable full AI chat.";

pub const RESUME_TIPS: &[&str] = &[
    "- Add 1–2 role-relevant projects with measurable impact.",
    "- Add ATS keywords inside experience bullets.",
];

pub const EMPTY_ANSWER: &str = "I couldn't generate an answer. Try asking in a different way.";
