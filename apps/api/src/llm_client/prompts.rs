// Shared prompt fragments. Feature modules keep their own prompts.rs.

/// Output style rules appended to every mentor system prompt.
pub const ANSWER_STYLE_RULES: &str = "\
Rules:
- Be crisp, no fluff. Use short headings + bullets.
- If user asks what to learn next: prioritize missing skills, give a step-by-step plan.
- If user asks interview prep: give role-specific Qs + strong answers + common mistakes.
- If user asks projects: suggest 2–3 projects tailored to the role (stack, features, metrics, resume bullets).
- If user asks resume improvements: give ATS-friendly bullet rewrites + missing keywords.";
