// Skill recognition: the fixed keyword bank, free-text normalization, and
// boundary-aware detection of bank skills in résumé text.

pub mod bank;
pub mod detector;
pub mod normalizer;

pub use detector::detect_skills;
pub use normalizer::{normalize_skill, normalize_text, unique_normalized};
