// Résumé analysis: blueprint scoring, ranking across all tracks, learning
// roadmap, and the per-session analysis record.

pub mod handlers;
pub mod report;
pub mod roadmap;
pub mod scoring;
