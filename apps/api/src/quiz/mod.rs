// Quiz engine: trait vectors, answer scoring, preference normalization.
// The scoring functions are pure; handlers own the completeness checks.

pub mod handlers;
pub mod models;
pub mod preferences;
pub mod scoring;
