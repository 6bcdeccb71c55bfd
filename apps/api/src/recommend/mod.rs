// Recommendation engine: per-job fit sub-scores, weighted ranking, and the
// LLM enrichment collaborator. All LLM calls go through llm_client.

pub mod enrich;
pub mod fit;
pub mod handlers;
pub mod prompts;
pub mod ranker;
