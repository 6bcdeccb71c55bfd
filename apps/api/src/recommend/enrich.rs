//! Enricher — pluggable, trait-based text enrichment for the results screen.
//!
//! Default: `GeminiEnricher` (advice + description enhancement via the
//! Gemini client). `AppState` holds an `Arc<dyn Enricher>`, so tests can
//! swap in a canned implementation without touching handlers.
//!
//! Enrichment is purely additive display text: recommendation scoring never
//! reads it and never depends on these calls succeeding.

use async_trait::async_trait;

use crate::errors::AppError;
use crate::llm_client::LlmClient;
use crate::quiz::models::{BigFiveVector, HollandVector};
use crate::quiz::preferences::Preferences;
use crate::recommend::prompts::{advice_prompt, enhance_description_prompt};

#[async_trait]
pub trait Enricher: Send + Sync {
    /// Personalized career advice from the full profile.
    async fn career_advice(
        &self,
        holland: &HollandVector,
        big_five: &BigFiveVector,
        preferences: &Preferences,
    ) -> Result<String, AppError>;

    /// A richer description for one catalog job title.
    async fn enhance_description(&self, job_title: &str) -> Result<String, AppError>;
}

/// Production enricher backed by the Gemini client.
pub struct GeminiEnricher {
    llm: LlmClient,
}

impl GeminiEnricher {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl Enricher for GeminiEnricher {
    async fn career_advice(
        &self,
        holland: &HollandVector,
        big_five: &BigFiveVector,
        preferences: &Preferences,
    ) -> Result<String, AppError> {
        let prompt = advice_prompt(holland, big_five, preferences);
        self.llm
            .call_text(&prompt)
            .await
            .map_err(|e| AppError::Llm(format!("Failed to generate career advice: {e}")))
    }

    async fn enhance_description(&self, job_title: &str) -> Result<String, AppError> {
        let prompt = enhance_description_prompt(job_title);
        self.llm
            .call_text(&prompt)
            .await
            .map_err(|e| AppError::Llm(format!("Failed to enhance job description: {e}")))
    }
}
