use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

use crate::quiz::models::{BigFiveVector, HollandVector};

/// One row per user in `career_profiles`. Each quiz stage fills in its own
/// columns, so any subset may be present mid-flow.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CareerProfileRow {
    pub user_id: Uuid,
    pub name: Option<String>,
    pub holland_scores: Option<Json<HollandVector>>,
    pub big_five_scores: Option<Json<BigFiveVector>>,
    pub industries: Option<Vec<String>>,
    pub activities: Option<Vec<String>>,
    pub career_advice: Option<String>,
    /// Job title → LLM-enhanced description, accumulated per user.
    pub enhanced_descriptions: Json<HashMap<String, String>>,
    pub updated_at: DateTime<Utc>,
}

/// The stage a returning user resumes at, derived from which columns hold
/// data. Quizzes come before preferences, preferences before results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfileStep {
    Holland,
    BigFive,
    Preferences,
    Results,
}

impl CareerProfileRow {
    pub fn resume_step(&self) -> ProfileStep {
        let has_prefs = self
            .industries
            .as_ref()
            .map(|i| !i.is_empty())
            .unwrap_or(false)
            && self
                .activities
                .as_ref()
                .map(|a| !a.is_empty())
                .unwrap_or(false);

        match (
            self.holland_scores.is_some(),
            self.big_five_scores.is_some(),
            has_prefs,
        ) {
            (true, true, true) => ProfileStep::Results,
            (true, true, false) => ProfileStep::Preferences,
            (true, false, _) => ProfileStep::BigFive,
            (false, _, _) => ProfileStep::Holland,
        }
    }
}
