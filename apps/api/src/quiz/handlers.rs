//! Axum route handlers for the quiz flow.
//!
//! This is the answer-collection boundary: it enforces the completeness and
//! range preconditions before the (permissive) scorers run, mirroring the
//! per-question gate of the collection UI.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::catalog::{BIG_FIVE_QUESTIONS, HOLLAND_QUESTIONS, TOP_INDUSTRIES};
use crate::errors::AppError;
use crate::profile::store::{save_big_five_scores, save_holland_scores, save_preferences};
use crate::quiz::models::{
    AnswerSet, BigFiveQuestion, BigFiveVector, HollandQuestion, HollandVector,
};
use crate::quiz::preferences::{self, Preferences};
use crate::quiz::scoring::{score_big_five, score_holland};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct QuizSubmission {
    pub user_id: Uuid,
    pub answers: AnswerSet,
}

#[derive(Debug, Serialize)]
pub struct HollandScoreResponse {
    pub scores: HollandVector,
    /// Top-three dimension letters, e.g. "ICA".
    pub holland_code: String,
}

#[derive(Debug, Serialize)]
pub struct BigFiveScoreResponse {
    pub scores: BigFiveVector,
}

#[derive(Debug, Deserialize)]
pub struct PreferencesRequest {
    pub user_id: Uuid,
    /// Checkbox selections from the industry checklist.
    #[serde(default)]
    pub industries: Vec<String>,
    /// Free-text "other industry" field.
    #[serde(default)]
    pub other_industry: String,
    /// Up to three free-text activity fields, blanks included.
    #[serde(default)]
    pub activities: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct QuestionsResponse {
    pub holland: &'static [HollandQuestion],
    pub big_five: &'static [BigFiveQuestion],
    pub industries: &'static [&'static str],
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/quiz/questions
///
/// Both questionnaires and the industry checklist, for the collection UI.
pub async fn handle_get_questions() -> Json<QuestionsResponse> {
    Json(QuestionsResponse {
        holland: HOLLAND_QUESTIONS,
        big_five: BIG_FIVE_QUESTIONS,
        industries: TOP_INDUSTRIES,
    })
}

/// POST /api/v1/quiz/holland
pub async fn handle_submit_holland(
    State(state): State<AppState>,
    Json(req): Json<QuizSubmission>,
) -> Result<Json<HollandScoreResponse>, AppError> {
    validate_answers(HOLLAND_QUESTIONS.iter().map(|q| q.id), &req.answers)?;

    let scores = score_holland(HOLLAND_QUESTIONS, &req.answers);
    save_holland_scores(&state.db, req.user_id, &scores).await?;

    tracing::info!(user_id = %req.user_id, "Holland quiz scored");
    Ok(Json(HollandScoreResponse {
        holland_code: scores.holland_code(),
        scores,
    }))
}

/// POST /api/v1/quiz/big-five
pub async fn handle_submit_big_five(
    State(state): State<AppState>,
    Json(req): Json<QuizSubmission>,
) -> Result<Json<BigFiveScoreResponse>, AppError> {
    validate_answers(BIG_FIVE_QUESTIONS.iter().map(|q| q.id), &req.answers)?;

    let scores = score_big_five(BIG_FIVE_QUESTIONS, &req.answers);
    save_big_five_scores(&state.db, req.user_id, &scores).await?;

    tracing::info!(user_id = %req.user_id, "Big Five quiz scored");
    Ok(Json(BigFiveScoreResponse { scores }))
}

/// POST /api/v1/quiz/preferences
pub async fn handle_submit_preferences(
    State(state): State<AppState>,
    Json(req): Json<PreferencesRequest>,
) -> Result<Json<Preferences>, AppError> {
    preferences::validate_submission(&req.industries, &req.other_industry, &req.activities)?;
    let prefs = preferences::normalize(&req.industries, &req.other_industry, &req.activities);
    save_preferences(&state.db, req.user_id, &prefs).await?;

    tracing::info!(user_id = %req.user_id, "Preferences saved");
    Ok(Json(prefs))
}

/// Rejects an answer set that misses any question id or holds a value
/// outside the 1–5 scale. Past this gate the scorers are allowed to be
/// permissive about lookups.
fn validate_answers<'a>(
    question_ids: impl Iterator<Item = &'a str>,
    answers: &AnswerSet,
) -> Result<(), AppError> {
    let missing: Vec<&str> = question_ids
        .filter(|id| !answers.contains_key(*id))
        .collect();
    if !missing.is_empty() {
        return Err(AppError::Validation(format!(
            "Please answer all questions before submitting (missing: {})",
            missing.join(", ")
        )));
    }

    if let Some((id, value)) = answers.iter().find(|(_, v)| !(1..=5).contains(*v)) {
        return Err(AppError::Validation(format!(
            "Answer for {id} must be between 1 and 5 (got {value})"
        )));
    }
    Ok(())
}
