//! Axum route handlers for recommendations and LLM enrichment.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::catalog::{JobProfile, JOB_PROFILES};
use crate::errors::AppError;
use crate::profile::handlers::UserIdQuery;
use crate::profile::models::CareerProfileRow;
use crate::profile::store::{fetch_profile, save_career_advice, save_enhanced_description};
use crate::quiz::models::{BigFiveVector, HollandVector};
use crate::quiz::preferences::Preferences;
use crate::recommend::ranker::{recommend_jobs, ScoredJob};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct RecommendationsResponse {
    pub jobs: Vec<ScoredJob>,
}

#[derive(Debug, Deserialize)]
pub struct AdviceRequest {
    pub user_id: Uuid,
}

#[derive(Debug, Serialize)]
pub struct AdviceResponse {
    pub advice: String,
}

#[derive(Debug, Deserialize)]
pub struct EnhanceRequest {
    pub user_id: Uuid,
    pub job_title: String,
}

#[derive(Debug, Serialize)]
pub struct EnhanceResponse {
    pub job_title: String,
    pub description: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/recommendations
///
/// Ranks the static catalog against the stored profile and returns the top 5.
/// Requires a complete profile (both vectors and preferences).
pub async fn handle_get_recommendations(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<RecommendationsResponse>, AppError> {
    let profile = require_profile(&state, params.user_id).await?;
    let (holland, big_five, prefs) = require_complete(&profile)?;

    let jobs = recommend_jobs(JOB_PROFILES, &holland, &big_five, &prefs);
    Ok(Json(RecommendationsResponse { jobs }))
}

/// POST /api/v1/recommendations/advice
///
/// Generates personalized career advice from the complete profile, persists
/// it, and returns the text. Purely additive: recommendations do not depend
/// on this call.
pub async fn handle_generate_advice(
    State(state): State<AppState>,
    Json(req): Json<AdviceRequest>,
) -> Result<Json<AdviceResponse>, AppError> {
    let profile = require_profile(&state, req.user_id).await?;
    let (holland, big_five, prefs) = require_complete(&profile)?;

    let advice = state
        .enricher
        .career_advice(&holland, &big_five, &prefs)
        .await?;
    save_career_advice(&state.db, req.user_id, &advice).await?;

    tracing::info!(user_id = %req.user_id, "Career advice generated");
    Ok(Json(AdviceResponse { advice }))
}

/// POST /api/v1/jobs/enhance
///
/// Expands one catalog job's description and stores it in the user's
/// enhanced-descriptions map, keyed by title.
pub async fn handle_enhance_description(
    State(state): State<AppState>,
    Json(req): Json<EnhanceRequest>,
) -> Result<Json<EnhanceResponse>, AppError> {
    if JobProfile::by_title(&req.job_title).is_none() {
        return Err(AppError::NotFound(format!(
            "No job titled '{}' in the catalog",
            req.job_title
        )));
    }

    let description = state.enricher.enhance_description(&req.job_title).await?;
    save_enhanced_description(&state.db, req.user_id, &req.job_title, &description).await?;

    tracing::info!(user_id = %req.user_id, job_title = %req.job_title, "Description enhanced");
    Ok(Json(EnhanceResponse {
        job_title: req.job_title,
        description,
    }))
}

// ────────────────────────────────────────────────────────────────────────────
// Profile gates
// ────────────────────────────────────────────────────────────────────────────

async fn require_profile(state: &AppState, user_id: Uuid) -> Result<CareerProfileRow, AppError> {
    fetch_profile(&state.db, user_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("No profile for user {user_id}")))
}

/// Pulls the three scoring inputs out of a stored row, rejecting profiles
/// that have not finished every stage yet.
fn require_complete(
    profile: &CareerProfileRow,
) -> Result<(HollandVector, BigFiveVector, Preferences), AppError> {
    let holland = profile
        .holland_scores
        .as_ref()
        .map(|j| j.0)
        .ok_or_else(incomplete)?;
    let big_five = profile
        .big_five_scores
        .as_ref()
        .map(|j| j.0)
        .ok_or_else(incomplete)?;

    let industries = profile.industries.clone().unwrap_or_default();
    let activities = profile.activities.clone().unwrap_or_default();
    if industries.is_empty() || activities.is_empty() {
        return Err(incomplete());
    }

    Ok((
        holland,
        big_five,
        Preferences {
            industries,
            activities,
        },
    ))
}

fn incomplete() -> AppError {
    AppError::UnprocessableEntity(
        "Complete both quizzes and the preference questions before requesting recommendations"
            .to_string(),
    )
}
