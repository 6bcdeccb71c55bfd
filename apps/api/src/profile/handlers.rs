use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::profile::models::{CareerProfileRow, ProfileStep};
use crate::profile::store::{fetch_profile, save_name};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct UserIdQuery {
    pub user_id: Uuid,
}

#[derive(Debug, Deserialize)]
pub struct StartRequest {
    pub user_id: Uuid,
    /// Optional display name from the start screen.
    pub name: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub profile: CareerProfileRow,
    /// Where a returning user should pick the flow back up.
    pub next_step: ProfileStep,
}

/// POST /api/v1/profile/start
///
/// Records the (possibly empty) display name and ensures the profile row
/// exists, so later stage writes always hit the same document.
pub async fn handle_start(
    State(state): State<AppState>,
    Json(req): Json<StartRequest>,
) -> Result<StatusCode, AppError> {
    let name = req.name.unwrap_or_default();
    save_name(&state.db, req.user_id, name.trim()).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/profile
///
/// Returns the stored profile plus the derived resume step. A user with no
/// stored data gets a 404 and starts fresh.
pub async fn handle_get_profile(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<ProfileResponse>, AppError> {
    let profile = fetch_profile(&state.db, params.user_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("No profile for user {}", params.user_id)))?;

    let next_step = profile.resume_step();
    Ok(Json(ProfileResponse { profile, next_step }))
}
