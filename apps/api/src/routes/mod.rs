pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::profile::handlers as profile_handlers;
use crate::quiz::handlers as quiz_handlers;
use crate::recommend::handlers as recommend_handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Profile flow
        .route("/api/v1/profile/start", post(profile_handlers::handle_start))
        .route("/api/v1/profile", get(profile_handlers::handle_get_profile))
        // Quizzes and preferences
        .route(
            "/api/v1/quiz/questions",
            get(quiz_handlers::handle_get_questions),
        )
        .route(
            "/api/v1/quiz/holland",
            post(quiz_handlers::handle_submit_holland),
        )
        .route(
            "/api/v1/quiz/big-five",
            post(quiz_handlers::handle_submit_big_five),
        )
        .route(
            "/api/v1/quiz/preferences",
            post(quiz_handlers::handle_submit_preferences),
        )
        // Recommendations and enrichment
        .route(
            "/api/v1/recommendations",
            get(recommend_handlers::handle_get_recommendations),
        )
        .route(
            "/api/v1/recommendations/advice",
            post(recommend_handlers::handle_generate_advice),
        )
        .route(
            "/api/v1/jobs/enhance",
            post(recommend_handlers::handle_enhance_description),
        )
        .with_state(state)
}
