//! Persistence for `career_profiles`: one row per opaque user id, written
//! with per-stage partial upserts so each step of the flow saves
//! independently. Scoring works entirely in memory and never waits on these
//! writes to produce a result.

use sqlx::types::Json;
use sqlx::PgPool;
use uuid::Uuid;

use crate::profile::models::CareerProfileRow;
use crate::quiz::models::{BigFiveVector, HollandVector};
use crate::quiz::preferences::Preferences;

pub async fn fetch_profile(
    pool: &PgPool,
    user_id: Uuid,
) -> Result<Option<CareerProfileRow>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM career_profiles WHERE user_id = $1")
        .bind(user_id)
        .fetch_optional(pool)
        .await
}

pub async fn save_name(pool: &PgPool, user_id: Uuid, name: &str) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        INSERT INTO career_profiles (user_id, name)
        VALUES ($1, $2)
        ON CONFLICT (user_id)
        DO UPDATE SET name = EXCLUDED.name, updated_at = now()
        "#,
    )
    .bind(user_id)
    .bind(name)
    .execute(pool)
    .await?;
    Ok(())
}

pub async fn save_holland_scores(
    pool: &PgPool,
    user_id: Uuid,
    scores: &HollandVector,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        INSERT INTO career_profiles (user_id, holland_scores)
        VALUES ($1, $2)
        ON CONFLICT (user_id)
        DO UPDATE SET holland_scores = EXCLUDED.holland_scores, updated_at = now()
        "#,
    )
    .bind(user_id)
    .bind(Json(scores))
    .execute(pool)
    .await?;
    Ok(())
}

pub async fn save_big_five_scores(
    pool: &PgPool,
    user_id: Uuid,
    scores: &BigFiveVector,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        INSERT INTO career_profiles (user_id, big_five_scores)
        VALUES ($1, $2)
        ON CONFLICT (user_id)
        DO UPDATE SET big_five_scores = EXCLUDED.big_five_scores, updated_at = now()
        "#,
    )
    .bind(user_id)
    .bind(Json(scores))
    .execute(pool)
    .await?;
    Ok(())
}

pub async fn save_preferences(
    pool: &PgPool,
    user_id: Uuid,
    preferences: &Preferences,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        INSERT INTO career_profiles (user_id, industries, activities)
        VALUES ($1, $2, $3)
        ON CONFLICT (user_id)
        DO UPDATE SET industries = EXCLUDED.industries,
                      activities = EXCLUDED.activities,
                      updated_at = now()
        "#,
    )
    .bind(user_id)
    .bind(&preferences.industries)
    .bind(&preferences.activities)
    .execute(pool)
    .await?;
    Ok(())
}

pub async fn save_career_advice(
    pool: &PgPool,
    user_id: Uuid,
    advice: &str,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        INSERT INTO career_profiles (user_id, career_advice)
        VALUES ($1, $2)
        ON CONFLICT (user_id)
        DO UPDATE SET career_advice = EXCLUDED.career_advice, updated_at = now()
        "#,
    )
    .bind(user_id)
    .bind(advice)
    .execute(pool)
    .await?;
    Ok(())
}

/// Merges one title → description pair into the per-user enhanced map,
/// keeping previously enhanced titles.
pub async fn save_enhanced_description(
    pool: &PgPool,
    user_id: Uuid,
    job_title: &str,
    description: &str,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        INSERT INTO career_profiles (user_id, enhanced_descriptions)
        VALUES ($1, jsonb_build_object($2::text, $3::text))
        ON CONFLICT (user_id)
        DO UPDATE SET enhanced_descriptions =
                          career_profiles.enhanced_descriptions
                          || jsonb_build_object($2::text, $3::text),
                      updated_at = now()
        "#,
    )
    .bind(user_id)
    .bind(job_title)
    .bind(description)
    .execute(pool)
    .await?;
    Ok(())
}
