use std::collections::BTreeMap;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::data::interests_by_category;
use crate::error::{AppError, AppResult};
use crate::middleware::CurrentSession;
use crate::models::{Interest, InterestCategory, ScoredRecommendation, UserProfile};
use crate::services::{
    build_dashboard, score_candidate, score_recommendations, DashboardView, LoginRequest,
    ProfileUpdate, ScoreBreakdown, SessionId,
};

use super::AppState;

// Request/Response types

#[derive(Debug, Deserialize)]
pub struct LimitQuery {
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub session_id: SessionId,
    pub profile: UserProfile,
}

/// Stateless scoring request; an absent profile scores to an empty list
#[derive(Debug, Deserialize)]
pub struct ScoreRequest {
    #[serde(default)]
    pub profile: Option<UserProfile>,
    pub limit: Option<usize>,
}

// Handlers

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<Value>) {
    (
        StatusCode::OK,
        Json(json!({
            "status": "healthy",
            "activeSessions": state.sessions.active_count().await,
        })),
    )
}

/// Sign in with a demo account
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> AppResult<(StatusCode, Json<LoginResponse>)> {
    state.simulate_latency().await;

    let session = state.sessions.login(state.profiles.as_ref(), request).await?;
    Ok((
        StatusCode::CREATED,
        Json(LoginResponse {
            session_id: session.id,
            profile: session.profile,
        }),
    ))
}

/// Sign out of the current session
pub async fn logout(
    State(state): State<AppState>,
    CurrentSession(session): CurrentSession,
) -> AppResult<StatusCode> {
    state.sessions.logout(session.id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Get the signed-in profile
pub async fn get_profile(CurrentSession(session): CurrentSession) -> Json<UserProfile> {
    Json(session.profile)
}

/// Edit the signed-in profile
pub async fn update_profile(
    State(state): State<AppState>,
    CurrentSession(session): CurrentSession,
    Json(update): Json<ProfileUpdate>,
) -> AppResult<Json<UserProfile>> {
    let profile = state.sessions.update_profile(session.id, update).await?;
    Ok(Json(profile))
}

/// Interests a profile can pick from, grouped by category
pub async fn get_interests() -> Json<BTreeMap<InterestCategory, Vec<Interest>>> {
    Json(interests_by_category())
}

/// Ranked recommendations for the signed-in profile
pub async fn get_recommendations(
    State(state): State<AppState>,
    CurrentSession(session): CurrentSession,
    Query(query): Query<LimitQuery>,
) -> Json<Vec<ScoredRecommendation>> {
    let limit = query
        .limit
        .unwrap_or(state.config.default_recommendation_limit);
    Json(score_recommendations(
        Some(&session.profile),
        &state.pool,
        limit,
    ))
}

/// How one candidate's score was assembled for the signed-in profile
pub async fn get_score_breakdown(
    State(state): State<AppState>,
    CurrentSession(session): CurrentSession,
    Path(candidate_id): Path<String>,
) -> AppResult<Json<ScoreBreakdown>> {
    let candidate = state
        .pool
        .iter()
        .find(|c| c.id == candidate_id)
        .ok_or_else(|| AppError::NotFound(format!("Recommendation {}", candidate_id)))?;

    Ok(Json(score_candidate(&session.profile, candidate)))
}

/// Score the pool for a caller-supplied profile
pub async fn score(
    State(state): State<AppState>,
    Json(request): Json<ScoreRequest>,
) -> Json<Vec<ScoredRecommendation>> {
    let limit = request
        .limit
        .unwrap_or(state.config.default_recommendation_limit);
    Json(score_recommendations(
        request.profile.as_ref(),
        &state.pool,
        limit,
    ))
}

/// Dashboard view-model for the signed-in profile
pub async fn dashboard(
    State(state): State<AppState>,
    CurrentSession(session): CurrentSession,
) -> Json<DashboardView> {
    state.simulate_latency().await;

    let scored = score_recommendations(
        Some(&session.profile),
        &state.pool,
        state.config.dashboard_recommendation_limit,
    );
    let now = chrono::Local::now().naive_local();
    Json(build_dashboard(&session.profile, scored, now))
}
