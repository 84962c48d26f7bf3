use axum::{extract::State, http::StatusCode, Extension, Json};
use serde::Serialize;
use serde_json::{json, Value};

use crate::{
    error::{AppError, AppResult},
    middleware::RequestId,
    models::{
        ContentItem, FeedbackRecord, FeedbackRequest, FeedbackSummary, MoodCategory,
        RecommendationRequest, RecommendationResponse,
    },
    services::{feedback, mood_resolver, providers},
};

use super::AppState;

#[derive(Debug, Serialize)]
pub struct MoodResponse {
    pub mood: MoodCategory,
    pub target_mood: &'static str,
}

/// Health check endpoint
pub async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

/// List the supported moods and what each one steers towards
pub async fn get_moods() -> Json<Vec<MoodResponse>> {
    let moods = MoodCategory::ALL
        .into_iter()
        .map(|mood| MoodResponse {
            mood,
            target_mood: mood_resolver::target_mood(mood),
        })
        .collect();
    Json(moods)
}

/// Get the full content catalog
pub async fn get_catalog(State(state): State<AppState>) -> Json<Vec<ContentItem>> {
    Json(state.recommender.catalog().items().to_vec())
}

/// Rank the catalog for a mood and free-text goal
pub async fn recommend(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Json(request): Json<RecommendationRequest>,
) -> AppResult<Json<RecommendationResponse>> {
    let k = request.k.unwrap_or(state.default_k);

    tracing::info!(
        request_id = %request_id,
        mood = %request.mood,
        k,
        "Processing recommendation request"
    );

    let recommendation = state
        .recommender
        .get_recommendations(&request.mood, &request.free_text, k)?;
    let target_mood = mood_resolver::target_mood(recommendation.mood);

    let search_query = match request.free_text.trim() {
        "" => target_mood,
        text => text,
    };
    let external = providers::augment(
        state.search_provider.as_ref(),
        search_query,
        state.external_result_limit,
    )
    .await;

    tracing::info!(
        request_id = %request_id,
        result_count = recommendation.results.len(),
        external_count = external.len(),
        "Recommendation completed"
    );

    Ok(Json(RecommendationResponse {
        mood: recommendation.mood,
        target_mood: target_mood.to_string(),
        results: recommendation.results,
        external,
    }))
}

/// Record a satisfaction click
pub async fn record_feedback(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Json(request): Json<FeedbackRequest>,
) -> AppResult<(StatusCode, Json<FeedbackRecord>)> {
    let satisfied = match request.satisfied {
        0 => false,
        1 => true,
        other => {
            return Err(AppError::InvalidArgument(format!(
                "satisfied must be 0 or 1, got {}",
                other
            )))
        }
    };

    let record = FeedbackRecord::new(request.before_mood, request.after_mood, satisfied);
    state.ledger.append(record.clone()).await.map_err(|e| {
        tracing::error!(request_id = %request_id, error = %e, "Failed to record feedback");
        e
    })?;

    tracing::info!(request_id = %request_id, satisfied, "Feedback recorded");

    Ok((StatusCode::CREATED, Json(record)))
}

/// Full feedback history in append order
pub async fn get_feedback(State(state): State<AppState>) -> AppResult<Json<Vec<FeedbackRecord>>> {
    Ok(Json(state.ledger.load_all().await?))
}

/// Count and satisfaction rate across all feedback
pub async fn get_feedback_summary(
    State(state): State<AppState>,
) -> AppResult<Json<FeedbackSummary>> {
    Ok(Json(feedback::summarize(state.ledger.as_ref()).await?))
}
