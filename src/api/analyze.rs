//! Diary entry analysis endpoint

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::post,
};
use serde::{Deserialize, Serialize};

use super::ApiState;
use crate::db::Speaker;
use crate::engine::ThreadRngSelector;

/// Request body for `POST /api/analyze`
#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    /// The diary text to respond to
    pub text: String,

    /// Emotion label from an upstream classifier; defaults to "neutral"
    #[serde(default)]
    pub emotion: Option<String>,
}

/// Response body for `POST /api/analyze`
#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    /// Resolved emotion tag the reply speaks to
    pub emotion: &'static str,

    /// The empathetic reply, ending in a follow-up question
    pub empathetic_response: String,

    /// Discrete intensity level of the text
    pub intensity: &'static str,

    /// Main topical context
    pub context: &'static str,

    /// Finer-grained sub-topic, when one was detected
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_context: Option<&'static str>,
}

/// Error body for rejected requests
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: &'static str,
}

/// Analyze a diary entry and produce an empathetic reply
///
/// Persists the user text and the assistant reply as diary entries. A
/// persistence failure is logged but does not withhold the reply.
async fn analyze(
    State(state): State<Arc<ApiState>>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, (StatusCode, Json<ErrorResponse>)> {
    if request.text.trim().is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "text must not be empty",
            }),
        ));
    }

    let label = request.emotion.as_deref().unwrap_or("neutral");
    let mut selector = ThreadRngSelector;
    let analysis = state.engine.analyze(&request.text, label, &mut selector);

    let emotion = analysis.emotion.as_str();
    let intensity = analysis.intensity.as_str();
    let topic = analysis.context.main_topic.as_str();

    if let Err(e) = state
        .entry_repo
        .insert(Speaker::User, &request.text, emotion, intensity, topic)
        .and_then(|_| {
            state
                .entry_repo
                .insert(Speaker::Assistant, &analysis.response, emotion, intensity, topic)
        })
    {
        tracing::warn!(error = %e, "failed to persist diary entries");
    }

    tracing::debug!(emotion, intensity, topic, "analyzed diary entry");

    Ok(Json(AnalyzeResponse {
        emotion,
        empathetic_response: analysis.response,
        intensity,
        context: topic,
        sub_context: analysis.context.sub_topic,
    }))
}

/// Build the analyze router
pub fn router(state: Arc<ApiState>) -> Router {
    Router::new()
        .route("/api/analyze", post(analyze))
        .with_state(state)
}
