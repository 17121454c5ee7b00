use super::types::ErrorResponse;
use crate::veo::{GenerationRequest, GenerationResult, VideoGenerator};
use axum::{extract::State, http::StatusCode, response::Json};
use std::sync::Arc;
use tracing::{error, info};

#[derive(Clone)]
pub struct AppState {
    /// Absent when no credential is configured; the handler then answers
    /// with the demo video and never touches the network.
    pub generator: Option<Arc<dyn VideoGenerator>>,
    pub demo_video_url: String,
}

pub async fn generate(
    State(state): State<AppState>,
    Json(request): Json<GenerationRequest>,
) -> Result<Json<GenerationResult>, (StatusCode, Json<ErrorResponse>)> {
    if let Err(e) = request.validate() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: e.to_string(),
            }),
        ));
    }

    let Some(generator) = &state.generator else {
        info!("No API key configured, returning demo video");
        return Ok(Json(GenerationResult {
            video_url: state.demo_video_url.clone(),
            operation_id: Some("demo-fallback".to_string()),
            meta: None,
        }));
    };

    match generator.generate(&request).await {
        Ok(result) => {
            info!(video_url = %result.video_url, "Generation succeeded");
            Ok(Json(result))
        }
        Err(e) => {
            error!("Generation failed: {}", e);
            Err((
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: e.to_string(),
                }),
            ))
        }
    }
}
