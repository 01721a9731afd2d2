use axum::{
    extract::{rejection::JsonRejection, State},
    Extension, Json,
};
use serde::{Deserialize, Serialize};

use crate::middleware::RequestId;

use super::{ApiError, AppState};

#[derive(Debug, Deserialize)]
pub(super) struct EmbedRequest {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub(super) struct EmbedResponse {
    pub embeddings: Vec<f32>,
}

/// `POST /embed`: `{"text": "..."}` → `{"embeddings": [...]}`.
pub(super) async fn embed_text(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    payload: Result<Json<EmbedRequest>, JsonRejection>,
) -> Result<Json<EmbedResponse>, ApiError> {
    let Json(request) = payload.map_err(|rejection| {
        tracing::debug!(request_id = %req_id.0, error = %rejection, "rejected embed payload");
        ApiError::new(
            "validation_error",
            format!("invalid request body: {}", rejection.body_text()),
        )
    })?;

    tracing::info!(request_id = %req_id.0, chars = request.text.chars().count(), "embedding text");
    tracing::debug!(request_id = %req_id.0, text = %request.text, "embed input");

    let embeddings = state.tei.embed_one(&request.text).await.map_err(|e| {
        tracing::error!(request_id = %req_id.0, error = %e, "embedding failed");
        ApiError::new("internal_error", "embedding backend failed")
    })?;

    Ok(Json(EmbedResponse { embeddings }))
}
