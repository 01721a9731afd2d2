use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Extension, Json,
};
use profsent_sentiment::{aggregate_professor, ProfessorSentiment, SentimentError};
use serde::Deserialize;

use crate::middleware::RequestId;

use super::{ApiError, AppState};

#[derive(Debug, Deserialize)]
pub(super) struct ProfessorQuery {
    /// The web client sends `name`; the documented parameter is `professor`.
    #[serde(alias = "name")]
    pub professor: Option<String>,
}

/// `GET|POST /get_professor_sentiment?professor=<name>`.
pub(super) async fn professor_sentiment(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    query: Result<Query<ProfessorQuery>, QueryRejection>,
) -> Result<Json<ProfessorSentiment>, ApiError> {
    let Query(query) = query.map_err(|rejection| {
        ApiError::new(
            "validation_error",
            format!("invalid query string: {}", rejection.body_text()),
        )
    })?;

    let professor = query
        .professor
        .filter(|p| !p.is_empty())
        .ok_or_else(|| ApiError::new("validation_error", "missing query parameter: professor"))?;

    match aggregate_professor(&state.reviews, state.analyzer.as_ref(), &professor) {
        Ok(result) => {
            tracing::info!(
                request_id = %req_id.0,
                professor = %professor,
                review_count = result.reviews.len(),
                "professor sentiment computed"
            );
            Ok(Json(result))
        }
        Err(SentimentError::ProfessorNotFound(_)) => {
            tracing::info!(request_id = %req_id.0, professor = %professor, "professor not found");
            Err(ApiError::new("not_found", "Professor not found"))
        }
        Err(e) => {
            tracing::error!(request_id = %req_id.0, error = %e, "sentiment aggregation failed");
            Err(ApiError::new("internal_error", "sentiment aggregation failed"))
        }
    }
}
