mod embed;
mod sentiment;

use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::State,
    http::{header, HeaderName, Method, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use profsent_core::{AppConfig, ReviewCollection};
use profsent_sentiment::{Lexicon, SentimentAnalyzer, TeiClient};
use serde::Serialize;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::middleware::request_id;

/// Everything handlers need, built once before serving and never mutated.
#[derive(Clone)]
pub struct AppState {
    pub reviews: Arc<ReviewCollection>,
    pub analyzer: Arc<SentimentAnalyzer>,
    pub tei: TeiClient,
}

impl AppState {
    /// Load reviews, load or download the lexicon, and build the TEI client.
    ///
    /// # Errors
    ///
    /// Fails if the reviews file or lexicon cannot be loaded, or the HTTP
    /// client cannot be built.
    pub async fn initialize(config: &AppConfig) -> anyhow::Result<Self> {
        let reviews = profsent_core::load_reviews(&config.reviews_path)?;
        tracing::info!(
            path = %config.reviews_path.display(),
            count = reviews.len(),
            "loaded reviews"
        );

        let lexicon = Lexicon::load_or_fetch(
            &config.lexicon_path,
            config.lexicon_url.as_deref(),
            Duration::from_secs(config.lexicon_timeout_secs),
        )
        .await?;

        let tei = TeiClient::new(
            &config.tei_url,
            Duration::from_secs(config.tei_timeout_secs),
            config.embed_dimensions,
        )?;

        Ok(Self {
            reviews: Arc::new(reviews),
            analyzer: Arc::new(SentimentAnalyzer::new(lexicon)),
            tei,
        })
    }
}

/// Error body returned to clients: `{"error": "<message>"}`.
#[derive(Debug, Serialize)]
pub struct ApiError {
    #[serde(skip)]
    code: &'static str,
    pub error: String,
}

impl ApiError {
    pub fn new(code: &'static str, message: impl Into<String>) -> Self {
        Self {
            code,
            error: message.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = match self.code {
            "not_found" => StatusCode::NOT_FOUND,
            "validation_error" => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(self)).into_response()
    }
}

#[derive(Debug, Serialize, PartialEq, Eq)]
struct HealthData {
    status: &'static str,
    reviews: usize,
    lexicon_entries: usize,
}

fn build_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE, HeaderName::from_static("x-request-id")])
}

pub fn build_app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/embed", post(embed::embed_text))
        .route(
            "/get_professor_sentiment",
            get(sentiment::professor_sentiment).post(sentiment::professor_sentiment),
        )
        .layer(
            ServiceBuilder::new()
                .layer(axum::middleware::from_fn(request_id))
                .layer(TraceLayer::new_for_http())
                .layer(build_cors()),
        )
        .with_state(state)
}

async fn health(State(state): State<AppState>) -> impl IntoResponse {
    Json(HealthData {
        status: "ok",
        reviews: state.reviews.len(),
        lexicon_entries: state.analyzer.lexicon().len(),
    })
}
