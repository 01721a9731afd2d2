//! TEI (Text Embeddings Inference) client for sentence embeddings.

use std::time::Duration;

use serde::Serialize;

use crate::error::SentimentError;

/// TEI HTTP client.
#[derive(Debug, Clone)]
pub struct TeiClient {
    client: reqwest::Client,
    url: String,
    dimensions: Option<usize>,
}

#[derive(Serialize)]
struct EmbedRequest<'a> {
    inputs: &'a str,
}

impl TeiClient {
    /// Create a client for the TEI server at `tei_url`.
    ///
    /// When `dimensions` is set, vectors of any other length are rejected.
    ///
    /// # Errors
    ///
    /// Returns [`SentimentError::Http`] if the HTTP client cannot be built.
    pub fn new(
        tei_url: &str,
        timeout: Duration,
        dimensions: Option<usize>,
    ) -> Result<Self, SentimentError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            url: format!("{}/embed", tei_url.trim_end_matches('/')),
            dimensions,
        })
    }

    #[must_use]
    pub fn dimensions(&self) -> Option<usize> {
        self.dimensions
    }

    /// Embed a single text.
    ///
    /// The text is sent as-is; TEI's handling of empty or oversized input is
    /// inherited.
    ///
    /// # Errors
    ///
    /// Returns [`SentimentError::Tei`] if the request fails, TEI responds with
    /// a non-2xx status, the response is empty or unparseable, or the vector
    /// length differs from the configured dimensions.
    pub async fn embed_one(&self, text: &str) -> Result<Vec<f32>, SentimentError> {
        let response = self
            .client
            .post(&self.url)
            .json(&EmbedRequest { inputs: text })
            .send()
            .await
            .map_err(|e| SentimentError::Tei(format!("TEI request failed: {e}")))?;

        if !response.status().is_success() {
            return Err(SentimentError::Tei(format!(
                "TEI returned status {}",
                response.status()
            )));
        }

        let embeddings: Vec<Vec<f32>> = response
            .json()
            .await
            .map_err(|e| SentimentError::Tei(format!("TEI response parse error: {e}")))?;

        let embedding = embeddings
            .into_iter()
            .next()
            .ok_or_else(|| SentimentError::Tei("TEI returned empty embedding".into()))?;

        if let Some(expected) = self.dimensions {
            if embedding.len() != expected {
                return Err(SentimentError::Tei(format!(
                    "TEI returned {} dimensions, expected {expected}",
                    embedding.len()
                )));
            }
        }

        Ok(embedding)
    }
}
