//! Static professor reviews, loaded once at startup.

use std::path::Path;

use serde::Deserialize;

use crate::ReviewsError;

/// A single review of a professor.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Review {
    /// Identifier the review is grouped by. Matched by exact equality.
    pub professor: String,
    pub review: String,
}

/// Ordered, read-only set of reviews.
///
/// Mirrors the on-disk shape `{"reviews": [...]}`; unknown fields are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReviewCollection {
    #[serde(default)]
    reviews: Vec<Review>,
}

impl ReviewCollection {
    #[must_use]
    pub fn new(reviews: Vec<Review>) -> Self {
        Self { reviews }
    }

    /// Parse a collection from its JSON representation.
    ///
    /// # Errors
    ///
    /// Returns `serde_json::Error` if the input is not a valid reviews document.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Every review whose `professor` is exactly `professor`, in source order.
    ///
    /// No case folding or whitespace trimming is applied.
    #[must_use]
    pub fn for_professor(&self, professor: &str) -> Vec<&Review> {
        self.reviews
            .iter()
            .filter(|r| r.professor == professor)
            .collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.reviews.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.reviews.is_empty()
    }
}

/// Read and parse the reviews file at `path`.
///
/// # Errors
///
/// Returns [`ReviewsError::Io`] if the file cannot be read, or
/// [`ReviewsError::Parse`] if its contents are not a reviews document.
pub fn load_reviews(path: &Path) -> Result<ReviewCollection, ReviewsError> {
    let raw = std::fs::read_to_string(path).map_err(|source| ReviewsError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    ReviewCollection::from_json(&raw).map_err(|source| ReviewsError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
