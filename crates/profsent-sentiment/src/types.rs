use serde::{Deserialize, Serialize};

/// VADER polarity scores for one piece of text.
///
/// `pos`, `neu`, and `neg` are proportions in `[0.0, 1.0]` rounded to three
/// decimals. `compound` is the normalized total in `[-1.0, 1.0]` rounded to
/// four decimals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SentimentScore {
    pub neg: f64,
    pub neu: f64,
    pub pos: f64,
    pub compound: f64,
}

/// Per-field mean of a group of [`SentimentScore`]s.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AggregatedSentiment {
    pub positive: f64,
    pub neutral: f64,
    pub negative: f64,
    pub compound: f64,
}

impl AggregatedSentiment {
    /// Unweighted arithmetic mean of each field. `None` for an empty slice.
    #[must_use]
    pub fn mean_of(scores: &[SentimentScore]) -> Option<Self> {
        if scores.is_empty() {
            return None;
        }

        #[allow(clippy::cast_precision_loss)]
        let n = scores.len() as f64;
        let mean = |field: fn(&SentimentScore) -> f64| scores.iter().map(field).sum::<f64>() / n;

        Some(Self {
            positive: mean(|s| s.pos),
            neutral: mean(|s| s.neu),
            negative: mean(|s| s.neg),
            compound: mean(|s| s.compound),
        })
    }
}

/// One matched review together with its score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredReview {
    pub professor: String,
    pub review: String,
    pub sentiment: SentimentScore,
}

/// Aggregate sentiment for one professor plus the reviews it was computed from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfessorSentiment {
    pub sentiment: AggregatedSentiment,
    pub reviews: Vec<ScoredReview>,
}
