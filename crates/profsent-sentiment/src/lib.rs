//! Sentiment scoring and text embeddings for profsent.
//!
//! Scores review text with a VADER lexicon analyzer, aggregates per-professor
//! scores, and fetches sentence embeddings from a TEI server.

pub mod aggregate;
pub mod analyzer;
pub mod embeddings;
pub mod error;
pub mod lexicon;
pub mod types;

mod constants;
mod tokens;

pub use aggregate::aggregate_professor;
pub use analyzer::{PolarityScorer, SentimentAnalyzer};
pub use embeddings::TeiClient;
pub use error::SentimentError;
pub use lexicon::Lexicon;
pub use types::{AggregatedSentiment, ProfessorSentiment, ScoredReview, SentimentScore};
