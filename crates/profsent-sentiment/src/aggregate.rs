//! Per-professor sentiment aggregation.

use profsent_core::ReviewCollection;

use crate::analyzer::PolarityScorer;
use crate::error::SentimentError;
use crate::types::{AggregatedSentiment, ProfessorSentiment, ScoredReview, SentimentScore};

/// Score every review of `professor` and average the results.
///
/// 1. Select reviews whose `professor` equals the argument exactly.
/// 2. Score each review's text with `scorer`, in source order.
/// 3. Average `pos`/`neu`/`neg`/`compound` across the scored reviews.
///
/// Nothing is scored when no review matches.
///
/// # Errors
///
/// Returns [`SentimentError::ProfessorNotFound`] if no review matches.
pub fn aggregate_professor<S: PolarityScorer + ?Sized>(
    reviews: &ReviewCollection,
    scorer: &S,
    professor: &str,
) -> Result<ProfessorSentiment, SentimentError> {
    let matched = reviews.for_professor(professor);
    if matched.is_empty() {
        tracing::debug!(professor, "no reviews matched");
        return Err(SentimentError::ProfessorNotFound(professor.to_string()));
    }

    let scored: Vec<ScoredReview> = matched
        .into_iter()
        .map(|r| ScoredReview {
            professor: r.professor.clone(),
            review: r.review.clone(),
            sentiment: scorer.polarity_scores(&r.review),
        })
        .collect();

    let scores: Vec<SentimentScore> = scored.iter().map(|r| r.sentiment).collect();
    let sentiment = AggregatedSentiment::mean_of(&scores)
        .ok_or_else(|| SentimentError::ProfessorNotFound(professor.to_string()))?;

    tracing::debug!(
        professor,
        review_count = scored.len(),
        compound = sentiment.compound,
        "aggregated professor sentiment"
    );

    Ok(ProfessorSentiment {
        sentiment,
        reviews: scored,
    })
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::collections::HashMap;

    use profsent_core::Review;

    use super::*;
    use crate::{Lexicon, SentimentAnalyzer};

    /// Returns canned scores per text and counts calls.
    struct FixedScorer {
        scores: HashMap<&'static str, SentimentScore>,
        calls: Cell<usize>,
    }

    impl PolarityScorer for FixedScorer {
        fn polarity_scores(&self, text: &str) -> SentimentScore {
            self.calls.set(self.calls.get() + 1);
            self.scores.get(text).copied().unwrap_or_default()
        }
    }

    fn review(professor: &str, text: &str) -> Review {
        Review {
            professor: professor.to_string(),
            review: text.to_string(),
        }
    }

    fn sample() -> ReviewCollection {
        ReviewCollection::new(vec![
            review("Smith", "Great"),
            review("Jones", "OK"),
            review("Smith", "Bad"),
        ])
    }

    fn fixed_scorer() -> FixedScorer {
        let mut scores = HashMap::new();
        scores.insert(
            "Great",
            SentimentScore {
                neg: 0.0,
                neu: 0.2,
                pos: 0.8,
                compound: 0.6,
            },
        );
        scores.insert(
            "Bad",
            SentimentScore {
                neg: 0.6,
                neu: 0.4,
                pos: 0.0,
                compound: -0.4,
            },
        );
        FixedScorer {
            scores,
            calls: Cell::new(0),
        }
    }

    #[test]
    fn averages_only_matching_reviews() {
        let scorer = fixed_scorer();
        let result = aggregate_professor(&sample(), &scorer, "Smith").expect("found");

        assert_eq!(result.reviews.len(), 2);
        assert_eq!(scorer.calls.get(), 2);
        assert!((result.sentiment.positive - 0.4).abs() < 1e-12);
        assert!((result.sentiment.neutral - 0.3).abs() < 1e-12);
        assert!((result.sentiment.negative - 0.3).abs() < 1e-12);
        assert!((result.sentiment.compound - 0.1).abs() < 1e-12);
    }

    #[test]
    fn preserves_source_order() {
        let scorer = fixed_scorer();
        let result = aggregate_professor(&sample(), &scorer, "Smith").expect("found");
        let texts: Vec<&str> = result.reviews.iter().map(|r| r.review.as_str()).collect();
        assert_eq!(texts, vec!["Great", "Bad"]);
        assert!(result.reviews.iter().all(|r| r.professor == "Smith"));
    }

    #[test]
    fn unknown_professor_is_not_found_and_scores_nothing() {
        let scorer = fixed_scorer();
        let err = aggregate_professor(&sample(), &scorer, "Lee").unwrap_err();
        assert!(
            matches!(err, SentimentError::ProfessorNotFound(ref p) if p == "Lee"),
            "got {err:?}"
        );
        assert_eq!(scorer.calls.get(), 0);
    }

    #[test]
    fn match_is_case_sensitive() {
        let scorer = fixed_scorer();
        assert!(aggregate_professor(&sample(), &scorer, "smith").is_err());
    }

    #[test]
    fn works_with_vader_analyzer() {
        let analyzer =
            SentimentAnalyzer::new(Lexicon::parse("great\t3.1\nbad\t-2.5\n").expect("lexicon"));
        let result = aggregate_professor(&sample(), &analyzer, "Smith").expect("found");

        assert_eq!(result.reviews[0].sentiment.compound, 0.6249);
        assert_eq!(result.reviews[1].sentiment.compound, -0.5423);
        assert!((result.sentiment.compound - (0.6249 - 0.5423) / 2.0).abs() < 1e-12);
        assert!((result.sentiment.positive - 0.5).abs() < 1e-12);
        assert!((result.sentiment.negative - 0.5).abs() < 1e-12);
    }
}
