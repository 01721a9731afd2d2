//! Command handlers for the CLI.

use std::fmt::Write as _;
use std::time::Duration;

use profsent_core::AppConfig;
use profsent_sentiment::{
    aggregate_professor, Lexicon, PolarityScorer, ProfessorSentiment, SentimentAnalyzer,
    SentimentError, SentimentScore,
};

async fn load_analyzer(config: &AppConfig) -> anyhow::Result<SentimentAnalyzer> {
    let lexicon = Lexicon::load_or_fetch(
        &config.lexicon_path,
        config.lexicon_url.as_deref(),
        Duration::from_secs(config.lexicon_timeout_secs),
    )
    .await?;
    Ok(SentimentAnalyzer::new(lexicon))
}

pub(crate) fn format_score(score: &SentimentScore) -> String {
    format!(
        "pos={:.3} neu={:.3} neg={:.3} compound={:.4}",
        score.pos, score.neu, score.neg, score.compound
    )
}

pub(crate) fn format_summary(professor: &str, result: &ProfessorSentiment) -> String {
    let s = &result.sentiment;
    let mut out = format!(
        "{professor}: {} reviews\n  positive={:.3} neutral={:.3} negative={:.3} compound={:.4}\n",
        result.reviews.len(),
        s.positive,
        s.neutral,
        s.negative,
        s.compound
    );
    for review in &result.reviews {
        let _ = writeln!(out, "  [{}] {}", format_score(&review.sentiment), review.review);
    }
    out
}

/// Score a single text and print the four polarity fields.
///
/// # Errors
///
/// Returns an error if the lexicon cannot be loaded or fetched.
pub(crate) async fn run_score(config: &AppConfig, text: &str) -> anyhow::Result<()> {
    let analyzer = load_analyzer(config).await?;
    println!("{}", format_score(&analyzer.polarity_scores(text)));
    Ok(())
}

/// Aggregate one professor's reviews from the configured reviews file.
///
/// # Errors
///
/// Returns an error if the reviews or lexicon cannot be loaded, or the
/// professor has no reviews.
pub(crate) async fn run_professor(
    config: &AppConfig,
    professor: &str,
    json: bool,
) -> anyhow::Result<()> {
    let reviews = profsent_core::load_reviews(&config.reviews_path)?;
    let analyzer = load_analyzer(config).await?;

    let result = match aggregate_professor(&reviews, &analyzer, professor) {
        Ok(result) => result,
        Err(SentimentError::ProfessorNotFound(_)) => {
            anyhow::bail!(
                "professor '{professor}' not found in {}",
                config.reviews_path.display()
            );
        }
        Err(e) => return Err(e.into()),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print!("{}", format_summary(professor, &result));
    }
    Ok(())
}

/// Download the lexicon and write it to the configured cache path.
///
/// # Errors
///
/// Returns an error if fetching is disabled, the download fails, the payload
/// is not a valid lexicon, or the file cannot be written.
pub(crate) async fn run_fetch_lexicon(config: &AppConfig, force: bool) -> anyhow::Result<()> {
    let path = &config.lexicon_path;
    if path.exists() && !force {
        println!(
            "lexicon already cached at {}; pass --force to re-download",
            path.display()
        );
        return Ok(());
    }

    let Some(url) = config.lexicon_url.as_deref() else {
        anyhow::bail!("PROFSENT_LEXICON_URL is empty; lexicon fetching is disabled");
    };

    let client = Lexicon::http_client(Duration::from_secs(config.lexicon_timeout_secs))?;
    let raw = Lexicon::fetch_raw(&client, url).await?;
    let lexicon = Lexicon::parse(&raw)?;
    Lexicon::cache(path, &raw).await?;

    tracing::info!(url, path = %path.display(), "lexicon cached");
    println!("cached {} lexicon entries at {}", lexicon.len(), path.display());
    Ok(())
}
