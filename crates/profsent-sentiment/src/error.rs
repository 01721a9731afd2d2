use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SentimentError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("lexicon I/O error at {path}: {source}")]
    LexiconIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("lexicon parse error on line {line}: {reason}")]
    LexiconParse { line: usize, reason: String },

    #[error("lexicon not found at {0} and fetching is disabled")]
    LexiconMissing(PathBuf),

    #[error("TEI embed error: {0}")]
    Tei(String),

    #[error("professor not found: {0}")]
    ProfessorNotFound(String),
}
