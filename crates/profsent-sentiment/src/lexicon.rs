//! VADER lexicon loading.
//!
//! The lexicon file is tab-separated: `token<TAB>mean<TAB>std<TAB>[ratings]`.
//! Only the first two columns are used.

use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

use crate::error::SentimentError;

/// Token → mean valence.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    entries: HashMap<String, f64>,
}

impl Lexicon {
    /// Parse lexicon text. Blank lines are skipped.
    ///
    /// # Errors
    ///
    /// Returns [`SentimentError::LexiconParse`] for a line without a tab
    /// separated valence, or with a valence that is not a number.
    pub fn parse(raw: &str) -> Result<Self, SentimentError> {
        let mut entries = HashMap::new();

        for (idx, line) in raw.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let mut fields = line.split('\t');
            let token = fields.next().unwrap_or_default();
            let measure = fields.next().ok_or_else(|| SentimentError::LexiconParse {
                line: idx + 1,
                reason: format!("expected token and valence, got {line:?}"),
            })?;
            let valence = measure
                .trim()
                .parse::<f64>()
                .map_err(|e| SentimentError::LexiconParse {
                    line: idx + 1,
                    reason: format!("invalid valence {measure:?}: {e}"),
                })?;

            entries.insert(token.to_string(), valence);
        }

        Ok(Self { entries })
    }

    /// Read and parse a lexicon file.
    ///
    /// # Errors
    ///
    /// Returns [`SentimentError::LexiconIo`] if the file cannot be read, or
    /// any error from [`Lexicon::parse`].
    pub fn load(path: &Path) -> Result<Self, SentimentError> {
        let raw = std::fs::read_to_string(path).map_err(|source| SentimentError::LexiconIo {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&raw)
    }

    /// HTTP client for lexicon downloads, bounded by `timeout`.
    ///
    /// # Errors
    ///
    /// Returns [`SentimentError::Http`] if the client cannot be built.
    pub fn http_client(timeout: Duration) -> Result<reqwest::Client, SentimentError> {
        Ok(reqwest::Client::builder().timeout(timeout).build()?)
    }

    /// Download lexicon text from `url` and return it unparsed.
    ///
    /// # Errors
    ///
    /// Returns [`SentimentError::Http`] on network failures or non-2xx responses.
    pub async fn fetch_raw(client: &reqwest::Client, url: &str) -> Result<String, SentimentError> {
        let response = client.get(url).send().await?.error_for_status()?;
        Ok(response.text().await?)
    }

    /// Download and parse a lexicon.
    ///
    /// # Errors
    ///
    /// Propagates errors from [`Lexicon::fetch_raw`] and [`Lexicon::parse`].
    pub async fn fetch(client: &reqwest::Client, url: &str) -> Result<Self, SentimentError> {
        let raw = Self::fetch_raw(client, url).await?;
        Self::parse(&raw)
    }

    /// Load the lexicon from `path`, downloading it from `url` first if the
    /// file does not exist.
    ///
    /// A downloaded lexicon is written to `path` so later starts skip the
    /// network. Failing to write the cache is logged, not fatal.
    ///
    /// # Errors
    ///
    /// Returns [`SentimentError::LexiconMissing`] if the file is absent and
    /// `url` is `None`, or any load/fetch/parse error. A download that takes
    /// longer than `timeout` fails with [`SentimentError::Http`].
    pub async fn load_or_fetch(
        path: &Path,
        url: Option<&str>,
        timeout: Duration,
    ) -> Result<Self, SentimentError> {
        if path.exists() {
            let lexicon = Self::load(path)?;
            tracing::info!(path = %path.display(), entries = lexicon.len(), "loaded sentiment lexicon");
            return Ok(lexicon);
        }

        let Some(url) = url else {
            return Err(SentimentError::LexiconMissing(path.to_path_buf()));
        };

        tracing::info!(url, "sentiment lexicon not cached, downloading");
        let client = Self::http_client(timeout)?;
        let raw = Self::fetch_raw(&client, url).await?;
        let lexicon = Self::parse(&raw)?;

        if let Err(e) = Self::cache(path, &raw).await {
            tracing::warn!(path = %path.display(), error = %e, "failed to cache sentiment lexicon");
        }

        tracing::info!(entries = lexicon.len(), "downloaded sentiment lexicon");
        Ok(lexicon)
    }

    /// Write raw lexicon text to `path`, creating parent directories.
    ///
    /// # Errors
    ///
    /// Returns [`SentimentError::LexiconIo`] if a directory or the file
    /// cannot be written.
    pub async fn cache(path: &Path, raw: &str) -> Result<(), SentimentError> {
        let io_err = |source| SentimentError::LexiconIo {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await.map_err(io_err)?;
        }
        tokio::fs::write(path, raw).await.map_err(io_err)
    }

    /// Mean valence for an already-lowercased token.
    #[must_use]
    pub fn get(&self, token: &str) -> Option<f64> {
        self.entries.get(token).copied()
    }

    #[must_use]
    pub fn contains(&self, token: &str) -> bool {
        self.entries.contains_key(token)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TIMEOUT: Duration = Duration::from_secs(1);

    #[test]
    fn parse_reads_first_two_columns() {
        let lex = Lexicon::parse("good\t1.9\t0.9434\t[2, 1, 2]\nbad\t-2.5\t0.67082\t[-2, -3]\n")
            .expect("parse");
        assert_eq!(lex.len(), 2);
        assert_eq!(lex.get("good"), Some(1.9));
        assert_eq!(lex.get("bad"), Some(-2.5));
        assert!(lex.get("ok").is_none());
    }

    #[test]
    fn parse_skips_blank_lines() {
        let lex = Lexicon::parse("\n\ngreat\t3.1\n\n").expect("parse");
        assert_eq!(lex.len(), 1);
    }

    #[test]
    fn parse_rejects_missing_valence() {
        let err = Lexicon::parse("good\t1.9\nbroken\n").unwrap_err();
        assert!(
            matches!(err, SentimentError::LexiconParse { line: 2, .. }),
            "got {err:?}"
        );
    }

    #[test]
    fn parse_rejects_non_numeric_valence() {
        let err = Lexicon::parse("good\tvery\n").unwrap_err();
        assert!(
            matches!(err, SentimentError::LexiconParse { line: 1, .. }),
            "got {err:?}"
        );
    }

    #[tokio::test]
    async fn load_or_fetch_without_file_or_url_fails() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("missing.txt");
        let err = Lexicon::load_or_fetch(&path, None, TIMEOUT).await.unwrap_err();
        assert!(matches!(err, SentimentError::LexiconMissing(_)), "got {err:?}");
    }

    #[tokio::test]
    async fn load_or_fetch_prefers_existing_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("lexicon.txt");
        std::fs::write(&path, "good\t1.9\n").expect("write");
        // The URL is unreachable; it must not be used when the file exists.
        let lex = Lexicon::load_or_fetch(&path, Some("http://127.0.0.1:9/lexicon.txt"), TIMEOUT)
            .await
            .expect("load");
        assert_eq!(lex.get("good"), Some(1.9));
    }

    #[tokio::test]
    async fn cache_creates_parent_directories() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("data").join("nested").join("lexicon.txt");
        Lexicon::cache(&path, "good\t1.9\n").await.expect("cache");
        let lex = Lexicon::load(&path).expect("load cached file");
        assert_eq!(lex.get("good"), Some(1.9));
    }

    #[tokio::test]
    async fn cache_reports_unwritable_path() {
        let dir = tempfile::tempdir().expect("tempdir");
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "not a directory").expect("write");
        let err = Lexicon::cache(&blocker.join("lexicon.txt"), "good\t1.9\n")
            .await
            .unwrap_err();
        assert!(matches!(err, SentimentError::LexiconIo { .. }), "got {err:?}");
    }
}
