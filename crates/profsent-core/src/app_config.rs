use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub bind_addr: SocketAddr,
    pub log_level: String,
    pub reviews_path: PathBuf,
    pub lexicon_path: PathBuf,
    /// Where to download the lexicon from when `lexicon_path` does not exist.
    /// `None` disables fetching.
    pub lexicon_url: Option<String>,
    /// Upper bound on a lexicon download, in seconds.
    pub lexicon_timeout_secs: u64,
    pub tei_url: String,
    /// Expected embedding length. `None` skips the check.
    pub embed_dimensions: Option<usize>,
    pub tei_timeout_secs: u64,
}
