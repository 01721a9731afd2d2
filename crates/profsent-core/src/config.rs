use std::net::SocketAddr;
use std::path::PathBuf;

use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

/// Upstream copy of the VADER lexicon.
pub const DEFAULT_LEXICON_URL: &str =
    "https://raw.githubusercontent.com/cjhutto/vaderSentiment/master/vaderSentiment/vader_lexicon.txt";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the process environment so tests can feed a `HashMap`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let env = parse_environment(&or_default("PROFSENT_ENV", "development"))?;

    let bind_addr = or_default("PROFSENT_BIND_ADDR", "0.0.0.0:5001")
        .parse::<SocketAddr>()
        .map_err(|e| invalid("PROFSENT_BIND_ADDR", e.to_string()))?;

    let log_level = or_default("PROFSENT_LOG_LEVEL", "info");
    let reviews_path = PathBuf::from(or_default("PROFSENT_REVIEWS_PATH", "./reviews.json"));
    let lexicon_path = PathBuf::from(or_default(
        "PROFSENT_LEXICON_PATH",
        "./data/vader_lexicon.txt",
    ));

    // An explicitly empty URL turns fetching off.
    let lexicon_url = match lookup("PROFSENT_LEXICON_URL") {
        Ok(url) if url.trim().is_empty() => None,
        Ok(url) => Some(url),
        Err(_) => Some(DEFAULT_LEXICON_URL.to_string()),
    };

    let lexicon_timeout_secs = or_default("PROFSENT_LEXICON_TIMEOUT_SECS", "30")
        .parse::<u64>()
        .map_err(|e| invalid("PROFSENT_LEXICON_TIMEOUT_SECS", e.to_string()))?;

    let tei_url = or_default("PROFSENT_TEI_URL", "http://localhost:8080")
        .trim_end_matches('/')
        .to_string();
    if !tei_url.starts_with("http://") && !tei_url.starts_with("https://") {
        return Err(invalid(
            "PROFSENT_TEI_URL",
            format!("expected an http(s) URL, got {tei_url:?}"),
        ));
    }

    let embed_dimensions = or_default("PROFSENT_EMBED_DIMENSIONS", "384")
        .parse::<usize>()
        .map_err(|e| invalid("PROFSENT_EMBED_DIMENSIONS", e.to_string()))?;
    let embed_dimensions = (embed_dimensions > 0).then_some(embed_dimensions);

    let tei_timeout_secs = or_default("PROFSENT_TEI_TIMEOUT_SECS", "30")
        .parse::<u64>()
        .map_err(|e| invalid("PROFSENT_TEI_TIMEOUT_SECS", e.to_string()))?;

    Ok(AppConfig {
        env,
        bind_addr,
        log_level,
        reviews_path,
        lexicon_path,
        lexicon_url,
        lexicon_timeout_secs,
        tei_url,
        embed_dimensions,
        tei_timeout_secs,
    })
}

fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "PROFSENT_ENV".to_string(),
            reason: format!("unknown environment {other:?}"),
        }),
    }
}
