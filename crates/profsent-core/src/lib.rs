//! Shared domain types and configuration for profsent.

mod app_config;
mod config;
mod error;
mod reviews;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env, DEFAULT_LEXICON_URL};
pub use error::{ConfigError, ReviewsError};
pub use reviews::{load_reviews, Review, ReviewCollection};
