mod commands;


use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "profsent-cli")]
#[command(about = "Score professor reviews from the command line")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Print VADER polarity scores for a piece of text
    Score {
        /// Text to score
        text: String,
    },
    /// Aggregate sentiment across one professor's reviews
    Professor {
        /// Professor identifier, matched exactly
        name: String,

        /// Print the full JSON response instead of a summary
        #[arg(long)]
        json: bool,
    },
    /// Download the sentiment lexicon into the configured cache path
    FetchLexicon {
        /// Re-download even if the cache file already exists
        #[arg(long)]
        force: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = profsent_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Score { text } => commands::run_score(&config, &text).await,
        Commands::Professor { name, json } => commands::run_professor(&config, &name, json).await,
        Commands::FetchLexicon { force } => commands::run_fetch_lexicon(&config, force).await,
    }
}
