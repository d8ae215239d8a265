//! Murmur - say something out loud
//!
//! `murmur [text...]` speaks the given words, or a short default phrase.
//! Every argument is text, including ones that look like flags.

use anyhow::Result;
use clap::Parser;
use murmur::config::Config;
use murmur::invoker::Invoker;
use murmur::tts;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about,
    long_about = None,
    disable_help_flag = true,
    disable_version_flag = true
)]
struct Args {
    /// Text to speak; words are joined with single spaces
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    text: Vec<String>,
}

fn init_logging() -> Result<()> {
    // Status lines own stdout, so logs go to stderr
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install logger: {}", e))
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    if let Err(e) = init_logging() {
        eprintln!("{}", e);
    }

    let config = Config::default();
    match config.to_json() {
        Ok(json) => debug!("Config: {}", json),
        Err(e) => debug!("Config not serializable: {}", e),
    }

    let mut invoker = Invoker::new(config, std::io::stdout());
    let mut rng = rand::thread_rng();
    let outcome = invoker
        .run(&args.text, &mut rng, |backends| async move {
            tts::init(&backends).await
        })
        .await;

    ExitCode::from(outcome.exit_code())
}
