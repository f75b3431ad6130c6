mod generate;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "shopfeed")]
#[command(about = "Generate a Google Merchant product feed from a Shopify catalog")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Fetch every product and write the XML feed (default)
    Generate(GenerateArgs),
}

#[derive(Debug, Default, Args)]
struct GenerateArgs {
    /// Write the feed here instead of `SHOPFEED_OUTPUT_PATH`
    #[arg(long, short)]
    output: Option<PathBuf>,

    /// Print the feed to stdout instead of writing a file
    #[arg(long, conflicts_with = "output")]
    stdout: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match shopfeed_core::load_app_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error generating feed: {e}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = init_tracing(&config.log_level) {
        eprintln!("Error generating feed: invalid log filter: {e}");
        return ExitCode::FAILURE;
    }
    tracing::debug!(?config, "loaded configuration");

    let args = match cli.command {
        Some(Commands::Generate(args)) => args,
        None => GenerateArgs::default(),
    };

    match generate::run_generate(&config, args.output.as_deref(), args.stdout).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %format!("{e:#}"), "feed generation failed");
            eprintln!("Error generating feed: {e:#}");
            ExitCode::FAILURE
        }
    }
}

/// `RUST_LOG` wins over the configured level when set.
fn init_tracing(log_level: &str) -> anyhow::Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(log_level))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}
