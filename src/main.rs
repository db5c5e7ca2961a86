//! Main entry point for the translat CLI

#![forbid(unsafe_code)]

use clap::Parser;
use dotenvy::dotenv;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use translat::cli::commands::{self, Commands};
use translat::TranslatConfig;

/// Translat - normalize i18n calls and forward them to a translation engine
#[derive(Parser, Debug)]
#[command(name = "translat", version, about, long_about = None)]
struct Args {
    /// Configuration file (JSON or YAML)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Return a visible marker for untranslatable input
    #[arg(long)]
    debug: bool,

    /// Category used when a call omits one
    #[arg(long)]
    default_category: Option<String>,

    /// Enable verbose logging, including diagnostic traces
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenv().ok();

    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose { "trace" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("{}={}", env!("CARGO_PKG_NAME"), log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Override config with CLI args if provided
    let mut config = TranslatConfig::load(args.config.as_deref())?;
    if args.debug {
        config.debug = true;
    }
    if let Some(category) = args.default_category {
        config.default_category = Some(category);
    }
    config.validate()?;

    // Execute command
    match args.command {
        Some(Commands::Translate {
            message,
            category,
            language,
            params,
            route,
        }) => {
            let input = commands::build_input(message, category, language, params);
            commands::handle_translate(&config, input, route)?;
        }
        Some(Commands::Json {
            input,
            language,
            route,
        }) => {
            commands::handle_json(&config, &input, language, route)?;
        }
        Some(Commands::Server { host, port }) => {
            commands::handle_server(config, host, port).await?;
        }
        Some(Commands::ShowConfig) => {
            commands::handle_show_config(&config)?;
        }
        None => {
            println!("Please specify a command. Use --help for more information.");
        }
    }

    Ok(())
}
