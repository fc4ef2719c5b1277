use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cli;
mod commands;

use cli::{Cli, Commands};
use commands::{handle_add, handle_check, handle_config, handle_resolve, handle_show};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Check {
            channel,
            manifest,
            format,
            output,
            exit_zero,
        } => handle_check(channel, manifest, format, output, cli.verbose, cli.quiet, exit_zero),
        Commands::Show { channel, format } => handle_show(channel, format, cli.quiet),
        Commands::Resolve {
            channel,
            coordinate,
            candidates,
        } => handle_resolve(channel, coordinate, candidates, cli.quiet),
        Commands::Add {
            channel,
            group_id,
            artifact_id,
            version,
            version_pattern,
            resolve_with_local_cache,
        } => handle_add(
            channel,
            group_id,
            artifact_id,
            version,
            version_pattern,
            resolve_with_local_cache,
            cli.quiet,
        ),
        Commands::Config { show, validate } => handle_config(show, validate, cli.quiet),
    }
}

/// Logs go to stderr; CHANNEL_STREAMS_LOG_FORMAT=json switches to JSON lines.
fn init_tracing(verbose: bool) {
    let log_format = std::env::var("CHANNEL_STREAMS_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

    let filter = if verbose {
        tracing_subscriber::EnvFilter::new("channel_streams=debug")
    } else {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| "channel_streams=warn".into())
    };

    match log_format.as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
                .init();
        }
    }
}
