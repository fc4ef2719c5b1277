use anyhow::Result;
use std::fs;
use std::path::PathBuf;
use crate::cli::OutputFormat;
use channel_streams::channel::Channel;
use channel_streams::config::{load_config, Config};
use channel_streams::manifest::ManifestParser;
use channel_streams::output::format_alignment_table;

pub fn handle_check(
    channel: Option<PathBuf>,
    manifest: Option<PathBuf>,
    format: Option<OutputFormat>,
    output: Option<PathBuf>,
    verbose: bool,
    quiet: bool,
    exit_zero: bool,
) -> Result<()> {
    let config = load_config()?;

    // CLI arguments override config values
    let channel = Channel::from_path(channel_path(channel, &config)?)?;

    let manifest_path = manifest
        .or_else(|| config.manifest.clone())
        .or_else(ManifestParser::find_manifest)
        .ok_or_else(|| anyhow::anyhow!("No manifest given and no channel-manifest.toml found"))?;
    let manifest = ManifestParser::parse_manifest(&manifest_path)?;
    let artifacts = ManifestParser::extract_artifacts(&manifest);

    let summary = channel.check_alignment(&artifacts);

    let output_content = match OutputFormat::resolve(format, config.format.as_deref()) {
        OutputFormat::Json => serde_json::to_string_pretty(&summary)?,
        OutputFormat::Table => format_alignment_table(&summary, verbose),
    };

    match output {
        Some(path) => fs::write(path, output_content)?,
        None => {
            if !quiet {
                println!("{}", output_content);
            }
        }
    }

    if summary.misaligned > 0 {
        if !quiet {
            eprintln!("Misaligned artifacts found: {} of {} ({} without a stream)",
                     summary.misaligned, summary.total, summary.unmatched);
        }

        if !exit_zero && config.fail_on_misaligned.unwrap_or(true) {
            std::process::exit(1);
        }
    }

    Ok(())
}

/// Channel path from the command line, falling back to the configured one.
pub fn channel_path(channel: Option<PathBuf>, config: &Config) -> Result<PathBuf> {
    channel
        .or_else(|| config.channel.clone())
        .ok_or_else(|| anyhow::anyhow!("No channel file given and none configured in .channel-streams.toml"))
}
