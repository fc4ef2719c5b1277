use anyhow::Result;
use std::path::PathBuf;
use crate::cli::OutputFormat;
use crate::commands::check::channel_path;
use channel_streams::channel::Channel;
use channel_streams::config::load_config;
use channel_streams::output::format_channel_table;

pub fn handle_show(channel: Option<PathBuf>, format: Option<OutputFormat>, quiet: bool) -> Result<()> {
    let config = load_config()?;
    let channel = Channel::from_path(channel_path(channel, &config)?)?;

    let output_content = match OutputFormat::resolve(format, config.format.as_deref()) {
        OutputFormat::Json => serde_json::to_string_pretty(&channel)?,
        OutputFormat::Table => format_channel_table(&channel),
    };

    if !quiet {
        println!("{}", output_content);
    }

    Ok(())
}
