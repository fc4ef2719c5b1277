use anyhow::Result;
use std::path::PathBuf;
use channel_streams::editor::add_stream_to_channel;
use channel_streams::stream::{StreamDocument, StreamSpec};

pub fn handle_add(
    channel: PathBuf,
    group_id: String,
    artifact_id: String,
    version: Option<String>,
    version_pattern: Option<String>,
    resolve_with_local_cache: bool,
    quiet: bool,
) -> Result<()> {
    let stream = StreamSpec::try_from(StreamDocument {
        group_id,
        artifact_id,
        version,
        version_pattern,
        resolve_with_local_cache,
    })?;

    add_stream_to_channel(&channel, &stream)?;

    if !quiet {
        println!("✅ Added stream {} to {}", stream, channel.display());
    }

    Ok(())
}
