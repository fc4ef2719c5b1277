use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use toml_edit::{ArrayOfTables, InlineTable, Item, Value};
use tracing::info;

use crate::channel::{Channel, DocumentFormat};
use crate::stream::{StreamDocument, StreamSpec};

/// Append `stream` to a TOML channel file, keeping the rest of the file
/// (comments, ordering, formatting) untouched.
pub fn add_stream_to_channel<P: AsRef<Path>>(path: P, stream: &StreamSpec) -> Result<()> {
    let channel_path = path.as_ref();

    if !channel_path.exists() {
        return Err(anyhow::anyhow!("Channel file not found: {}", channel_path.display()));
    }
    if DocumentFormat::from_path(channel_path) != DocumentFormat::Toml {
        return Err(anyhow::anyhow!(
            "Only TOML channel files can be edited in place: {}",
            channel_path.display()
        ));
    }

    let existing_content = fs::read_to_string(channel_path)
        .with_context(|| format!("Failed to read channel file: {}", channel_path.display()))?;

    let existing = Channel::from_str_with_format(&existing_content, DocumentFormat::Toml)
        .with_context(|| format!("Failed to load channel file: {}", channel_path.display()))?;
    if existing.streams.iter().any(|s| s.coordinate() == stream.coordinate()) {
        return Err(anyhow::anyhow!(
            "Channel {} already has a stream for {}",
            channel_path.display(),
            stream.coordinate()
        ));
    }

    let mut doc = existing_content.parse::<toml_edit::DocumentMut>()?;

    let entry = stream_to_inline_table(StreamDocument::from(stream.clone()));
    let streams = doc
        .entry("streams")
        .or_insert(Item::ArrayOfTables(ArrayOfTables::new()));
    // `streams = []` is what an empty channel serializes to
    if streams.as_array().is_some_and(|array| array.is_empty()) {
        *streams = Item::ArrayOfTables(ArrayOfTables::new());
    }
    match streams {
        Item::ArrayOfTables(tables) => tables.push(entry.into_table()),
        Item::Value(Value::Array(array)) if array.iter().all(Value::is_inline_table) => array.push(entry),
        _ => {
            return Err(anyhow::anyhow!(
                "'streams' in {} is neither an array of tables nor an array of inline tables",
                channel_path.display()
            ))
        }
    }

    fs::write(channel_path, doc.to_string())
        .with_context(|| format!("Failed to write channel file: {}", channel_path.display()))?;

    info!(stream = %stream, path = %channel_path.display(), "stream added");
    Ok(())
}

fn stream_to_inline_table(document: StreamDocument) -> InlineTable {
    let mut table = InlineTable::new();
    table.insert("groupId", Value::from(document.group_id));
    table.insert("artifactId", Value::from(document.artifact_id));
    if let Some(version) = document.version {
        table.insert("version", Value::from(version));
    }
    if let Some(pattern) = document.version_pattern {
        table.insert("version-pattern", Value::from(pattern));
    }
    if document.resolve_with_local_cache {
        table.insert("resolve-with-local-cache", Value::from(true));
    }
    table
}
