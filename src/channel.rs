use std::collections::HashSet;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::stream::StreamSpec;

/// Serialization format of a channel document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Yaml,
    Json,
    Toml,
}

impl DocumentFormat {
    /// Pick the format from the file extension (any case), YAML when unknown.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Self {
        match path.as_ref().extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => DocumentFormat::Json,
            Some(ext) if ext.eq_ignore_ascii_case("toml") => DocumentFormat::Toml,
            _ => DocumentFormat::Yaml,
        }
    }
}

/// A named, ordered collection of streams.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Channel {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub streams: Vec<StreamSpec>,
}

impl Channel {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read channel file: {}", path.display()))?;

        let channel = Self::from_str_with_format(&content, DocumentFormat::from_path(path))
            .with_context(|| format!("Failed to load channel file: {}", path.display()))?;

        debug!(path = %path.display(), streams = channel.streams.len(), "channel loaded");
        Ok(channel)
    }

    pub fn from_str_with_format(content: &str, format: DocumentFormat) -> Result<Self> {
        let channel: Channel = match format {
            DocumentFormat::Yaml => serde_yaml::from_str(content).context("Failed to parse channel as YAML")?,
            DocumentFormat::Json => serde_json::from_str(content).context("Failed to parse channel as JSON")?,
            DocumentFormat::Toml => toml::from_str(content).context("Failed to parse channel as TOML")?,
        };
        channel.check_duplicates()?;
        Ok(channel)
    }

    pub fn to_string_with_format(&self, format: DocumentFormat) -> Result<String> {
        let content = match format {
            DocumentFormat::Yaml => serde_yaml::to_string(self).context("Failed to serialize channel as YAML")?,
            DocumentFormat::Json => serde_json::to_string_pretty(self).context("Failed to serialize channel as JSON")?,
            DocumentFormat::Toml => toml::to_string_pretty(self).context("Failed to serialize channel as TOML")?,
        };
        Ok(content)
    }

    fn check_duplicates(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for stream in &self.streams {
            if !seen.insert(stream.coordinate()) {
                anyhow::bail!("Duplicate stream for {} in channel", stream.coordinate());
            }
        }
        Ok(())
    }

    /// Stream governing `groupId:artifactId`.
    ///
    /// An exact stream wins over a `groupId:*` stream, which wins over `*:*`.
    pub fn find_stream(&self, group_id: &str, artifact_id: &str) -> Option<&StreamSpec> {
        self.streams
            .iter()
            .filter(|stream| stream.matches(group_id, artifact_id))
            .max_by_key(|stream| stream.specificity())
    }

    /// Number of streams per groupId, in declaration order.
    pub fn streams_by_group(&self) -> IndexMap<String, usize> {
        let mut groups = IndexMap::new();
        for stream in &self.streams {
            *groups.entry(stream.group_id().to_string()).or_insert(0) += 1;
        }
        groups
    }
}
