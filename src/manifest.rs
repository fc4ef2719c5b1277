use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::warn;

pub const MANIFEST_FILE_NAME: &str = "channel-manifest.toml";

/// Concrete artifact coordinate to be checked against a channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artifact {
    #[serde(rename = "groupId")]
    pub group_id: String,
    #[serde(rename = "artifactId")]
    pub artifact_id: String,
    pub version: String,
}

impl Artifact {
    pub fn new(group_id: impl Into<String>, artifact_id: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            group_id: group_id.into(),
            artifact_id: artifact_id.into(),
            version: version.into(),
        }
    }

    /// `groupId:artifactId:version`
    pub fn gav(&self) -> String {
        format!("{}:{}:{}", self.group_id, self.artifact_id, self.version)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ManifestFile {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(rename = "artifact", default)]
    pub artifacts: Vec<Artifact>,
}

pub struct ManifestParser;

impl ManifestParser {
    pub fn parse_manifest<P: AsRef<Path>>(path: P) -> Result<ManifestFile> {
        let path_ref = path.as_ref();

        if !path_ref.exists() {
            return Err(anyhow::anyhow!("Manifest file not found: {}", path_ref.display()));
        }

        let content = std::fs::read_to_string(path_ref)
            .with_context(|| format!("Failed to read manifest file: {}", path_ref.display()))?;

        Self::parse_str(&content)
            .with_context(|| format!("Failed to parse manifest file as TOML: {}", path_ref.display()))
    }

    pub fn parse_str(content: &str) -> Result<ManifestFile> {
        let manifest: ManifestFile = toml::from_str(content)?;
        if manifest.artifacts.is_empty() {
            warn!("manifest contains no artifacts");
        }
        Ok(manifest)
    }

    /// Artifacts with every coordinate field filled in.
    pub fn extract_artifacts(manifest: &ManifestFile) -> Vec<Artifact> {
        manifest
            .artifacts
            .iter()
            .filter(|artifact| {
                let blank = artifact.group_id.trim().is_empty()
                    || artifact.artifact_id.trim().is_empty()
                    || artifact.version.trim().is_empty();
                if blank {
                    warn!(artifact = %artifact.gav(), "skipping artifact with a blank coordinate");
                }
                !blank
            })
            .cloned()
            .collect()
    }

    /// Find the manifest in the current directory or one of its parents.
    pub fn find_manifest() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;

        loop {
            let candidate = current.join(MANIFEST_FILE_NAME);
            if candidate.is_file() {
                return Some(candidate);
            }

            if !current.pop() {
                break;
            }
        }

        None
    }
}
