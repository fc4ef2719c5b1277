use std::fmt;

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{StreamError, StreamResult};
use crate::version::VersionComparator;

/// Literal value standing for "any" in a coordinate field.
pub const WILDCARD: &str = "*";

/// One rule of a channel: which artifacts it covers and which versions of
/// them are acceptable.
///
/// A `StreamSpec` can only be obtained through [`StreamSpec::new`] (or
/// deserialization, which goes through the same checks), so every value in
/// circulation satisfies:
///
/// - a `*` groupId is only paired with a `*` artifactId;
/// - exactly one of `version` / `version_pattern` is set;
/// - the comparator is derived from whichever of the two is set.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "StreamDocument", into = "StreamDocument")]
pub struct StreamSpec {
    group_id: String,
    artifact_id: String,
    version: Option<String>,
    version_pattern: Option<Regex>,
    resolve_with_local_cache: bool,
    version_comparator: VersionComparator,
}

impl StreamSpec {
    pub fn new(
        group_id: impl Into<String>,
        artifact_id: impl Into<String>,
        version: Option<String>,
        version_pattern: Option<Regex>,
        resolve_with_local_cache: bool,
    ) -> StreamResult<Self> {
        let group_id = group_id.into();
        let artifact_id = artifact_id.into();

        if group_id == WILDCARD && artifact_id != WILDCARD {
            return Err(StreamError::invalid(format!(
                "stream {}:{} uses a * groupId with a concrete artifactId; both must be *",
                group_id, artifact_id
            )));
        }

        let version_comparator = match (&version, &version_pattern) {
            (Some(version), Some(pattern)) => {
                return Err(StreamError::invalid(format!(
                    "stream {}:{} sets both version '{}' and version-pattern '{}'; only one may be set",
                    group_id,
                    artifact_id,
                    version,
                    pattern.as_str()
                )));
            }
            (None, None) => {
                return Err(StreamError::invalid(format!(
                    "stream {}:{} sets neither version nor version-pattern; one of them must be set",
                    group_id, artifact_id
                )));
            }
            (Some(version), None) => {
                let comparator = VersionComparator::fixed(version);
                if comparator.versions().is_some_and(<[String]>::is_empty) {
                    return Err(StreamError::invalid(format!(
                        "stream {}:{} has a version field without any version in it: '{}'",
                        group_id, artifact_id, version
                    )));
                }
                comparator
            }
            (None, Some(pattern)) => VersionComparator::pattern(pattern.clone()),
        };

        debug!(
            group_id = %group_id,
            artifact_id = %artifact_id,
            comparator = %version_comparator,
            "stream created"
        );

        Ok(Self {
            group_id,
            artifact_id,
            version,
            version_pattern,
            resolve_with_local_cache,
            version_comparator,
        })
    }

    pub fn group_id(&self) -> &str {
        &self.group_id
    }

    pub fn artifact_id(&self) -> &str {
        &self.artifact_id
    }

    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    pub fn version_pattern(&self) -> Option<&Regex> {
        self.version_pattern.as_ref()
    }

    /// Whether a resolver should consult the local Maven cache before
    /// looking up remote repositories for this stream.
    pub fn resolve_with_local_cache(&self) -> bool {
        self.resolve_with_local_cache
    }

    pub fn version_comparator(&self) -> &VersionComparator {
        &self.version_comparator
    }

    /// Copy of this stream with a different local-cache flag.
    pub fn with_resolve_with_local_cache(mut self, resolve_with_local_cache: bool) -> Self {
        self.resolve_with_local_cache = resolve_with_local_cache;
        self
    }

    /// `groupId:artifactId` of this stream.
    pub fn coordinate(&self) -> String {
        format!("{}:{}", self.group_id, self.artifact_id)
    }
}

impl PartialEq for StreamSpec {
    fn eq(&self, other: &Self) -> bool {
        self.group_id == other.group_id
            && self.artifact_id == other.artifact_id
            && self.version == other.version
            && self.version_pattern.as_ref().map(Regex::as_str)
                == other.version_pattern.as_ref().map(Regex::as_str)
            && self.resolve_with_local_cache == other.resolve_with_local_cache
    }
}

impl Eq for StreamSpec {}

impl fmt::Display for StreamSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.group_id, self.artifact_id, self.version_comparator)
    }
}

/// Stream as it appears in a channel document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StreamDocument {
    #[serde(rename = "groupId")]
    pub group_id: String,
    #[serde(rename = "artifactId")]
    pub artifact_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(rename = "version-pattern", default, skip_serializing_if = "Option::is_none")]
    pub version_pattern: Option<String>,
    #[serde(rename = "resolve-with-local-cache", default, skip_serializing_if = "is_false")]
    pub resolve_with_local_cache: bool,
}

fn is_false(value: &bool) -> bool {
    !*value
}

impl TryFrom<StreamDocument> for StreamSpec {
    type Error = StreamError;

    fn try_from(document: StreamDocument) -> StreamResult<Self> {
        let version_pattern = document
            .version_pattern
            .map(|pattern| {
                Regex::new(&pattern).map_err(|source| StreamError::InvalidVersionPattern { pattern, source })
            })
            .transpose()?;

        StreamSpec::new(
            document.group_id,
            document.artifact_id,
            document.version,
            version_pattern,
            document.resolve_with_local_cache,
        )
    }
}

impl From<StreamSpec> for StreamDocument {
    fn from(stream: StreamSpec) -> Self {
        StreamDocument {
            group_id: stream.group_id,
            artifact_id: stream.artifact_id,
            version: stream.version,
            version_pattern: stream.version_pattern.map(|p| p.as_str().to_string()),
            resolve_with_local_cache: stream.resolve_with_local_cache,
        }
    }
}
