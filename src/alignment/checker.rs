use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::channel::Channel;
use crate::manifest::Artifact;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FindingLevel {
    Aligned,
    Misaligned,
    Unmatched,
}

/// Outcome of checking one artifact against a channel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Finding {
    pub group_id: String,
    pub artifact_id: String,
    pub version: String,
    pub level: FindingLevel,
    /// The stream that governs the artifact, as `groupId:artifactId:constraint`.
    pub stream: Option<String>,
    /// Version the stream prefers, when it lists fixed versions.
    pub preferred_version: Option<String>,
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AlignmentSummary {
    pub total: usize,
    pub aligned: usize,
    pub misaligned: usize, // errors
    pub unmatched: usize,  // warnings
    pub findings: Vec<Finding>,
}

impl AlignmentSummary {
    pub fn issues(&self) -> impl Iterator<Item = &Finding> {
        self.findings.iter().filter(|f| f.level != FindingLevel::Aligned)
    }
}

impl Channel {
    pub fn check_artifact(&self, artifact: &Artifact) -> Finding {
        let Some(stream) = self.find_stream(&artifact.group_id, &artifact.artifact_id) else {
            return Finding {
                group_id: artifact.group_id.clone(),
                artifact_id: artifact.artifact_id.clone(),
                version: artifact.version.clone(),
                level: FindingLevel::Unmatched,
                stream: None,
                preferred_version: None,
                message: "No stream covers this artifact".to_string(),
            };
        };

        let (level, message) = if stream.accepts(&artifact.version) {
            (FindingLevel::Aligned, format!("Version accepted by stream {}", stream.coordinate()))
        } else {
            (
                FindingLevel::Misaligned,
                format!("Version '{}' is not accepted by stream {}", artifact.version, stream),
            )
        };

        Finding {
            group_id: artifact.group_id.clone(),
            artifact_id: artifact.artifact_id.clone(),
            version: artifact.version.clone(),
            level,
            stream: Some(stream.to_string()),
            preferred_version: stream.version_comparator().preferred().map(str::to_string),
            message,
        }
    }

    /// Check every artifact and summarize the outcome.
    pub fn check_alignment(&self, artifacts: &[Artifact]) -> AlignmentSummary {
        let mut findings: Vec<Finding> = artifacts
            .par_iter()
            .map(|artifact| self.check_artifact(artifact))
            .collect();

        findings.sort_by(|a, b| {
            (&a.group_id, &a.artifact_id, &a.version).cmp(&(&b.group_id, &b.artifact_id, &b.version))
        });

        let count = |level: FindingLevel| findings.iter().filter(|f| f.level == level).count();
        let aligned = count(FindingLevel::Aligned);
        let misaligned = count(FindingLevel::Misaligned);
        let unmatched = count(FindingLevel::Unmatched);

        debug!(total = findings.len(), aligned, misaligned, unmatched, "alignment checked");

        AlignmentSummary {
            total: findings.len(),
            aligned,
            misaligned,
            unmatched,
            findings,
        }
    }

    /// Latest of `candidates` accepted by the stream governing the coordinate.
    pub fn resolve_latest<'a>(&self, group_id: &str, artifact_id: &str, candidates: &[&'a str]) -> Option<&'a str> {
        self.find_stream(group_id, artifact_id)?
            .version_comparator()
            .latest(candidates.iter().copied())
    }
}
