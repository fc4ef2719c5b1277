use tracing::trace;

use super::spec::{StreamSpec, WILDCARD};

impl StreamSpec {
    /// Whether this stream covers the `groupId:artifactId` coordinate.
    pub fn matches(&self, group_id: &str, artifact_id: &str) -> bool {
        let group_ok = self.group_id() == WILDCARD || self.group_id() == group_id;
        let artifact_ok = self.artifact_id() == WILDCARD || self.artifact_id() == artifact_id;
        trace!(stream = %self.coordinate(), group_id, artifact_id, matched = group_ok && artifact_ok);
        group_ok && artifact_ok
    }

    /// `*:*` stream.
    pub fn is_wildcard(&self) -> bool {
        self.group_id() == WILDCARD
    }

    /// Lookup precedence: exact coordinate (2), `groupId:*` (1), `*:*` (0).
    pub fn specificity(&self) -> u8 {
        match (self.group_id() == WILDCARD, self.artifact_id() == WILDCARD) {
            (false, false) => 2,
            (false, true) => 1,
            _ => 0,
        }
    }

    /// Whether `version` satisfies this stream's version constraint.
    pub fn accepts(&self, version: &str) -> bool {
        self.version_comparator().matches(version)
    }
}
