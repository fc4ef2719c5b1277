use std::cmp::Ordering;
use std::fmt;

use regex::Regex;
use regex_automata::meta;
use regex_syntax::hir::{Hir, Look};
use tracing::{trace, warn};

use super::ordering::compare_versions;

/// Strategy deciding whether a version satisfies a stream.
#[derive(Debug, Clone)]
pub enum VersionComparator {
    /// Explicit list of acceptable versions, in declaration order.
    Fixed(Vec<String>),
    /// Any version that fully matches the expression.
    Pattern {
        pattern: Regex,
        anchored: Option<meta::Regex>,
    },
}

impl VersionComparator {
    /// Build a fixed-set comparator from a `version` field.
    ///
    /// Tokens are separated by any run of whitespace and/or commas; empty
    /// tokens are dropped.
    pub fn fixed(version: &str) -> Self {
        let versions = version
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|token| !token.is_empty())
            .map(str::to_string)
            .collect();
        VersionComparator::Fixed(versions)
    }

    /// Build a pattern comparator that accepts only whole-string matches.
    ///
    /// The anchors are added to the parsed expression rather than its text, so
    /// flags and `(?x)` comments in the source cannot swallow them.
    pub fn pattern(pattern: Regex) -> Self {
        let anchored = match full_match(pattern.as_str()) {
            Ok(anchored) => Some(anchored),
            Err(error) => {
                warn!(pattern = pattern.as_str(), %error, "falling back to span check for version-pattern");
                None
            }
        };
        VersionComparator::Pattern { pattern, anchored }
    }

    /// The ordered version tokens of a fixed-set comparator.
    pub fn versions(&self) -> Option<&[String]> {
        match self {
            VersionComparator::Fixed(versions) => Some(versions),
            VersionComparator::Pattern { .. } => None,
        }
    }

    /// The expression wrapped by a pattern comparator, exactly as supplied.
    pub fn version_pattern(&self) -> Option<&Regex> {
        match self {
            VersionComparator::Fixed(_) => None,
            VersionComparator::Pattern { pattern, .. } => Some(pattern),
        }
    }

    pub fn matches(&self, version: &str) -> bool {
        let accepted = match self {
            VersionComparator::Fixed(versions) => versions.iter().any(|v| v == version),
            VersionComparator::Pattern {
                anchored: Some(anchored),
                ..
            } => anchored.is_match(version),
            VersionComparator::Pattern { pattern, anchored: None } => pattern
                .find(version)
                .is_some_and(|m| m.start() == 0 && m.end() == version.len()),
        };
        trace!(version, accepted, comparator = %self, "version check");
        accepted
    }

    /// Highest accepted version among `candidates`.
    pub fn latest<'a, I>(&self, candidates: I) -> Option<&'a str>
    where
        I: IntoIterator<Item = &'a str>,
    {
        candidates
            .into_iter()
            .filter(|candidate| self.matches(candidate))
            .max_by(|a, b| highest(a, b))
    }

    /// The version a fixed-set stream prefers without looking at candidates.
    pub fn preferred(&self) -> Option<&str> {
        self.versions()?
            .iter()
            .map(String::as_str)
            .max_by(|a, b| highest(a, b))
    }
}

/// Version order, with equal versions (`1.0` and `1.Final`) settled by their text.
fn highest(a: &str, b: &str) -> Ordering {
    compare_versions(a, b).then_with(|| a.cmp(b))
}

fn full_match(expr: &str) -> Result<meta::Regex, Box<dyn std::error::Error + Send + Sync>> {
    let hir = regex_syntax::Parser::new().parse(expr)?;
    let hir = Hir::concat(vec![Hir::look(Look::Start), hir, Hir::look(Look::End)]);
    Ok(meta::Regex::builder().build_from_hir(&hir)?)
}

impl PartialEq for VersionComparator {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (VersionComparator::Fixed(a), VersionComparator::Fixed(b)) => a == b,
            (VersionComparator::Pattern { pattern: a, .. }, VersionComparator::Pattern { pattern: b, .. }) => {
                a.as_str() == b.as_str()
            }
            _ => false,
        }
    }
}

impl Eq for VersionComparator {}

impl fmt::Display for VersionComparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VersionComparator::Fixed(versions) => write!(f, "{}", versions.join(", ")),
            VersionComparator::Pattern { pattern, .. } => write!(f, "/{}/", pattern.as_str()),
        }
    }
}
