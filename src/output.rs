use crate::alignment::{AlignmentSummary, Finding, FindingLevel};
use crate::channel::Channel;

pub fn format_alignment_table(summary: &AlignmentSummary, verbose: bool) -> String {
    let mut output = String::new();

    output.push_str(&format!("📦 Alignment Summary ({} artifacts)\n", summary.total));
    output.push_str(&format!(
        "✅ {} aligned  🚫 {} misaligned  ⚠️ {} unmatched\n\n",
        summary.aligned, summary.misaligned, summary.unmatched
    ));

    if verbose {
        output.push_str("📦 All Artifacts:\n");
        let all: Vec<&Finding> = summary.findings.iter().collect();
        output.push_str(&format_finding_table(&all));
    } else {
        let issues: Vec<&Finding> = summary.issues().collect();
        if !issues.is_empty() {
            output.push_str("⚠️  Issues Found:\n");
            output.push_str(&format_finding_table(&issues));
        } else {
            output.push_str("✅ No issues found!\n");
        }

        if summary.findings.len() > issues.len() {
            output.push_str(&format!(
                "\n💡 Run with --verbose to see all {} artifacts\n",
                summary.findings.len()
            ));
        }
    }

    output
}

fn format_finding_table(findings: &[&Finding]) -> String {
    if findings.is_empty() {
        return "No artifacts found.\n".to_string();
    }

    let mut output = String::new();

    output.push_str("┌───────────────────────────────┬─────────────────┬─────────────────┬────────────┐\n");
    output.push_str("│ Artifact                      │ Version         │ Preferred       │ Status     │\n");
    output.push_str("├───────────────────────────────┼─────────────────┼─────────────────┼────────────┤\n");

    for finding in findings {
        let artifact = truncate(&format!("{}:{}", finding.group_id, finding.artifact_id), 29);
        let version = truncate(&finding.version, 15);
        let preferred = truncate(finding.preferred_version.as_deref().unwrap_or("-"), 15);
        let status = match finding.level {
            FindingLevel::Aligned => "OK",
            FindingLevel::Misaligned => "Misaligned",
            FindingLevel::Unmatched => "No stream",
        };

        output.push_str(&format!(
            "│ {:<29} │ {:<15} │ {:<15} │ {:<10} │\n",
            artifact, version, preferred, status
        ));
    }

    output.push_str("└───────────────────────────────┴─────────────────┴─────────────────┴────────────┘\n");

    output
}

pub fn format_channel_table(channel: &Channel) -> String {
    let mut output = String::new();

    let name = channel.name.as_deref().unwrap_or("(unnamed channel)");
    output.push_str(&format!("📦 {} ({} streams)\n", name, channel.streams.len()));
    if let Some(description) = &channel.description {
        output.push_str(&format!("   {}\n", description));
    }
    for (group, count) in channel.streams_by_group() {
        output.push_str(&format!("   {} → {} stream(s)\n", group, count));
    }
    output.push('\n');

    if channel.streams.is_empty() {
        output.push_str("No streams defined.\n");
        return output;
    }

    output.push_str("┌───────────────────────────────┬───────────────────────────────┬───────┐\n");
    output.push_str("│ Stream                        │ Versions                      │ Cache │\n");
    output.push_str("├───────────────────────────────┼───────────────────────────────┼───────┤\n");

    for stream in &channel.streams {
        let coordinate = truncate(&stream.coordinate(), 29);
        let versions = truncate(&stream.version_comparator().to_string(), 29);
        let cache = if stream.resolve_with_local_cache() { "yes" } else { "no" };
        output.push_str(&format!("│ {:<29} │ {:<29} │ {:<5} │\n", coordinate, versions, cache));
    }

    output.push_str("└───────────────────────────────┴───────────────────────────────┴───────┘\n");

    output
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len - 1).collect();
        format!("{}…", kept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::channel::DocumentFormat;
    use crate::manifest::Artifact;

    fn channel() -> Channel {
        Channel::from_str_with_format(
            r#"
name: test-channel
streams:
  - groupId: org.wildfly
    artifactId: wildfly-ee
    version: "1.0.0.Final"
"#,
            DocumentFormat::Yaml,
        )
        .unwrap()
    }

    #[test]
    fn test_alignment_table_shows_issues_only() {
        let summary = channel().check_alignment(&[
            Artifact::new("org.wildfly", "wildfly-ee", "1.0.0.Final"),
            Artifact::new("org.jboss", "jboss-logging", "3.4.1.Final"),
        ]);

        let output = format_alignment_table(&summary, false);
        assert!(output.contains("Alignment Summary (2 artifacts)"));
        assert!(output.contains("org.jboss:jboss-logging"));
        assert!(!output.contains("org.wildfly:wildfly-ee"));
        assert!(output.contains("--verbose"));

        let verbose = format_alignment_table(&summary, true);
        assert!(verbose.contains("org.wildfly:wildfly-ee"));
    }

    #[test]
    fn test_channel_table() {
        let output = format_channel_table(&channel());
        assert!(output.contains("test-channel (1 streams)"));
        assert!(output.contains("org.wildfly:wildfly-ee"));
        assert!(output.contains("1.0.0.Final"));
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("org.wildfly.core", 8), "org.wil…");
    }
}
