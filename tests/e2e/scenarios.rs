use super::helpers::{TestProject, ALIGNED_MANIFEST, CHANNEL_YAML, MISALIGNED_MANIFEST};

#[test]
fn test_check_aligned_manifest() {
    let project = TestProject::new();
    project.write_file("channel.yaml", CHANNEL_YAML);
    project.write_file("channel-manifest.toml", ALIGNED_MANIFEST);

    let output = project.run(&["check", "channel.yaml", "--format", "json"]);
    assert!(output.status.success());

    let summary: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(summary["total"], 2);
    assert_eq!(summary["aligned"], 2);
    assert_eq!(summary["misaligned"], 0);
}

#[test]
fn test_check_misaligned_manifest_fails() {
    let project = TestProject::new();
    project.write_file("channel.yaml", CHANNEL_YAML);
    project.write_file("manifest.toml", MISALIGNED_MANIFEST);

    let output = project.run(&["check", "channel.yaml", "--manifest", "manifest.toml"]);
    assert!(!output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Alignment Summary"));
    assert!(stdout.contains("Misaligned"));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Misaligned artifacts found"));

    let output = project.run(&["check", "channel.yaml", "--manifest", "manifest.toml", "--exit-zero"]);
    assert!(output.status.success());
}

#[test]
fn test_check_uses_configured_channel() {
    let project = TestProject::new();
    project.write_file("channel.yaml", CHANNEL_YAML);
    project.write_file("channel-manifest.toml", MISALIGNED_MANIFEST);
    project.write_file(
        ".channel-streams.toml",
        "channel = \"channel.yaml\"\nfail_on_misaligned = false\nformat = \"json\"\n",
    );

    let output = project.run(&["check"]);
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("\"misaligned\": 1"));
}

#[test]
fn test_invalid_channel_is_reported() {
    let project = TestProject::new();
    project.write_file(
        "broken.yaml",
        "streams:\n  - groupId: \"*\"\n    artifactId: wildfly-ee\n    version: \"1.0\"\n",
    );

    let output = project.run(&["show", "broken.yaml"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Invalid stream specification"));
}

#[test]
fn test_show_lists_streams() {
    let project = TestProject::new();
    project.write_file("channel.yaml", CHANNEL_YAML);

    let output = project.run(&["show", "channel.yaml"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("wildfly-core (2 streams)"));
    assert!(stdout.contains("io.undertow:*"));
}

#[test]
fn test_resolve_picks_latest_candidate() {
    let project = TestProject::new();
    project.write_file("channel.yaml", CHANNEL_YAML);

    let output = project.run(&[
        "resolve",
        "channel.yaml",
        "io.undertow:undertow-core",
        "2.2.4.Final",
        "2.2.19.Final",
        "2.3.0.Final",
    ]);
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "2.2.19.Final");

    let output = project.run(&["resolve", "channel.yaml", "org.jboss:jboss-logging", "3.4.1.Final"]);
    assert!(!output.status.success());
}

#[test]
fn test_add_stream_then_show() {
    let project = TestProject::new();
    project.write_file("channel.toml", "# my channel\nname = \"mine\"\n");

    let output = project.run(&[
        "add",
        "channel.toml",
        "--group-id",
        "org.wildfly",
        "--artifact-id",
        "wildfly-ee",
        "--version",
        "1.0.0.Final, 1.0.1.Final",
    ]);
    assert!(output.status.success());
    assert!(project.read_file("channel.toml").starts_with("# my channel"));

    let output = project.run(&["show", "channel.toml", "--format", "json"]);
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("\"groupId\": \"org.wildfly\""));
}

#[test]
fn test_add_rejects_wildcard_group_with_artifact() {
    let project = TestProject::new();
    project.write_file("channel.toml", "name = \"mine\"\n");

    let output = project.run(&[
        "add",
        "channel.toml",
        "--group-id",
        "*",
        "--artifact-id",
        "wildfly-ee",
        "--version",
        "1.0",
    ]);
    assert!(!output.status.success());
    assert!(!project.read_file("channel.toml").contains("wildfly-ee"));
}

#[test]
fn test_config_validate() {
    let project = TestProject::new();

    let output = project.run(&["config", "--validate"]);
    assert!(output.status.success());

    project.write_file(".channel-streams.toml", "format = \"csv\"\n");
    let output = project.run(&["config", "--validate"]);
    assert!(!output.status.success());
}
