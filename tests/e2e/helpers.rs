use std::fs;
use std::process::Command;
use tempfile::TempDir;

pub struct TestProject {
    pub dir: TempDir,
    pub binary_path: String,
}

impl TestProject {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let binary_path = env!("CARGO_BIN_EXE_channel-streams").to_string();

        Self { dir, binary_path }
    }

    pub fn write_file(&self, name: &str, content: &str) {
        fs::write(self.dir.path().join(name), content).expect("Failed to write test file");
    }

    pub fn read_file(&self, name: &str) -> String {
        fs::read_to_string(self.dir.path().join(name)).expect("Failed to read test file")
    }

    pub fn run(&self, args: &[&str]) -> std::process::Output {
        Command::new(&self.binary_path)
            .args(args)
            .current_dir(self.dir.path())
            .env_remove("RUST_LOG")
            .output()
            .expect("Failed to run channel-streams")
    }
}

pub const CHANNEL_YAML: &str = r#"
name: wildfly-core
streams:
  - groupId: org.wildfly.core
    artifactId: wildfly-server
    version: "20.0.0.Final, 20.0.1.Final"
  - groupId: io.undertow
    artifactId: "*"
    version-pattern: '2\.2\..*'
"#;

pub const ALIGNED_MANIFEST: &str = r#"
[[artifact]]
groupId = "org.wildfly.core"
artifactId = "wildfly-server"
version = "20.0.1.Final"

[[artifact]]
groupId = "io.undertow"
artifactId = "undertow-core"
version = "2.2.5.Final"
"#;

pub const MISALIGNED_MANIFEST: &str = r#"
[[artifact]]
groupId = "org.wildfly.core"
artifactId = "wildfly-server"
version = "19.0.0.Final"

[[artifact]]
groupId = "org.jboss"
artifactId = "jboss-logging"
version = "3.4.1.Final"
"#;
