use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "channel-streams")]
#[command(about = "Validate channel stream definitions and check artifact alignment")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Check the artifacts of a manifest against a channel
    Check {
        /// Channel file (YAML, JSON or TOML)
        channel: Option<PathBuf>,

        /// Manifest listing the artifacts to check
        #[arg(short, long)]
        manifest: Option<PathBuf>,

        /// Output format
        #[arg(short, long)]
        format: Option<OutputFormat>,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Exit with code 0 even on misaligned artifacts
        #[arg(long)]
        exit_zero: bool,
    },
    /// List the streams of a channel
    Show {
        /// Channel file (YAML, JSON or TOML)
        channel: Option<PathBuf>,

        /// Output format
        #[arg(short, long)]
        format: Option<OutputFormat>,
    },
    /// Pick the latest candidate version accepted by the channel
    Resolve {
        /// Channel file (YAML, JSON or TOML)
        channel: PathBuf,

        /// Artifact coordinate as groupId:artifactId
        coordinate: String,

        /// Available versions to choose from
        #[arg(required = true)]
        candidates: Vec<String>,
    },
    /// Add a stream to a TOML channel file
    Add {
        /// Channel file (TOML)
        channel: PathBuf,

        #[arg(long)]
        group_id: String,

        #[arg(long)]
        artifact_id: String,

        /// Comma or whitespace separated list of versions
        #[arg(long, conflicts_with = "version_pattern")]
        version: Option<String>,

        /// Regular expression matching acceptable versions
        #[arg(long)]
        version_pattern: Option<String>,

        /// Consult the local Maven cache before remote repositories
        #[arg(long)]
        resolve_with_local_cache: bool,
    },
    /// Show or validate configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Validate configuration file and the configured channel
        #[arg(long)]
        validate: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

impl OutputFormat {
    /// CLI flag first, then the config value, then table.
    pub fn resolve(flag: Option<OutputFormat>, configured: Option<&str>) -> OutputFormat {
        flag.unwrap_or(match configured {
            Some("json") => OutputFormat::Json,
            _ => OutputFormat::Table,
        })
    }
}
