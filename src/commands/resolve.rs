use anyhow::Result;
use std::path::PathBuf;
use channel_streams::channel::Channel;

pub fn handle_resolve(channel: PathBuf, coordinate: String, candidates: Vec<String>, quiet: bool) -> Result<()> {
    let (group_id, artifact_id) = coordinate
        .split_once(':')
        .ok_or_else(|| anyhow::anyhow!("Expected groupId:artifactId, got '{}'", coordinate))?;

    let channel = Channel::from_path(&channel)?;
    let candidates: Vec<&str> = candidates.iter().map(String::as_str).collect();

    match channel.resolve_latest(group_id, artifact_id, &candidates) {
        Some(version) => {
            if !quiet {
                println!("{}", version);
            }
            Ok(())
        }
        None => {
            if !quiet {
                match channel.find_stream(group_id, artifact_id) {
                    Some(stream) => eprintln!("No candidate accepted by stream {}", stream),
                    None => eprintln!("No stream covers {}", coordinate),
                }
            }
            std::process::exit(1);
        }
    }
}
