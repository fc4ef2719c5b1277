use anyhow::Result;
use channel_streams::channel::Channel;
use channel_streams::config::load_config;

pub fn handle_config(show: bool, validate: bool, quiet: bool) -> Result<()> {
    if !show && !validate {
        if !quiet {
            eprintln!("Use --show or --validate");
        }
        std::process::exit(1);
    }

    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            if !quiet {
                eprintln!("❌ Error loading configuration: {:#}", e);
            }
            std::process::exit(1);
        }
    };

    if show && !quiet {
        println!("{}", serde_json::to_string_pretty(&config)?);
    }

    if validate {
        if let Some(channel_path) = &config.channel {
            if let Err(e) = Channel::from_path(channel_path) {
                if !quiet {
                    eprintln!("❌ Configured channel is invalid: {:#}", e);
                }
                std::process::exit(1);
            }
        }

        if !quiet {
            println!("✅ Configuration is valid");
        }
    }

    Ok(())
}
