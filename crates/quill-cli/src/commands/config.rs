//! Config command handlers

use anyhow::{bail, Context, Result};

use quill_core::Config;

use crate::output::{Output, OutputFormat};

/// Show current configuration
pub fn show(output: &Output) -> Result<()> {
    let config = Config::load().context("Failed to load configuration")?;

    match output.format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::json!({
                    "author_name": config.author_name,
                    "author_avatar": config.author_avatar,
                    "page_size": config.page_size,
                    "autosave_secs": config.autosave_secs,
                    "seed_samples": config.seed_samples,
                })
            );
        }
        OutputFormat::Quiet => {
            println!("{}", config.author_name.as_deref().unwrap_or(""));
        }
        OutputFormat::Human => {
            println!("Configuration:");
            println!(
                "  author_name:   {}",
                config.author_name.as_deref().unwrap_or("(not set)")
            );
            println!(
                "  author_avatar: {}",
                config.author_avatar.as_deref().unwrap_or("(not set)")
            );
            println!("  page_size:     {}", config.page_size);
            println!("  autosave_secs: {}", config.autosave_secs);
            println!("  seed_samples:  {}", config.seed_samples);
            println!();
            println!("Config file: {}", Config::config_file_path().display());
        }
    }

    Ok(())
}

/// Set a configuration value
pub fn set(key: String, value: String, output: &Output) -> Result<()> {
    let mut config = Config::load().context("Failed to load configuration")?;

    match key.as_str() {
        "author_name" => {
            config.author_name = if value.is_empty() || value == "none" {
                None
            } else {
                Some(value.clone())
            };
        }
        "author_avatar" => {
            config.author_avatar = if value.is_empty() || value == "none" {
                None
            } else {
                Some(value.clone())
            };
        }
        "page_size" => {
            config.page_size = value
                .parse()
                .context("Invalid value for page_size. Use a positive number.")?;
        }
        "autosave_secs" => {
            config.autosave_secs = value
                .parse()
                .context("Invalid value for autosave_secs. Use a positive number.")?;
        }
        "seed_samples" => {
            config.seed_samples = value
                .parse()
                .context("Invalid value for seed_samples. Use 'true' or 'false'.")?;
        }
        _ => {
            bail!(
                "Unknown configuration key: '{}'\n\
                 Valid keys: author_name, author_avatar, page_size, autosave_secs, seed_samples",
                key
            );
        }
    }

    config.save().context("Failed to save configuration")?;

    output.success(&format!("Set {} = {}", key, value));

    Ok(())
}
