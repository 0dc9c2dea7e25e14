use crate::core::{validation, MirrorConfig};
use anyhow::{Context, Result};
use colored::Colorize;
use std::path::Path;

pub fn execute(matches: &clap::ArgMatches) -> Result<()> {
    match matches.subcommand() {
        Some(("show", _)) => show(),
        Some(("set", sub_matches)) => set(sub_matches),
        Some(("reset", _)) => reset(),
        _ => {
            println!("Use 'dirmirror config --help' for more information.");
            Ok(())
        }
    }
}

fn show() -> Result<()> {
    let config = MirrorConfig::load().context("Failed to load config")?;

    println!("{}", "Mirror configuration:".white().bold());
    for key in MirrorConfig::KEYS {
        let value = config.get(key).unwrap_or_default();
        println!("  {:<12} {}", key.cyan(), value);
    }

    if let Ok(path) = MirrorConfig::get_config_path() {
        println!();
        println!("{} {}", "Stored in:".dimmed(), path.display().to_string().dimmed());
    }
    Ok(())
}

fn set(matches: &clap::ArgMatches) -> Result<()> {
    let key = matches
        .get_one::<String>("key")
        .context("Key argument is required")?;
    let value = matches
        .get_one::<String>("value")
        .context("Value argument is required")?;

    match key.as_str() {
        "url" => {
            validation::validate_start_url(value)?;
        }
        "output" => {
            validation::validate_output_dir(Path::new(value))?;
        }
        _ => {}
    }

    let mut config = MirrorConfig::load().context("Failed to load config")?;
    config.set(key, value)?;
    config.save().context("Failed to save config")?;

    println!("{} {} = {}", "✓ Saved".green(), key.cyan(), value);
    Ok(())
}

fn reset() -> Result<()> {
    MirrorConfig::default()
        .save()
        .context("Failed to save config")?;
    println!("{}", "✓ Configuration reset to defaults".green());
    Ok(())
}
