use crate::core::{validation, HttpTransport, Mirror, MirrorConfig, NodeOutcome, Transport};
use crate::ui::progress;
use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

/// Execute the mirror command
pub fn execute(matches: &clap::ArgMatches) -> Result<()> {
    let config = resolve_config(matches)?;
    run(&config)?;
    Ok(())
}

/// Persisted settings with command-line flags layered on top.
pub fn resolve_config(matches: &clap::ArgMatches) -> Result<MirrorConfig> {
    let mut config = MirrorConfig::load().context("Failed to load config")?;

    if let Some(url) = matches.get_one::<String>("url") {
        config.start_url = url.clone();
    }
    if let Some(output) = matches.get_one::<PathBuf>("output") {
        config.output_dir = output.clone();
    }
    if let Some(timeout) = matches.get_one::<u64>("timeout") {
        config.timeout_secs = *timeout;
    }

    Ok(config)
}

/// Mirror `config.start_url` into `config.output_dir` over HTTP.
pub fn run(config: &MirrorConfig) -> Result<NodeOutcome> {
    let transport = HttpTransport::from_config(config).context("Failed to build HTTP client")?;
    run_with(config, transport)
}

/// Mirror using any transport. Individual fetch failures end up in the
/// returned tree; only setup problems and unresolvable links are errors.
pub fn run_with<T: Transport>(config: &MirrorConfig, transport: T) -> Result<NodeOutcome> {
    let start_url = validation::validate_start_url(&config.start_url)
        .with_context(|| format!("Invalid start URL: {}", config.start_url))?;
    validation::validate_output_dir(&config.output_dir)?;

    progress::banner(start_url.as_str(), &config.output_dir);

    if !config.output_dir.exists() {
        fs::create_dir_all(&config.output_dir).with_context(|| {
            format!(
                "Could not create output folder: {}",
                config.output_dir.display()
            )
        })?;
    }

    let mirror = Mirror::new(transport);
    let outcome = mirror
        .fetch(&start_url, &config.output_dir)
        .context("Mirror aborted")?;

    progress::summary(&outcome.summary());
    progress::done();

    Ok(outcome)
}
