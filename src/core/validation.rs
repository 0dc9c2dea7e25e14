// Validation for the values a mirror run starts from

use anyhow::{ensure, Context, Result};
use std::path::Path;
use url::Url;

/// Maximum URL length accepted as a start URL
const MAX_URL_LENGTH: usize = 2048;

/// Validates and parses the start URL of a mirror run
///
/// - must not be empty or overly long
/// - must parse as an absolute URL
/// - protocol must be http or https
/// - must have a hostname
pub fn validate_start_url(url_str: &str) -> Result<Url> {
    let trimmed = url_str.trim();

    ensure!(!trimmed.is_empty(), "URL cannot be empty");
    ensure!(
        trimmed.len() <= MAX_URL_LENGTH,
        "URL is too long ({} characters, max {})",
        trimmed.len(),
        MAX_URL_LENGTH
    );
    ensure!(
        !trimmed.contains('\0'),
        "URL contains null byte"
    );

    let url = Url::parse(trimmed).context("Invalid URL format")?;

    let scheme = url.scheme();
    ensure!(
        scheme == "http" || scheme == "https",
        "URL must use http or https protocol, got: {}",
        scheme
    );
    ensure!(url.host_str().is_some(), "URL has no hostname");

    Ok(url)
}

/// Validates the local folder a mirror is written into
///
/// The folder may already exist, but must not be a regular file.
pub fn validate_output_dir(path: &Path) -> Result<()> {
    ensure!(
        !path.as_os_str().is_empty(),
        "Output folder cannot be empty"
    );
    ensure!(
        !path.is_file(),
        "Output folder is an existing file: {}",
        path.display()
    );
    Ok(())
}
