//! Filter settings loading.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;
use umbra_render::{FilterConfig, FilterMode};

/// Loads filter settings from a YAML file, or the defaults when no file is
/// given, then applies the command-line mode override.
pub fn load_config(path: Option<&Path>, mode: Option<FilterMode>) -> Result<FilterConfig> {
    let mut config = match path {
        Some(path) => {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config {}", path.display()))?;
            parse_config(&content)
                .with_context(|| format!("Failed to parse config {}", path.display()))?
        }
        None => FilterConfig::default(),
    };

    if let Some(mode) = mode {
        config.mode = mode;
    }
    debug!(?config, "loaded filter config");
    Ok(config)
}

/// Parses YAML filter settings. An empty document yields the defaults.
pub fn parse_config(content: &str) -> Result<FilterConfig> {
    if content.trim().is_empty() {
        return Ok(FilterConfig::default());
    }
    Ok(serde_yaml::from_str(content)?)
}
