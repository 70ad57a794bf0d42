//! Subcommand implementations.
//!
//! Each command returns an [`Output`] rather than printing, so the binary
//! decides where text goes and which exit status to use.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{info, warn};
use umbra_catalogue::{Catalogue, GlobMatcher, ThemeRecord};
use umbra_render::StylesheetGenerator;

use crate::cli::{Command, FormatArgs, GenerateArgs, InspectArgs};
use crate::config::load_config;

/// What a command produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Output {
    /// Text for stdout.
    pub text: String,
    /// False when the command ran but its check failed.
    pub success: bool,
}

impl Output {
    fn ok(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            success: true,
        }
    }
}

pub fn run(command: &Command) -> Result<Output> {
    match command {
        Command::Generate(args) => generate(args),
        Command::Format(args) => format(args),
        Command::Inspect(args) => inspect(args),
    }
}

fn read_catalogue(path: &Path) -> Result<(String, Catalogue)> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read catalogue {}", path.display()))?;
    let catalogue = Catalogue::parse(&text)
        .with_context(|| format!("Failed to parse catalogue {}", path.display()))?;
    Ok((text, catalogue))
}

fn generate(args: &GenerateArgs) -> Result<Output> {
    let (_, catalogue) = read_catalogue(&args.catalogue)?;
    let config = load_config(args.config.as_deref(), args.mode.map(Into::into))?;

    let css = StylesheetGenerator::new().generate_for_frame(
        &config,
        &args.url,
        args.frame_url.as_deref(),
        &catalogue,
    );
    if css.is_empty() {
        return Ok(Output::ok(""));
    }
    Ok(Output::ok(css + "\n"))
}

fn format(args: &FormatArgs) -> Result<Output> {
    let (original, catalogue) = read_catalogue(&args.catalogue)?;
    let formatted = catalogue.format();

    if args.check {
        let canonical = original == formatted;
        if !canonical {
            warn!(path = %args.catalogue.display(), "catalogue is not in canonical form");
        }
        return Ok(Output {
            text: String::new(),
            success: canonical,
        });
    }

    if args.in_place {
        if original != formatted {
            std::fs::write(&args.catalogue, &formatted)
                .with_context(|| format!("Failed to write catalogue {}", args.catalogue.display()))?;
            info!(path = %args.catalogue.display(), "rewrote catalogue");
        }
        return Ok(Output::ok(""));
    }

    Ok(Output::ok(formatted))
}

#[derive(Debug, Serialize)]
struct Inspection<'a> {
    url: &'a str,
    common: Option<&'a ThemeRecord>,
    site: Option<&'a ThemeRecord>,
}

fn inspect(args: &InspectArgs) -> Result<Output> {
    let (_, catalogue) = read_catalogue(&args.catalogue)?;

    let json = match &args.url {
        Some(url) => {
            let site = catalogue.resolve(url, &GlobMatcher::new());
            let common = match site {
                Some(site) if site.no_common => None,
                _ => Some(catalogue.common()),
            };
            serde_json::to_string_pretty(&Inspection { url, common, site })?
        }
        None => serde_json::to_string_pretty(&catalogue)?,
    };
    Ok(Output::ok(json + "\n"))
}
