//! Command-line definition.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use umbra_render::FilterMode;

/// Generate page theme stylesheets from a site catalogue.
#[derive(Debug, Parser)]
#[command(name = "umbra", version, about)]
pub struct Cli {
    /// Log debug output to stderr (UMBRA_LOG overrides)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the stylesheet for a page
    Generate(GenerateArgs),
    /// Rewrite a catalogue in canonical form
    Format(FormatArgs),
    /// Dump parsed records as JSON
    Inspect(InspectArgs),
}

#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Catalogue file
    #[arg(short, long)]
    pub catalogue: PathBuf,

    /// Page URL
    #[arg(short, long)]
    pub url: String,

    /// URL of the frame being styled, when not the top page
    #[arg(long)]
    pub frame_url: Option<String>,

    /// YAML filter settings
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Override the mode from the settings file
    #[arg(short, long, value_enum)]
    pub mode: Option<ModeArg>,
}

#[derive(Debug, Args)]
pub struct FormatArgs {
    /// Catalogue file
    #[arg(short, long)]
    pub catalogue: PathBuf,

    /// Write the result back to the file instead of stdout
    #[arg(short, long)]
    pub in_place: bool,

    /// Exit with status 1 if the file is not already canonical
    #[arg(long, conflicts_with = "in_place")]
    pub check: bool,
}

#[derive(Debug, Args)]
pub struct InspectArgs {
    /// Catalogue file
    #[arg(short, long)]
    pub catalogue: PathBuf,

    /// Show only the records that apply to this URL
    #[arg(short, long)]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    Light,
    Dark,
}

impl From<ModeArg> for FilterMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Light => FilterMode::Light,
            ModeArg::Dark => FilterMode::Dark,
        }
    }
}
