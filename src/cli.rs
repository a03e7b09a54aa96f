use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::ColorMode;

/// Conveyor - connector definition build pipeline
#[derive(Parser, Debug)]
#[command(name = "conveyor")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Emit NDJSON events instead of human-readable output
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// When to use colors
    #[arg(long, value_enum, global = true)]
    pub color: Option<ColorWhen>,

    /// Disable spinners and live progress
    #[arg(long, global = true)]
    pub no_animation: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build every connector definition once
    Build {
        /// Directory holding one subdirectory per namespace
        #[arg(short, long)]
        source: Option<PathBuf>,

        /// Directory receiving built artifacts
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Rebuild connectors as their definitions change
    Watch {
        /// Directory holding one subdirectory per namespace
        #[arg(short, long)]
        source: Option<PathBuf>,

        /// Directory receiving built artifacts
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Expand .mcp.template.json into .mcp.json
    McpConfig {
        /// Directory holding the template and the optional .env file
        #[arg(long, default_value = ".")]
        root: PathBuf,
    },
}

/// Color switch on the command line, resolved against config by the commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

impl From<ColorWhen> for ColorMode {
    fn from(value: ColorWhen) -> Self {
        match value {
            ColorWhen::Auto => ColorMode::Auto,
            ColorWhen::Always => ColorMode::Always,
            ColorWhen::Never => ColorMode::Never,
        }
    }
}
