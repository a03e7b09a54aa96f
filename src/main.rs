//! Conveyor CLI - connector definition build pipeline
//!
//! Usage: conveyor <COMMAND>
//!
//! Commands:
//!   build       Build every connector definition once
//!   watch       Rebuild connectors as their definitions change
//!   mcp-config  Expand .mcp.template.json into .mcp.json

use anyhow::Result;
use clap::Parser;

use conveyor::cli::{Cli, Commands};
use conveyor::commands;

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Build { source, output } => commands::cmd_build(
            source.as_deref(),
            output.as_deref(),
            cli.json,
            cli.verbose,
            cli.color.map(Into::into),
            cli.no_animation,
        ),
        Commands::Watch { source, output } => commands::cmd_watch(
            source.as_deref(),
            output.as_deref(),
            cli.json,
            cli.verbose,
            cli.color.map(Into::into),
            cli.no_animation,
        ),
        Commands::McpConfig { root } => commands::cmd_mcp_config(
            &root,
            cli.json,
            cli.verbose,
            cli.color.map(Into::into),
            cli.no_animation,
        ),
    }
}
