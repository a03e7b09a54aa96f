//! Command implementations behind the CLI surface.
//!
//! Each command resolves configuration the same way: conveyor.toml (plus
//! CONVEYOR_* environment overrides) provides defaults, explicit CLI flags
//! win over both.

mod build;
mod mcp_config;
mod watch;

pub use build::cmd_build;
pub use mcp_config::cmd_mcp_config;
pub use watch::cmd_watch;

use std::path::{Path, PathBuf};

use crate::config::ConfigWarning;
use crate::ui::context::UiContext;
use crate::ui::primitives::icon::Icon;

/// Pick the CLI override when given, the configured value otherwise.
fn resolve_path(cli: Option<&Path>, configured: &str) -> PathBuf {
    cli.map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(configured))
}

/// Unknown-key warnings from conveyor.toml, shown before the command runs.
fn print_config_warnings(warnings: &[ConfigWarning], ui: &UiContext) {
    if ui.json {
        return;
    }
    for warning in warnings {
        let mut message = format!(
            "unknown config key '{}' in {}",
            warning.key,
            warning.file.display()
        );
        if let Some(line) = warning.line {
            message.push_str(&format!(" (line {line})"));
        }
        if let Some(suggestion) = &warning.suggestion {
            message.push_str(&format!(", did you mean '{suggestion}'?"));
        }
        eprintln!(
            "{} {}",
            Icon::Warning.colored(ui.color, ui.unicode),
            message
        );
    }
}
