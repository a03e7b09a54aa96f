use std::path::Path;

use anyhow::Result;

use crate::config::{ColorMode, Config};
use crate::mcp;
use crate::ui::context::UiContext;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

/// Expand `.mcp.template.json` into `.mcp.json` using the process environment
/// merged with an optional `.env` file.
///
/// Missing variables are substituted as empty strings and reported; only a
/// missing or invalid template fails the command.
pub fn cmd_mcp_config(
    root: &Path,
    json: bool,
    verbose: u8,
    color: Option<ColorMode>,
    no_animation: bool,
) -> Result<()> {
    let (config, warnings) = Config::load_or_default(root);
    let ui = UiContext::new(json, verbose, color, no_animation, &config);
    super::print_config_warnings(&warnings, &ui);

    let report = mcp::generate(root)?;

    if ui.json {
        println!(
            "{}",
            serde_json::json!({
                "event": "mcp_config",
                "output": report.output_path.display().to_string(),
                "missing": report.missing,
            })
        );
        return Ok(());
    }

    println!(
        "{} {}",
        Icon::Success.colored(ui.color, ui.unicode),
        ColoredText::success("Generated .mcp.json with environment variables").render(ui.color)
    );

    if !report.missing.is_empty() {
        eprintln!(
            "{} {}",
            Icon::Warning.colored(ui.color, ui.unicode),
            ColoredText::warning(format!(
                "Missing environment variables: {}",
                report.missing.join(", ")
            ))
            .render(ui.color)
        );
        eprintln!("   Create a .env file with the missing variables");
    }

    Ok(())
}
