use std::path::Path;

use anyhow::Result;

use crate::batch;
use crate::config::{ColorMode, Config};
use crate::ui::context::UiContext;
use crate::ui::views::build as view;

/// Build every connector definition under the source root once.
///
/// Failures are collected per unit rather than aborting the run; the process
/// exits 1 when any unit failed, 0 when all built.
pub fn cmd_build(
    source: Option<&Path>,
    output: Option<&Path>,
    json: bool,
    verbose: u8,
    color: Option<ColorMode>,
    no_animation: bool,
) -> Result<()> {
    let (config, warnings) = Config::load_or_default(Path::new("."));
    let ui = UiContext::new(json, verbose, color, no_animation, &config);
    super::print_config_warnings(&warnings, &ui);

    let source = super::resolve_path(source, &config.paths.source);
    let output = super::resolve_path(output, &config.paths.dist);

    if !ui.json {
        print!(
            "{}",
            view::render_build_header(&source, &output, ui.color, ui.unicode)
        );
    }

    let report = batch::run_all(&source, &output)?;

    if ui.json {
        println!("{}", report.to_json());
    } else {
        for built in &report.built {
            print!("{}", view::render_unit_built(built, ui.color, ui.unicode));
        }
        for error in &report.errors {
            eprint!("{}", view::render_unit_error(error, ui.color, ui.unicode));
        }
        println!();
        println!(
            "{}",
            view::render_build_summary(&report, ui.color, ui.unicode)
        );
    }

    if !report.is_success() {
        std::process::exit(1);
    }

    Ok(())
}
