use std::path::Path;

use crate::batch::BuildReport;
use crate::error::BuildError;
use crate::models::BuiltUnit;
use crate::ui::blocks::header::CommandHeader;
use crate::ui::blocks::summary::ResultSummary;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

pub fn render_build_header(
    source: &Path,
    output: &Path,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut header = CommandHeader::new(Icon::Build, "Conveyor Build");
    header.add("Source", source.display().to_string());
    header.add("Output", output.display().to_string());
    header.render(supports_color, supports_unicode)
}

pub fn render_unit_built(
    built: &BuiltUnit,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let artifact = built
        .json_path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    format!(
        "{} {}  {}\n",
        Icon::Success.colored(supports_color, supports_unicode),
        built.unit,
        ColoredText::dim(artifact).render(supports_color),
    )
}

pub fn render_unit_error(
    error: &BuildError,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    format!(
        "{} {}\n",
        Icon::Error.colored(supports_color, supports_unicode),
        ColoredText::error(format!(
            "Error building file {}: {}",
            error.unit, error.cause
        ))
        .render(supports_color),
    )
}

pub fn render_build_summary(
    report: &BuildReport,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut summary = if report.is_success() {
        ResultSummary::success("Build complete")
    } else {
        ResultSummary::partial("Build completed with errors")
    };

    summary.add_stat("connectors built", report.built.len());
    summary.add_stat("artifacts written", report.artifacts_written());

    if !report.errors.is_empty() {
        summary.add_warning(format!("{} connectors failed", report.errors.len()));
        summary.with_next_step("fix the definitions above, then re-run `conveyor build`");
    }

    summary.render(supports_color, supports_unicode)
}
