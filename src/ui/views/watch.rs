use std::path::Path;

use crate::ui::blocks::header::CommandHeader;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::watcher::WatchEvent;

pub fn render_watch_header(
    source: &Path,
    output: &Path,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut header = CommandHeader::new(Icon::Watch, "Conveyor Watch");
    header.add("Source", source.display().to_string());
    header.add("Output", output.display().to_string());
    header.render(supports_color, supports_unicode)
}

pub fn render_keys_hint(supports_color: bool) -> String {
    format!(
        "{}\n",
        ColoredText::dim("Connectors build watch mode enabled. Press \"q\" to quit.")
            .render(supports_color)
    )
}

pub fn render_no_tty_warning(supports_color: bool, supports_unicode: bool) -> String {
    format!(
        "{} {}\n",
        Icon::Warning.colored(supports_color, supports_unicode),
        ColoredText::warning("Warning: TTY not available. Press Ctrl+C to exit.")
            .render(supports_color)
    )
}

pub fn render_watch_event(
    timestamp: &str,
    event: &WatchEvent,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let prefix = format!("[{}]", timestamp);

    match event {
        WatchEvent::WatchStarted { .. } => format!(
            "{} {} Watching for connector changes...\n",
            prefix,
            Icon::Watch.colored(supports_color, supports_unicode),
        ),
        WatchEvent::FileChanged { path } => format!(
            "{} {} File changed: {}. Building...\n",
            prefix,
            Icon::Arrow.colored(supports_color, supports_unicode),
            path
        ),
        WatchEvent::UnitBuilt { .. } => format!(
            "{} {} Done!\n",
            prefix,
            Icon::Success.colored(supports_color, supports_unicode),
        ),
        WatchEvent::Skipped { path, .. } => format!(
            "{} {} Skipping file at unexpected path: {}\n",
            prefix,
            Icon::Warning.colored(supports_color, supports_unicode),
            path
        ),
        WatchEvent::BuildFailed { unit, message } => format!(
            "{} {} {}\n",
            prefix,
            Icon::Error.colored(supports_color, supports_unicode),
            ColoredText::error(format!("Error building file {}: {}", unit, message))
                .render(supports_color)
        ),
        WatchEvent::Shutdown => format!(
            "\n{} {} Exiting watch mode...\n",
            prefix,
            Icon::Watch.colored(supports_color, supports_unicode),
        ),
    }
}
