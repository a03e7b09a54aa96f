use std::io;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyhow::Result;

use crate::config::{ColorMode, Config};
use crate::ui::context::UiContext;
use crate::watcher::{WatchOptions, WatchSession};

/// Watch the source root and rebuild connectors as their definitions change.
///
/// Runs until 'q', Ctrl+C, or SIGINT; a failed rebuild is reported and the
/// session keeps watching.
pub fn cmd_watch(
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

    let options = WatchOptions {
        source: super::resolve_path(source, &config.paths.source),
        output: super::resolve_path(output, &config.paths.dist),
        json,
    };

    // SIGINT lands here even in raw mode, where Ctrl+C also arrives as a
    // keystroke; both paths set the same flag.
    let interrupted = Arc::new(AtomicBool::new(false));
    let flag = interrupted.clone();
    ctrlc::set_handler(move || {
        flag.store(true, Ordering::SeqCst);
    })
    .map_err(|e| io::Error::other(e.to_string()))?;

    let mut session = WatchSession::new(options, ui, interrupted)?;
    session.run()?;

    Ok(())
}
