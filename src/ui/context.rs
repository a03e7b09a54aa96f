use crate::config::{AnimationMode, ColorMode, Config};
use crate::ui::terminal::{detect_capabilities, TerminalCapabilities};

/// Resolved output settings for one command invocation.
///
/// Precedence for color: CLI flag, then config, then detection.
/// Animation only runs on an interactive non-CI terminal and never in
/// JSON mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiContext {
    pub json: bool,
    pub verbose: u8,
    pub caps: TerminalCapabilities,
    pub color: bool,
    pub unicode: bool,
    pub animation: bool,
}

impl UiContext {
    pub fn new(
        json: bool,
        verbose: u8,
        cli_color: Option<ColorMode>,
        cli_no_animation: bool,
        config: &Config,
    ) -> Self {
        let caps = detect_capabilities();
        Self::from_caps(json, verbose, cli_color, cli_no_animation, config, caps)
    }

    pub fn from_caps(
        json: bool,
        verbose: u8,
        cli_color: Option<ColorMode>,
        cli_no_animation: bool,
        config: &Config,
        caps: TerminalCapabilities,
    ) -> Self {
        let unicode = config.output.unicode && caps.supports_unicode;

        let color = match cli_color.unwrap_or(config.output.color) {
            ColorMode::Never => false,
            ColorMode::Always => true,
            ColorMode::Auto => caps.supports_color && !caps.is_ci,
        };

        let animation = if json || cli_no_animation || caps.is_ci {
            false
        } else {
            match config.output.animation {
                AnimationMode::Never => false,
                AnimationMode::Always => caps.is_tty,
                AnimationMode::Auto => caps.is_tty && !caps.is_ci,
            }
        };

        Self {
            json,
            verbose,
            caps,
            color,
            unicode,
            animation,
        }
    }
}
