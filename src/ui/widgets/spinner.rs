const SPINNER_FRAMES: &[char] = &['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];
const SPINNER_FRAMES_ASCII: &[char] = &['-', '\\', '|', '/'];

/// Animated one-line activity indicator.
///
/// The caller owns the cadence: `tick` advances a frame, `render`
/// produces the current line for a live region.
#[derive(Debug, Clone)]
pub struct Spinner {
    current: usize,
    message: String,
}

impl Spinner {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            current: 0,
            message: message.into(),
        }
    }

    pub fn tick(&mut self) {
        self.current = self.current.wrapping_add(1);
    }

    pub fn set_message(&mut self, message: impl Into<String>) {
        self.message = message.into();
    }

    pub fn render(&self, supports_unicode: bool) -> String {
        let frames = if supports_unicode {
            SPINNER_FRAMES
        } else {
            SPINNER_FRAMES_ASCII
        };
        let frame = frames[self.current % frames.len()];
        format!("{} {}", frame, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_uses_braille_frames_when_unicode_supported() {
        let s = Spinner::new("Watching for connector changes...");
        assert!(s.render(true).starts_with('⠋'));
    }

    #[test]
    fn render_uses_ascii_frames_when_unicode_unsupported() {
        let s = Spinner::new("Watching for connector changes...");
        assert!(s.render(false).starts_with('-'));
    }

    #[test]
    fn tick_advances_frame() {
        let mut s = Spinner::new("Watching");
        let first = s.render(true);
        s.tick();
        let second = s.render(true);
        assert_ne!(first, second);
    }

    #[test]
    fn set_message_swaps_the_label() {
        let mut s = Spinner::new("idle");
        s.set_message("Building acme/hr.s1.yaml");
        assert!(s.render(true).ends_with("Building acme/hr.s1.yaml"));
    }
}
