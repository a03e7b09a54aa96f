use unicode_width::UnicodeWidthStr;

use crossterm::style::Stylize;

use crate::ui::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BoxStyle {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

/// Bordered block of text lines, sized to its widest line.
#[derive(Debug, Default, Clone)]
pub struct Box {
    title: Option<String>,
    content: Vec<String>,
    style: BoxStyle,
}

impl Box {
    pub fn with_title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    pub fn style(mut self, style: BoxStyle) -> Self {
        self.style = style;
        self
    }

    pub fn add_line(&mut self, line: impl Into<String>) {
        let line = line.into();
        for part in line.lines() {
            self.content.push(part.to_string());
        }
    }

    pub fn add_empty(&mut self) {
        self.content.push(String::new());
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let mut lines = Vec::new();
        if let Some(title) = &self.title {
            lines.push(title.clone());
        }
        lines.extend(self.content.iter().cloned());

        let inner_width = lines
            .iter()
            .map(|l| visible_width(l))
            .max()
            .unwrap_or(0)
            .saturating_add(2)
            .max(2);

        let [tl, tr, bl, br, h, v] = border_chars(supports_unicode);

        let mut out = String::new();
        let top = format!("{}{}{}", tl, h.repeat(inner_width), tr);
        out.push_str(&self.color_border(&top, supports_color));
        out.push('\n');

        for line in &lines {
            let pad = inner_width.saturating_sub(1 + visible_width(line));
            out.push_str(&self.color_border(v, supports_color));
            out.push(' ');
            out.push_str(line);
            out.push_str(&" ".repeat(pad));
            out.push_str(&self.color_border(v, supports_color));
            out.push('\n');
        }

        let bottom = format!("{}{}{}", bl, h.repeat(inner_width), br);
        out.push_str(&self.color_border(&bottom, supports_color));
        out.push('\n');
        out
    }

    fn color_border(&self, s: &str, supports_color: bool) -> String {
        if !supports_color {
            return s.to_string();
        }

        let color = match self.style {
            BoxStyle::Info => theme::colors::INFO,
            BoxStyle::Success => theme::colors::SUCCESS,
            BoxStyle::Warning => theme::colors::WARNING,
            BoxStyle::Error => theme::colors::ERROR,
        };
        format!("{}", s.with(color))
    }
}

/// Corner, horizontal, and vertical glyphs in drawing order
fn border_chars(supports_unicode: bool) -> [&'static str; 6] {
    if supports_unicode {
        [
            theme::borders::TOP_LEFT,
            theme::borders::TOP_RIGHT,
            theme::borders::BOTTOM_LEFT,
            theme::borders::BOTTOM_RIGHT,
            theme::borders::HORIZONTAL,
            theme::borders::VERTICAL,
        ]
    } else {
        [
            theme::borders_ascii::TOP_LEFT,
            theme::borders_ascii::TOP_RIGHT,
            theme::borders_ascii::BOTTOM_LEFT,
            theme::borders_ascii::BOTTOM_RIGHT,
            theme::borders_ascii::HORIZONTAL,
            theme::borders_ascii::VERTICAL,
        ]
    }
}

fn visible_width(s: &str) -> usize {
    strip_ansi(s).width()
}

fn strip_ansi(s: &str) -> std::borrow::Cow<'_, str> {
    if !s.contains('\u{1b}') {
        return std::borrow::Cow::Borrowed(s);
    }

    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\u{1b}' {
            // Skip ANSI escape sequence: ESC [ ... <final>
            if matches!(chars.peek(), Some('[') | Some(']')) {
                let _ = chars.next();
            }
            for next in chars.by_ref() {
                if next.is_ascii_alphabetic() {
                    break;
                }
            }
            continue;
        }
        out.push(c);
    }

    std::borrow::Cow::Owned(out)
}
