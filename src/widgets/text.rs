//! Word-wrapped text block.

use crate::core::component::Component;
use crate::core::text::slice::{pad_to_width, wrap_words};

pub type TextStyleFn = Box<dyn Fn(&str) -> String>;

pub struct Text {
    text: String,
    padding_x: usize,
    padding_y: usize,
    style_fn: Option<TextStyleFn>,
    cached_width: Option<usize>,
    cached_lines: Option<Vec<String>>,
}

impl Text {
    pub fn new(text: impl Into<String>) -> Self {
        Self::with_padding(text, 0, 0)
    }

    pub fn with_padding(text: impl Into<String>, padding_x: usize, padding_y: usize) -> Self {
        Self {
            text: text.into(),
            padding_x,
            padding_y,
            style_fn: None,
            cached_width: None,
            cached_lines: None,
        }
    }

    /// Styles each wrapped row (after wrapping, before padding).
    pub fn styled(mut self, style_fn: impl Fn(&str) -> String + 'static) -> Self {
        self.style_fn = Some(Box::new(style_fn));
        self.invalidate();
        self
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.invalidate();
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

impl Component for Text {
    fn render(&mut self, width: usize) -> Vec<String> {
        if let (Some(cached_width), Some(lines)) = (self.cached_width, self.cached_lines.as_ref()) {
            if cached_width == width {
                return lines.clone();
            }
        }

        if self.text.trim().is_empty() {
            self.cached_width = Some(width);
            self.cached_lines = Some(Vec::new());
            return Vec::new();
        }

        let content_width = width.saturating_sub(self.padding_x * 2).max(1);
        let margin = " ".repeat(self.padding_x);
        let blank = " ".repeat(width);

        let mut lines = Vec::new();
        lines.extend(std::iter::repeat(blank.clone()).take(self.padding_y));
        for row in wrap_words(&self.text.replace('\t', "   "), content_width) {
            let styled = match self.style_fn.as_ref() {
                Some(style) => style(&row),
                None => row,
            };
            lines.push(pad_to_width(&format!("{margin}{styled}"), width));
        }
        lines.extend(std::iter::repeat(blank).take(self.padding_y));

        self.cached_width = Some(width);
        self.cached_lines = Some(lines.clone());
        lines
    }

    fn invalidate(&mut self) {
        self.cached_width = None;
        self.cached_lines = None;
    }
}

#[cfg(test)]
mod tests {
    use super::Text;
    use crate::core::component::Component;
    use crate::core::text::ansi::strip_ansi;
    use crate::core::text::style::bold;
    use crate::core::text::width::visible_width;

    #[test]
    fn wraps_and_pads_to_width() {
        let mut text = Text::with_padding("Automation is not a luxury, it is a necessity", 1, 1);
        let lines = text.render(20);

        assert_eq!(lines.first().map(String::as_str), Some(" ".repeat(20).as_str()));
        assert_eq!(lines.last().map(String::as_str), Some(" ".repeat(20).as_str()));
        assert!(lines.len() > 3);
        assert!(lines.iter().all(|line| visible_width(line) == 20));
    }

    #[test]
    fn style_applies_per_row_and_cache_follows_text() {
        let mut text = Text::new("Senior DevOps Engineer").styled(|row| bold(row));
        let first = text.render(40);
        assert!(first[0].contains("\x1b[1m"));

        text.set_text("Platform");
        let second = text.render(40);
        assert_eq!(strip_ansi(&second[0]).trim_end(), "Platform");
    }

    #[test]
    fn blank_text_renders_nothing() {
        let mut text = Text::with_padding("   ", 2, 2);
        assert!(text.render(10).is_empty());
    }
}
