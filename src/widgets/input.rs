//! Single-line input editor.

use unicode_segmentation::UnicodeSegmentation;

use crate::core::text::slice::{fit_to_width, pad_to_width};
use crate::core::text::style::inverse;
use crate::core::text::width::visible_width;

/// Editable line with a grapheme-aware cursor.
///
/// `cursor` is a byte offset into `value` and always sits on a grapheme boundary.
#[derive(Debug, Clone, Default)]
pub struct LineInput {
    value: String,
    cursor: usize,
    focused: bool,
}

impl LineInput {
    pub fn new() -> Self {
        Self {
            focused: true,
            ..Self::default()
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.cursor = self.value.len();
    }

    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    /// Returns the current value and resets the editor.
    pub fn take(&mut self) -> String {
        self.cursor = 0;
        std::mem::take(&mut self.value)
    }

    /// Inserts typed text, dropping control characters.
    pub fn insert_str(&mut self, text: &str) {
        let cleaned: String = text.chars().filter(|ch| !ch.is_control()).collect();
        if cleaned.is_empty() {
            return;
        }
        self.value.insert_str(self.cursor, &cleaned);
        self.cursor += cleaned.len();
    }

    /// Inserts pasted text as one line: newlines are removed and tabs become spaces.
    pub fn paste(&mut self, text: &str) {
        let cleaned = text.replace(['\r', '\n'], "").replace('\t', "    ");
        self.insert_str(&cleaned);
    }

    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let start = self.previous_boundary();
        self.value.replace_range(start..self.cursor, "");
        self.cursor = start;
    }

    pub fn delete(&mut self) {
        if self.cursor >= self.value.len() {
            return;
        }
        let end = self.next_boundary();
        self.value.replace_range(self.cursor..end, "");
    }

    pub fn move_left(&mut self) {
        self.cursor = self.previous_boundary();
    }

    pub fn move_right(&mut self) {
        self.cursor = self.next_boundary();
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.value.len();
    }

    fn previous_boundary(&self) -> usize {
        self.value[..self.cursor]
            .graphemes(true)
            .next_back()
            .map(|grapheme| self.cursor - grapheme.len())
            .unwrap_or(0)
    }

    fn next_boundary(&self) -> usize {
        self.value[self.cursor..]
            .graphemes(true)
            .next()
            .map(|grapheme| self.cursor + grapheme.len())
            .unwrap_or(self.value.len())
    }

    /// Renders `prompt` followed by the value, padded to `width`.
    ///
    /// When focused, the grapheme under the cursor is drawn in reverse video. Values wider than
    /// the space after the prompt scroll so the cursor stays visible.
    pub fn render(&self, prompt: &str, width: usize) -> String {
        let available = width.saturating_sub(visible_width(prompt));
        if available == 0 {
            return pad_to_width(prompt, width);
        }

        let before: Vec<&str> = self.value[..self.cursor].graphemes(true).collect();
        let mut after = self.value[self.cursor..].graphemes(true);
        let at_cursor = after.next();
        let rest: String = after.collect();

        // Keep the cursor cell on screen by dropping graphemes from the left.
        let mut skip = 0;
        let mut before_width: usize = before.iter().map(|g| visible_width(g)).sum();
        while before_width + 1 > available && skip < before.len() {
            before_width -= visible_width(before[skip]);
            skip += 1;
        }
        let visible_before: String = before[skip..].concat();

        let cursor_cell = match (self.focused, at_cursor) {
            (true, Some(grapheme)) => inverse(grapheme),
            (true, None) => inverse(" "),
            (false, Some(grapheme)) => grapheme.to_string(),
            (false, None) => String::new(),
        };

        let line = format!("{prompt}{visible_before}{cursor_cell}{rest}");
        fit_to_width(&line, width)
    }
}

#[cfg(test)]
mod tests {
    use super::LineInput;
    use crate::core::text::ansi::strip_ansi;
    use crate::core::text::width::visible_width;

    #[test]
    fn edits_at_the_cursor() {
        let mut input = LineInput::new();
        input.insert_str("contct");
        input.move_left();
        input.move_left();
        input.insert_str("a");
        assert_eq!(input.value(), "contact");

        input.move_end();
        input.backspace();
        assert_eq!(input.value(), "contac");

        input.move_home();
        input.delete();
        assert_eq!(input.value(), "ontac");
        assert_eq!(input.cursor(), 0);
    }

    #[test]
    fn backspace_removes_whole_graphemes() {
        let mut input = LineInput::new();
        input.insert_str("ok 👍🏽");
        input.backspace();
        assert_eq!(input.value(), "ok ");
    }

    #[test]
    fn paste_flattens_to_one_line_and_controls_are_dropped() {
        let mut input = LineInput::new();
        input.paste("contact\r\n --email");
        assert_eq!(input.value(), "contact --email");

        input.insert_str("\x07");
        assert_eq!(input.value(), "contact --email");
    }

    #[test]
    fn take_returns_value_and_resets() {
        let mut input = LineInput::new();
        input.set_value("whoami");
        assert_eq!(input.take(), "whoami");
        assert!(input.is_empty());
        assert_eq!(input.cursor(), 0);
    }

    #[test]
    fn render_shows_prompt_and_block_cursor() {
        let mut input = LineInput::new();
        input.set_value("help");
        let line = input.render("$ ", 12);

        assert_eq!(visible_width(&line), 12);
        assert!(line.contains("\x1b[7m \x1b[27m"));
        assert_eq!(strip_ansi(&line), "$ help      ");
    }

    #[test]
    fn long_values_scroll_to_keep_the_cursor_visible() {
        let mut input = LineInput::new();
        input.set_value("navigate --testimonials");
        let line = strip_ansi(&input.render("> ", 10));

        assert_eq!(line.chars().count(), 10);
        assert!(line.starts_with("> "));
        assert!(line.trim_end().ends_with("nials"), "{line}");
    }
}
