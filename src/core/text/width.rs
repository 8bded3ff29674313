//! Grapheme width and visible width helpers.

use emojis::get as emoji_get;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthChar;

use super::ansi::strip_ansi;

const TAB_WIDTH: usize = 3;

pub fn grapheme_width(grapheme: &str) -> usize {
    if grapheme.is_empty() {
        return 0;
    }
    if grapheme == "\t" {
        return TAB_WIDTH;
    }

    if emoji_get(grapheme).is_some() {
        return 2;
    }

    let mut width = 0;
    for ch in grapheme.chars() {
        if ch == '\t' {
            width += TAB_WIDTH;
            continue;
        }
        width += UnicodeWidthChar::width(ch).unwrap_or(0);
    }
    width
}

/// Terminal columns occupied by `input`, ignoring escape sequences.
pub fn visible_width(input: &str) -> usize {
    if input.is_empty() {
        return 0;
    }

    strip_ansi(input).graphemes(true).map(grapheme_width).sum()
}

#[cfg(test)]
mod tests {
    use super::visible_width;

    #[test]
    fn ansi_ignored_in_width() {
        let input = "hi\x1b[31m!!\x1b[0m";
        assert_eq!(visible_width(input), 4);
    }

    #[test]
    fn rgi_emoji_width_is_two() {
        assert_eq!(visible_width("📧"), 2);
        assert_eq!(visible_width("🚀 go"), 5);
    }

    #[test]
    fn box_drawing_is_single_width() {
        assert_eq!(visible_width("╭──╮"), 4);
    }
}
