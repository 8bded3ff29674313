//! Width-bounded slicing: word wrapping, truncation and padding.

use unicode_segmentation::UnicodeSegmentation;

use super::ansi::extract_ansi_code;
use super::width::{grapheme_width, visible_width};

const SGR_RESET: &str = "\x1b[0m";

/// Word-wraps plain text to `width` columns.
///
/// Words longer than a whole row are broken at grapheme boundaries. Explicit newlines start a
/// new row. An empty input yields a single empty row.
pub fn wrap_words(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut rows = Vec::new();

    for paragraph in text.split('\n') {
        let mut current = String::new();
        let mut current_width = 0usize;

        for word in paragraph.split(' ').filter(|word| !word.is_empty()) {
            let word_width = visible_width(word);
            let separator = usize::from(current_width > 0);

            if current_width + separator + word_width <= width {
                if separator == 1 {
                    current.push(' ');
                }
                current.push_str(word);
                current_width += separator + word_width;
                continue;
            }

            if current_width > 0 {
                rows.push(std::mem::take(&mut current));
                current_width = 0;
            }

            if word_width <= width {
                current.push_str(word);
                current_width = word_width;
                continue;
            }

            for grapheme in word.graphemes(true) {
                let g_width = grapheme_width(grapheme);
                if current_width + g_width > width && current_width > 0 {
                    rows.push(std::mem::take(&mut current));
                    current_width = 0;
                }
                current.push_str(grapheme);
                current_width += g_width;
            }
        }

        rows.push(current);
    }

    rows
}

/// Cuts `input` to at most `width` visible columns, keeping escape sequences intact.
///
/// When anything was cut, an SGR reset is appended so styles never bleed into the next cell.
pub fn truncate_to_width(input: &str, width: usize) -> String {
    if visible_width(input) <= width {
        return input.to_string();
    }

    let mut out = String::with_capacity(input.len());
    let mut used = 0usize;
    let mut idx = 0usize;
    while idx < input.len() {
        if let Some(code) = extract_ansi_code(input, idx) {
            out.push_str(&input[idx..idx + code.length]);
            idx += code.length;
            continue;
        }

        let rest = &input[idx..];
        let next_escape = rest.find('\x1b').unwrap_or(rest.len());
        let (plain, consumed) = if next_escape == 0 {
            // Lone ESC that is not a recognized sequence; count it as zero width.
            ("\x1b", 1)
        } else {
            (&rest[..next_escape], next_escape)
        };

        let mut stop = false;
        for grapheme in plain.graphemes(true) {
            let g_width = grapheme_width(grapheme);
            if used + g_width > width {
                stop = true;
                break;
            }
            out.push_str(grapheme);
            used += g_width;
        }
        if stop {
            break;
        }
        idx += consumed;
    }

    out.push_str(SGR_RESET);
    out
}

/// Appends spaces so the visible width reaches `width`.
pub fn pad_to_width(input: &str, width: usize) -> String {
    let current = visible_width(input);
    if current >= width {
        return input.to_string();
    }
    format!("{input}{}", " ".repeat(width - current))
}

/// Truncates then pads, producing a row of exactly `width` columns.
pub fn fit_to_width(input: &str, width: usize) -> String {
    pad_to_width(&truncate_to_width(input, width), width)
}

/// Centers `input` within `width` columns (left-biased when the slack is odd).
pub fn center(input: &str, width: usize) -> String {
    let current = visible_width(input);
    if current >= width {
        return truncate_to_width(input, width);
    }
    let left = (width - current) / 2;
    pad_to_width(&format!("{}{input}", " ".repeat(left)), width)
}
