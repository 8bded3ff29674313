//! Bordered boxes: plain cards and terminal-style windows.

use crate::core::text::slice::{fit_to_width, truncate_to_width};
use crate::core::text::style::{bold, fg, Color};
use crate::core::text::width::visible_width;

const TOP_LEFT: &str = "╭";
const TOP_RIGHT: &str = "╮";
const BOTTOM_LEFT: &str = "╰";
const BOTTOM_RIGHT: &str = "╯";
const HORIZONTAL: &str = "─";
const VERTICAL: &str = "│";

/// Draws `body` inside a rounded border `width` columns wide.
///
/// Body rows are truncated or padded to the inner width (one column of padding on each
/// side). An optional title is embedded in the top border.
pub fn framed(title: Option<&str>, body: &[String], width: usize, border: Color) -> Vec<String> {
    if width < 4 {
        return body.iter().map(|row| fit_to_width(row, width)).collect();
    }
    let inner = width - 4;
    let mut rows = Vec::with_capacity(body.len() + 2);
    rows.push(top_border(title, width, border));
    for row in body {
        rows.push(format!(
            "{} {} {}",
            fg(VERTICAL, border),
            fit_to_width(row, inner),
            fg(VERTICAL, border)
        ));
    }
    rows.push(fg(
        &format!("{BOTTOM_LEFT}{}{BOTTOM_RIGHT}", HORIZONTAL.repeat(width - 2)),
        border,
    ));
    rows
}

/// Draws a window with a traffic-light header (`● ● ●  title`) above `body`.
pub fn window(title: &str, body: &[String], width: usize, border: Color) -> Vec<String> {
    if width < 4 {
        return body.iter().map(|row| fit_to_width(row, width)).collect();
    }
    let dots = format!(
        "{} {} {}",
        fg("●", Color::Red),
        fg("●", Color::Yellow),
        fg("●", Color::Green)
    );
    let header = format!("{dots}  {}", fg(title, Color::DarkGray));
    let mut content = Vec::with_capacity(body.len() + 2);
    content.push(header);
    content.push(fg(&HORIZONTAL.repeat(width - 4), Color::DarkGray));
    content.extend(body.iter().cloned());
    framed(None, &content, width, border)
}

fn top_border(title: Option<&str>, width: usize, border: Color) -> String {
    let span = width - 2;
    let Some(title) = title.filter(|title| !title.is_empty()) else {
        return fg(
            &format!("{TOP_LEFT}{}{TOP_RIGHT}", HORIZONTAL.repeat(span)),
            border,
        );
    };

    let label = truncate_to_width(&format!(" {title} "), span.saturating_sub(1));
    let label_width = visible_width(&label);
    let rest = span.saturating_sub(label_width + 1);
    format!(
        "{}{}{}",
        fg(&format!("{TOP_LEFT}{HORIZONTAL}"), border),
        bold(&label),
        fg(&format!("{}{TOP_RIGHT}", HORIZONTAL.repeat(rest)), border)
    )
}
