//! Horizontal level bars.

use crate::core::text::style::{fg, Color};

const FILLED: &str = "█";
const EMPTY: &str = "░";

/// Renders a bar `width` cells wide filled to `fraction` (clamped to `0.0..=1.0`).
///
/// Partially covered cells round to the nearest whole cell.
pub fn progress_bar(fraction: f64, width: usize, color: Color) -> String {
    let fraction = if fraction.is_nan() {
        0.0
    } else {
        fraction.clamp(0.0, 1.0)
    };
    let filled = ((fraction * width as f64).round() as usize).min(width);
    format!(
        "{}{}",
        fg(&FILLED.repeat(filled), color),
        fg(&EMPTY.repeat(width - filled), Color::DarkGray)
    )
}

#[cfg(test)]
mod tests {
    use super::progress_bar;
    use crate::core::text::ansi::strip_ansi;
    use crate::core::text::style::Color;

    #[test]
    fn fills_proportionally() {
        assert_eq!(strip_ansi(&progress_bar(0.5, 10, Color::Green)), "█████░░░░░");
        assert_eq!(strip_ansi(&progress_bar(0.0, 4, Color::Green)), "░░░░");
        assert_eq!(strip_ansi(&progress_bar(1.0, 4, Color::Green)), "████");
    }

    #[test]
    fn out_of_range_fractions_clamp() {
        assert_eq!(strip_ansi(&progress_bar(1.7, 3, Color::Blue)), "███");
        assert_eq!(strip_ansi(&progress_bar(-0.2, 3, Color::Blue)), "░░░");
        assert_eq!(strip_ansi(&progress_bar(f64::NAN, 3, Color::Blue)), "░░░");
    }
}
