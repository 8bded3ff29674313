//! Page sections, top to bottom.

use std::time::Instant;

use folio_tui::core::text::slice::{center, wrap_words};
use folio_tui::core::text::style::{bold, fg, Color};
use folio_tui::Component;

use crate::anchors::SectionId;

pub mod arsenal;
pub mod career;
pub mod contact;
pub mod footer;
pub mod hero;
pub mod navigation;
pub mod philosophy;
pub mod projects;
pub mod testimonials;

pub use arsenal::ArsenalSection;
pub use career::CareerSection;
pub use contact::ContactSection;
pub use footer::Footer;
pub use hero::HeroSection;
pub use navigation::NavigationBar;
pub use philosophy::PhilosophySection;
pub use projects::ProjectsSection;
pub use testimonials::TestimonialsSection;

/// Refresh interval for time-driven effects.
pub const FRAME_INTERVAL: std::time::Duration = std::time::Duration::from_millis(16);

/// A block of the page document.
///
/// Row counts must not depend on animation progress, so anchors stay put while things move.
pub trait Section: Component {
    /// Anchor this section registers, if any.
    fn id(&self) -> Option<SectionId>;

    /// Called whenever some of the section's rows are on screen.
    fn on_visible(&mut self, _now: Instant) {}
}

/// Centered title plus wrapped subtitle, framed by blank rows.
pub(crate) fn heading(title: &str, subtitle: &str, color: Color, width: usize) -> Vec<String> {
    let mut rows = vec![String::new(), center(&bold(&fg(title, color)), width)];
    let wrap_width = width.saturating_sub(8).clamp(1, 72);
    for line in wrap_words(subtitle, wrap_width) {
        rows.push(center(&fg(&line, Color::Gray), width));
    }
    rows.push(String::new());
    rows
}

/// Width of a centered block: `width` capped at `max`.
pub(crate) fn block_width(width: usize, max: usize) -> usize {
    width.min(max)
}

/// Shifts rows `block` columns wide right so the block sits centered in `width`.
pub(crate) fn centered_block(rows: Vec<String>, block: usize, width: usize) -> Vec<String> {
    let margin = " ".repeat(width.saturating_sub(block) / 2);
    if margin.is_empty() {
        return rows;
    }
    rows.into_iter()
        .map(|row| {
            if row.is_empty() {
                row
            } else {
                format!("{margin}{row}")
            }
        })
        .collect()
}

/// Tags rendered as `[a] [b] [c]`, wrapped to `width`.
pub(crate) fn tags(items: &[&str], width: usize, color: Color) -> Vec<String> {
    let mut rows = Vec::new();
    let mut current = String::new();
    let mut current_width = 0usize;
    for item in items {
        let tag_width = folio_tui::visible_width(item) + 2;
        let separator = usize::from(current_width > 0);
        if current_width > 0 && current_width + separator + tag_width > width {
            rows.push(std::mem::take(&mut current));
            current_width = 0;
        }
        if current_width > 0 {
            current.push(' ');
            current_width += 1;
        }
        current.push_str(&fg(&format!("[{item}]"), color));
        current_width += tag_width;
    }
    if !current.is_empty() {
        rows.push(current);
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::{centered_block, heading, tags};
    use folio_tui::core::text::ansi::strip_ansi;
    use folio_tui::core::text::style::Color;

    #[test]
    fn heading_is_centered_between_blank_rows() {
        let rows = heading("Career Journey", "Five years", Color::Green, 40);
        assert_eq!(rows.first().map(String::as_str), Some(""));
        assert_eq!(rows.last().map(String::as_str), Some(""));
        assert_eq!(strip_ansi(&rows[1]).trim(), "Career Journey");
        assert!(strip_ansi(&rows[1]).starts_with("      "));
    }

    #[test]
    fn tags_wrap_between_items() {
        let rows = tags(&["AWS", "Docker", "Kubernetes"], 16, Color::Gray);
        let plain: Vec<String> = rows.iter().map(|row| strip_ansi(row)).collect();
        assert_eq!(plain, vec!["[AWS] [Docker]", "[Kubernetes]"]);
    }

    #[test]
    fn centered_block_leaves_blank_rows_alone() {
        let rows = centered_block(vec!["ab".to_string(), String::new()], 2, 8);
        assert_eq!(rows, vec!["   ab".to_string(), String::new()]);
    }
}
