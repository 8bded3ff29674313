//! Career timeline.

use folio_tui::core::text::style::{bold, dim, fg, Color};
use folio_tui::core::text::slice::wrap_words;
use folio_tui::Component;

use super::{block_width, centered_block, heading, tags, Section};
use crate::anchors::SectionId;
use crate::content::{Position, POSITIONS};

const TITLE: &str = "Career Journey";
const SUBTITLE: &str = "5+ years of experience bridging DevOps automation with UI/UX development";
const TIMELINE_MAX_WIDTH: usize = 96;

#[derive(Default)]
pub struct CareerSection;

impl CareerSection {
    pub fn new() -> Self {
        Self
    }

    fn entry(position: &Position, width: usize, last: bool) -> Vec<String> {
        let rail = fg("│ ", position.color);
        let inner = width.saturating_sub(2);
        let mut rows = vec![format!(
            "{}{}",
            fg("● ", position.color),
            bold(&fg(position.title, position.color))
        )];
        let mut body: Vec<String> = wrap_words(position.company, inner)
            .into_iter()
            .map(|line| fg(&line, Color::White))
            .collect();
        body.push(dim(&format!("{} | {}", position.duration, position.location)));
        body.push(String::new());
        for achievement in position.achievements {
            // Hanging indent under the bullet.
            for (idx, line) in wrap_words(achievement, inner.saturating_sub(2))
                .into_iter()
                .enumerate()
            {
                let bullet = if idx == 0 { "▸ " } else { "  " };
                body.push(format!("{}{}", fg(bullet, position.color), fg(&line, Color::Gray)));
            }
        }
        body.push(String::new());
        body.extend(tags(position.technologies, inner, Color::Gray));
        if !last {
            body.push(String::new());
        }
        rows.extend(body.into_iter().map(|line| format!("{rail}{line}")));
        rows
    }
}

impl Component for CareerSection {
    fn render(&mut self, width: usize) -> Vec<String> {
        let mut rows = heading(TITLE, SUBTITLE, Color::Orange, width);
        let timeline_width = block_width(width, TIMELINE_MAX_WIDTH);
        let mut timeline = Vec::new();
        for (idx, position) in POSITIONS.iter().enumerate() {
            timeline.extend(Self::entry(position, timeline_width, idx + 1 == POSITIONS.len()));
        }
        rows.extend(centered_block(timeline, timeline_width, width));
        rows.push(String::new());
        rows
    }
}

impl Section for CareerSection {
    fn id(&self) -> Option<SectionId> {
        Some(SectionId::Career)
    }
}

#[cfg(test)]
mod tests {
    use super::CareerSection;
    use folio_tui::core::text::ansi::strip_ansi;
    use folio_tui::{visible_width, Component};

    #[test]
    fn timeline_lists_positions_in_order() {
        let rows = CareerSection::new().render(100);
        let plain: Vec<String> = rows.iter().map(|row| strip_ansi(row)).collect();
        let titles: Vec<usize> = plain
            .iter()
            .enumerate()
            .filter(|(_, row)| row.trim_start().starts_with('●'))
            .map(|(idx, _)| idx)
            .collect();
        assert_eq!(titles.len(), 3);
        assert!(plain[titles[0]].contains("DevOps Engineer & Senior UI/UX Developer"));
        assert!(plain[titles[2]].contains("Trader | Trainer | Associate Partner"));
        assert!(rows.iter().all(|row| visible_width(row) <= 100));
    }
}
