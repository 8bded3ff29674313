//! Skill categories with level bars that fill in once the section scrolls into view.

use std::time::{Duration, Instant};

use folio_tui::core::text::slice::center;
use folio_tui::core::text::style::{bold, dim, fg, Color};
use folio_tui::widgets::{column_count, framed, grid, progress_bar};
use folio_tui::{visible_width, Component};

use super::{heading, FRAME_INTERVAL, Section};
use crate::anchors::SectionId;
use crate::content::{ARSENAL_STATS, CERTIFICATIONS, SKILL_CATEGORIES};

const TITLE: &str = "Technical Arsenal";
const SUBTITLE: &str =
    "Comprehensive toolkit spanning DevOps automation, cloud infrastructure, and UI/UX development";

pub const BAR_FILL_DURATION: Duration = Duration::from_millis(1000);
const CATEGORY_STAGGER: Duration = Duration::from_millis(100);
const SKILL_STAGGER: Duration = Duration::from_millis(50);

#[derive(Default)]
pub struct ArsenalSection {
    revealed_at: Option<Instant>,
    now: Option<Instant>,
}

impl ArsenalSection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed_at.is_some()
    }

    fn bar_delay(category: usize, skill: usize) -> Duration {
        CATEGORY_STAGGER * category as u32 + SKILL_STAGGER * skill as u32
    }

    /// How far the bar for `skill` in `category` has filled, `0.0..=1.0` of its level.
    pub fn bar_progress(&self, category: usize, skill: usize) -> f64 {
        let (Some(revealed), Some(now)) = (self.revealed_at, self.now) else {
            return 0.0;
        };
        let start = revealed + Self::bar_delay(category, skill);
        let elapsed = now.saturating_duration_since(start);
        (elapsed.as_secs_f64() / BAR_FILL_DURATION.as_secs_f64()).min(1.0)
    }

    fn animation_end(&self) -> Option<Instant> {
        let revealed = self.revealed_at?;
        let last_category = SKILL_CATEGORIES.len() - 1;
        let last_skill = SKILL_CATEGORIES[last_category].skills.len() - 1;
        Some(revealed + Self::bar_delay(last_category, last_skill) + BAR_FILL_DURATION)
    }

    fn category_card(&self, index: usize, card_width: usize) -> Vec<String> {
        let category = &SKILL_CATEGORIES[index];
        let inner = card_width.saturating_sub(4);
        let mut body = vec![bold(&fg(category.title, category.color)), String::new()];
        for (skill_index, skill) in category.skills.iter().enumerate() {
            let level = format!("{}%", skill.level);
            let gap = inner.saturating_sub(visible_width(skill.name) + level.len());
            body.push(format!(
                "{}{}{}",
                fg(skill.name, Color::White),
                " ".repeat(gap),
                fg(&level, category.color)
            ));
            let fraction =
                f64::from(skill.level) / 100.0 * self.bar_progress(index, skill_index);
            body.push(progress_bar(fraction, inner, category.color));
            body.push(dim(skill.description));
        }
        framed(None, &body, card_width, Color::DarkGray)
    }
}

impl Component for ArsenalSection {
    fn render(&mut self, width: usize) -> Vec<String> {
        let mut rows = heading(TITLE, SUBTITLE, Color::Blue, width);

        let columns = column_count(width, 36, 2);
        rows.extend(grid(SKILL_CATEGORIES.len(), columns, width, |index, card_width| {
            self.category_card(index, card_width)
        }));
        rows.push(String::new());

        rows.push(center(&bold(&fg("Certifications", Color::White)), width));
        for certification in &CERTIFICATIONS {
            rows.push(center(
                &fg(&format!("◆ {}", certification.title), certification.color),
                width,
            ));
        }
        rows.push(String::new());

        let columns = column_count(width, 18, ARSENAL_STATS.len());
        rows.extend(grid(ARSENAL_STATS.len(), columns, width, |index, card_width| {
            let stat = &ARSENAL_STATS[index];
            let inner = card_width.saturating_sub(4);
            let body = vec![
                center(&bold(&fg(stat.value, stat.color)), inner),
                center(&fg(stat.label, Color::Gray), inner),
            ];
            framed(None, &body, card_width, Color::DarkGray)
        }));
        rows.push(String::new());
        rows
    }

    fn tick(&mut self, now: Instant) {
        self.now = Some(now);
    }

    fn next_deadline(&self) -> Option<Instant> {
        let end = self.animation_end()?;
        let now = self.now?;
        (now < end).then(|| now + FRAME_INTERVAL)
    }
}

impl Section for ArsenalSection {
    fn id(&self) -> Option<SectionId> {
        Some(SectionId::Arsenal)
    }

    fn on_visible(&mut self, now: Instant) {
        if self.revealed_at.is_none() {
            tracing::debug!("skill bars revealed");
            self.revealed_at = Some(now);
            self.now = Some(now);
        }
    }
}
