//! Landing section: a typed `deploy` command, tagline and headline stats.

use std::time::{Duration, Instant};

use contact_terminal::{grapheme_count, visible_prefix, ContactProfile};
use folio_tui::core::text::slice::{center, wrap_words};
use folio_tui::core::text::style::{bold, fg, inverse, italic, Color};
use folio_tui::widgets::{column_count, framed, grid, window};
use folio_tui::Component;

use super::{block_width, centered_block, Section};
use crate::anchors::SectionId;
use crate::content::{HERO_BUTTONS, HERO_PROMPT, HERO_STATS, HERO_STATUS, HERO_TAGLINE};

/// Delay between typed graphemes of the hero command.
pub const HERO_TYPING_INTERVAL: Duration = Duration::from_millis(100);

const WINDOW_MAX_WIDTH: usize = 84;

pub struct HeroSection {
    command: String,
    typed: usize,
    total: usize,
    next_at: Option<Instant>,
}

impl HeroSection {
    pub fn new(profile: &ContactProfile, now: Instant) -> Self {
        let command = format!("deploy --profile \"{}: {}\"", profile.name, profile.title);
        let total = grapheme_count(&command);
        Self {
            command,
            typed: 0,
            total,
            next_at: Some(now + HERO_TYPING_INTERVAL),
        }
    }

    pub fn is_typed(&self) -> bool {
        self.typed >= self.total
    }

    pub fn typed_command(&self) -> &str {
        visible_prefix(&self.command, self.typed)
    }

    fn terminal_body(&self, inner: usize) -> Vec<String> {
        let mut line = format!(
            "{} {}",
            fg(HERO_PROMPT, Color::Green),
            fg(self.typed_command(), Color::White)
        );
        if !self.is_typed() {
            line.push_str(&inverse(" "));
        }
        let mut body = vec![line];
        // Status rows keep their space while the command is still typing.
        for status in HERO_STATUS {
            if self.is_typed() {
                body.extend(
                    wrap_words(status, inner)
                        .into_iter()
                        .map(|row| fg(&row, Color::Green)),
                );
            } else {
                body.extend(wrap_words(status, inner).into_iter().map(|_| String::new()));
            }
        }
        body
    }
}

impl Component for HeroSection {
    fn render(&mut self, width: usize) -> Vec<String> {
        let mut rows = vec![String::new()];

        let window_width = block_width(width, WINDOW_MAX_WIDTH);
        let terminal = window(
            "bash",
            &self.terminal_body(window_width.saturating_sub(4)),
            window_width,
            Color::DarkGray,
        );
        rows.extend(centered_block(terminal, window_width, width));
        rows.push(String::new());

        for line in HERO_TAGLINE {
            rows.push(center(&bold(&italic(&fg(line, Color::White))), width));
        }
        rows.push(String::new());

        let buttons = format!(
            "{}   {}",
            inverse(&fg(&format!(" {} ", HERO_BUTTONS[0]), Color::Green)),
            fg(&format!("[ {} ]", HERO_BUTTONS[1]), Color::Blue)
        );
        rows.push(center(&buttons, width));
        rows.push(String::new());

        let columns = column_count(width, 24, HERO_STATS.len());
        rows.extend(grid(HERO_STATS.len(), columns, width, |index, card_width| {
            let stat = &HERO_STATS[index];
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
        while let Some(at) = self.next_at {
            if at > now {
                break;
            }
            self.typed += 1;
            self.next_at = if self.is_typed() {
                None
            } else {
                Some(at + HERO_TYPING_INTERVAL)
            };
        }
    }

    fn next_deadline(&self) -> Option<Instant> {
        self.next_at
    }
}

impl Section for HeroSection {
    fn id(&self) -> Option<SectionId> {
        Some(SectionId::Hero)
    }
}

#[cfg(test)]
mod tests {
    use super::{HeroSection, HERO_TYPING_INTERVAL};
    use contact_terminal::ContactProfile;
    use folio_tui::core::text::ansi::strip_ansi;
    use folio_tui::Component;
    use std::time::Instant;

    #[test]
    fn command_types_one_grapheme_per_interval() {
        let start = Instant::now();
        let mut hero = HeroSection::new(&ContactProfile::default(), start);
        assert_eq!(hero.typed_command(), "");

        hero.tick(start + HERO_TYPING_INTERVAL * 3);
        assert_eq!(hero.typed_command(), "dep");
        assert_eq!(hero.next_deadline(), Some(start + HERO_TYPING_INTERVAL * 4));

        hero.tick(start + HERO_TYPING_INTERVAL * 500);
        assert!(hero.is_typed());
        assert_eq!(
            hero.typed_command(),
            "deploy --profile \"Pradeep Traje: Senior DevOps Engineer\""
        );
        assert_eq!(hero.next_deadline(), None);
    }

    #[test]
    fn height_is_stable_while_typing() {
        let start = Instant::now();
        let mut hero = HeroSection::new(&ContactProfile::default(), start);
        let before = hero.render(100);
        hero.tick(start + HERO_TYPING_INTERVAL * 500);
        let after = hero.render(100);

        assert_eq!(before.len(), after.len());
        let plain: String = after.iter().map(|row| strip_ansi(row)).collect();
        assert!(plain.contains("✓ Infrastructure orchestration: READY"));
        assert!(!before
            .iter()
            .any(|row| strip_ansi(row).contains("Profile loaded")));
    }
}
