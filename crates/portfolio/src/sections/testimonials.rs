//! Testimonial cards, revealed one after another the first time the section is on screen.

use std::time::{Duration, Instant};

use folio_tui::core::text::style::{bold, dim, fg, italic, Color};
use folio_tui::core::text::slice::wrap_words;
use folio_tui::widgets::{column_count, framed, grid};
use folio_tui::Component;

use super::{heading, tags, Section};
use crate::anchors::SectionId;
use crate::content::{Testimonial, TESTIMONIALS};

const TITLE: &str = "Professional Testimonials";
const SUBTITLE: &str = "What industry professionals say about working with me";

pub const REVEAL_STAGGER: Duration = Duration::from_millis(100);

#[derive(Default)]
pub struct TestimonialsSection {
    revealed_at: Option<Instant>,
    now: Option<Instant>,
}

impl TestimonialsSection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of cards shown so far.
    pub fn revealed(&self) -> usize {
        let (Some(revealed_at), Some(now)) = (self.revealed_at, self.now) else {
            return 0;
        };
        let elapsed = now.saturating_duration_since(revealed_at);
        let steps = (elapsed.as_millis() / REVEAL_STAGGER.as_millis()) as usize;
        (steps + 1).min(TESTIMONIALS.len())
    }

    fn card(testimonial: &Testimonial, card_width: usize) -> Vec<String> {
        let inner = card_width.saturating_sub(4);
        let mut body = vec![fg("❝", Color::Purple)];
        body.extend(
            wrap_words(testimonial.content, inner)
                .into_iter()
                .map(|line| italic(&fg(&line, Color::Gray))),
        );
        body.push(String::new());
        body.push(bold(&fg(testimonial.name, Color::White)));
        body.extend(
            wrap_words(testimonial.role, inner)
                .into_iter()
                .map(|line| fg(&line, Color::Blue)),
        );
        body.push(fg(testimonial.company, Color::Gray));
        body.push(dim(&format!("{} · {}", testimonial.relationship, testimonial.date)));
        body.extend(tags(testimonial.highlights, inner, Color::Green));
        framed(None, &body, card_width, Color::DarkGray)
    }
}

impl Component for TestimonialsSection {
    fn render(&mut self, width: usize) -> Vec<String> {
        let mut rows = heading(TITLE, SUBTITLE, Color::Cyan, width);
        let revealed = self.revealed();
        let columns = column_count(width, 40, 2);
        rows.extend(grid(TESTIMONIALS.len(), columns, width, |index, card_width| {
            let card = Self::card(&TESTIMONIALS[index], card_width);
            if index < revealed {
                card
            } else {
                vec![String::new(); card.len()]
            }
        }));
        rows.push(String::new());
        rows
    }

    fn tick(&mut self, now: Instant) {
        self.now = Some(now);
    }

    fn next_deadline(&self) -> Option<Instant> {
        let revealed_at = self.revealed_at?;
        let shown = self.revealed();
        (shown < TESTIMONIALS.len()).then(|| revealed_at + REVEAL_STAGGER * shown as u32)
    }
}

impl Section for TestimonialsSection {
    fn id(&self) -> Option<SectionId> {
        Some(SectionId::Testimonials)
    }

    fn on_visible(&mut self, now: Instant) {
        if self.revealed_at.is_none() {
            self.revealed_at = Some(now);
            self.now = Some(now);
        }
    }
}
