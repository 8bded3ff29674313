//! Three principle cards and a pipeline status window.

use folio_tui::core::text::slice::{center, wrap_words};
use folio_tui::core::text::style::{bold, fg, Color};
use folio_tui::widgets::{column_count, framed, grid, progress_bar, window};
use folio_tui::{pad_to_width, Component};

use super::{block_width, centered_block, heading, Section};
use crate::anchors::SectionId;
use crate::content::{PIPELINE_STAGES, PRINCIPLES};

const TITLE: &str = "DevOps Philosophy";
const SUBTITLE: &str =
    "Three core principles that guide every architectural decision and automation strategy";
const PIPELINE_MAX_WIDTH: usize = 72;
const STAGE_LABEL_WIDTH: usize = 20;

#[derive(Default)]
pub struct PhilosophySection;

impl PhilosophySection {
    pub fn new() -> Self {
        Self
    }

    fn pipeline(width: usize) -> Vec<String> {
        let inner = width.saturating_sub(4);
        let bar_width = inner.saturating_sub(STAGE_LABEL_WIDTH + 3);
        let body: Vec<String> = PIPELINE_STAGES
            .iter()
            .map(|stage| {
                format!(
                    "{}{} {}",
                    pad_to_width(&fg(stage, Color::Gray), STAGE_LABEL_WIDTH),
                    progress_bar(1.0, bar_width, Color::Green),
                    fg("✓", Color::Green)
                )
            })
            .collect();
        window("CI/CD Pipeline Status", &body, width, Color::DarkGray)
    }
}

impl Component for PhilosophySection {
    fn render(&mut self, width: usize) -> Vec<String> {
        let mut rows = heading(TITLE, SUBTITLE, Color::Green, width);

        let columns = column_count(width, 28, PRINCIPLES.len());
        rows.extend(grid(PRINCIPLES.len(), columns, width, |index, card_width| {
            let principle = &PRINCIPLES[index];
            let inner = card_width.saturating_sub(4);
            let mut body = vec![center(&bold(&fg(principle.title, principle.color)), inner)];
            body.push(String::new());
            body.extend(
                wrap_words(principle.description, inner)
                    .into_iter()
                    .map(|line| center(&fg(&line, Color::Gray), inner)),
            );
            framed(None, &body, card_width, principle.color)
        }));
        rows.push(String::new());

        let pipeline_width = block_width(width, PIPELINE_MAX_WIDTH);
        rows.extend(centered_block(
            Self::pipeline(pipeline_width),
            pipeline_width,
            width,
        ));
        rows.push(String::new());
        rows
    }
}

impl Section for PhilosophySection {
    fn id(&self) -> Option<SectionId> {
        Some(SectionId::Philosophy)
    }
}
