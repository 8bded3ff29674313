//! Project cards.

use folio_tui::core::text::slice::{center, wrap_words};
use folio_tui::core::text::style::{bold, dim, fg, underline, Color};
use folio_tui::widgets::{column_count, framed, grid};
use folio_tui::Component;

use super::{heading, tags, Section};
use crate::anchors::SectionId;
use crate::content::{Project, PROJECTS};

const TITLE: &str = "Project Showcase";
const SUBTITLE: &str =
    "Real-world solutions that have transformed infrastructure operations at scale";

pub struct ProjectsSection {
    github_url: String,
}

impl ProjectsSection {
    pub fn new(github_url: impl Into<String>) -> Self {
        Self {
            github_url: github_url.into(),
        }
    }

    fn card(project: &Project, card_width: usize) -> Vec<String> {
        let inner = card_width.saturating_sub(4);
        let mut body: Vec<String> = wrap_words(project.title, inner)
            .into_iter()
            .map(|line| bold(&fg(&line, Color::White)))
            .collect();
        body.push(fg(&format!("⎇ {}", project.repository), Color::DarkGray));
        body.push(String::new());
        body.extend(
            wrap_words(project.description, inner)
                .into_iter()
                .map(|line| fg(&line, Color::Gray)),
        );
        body.push(String::new());
        body.extend(tags(project.technologies, inner, project.color));
        body.push(fg(&format!("↗ {}", project.impact), Color::Green));
        body.push(dim(&format!(
            "★ {}  ◉ {}  Updated recently",
            project.stars, project.views
        )));
        framed(None, &body, card_width, project.color)
    }
}

impl Component for ProjectsSection {
    fn render(&mut self, width: usize) -> Vec<String> {
        let mut rows = heading(TITLE, SUBTITLE, Color::Purple, width);
        let columns = column_count(width, 34, 3);
        rows.extend(grid(PROJECTS.len(), columns, width, |index, card_width| {
            Self::card(&PROJECTS[index], card_width)
        }));
        rows.push(String::new());
        rows.push(center(
            &format!(
                "{} {}",
                bold(&fg("View All Projects on GitHub →", Color::Green)),
                underline(&fg(&self.github_url, Color::Blue))
            ),
            width,
        ));
        rows.push(String::new());
        rows
    }
}

impl Section for ProjectsSection {
    fn id(&self) -> Option<SectionId> {
        Some(SectionId::Projects)
    }
}
