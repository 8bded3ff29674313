//! The contact terminal: a command log with typewriter playback and an input line.

use std::time::Instant;

use contact_terminal::{
    ContactProfile, LineKind, OutputLine, PacingConfig, PlaybackEvent, SubmitOutcome,
    TerminalSession,
};
use folio_tui::core::text::slice::{center, wrap_words};
use folio_tui::core::text::style::{dim, fg, inverse, Color};
use folio_tui::widgets::window;
use folio_tui::{visible_width, Component, LineInput};

use super::{block_width, centered_block, heading, Section};
use crate::anchors::SectionId;

const TITLE: &str = "Contact Terminal";
const SUBTITLE: &str = "Interactive CLI interface for getting in touch. Try typing \"help\" to see available commands.";
const WINDOW_MAX_WIDTH: usize = 92;

/// Log rows kept on screen; older output scrolls off the top.
pub const LOG_HEIGHT: usize = 14;

/// Quick buttons: label and the command they put in the input line.
pub const QUICK_COMMANDS: [(&str, &str); 4] = [
    ("Email", "contact --email"),
    ("LinkedIn", "contact --linkedin"),
    ("GitHub", "contact --github"),
    ("Resume", "download --resume"),
];

fn line_color(kind: LineKind) -> Color {
    match kind {
        LineKind::System => Color::Cyan,
        LineKind::Prompt => Color::Blue,
        LineKind::Input => Color::White,
        LineKind::Output => Color::Gray,
        LineKind::Success => Color::Green,
        LineKind::Error => Color::Red,
    }
}

pub struct ContactSection {
    session: TerminalSession,
    input: LineInput,
}

impl ContactSection {
    pub fn new(profile: &ContactProfile, pacing: PacingConfig) -> Self {
        Self::with_session(TerminalSession::new(profile, pacing))
    }

    pub fn with_session(session: TerminalSession) -> Self {
        Self {
            session,
            input: LineInput::new(),
        }
    }

    pub fn session(&self) -> &TerminalSession {
        &self.session
    }

    pub fn input(&self) -> &LineInput {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut LineInput {
        &mut self.input
    }

    /// Submits the input line.
    ///
    /// The line is kept when the session is busy so it can be sent once playback finishes.
    pub fn submit(&mut self, now: Instant) -> SubmitOutcome {
        let raw = self.input.value().to_string();
        let outcome = self.session.submit(&raw, now);
        match outcome {
            SubmitOutcome::Accepted | SubmitOutcome::Cleared => {
                tracing::info!(command = raw.trim(), ?outcome, "command submitted");
                self.input.take();
            }
            SubmitOutcome::Ignored(reason) => {
                tracing::debug!(?reason, "submission ignored");
                if !self.session.is_typing() {
                    self.input.take();
                }
            }
        }
        outcome
    }

    /// Puts quick command `index` in the input line.
    pub fn fill(&mut self, index: usize) -> bool {
        let Some((_, command)) = QUICK_COMMANDS.get(index) else {
            return false;
        };
        self.input.set_value(*command);
        true
    }

    pub fn advance(&mut self, now: Instant) -> Vec<PlaybackEvent> {
        self.session.advance(now)
    }

    pub fn clear(&mut self) {
        self.session.clear();
    }

    fn log_rows(&self, inner: usize) -> Vec<String> {
        let lines = self.session.log();
        // The trailing prompt is drawn by the input row.
        let shown = match lines.last() {
            Some(last) if last.kind == LineKind::Prompt && !self.session.is_typing() => {
                &lines[..lines.len() - 1]
            }
            _ => lines,
        };

        let mut rows: Vec<String> = shown
            .iter()
            .flat_map(|line| self.line_rows(line, inner))
            .collect();
        if rows.len() > LOG_HEIGHT {
            rows.drain(..rows.len() - LOG_HEIGHT);
        }
        let mut padded = vec![String::new(); LOG_HEIGHT - rows.len()];
        padded.extend(rows);
        padded
    }

    fn line_rows(&self, line: &OutputLine, inner: usize) -> Vec<String> {
        let text = self.session.visible_text(line);
        let color = line_color(line.kind);
        let mut rows: Vec<String> = if visible_width(text) <= inner {
            vec![text.to_string()]
        } else {
            wrap_words(text, inner)
        };
        rows = rows.into_iter().map(|row| fg(&row, color)).collect();
        if !line.complete {
            if let Some(last) = rows.last_mut() {
                last.push_str(&inverse(" "));
            }
        }
        rows
    }

    fn quick_buttons() -> String {
        QUICK_COMMANDS
            .iter()
            .enumerate()
            .map(|(idx, (label, _))| {
                format!("{} {}", dim(&format!("F{}", idx + 1)), fg(&format!("[{label}]"), Color::Green))
            })
            .collect::<Vec<_>>()
            .join("  ")
    }
}

impl Component for ContactSection {
    fn render(&mut self, width: usize) -> Vec<String> {
        let mut rows = heading(TITLE, SUBTITLE, Color::Green, width);

        let window_width = block_width(width, WINDOW_MAX_WIDTH);
        let inner = window_width.saturating_sub(4);
        let busy = self.session.is_typing();
        self.input.set_focused(!busy);

        let mut body = self.log_rows(inner);
        body.push(if busy {
            dim(&fg("Processing command...", Color::Yellow))
        } else {
            String::new()
        });
        let prompt = format!("{} ", fg(self.session.prompt(), Color::Blue));
        body.push(self.input.render(&prompt, inner));

        rows.extend(centered_block(
            window("contact-terminal", &body, window_width, Color::Green),
            window_width,
            width,
        ));
        rows.push(String::new());
        rows.push(center(&Self::quick_buttons(), width));
        rows.push(String::new());
        rows
    }

    fn next_deadline(&self) -> Option<Instant> {
        self.session.next_deadline()
    }
}

impl Section for ContactSection {
    fn id(&self) -> Option<SectionId> {
        Some(SectionId::Contact)
    }
}
