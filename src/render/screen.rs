//! Row-diffing full-screen renderer.
//!
//! Invariant: after every `render` the terminal shows exactly `previous_rows`; only rows that
//! differ from that snapshot are rewritten.

use crate::core::output::TerminalCmd;
use crate::core::text::slice::fit_to_width;

const SGR_RESET: &str = "\x1b[0m";
const SYNC_START: &str = "\x1b[?2026h";
const SYNC_END: &str = "\x1b[?2026l";

#[derive(Debug, Default)]
pub struct ScreenRenderer {
    previous_rows: Vec<String>,
    previous_width: usize,
    previous_height: usize,
    force_full_redraw_next: bool,
    full_redraws: usize,
}

impl ScreenRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn request_full_redraw_next(&mut self) {
        self.force_full_redraw_next = true;
    }

    /// Number of full repaints issued so far.
    pub fn full_redraws(&self) -> usize {
        self.full_redraws
    }

    /// Normalizes `rows` to the screen size and returns the commands that bring the terminal
    /// from the previous frame to this one.
    pub fn render(&mut self, rows: Vec<String>, width: usize, height: usize) -> Vec<TerminalCmd> {
        let mut rows: Vec<String> = rows
            .into_iter()
            .take(height)
            .map(|row| fit_to_width(&row, width))
            .collect();
        while rows.len() < height {
            rows.push(" ".repeat(width));
        }

        let full = std::mem::take(&mut self.force_full_redraw_next)
            || self.previous_rows.is_empty()
            || width != self.previous_width
            || height != self.previous_height;

        let changed: Vec<usize> = if full {
            (0..rows.len()).collect()
        } else {
            (0..rows.len())
                .filter(|&idx| self.previous_rows.get(idx) != Some(&rows[idx]))
                .collect()
        };

        let mut cmds = Vec::new();
        if !changed.is_empty() {
            let mut buffer = String::from(SYNC_START);
            if full {
                buffer.push_str("\x1b[2J");
                self.full_redraws += 1;
            }
            for idx in changed {
                buffer.push_str(&format!("\x1b[{};1H", idx + 1));
                buffer.push_str(&rows[idx]);
                buffer.push_str(SGR_RESET);
            }
            buffer.push_str(SYNC_END);
            cmds.push(TerminalCmd::Bytes(buffer));
        }

        self.previous_rows = rows;
        self.previous_width = width;
        self.previous_height = height;
        cmds
    }
}

#[cfg(test)]
mod tests {
    use super::ScreenRenderer;
    use crate::core::output::TerminalCmd;

    fn rows(items: &[&str]) -> Vec<String> {
        items.iter().map(|item| item.to_string()).collect()
    }

    fn payload(cmds: &[TerminalCmd]) -> String {
        cmds.iter().map(TerminalCmd::encode).collect()
    }

    #[test]
    fn first_frame_is_a_full_redraw() {
        let mut renderer = ScreenRenderer::new();
        let out = payload(&renderer.render(rows(&["ab", "cd"]), 2, 3));

        assert!(out.contains("\x1b[2J"));
        assert!(out.contains("\x1b[1;1Hab"));
        assert!(out.contains("\x1b[3;1H  "));
        assert_eq!(renderer.full_redraws(), 1);
    }

    #[test]
    fn unchanged_frame_writes_nothing() {
        let mut renderer = ScreenRenderer::new();
        renderer.render(rows(&["ab", "cd"]), 2, 2);
        assert!(renderer.render(rows(&["ab", "cd"]), 2, 2).is_empty());
    }

    #[test]
    fn only_changed_rows_are_rewritten() {
        let mut renderer = ScreenRenderer::new();
        renderer.render(rows(&["aa", "bb", "cc"]), 2, 3);
        let out = payload(&renderer.render(rows(&["aa", "BB", "cc"]), 2, 3));

        assert!(!out.contains("\x1b[2J"));
        assert!(out.contains("\x1b[2;1HBB"));
        assert!(!out.contains("\x1b[1;1H"));
        assert!(!out.contains("\x1b[3;1H"));
    }

    #[test]
    fn resize_forces_full_redraw() {
        let mut renderer = ScreenRenderer::new();
        renderer.render(rows(&["aa"]), 2, 1);
        renderer.render(rows(&["aa"]), 3, 1);
        assert_eq!(renderer.full_redraws(), 2);
    }
}
