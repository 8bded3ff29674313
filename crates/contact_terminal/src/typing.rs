//! Playback states and the events a step can produce.

use unicode_segmentation::UnicodeSegmentation;

use crate::command::SideEffect;
use crate::line::LineId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackState {
    /// Waiting for input; the prompt is the last line of the log.
    Idle,
    /// Revealing `line_id`; `grapheme_index` graphemes are visible so far.
    Typing {
        line_id: LineId,
        grapheme_index: usize,
    },
    /// All lines shown; running pending actions starting at `next_action`.
    Draining { next_action: usize },
}

impl PlaybackState {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaybackEvent {
    /// A non-blank grapheme became visible.
    Keystroke,
    LineCompleted(LineId),
    /// Run this action now.
    Action(SideEffect),
    /// The prompt is back; new input is accepted.
    Ready,
}

pub fn grapheme_count(text: &str) -> usize {
    text.graphemes(true).count()
}

pub(crate) fn nth_grapheme(text: &str, index: usize) -> Option<&str> {
    text.graphemes(true).nth(index)
}

/// The first `count` graphemes of `text`.
pub fn visible_prefix(text: &str, count: usize) -> &str {
    match text.grapheme_indices(true).nth(count) {
        Some((offset, _)) => &text[..offset],
        None => text,
    }
}
