//! One contact-terminal session: the log, the typing queue and the playback clock.

use std::collections::VecDeque;
use std::time::Instant;

use crate::command::{CommandEntry, SideEffect};
use crate::dispatcher::{Dispatch, Dispatcher};
use crate::line::{LineContent, LineKind, OutputLine};
use crate::pacing::{Pacer, PacingConfig};
use crate::profile::ContactProfile;
use crate::typing::{grapheme_count, nth_grapheme, visible_prefix, PlaybackEvent, PlaybackState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    Empty,
    /// A previous command is still playing back.
    Busy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Accepted,
    Cleared,
    Ignored(IgnoreReason),
}

/// Session state owned by the contact terminal view.
///
/// Invariants: only the last line of the log can be incomplete, and queued lines are revealed
/// in FIFO order. Pending actions run only after every queued line is complete.
#[derive(Debug, Clone)]
pub struct TerminalSession {
    dispatcher: Dispatcher,
    banner: [String; 2],
    prompt: String,
    log: Vec<OutputLine>,
    queue: VecDeque<LineContent>,
    pending: Vec<SideEffect>,
    state: PlaybackState,
    next_at: Option<Instant>,
    pacer: Pacer,
}

impl TerminalSession {
    pub fn new(profile: &ContactProfile, pacing: PacingConfig) -> Self {
        Self::with_pacer(profile, Pacer::new(pacing))
    }

    pub fn with_pacer(profile: &ContactProfile, pacer: Pacer) -> Self {
        let mut session = Self {
            dispatcher: Dispatcher::new(profile),
            banner: profile.banner(),
            prompt: profile.prompt.clone(),
            log: Vec::new(),
            queue: VecDeque::new(),
            pending: Vec::new(),
            state: PlaybackState::Idle,
            next_at: None,
            pacer,
        };
        session.reset_log();
        session
    }

    pub fn log(&self) -> &[OutputLine] {
        &self.log
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn is_typing(&self) -> bool {
        !self.state.is_idle()
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn commands(&self) -> &[CommandEntry] {
        self.dispatcher.commands()
    }

    /// Lines handed to the session but not yet started.
    pub fn queued(&self) -> impl Iterator<Item = &LineContent> {
        self.queue.iter()
    }

    /// Actions of the current command that have not run yet.
    pub fn pending_actions(&self) -> &[SideEffect] {
        match self.state {
            PlaybackState::Draining { next_action } => {
                &self.pending[next_action.min(self.pending.len())..]
            }
            _ => &self.pending,
        }
    }

    /// The part of `line` that is currently visible.
    pub fn visible_text<'a>(&self, line: &'a OutputLine) -> &'a str {
        if line.complete {
            return &line.text;
        }
        match self.state {
            PlaybackState::Typing {
                line_id,
                grapheme_index,
            } if line_id == line.id => visible_prefix(&line.text, grapheme_index),
            _ => "",
        }
    }

    /// When `advance` next has work to do.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.next_at
    }

    /// Handles one submitted input line.
    ///
    /// `clear` is honored at any time; anything else is ignored while a previous command is
    /// still playing back.
    pub fn submit(&mut self, raw: &str, now: Instant) -> SubmitOutcome {
        if raw.trim().is_empty() {
            return SubmitOutcome::Ignored(IgnoreReason::Empty);
        }
        if self.dispatcher.is_clear(raw) {
            self.clear();
            return SubmitOutcome::Cleared;
        }
        if self.is_typing() {
            tracing::debug!(input = raw, "ignoring submission while typing");
            return SubmitOutcome::Ignored(IgnoreReason::Busy);
        }

        self.log.push(OutputLine::revealed(LineContent::new(
            LineKind::Input,
            format!("$ {raw}"),
        )));
        match self.dispatcher.dispatch(raw) {
            Dispatch::Clear => {
                self.clear();
                return SubmitOutcome::Cleared;
            }
            Dispatch::Respond { lines, actions } => {
                self.queue.extend(lines);
                self.pending = actions;
            }
        }
        self.schedule_next(now);
        SubmitOutcome::Accepted
    }

    /// Drops all output, queued lines and pending actions and shows the banner again.
    pub fn clear(&mut self) {
        tracing::debug!(dropped_actions = self.pending.len(), "terminal cleared");
        self.queue.clear();
        self.pending.clear();
        self.state = PlaybackState::Idle;
        self.next_at = None;
        self.reset_log();
    }

    /// Runs every step due at or before `now`, in order.
    pub fn advance(&mut self, now: Instant) -> Vec<PlaybackEvent> {
        let mut events = Vec::new();
        while let Some(at) = self.next_at {
            if at > now {
                break;
            }
            self.step(at, &mut events);
        }
        events
    }

    fn step(&mut self, at: Instant, events: &mut Vec<PlaybackEvent>) {
        match self.state {
            PlaybackState::Idle => self.next_at = None,
            PlaybackState::Typing {
                line_id,
                grapheme_index,
            } => {
                let Some(line) = self.log.last_mut().filter(|line| line.id == line_id) else {
                    self.schedule_next(at);
                    return;
                };
                let total = grapheme_count(&line.text);
                let revealed = nth_grapheme(&line.text, grapheme_index).map(str::to_string);
                let next_index = (grapheme_index + 1).min(total);

                if let Some(grapheme) = revealed.as_deref() {
                    if !grapheme.trim().is_empty() {
                        events.push(PlaybackEvent::Keystroke);
                    }
                }

                if next_index >= total {
                    line.complete = true;
                    events.push(PlaybackEvent::LineCompleted(line_id));
                    self.schedule_next(at);
                    return;
                }

                self.state = PlaybackState::Typing {
                    line_id,
                    grapheme_index: next_index,
                };
                let delay = revealed
                    .as_deref()
                    .map(|grapheme| self.pacer.grapheme_delay(grapheme))
                    .unwrap_or_default();
                self.next_at = Some(at + delay);
            }
            PlaybackState::Draining { next_action } => {
                if let Some(action) = self.pending.get(next_action).cloned() {
                    tracing::debug!(?action, "running pending action");
                    events.push(PlaybackEvent::Action(action));
                    let following = next_action + 1;
                    self.state = PlaybackState::Draining {
                        next_action: following,
                    };
                    self.next_at = if following < self.pending.len() {
                        Some(at + self.pacer.action_gap())
                    } else {
                        Some(at)
                    };
                    return;
                }

                self.pending.clear();
                self.push_prompt();
                self.state = PlaybackState::Idle;
                self.next_at = None;
                events.push(PlaybackEvent::Ready);
            }
        }
    }

    /// Starts the next queued line, or moves on to the pending actions.
    fn schedule_next(&mut self, at: Instant) {
        if let Some(content) = self.queue.pop_front() {
            let line = OutputLine::pending(content);
            self.state = PlaybackState::Typing {
                line_id: line.id,
                grapheme_index: 0,
            };
            self.log.push(line);
            self.next_at = Some(at + self.pacer.line_gap());
            return;
        }

        self.state = PlaybackState::Draining { next_action: 0 };
        self.next_at = if self.pending.is_empty() {
            Some(at)
        } else {
            Some(at + self.pacer.action_gap())
        };
    }

    fn reset_log(&mut self) {
        self.log.clear();
        for text in self.banner.clone() {
            self.log.push(OutputLine::revealed(LineContent::system(text)));
        }
        self.push_prompt();
    }

    fn push_prompt(&mut self) {
        self.log.push(OutputLine::revealed(LineContent::new(
            LineKind::Prompt,
            self.prompt.clone(),
        )));
    }
}

#[cfg(test)]
mod tests {
    use super::{IgnoreReason, SubmitOutcome, TerminalSession};
    use crate::line::LineKind;
    use crate::pacing::{Pacer, PacingConfig};
    use crate::profile::ContactProfile;
    use crate::typing::PlaybackState;
    use std::time::{Duration, Instant};

    fn session() -> TerminalSession {
        TerminalSession::with_pacer(
            &ContactProfile::default(),
            Pacer::seeded(PacingConfig::default(), 11),
        )
    }

    #[test]
    fn starts_with_banner_and_prompt() {
        let session = session();
        let kinds: Vec<LineKind> = session.log().iter().map(|line| line.kind).collect();
        assert_eq!(kinds, vec![LineKind::System, LineKind::System, LineKind::Prompt]);
        assert_eq!(session.log()[2].text, "pradeep@contact:~$");
        assert!(!session.is_typing());
        assert_eq!(session.next_deadline(), None);
    }

    #[test]
    fn whitespace_is_ignored() {
        let mut session = session();
        assert_eq!(
            session.submit("   ", Instant::now()),
            SubmitOutcome::Ignored(IgnoreReason::Empty)
        );
        assert_eq!(session.log().len(), 3);
    }

    #[test]
    fn submit_echoes_and_schedules_first_line() {
        let mut session = session();
        let now = Instant::now();
        assert_eq!(session.submit("whoami", now), SubmitOutcome::Accepted);

        let log = session.log();
        assert_eq!(log[3].kind, LineKind::Input);
        assert_eq!(log[3].text, "$ whoami");
        assert!(!log[4].complete);
        assert_eq!(session.visible_text(&log[4]), "");
        assert_eq!(session.next_deadline(), Some(now + Duration::from_millis(90)));
    }

    #[test]
    fn reveal_is_gradual() {
        let mut session = session();
        let now = Instant::now();
        session.submit("whoami", now);

        session.advance(now + Duration::from_millis(90));
        let line = session.log().last().cloned().expect("line");
        assert_eq!(session.visible_text(&line), "P");
        assert!(matches!(
            session.state(),
            PlaybackState::Typing { grapheme_index: 1, .. }
        ));
    }

    #[test]
    fn advancing_far_enough_returns_to_idle_with_prompt() {
        let mut session = session();
        let now = Instant::now();
        session.submit("status", now);
        session.advance(now + Duration::from_secs(120));

        assert!(!session.is_typing());
        assert!(session.log().iter().all(|line| line.complete));
        assert_eq!(
            session.log().last().map(|line| line.kind),
            Some(LineKind::Prompt)
        );
    }
}
