//! Component and root-view traits.

use std::time::Instant;

use crate::core::input_event::InputEvent;
use crate::core::output::TerminalCmd;

/// Renderable piece of a document.
///
/// Components are laid out top to bottom; each returns fully styled rows no wider than
/// `width` columns. Animated components report when they next need a tick.
pub trait Component {
    /// Render to a list of lines at the given width.
    fn render(&mut self, width: usize) -> Vec<String>;

    /// Advance time-based state to `now`.
    fn tick(&mut self, _now: Instant) {}

    /// Earliest instant at which `tick` would change the rendered output.
    fn next_deadline(&self) -> Option<Instant> {
        None
    }

    /// Invalidate any cached state.
    fn invalidate(&mut self) {}
}

/// The single view that owns the whole screen.
///
/// The runtime drives it: events in, ticks on deadlines, a frame of exactly `height` rows out.
pub trait RootView {
    fn handle_event(&mut self, event: &InputEvent, now: Instant);

    fn tick(&mut self, now: Instant);

    fn next_deadline(&self) -> Option<Instant>;

    /// Produce the visible rows for a `width` x `height` screen.
    fn render_screen(&mut self, width: usize, height: usize) -> Vec<String>;

    /// Out-of-band terminal commands (clipboard, bell, title) requested since the last call.
    fn take_terminal_cmds(&mut self) -> Vec<TerminalCmd> {
        Vec::new()
    }

    fn should_exit(&self) -> bool;
}
