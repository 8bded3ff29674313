//! Terminal trait and lifecycle helpers.

use crate::core::output::{OutputGate, TerminalCmd};

/// Minimal terminal interface for the runtime.
pub trait Terminal {
    /// Start the terminal with input and resize handlers.
    fn start(
        &mut self,
        on_input: Box<dyn FnMut(String) + Send>,
        on_resize: Box<dyn FnMut() + Send>,
    ) -> std::io::Result<()>;

    /// Stop the terminal and restore state.
    fn stop(&mut self) -> std::io::Result<()>;

    /// Drain stdin before exiting to prevent key release leakage over slow connections.
    fn drain_input(&mut self, max_ms: u64, idle_ms: u64);

    /// Write output to the terminal.
    fn write(&mut self, data: &str);

    /// Terminal dimensions.
    fn columns(&self) -> u16;
    fn rows(&self) -> u16;
}

/// Commands that put a full-screen session back the way the shell expects it.
pub fn teardown_cmds() -> Vec<TerminalCmd> {
    vec![
        TerminalCmd::BracketedPasteDisable,
        TerminalCmd::ShowCursor,
        TerminalCmd::LeaveAltScreen,
    ]
}

/// RAII guard that restores the screen, drains input and stops the terminal on drop.
pub struct TerminalGuard<T: Terminal> {
    terminal: Option<T>,
    teardown: Vec<TerminalCmd>,
    max_drain_ms: u64,
    idle_drain_ms: u64,
}

impl<T: Terminal> TerminalGuard<T> {
    /// Create a guard with default drain timings (max 1000ms, idle 50ms).
    pub fn new(terminal: T) -> Self {
        Self {
            terminal: Some(terminal),
            teardown: Vec::new(),
            max_drain_ms: 1000,
            idle_drain_ms: 50,
        }
    }

    /// Commands flushed before the terminal is stopped.
    pub fn with_teardown(mut self, teardown: Vec<TerminalCmd>) -> Self {
        self.teardown = teardown;
        self
    }

    /// Adjust drain timings.
    pub fn set_drain_timings(&mut self, max_ms: u64, idle_ms: u64) {
        self.max_drain_ms = max_ms;
        self.idle_drain_ms = idle_ms;
    }

    /// Access the wrapped terminal, if it has not been taken.
    pub fn terminal_mut(&mut self) -> Option<&mut T> {
        self.terminal.as_mut()
    }

    /// Consume the guard without running cleanup.
    pub fn into_inner(mut self) -> Option<T> {
        self.terminal.take()
    }
}

impl<T: Terminal> Drop for TerminalGuard<T> {
    fn drop(&mut self) {
        if let Some(terminal) = self.terminal.as_mut() {
            let mut gate = OutputGate::new();
            gate.extend(self.teardown.drain(..));
            gate.flush(terminal);
            terminal.drain_input(self.max_drain_ms, self.idle_drain_ms);
            let _ = terminal.stop();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{teardown_cmds, Terminal, TerminalGuard};
    use std::sync::{Arc, Mutex};

    #[derive(Default)]
    struct Trace {
        writes: Vec<String>,
        drains: usize,
        stops: usize,
    }

    struct TraceTerminal(Arc<Mutex<Trace>>);

    impl Terminal for TraceTerminal {
        fn start(
            &mut self,
            _on_input: Box<dyn FnMut(String) + Send>,
            _on_resize: Box<dyn FnMut() + Send>,
        ) -> std::io::Result<()> {
            Ok(())
        }

        fn stop(&mut self) -> std::io::Result<()> {
            self.0.lock().expect("trace lock").stops += 1;
            Ok(())
        }

        fn drain_input(&mut self, _max_ms: u64, _idle_ms: u64) {
            self.0.lock().expect("trace lock").drains += 1;
        }

        fn write(&mut self, data: &str) {
            self.0.lock().expect("trace lock").writes.push(data.to_string());
        }

        fn columns(&self) -> u16 {
            80
        }

        fn rows(&self) -> u16 {
            24
        }
    }

    #[test]
    fn guard_restores_screen_then_stops() {
        let trace = Arc::new(Mutex::new(Trace::default()));
        {
            let _guard = TerminalGuard::new(TraceTerminal(Arc::clone(&trace)))
                .with_teardown(teardown_cmds());
        }

        let trace = trace.lock().expect("trace lock");
        assert_eq!(trace.writes, vec!["\x1b[?2004l\x1b[?25h\x1b[?1049l".to_string()]);
        assert_eq!(trace.drains, 1);
        assert_eq!(trace.stops, 1);
    }

    #[test]
    fn into_inner_skips_cleanup() {
        let trace = Arc::new(Mutex::new(Trace::default()));
        let guard = TerminalGuard::new(TraceTerminal(Arc::clone(&trace)));
        let _terminal = guard.into_inner();

        assert_eq!(trace.lock().expect("trace lock").stops, 0);
    }
}
