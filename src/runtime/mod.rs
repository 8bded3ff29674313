//! Full-screen runtime: one event loop driving a [`RootView`].
//!
//! Input and resize notifications arrive from the terminal's threads over a channel. The loop
//! sleeps until the next event or the view's next animation deadline, whichever comes first,
//! then renders once. All output goes through one [`OutputGate`].

use std::io;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::time::{Duration, Instant};

use crate::config::EnvConfig;
use crate::core::component::RootView;
use crate::core::input_event::{parse_input_events, InputEvent};
use crate::core::output::{OutputGate, TerminalCmd};
use crate::core::terminal::{teardown_cmds, Terminal};
use crate::render::ScreenRenderer;

const STOP_DRAIN_MAX_MS: u64 = 1000;
const STOP_DRAIN_IDLE_MS: u64 = 50;
/// Upper bound on a single wait when the view has no pending deadline.
const IDLE_WAIT: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, PartialEq, Eq)]
enum Wake {
    Input(String),
    Resize,
}

pub struct Runtime<T: Terminal> {
    terminal: T,
    output: OutputGate,
    renderer: ScreenRenderer,
    sender: Sender<Wake>,
    receiver: Receiver<Wake>,
    alt_screen: bool,
    title: Option<String>,
    started: bool,
}

impl<T: Terminal> Runtime<T> {
    pub fn new(terminal: T, config: &EnvConfig) -> Self {
        let (sender, receiver) = mpsc::channel();
        Self {
            terminal,
            output: OutputGate::new(),
            renderer: ScreenRenderer::new(),
            sender,
            receiver,
            alt_screen: !config.no_alt_screen,
            title: None,
            started: false,
        }
    }

    /// Window title written when the runtime starts.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn terminal(&self) -> &T {
        &self.terminal
    }

    pub fn terminal_mut(&mut self) -> &mut T {
        &mut self.terminal
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    /// Put the terminal into raw mode and prepare the screen.
    pub fn start(&mut self) -> io::Result<()> {
        if self.started {
            return Ok(());
        }
        let input_tx = self.sender.clone();
        let resize_tx = self.sender.clone();
        self.terminal.start(
            Box::new(move |data| {
                let _ = input_tx.send(Wake::Input(data));
            }),
            Box::new(move || {
                let _ = resize_tx.send(Wake::Resize);
            }),
        )?;
        self.started = true;

        self.output.clear();
        if self.alt_screen {
            self.output.push(TerminalCmd::EnterAltScreen);
        }
        self.output.push(TerminalCmd::ClearScreen);
        self.output.push(TerminalCmd::HideCursor);
        self.output.push(TerminalCmd::BracketedPasteEnable);
        if let Some(title) = self.title.clone() {
            self.output.push(TerminalCmd::SetTitle(title));
        }
        self.output.flush(&mut self.terminal);
        self.renderer.request_full_redraw_next();
        tracing::info!(alt_screen = self.alt_screen, "runtime started");
        Ok(())
    }

    /// Restore the screen and leave raw mode. Safe to call more than once.
    pub fn stop(&mut self) -> io::Result<()> {
        if !self.started {
            return Ok(());
        }
        self.started = false;
        if self.alt_screen {
            self.output.extend(teardown_cmds());
        } else {
            self.output.push(TerminalCmd::BracketedPasteDisable);
            self.output.push(TerminalCmd::ShowCursor);
            self.output
                .push(TerminalCmd::bytes(format!("\x1b[{};1H\r\n", self.terminal.rows())));
        }
        self.output.flush(&mut self.terminal);
        self.terminal
            .drain_input(STOP_DRAIN_MAX_MS, STOP_DRAIN_IDLE_MS);
        tracing::info!("runtime stopped");
        self.terminal.stop()
    }

    /// Run until the view asks to exit.
    pub fn run<V: RootView>(&mut self, view: &mut V) -> io::Result<()> {
        self.start()?;
        self.render(view);
        while !view.should_exit() {
            self.run_once(view, IDLE_WAIT);
        }
        self.stop()
    }

    /// Wait for one batch of work (at most `max_wait`, or until the view's next deadline),
    /// handle it, then render one frame.
    pub fn run_once<V: RootView>(&mut self, view: &mut V, max_wait: Duration) {
        let now = Instant::now();
        let wait = match view.next_deadline() {
            Some(deadline) => deadline.saturating_duration_since(now).min(max_wait),
            None => max_wait,
        };

        let mut batch = Vec::new();
        match self.receiver.recv_timeout(wait) {
            Ok(wake) => batch.push(wake),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => {
                tracing::warn!("terminal event channel closed");
            }
        }
        batch.extend(self.receiver.try_iter());

        for wake in batch {
            self.dispatch(view, wake);
            if view.should_exit() {
                return;
            }
        }

        view.tick(Instant::now());
        self.render(view);
    }

    fn dispatch<V: RootView>(&mut self, view: &mut V, wake: Wake) {
        match wake {
            Wake::Input(data) => {
                for event in parse_input_events(&data) {
                    if let InputEvent::UnknownRaw(raw) = &event {
                        tracing::debug!(raw = ?raw, "unrecognized input sequence");
                    }
                    view.handle_event(&event, Instant::now());
                }
            }
            Wake::Resize => {
                let event = InputEvent::Resize {
                    columns: self.terminal.columns(),
                    rows: self.terminal.rows(),
                };
                view.handle_event(&event, Instant::now());
                self.renderer.request_full_redraw_next();
            }
        }
    }

    /// Render the current frame and flush any commands the view queued.
    pub fn render<V: RootView>(&mut self, view: &mut V) {
        let width = usize::from(self.terminal.columns());
        let height = usize::from(self.terminal.rows());
        let rows = view.render_screen(width, height);
        self.output.extend(view.take_terminal_cmds());
        self.output.extend(self.renderer.render(rows, width, height));
        self.output.flush(&mut self.terminal);
    }
}

impl<T: Terminal> Drop for Runtime<T> {
    fn drop(&mut self) {
        if let Err(error) = self.stop() {
            tracing::warn!(%error, "failed to stop terminal");
        }
    }
}
