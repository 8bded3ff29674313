//! Typed terminal output commands and a single output gate.
//!
//! Invariant: all terminal writes must flow through `OutputGate::flush(..)`.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;

use crate::core::terminal::Terminal;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TerminalCmd {
    /// Raw bytes/control sequences (UTF-8 string) to be written to the terminal.
    Bytes(String),
    /// Static raw bytes/control sequences (UTF-8 string) to be written to the terminal.
    BytesStatic(&'static str),

    /// Cursor visibility.
    HideCursor,
    ShowCursor,

    /// Screen buffer toggles.
    EnterAltScreen,
    LeaveAltScreen,
    ClearScreen,

    /// Protocol toggles.
    BracketedPasteEnable,
    BracketedPasteDisable,

    /// Window title (OSC 0).
    SetTitle(String),
    /// System clipboard write (OSC 52).
    SetClipboard(String),
    /// Audible bell.
    Bell,
}

impl TerminalCmd {
    pub fn bytes(data: impl Into<String>) -> Self {
        Self::Bytes(data.into())
    }

    /// Wire encoding of this command.
    pub fn encode(&self) -> String {
        match self {
            Self::Bytes(data) => data.clone(),
            Self::BytesStatic(data) => (*data).to_string(),
            Self::HideCursor => "\x1b[?25l".to_string(),
            Self::ShowCursor => "\x1b[?25h".to_string(),
            Self::EnterAltScreen => "\x1b[?1049h".to_string(),
            Self::LeaveAltScreen => "\x1b[?1049l".to_string(),
            Self::ClearScreen => "\x1b[2J\x1b[H".to_string(),
            Self::BracketedPasteEnable => "\x1b[?2004h".to_string(),
            Self::BracketedPasteDisable => "\x1b[?2004l".to_string(),
            Self::SetTitle(title) => format!("\x1b]0;{}\x07", strip_controls(title)),
            Self::SetClipboard(text) => format!("\x1b]52;c;{}\x07", BASE64.encode(text)),
            Self::Bell => "\x07".to_string(),
        }
    }
}

fn strip_controls(text: &str) -> String {
    text.chars().filter(|ch| !ch.is_control()).collect()
}

#[derive(Debug, Default)]
pub struct OutputGate {
    cmds: Vec<TerminalCmd>,
}

impl OutputGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, cmd: TerminalCmd) {
        self.cmds.push(cmd);
    }

    pub fn extend<I>(&mut self, cmds: I)
    where
        I: IntoIterator<Item = TerminalCmd>,
    {
        self.cmds.extend(cmds);
    }

    pub fn is_empty(&self) -> bool {
        self.cmds.is_empty()
    }

    pub fn clear(&mut self) {
        self.cmds.clear();
    }

    /// Flush buffered commands to the terminal.
    ///
    /// This is the single write gate: `Terminal::write(..)` must not be called
    /// from anywhere else. Commands are coalesced into one write.
    pub fn flush<T: Terminal + ?Sized>(&mut self, term: &mut T) {
        if self.cmds.is_empty() {
            return;
        }
        let mut buffer = String::new();
        for cmd in self.cmds.drain(..) {
            buffer.push_str(&cmd.encode());
        }
        term.write(&buffer);
    }
}
