use crate::command::{normalize, CommandEntry, CommandTable, Handler, SideEffect};
use crate::line::LineContent;
use crate::profile::ContactProfile;

/// Result of looking up one submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatch {
    /// Reset the session; nothing is echoed or queued.
    Clear,
    Respond {
        lines: Vec<LineContent>,
        actions: Vec<SideEffect>,
    },
}

#[derive(Debug, Clone)]
pub struct Dispatcher {
    table: CommandTable,
}

impl Dispatcher {
    pub fn new(profile: &ContactProfile) -> Self {
        Self {
            table: CommandTable::from_profile(profile),
        }
    }

    pub fn commands(&self) -> &[CommandEntry] {
        self.table.entries()
    }

    pub fn is_clear(&self, raw: &str) -> bool {
        self.table
            .lookup(&normalize(raw))
            .is_some_and(|entry| entry.handler == Handler::Clear)
    }

    /// Looks up `raw` and returns what the session should show and do.
    ///
    /// Unknown input yields a single error line echoing `raw` verbatim.
    pub fn dispatch(&self, raw: &str) -> Dispatch {
        let key = normalize(raw);
        let Some(entry) = self.table.lookup(&key) else {
            tracing::debug!(input = raw, "command not found");
            return Dispatch::Respond {
                lines: vec![LineContent::error(format!(
                    "Command not found: {raw}. Type \"help\" for available commands."
                ))],
                actions: Vec::new(),
            };
        };

        tracing::debug!(command = %entry.key, "dispatching");
        match &entry.handler {
            Handler::Help => Dispatch::Respond {
                lines: self.table.help_lines(),
                actions: Vec::new(),
            },
            Handler::Clear => Dispatch::Clear,
            Handler::Respond { lines, actions } => Dispatch::Respond {
                lines: lines.clone(),
                actions: actions.clone(),
            },
        }
    }
}
