mod command;
mod dispatcher;
mod error;
mod line;
mod pacing;
mod profile;
mod session;
mod typing;

pub use command::{normalize, CommandEntry, CommandTable, Handler, SideEffect, NAVIGATE_TARGETS};
pub use dispatcher::{Dispatch, Dispatcher};
pub use error::ProfileError;
pub use line::{LineContent, LineId, LineKind, OutputLine};
pub use pacing::{GraphemeClass, Pacer, PacingConfig};
pub use profile::{ContactProfile, ResumeAsset};
pub use session::{IgnoreReason, SubmitOutcome, TerminalSession};
pub use typing::{grapheme_count, visible_prefix, PlaybackEvent, PlaybackState};
