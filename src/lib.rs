//! Full-screen terminal UI runtime.
//!
//! Invariant: single output gate, only `core::output::OutputGate::flush(..)` writes to the
//! terminal.
//!
//! # Public API Overview
//! - Implement [`RootView`] and drive it with [`Runtime`] over a [`ProcessTerminal`].
//! - Compose rows from [`Component`]s and the render helpers in [`widgets`].
//! - Parse input with [`parse_input_events`]; keys arrive as [`Key`].
//! - Use the ANSI-aware text helpers for width, wrapping and styling.

#![allow(clippy::new_without_default)]

pub mod config;
pub mod logging;

pub mod core;
pub mod platform;
pub mod render;
pub mod runtime;
pub mod widgets;

pub use crate::config::EnvConfig;

/// Runtime traits and the event loop.
pub use crate::core::component::{Component, RootView};
pub use crate::runtime::Runtime;

/// Input parsing.
pub use crate::core::input::{parse_key, Key};
pub use crate::core::input_event::{parse_input_events, InputEvent};

/// Terminal interfaces and process-backed implementation.
pub use crate::core::output::{OutputGate, TerminalCmd};
pub use crate::core::terminal::{teardown_cmds, Terminal, TerminalGuard};
#[cfg(unix)]
pub use crate::platform::process_terminal::ProcessTerminal;

/// Built-in widgets.
pub use crate::widgets::{LineInput, Text};

/// Text helpers.
pub use crate::core::text::slice::{center, fit_to_width, pad_to_width, truncate_to_width, wrap_words};
pub use crate::core::text::style::Color;
pub use crate::core::text::width::visible_width;
