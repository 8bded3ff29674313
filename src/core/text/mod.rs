//! Text helpers (ANSI parsing, width calculations, wrapping/truncation, styling).
//!
//! These helpers are pure (string in/string out) so widgets and sections can depend on them
//! without importing anything from the render layer.

pub mod ansi;
pub mod slice;
pub mod style;
pub mod width;
