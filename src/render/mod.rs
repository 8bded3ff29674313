//! Render layer: turns root-view rows into terminal commands.

pub mod screen;

pub use screen::ScreenRenderer;
