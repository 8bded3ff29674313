//! Reusable widgets.
//!
//! Most widgets are plain render helpers returning rows; [`Text`] and [`LineInput`] carry
//! state and implement [`Component`](crate::core::component::Component).

pub mod r#box;
pub mod grid;
pub mod input;
pub mod progress;
pub mod text;

pub use grid::{column_count, grid};
pub use input::LineInput;
pub use progress::progress_bar;
pub use r#box::{framed, window};
pub use text::Text;
