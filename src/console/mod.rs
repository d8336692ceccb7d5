//! Terminal collaborators for the engine: keyboard input and text output.

mod input;
mod prompt;
mod render;

pub use input::ConsoleInput;
pub use prompt::{GOODBYE, INVALID_CHOICE, WELCOME, join_or};
pub use render::{ConsoleRenderer, round_message};
