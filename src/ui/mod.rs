//! Terminal-facing pieces: the [`console::Console`] seam and the main menu.

pub mod console;
pub mod menu;

pub use console::{Console, StdioConsole};
pub use menu::{MenuAction, UserInputError};
