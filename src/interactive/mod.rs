//! Interactive TUI
//!
//! Typing and clicking the on-screen keyboard both feed [`App::press`].

mod app;
pub mod keyboard;
mod rendering;
mod terminal;

pub use app::{App, run_tui};
pub use keyboard::AppInput;
pub use terminal::TerminalGuard;
