//! Word lists for the game
//!
//! Provides embedded word lists compiled into the binary for zero-cost access,
//! and the [`Dictionary`] that serves daily answers and validates guesses.

pub mod dictionary;
mod embedded;
pub mod loader;

pub use dictionary::{Dictionary, GuessList};
pub use embedded::{ALLOWED, ALLOWED_COUNT, ANSWERS, ANSWERS_COUNT};
