//! Core domain types for Wordle
//!
//! This module contains the fundamental domain types and performs no I/O.
//! All types here are pure and testable.

mod evaluator;
mod letters;
mod source;
mod tile;
mod word;

pub use evaluator::{Evaluation, Outcome, Rejection, evaluate, validate};
pub use letters::LetterStates;
pub use source::WordSource;
pub use tile::{Tile, TileState};
pub use word::{WORD_LENGTH, Word, WordError};
