//! Game state and input handling
//!
//! - [`board`]: the 6x5 tile grid and the active row
//! - [`scheduler`]: cancellable delayed tasks on a millisecond clock
//! - [`controller`]: the [`Game`] that ties input, evaluation and feedback together

pub mod board;
pub mod controller;
pub mod scheduler;

pub use board::{Board, ROWS};
pub use controller::{Game, InputGate, KeyOutcome, Message, WIN_MESSAGES};
pub use scheduler::{Scheduler, TaskToken};

/// A key the game understands, from the physical or on-screen keyboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameKey {
    /// Lowercase ASCII letter
    Letter(u8),
    Backspace,
    Enter,
}

impl GameKey {
    /// Map a typed character; letters are case-insensitive
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        if c.is_ascii_alphabetic() {
            Some(Self::Letter(c.to_ascii_lowercase() as u8))
        } else {
            None
        }
    }

    /// Label shown on the on-screen keyboard
    #[must_use]
    pub fn label(self) -> String {
        match self {
            Self::Letter(l) => char::from(l).to_ascii_uppercase().to_string(),
            Self::Backspace => "⌫".to_string(),
            Self::Enter => "ENTER".to_string(),
        }
    }
}

/// Feedback durations in milliseconds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    /// Input lock after a row is submitted (tile flip animation)
    pub reveal_ms: u64,
    /// How long rejection messages stay up
    pub message_ms: u64,
    /// How long a rejected row shakes
    pub shake_ms: u64,
    /// Highlight on a freshly typed tile
    pub pop_ms: u64,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            reveal_ms: 1600,
            message_ms: 1000,
            shake_ms: 1000,
            pop_ms: 100,
        }
    }
}
