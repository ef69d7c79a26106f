//! Wordle TUI
//!
//! A terminal Wordle: six tries to find a five-letter word, with tile
//! reveals, a coloured on-screen keyboard and a shareable emoji transcript.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_tui::core::{LetterStates, TileState, Word, evaluate};
//!
//! let guess = Word::new("erase").unwrap();
//! let answer = Word::new("speed").unwrap();
//!
//! let mut letters = LetterStates::new();
//! let evaluation = evaluate(&guess, &answer, &mut letters);
//! assert_eq!(evaluation.to_emoji(), "🟨⬜⬜🟨🟨");
//! assert_eq!(letters.get(b'r'), TileState::Absent);
//! ```

// Core domain types
pub mod core;

// Board, timers and the game controller
pub mod game;

// Word lists
pub mod wordlists;

// Custom-word share codes
pub mod share;

// Configuration and logging
pub mod config;
pub mod logging;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
