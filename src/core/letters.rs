//! Letter-state map used to colour the keyboard

use super::TileState;
use rustc_hash::FxHashMap;

/// Best-known state for each letter seen so far in the game
///
/// Keys are lowercase ASCII letters. The evaluator writes `Correct`
/// unconditionally and every other state only when the letter has no entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterStates {
    states: FxHashMap<u8, TileState>,
}

impl LetterStates {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// State of a letter, `Initial` if it has not been guessed
    #[must_use]
    pub fn get(&self, letter: u8) -> TileState {
        self.states
            .get(&letter.to_ascii_lowercase())
            .copied()
            .unwrap_or_default()
    }

    pub(crate) fn mark_correct(&mut self, letter: u8) {
        self.states.insert(letter, TileState::Correct);
    }

    /// Record a state only if the letter has no entry yet
    pub(crate) fn mark_if_unknown(&mut self, letter: u8, state: TileState) {
        self.states.entry(letter).or_insert(state);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.states.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Iterate `(letter, state)` pairs in alphabetical order
    pub fn iter(&self) -> impl Iterator<Item = (u8, TileState)> + '_ {
        (b'a'..=b'z').filter_map(|l| self.states.get(&l).map(|&s| (l, s)))
    }
}
