//! Guess evaluation
//!
//! Decides whether a completed row is an acceptable guess and, if so, which
//! reveal state each tile gets.
//!
//! # Algorithm
//! Three passes over the whole row, against a mutable copy of the answer's
//! letters where consumed letters become `None`:
//! 1. Exact matches become `Correct` and consume their answer letter
//! 2. Letters still present somewhere in the remainder become `Present` and
//!    consume the leftmost occurrence
//! 3. Everything else becomes `Absent`
//!
//! A guessed letter is therefore never credited more times than it occurs in
//! the answer.

use super::{LetterStates, TileState, WORD_LENGTH, Word, WordSource};
use std::fmt;

/// Per-tile states for one evaluated row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Evaluation {
    states: [TileState; WORD_LENGTH],
}

impl Evaluation {
    #[must_use]
    pub const fn states(&self) -> &[TileState; WORD_LENGTH] {
        &self.states
    }

    /// True when every tile is `Correct`
    #[must_use]
    pub fn is_win(&self) -> bool {
        self.states.iter().all(|&s| s == TileState::Correct)
    }

    #[must_use]
    pub fn count(&self, state: TileState) -> usize {
        self.states.iter().filter(|&&s| s == state).count()
    }

    /// Emoji rendering of the row, e.g. "🟨⬜⬜🟨🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.states.iter().filter_map(|s| s.emoji()).collect()
    }
}

/// Reason a submitted row was refused
///
/// Both are recoverable: the row stays editable and nothing is revealed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    NotEnoughLetters,
    NotInWordList,
}

impl Rejection {
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::NotEnoughLetters => "Not enough letters",
            Self::NotInWordList => "Not in word list",
        }
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Where the game stands after a row has been evaluated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    InProgress,
    /// Won on the given row index
    Won(usize),
    Lost,
}

impl Outcome {
    /// Decide the outcome of evaluating row `row` out of `rows` total
    #[must_use]
    pub fn after_row(evaluation: &Evaluation, row: usize, rows: usize) -> Self {
        if evaluation.is_win() {
            Self::Won(row)
        } else if row + 1 >= rows {
            Self::Lost
        } else {
            Self::InProgress
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// Check that a guess may be evaluated
///
/// The answer itself is always accepted, even if the word source does not
/// list it.
///
/// # Errors
/// Returns `Rejection::NotInWordList` when the guess is neither the answer
/// nor accepted by `source`.
pub fn validate<S: WordSource + ?Sized>(
    guess: &Word,
    answer: &Word,
    source: &S,
) -> Result<(), Rejection> {
    if guess == answer || source.is_valid_guess(guess) {
        Ok(())
    } else {
        Err(Rejection::NotInWordList)
    }
}

/// Evaluate `guess` against `answer`, updating the letter-state map
///
/// # Examples
/// ```
/// use wordle_tui::core::{LetterStates, TileState, Word, evaluate};
///
/// let mut letters = LetterStates::new();
/// let answer = Word::new("speed").unwrap();
/// let guess = Word::new("erase").unwrap();
/// let evaluation = evaluate(&guess, &answer, &mut letters);
///
/// assert_eq!(evaluation.to_emoji(), "🟨⬜⬜🟨🟨");
/// assert_eq!(letters.get(b'e'), TileState::Present);
/// ```
pub fn evaluate(guess: &Word, answer: &Word, letters: &mut LetterStates) -> Evaluation {
    let mut remaining: [Option<u8>; WORD_LENGTH] = answer.letters().map(Some);
    let mut states = [TileState::Initial; WORD_LENGTH];
    let guess = guess.letters();

    // Pass 1: exact matches
    for (i, &letter) in guess.iter().enumerate() {
        if remaining[i] == Some(letter) {
            states[i] = TileState::Correct;
            remaining[i] = None;
            letters.mark_correct(letter);
        }
    }

    // Pass 2: present elsewhere, leftmost unconsumed occurrence
    for (i, &letter) in guess.iter().enumerate() {
        if states[i].is_revealed() {
            continue;
        }
        if let Some(slot) = remaining.iter_mut().find(|slot| **slot == Some(letter)) {
            *slot = None;
            states[i] = TileState::Present;
            letters.mark_if_unknown(letter, TileState::Present);
        }
    }

    // Pass 3: absent
    for (i, &letter) in guess.iter().enumerate() {
        if !states[i].is_revealed() {
            states[i] = TileState::Absent;
            letters.mark_if_unknown(letter, TileState::Absent);
        }
    }

    Evaluation { states }
}
