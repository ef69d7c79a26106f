//! Word source collaborator

use super::Word;
use chrono::NaiveDate;

/// Supplies the daily answer and decides which guesses are acceptable
pub trait WordSource {
    /// Deterministic answer for a calendar day
    fn word_of_the_day(&self, date: NaiveDate) -> Word;

    /// Whether a word may be submitted as a guess
    fn is_valid_guess(&self, word: &Word) -> bool;
}
