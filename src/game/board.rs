//! Board state: six rows of five tiles and the active-row pointer

use crate::core::{Evaluation, Tile, WORD_LENGTH, Word};

/// Number of attempts (rows) in a game
pub const ROWS: usize = 6;

pub type Row = [Tile; WORD_LENGTH];

/// The tile grid
///
/// Rows above the active row are frozen, rows below are untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board {
    rows: [Row; ROWS],
    current_row: usize,
}

impl Board {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    #[must_use]
    pub const fn current_row(&self) -> usize {
        self.current_row
    }

    #[must_use]
    pub fn rows(&self) -> &[Row; ROWS] {
        &self.rows
    }

    /// # Panics
    /// Panics if `index >= ROWS`
    #[must_use]
    pub fn row(&self, index: usize) -> &Row {
        &self.rows[index]
    }

    #[must_use]
    pub fn active_row(&self) -> &Row {
        &self.rows[self.current_row]
    }

    /// Put a letter in the first empty tile of the active row
    ///
    /// Returns the column filled, or `None` when the row is already full.
    pub fn fill_next_empty_tile(&mut self, letter: u8) -> Option<usize> {
        let row = &mut self.rows[self.current_row];
        let column = row.iter().position(Tile::is_empty)?;
        row[column].set_letter(Some(letter.to_ascii_lowercase()));
        Some(column)
    }

    /// Clear the last filled tile of the active row
    ///
    /// Returns the column cleared, or `None` when the row is empty.
    pub fn clear_last_filled_tile(&mut self) -> Option<usize> {
        let row = &mut self.rows[self.current_row];
        let column = row.iter().rposition(|tile| !tile.is_empty())?;
        row[column].set_letter(None);
        Some(column)
    }

    #[must_use]
    pub fn is_active_row_full(&self) -> bool {
        self.active_row().iter().all(|tile| !tile.is_empty())
    }

    /// The active row as a word, if all five tiles hold a letter
    #[must_use]
    pub fn active_word(&self) -> Option<Word> {
        let row = self.active_row();
        let mut letters = [0u8; WORD_LENGTH];
        for (slot, tile) in letters.iter_mut().zip(row) {
            *slot = tile.letter()?;
        }
        Some(Word::from_letters(letters))
    }

    /// Reveal every tile of the active row at once
    pub(crate) fn reveal_active_row(&mut self, evaluation: &Evaluation) {
        let row = &mut self.rows[self.current_row];
        for (tile, &state) in row.iter_mut().zip(evaluation.states()) {
            tile.reveal(state);
        }
    }

    /// Move input to the next row
    ///
    /// Returns false (and stays put) when the active row is the last one.
    pub(crate) fn advance(&mut self) -> bool {
        if self.current_row + 1 < ROWS {
            self.current_row += 1;
            true
        } else {
            false
        }
    }
}
