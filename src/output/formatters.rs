//! Formatting utilities for terminal output

use crate::core::{Outcome, Tile, TileState};
use crate::game::ROWS;
use colored::{ColoredString, Colorize};

/// Render one tile as a padded, coloured letter
#[must_use]
pub fn colored_tile(tile: &Tile) -> ColoredString {
    let text = format!(" {} ", tile.display_char());
    match tile.state() {
        TileState::Correct => text.black().on_green().bold(),
        TileState::Present => text.black().on_yellow().bold(),
        TileState::Absent => text.white().on_bright_black(),
        TileState::Initial => text.bold(),
    }
}

/// Render a row of tiles on one line
#[must_use]
pub fn colored_row(row: &[Tile]) -> String {
    row.iter().map(|tile| colored_tile(tile).to_string()).collect()
}

/// Share header such as "Wordle 289 4/6" or "Wordle 289 X/6"
#[must_use]
pub fn result_header(label: &str, outcome: Outcome) -> String {
    let score = match outcome {
        Outcome::Won(row) => (row + 1).to_string(),
        Outcome::Lost | Outcome::InProgress => "X".to_string(),
    };
    format!("{label} {score}/{ROWS}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headers() {
        assert_eq!(result_header("Wordle 12", Outcome::Won(3)), "Wordle 12 4/6");
        assert_eq!(result_header("Wordle 12", Outcome::Lost), "Wordle 12 X/6");
    }

    #[test]
    fn tiles_render_their_letter() {
        colored::control::set_override(false);
        let row = [Tile::default(); 5];
        assert_eq!(colored_row(&row), " ".repeat(15));
        colored::control::unset_override();
    }
}
