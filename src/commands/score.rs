//! Guess scoring command
//!
//! Evaluates a single guess against a chosen answer, outside of a game.

use crate::core::{Evaluation, LetterStates, Tile, WORD_LENGTH, Word, WordSource, evaluate};

/// Result of scoring a guess
pub struct ScoreResult {
    pub guess: String,
    pub answer: String,
    pub evaluation: Evaluation,
    pub tiles: [Tile; WORD_LENGTH],
    pub in_dictionary: bool,
}

/// Score `guess` against `answer`
///
/// # Errors
///
/// Returns an error if either word is not exactly 5 ASCII letters.
pub fn score_guess<S: WordSource + ?Sized>(
    guess: &str,
    answer: &str,
    source: &S,
) -> Result<ScoreResult, String> {
    let guess_word = Word::new(guess).map_err(|e| format!("Invalid guess: {e}"))?;
    let answer_word = Word::new(answer).map_err(|e| format!("Invalid answer: {e}"))?;

    let evaluation = evaluate(&guess_word, &answer_word, &mut LetterStates::new());

    let mut tiles = [Tile::default(); WORD_LENGTH];
    for ((tile, &letter), &state) in tiles
        .iter_mut()
        .zip(guess_word.letters())
        .zip(evaluation.states())
    {
        tile.set_letter(Some(letter));
        tile.reveal(state);
    }

    Ok(ScoreResult {
        guess: guess_word.to_string(),
        answer: answer_word.to_string(),
        evaluation,
        tiles,
        in_dictionary: guess_word == answer_word || source.is_valid_guess(&guess_word),
    })
}
