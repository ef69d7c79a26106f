//! Simple line-based game mode
//!
//! Text-based game without the TUI. Each line is typed into the game as if
//! on the keyboard, then submitted.

use crate::core::WORD_LENGTH;
use crate::game::{Game, GameKey, KeyOutcome};
use crate::output::formatters::colored_row;
use std::io::{self, BufRead, Write};

/// Run the simple line-based mode until the game ends or input runs out
///
/// Time is simulated: every accepted row advances the clock past the reveal
/// delay, every rejection past the message delay.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple<R: BufRead, W: Write>(
    game: &mut Game<'_>,
    mut input: R,
    output: &mut W,
) -> io::Result<()> {
    writeln!(output, "\nFind the five-letter word in six tries.")?;
    writeln!(output, "Type a word and press Enter ('quit' to give up).\n")?;

    let mut now = 0u64;
    let mut line = String::new();

    while !game.is_finished() {
        write!(output, "Guess {}: ", game.board().current_row() + 1)?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            break;
        }
        let guess = line.trim();
        if guess.eq_ignore_ascii_case("quit") {
            writeln!(output, "\nThe word was {}", game.answer().to_uppercase())?;
            return Ok(());
        }

        // Start from an empty row in case a rejected guess is still typed in
        for _ in 0..WORD_LENGTH {
            game.handle_key(GameKey::Backspace, now);
        }
        for c in guess.chars() {
            if let Some(key) = GameKey::from_char(c) {
                game.handle_key(key, now);
            }
        }

        match game.handle_key(GameKey::Enter, now) {
            KeyOutcome::Submitted(_) => {
                let row = game.board().current_row();
                writeln!(output, "  {}", colored_row(game.board().row(row)))?;
                now += game.timing().reveal_ms;
            }
            KeyOutcome::Rejected(rejection) => {
                writeln!(output, "  {rejection}")?;
                now += game.timing().message_ms;
            }
            _ => {}
        }
        game.tick(now);
    }

    // The transcript is left to the caller, which knows the share label
    if let Some(message) = game.message().filter(|_| game.is_finished()) {
        writeln!(output, "\n{}", message.text)?;
    }

    Ok(())
}
