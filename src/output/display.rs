//! Display functions for command results

use super::formatters::{colored_row, result_header};
use crate::commands::ScoreResult;
use crate::game::Game;
use colored::Colorize;

/// Print the evaluation of a single guess
pub fn print_score_result(result: &ScoreResult) {
    println!("\n{}", "─".repeat(40).cyan());
    println!(
        "Guess {} against {}",
        result.guess.to_uppercase().bright_yellow().bold(),
        result.answer.to_uppercase().bright_white().bold()
    );
    println!("{}", "─".repeat(40).cyan());

    println!("\n  {}  {}", colored_row(&result.tiles), result.evaluation.to_emoji());

    if !result.in_dictionary {
        println!(
            "\n{}",
            "Note: this guess is not in the word list and would be rejected in play".yellow()
        );
    }
    if result.evaluation.is_win() {
        println!("\n{}", "✅ Exact match!".green().bold());
    }
}

/// Print the final board and transcript of a finished game
pub fn print_game_summary(game: &Game<'_>, label: &str) {
    let board = game.board();
    println!();
    for row in &board.rows()[..=board.current_row()] {
        println!("  {}", colored_row(row));
    }

    if game.success() {
        println!("\n{}", "🎉 Solved!".green().bold());
    } else {
        println!(
            "\n{} {}",
            "❌ Out of guesses. The word was".red().bold(),
            game.answer().to_uppercase().bright_white().bold()
        );
    }

    if let Some(transcript) = game.transcript() {
        println!("\n{}\n\n{transcript}\n", result_header(label, game.outcome()));
    }
}
