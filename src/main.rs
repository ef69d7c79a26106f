//! Wordle TUI - CLI
//!
//! Terminal Wordle with a TUI (default) and a line-based mode, plus helpers
//! to score single guesses and create custom-word links.

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use std::io;
use std::path::PathBuf;
use tracing::info;
use wordle_tui::{
    commands::{run_simple, score_guess},
    config::{CliOverrides, ResolvedConfig, default_config_path, load_config_file},
    core::{Word, WordSource},
    game::Game,
    output::{print_game_summary, print_score_result},
    share,
    wordlists::{Dictionary, GuessList},
};

#[derive(Parser)]
#[command(
    name = "wordle_tui",
    about = "Guess the five-letter word in six tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Accepted guesses: 'all' (default), 'answers', or path to a word file
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<String>,

    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Path to the log file
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    /// Play a random answer instead of the word of the day
    #[arg(short, long, global = true, conflicts_with_all = ["custom", "date"])]
    random: bool,

    /// Play a custom word from a share code or link
    #[arg(short, long, global = true, conflicts_with = "date")]
    custom: Option<String>,

    /// Play the word of another day (YYYY-MM-DD)
    #[arg(short, long, global = true)]
    date: Option<NaiveDate>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Line-based mode without the TUI
    Simple,

    /// Score one guess against an answer
    Score {
        /// The guessed word
        guess: String,

        /// The answer to score against
        answer: String,
    },

    /// Print a link that lets others play a custom word
    Share {
        /// The word to share
        word: String,
    },
}

/// The answer to play and the label used in the share header
fn pick_answer(cli: &Cli, dictionary: &Dictionary) -> Result<(Word, String)> {
    info!(
        answers = dictionary.answers().len(),
        guesses = dictionary.guess_count(),
        "Dictionary loaded"
    );

    if let Some(code) = &cli.custom {
        let word = share::decode(code).context("Invalid custom word")?;
        info!(source = "custom", "Answer selected");
        return Ok((word, "Wordle custom".to_string()));
    }

    if cli.random {
        let word = dictionary.random_answer(&mut rand::rng());
        info!(source = "random", "Answer selected");
        return Ok((word, "Wordle random".to_string()));
    }

    let date = cli.date.unwrap_or_else(|| Local::now().date_naive());
    let word = dictionary.word_of_the_day(date);
    let day = dictionary.day_index(date);
    info!(source = "daily", %date, day, "Answer selected");
    Ok((word, format!("Wordle {day}")))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = {
        let path = cli.config.clone().or_else(default_config_path);
        let file = match path {
            Some(path) => load_config_file(&path)?,
            None => None,
        };
        ResolvedConfig::resolve(
            file,
            CliOverrides {
                wordlist: cli.wordlist.clone(),
                log_file_path: cli.log_file.clone(),
            },
        )
    };

    wordle_tui::logging::init(&config.log_file_path)?;
    info!(config = ?config, "Configuration loaded and resolved");

    // Default to Play mode if no command given
    let command = cli.command.as_ref().unwrap_or(&Commands::Play);

    match command {
        Commands::Share { word } => {
            println!("{}", share::link(&config.share_base_url, word)?);
            Ok(())
        }
        Commands::Score { guess, answer } => {
            let dictionary = Dictionary::load(&GuessList::from_flag(&config.wordlist))?;
            let result = score_guess(guess, answer, &dictionary).map_err(|e| anyhow::anyhow!(e))?;
            print_score_result(&result);
            Ok(())
        }
        Commands::Simple => {
            let dictionary = Dictionary::load(&GuessList::from_flag(&config.wordlist))?;
            let (answer, label) = pick_answer(&cli, &dictionary)?;
            let mut game = Game::new(answer, &dictionary, config.timing);
            run_simple(&mut game, io::stdin().lock(), &mut io::stdout())?;
            if game.is_finished() {
                print_game_summary(&game, &label);
            }
            Ok(())
        }
        Commands::Play => {
            use wordle_tui::interactive::{App, run_tui};

            let dictionary = Dictionary::load(&GuessList::from_flag(&config.wordlist))?;
            let (answer, label) = pick_answer(&cli, &dictionary)?;
            let game = Game::new(answer, &dictionary, config.timing);
            run_tui(App::new(game, label))
        }
    }
}
