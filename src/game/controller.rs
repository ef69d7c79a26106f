//! Game controller: input gate, row submission and feedback state
//!
//! The controller owns all mutable game state. Callers feed it keys and the
//! current time in milliseconds; renderers read it through accessors.
//!
//! Input is gated by a two-state machine. While `Accepting`, keys edit the
//! active row. A successful submission switches to `Locked` for the reveal
//! delay; when that delay elapses the game either moves to the next row and
//! accepts input again, or stays locked for good once won or lost.

use super::board::{Board, ROWS};
use super::scheduler::{Scheduler, TaskToken};
use super::{GameKey, Timing};
use crate::core::{
    Evaluation, LetterStates, Outcome, Rejection, WORD_LENGTH, Word, WordSource, evaluate,
    validate,
};
use tracing::{debug, info, trace};

/// Praise shown after a win, indexed by the winning row
pub const WIN_MESSAGES: [&str; ROWS] = [
    "Genius",
    "Magnificent",
    "Impressive",
    "Splendid",
    "Great",
    "Phew",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputGate {
    Accepting,
    Locked,
}

/// What a key press did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Input locked, or the edit was a no-op
    Ignored,
    Filled(usize),
    Cleared(usize),
    Rejected(Rejection),
    Submitted(Evaluation),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TimerAction {
    SettleRow,
    ClearMessage,
    ResetShake,
}

/// Transient or final feedback text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub text: String,
    /// Final messages are never auto-cleared
    pub persistent: bool,
}

/// One game of Wordle against a fixed answer
pub struct Game<'a> {
    source: &'a dyn WordSource,
    answer: Word,
    timing: Timing,
    board: Board,
    letters: LetterStates,
    gate: InputGate,
    outcome: Outcome,
    message: Option<Message>,
    shake_row: Option<usize>,
    success: bool,
    transcript: Option<String>,
    scheduler: Scheduler<TimerAction>,
    message_timer: Option<TaskToken>,
    shake_timer: Option<TaskToken>,
    /// Row being revealed and when its evaluation happened
    reveal: Option<(usize, u64)>,
    /// Most recently filled tile and when
    last_fill: Option<(usize, usize, u64)>,
}

impl<'a> Game<'a> {
    #[must_use]
    pub fn new(answer: Word, source: &'a dyn WordSource, timing: Timing) -> Self {
        info!("new game started");
        Self {
            source,
            answer,
            timing,
            board: Board::new(),
            letters: LetterStates::new(),
            gate: InputGate::Accepting,
            outcome: Outcome::InProgress,
            message: None,
            shake_row: None,
            success: false,
            transcript: None,
            scheduler: Scheduler::new(),
            message_timer: None,
            shake_timer: None,
            reveal: None,
            last_fill: None,
        }
    }

    /// Route a key press
    ///
    /// Due timers fire first, so a key arriving exactly when the reveal
    /// delay ends is accepted.
    pub fn handle_key(&mut self, key: GameKey, now: u64) -> KeyOutcome {
        self.tick(now);

        if self.gate == InputGate::Locked {
            trace!(?key, "input locked");
            return KeyOutcome::Ignored;
        }

        match key {
            GameKey::Letter(letter) => match self.board.fill_next_empty_tile(letter) {
                Some(column) => {
                    self.last_fill = Some((self.board.current_row(), column, now));
                    KeyOutcome::Filled(column)
                }
                None => KeyOutcome::Ignored,
            },
            GameKey::Backspace => self
                .board
                .clear_last_filled_tile()
                .map_or(KeyOutcome::Ignored, KeyOutcome::Cleared),
            GameKey::Enter => self.submit_row(now),
        }
    }

    fn submit_row(&mut self, now: u64) -> KeyOutcome {
        let row = self.board.current_row();

        let Some(guess) = self.board.active_word() else {
            return self.reject(Rejection::NotEnoughLetters, now);
        };

        if let Err(rejection) = validate(&guess, &self.answer, self.source) {
            return self.reject(rejection, now);
        }

        let evaluation = evaluate(&guess, &self.answer, &mut self.letters);
        self.board.reveal_active_row(&evaluation);
        self.outcome = Outcome::after_row(&evaluation, row, ROWS);
        self.gate = InputGate::Locked;
        self.reveal = Some((row, now));
        self.scheduler
            .schedule(now, self.timing.reveal_ms, TimerAction::SettleRow);

        debug!(row, guess = %guess, result = %evaluation.to_emoji(), "row evaluated");
        KeyOutcome::Submitted(evaluation)
    }

    fn reject(&mut self, rejection: Rejection, now: u64) -> KeyOutcome {
        debug!(row = self.board.current_row(), %rejection, "row rejected");
        self.shake(now);
        self.show_message(rejection.message(), now);
        KeyOutcome::Rejected(rejection)
    }

    /// Fire every timer due at `now`
    pub fn tick(&mut self, now: u64) {
        for action in self.scheduler.due(now) {
            trace!(?action, now, "timer fired");
            match action {
                TimerAction::SettleRow => self.settle_row(),
                TimerAction::ClearMessage => {
                    if self.message.as_ref().is_some_and(|m| !m.persistent) {
                        self.message = None;
                    }
                    self.message_timer = None;
                }
                TimerAction::ResetShake => {
                    self.shake_row = None;
                    self.shake_timer = None;
                }
            }
        }
    }

    fn settle_row(&mut self) {
        self.reveal = None;
        match self.outcome {
            Outcome::InProgress => {
                self.board.advance();
                self.gate = InputGate::Accepting;
            }
            Outcome::Won(row) => {
                info!(guesses = row + 1, "game won");
                self.transcript = Some(self.result_grid());
                self.show_final_message(WIN_MESSAGES[row]);
                self.success = true;
            }
            Outcome::Lost => {
                info!("game lost");
                self.transcript = Some(self.result_grid());
                let answer = self.answer.to_uppercase();
                self.show_final_message(&answer);
            }
        }
    }

    /// Show a transient message, replacing any pending clear
    fn show_message(&mut self, text: &str, now: u64) {
        if let Some(token) = self.message_timer.take() {
            self.scheduler.cancel(token);
        }
        self.message = Some(Message {
            text: text.to_string(),
            persistent: false,
        });
        self.message_timer = Some(self.scheduler.schedule(
            now,
            self.timing.message_ms,
            TimerAction::ClearMessage,
        ));
    }

    fn show_final_message(&mut self, text: &str) {
        if let Some(token) = self.message_timer.take() {
            self.scheduler.cancel(token);
        }
        self.message = Some(Message {
            text: text.to_string(),
            persistent: true,
        });
    }

    fn shake(&mut self, now: u64) {
        if let Some(token) = self.shake_timer.take() {
            self.scheduler.cancel(token);
        }
        self.shake_row = Some(self.board.current_row());
        self.shake_timer = Some(self.scheduler.schedule(
            now,
            self.timing.shake_ms,
            TimerAction::ResetShake,
        ));
    }

    /// Emoji grid of rows `0..=current_row`, one line per row
    #[must_use]
    pub fn result_grid(&self) -> String {
        self.board.rows()[..=self.board.current_row()]
            .iter()
            .map(|row| row.iter().filter_map(|t| t.state().emoji()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Number of tiles of `row` that should appear flipped at `now`
    ///
    /// Tiles flip one after another across the reveal delay.
    #[must_use]
    pub fn revealed_tiles(&self, row: usize, now: u64) -> usize {
        match self.reveal {
            Some((revealing, started)) if revealing == row => {
                let step = (self.timing.reveal_ms / WORD_LENGTH as u64).max(1);
                let elapsed = now.saturating_sub(started);
                ((elapsed / step) as usize + 1).min(WORD_LENGTH)
            }
            _ if self.board.row(row)[0].state().is_revealed() => WORD_LENGTH,
            _ => 0,
        }
    }

    /// True between a row's evaluation and the end of its reveal delay
    #[must_use]
    pub const fn is_revealing(&self) -> bool {
        self.reveal.is_some()
    }

    /// Whether the tile was filled within the last `pop_ms`
    #[must_use]
    pub fn is_popping(&self, row: usize, column: usize, now: u64) -> bool {
        self.last_fill.is_some_and(|(r, c, at)| {
            r == row && c == column && now.saturating_sub(at) < self.timing.pop_ms
        })
    }

    /// Whether any tile still shows its fill highlight at `now`
    #[must_use]
    pub fn is_pop_active(&self, now: u64) -> bool {
        self.last_fill
            .is_some_and(|(r, c, _)| self.is_popping(r, c, now))
    }

    /// Earliest time a pending timer fires
    #[must_use]
    pub fn next_deadline(&self) -> Option<u64> {
        self.scheduler.next_deadline()
    }

    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub const fn letters(&self) -> &LetterStates {
        &self.letters
    }

    #[must_use]
    pub fn message(&self) -> Option<&Message> {
        self.message.as_ref()
    }

    #[must_use]
    pub const fn shake_row(&self) -> Option<usize> {
        self.shake_row
    }

    #[must_use]
    pub const fn success(&self) -> bool {
        self.success
    }

    #[must_use]
    pub const fn gate(&self) -> InputGate {
        self.gate
    }

    #[must_use]
    pub fn is_accepting(&self) -> bool {
        self.gate == InputGate::Accepting
    }

    /// Outcome as decided at evaluation time
    ///
    /// Becomes non-`InProgress` as soon as the final row is evaluated, before
    /// the reveal delay ends.
    #[must_use]
    pub const fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// True once the game is over and the final reveal has finished
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.outcome.is_over() && self.reveal.is_none()
    }

    /// Transcript produced when the game ended
    #[must_use]
    pub fn transcript(&self) -> Option<&str> {
        self.transcript.as_deref()
    }

    #[must_use]
    pub const fn answer(&self) -> &Word {
        &self.answer
    }

    #[must_use]
    pub const fn timing(&self) -> &Timing {
        &self.timing
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::TileState;
    use chrono::NaiveDate;

    struct Words(Vec<Word>);

    impl Words {
        fn of(words: &[&str]) -> Self {
            Self(words.iter().map(|w| Word::new(w).unwrap()).collect())
        }
    }

    impl WordSource for Words {
        fn word_of_the_day(&self, _date: NaiveDate) -> Word {
            self.0[0]
        }

        fn is_valid_guess(&self, word: &Word) -> bool {
            self.0.contains(word)
        }
    }

    fn type_keys(game: &mut Game, text: &str, now: u64) {
        for c in text.chars() {
            if let Some(key) = GameKey::from_char(c) {
                game.handle_key(key, now);
            }
        }
    }

    fn submit(game: &mut Game, word: &str, now: u64) -> KeyOutcome {
        type_keys(game, word, now);
        game.handle_key(GameKey::Enter, now)
    }

    fn dictionary() -> Words {
        Words::of(&["crane", "slate", "erase", "floor", "robot", "hotel"])
    }

    #[test]
    fn letters_fill_and_backspace_clears() {
        let words = dictionary();
        let mut game = Game::new(Word::new("speed").unwrap(), &words, Timing::default());

        assert_eq!(game.handle_key(GameKey::Letter(b'c'), 0), KeyOutcome::Filled(0));
        assert_eq!(game.handle_key(GameKey::Letter(b'r'), 0), KeyOutcome::Filled(1));
        assert_eq!(game.handle_key(GameKey::Backspace, 0), KeyOutcome::Cleared(1));
        assert_eq!(game.handle_key(GameKey::Backspace, 0), KeyOutcome::Cleared(0));
        assert_eq!(game.handle_key(GameKey::Backspace, 0), KeyOutcome::Ignored);

        type_keys(&mut game, "crane", 0);
        assert_eq!(game.handle_key(GameKey::Letter(b'x'), 0), KeyOutcome::Ignored);
    }

    #[test]
    fn short_row_is_rejected_without_changes() {
        let words = dictionary();
        let mut game = Game::new(Word::new("speed").unwrap(), &words, Timing::default());
        type_keys(&mut game, "cra", 0);

        let outcome = game.handle_key(GameKey::Enter, 0);
        assert_eq!(outcome, KeyOutcome::Rejected(Rejection::NotEnoughLetters));
        assert_eq!(game.message().unwrap().text, "Not enough letters");
        assert_eq!(game.shake_row(), Some(0));
        assert!(game.is_accepting());
        assert_eq!(game.board().current_row(), 0);
        assert!(
            game.board()
                .active_row()
                .iter()
                .all(|t| t.state() == TileState::Initial)
        );
    }

    #[test]
    fn unknown_word_is_rejected() {
        let words = dictionary();
        let mut game = Game::new(Word::new("speed").unwrap(), &words, Timing::default());

        let outcome = submit(&mut game, "qwert", 0);
        assert_eq!(outcome, KeyOutcome::Rejected(Rejection::NotInWordList));
        assert_eq!(game.message().unwrap().text, "Not in word list");
        assert!(game.is_accepting());
        assert!(game.letters().is_empty());

        // Row is still editable
        assert_eq!(game.handle_key(GameKey::Backspace, 10), KeyOutcome::Cleared(4));
    }

    #[test]
    fn answer_is_accepted_even_if_not_listed() {
        let words = dictionary();
        let mut game = Game::new(Word::new("speed").unwrap(), &words, Timing::default());
        assert!(matches!(
            submit(&mut game, "speed", 0),
            KeyOutcome::Submitted(_)
        ));
    }

    #[test]
    fn messages_and_shake_clear_after_delay() {
        let words = dictionary();
        let mut game = Game::new(Word::new("speed").unwrap(), &words, Timing::default());
        game.handle_key(GameKey::Enter, 0);

        game.tick(999);
        assert!(game.message().is_some());
        assert_eq!(game.shake_row(), Some(0));

        game.tick(1000);
        assert!(game.message().is_none());
        assert_eq!(game.shake_row(), None);
    }

    #[test]
    fn new_message_replaces_pending_clear() {
        let words = dictionary();
        let mut game = Game::new(Word::new("speed").unwrap(), &words, Timing::default());
        game.handle_key(GameKey::Enter, 0);
        submit(&mut game, "qwert", 600);

        // The first message's clear was cancelled
        game.tick(1000);
        assert_eq!(game.message().unwrap().text, "Not in word list");
        assert_eq!(game.shake_row(), Some(0));

        game.tick(1600);
        assert!(game.message().is_none());
        assert_eq!(game.shake_row(), None);
    }

    #[test]
    fn input_locked_during_reveal() {
        let words = dictionary();
        let mut game = Game::new(Word::new("speed").unwrap(), &words, Timing::default());

        assert!(matches!(
            submit(&mut game, "erase", 0),
            KeyOutcome::Submitted(_)
        ));
        assert_eq!(game.gate(), InputGate::Locked);
        assert_eq!(game.board().current_row(), 0);

        assert_eq!(game.handle_key(GameKey::Letter(b'a'), 1599), KeyOutcome::Ignored);
        assert_eq!(game.handle_key(GameKey::Backspace, 1599), KeyOutcome::Ignored);
        assert_eq!(game.handle_key(GameKey::Enter, 1599), KeyOutcome::Ignored);

        assert_eq!(game.handle_key(GameKey::Letter(b'a'), 1600), KeyOutcome::Filled(0));
        assert_eq!(game.board().current_row(), 1);
        assert_eq!(game.board().row(1)[0].letter(), Some(b'a'));
    }

    #[test]
    fn tiles_flip_across_reveal() {
        let words = dictionary();
        let mut game = Game::new(Word::new("speed").unwrap(), &words, Timing::default());
        submit(&mut game, "erase", 1000);

        assert_eq!(game.revealed_tiles(0, 1000), 1);
        assert_eq!(game.revealed_tiles(0, 1320), 2);
        assert_eq!(game.revealed_tiles(0, 2599), 5);
        assert_eq!(game.revealed_tiles(1, 1320), 0);

        game.tick(2600);
        assert_eq!(game.revealed_tiles(0, 2600), 5);
        assert_eq!(game.revealed_tiles(1, 2600), 0);
    }

    #[test]
    fn pop_cue_expires() {
        let words = dictionary();
        let mut game = Game::new(Word::new("speed").unwrap(), &words, Timing::default());
        game.handle_key(GameKey::Letter(b'c'), 500);
        assert!(game.is_popping(0, 0, 550));
        assert!(!game.is_popping(0, 0, 600));
        assert!(!game.is_popping(0, 1, 550));
        assert!(game.is_pop_active(599));
        assert!(!game.is_pop_active(600));
    }

    #[test]
    fn win_is_terminal_with_praise_and_transcript() {
        let words = dictionary();
        let mut game = Game::new(Word::new("crane").unwrap(), &words, Timing::default());
        submit(&mut game, "slate", 0);
        game.tick(1600);
        submit(&mut game, "crane", 2000);

        assert_eq!(game.outcome(), Outcome::Won(1));
        assert!(!game.success());
        assert!(!game.is_finished());

        game.tick(3600);
        assert!(game.success());
        assert!(game.is_finished());
        assert_eq!(game.gate(), InputGate::Locked);
        let message = game.message().unwrap();
        assert_eq!(message.text, "Magnificent");
        assert!(message.persistent);
        assert_eq!(game.transcript(), Some("⬜⬜🟩⬜🟩\n🟩🟩🟩🟩🟩"));

        // Persistent message survives, input stays locked
        game.tick(100_000);
        assert!(game.message().is_some());
        assert_eq!(game.handle_key(GameKey::Letter(b'a'), 100_000), KeyOutcome::Ignored);
        assert_eq!(game.board().current_row(), 1);
    }

    #[test]
    fn six_misses_lose_and_reveal_answer() {
        let words = dictionary();
        let mut game = Game::new(Word::new("speed").unwrap(), &words, Timing::default());
        let mut now = 0;
        for _ in 0..ROWS {
            assert!(matches!(
                submit(&mut game, "crane", now),
                KeyOutcome::Submitted(_)
            ));
            now += 1600;
            game.tick(now);
        }

        assert_eq!(game.outcome(), Outcome::Lost);
        assert!(game.is_finished());
        assert!(!game.success());
        assert_eq!(game.board().current_row(), ROWS - 1);
        assert_eq!(game.message().unwrap().text, "SPEED");
        assert_eq!(game.transcript().unwrap().lines().count(), ROWS);
        assert_eq!(game.handle_key(GameKey::Enter, now + 5000), KeyOutcome::Ignored);
    }
}
