//! TUI application state and event loop

use super::keyboard::{AppInput, key_at, map_key_event};
use super::rendering::{self, ui};
use super::terminal::TerminalGuard;
use crate::game::{Game, GameKey, KeyOutcome};
use anyhow::Result;
use crossterm::event::{self, Event, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{Terminal, backend::Backend, layout::Rect};
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Redraw interval while something is animating
const FRAME: Duration = Duration::from_millis(40);
/// Redraw interval when idle
const IDLE: Duration = Duration::from_millis(500);

/// Application state
pub struct App<'a> {
    pub game: Game<'a>,
    /// Shown in the share header, e.g. "Wordle 289"
    pub label: String,
    pub should_quit: bool,
    started: Instant,
    screen: Rect,
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(game: Game<'a>, label: impl Into<String>) -> Self {
        Self {
            game,
            label: label.into(),
            should_quit: false,
            started: Instant::now(),
            screen: Rect::default(),
        }
    }

    /// Milliseconds since the app started
    #[must_use]
    pub fn now(&self) -> u64 {
        self.started.elapsed().as_millis() as u64
    }

    /// Apply one input at time `now`
    pub fn handle_input(&mut self, input: AppInput, now: u64) {
        match input {
            AppInput::Quit => self.should_quit = true,
            AppInput::Game(key) => self.press(key, now),
        }
    }

    /// Physical and on-screen keys both end up here
    pub fn press(&mut self, key: GameKey, now: u64) {
        if let KeyOutcome::Rejected(rejection) = self.game.handle_key(key, now) {
            debug!(%rejection, "submission rejected");
        }
    }

    /// Handle a mouse event against the last drawn screen size
    pub fn handle_mouse(&mut self, mouse: MouseEvent, now: u64) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        let area = rendering::screen_layout(self.screen).keyboard;
        if let Some(key) = key_at(area, mouse.column, mouse.row) {
            self.press(key, now);
        }
    }

    /// How long the event loop may wait before it must redraw
    #[must_use]
    pub fn poll_timeout(&self, now: u64) -> Duration {
        if self.game.is_revealing()
            || self.game.shake_row().is_some()
            || self.game.is_pop_active(now)
        {
            return FRAME;
        }
        self.game
            .next_deadline()
            .map_or(IDLE, |deadline| {
                Duration::from_millis(deadline.saturating_sub(now)).min(IDLE)
            })
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    let mut terminal = TerminalGuard::acquire()?;
    let result = run_app(&mut *terminal, app);
    drop(terminal);

    let app = result?;
    if let Some(transcript) = app.game.transcript() {
        println!(
            "{}\n\n{transcript}",
            crate::output::formatters::result_header(&app.label, app.game.outcome())
        );
    }
    Ok(())
}

fn run_app<'a, B: Backend>(terminal: &mut Terminal<B>, mut app: App<'a>) -> Result<App<'a>> {
    info!("tui started");

    while !app.should_quit {
        let now = app.now();
        app.game.tick(now);

        let size = terminal.size()?;
        app.screen = Rect::new(0, 0, size.width, size.height);
        terminal.draw(|f| ui(f, &app.game, now))?;

        if !event::poll(app.poll_timeout(now))? {
            continue;
        }

        let now = app.now();
        match event::read()? {
            Event::Key(key) => {
                if let Some(input) = map_key_event(key) {
                    app.handle_input(input, now);
                }
            }
            Event::Mouse(mouse) => app.handle_mouse(mouse, now),
            _ => {}
        }
    }

    info!("tui exited");
    Ok(app)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::game::Timing;
    use crate::wordlists::Dictionary;
    use crossterm::event::KeyModifiers;

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn quit_input_sets_flag() {
        let dict = Dictionary::embedded();
        let game = Game::new(Word::new("speed").unwrap(), &dict, Timing::default());
        let mut app = App::new(game, "Wordle");
        app.handle_input(AppInput::Quit, 0);
        assert!(app.should_quit);
    }

    #[test]
    fn clicking_on_screen_keys_types() {
        let dict = Dictionary::embedded();
        let game = Game::new(Word::new("speed").unwrap(), &dict, Timing::default());
        let mut app = App::new(game, "Wordle");
        app.screen = Rect::new(0, 0, 80, 40);

        let keyboard = rendering::screen_layout(app.screen).keyboard;
        let (rect, key) = crate::interactive::keyboard::layout(keyboard)[0];
        assert_eq!(key, GameKey::Letter(b'q'));

        app.handle_mouse(click(rect.x, rect.y), 0);
        assert_eq!(app.game.board().row(0)[0].letter(), Some(b'q'));

        // Clicking outside any key does nothing
        app.handle_mouse(click(0, 0), 0);
        assert_eq!(app.game.board().row(0)[1].letter(), None);
    }

    #[test]
    fn poll_is_fast_while_revealing() {
        let dict = Dictionary::embedded();
        let game = Game::new(Word::new("speed").unwrap(), &dict, Timing::default());
        let mut app = App::new(game, "Wordle");
        assert_eq!(app.poll_timeout(0), IDLE);

        for c in "erase".chars() {
            app.press(GameKey::from_char(c).unwrap(), 0);
        }
        app.press(GameKey::Enter, 0);
        assert_eq!(app.poll_timeout(100), FRAME);
    }

    #[test]
    fn poll_is_fast_while_a_tile_pops() {
        let dict = Dictionary::embedded();
        let game = Game::new(Word::new("speed").unwrap(), &dict, Timing::default());
        let mut app = App::new(game, "Wordle");

        app.press(GameKey::Letter(b'c'), 1000);
        assert_eq!(app.poll_timeout(1010), FRAME);
        assert_eq!(app.poll_timeout(1100), IDLE);
    }
}
