//! Scoped terminal setup
//!
//! Raw mode, the alternate screen and mouse capture are acquired together
//! and released in `Drop`, so every exit path restores the terminal.

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::ops::{Deref, DerefMut};
use tracing::warn;

pub struct TerminalGuard {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalGuard {
    /// Take over the terminal
    ///
    /// # Errors
    ///
    /// Returns an error if raw mode or the alternate screen cannot be entered.
    /// Anything acquired before the failure is released again.
    pub fn acquire() -> Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        if let Err(err) = execute!(stdout, EnterAlternateScreen, EnableMouseCapture) {
            let _ = disable_raw_mode();
            return Err(err.into());
        }

        match Terminal::new(CrosstermBackend::new(stdout)) {
            Ok(terminal) => Ok(Self { terminal }),
            Err(err) => {
                restore(&mut io::stdout());
                Err(err.into())
            }
        }
    }
}

impl Deref for TerminalGuard {
    type Target = Terminal<CrosstermBackend<Stdout>>;

    fn deref(&self) -> &Self::Target {
        &self.terminal
    }
}

impl DerefMut for TerminalGuard {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.terminal
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        restore(self.terminal.backend_mut());
        if let Err(err) = self.terminal.show_cursor() {
            warn!(%err, "failed to show cursor");
        }
    }
}

fn restore<W: io::Write>(out: &mut W) {
    if let Err(err) = disable_raw_mode() {
        warn!(%err, "failed to leave raw mode");
    }
    if let Err(err) = execute!(out, LeaveAlternateScreen, DisableMouseCapture) {
        warn!(%err, "failed to leave alternate screen");
    }
}
