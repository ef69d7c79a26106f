//! Key mapping for the physical keyboard and layout of the on-screen one
//!
//! Both paths produce a [`GameKey`], so the game sees one input stream.

use crate::game::GameKey;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::layout::{Position, Rect};

/// Letter rows of the on-screen keyboard
pub const KEY_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

pub const KEY_HEIGHT: u16 = 3;
const KEY_WIDTH: u16 = 5;
const ENTER_WIDTH: u16 = 9;
const BACKSPACE_WIDTH: u16 = 7;

/// Height needed to draw every keyboard row
pub const KEYBOARD_HEIGHT: u16 = KEY_HEIGHT * KEY_ROWS.len() as u16;

/// Input the application acts on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppInput {
    Game(GameKey),
    Quit,
}

/// Translate a terminal key event
///
/// Only presses count, so terminals that report releases don't double-type.
#[must_use]
pub fn map_key_event(key: KeyEvent) -> Option<AppInput> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(AppInput::Quit),
        KeyCode::Esc => Some(AppInput::Quit),
        KeyCode::Char(c) => GameKey::from_char(c).map(AppInput::Game),
        KeyCode::Backspace => Some(AppInput::Game(GameKey::Backspace)),
        KeyCode::Enter => Some(AppInput::Game(GameKey::Enter)),
        _ => None,
    }
}

/// Keys of each on-screen row, Enter and Backspace flanking the last one
#[must_use]
pub fn key_rows() -> Vec<Vec<GameKey>> {
    let mut rows: Vec<Vec<GameKey>> = KEY_ROWS
        .iter()
        .map(|row| row.bytes().map(GameKey::Letter).collect())
        .collect();
    if let Some(last) = rows.last_mut() {
        last.insert(0, GameKey::Enter);
        last.push(GameKey::Backspace);
    }
    rows
}

const fn key_width(key: GameKey) -> u16 {
    match key {
        GameKey::Letter(_) => KEY_WIDTH,
        GameKey::Enter => ENTER_WIDTH,
        GameKey::Backspace => BACKSPACE_WIDTH,
    }
}

/// Screen rectangle of every on-screen key that fits in `area`
///
/// Rows are centred horizontally; keys that would overflow are dropped.
#[must_use]
pub fn layout(area: Rect) -> Vec<(Rect, GameKey)> {
    let mut keys = Vec::new();

    for (i, row) in key_rows().into_iter().enumerate() {
        let y = area.y + i as u16 * KEY_HEIGHT;
        if y + KEY_HEIGHT > area.bottom() {
            break;
        }

        let total: u16 = row.iter().map(|&k| key_width(k)).sum();
        let mut x = area.x + area.width.saturating_sub(total) / 2;

        for key in row {
            let width = key_width(key);
            if x + width > area.right() {
                break;
            }
            keys.push((Rect::new(x, y, width, KEY_HEIGHT), key));
            x += width;
        }
    }

    keys
}

/// The on-screen key under a mouse position
#[must_use]
pub fn key_at(area: Rect, column: u16, row: u16) -> Option<GameKey> {
    let position = Position::new(column, row);
    layout(area)
        .into_iter()
        .find(|(rect, _)| rect.contains(position))
        .map(|(_, key)| key)
}
