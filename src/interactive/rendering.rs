//! TUI rendering with ratatui
//!
//! Read-only view of a [`Game`]: tile grid, feedback message and on-screen
//! keyboard.

use super::keyboard::{self, KEYBOARD_HEIGHT};
use crate::core::{TileState, WORD_LENGTH};
use crate::game::{Game, GameKey, ROWS};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, BorderType, Borders, Paragraph},
};

const TILE_WIDTH: u16 = 7;
const TILE_HEIGHT: u16 = 3;
const BOARD_WIDTH: u16 = TILE_WIDTH * WORD_LENGTH as u16;
const BOARD_HEIGHT: u16 = TILE_HEIGHT * ROWS as u16;

/// Period of one shake step in milliseconds
const SHAKE_STEP_MS: u64 = 60;

/// Screen regions, shared with mouse hit-testing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    pub header: Rect,
    pub board: Rect,
    pub message: Rect,
    pub keyboard: Rect,
    pub footer: Rect,
}

#[must_use]
pub fn screen_layout(area: Rect) -> ScreenLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),               // Header
            Constraint::Length(BOARD_HEIGHT),    // Tiles
            Constraint::Length(3),               // Message
            Constraint::Length(KEYBOARD_HEIGHT), // Keyboard
            Constraint::Length(1),               // Help
        ])
        .split(area);

    ScreenLayout {
        header: chunks[0],
        board: chunks[1],
        message: chunks[2],
        keyboard: chunks[3],
        footer: chunks[4],
    }
}

/// Main UI rendering function
pub fn ui(f: &mut Frame, game: &Game<'_>, now: u64) {
    let layout = screen_layout(f.area());

    render_header(f, layout.header);
    render_board(f, game, now, layout.board);
    render_message(f, game, layout.message);
    render_keyboard(f, game, layout.keyboard);
    render_help(f, game, layout.footer);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("WORDLE")
        .style(
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .style(Style::default().fg(Color::DarkGray)),
        );
    f.render_widget(header, area);
}

const fn state_colors(state: TileState) -> Option<(Color, Color)> {
    match state {
        TileState::Correct => Some((Color::Black, Color::Green)),
        TileState::Present => Some((Color::Black, Color::Yellow)),
        TileState::Absent => Some((Color::White, Color::DarkGray)),
        TileState::Initial => None,
    }
}

/// Horizontal nudge of a shaking row at `now`
const fn shake_offset(now: u64) -> i16 {
    match (now / SHAKE_STEP_MS) % 4 {
        0 => -1,
        2 => 1,
        _ => 0,
    }
}

fn render_board(f: &mut Frame, game: &Game<'_>, now: u64, area: Rect) {
    let left = area.x + area.width.saturating_sub(BOARD_WIDTH) / 2;
    let board = game.board();

    for (r, row) in board.rows().iter().enumerate() {
        let y = area.y + r as u16 * TILE_HEIGHT;
        if y + TILE_HEIGHT > area.bottom() {
            break;
        }

        let offset = if game.shake_row() == Some(r) {
            shake_offset(now)
        } else {
            0
        };
        let row_left = left.saturating_add_signed(offset);
        let revealed = game.revealed_tiles(r, now);

        for (c, tile) in row.iter().enumerate() {
            let x = row_left + c as u16 * TILE_WIDTH;
            if x + TILE_WIDTH > area.right() {
                break;
            }
            let rect = Rect::new(x, y, TILE_WIDTH, TILE_HEIGHT);

            let shown = if c < revealed {
                tile.state()
            } else {
                TileState::Initial
            };

            let (text_style, border_color) = match state_colors(shown) {
                Some((fg, bg)) => (Style::default().fg(fg).bg(bg), bg),
                None if game.is_popping(r, c, now) => {
                    (Style::default().fg(Color::White), Color::White)
                }
                None if tile.is_empty() => (Style::default(), Color::DarkGray),
                None => (Style::default().fg(Color::White), Color::Gray),
            };

            let paragraph = Paragraph::new(tile.display_char().to_string())
                .alignment(Alignment::Center)
                .style(text_style.add_modifier(Modifier::BOLD))
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_type(if game.is_popping(r, c, now) {
                            BorderType::Thick
                        } else {
                            BorderType::Rounded
                        })
                        .border_style(Style::default().fg(border_color)),
                );
            f.render_widget(paragraph, rect);
        }
    }
}

fn render_message(f: &mut Frame, game: &Game<'_>, area: Rect) {
    let Some(message) = game.message() else {
        return;
    };

    let style = if game.success() {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .fg(Color::Black)
            .bg(Color::White)
            .add_modifier(Modifier::BOLD)
    };

    let width = (message.text.chars().count() as u16 + 4).min(area.width);
    // Middle line of the band, clipped so tiny terminals never overflow
    let rect = Rect::new(
        area.x + area.width.saturating_sub(width) / 2,
        area.y + area.height.saturating_sub(1).min(1),
        width,
        area.height.min(1),
    )
    .intersection(area);
    let paragraph = Paragraph::new(message.text.as_str())
        .alignment(Alignment::Center)
        .style(style);
    f.render_widget(paragraph, rect);
}

fn render_keyboard(f: &mut Frame, game: &Game<'_>, area: Rect) {
    for (rect, key) in keyboard::layout(area) {
        let state = match key {
            GameKey::Letter(letter) => game.letters().get(letter),
            GameKey::Enter | GameKey::Backspace => TileState::Initial,
        };
        let style = state_colors(state).map_or_else(
            || Style::default().fg(Color::White),
            |(fg, bg)| Style::default().fg(fg).bg(bg),
        );

        let paragraph = Paragraph::new(key.label())
            .alignment(Alignment::Center)
            .style(style.add_modifier(Modifier::BOLD))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(Color::DarkGray)),
            );
        f.render_widget(paragraph, rect);
    }
}

fn render_help(f: &mut Frame, game: &Game<'_>, area: Rect) {
    let help_text = if game.is_finished() {
        "Esc: Quit and print result"
    } else {
        "Type or click letters | Enter: Submit | Backspace: Delete | Esc: Quit"
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::game::Timing;
    use crate::wordlists::Dictionary;
    use ratatui::{Terminal, backend::TestBackend};

    fn screen_text(game: &Game<'_>, now: u64) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 40)).unwrap();
        terminal.draw(|f| ui(f, game, now)).unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    fn type_word(game: &mut Game<'_>, word: &str, now: u64) {
        for c in word.chars() {
            game.handle_key(GameKey::from_char(c).unwrap(), now);
        }
    }

    #[test]
    fn layout_fits_standard_terminal() {
        let layout = screen_layout(Rect::new(0, 0, 80, 40));
        assert_eq!(layout.board.height, BOARD_HEIGHT);
        assert_eq!(layout.keyboard.height, KEYBOARD_HEIGHT);
        assert!(layout.footer.bottom() <= 40);
    }

    #[test]
    fn typed_letters_and_message_are_drawn() {
        let dict = Dictionary::embedded();
        let mut game = Game::new(Word::new("speed").unwrap(), &dict, Timing::default());
        type_word(&mut game, "qxz", 0);
        game.handle_key(GameKey::Enter, 0);

        let text = screen_text(&game, 10);
        assert!(text.contains("Not enough letters"));
        assert!(text.contains("ENTER"));
        assert!(text.contains('Q'));
    }

    #[test]
    fn final_message_is_drawn() {
        let dict = Dictionary::embedded();
        let mut game = Game::new(Word::new("speed").unwrap(), &dict, Timing::default());
        type_word(&mut game, "speed", 0);
        game.handle_key(GameKey::Enter, 0);
        game.tick(2000);

        let text = screen_text(&game, 2000);
        assert!(text.contains("Genius"));
        assert!(text.contains("Esc: Quit and print result"));
    }

    #[test]
    fn tiny_terminals_draw_without_panicking() {
        let dict = Dictionary::embedded();
        let mut game = Game::new(Word::new("speed").unwrap(), &dict, Timing::default());
        type_word(&mut game, "qxz", 0);
        game.handle_key(GameKey::Enter, 0);
        assert!(game.message().is_some());

        for width in 0..30 {
            for height in 0..45 {
                let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
                terminal.draw(|f| ui(f, &game, 10)).unwrap();
            }
        }
    }

    #[test]
    fn one_line_terminal_shows_message_on_its_only_row() {
        let dict = Dictionary::embedded();
        let mut game = Game::new(Word::new("speed").unwrap(), &dict, Timing::default());
        game.handle_key(GameKey::Enter, 0);

        let area = Rect::new(0, 0, 40, 1);
        let mut terminal = Terminal::new(TestBackend::new(40, 1)).unwrap();
        terminal
            .draw(|f| render_message(f, &game, area))
            .unwrap();
        let text: String = terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect();
        assert!(text.contains("Not enough letters"));
    }

    #[test]
    fn shake_wobbles_around_center() {
        assert_eq!(shake_offset(0), -1);
        assert_eq!(shake_offset(SHAKE_STEP_MS), 0);
        assert_eq!(shake_offset(SHAKE_STEP_MS * 2), 1);
    }
}
