//! Tiles and their reveal states

/// Reveal state of a tile (and best-known state of a keyboard letter)
///
/// Variants are ordered by how much they tell the player, so
/// `Absent < Present < Correct`. `Initial` sorts below everything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum TileState {
    #[default]
    Initial,
    Absent,
    Present,
    Correct,
}

impl TileState {
    /// Emoji used in the result transcript
    ///
    /// Unrevealed tiles have no emoji.
    #[must_use]
    pub const fn emoji(self) -> Option<char> {
        match self {
            Self::Initial => None,
            Self::Correct => Some('🟩'),
            Self::Present => Some('🟨'),
            Self::Absent => Some('⬜'),
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_revealed(self) -> bool {
        !matches!(self, Self::Initial)
    }
}

/// One letter cell of the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Tile {
    letter: Option<u8>,
    state: TileState,
}

impl Tile {
    #[inline]
    #[must_use]
    pub const fn letter(&self) -> Option<u8> {
        self.letter
    }

    #[inline]
    #[must_use]
    pub const fn state(&self) -> TileState {
        self.state
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.letter.is_none()
    }

    /// Letter as an uppercase char for display, or a space when empty
    #[must_use]
    pub fn display_char(&self) -> char {
        self.letter
            .map_or(' ', |l| char::from(l).to_ascii_uppercase())
    }

    pub(crate) fn set_letter(&mut self, letter: Option<u8>) {
        debug_assert!(!self.state.is_revealed(), "revealed tiles are frozen");
        self.letter = letter;
    }

    pub(crate) fn reveal(&mut self, state: TileState) {
        debug_assert!(!self.state.is_revealed(), "tiles are revealed only once");
        self.state = state;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_ordering_ranks_information() {
        assert!(TileState::Correct > TileState::Present);
        assert!(TileState::Present > TileState::Absent);
        assert!(TileState::Absent > TileState::Initial);
    }

    #[test]
    fn state_emoji() {
        assert_eq!(TileState::Correct.emoji(), Some('🟩'));
        assert_eq!(TileState::Present.emoji(), Some('🟨'));
        assert_eq!(TileState::Absent.emoji(), Some('⬜'));
        assert_eq!(TileState::Initial.emoji(), None);
    }

    #[test]
    fn tile_starts_empty_and_unrevealed() {
        let tile = Tile::default();
        assert!(tile.is_empty());
        assert_eq!(tile.state(), TileState::Initial);
        assert_eq!(tile.display_char(), ' ');
    }

    #[test]
    fn tile_fill_and_reveal() {
        let mut tile = Tile::default();
        tile.set_letter(Some(b'q'));
        assert_eq!(tile.display_char(), 'Q');
        tile.reveal(TileState::Present);
        assert_eq!(tile.state(), TileState::Present);
        assert_eq!(tile.letter(), Some(b'q'));
    }
}
