use crate::*;

/// Player-visible state of a tile. `Revealed` is terminal.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum TileState {
    #[default]
    Hidden,
    Revealed,
    Flagged,
}

impl TileState {
    pub const fn is_hidden(self) -> bool {
        matches!(self, Self::Hidden)
    }

    pub const fn is_revealed(self) -> bool {
        matches!(self, Self::Revealed)
    }

    pub const fn is_flagged(self) -> bool {
        matches!(self, Self::Flagged)
    }
}

/// One cell of the grid. Only the engine changes `state`, everything else is fixed at creation.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Tile {
    position: Coord2,
    has_mine: bool,
    state: TileState,
    adjacent_mines: u8,
}

impl Tile {
    pub(crate) const fn new(position: Coord2, has_mine: bool, adjacent_mines: u8) -> Self {
        Self {
            position,
            has_mine,
            state: TileState::Hidden,
            adjacent_mines,
        }
    }

    pub const fn position(&self) -> Coord2 {
        self.position
    }

    pub const fn x(&self) -> Coord {
        self.position.0
    }

    pub const fn y(&self) -> Coord {
        self.position.1
    }

    /// Renderers should only show this once the tile is revealed or the game is lost.
    pub const fn has_mine(&self) -> bool {
        self.has_mine
    }

    pub const fn state(&self) -> TileState {
        self.state
    }

    pub const fn adjacent_mines(&self) -> u8 {
        self.adjacent_mines
    }

    pub(crate) fn set_state(&mut self, state: TileState) {
        self.state = state;
    }
}
