use serde::{Deserialize, Serialize};

use crate::Point;

/// Player-visible state of a tile.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TileState {
    #[default]
    Hidden,
    /// Pressed but not yet released, reverts to `Hidden` when the press is dragged off.
    PartiallyRevealed,
    Revealed,
    Flagged,
}

impl TileState {
    /// Hidden or armed, i.e. a reveal would open it.
    pub const fn is_revealable(self) -> bool {
        matches!(self, Self::Hidden | Self::PartiallyRevealed)
    }

    pub const fn is_flaggable(self) -> bool {
        matches!(self, Self::Hidden | Self::Flagged)
    }

    pub const fn can_transition_to(self, next: Self) -> bool {
        use TileState::*;
        match next {
            Revealed => matches!(self, Hidden | PartiallyRevealed),
            PartiallyRevealed => matches!(self, Hidden),
            Hidden => matches!(self, PartiallyRevealed | Flagged),
            Flagged => matches!(self, Hidden),
        }
    }
}

/// One cell of the grid.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Tile {
    state: TileState,
    mine: bool,
    adjacent_mines: u8,
    position: Point,
}

impl Tile {
    pub(crate) const fn new(position: Point) -> Self {
        Self {
            state: TileState::Hidden,
            mine: false,
            adjacent_mines: 0,
            position,
        }
    }

    pub const fn state(&self) -> TileState {
        self.state
    }

    /// Top-left pixel corner of the tile.
    pub const fn position(&self) -> Point {
        self.position
    }

    pub(crate) const fn has_mine(&self) -> bool {
        self.mine
    }

    pub(crate) const fn adjacent_mines(&self) -> u8 {
        self.adjacent_mines
    }

    /// # Panics
    ///
    /// Panics on a transition the tile state machine does not allow.
    pub(crate) fn set_state(&mut self, next: TileState) {
        assert!(
            self.state.can_transition_to(next),
            "illegal tile transition {:?} -> {:?} at {:?}",
            self.state,
            next,
            self.position
        );
        self.state = next;
    }

    /// # Panics
    ///
    /// Panics when the tile already holds the requested mine state.
    pub(crate) fn set_mine(&mut self, mine: bool) {
        assert_ne!(self.mine, mine, "mine already set to {mine} at {:?}", self.position);
        self.mine = mine;
    }

    pub(crate) fn set_adjacent_mines(&mut self, count: u8) {
        debug_assert!(count <= 8);
        self.adjacent_mines = count;
    }
}
