//! Minefield engine: tile grid geometry, lazy mine placement with first-click safety, flood reveal, chording and
//! the tile state machine, plus the difficulty presets and pointer-input dispatch that drive it.
#![no_std]

extern crate alloc;

use core::ops::{BitOr, Index, IndexMut};
use ndarray::Array2;
use serde::{Deserialize, Serialize};

pub use difficulty::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use grid::*;
pub use input::*;
pub use tile::*;
pub use types::*;

mod difficulty;
mod engine;
mod error;
mod generator;
mod grid;
mod input;
mod tile;
mod types;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub size: Coord2,
    pub mines: CellCount,
}

impl GameConfig {
    pub const fn new_unchecked(size: Coord2, mines: CellCount) -> Self {
        Self { size, mines }
    }

    /// Validates `0 < mines < width * height` on a non-empty board.
    pub fn new(size: Coord2, mines: CellCount) -> Result<Self> {
        let config = Self::new_unchecked(size, mines);
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.size.0 == 0 || self.size.1 == 0 {
            Err(GameError::EmptyBoard)
        } else if self.mines == 0 {
            Err(GameError::NoMines)
        } else if self.mines >= self.total_tiles() {
            Err(GameError::TooManyMines)
        } else {
            Ok(())
        }
    }

    pub const fn width(&self) -> Coord {
        self.size.0
    }

    pub const fn height(&self) -> Coord {
        self.size.1
    }

    pub const fn total_tiles(&self) -> CellCount {
        mult(self.size.0, self.size.1)
    }

    pub const fn safe_tiles(&self) -> CellCount {
        self.total_tiles().saturating_sub(self.mines)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MineLayout {
    mine_mask: Array2<bool>,
    mine_count: CellCount,
}

impl MineLayout {
    pub(crate) fn empty(size: Coord2) -> Self {
        Self {
            mine_mask: Array2::default(nd_shape(size)),
            mine_count: 0,
        }
    }

    /// Rejects masks with more rows or columns than a [`Coord`] can address.
    pub fn from_mine_mask(mine_mask: Array2<bool>) -> Result<Self> {
        let (rows, cols) = mine_mask.dim();
        Coord::try_from(rows).map_err(|_| GameError::InvalidBoardShape)?;
        Coord::try_from(cols).map_err(|_| GameError::InvalidBoardShape)?;

        let mine_count = mine_mask.iter().filter(|&&is_mine| is_mine).count();
        let mine_count = CellCount::try_from(mine_count).map_err(|_| GameError::InvalidBoardShape)?;
        Ok(Self { mine_mask, mine_count })
    }

    pub fn from_mine_coords(size: Coord2, mine_coords: &[Coord2]) -> Result<Self> {
        let mut layout = Self::empty(size);

        for &coords in mine_coords {
            let coords = layout.validate_coords(coords)?;
            layout.mine_mask[coords.to_nd_index()] = true;
        }

        Self::from_mine_mask(layout.mine_mask)
    }

    pub fn game_config(&self) -> GameConfig {
        GameConfig::new_unchecked(self.size(), self.mine_count)
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let size = self.size();
        if coords.0 < size.0 && coords.1 < size.1 {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    pub fn size(&self) -> Coord2 {
        let (rows, cols) = self.mine_mask.dim();
        // both dimensions are checked against `Coord` on construction
        (cols as Coord, rows as Coord)
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn contains_mine(&self, coords: Coord2) -> bool {
        self[coords]
    }

    /// Mines in the tiles touching `coords`, the tile itself excluded.
    pub fn adjacent_mine_count(&self, coords: Coord2) -> u8 {
        NeighborBox::new(coords, self.size())
            .iter_adjacent()
            .filter(|&pos| self[pos])
            .count() as u8
    }

    pub fn iter_mines(&self) -> impl Iterator<Item = Coord2> + '_ {
        self.mine_mask
            .indexed_iter()
            .filter(|&(_, &is_mine)| is_mine)
            .map(|((y, x), _)| (x as Coord, y as Coord))
    }
}

impl Index<Coord2> for MineLayout {
    type Output = bool;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.mine_mask[coords.to_nd_index()]
    }
}

impl IndexMut<Coord2> for MineLayout {
    fn index_mut(&mut self, coords: Coord2) -> &mut Self::Output {
        &mut self.mine_mask[coords.to_nd_index()]
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum MarkOutcome {
    NoChange,
    Changed,
}

impl MarkOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Changed => true,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum RevealOutcome {
    NoChange,
    Revealed,
    HitMine,
    Won,
}

impl RevealOutcome {
    pub const fn has_update(self) -> bool {
        use RevealOutcome::*;
        match self {
            NoChange => false,
            Revealed => true,
            HitMine => true,
            Won => true,
        }
    }
}

/// Used to merge outcomes when revealing several tiles at once
impl BitOr for RevealOutcome {
    type Output = RevealOutcome;

    fn bitor(self, rhs: Self) -> Self::Output {
        use RevealOutcome::*;
        match (self, rhs) {
            (HitMine, _) => HitMine,
            (_, HitMine) => HitMine,
            (Won, _) => Won,
            (_, Won) => Won,
            (Revealed, _) => Revealed,
            (_, Revealed) => Revealed,
            (NoChange, NoChange) => NoChange,
        }
    }
}

/// Result of a dual-purpose action that either reveals or marks depending on the tile.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ActionOutcome {
    Reveal(RevealOutcome),
    Mark(MarkOutcome),
}

impl ActionOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::Reveal(outcome) => outcome.has_update(),
            Self::Mark(outcome) => outcome.has_update(),
        }
    }
}

impl From<RevealOutcome> for ActionOutcome {
    fn from(outcome: RevealOutcome) -> Self {
        Self::Reveal(outcome)
    }
}

impl From<MarkOutcome> for ActionOutcome {
    fn from(outcome: MarkOutcome) -> Self {
        Self::Mark(outcome)
    }
}
