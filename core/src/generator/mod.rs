use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::*;
pub use random::*;

mod random;

pub trait MineGenerator {
    fn generate(self, config: GameConfig) -> MineLayout;
}

/// How much safety the first revealed tile is guaranteed.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StartTile {
    /// No guarantee, the first click may explode.
    Random,
    /// The first tile never holds a mine.
    SimpleSafe,
    /// The first tile has no adjacent mines, so the opening move always cascades.
    #[default]
    AlwaysZero,
}

impl StartTile {
    pub const ALL: [Self; 3] = [Self::Random, Self::SimpleSafe, Self::AlwaysZero];

    pub const fn name(self) -> &'static str {
        match self {
            Self::Random => "random",
            Self::SimpleSafe => "simple-safe",
            Self::AlwaysZero => "always-zero",
        }
    }
}

impl FromStr for StartTile {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|start_tile| start_tile.name().eq_ignore_ascii_case(s))
            .ok_or(GameError::UnknownStartTile)
    }
}
