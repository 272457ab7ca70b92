use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Difficulty {
    #[default]
    Beginner,
    Intermediate,
    Expert,
    Custom(GameConfig),
}

impl Difficulty {
    pub const PRESETS: [Self; 3] = [Self::Beginner, Self::Intermediate, Self::Expert];

    pub const fn config(self) -> GameConfig {
        match self {
            Self::Beginner => GameConfig::new_unchecked((9, 9), 10),
            Self::Intermediate => GameConfig::new_unchecked((16, 16), 40),
            Self::Expert => GameConfig::new_unchecked((30, 16), 99),
            Self::Custom(config) => config,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Expert => "expert",
            Self::Custom(_) => "custom",
        }
    }

    /// Validated custom difficulty.
    pub fn custom(size: Coord2, mines: CellCount) -> Result<Self> {
        GameConfig::new(size, mines).map(Self::Custom)
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Custom(GameConfig { size: (width, height), mines }) => {
                write!(f, "{width}x{height}:{mines}")
            }
            preset => f.write_str(preset.name()),
        }
    }
}

/// Accepts a preset name or a custom `WIDTHxHEIGHT:MINES` triple.
impl FromStr for Difficulty {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if let Some(preset) = Self::PRESETS
            .into_iter()
            .find(|preset| preset.name().eq_ignore_ascii_case(s))
        {
            return Ok(preset);
        }

        let (size, mines) = s.split_once(':').ok_or(GameError::UnknownDifficulty)?;
        let (width, height) = size
            .split_once(['x', 'X'])
            .ok_or(GameError::UnknownDifficulty)?;
        let parse_coord = |v: &str| v.trim().parse::<Coord>().map_err(|_| GameError::UnknownDifficulty);
        let mines = mines
            .trim()
            .parse::<CellCount>()
            .map_err(|_| GameError::UnknownDifficulty)?;
        Self::custom((parse_coord(width)?, parse_coord(height)?), mines)
    }
}

/// Selection state of the difficulty menu shown between rounds.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct DifficultyMenu {
    highlighted: Option<usize>,
    selected: Option<usize>,
}

impl DifficultyMenu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn options(&self) -> &'static [Difficulty] {
        &Difficulty::PRESETS
    }

    pub fn highlighted(&self) -> Option<usize> {
        self.highlighted
    }

    /// Highlights the option under the cursor, `None` or an unknown index clears it.
    pub fn highlight(&mut self, option: Option<usize>) {
        self.highlighted = option.filter(|&index| index < Difficulty::PRESETS.len());
    }

    /// Selects an option, returning its difficulty. `None` or an unknown index leaves nothing selected.
    pub fn select(&mut self, option: Option<usize>) -> Option<Difficulty> {
        self.selected = option.filter(|&index| index < Difficulty::PRESETS.len());
        self.selected()
    }

    pub fn selected(&self) -> Option<Difficulty> {
        self.selected.map(|index| Difficulty::PRESETS[index])
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
        self.highlighted = None;
    }
}
