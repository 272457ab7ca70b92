use alloc::collections::VecDeque;
use alloc::vec::Vec;
use rand::prelude::*;
use rand::rngs::SmallRng;

use crate::*;

/// Game-level state of one minefield: the tile grid, the counters, and the lazily generated mines.
///
/// Mutators take grid coordinates and panic when given coordinates outside the grid or a tile whose state forbids
/// the transition; callers are expected to check [`Self::contains_point`] and the tile state first.
#[derive(Clone, Debug)]
pub struct MinefieldEngine {
    config: GameConfig,
    grid: TileGrid,
    start_tile: StartTile,
    rng: SmallRng,
    preset_layout: Option<MineLayout>,
    mines_generated: bool,
    exploded: bool,
    triggered_mine: Option<Coord2>,
    armed_tile: Option<Coord2>,
    revealed_count: CellCount,
    flagged_count: CellCount,
}

impl MinefieldEngine {
    /// New round on a validated configuration, mines are placed on the first reveal.
    pub fn new(config: GameConfig, seed: u64) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            grid: TileGrid::new(config.size, GridLayout::default()),
            start_tile: StartTile::default(),
            rng: SmallRng::seed_from_u64(seed),
            preset_layout: None,
            mines_generated: false,
            exploded: false,
            triggered_mine: None,
            armed_tile: None,
            revealed_count: 0,
            flagged_count: 0,
        })
    }

    pub fn from_difficulty(difficulty: Difficulty, seed: u64) -> Result<Self> {
        Self::new(difficulty.config(), seed)
    }

    /// First round uses the given mines instead of generating them; later rounds are random again.
    pub fn from_mine_layout(layout: MineLayout, seed: u64) -> Result<Self> {
        let mut engine = Self::new(layout.game_config(), seed)?;
        engine.preset_layout = Some(layout);
        engine.reset_round();
        Ok(engine)
    }

    /// Moves the grid to a new pixel layout. Starts a fresh round.
    ///
    /// # Panics
    ///
    /// Panics if the tile size is not positive.
    pub fn with_grid_layout(mut self, layout: GridLayout) -> Self {
        self.grid = TileGrid::new(self.config.size, layout);
        self.reset_round();
        self
    }

    pub fn with_start_tile(mut self, start_tile: StartTile) -> Self {
        self.start_tile = start_tile;
        self
    }

    /// Starts a new round with the same dimensions; mines are regenerated on the next first reveal.
    pub fn restart(&mut self) {
        self.preset_layout = None;
        self.grid = TileGrid::new(self.config.size, self.grid.layout());
        self.reset_round();
    }

    /// Starts a new round with different dimensions, keeping the pixel layout.
    pub fn reconfigure(&mut self, config: GameConfig) -> Result<()> {
        config.validate()?;
        self.config = config;
        self.restart();
        Ok(())
    }

    fn reset_round(&mut self) {
        self.mines_generated = false;
        self.exploded = false;
        self.triggered_mine = None;
        self.armed_tile = None;
        self.revealed_count = 0;
        self.flagged_count = 0;

        if let Some(layout) = &self.preset_layout {
            self.grid.place_mines(layout);
            self.mines_generated = true;
        }
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn size(&self) -> Coord2 {
        self.config.size
    }

    pub fn start_tile(&self) -> StartTile {
        self.start_tile
    }

    pub fn grid(&self) -> &TileGrid {
        &self.grid
    }

    pub fn tile_at(&self, coords: Coord2) -> &Tile {
        self.grid.tile_at(coords)
    }

    pub fn mine_count(&self) -> CellCount {
        self.config.mines
    }

    pub fn revealed_count(&self) -> CellCount {
        self.revealed_count
    }

    pub fn flagged_count(&self) -> CellCount {
        self.flagged_count
    }

    /// Mines not yet accounted for by a flag, negative when over-flagged.
    pub fn mines_left(&self) -> isize {
        self.config.mines as isize - self.flagged_count as isize
    }

    pub fn mines_generated(&self) -> bool {
        self.mines_generated
    }

    pub fn exploded(&self) -> bool {
        self.exploded
    }

    pub fn triggered_mine(&self) -> Option<Coord2> {
        self.triggered_mine
    }

    pub fn armed_tile(&self) -> Option<Coord2> {
        self.armed_tile
    }

    /// Every safe tile has been revealed.
    pub fn is_complete(&self) -> bool {
        self.revealed_count == self.config.safe_tiles()
    }

    pub fn is_over(&self) -> bool {
        self.exploded || self.is_complete()
    }

    /// Mines only become visible once the round is over.
    pub fn shows_mine_at(&self, coords: Coord2) -> bool {
        self.is_over() && self.grid.tile_at(coords).has_mine()
    }

    /// Number shown on a revealed safe tile, `None` for any other tile.
    pub fn adjacent_mines_at(&self, coords: Coord2) -> Option<u8> {
        let tile = self.grid.tile_at(coords);
        (self.mines_generated && tile.state() == TileState::Revealed && !tile.has_mine())
            .then(|| tile.adjacent_mines())
    }

    pub fn pixel_width(&self) -> i32 {
        self.grid.pixel_width()
    }

    pub fn pixel_height(&self) -> i32 {
        self.grid.pixel_height()
    }

    pub fn bounds(&self) -> Rect {
        self.grid.bounds()
    }

    pub fn contains_point(&self, point: Point) -> bool {
        self.grid.contains_point(point)
    }

    /// # Panics
    ///
    /// Panics if `point` lies outside the grid.
    pub fn coord_from_pixel(&self, point: Point) -> Coord2 {
        self.grid.coord_from_pixel(point)
    }

    pub fn tile_position(&self, coords: Coord2) -> Point {
        self.grid.tile_at(coords).position()
    }

    /// Arms a hidden tile under a press, disarming any previously armed tile.
    ///
    /// # Panics
    ///
    /// Panics if `coords` is outside the grid.
    pub fn press_at(&mut self, coords: Coord2) -> MarkOutcome {
        if self.is_over() || self.grid.tile_at(coords).state() != TileState::Hidden {
            return MarkOutcome::NoChange;
        }
        self.cancel_press();
        self.grid.tile_at_mut(coords).set_state(TileState::PartiallyRevealed);
        self.armed_tile = Some(coords);
        MarkOutcome::Changed
    }

    /// Confirms the armed tile when released on it, cancels the press anywhere else.
    ///
    /// # Panics
    ///
    /// Panics if `coords` is outside the grid.
    pub fn release_at(&mut self, coords: Coord2) -> RevealOutcome {
        self.grid.assert_contains(coords);
        if self.armed_tile == Some(coords) {
            self.reveal_at(coords)
        } else {
            self.cancel_press();
            RevealOutcome::NoChange
        }
    }

    /// Returns the armed tile, if any, to hidden.
    pub fn cancel_press(&mut self) -> MarkOutcome {
        let Some(armed) = self.armed_tile.take() else {
            return MarkOutcome::NoChange;
        };
        let tile = self.grid.tile_at_mut(armed);
        if tile.state() == TileState::PartiallyRevealed {
            tile.set_state(TileState::Hidden);
            MarkOutcome::Changed
        } else {
            MarkOutcome::NoChange
        }
    }

    /// Reveals a hidden or armed tile, generating the mines first on the opening move and flooding out from tiles
    /// with no adjacent mines.
    ///
    /// # Panics
    ///
    /// Panics if `coords` is outside the grid.
    pub fn reveal_at(&mut self, coords: Coord2) -> RevealOutcome {
        if self.is_over() || !self.grid.tile_at(coords).state().is_revealable() {
            return RevealOutcome::NoChange;
        }
        if !self.mines_generated {
            self.generate_mines(coords);
        }
        self.reveal_single_tile(coords)
    }

    /// On a revealed tile, reveals its hidden neighbors when the adjacent flags match its number. On a hidden or
    /// flagged tile, toggles the flag instead.
    ///
    /// # Panics
    ///
    /// Panics if `coords` is outside the grid.
    pub fn chord_at(&mut self, coords: Coord2) -> ActionOutcome {
        match self.grid.tile_at(coords).state() {
            TileState::Revealed => self.chord_reveal(coords).into(),
            TileState::Hidden | TileState::Flagged => self.toggle_flag(coords).into(),
            TileState::PartiallyRevealed => RevealOutcome::NoChange.into(),
        }
    }

    /// # Panics
    ///
    /// Panics if `coords` is outside the grid or the tile is neither hidden nor flagged.
    pub fn toggle_flag(&mut self, coords: Coord2) -> MarkOutcome {
        if self.is_over() {
            return MarkOutcome::NoChange;
        }

        let tile = self.grid.tile_at_mut(coords);
        match tile.state() {
            TileState::Hidden => {
                tile.set_state(TileState::Flagged);
                self.flagged_count += 1;
            }
            TileState::Flagged => {
                tile.set_state(TileState::Hidden);
                self.flagged_count -= 1;
            }
            state => panic!("cannot toggle flag on {state:?} tile at {coords:?}"),
        }
        MarkOutcome::Changed
    }

    /// After a win, flags every mine that is still hidden.
    pub fn flag_remaining_mines(&mut self) -> MarkOutcome {
        if !self.is_complete() {
            return MarkOutcome::NoChange;
        }

        let hidden_mines: Vec<Coord2> = self
            .grid
            .iter()
            .filter(|(_, tile)| tile.has_mine() && tile.state() == TileState::Hidden)
            .map(|(coords, _)| coords)
            .collect();
        for &coords in &hidden_mines {
            self.grid.tile_at_mut(coords).set_state(TileState::Flagged);
            self.flagged_count += 1;
        }

        if hidden_mines.is_empty() {
            MarkOutcome::NoChange
        } else {
            MarkOutcome::Changed
        }
    }

    fn chord_reveal(&mut self, coords: Coord2) -> RevealOutcome {
        if self.is_over() {
            return RevealOutcome::NoChange;
        }

        let adjacent_mines = self.grid.tile_at(coords).adjacent_mines();
        let adjacent_flags = self
            .grid
            .count_adjacent(coords, |tile| tile.state() == TileState::Flagged);
        if adjacent_flags != adjacent_mines {
            return RevealOutcome::NoChange;
        }

        let hidden_neighbors: Vec<Coord2> = self
            .grid
            .neighborhood(coords)
            .iter_adjacent()
            .filter(|&pos| self.grid.tile_at(pos).state() == TileState::Hidden)
            .collect();
        hidden_neighbors
            .into_iter()
            .map(|pos| self.reveal_at(pos))
            .fold(RevealOutcome::NoChange, core::ops::BitOr::bitor)
    }

    fn generate_mines(&mut self, start: Coord2) {
        assert!(!self.mines_generated, "mines already generated this round");
        let seed = self.rng.random();
        let layout = RandomMineGenerator::new(seed, start, self.start_tile).generate(self.config);
        self.grid.place_mines(&layout);
        self.mines_generated = true;
    }

    fn reveal_single_tile(&mut self, coords: Coord2) -> RevealOutcome {
        let tile = self.grid.tile_at_mut(coords);
        tile.set_state(TileState::Revealed);
        let (has_mine, adjacent_mines) = (tile.has_mine(), tile.adjacent_mines());
        self.disarm(coords);

        if has_mine {
            self.exploded = true;
            self.triggered_mine = Some(coords);
            log::info!("Mine exploded at {coords:?}");
            return RevealOutcome::HitMine;
        }
        self.revealed_count += 1;

        if adjacent_mines == 0 {
            self.flood_reveal(coords);
        }

        if self.is_complete() {
            log::info!("All {} safe tiles revealed", self.revealed_count);
            RevealOutcome::Won
        } else {
            RevealOutcome::Revealed
        }
    }

    /// Opens the connected zero region around `origin` together with the numbered tiles bordering it.
    fn flood_reveal(&mut self, origin: Coord2) {
        let mut to_visit: VecDeque<Coord2> = self.grid.neighborhood(origin).iter_adjacent().collect();
        let mut opened: CellCount = 0;

        while let Some(coords) = to_visit.pop_front() {
            let tile = self.grid.tile_at_mut(coords);
            if !tile.state().is_revealable() {
                continue;
            }
            debug_assert!(!tile.has_mine(), "mine next to a zero tile at {coords:?}");

            tile.set_state(TileState::Revealed);
            let adjacent_mines = tile.adjacent_mines();
            self.disarm(coords);
            self.revealed_count += 1;
            opened += 1;

            if adjacent_mines == 0 {
                to_visit.extend(
                    self.grid
                        .neighborhood(coords)
                        .iter_adjacent()
                        .filter(|&pos| self.grid.tile_at(pos).state().is_revealable()),
                );
            }
        }

        log::trace!("Flood from {origin:?} opened {opened} tiles");
    }

    fn disarm(&mut self, coords: Coord2) {
        if self.armed_tile == Some(coords) {
            self.armed_tile = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine(size: Coord2, mines: &[Coord2]) -> MinefieldEngine {
        MinefieldEngine::from_mine_layout(MineLayout::from_mine_coords(size, mines).unwrap(), 0).unwrap()
    }

    /// ```text
    /// . . * . .
    /// . . * . .
    /// . . . . .
    /// ```
    fn column_engine() -> MinefieldEngine {
        engine((5, 3), &[(2, 0), (2, 1)])
    }

    fn revealed_tiles(engine: &MinefieldEngine) -> Vec<Coord2> {
        engine
            .grid()
            .iter()
            .filter(|(_, tile)| tile.state() == TileState::Revealed)
            .map(|(coords, _)| coords)
            .collect()
    }

    #[test]
    fn construction_rejects_invalid_config() {
        let config = GameConfig::new_unchecked((3, 3), 9);

        assert_eq!(
            MinefieldEngine::new(config, 0).map(|_| ()),
            Err(GameError::TooManyMines)
        );
    }

    #[test]
    fn mines_are_generated_lazily_on_first_reveal() {
        let mut engine = MinefieldEngine::new(GameConfig::new((9, 9), 10).unwrap(), 42).unwrap();
        assert!(!engine.mines_generated());
        assert!(engine.grid().iter().all(|(_, tile)| !tile.has_mine()));

        engine.reveal_at((4, 4));

        assert!(engine.mines_generated());
        let mines = engine.grid().iter().filter(|(_, tile)| tile.has_mine()).count();
        assert_eq!(mines, 10);
    }

    #[test]
    fn first_reveal_always_opens_a_zero_tile() {
        for seed in 0..50 {
            let mut engine = MinefieldEngine::from_difficulty(Difficulty::Expert, seed).unwrap();
            let start = ((seed % 30) as Coord, (seed % 16) as Coord);

            let outcome = engine.reveal_at(start);

            assert_eq!(outcome, RevealOutcome::Revealed);
            assert_eq!(engine.adjacent_mines_at(start), Some(0));
            assert!(engine.revealed_count() > 1);
            assert!(!engine.exploded());
        }
    }

    #[test]
    fn first_reveal_in_corner_of_tiny_board_is_zero() {
        for seed in 0..20 {
            let mut engine = MinefieldEngine::new(GameConfig::new((3, 3), 1).unwrap(), seed).unwrap();

            engine.reveal_at((0, 0));

            assert_eq!(engine.adjacent_mines_at((0, 0)), Some(0));
            assert!(!engine.exploded());
        }
    }

    #[test]
    fn first_reveal_in_center_of_tiny_board_falls_back_to_safe() {
        for seed in 0..20 {
            let mut engine = MinefieldEngine::new(GameConfig::new((3, 3), 1).unwrap(), seed).unwrap();

            assert_eq!(engine.reveal_at((1, 1)), RevealOutcome::Revealed);
            assert_eq!(engine.adjacent_mines_at((1, 1)), Some(1));
            assert_eq!(engine.revealed_count(), 1);
        }
    }

    #[test]
    fn random_start_tile_may_explode_on_first_click() {
        let exploded = (0..64).any(|seed| {
            let mut engine = MinefieldEngine::new(GameConfig::new((2, 2), 3).unwrap(), seed)
                .unwrap()
                .with_start_tile(StartTile::Random);
            engine.reveal_at((0, 0)) == RevealOutcome::HitMine
        });

        assert!(exploded);
    }

    #[test]
    fn revealing_mine_explodes_without_counting() {
        let mut engine = column_engine();

        assert_eq!(engine.reveal_at((2, 1)), RevealOutcome::HitMine);
        assert!(engine.exploded());
        assert_eq!(engine.revealed_count(), 0);
        assert_eq!(engine.triggered_mine(), Some((2, 1)));
        assert!(engine.shows_mine_at((2, 0)));
    }

    #[test]
    fn nothing_changes_after_explosion() {
        let mut engine = column_engine();
        engine.reveal_at((2, 0));

        assert_eq!(engine.reveal_at((0, 0)), RevealOutcome::NoChange);
        assert_eq!(engine.toggle_flag((4, 2)), MarkOutcome::NoChange);
        assert_eq!(engine.press_at((4, 2)), MarkOutcome::NoChange);
        assert_eq!(engine.tile_at((0, 0)).state(), TileState::Hidden);
        assert_eq!(engine.revealed_count(), 0);
    }

    #[test]
    fn flood_reveal_stops_at_numbered_border() {
        let mut engine = column_engine();

        assert_eq!(engine.reveal_at((0, 0)), RevealOutcome::Revealed);

        assert_eq!(
            revealed_tiles(&engine),
            [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2), (1, 2)]
        );
        assert_eq!(engine.revealed_count(), 6);
        assert_eq!(engine.adjacent_mines_at((1, 0)), Some(2));
        assert_eq!(engine.adjacent_mines_at((1, 2)), Some(1));
        assert_eq!(engine.tile_at((2, 2)).state(), TileState::Hidden);
    }

    #[test]
    fn flood_reveal_skips_flagged_tiles() {
        let mut engine = column_engine();
        engine.toggle_flag((0, 2));

        engine.reveal_at((0, 0));

        assert_eq!(engine.tile_at((0, 2)).state(), TileState::Flagged);
        assert_eq!(engine.revealed_count(), 5);
    }

    #[test]
    fn numbered_tile_reveals_alone() {
        let mut engine = column_engine();

        engine.reveal_at((1, 1));

        assert_eq!(revealed_tiles(&engine), [(1, 1)]);
    }

    #[test]
    fn revealing_every_safe_tile_wins() {
        let mut engine = MinefieldEngine::from_difficulty(Difficulty::Beginner, 7).unwrap();
        engine.reveal_at((0, 0));

        let mut outcome = RevealOutcome::NoChange;
        let size = engine.size();
        for y in 0..size.1 {
            for x in 0..size.0 {
                if !engine.tile_at((x, y)).has_mine() {
                    outcome = outcome | engine.reveal_at((x, y));
                }
            }
        }

        assert_eq!(outcome, RevealOutcome::Won);
        assert!(engine.is_complete());
        assert_eq!(engine.revealed_count(), 81 - 10);
        assert!(!engine.exploded());
    }

    #[test]
    fn winning_reveal_reports_won() {
        let mut engine = engine((2, 1), &[(0, 0)]);

        assert_eq!(engine.reveal_at((1, 0)), RevealOutcome::Won);
        assert!(engine.is_over());
    }

    #[test]
    fn flag_toggle_round_trips() {
        let mut engine = column_engine();

        assert_eq!(engine.toggle_flag((4, 2)), MarkOutcome::Changed);
        assert_eq!(engine.tile_at((4, 2)).state(), TileState::Flagged);
        assert_eq!(engine.flagged_count(), 1);
        assert_eq!(engine.mines_left(), 1);

        assert_eq!(engine.toggle_flag((4, 2)), MarkOutcome::Changed);
        assert_eq!(engine.tile_at((4, 2)).state(), TileState::Hidden);
        assert_eq!(engine.flagged_count(), 0);
        assert_eq!(engine.mines_left(), 2);
    }

    #[test]
    fn flags_can_exceed_mine_count() {
        let mut engine = column_engine();
        for x in 0..5 {
            engine.toggle_flag((x, 2));
        }

        assert_eq!(engine.mines_left(), -3);
    }

    #[test]
    #[should_panic(expected = "cannot toggle flag on Revealed tile")]
    fn flagging_revealed_tile_panics() {
        let mut engine = column_engine();
        engine.reveal_at((0, 0));
        engine.toggle_flag((0, 0));
    }

    #[test]
    #[should_panic(expected = "outside 5x3 grid")]
    fn revealing_outside_grid_panics() {
        column_engine().reveal_at((5, 0));
    }

    #[test]
    fn chord_with_mismatched_flags_changes_nothing() {
        let mut engine = column_engine();
        engine.reveal_at((0, 0));
        engine.toggle_flag((2, 0));

        let outcome = engine.chord_at((1, 1));

        assert_eq!(outcome, ActionOutcome::Reveal(RevealOutcome::NoChange));
        assert_eq!(engine.tile_at((2, 1)).state(), TileState::Hidden);
        assert_eq!(engine.tile_at((2, 2)).state(), TileState::Hidden);
    }

    #[test]
    fn chord_with_matching_flags_reveals_hidden_neighbors() {
        let mut engine = column_engine();
        engine.reveal_at((0, 0));
        engine.toggle_flag((2, 1));

        let outcome = engine.chord_at((1, 2));

        assert_eq!(outcome, ActionOutcome::Reveal(RevealOutcome::Revealed));
        assert_eq!(engine.adjacent_mines_at((2, 2)), Some(1));
        assert_eq!(engine.tile_at((2, 1)).state(), TileState::Flagged);
    }

    #[test]
    fn chord_with_wrong_flag_explodes() {
        let mut engine = column_engine();
        engine.reveal_at((0, 0));
        engine.toggle_flag((2, 2));

        let outcome = engine.chord_at((1, 2));

        assert_eq!(outcome, ActionOutcome::Reveal(RevealOutcome::HitMine));
        assert!(engine.exploded());
        assert_eq!(engine.triggered_mine(), Some((2, 1)));
    }

    #[test]
    fn chord_on_hidden_or_flagged_tile_toggles_flag() {
        let mut engine = column_engine();

        assert_eq!(engine.chord_at((3, 0)), ActionOutcome::Mark(MarkOutcome::Changed));
        assert_eq!(engine.tile_at((3, 0)).state(), TileState::Flagged);
        assert_eq!(engine.chord_at((3, 0)), ActionOutcome::Mark(MarkOutcome::Changed));
        assert_eq!(engine.tile_at((3, 0)).state(), TileState::Hidden);
        assert_eq!(engine.flagged_count(), 0);
    }

    #[test]
    fn press_and_release_on_same_tile_reveals() {
        let mut engine = column_engine();

        assert_eq!(engine.press_at((4, 0)), MarkOutcome::Changed);
        assert_eq!(engine.tile_at((4, 0)).state(), TileState::PartiallyRevealed);
        assert_eq!(engine.armed_tile(), Some((4, 0)));

        assert_eq!(engine.release_at((4, 0)), RevealOutcome::Revealed);
        assert_eq!(engine.tile_at((4, 0)).state(), TileState::Revealed);
        assert_eq!(engine.armed_tile(), None);
    }

    #[test]
    fn release_on_other_tile_cancels_press() {
        let mut engine = column_engine();
        engine.press_at((4, 0));

        assert_eq!(engine.release_at((4, 2)), RevealOutcome::NoChange);

        assert_eq!(engine.tile_at((4, 0)).state(), TileState::Hidden);
        assert_eq!(engine.tile_at((4, 2)).state(), TileState::Hidden);
        assert_eq!(engine.armed_tile(), None);
        assert_eq!(engine.revealed_count(), 0);
    }

    #[test]
    fn pressing_another_tile_disarms_the_first() {
        let mut engine = column_engine();
        engine.press_at((0, 0));
        engine.press_at((4, 0));

        assert_eq!(engine.tile_at((0, 0)).state(), TileState::Hidden);
        assert_eq!(engine.armed_tile(), Some((4, 0)));
    }

    #[test]
    fn pressing_flagged_tile_does_nothing() {
        let mut engine = column_engine();
        engine.toggle_flag((0, 0));

        assert_eq!(engine.press_at((0, 0)), MarkOutcome::NoChange);
        assert_eq!(engine.armed_tile(), None);
    }

    #[test]
    fn cascade_clears_armed_tile() {
        let mut engine = column_engine();
        engine.press_at((0, 2));

        engine.reveal_at((0, 0));

        assert_eq!(engine.tile_at((0, 2)).state(), TileState::Revealed);
        assert_eq!(engine.armed_tile(), None);
    }

    #[test]
    fn restart_resets_round_and_regenerates() {
        let mut engine = column_engine();
        engine.toggle_flag((4, 2));
        engine.reveal_at((2, 0));

        engine.restart();

        assert!(!engine.exploded());
        assert!(!engine.mines_generated());
        assert_eq!(engine.revealed_count(), 0);
        assert_eq!(engine.flagged_count(), 0);
        assert_eq!(engine.triggered_mine(), None);
        assert!(engine.grid().iter().all(|(_, tile)| tile.state() == TileState::Hidden));

        engine.reveal_at((0, 0));
        assert_eq!(engine.adjacent_mines_at((0, 0)), Some(0));
    }

    #[test]
    fn reconfigure_changes_dimensions() {
        let mut engine = column_engine();

        engine.reconfigure(Difficulty::Intermediate.config()).unwrap();

        assert_eq!(engine.size(), (16, 16));
        assert_eq!(engine.pixel_width(), 16 * GridLayout::DEFAULT_TILE_SIZE);
        assert_eq!(
            engine.reconfigure(GameConfig::new_unchecked((2, 2), 0)),
            Err(GameError::NoMines)
        );
    }

    #[test]
    fn flag_remaining_mines_after_win() {
        let mut engine = column_engine();
        engine.toggle_flag((2, 0));
        engine.reveal_at((0, 0));
        engine.reveal_at((4, 0));
        engine.reveal_at((2, 2));

        assert!(engine.is_complete());
        assert_eq!(engine.flag_remaining_mines(), MarkOutcome::Changed);
        assert_eq!(engine.tile_at((2, 1)).state(), TileState::Flagged);
        assert_eq!(engine.mines_left(), 0);
    }

    #[test]
    fn mines_and_numbers_stay_hidden_during_play() {
        let engine = column_engine();

        assert!(!engine.shows_mine_at((2, 0)));
        assert_eq!(engine.adjacent_mines_at((1, 0)), None);
    }

    #[test]
    fn pixel_queries_follow_grid_layout() {
        let engine = column_engine().with_grid_layout(GridLayout::new(Point::new(10, 20), 20));

        assert_eq!(engine.pixel_width(), 100);
        assert_eq!(engine.pixel_height(), 60);
        assert!(engine.contains_point(Point::new(109, 79)));
        assert_eq!(engine.coord_from_pixel(Point::new(109, 79)), (4, 2));
        assert_eq!(engine.tile_position((1, 1)), Point::new(30, 40));
        assert!(engine.mines_generated());
    }
}
