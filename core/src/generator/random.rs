use alloc::vec::Vec;
use rand::prelude::*;
use rand::rngs::SmallRng;

use super::*;

/// Generation strategy that keeps the starting tile zero or at least safe, but other than that is purely random.
///
/// Mines are sampled uniformly without replacement from the tiles outside the protected region, so the guarantee
/// holds on the first try instead of regenerating whole boards until the start happens to be clear.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomMineGenerator {
    seed: u64,
    start: Coord2,
    start_tile: StartTile,
}

impl RandomMineGenerator {
    pub fn new(seed: u64, start: Coord2, start_tile: StartTile) -> Self {
        Self {
            seed,
            start,
            start_tile,
        }
    }

    /// Downgrades the requested policy until the protected region leaves room for every mine.
    fn feasible_start_tile(&self, config: GameConfig, protected: &NeighborBox) -> StartTile {
        use StartTile::*;

        let total_tiles = config.total_tiles();
        match self.start_tile {
            Random => Random,
            SimpleSafe | AlwaysZero if config.mines + 1 > total_tiles => {
                log::warn!("Cannot make start tile safe, fallback to random");
                Random
            }
            SimpleSafe => SimpleSafe,
            AlwaysZero if config.mines + protected.len() > total_tiles => {
                log::warn!("Cannot make start tile zero, fallback to simple safe");
                SimpleSafe
            }
            AlwaysZero => AlwaysZero,
        }
    }
}

impl MineGenerator for RandomMineGenerator {
    /// # Panics
    ///
    /// Panics if the start coordinates lie outside the configured board.
    fn generate(self, config: GameConfig) -> MineLayout {
        use StartTile::*;

        let (width, _) = config.size;
        let total_tiles = config.total_tiles();
        let mut layout = MineLayout::empty(config.size);

        // optimize for full boards
        if config.mines >= total_tiles {
            log::warn!(
                "Minefield already full, generated anyway, requested {} but only fits {}",
                config.mines,
                total_tiles
            );
            return MineLayout {
                mine_mask: ndarray::Array2::from_elem(nd_shape(config.size), true),
                mine_count: total_tiles,
            };
        }

        let protected = NeighborBox::new(self.start, config.size);
        let start_tile = self.feasible_start_tile(config, &protected);
        let is_protected = |coords: Coord2| match start_tile {
            Random => false,
            SimpleSafe => coords == self.start,
            AlwaysZero => protected.contains(coords),
        };

        let to_coords = |index: usize| ((index % width as usize) as Coord, (index / width as usize) as Coord);
        let mut free_tiles: Vec<Coord2> = (0..total_tiles as usize)
            .map(to_coords)
            .filter(|&coords| !is_protected(coords))
            .collect();

        let mut rng = SmallRng::seed_from_u64(self.seed);
        for _ in 0..config.mines {
            let pick = rng.random_range(0..free_tiles.len());
            let coords = free_tiles.swap_remove(pick);
            layout[coords] = true;
        }

        log::debug!(
            "Generated {} mines on {}x{} with seed {}, start {:?} ({:?})",
            config.mines,
            config.size.0,
            config.size.1,
            self.seed,
            self.start,
            start_tile
        );
        layout.mine_count = config.mines;
        layout
    }
}
