use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Where the grid sits in pixel space.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridLayout {
    pub origin: Point,
    pub tile_size: i32,
}

impl GridLayout {
    pub const DEFAULT_TILE_SIZE: i32 = 16;

    pub const fn new(origin: Point, tile_size: i32) -> Self {
        Self { origin, tile_size }
    }

    /// Places a grid of `size` tiles in the middle of a `screen_width` by `screen_height` screen.
    pub const fn centered(size: Coord2, screen_width: i32, screen_height: i32, tile_size: i32) -> Self {
        let origin = Point::new(
            (screen_width - size.0 as i32 * tile_size) / 2,
            (screen_height - size.1 as i32 * tile_size) / 2,
        );
        Self::new(origin, tile_size)
    }
}

impl Default for GridLayout {
    fn default() -> Self {
        Self::new(Point::default(), Self::DEFAULT_TILE_SIZE)
    }
}

/// Row-major storage of every tile plus the geometry around it. Holds no game rules.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TileGrid {
    tiles: Array2<Tile>,
    layout: GridLayout,
}

impl TileGrid {
    /// # Panics
    ///
    /// Panics if the tile size is not positive.
    pub fn new(size: Coord2, layout: GridLayout) -> Self {
        assert!(layout.tile_size > 0, "tile size must be positive, got {}", layout.tile_size);
        let GridLayout { origin, tile_size } = layout;
        let tiles = Array2::from_shape_fn(nd_shape(size), |(y, x)| {
            Tile::new(Point::new(
                origin.x + x as i32 * tile_size,
                origin.y + y as i32 * tile_size,
            ))
        });
        Self { tiles, layout }
    }

    pub fn size(&self) -> Coord2 {
        let (rows, cols) = self.tiles.dim();
        (cols as Coord, rows as Coord)
    }

    pub fn width(&self) -> Coord {
        self.size().0
    }

    pub fn height(&self) -> Coord {
        self.size().1
    }

    pub fn layout(&self) -> GridLayout {
        self.layout
    }

    pub fn contains(&self, (x, y): Coord2) -> bool {
        let (width, height) = self.size();
        x < width && y < height
    }

    /// # Panics
    ///
    /// Panics if `coords` is outside the grid.
    pub fn tile_at(&self, coords: Coord2) -> &Tile {
        self.assert_contains(coords);
        &self.tiles[coords.to_nd_index()]
    }

    pub(crate) fn tile_at_mut(&mut self, coords: Coord2) -> &mut Tile {
        self.assert_contains(coords);
        &mut self.tiles[coords.to_nd_index()]
    }

    pub fn get(&self, coords: Coord2) -> Option<&Tile> {
        self.contains(coords).then(|| &self.tiles[coords.to_nd_index()])
    }

    pub fn pixel_width(&self) -> i32 {
        self.width() as i32 * self.layout.tile_size
    }

    pub fn pixel_height(&self) -> i32 {
        self.height() as i32 * self.layout.tile_size
    }

    /// World-space bounding box of the whole grid.
    pub fn bounds(&self) -> Rect {
        Rect::from_origin(self.layout.origin, self.pixel_width(), self.pixel_height())
    }

    pub fn contains_point(&self, point: Point) -> bool {
        self.bounds().contains_point(point)
    }

    /// # Panics
    ///
    /// Panics if `point` lies outside [`Self::bounds`].
    pub fn coord_from_pixel(&self, point: Point) -> Coord2 {
        assert!(self.contains_point(point), "point {point:?} outside the grid");
        let GridLayout { origin, tile_size } = self.layout;
        (
            ((point.x - origin.x) / tile_size) as Coord,
            ((point.y - origin.y) / tile_size) as Coord,
        )
    }

    /// The clamped 3×3 box around `coords`.
    ///
    /// # Panics
    ///
    /// Panics if `coords` is outside the grid.
    pub fn neighborhood(&self, coords: Coord2) -> NeighborBox {
        NeighborBox::new(coords, self.size())
    }

    /// Neighbors of `coords` (itself excluded) whose tile satisfies `predicate`.
    pub fn count_adjacent(&self, coords: Coord2, predicate: impl Fn(&Tile) -> bool) -> u8 {
        self.neighborhood(coords)
            .iter_adjacent()
            .filter(|&pos| predicate(&self.tiles[pos.to_nd_index()]))
            .count() as u8
    }

    pub fn iter(&self) -> impl Iterator<Item = (Coord2, &Tile)> {
        self.tiles
            .indexed_iter()
            .map(|((y, x), tile)| ((x as Coord, y as Coord), tile))
    }

    /// Clears every mine, places the ones from `layout` and recomputes all adjacency counts.
    ///
    /// # Panics
    ///
    /// Panics if `layout` does not match the grid size.
    pub(crate) fn place_mines(&mut self, layout: &MineLayout) {
        assert_eq!(layout.size(), self.size(), "mine layout does not match grid size");

        for tile in self.tiles.iter_mut().filter(|tile| tile.has_mine()) {
            tile.set_mine(false);
        }
        for coords in layout.iter_mines() {
            self.tile_at_mut(coords).set_mine(true);
        }

        let size = self.size();
        let counts = Array2::from_shape_fn(nd_shape(size), |(y, x)| {
            self.count_adjacent((x as Coord, y as Coord), Tile::has_mine)
        });
        for (tile, &count) in self.tiles.iter_mut().zip(counts.iter()) {
            tile.set_adjacent_mines(count);
        }
    }

    pub(crate) fn assert_contains(&self, coords: Coord2) {
        let (width, height) = self.size();
        assert!(
            self.contains(coords),
            "coordinates {coords:?} outside {width}x{height} grid"
        );
    }
}

impl Index<Coord2> for TileGrid {
    type Output = Tile;

    fn index(&self, coords: Coord2) -> &Self::Output {
        self.tile_at(coords)
    }
}
