use serde::{Deserialize, Serialize};

/// Single coordinate axis used for board width, height, and positions.
pub type Coord = u8;

/// Count type used for mine counts and total-tile counts.
pub type CellCount = u16;

/// Two-dimensional tile coordinates `(x, y)`.
pub type Coord2 = (Coord, Coord);

/// Boards are stored row-major, so `(x, y)` maps to the ndarray index `[y, x]`.
pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.1.into(), self.0.into()]
    }
}

/// Shape of a `(width, height)` board as an ndarray dimension.
pub const fn nd_shape((width, height): Coord2) -> (usize, usize) {
    (height as usize, width as usize)
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

/// Pixel-space point, used by the rendering and input collaborators.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned pixel rectangle, `left`/`top` inclusive and `right`/`bottom` exclusive.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Rect {
    pub const fn from_origin(origin: Point, width: i32, height: i32) -> Self {
        Self {
            left: origin.x,
            top: origin.y,
            right: origin.x + width,
            bottom: origin.y + height,
        }
    }

    pub const fn width(&self) -> i32 {
        self.right - self.left
    }

    pub const fn height(&self) -> i32 {
        self.bottom - self.top
    }

    pub const fn contains_point(&self, point: Point) -> bool {
        point.x >= self.left && point.x < self.right && point.y >= self.top && point.y < self.bottom
    }
}

/// The clamped 3×3 box around a tile. Shrinks to 2×3, 3×2 or 2×2 along edges and corners; never wraps.
///
/// Both corners are inclusive and the box always contains its center.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct NeighborBox {
    center: Coord2,
    start: Coord2,
    end: Coord2,
}

impl NeighborBox {
    /// # Panics
    ///
    /// Panics if `center` is outside a board of the given `size`.
    pub fn new(center: Coord2, size: Coord2) -> Self {
        let (x, y) = center;
        let (width, height) = size;
        assert!(
            x < width && y < height,
            "coordinates {center:?} outside {width}x{height} board"
        );
        Self {
            center,
            start: (x.saturating_sub(1), y.saturating_sub(1)),
            end: (x.saturating_add(1).min(width - 1), y.saturating_add(1).min(height - 1)),
        }
    }

    pub const fn center(&self) -> Coord2 {
        self.center
    }

    pub const fn start(&self) -> Coord2 {
        self.start
    }

    pub const fn end(&self) -> Coord2 {
        self.end
    }

    /// Number of tiles in the box, center included.
    pub const fn len(&self) -> CellCount {
        mult(self.end.0 - self.start.0 + 1, self.end.1 - self.start.1 + 1)
    }

    pub const fn is_empty(&self) -> bool {
        false
    }

    pub const fn contains(&self, (x, y): Coord2) -> bool {
        x >= self.start.0 && x <= self.end.0 && y >= self.start.1 && y <= self.end.1
    }

    /// Every tile of the box in row-major order, center included.
    pub fn iter(&self) -> NeighborIter {
        NeighborIter {
            bounds: *self,
            next: Some(self.start),
            skip_center: false,
        }
    }

    /// The tiles touching the center, center excluded.
    pub fn iter_adjacent(&self) -> NeighborIter {
        NeighborIter {
            skip_center: true,
            ..self.iter()
        }
    }
}

impl IntoIterator for NeighborBox {
    type Item = Coord2;
    type IntoIter = NeighborIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[derive(Clone, Debug)]
pub struct NeighborIter {
    bounds: NeighborBox,
    next: Option<Coord2>,
    skip_center: bool,
}

impl NeighborIter {
    fn advance(&mut self, (x, y): Coord2) {
        let NeighborBox { start, end, .. } = self.bounds;
        self.next = if x < end.0 {
            Some((x + 1, y))
        } else if y < end.1 {
            Some((start.0, y + 1))
        } else {
            None
        };
    }
}

impl Iterator for NeighborIter {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let current = self.next?;
            self.advance(current);
            if self.skip_center && current == self.bounds.center {
                continue;
            }
            return Some(current);
        }
    }
}
