use serde::{Deserialize, Serialize};

use crate::*;

/// Parameters of a round: grid dimensions, outline, and bomb density.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoardConfig {
    pub rows: Coord,
    pub cols: Coord,
    #[serde(default)]
    pub shape: Shape,
    /// Percentage of the playable area holding bombs, `0..=100`.
    pub bomb_percent: u8,
}

impl BoardConfig {
    pub const MAX_BOMB_PERCENT: u8 = 100;

    pub const fn new_unchecked(rows: Coord, cols: Coord, shape: Shape, bomb_percent: u8) -> Self {
        Self {
            rows,
            cols,
            shape,
            bomb_percent,
        }
    }

    pub fn new(rows: Coord, cols: Coord, shape: Shape, bomb_percent: u8) -> Self {
        let rows = rows.clamp(1, Coord::MAX);
        let cols = cols.clamp(1, Coord::MAX);
        let bomb_percent = bomb_percent.clamp(0, Self::MAX_BOMB_PERCENT);
        Self::new_unchecked(rows, cols, shape, bomb_percent)
    }

    /// Coerces every field into its valid range.
    pub fn clamped(self) -> Self {
        Self::new(self.rows, self.cols, self.shape, self.bomb_percent)
    }

    pub const fn size(&self) -> Coord2 {
        (self.rows, self.cols)
    }

    pub fn contains(&self, coords: Coord2) -> bool {
        self.shape.contains(self.size(), coords)
    }

    /// In-shape cells of the 8-connected window around `coords`.
    pub fn iter_neighbors(&self, coords: Coord2) -> impl Iterator<Item = Coord2> + use<> {
        let config = *self;
        neighbor_window(coords, config.size()).filter(move |&pos| config.contains(pos))
    }

    pub fn in_shape_count(&self) -> CellCount {
        self.shape.count_cells(self.size())
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self::new_unchecked(16, 16, Shape::Rectangle, 15)
    }
}
