use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Bomb set of a round, fixed once placed.
///
/// Every constructor keeps bombs inside the shape of `config`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BombLayout {
    config: BoardConfig,
    bomb_mask: Array2<bool>,
    bomb_count: CellCount,
}

impl BombLayout {
    pub(crate) fn from_bomb_mask(config: BoardConfig, bomb_mask: Array2<bool>) -> Self {
        let bomb_count = bomb_mask
            .iter()
            .filter(|&&is_bomb| is_bomb)
            .count()
            .try_into()
            .unwrap_or(CellCount::MAX);
        Self {
            config,
            bomb_mask,
            bomb_count,
        }
    }

    /// Builds a layout from explicit bomb positions, rejecting any that could not come out of [`place_bombs`].
    pub fn from_bomb_coords(config: &BoardConfig, start: Coord2, bomb_coords: &[Coord2]) -> Result<Self> {
        let size = config.size();
        if !config.contains(start) {
            return Err(GameError::OutsideShape(start));
        }

        let mut bomb_mask: Array2<bool> = Array2::default(size.to_nd_index());
        for &coords in bomb_coords {
            if !in_bounds(coords, size) {
                return Err(GameError::InvalidCoords(coords));
            }
            if !config.contains(coords) {
                return Err(GameError::OutsideShape(coords));
            }
            if coords == start {
                return Err(GameError::StartCellMined(coords));
            }
            bomb_mask[coords.to_nd_index()] = true;
        }

        Ok(Self::from_bomb_mask(*config, bomb_mask))
    }

    pub fn size(&self) -> Coord2 {
        self.config.size()
    }

    pub fn bomb_count(&self) -> CellCount {
        self.bomb_count
    }

    /// Soft lookup, out-of-bounds coordinates never hold a bomb.
    pub fn contains_bomb(&self, coords: Coord2) -> bool {
        self.bomb_mask
            .get(coords.to_nd_index())
            .copied()
            .unwrap_or(false)
    }

    pub fn adjacent_bomb_count(&self, coords: Coord2) -> u8 {
        let count = self
            .config
            .iter_neighbors(coords)
            .filter(|&pos| self[pos])
            .count();
        u8::try_from(count).unwrap_or(u8::MAX)
    }

    pub fn iter_bombs(&self) -> impl Iterator<Item = Coord2> + '_ {
        iter_coords(self.size()).filter(move |&coords| self[coords])
    }
}

impl Index<Coord2> for BombLayout {
    type Output = bool;

    fn index(&self, (row, col): Coord2) -> &Self::Output {
        &self.bomb_mask[(row as usize, col as usize)]
    }
}
