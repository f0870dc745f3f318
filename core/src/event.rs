use serde::{Deserialize, Serialize};

use crate::*;

/// Change to a single cell, as seen by the player.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellChange {
    Revealed(u8),
    Marked,
    Unmarked,
    /// The player revealed a bomb.
    Exploded,
    /// Remaining bomb uncovered when the round ended.
    BombShown,
}

/// Notification queued by [`Board`] for the presentation layer.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoardEvent {
    CellChanged { coords: Coord2, change: CellChange },
    /// Round started or ended, e.g. to start or stop a clock and lock the settings.
    PhaseChanged { from: Phase, to: Phase },
    /// Grid was cleared, possibly with new dimensions or shape.
    BoardRelaid { config: BoardConfig },
}

impl BoardEvent {
    pub const fn cell(coords: Coord2, change: CellChange) -> Self {
        Self::CellChanged { coords, change }
    }
}
