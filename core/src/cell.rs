use serde::{Deserialize, Serialize};

/// Player-visible state stored by the board for every cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellState {
    #[default]
    Hidden,
    Marked,
    /// Revealed with the number of neighboring bombs.
    Revealed(u8),
}

impl CellState {
    pub const fn is_revealed(self) -> bool {
        matches!(self, Self::Revealed(_))
    }

    pub const fn is_marked(self) -> bool {
        matches!(self, Self::Marked)
    }
}

/// What a presentation layer should draw for a cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellView {
    /// Not part of the playable area.
    Outside,
    Hidden,
    Marked,
    /// Safe cell with its neighbor bomb count, zero is drawn blank.
    Revealed(u8),
    /// Bomb shown once the round is over.
    Bomb,
    /// The bomb that ended the round.
    Exploded,
}
