//! Board engine for a minesweeper variant played on a rectangle or on the ellipse inscribed in it.
//!
//! [`Board`] is a synchronous state machine driven by a presentation layer: it issues commands
//! ([`Board::reveal`], [`Board::toggle_mark`], [`Board::configure`], [`Board::reset`]), reads cell state back through
//! queries, and drains [`BoardEvent`]s to learn what to redraw.

pub use board::*;
pub use cell::*;
pub use config::*;
pub use error::*;
pub use event::*;
pub use layout::*;
pub use placement::*;
pub use shape::*;
pub use types::*;

mod board;
mod cell;
mod config;
mod error;
mod event;
mod layout;
mod placement;
mod shape;
mod types;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MarkOutcome {
    NoChange,
    Changed,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    NoChange,
    Revealed,
    HitBomb,
    Won,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ConfigureOutcome {
    /// Grid was relaid with the new parameters.
    Applied,
    /// Round in progress, parameters take effect on the next reset.
    Deferred,
}
