use std::collections::VecDeque;

use ndarray::Array2;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Won,
    Lost,
}

/// Valid transitions:
/// - Setup -> Running, on the first reveal
/// - Running -> Finished
/// - any -> Setup, on reset
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Grid is configurable and no bombs are placed yet.
    #[default]
    Setup,
    /// Bombs are fixed, reveals and marks are accepted.
    Running,
    /// Round is over, nothing changes until a reset.
    Finished(Outcome),
}

impl Phase {
    pub const fn is_setup(self) -> bool {
        matches!(self, Self::Setup)
    }

    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Finished(_))
    }

    pub const fn outcome(self) -> Option<Outcome> {
        match self {
            Self::Finished(outcome) => Some(outcome),
            Self::Setup | Self::Running => None,
        }
    }
}

/// Game state of a single player: the grid, the bombs of the current round, and its phase.
///
/// Commands never fail on bad coordinates, they report [`RevealOutcome::NoChange`] or [`MarkOutcome::NoChange`] and
/// queries answer as if the cell were outside the shape.
#[derive(Clone, Debug)]
pub struct Board {
    config: BoardConfig,
    pending_config: Option<BoardConfig>,
    cells: Array2<CellState>,
    bombs: Option<BombLayout>,
    phase: Phase,
    triggered_bomb: Option<Coord2>,
    marked_count: CellCount,
    rng: SmallRng,
    events: VecDeque<BoardEvent>,
}

impl Board {
    pub fn new(config: BoardConfig, seed: u64) -> Self {
        let config = config.clamped();
        Self {
            config,
            pending_config: None,
            cells: Array2::default(config.size().to_nd_index()),
            bombs: None,
            phase: Phase::Setup,
            triggered_bomb: None,
            marked_count: 0,
            rng: SmallRng::seed_from_u64(seed),
            events: VecDeque::new(),
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn config(&self) -> BoardConfig {
        self.config
    }

    /// Configuration waiting for the next reset.
    pub fn pending_config(&self) -> Option<BoardConfig> {
        self.pending_config
    }

    pub fn size(&self) -> Coord2 {
        self.config.size()
    }

    pub fn shape(&self) -> Shape {
        self.config.shape
    }

    pub fn is_in_shape(&self, coords: Coord2) -> bool {
        self.config.contains(coords)
    }

    pub fn in_shape_count(&self) -> CellCount {
        self.config.in_shape_count()
    }

    pub fn cell_state(&self, coords: Coord2) -> CellState {
        self.cells
            .get(coords.to_nd_index())
            .copied()
            .unwrap_or_default()
    }

    pub fn is_revealed(&self, coords: Coord2) -> bool {
        self.cell_state(coords).is_revealed()
    }

    pub fn is_marked(&self, coords: Coord2) -> bool {
        self.cell_state(coords).is_marked()
    }

    /// Always false until the round has started.
    pub fn is_bomb(&self, coords: Coord2) -> bool {
        self.bombs
            .as_ref()
            .is_some_and(|bombs| bombs.contains_bomb(coords))
    }

    pub fn neighbor_bomb_count(&self, coords: Coord2) -> u8 {
        if !self.is_in_shape(coords) {
            return 0;
        }
        self.bombs
            .as_ref()
            .map_or(0, |bombs| bombs.adjacent_bomb_count(coords))
    }

    pub fn has_won(&self) -> bool {
        self.phase == Phase::Finished(Outcome::Won)
    }

    pub fn bomb_count(&self) -> CellCount {
        self.bombs.as_ref().map_or(0, BombLayout::bomb_count)
    }

    pub fn marked_count(&self) -> CellCount {
        self.marked_count
    }

    /// How many bombs have not been marked yet, negative when there are more marks than bombs.
    pub fn bombs_left(&self) -> i64 {
        i64::from(self.bomb_count()) - i64::from(self.marked_count)
    }

    pub fn triggered_bomb(&self) -> Option<Coord2> {
        self.triggered_bomb
    }

    pub fn cell_view(&self, coords: Coord2) -> CellView {
        if !self.is_in_shape(coords) {
            return CellView::Outside;
        }
        if self.triggered_bomb == Some(coords) {
            return CellView::Exploded;
        }
        if self.phase.is_finished() && self.is_bomb(coords) {
            return CellView::Bomb;
        }
        match self.cell_state(coords) {
            CellState::Hidden => CellView::Hidden,
            CellState::Marked => CellView::Marked,
            CellState::Revealed(count) => CellView::Revealed(count),
        }
    }

    /// Hands the queued notifications over to the caller.
    pub fn drain_events(&mut self) -> impl Iterator<Item = BoardEvent> + '_ {
        self.events.drain(..)
    }

    /// Changes the round parameters, right away during setup and otherwise on the next [`Board::reset`].
    pub fn configure(&mut self, config: BoardConfig) -> ConfigureOutcome {
        let config = config.clamped();
        if self.phase.is_setup() {
            self.config = config;
            self.pending_config = None;
            self.relay();
            ConfigureOutcome::Applied
        } else {
            log::debug!("Deferring {:?} until reset, phase {:?}", config, self.phase);
            self.pending_config = Some(config);
            ConfigureOutcome::Deferred
        }
    }

    /// Discards the round and returns to setup, applying any deferred configuration.
    pub fn reset(&mut self) {
        if let Some(config) = self.pending_config.take() {
            self.config = config;
        }
        self.set_phase(Phase::Setup);
        self.relay();
    }

    pub fn toggle_mark(&mut self, coords: Coord2) -> MarkOutcome {
        if self.phase.is_finished() || !self.is_in_shape(coords) {
            return MarkOutcome::NoChange;
        }

        let index = coords.to_nd_index();
        match self.cells[index] {
            CellState::Hidden => {
                self.cells[index] = CellState::Marked;
                self.marked_count += 1;
                self.events.push_back(BoardEvent::cell(coords, CellChange::Marked));
                MarkOutcome::Changed
            }
            CellState::Marked => {
                self.cells[index] = CellState::Hidden;
                self.marked_count -= 1;
                self.events.push_back(BoardEvent::cell(coords, CellChange::Unmarked));
                MarkOutcome::Changed
            }
            CellState::Revealed(_) => MarkOutcome::NoChange,
        }
    }

    /// Reveals a cell, placing the bombs first if this starts the round.
    pub fn reveal(&mut self, coords: Coord2) -> RevealOutcome {
        if !self.can_reveal(coords) {
            return RevealOutcome::NoChange;
        }

        if self.phase.is_setup() {
            let bombs = place_bombs(&self.config, coords, &mut self.rng);
            self.start(bombs);
        }
        self.reveal_and_settle(coords)
    }

    /// Starts the round with the given bombs instead of random ones, then reveals `start`.
    pub fn start_with_layout(&mut self, start: Coord2, bomb_coords: &[Coord2]) -> Result<RevealOutcome> {
        if !self.phase.is_setup() {
            return Err(GameError::AlreadyStarted);
        }
        let bombs = BombLayout::from_bomb_coords(&self.config, start, bomb_coords)?;

        if !self.can_reveal(start) {
            return Ok(RevealOutcome::NoChange);
        }
        self.start(bombs);
        Ok(self.reveal_and_settle(start))
    }

    /// Whether every safe cell of the playable area is revealed.
    pub fn has_revealed_all(&self) -> bool {
        iter_coords(self.size())
            .filter(|&coords| self.is_in_shape(coords) && !self.is_bomb(coords))
            .all(|coords| self.is_revealed(coords))
    }

    fn can_reveal(&self, coords: Coord2) -> bool {
        !self.phase.is_finished()
            && self.is_in_shape(coords)
            && self.cell_state(coords) == CellState::Hidden
    }

    fn start(&mut self, bombs: BombLayout) {
        log::debug!("Round started with {} bombs", bombs.bomb_count());
        self.bombs = Some(bombs);
        self.set_phase(Phase::Running);
    }

    fn reveal_and_settle(&mut self, coords: Coord2) -> RevealOutcome {
        if self.open(coords) {
            self.triggered_bomb = Some(coords);
            self.finish(Outcome::Lost);
            RevealOutcome::HitBomb
        } else if self.has_revealed_all() {
            self.finish(Outcome::Won);
            RevealOutcome::Won
        } else {
            RevealOutcome::Revealed
        }
    }

    /// Reveals `origin` and flood-fills the zero-count region around it, returns whether `origin` was a bomb.
    fn open(&mut self, origin: Coord2) -> bool {
        let count = self.neighbor_bomb_count(origin);
        self.cells[origin.to_nd_index()] = CellState::Revealed(count);

        if self.is_bomb(origin) {
            log::debug!("Bomb revealed at {:?}", origin);
            self.events
                .push_back(BoardEvent::cell(origin, CellChange::Exploded));
            return true;
        }

        self.events
            .push_back(BoardEvent::cell(origin, CellChange::Revealed(count)));
        log::trace!("Revealed {:?}, bomb count: {}", origin, count);

        if count == 0 {
            let mut to_visit: VecDeque<_> = self.expandable_neighbors(origin).collect();
            log::trace!(
                "Starting flood-fill from {:?}, initial neighbors: {:?}",
                origin,
                to_visit
            );

            while let Some(visit_coords) = to_visit.pop_front() {
                // queued more than once, opened the first time
                if self.cells[visit_coords.to_nd_index()] != CellState::Hidden {
                    continue;
                }

                let visit_count = self.neighbor_bomb_count(visit_coords);
                self.cells[visit_coords.to_nd_index()] = CellState::Revealed(visit_count);
                self.events
                    .push_back(BoardEvent::cell(visit_coords, CellChange::Revealed(visit_count)));
                log::trace!(
                    "Flood revealed {:?}, bomb count: {}",
                    visit_coords,
                    visit_count
                );

                if visit_count == 0 {
                    to_visit.extend(self.expandable_neighbors(visit_coords));
                }
            }
        }

        false
    }

    /// Neighbors the flood fill may open: in shape, still hidden, and safe.
    fn expandable_neighbors(&self, coords: Coord2) -> impl Iterator<Item = Coord2> + '_ {
        self.config
            .iter_neighbors(coords)
            .filter(move |&pos| self.cells[pos.to_nd_index()] == CellState::Hidden && !self.is_bomb(pos))
    }

    fn finish(&mut self, outcome: Outcome) {
        self.set_phase(Phase::Finished(outcome));

        let shown: Vec<Coord2> = self
            .bombs
            .iter()
            .flat_map(BombLayout::iter_bombs)
            .filter(|&coords| Some(coords) != self.triggered_bomb)
            .collect();
        self.events.extend(
            shown
                .into_iter()
                .map(|coords| BoardEvent::cell(coords, CellChange::BombShown)),
        );
    }

    fn set_phase(&mut self, to: Phase) {
        let from = self.phase;
        if from == to {
            return;
        }
        log::debug!("Phase {:?} -> {:?}", from, to);
        self.phase = to;
        self.events.push_back(BoardEvent::PhaseChanged { from, to });
    }

    /// Clears every cell and the bombs, laying out the grid for the current configuration.
    fn relay(&mut self) {
        self.cells = Array2::default(self.config.size().to_nd_index());
        self.bombs = None;
        self.triggered_bomb = None;
        self.marked_count = 0;
        log::debug!("Board relaid for {:?}", self.config);
        self.events.push_back(BoardEvent::BoardRelaid {
            config: self.config,
        });
    }
}
