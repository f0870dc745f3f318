use ndarray::Array2;
use rand::Rng;

use crate::*;

/// Number of bombs for a round with `eligible` candidate cells.
///
/// The percentage is taken over the whole playable area, which includes the excluded start cell, and rounded half
/// up. At least one bomb is placed whenever there is room for one.
pub fn bomb_count_for(eligible: CellCount, bomb_percent: u8) -> CellCount {
    if eligible == 0 {
        return 0;
    }
    let percent = u64::from(bomb_percent.min(BoardConfig::MAX_BOMB_PERCENT));
    let area = u64::from(eligible) + 1;
    let rounded = (area * percent + 50) / 100;
    let rounded = CellCount::try_from(rounded).unwrap_or(CellCount::MAX);
    rounded.clamp(1, eligible)
}

/// Chooses the bombs of a round uniformly at random among the in-shape cells other than `start`.
pub fn place_bombs<R: Rng + ?Sized>(config: &BoardConfig, start: Coord2, rng: &mut R) -> BombLayout {
    let size = config.size();
    let eligible: Vec<Coord2> = iter_coords(size)
        .filter(|&coords| coords != start && config.contains(coords))
        .collect();

    let eligible_count = CellCount::try_from(eligible.len()).unwrap_or(CellCount::MAX);
    let bomb_count = bomb_count_for(eligible_count, config.bomb_percent);
    if bomb_count == 0 {
        log::warn!("No cells left for bombs around start {:?}, round is won on the first reveal", start);
    }

    let mut bomb_mask: Array2<bool> = Array2::default(size.to_nd_index());
    for index in rand::seq::index::sample(rng, eligible.len(), bomb_count as usize) {
        bomb_mask[eligible[index].to_nd_index()] = true;
    }

    log::debug!(
        "Placed {} bombs among {} eligible cells, start {:?}",
        bomb_count,
        eligible_count,
        start
    );
    BombLayout::from_bomb_mask(*config, bomb_mask)
}
