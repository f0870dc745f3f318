/// Single coordinate axis used for board rows, columns, and positions.
pub type Coord = u16;

/// Count type used for bomb counts and cell counts.
pub type CellCount = u32;

/// Two-dimensional coordinates `(row, col)`.
pub type Coord2 = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

/// Whether `coords` lies inside a grid of `size` rows and columns.
pub const fn in_bounds(coords: Coord2, size: Coord2) -> bool {
    coords.0 < size.0 && coords.1 < size.1
}

/// Row-major iterator over every coordinate of a grid.
pub fn iter_coords((rows, cols): Coord2) -> impl Iterator<Item = Coord2> {
    (0..rows).flat_map(move |row| (0..cols).map(move |col| (row, col)))
}

/// The 3x3 window around `center` clipped to a `size` grid, center excluded, in row-major order.
///
/// Callers that need the playable neighbors go through [`crate::BoardConfig::iter_neighbors`] instead.
pub fn neighbor_window(center: Coord2, (rows, cols): Coord2) -> impl Iterator<Item = Coord2> {
    let (row, col) = center;
    let row_span = row.saturating_sub(1)..=row.saturating_add(1).min(rows.saturating_sub(1));
    let col_span = col.saturating_sub(1)..=col.saturating_add(1).min(cols.saturating_sub(1));
    row_span
        .flat_map(move |r| col_span.clone().map(move |c| (r, c)))
        .filter(move |&pos| pos != center)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corner_has_three_neighbors() {
        let neighbors: Vec<_> = neighbor_window((0, 0), (3, 3)).collect();
        assert_eq!(neighbors, vec![(0, 1), (1, 0), (1, 1)]);
    }

    #[test]
    fn center_has_eight_neighbors() {
        let neighbors: Vec<_> = neighbor_window((1, 1), (3, 3)).collect();
        assert_eq!(neighbors.len(), 8);
        assert!(!neighbors.contains(&(1, 1)));
    }

    #[test]
    fn single_cell_grid_has_no_neighbors() {
        assert_eq!(neighbor_window((0, 0), (1, 1)).count(), 0);
    }

    #[test]
    fn window_past_the_edge_is_clipped() {
        let neighbors: Vec<_> = neighbor_window((3, 0), (3, 2)).collect();
        assert_eq!(neighbors, vec![(2, 0), (2, 1)]);
    }

    #[test]
    fn iter_coords_is_row_major() {
        let coords: Vec<_> = iter_coords((2, 2)).collect();
        assert_eq!(coords, vec![(0, 0), (0, 1), (1, 0), (1, 1)]);
    }
}
