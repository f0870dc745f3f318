use serde::{Deserialize, Serialize};

use crate::*;

/// Outline of the playable area inside the bounding rectangle.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Shape {
    #[default]
    Rectangle,
    /// Filled ellipse inscribed in the bounding rectangle.
    Ellipse,
}

impl Shape {
    /// Whether the cell at `coords` is part of the playable area of a `size` grid.
    ///
    /// Recomputed on every call from its arguments.
    pub fn contains(self, size: Coord2, coords: Coord2) -> bool {
        if !in_bounds(coords, size) {
            return false;
        }

        match self {
            Self::Rectangle => true,
            Self::Ellipse => ellipse_coverage(size, coords) >= MIN_COVERAGE,
        }
    }

    /// Number of cells of a `size` grid inside this shape.
    pub fn count_cells(self, size: Coord2) -> CellCount {
        match self {
            Self::Rectangle => mult(size.0, size.1),
            Self::Ellipse => iter_coords(size)
                .filter(|&coords| self.contains(size, coords))
                .count()
                .try_into()
                .unwrap_or(CellCount::MAX),
        }
    }
}

/// Fraction of a cell's area the ellipse has to cover for the cell to be included.
const MIN_COVERAGE: f64 = 0.5;

/// Cell clipped to the first quadrant of the ellipse, as offsets from its axes.
#[derive(Copy, Clone, Debug)]
struct QuadrantCell {
    left: f64,
    right: f64,
    bottom: f64,
    top: f64,
}

impl QuadrantCell {
    /// Reflects the cell into the first quadrant and cuts off any part lying in the others.
    fn new((row, col): Coord2, a: f64, b: f64) -> Self {
        let dx = (f64::from(col) + 0.5 - a).abs();
        let dy = (f64::from(row) + 0.5 - b).abs();
        Self {
            left: (dx - 0.5).max(0.0),
            right: dx + 0.5,
            bottom: (dy - 0.5).max(0.0),
            top: dy + 0.5,
        }
    }

    fn width(&self) -> f64 {
        self.right - self.left
    }

    fn height(&self) -> f64 {
        self.top - self.bottom
    }

    fn area(&self) -> f64 {
        self.width() * self.height()
    }
}

/// `b * sqrt(1 - (x / a)^2)`, the upper arc of an ellipse with semi-axes `a` and `b`.
///
/// Swapping the axes gives the inverse, the `x` at which the arc reaches a given height.
fn arc(x: f64, a: f64, b: f64) -> f64 {
    let t = (x / a).clamp(-1.0, 1.0);
    b * (1.0 - t * t).max(0.0).sqrt()
}

/// Antiderivative of [`arc`]: `ab/2 * (asin(x/a) + x/a * sqrt(1 - (x/a)^2))`.
fn arc_integral(x: f64, a: f64, b: f64) -> f64 {
    let t = (x / a).clamp(-1.0, 1.0);
    a * b / 2.0 * (t.asin() + t * (1.0 - t * t).max(0.0).sqrt())
}

/// Fraction of the cell at `coords` covered by the ellipse inscribed in a `size` grid.
fn ellipse_coverage((rows, cols): Coord2, coords: Coord2) -> f64 {
    // semi major and semi minor axes
    let a = f64::from(cols) / 2.0;
    let b = f64::from(rows) / 2.0;
    let cell = QuadrantCell::new(coords, a, b);

    // the arc is decreasing, so left of `lo` the cell is fully covered and right of `hi` not at all
    let lo = if arc(cell.left, a, b) <= cell.top {
        cell.left
    } else {
        arc(cell.top, b, a).min(cell.right)
    };
    // where the arc exits through the bottom edge, `hi` is that crossing, so the covered fraction is exact
    let hi = if arc(cell.right, a, b) >= cell.bottom {
        cell.right
    } else {
        arc(cell.bottom, b, a).clamp(lo, cell.right)
    };

    let covered = arc_integral(hi, a, b) - arc_integral(lo, a, b) - (hi - lo) * cell.bottom
        + (lo - cell.left) * cell.height();
    covered / cell.area()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SIZES: [Coord2; 8] = [(1, 1), (1, 5), (2, 3), (5, 5), (7, 4), (10, 10), (9, 16), (16, 30)];

    /// Coverage measured by sampling a dense lattice inside the cell.
    fn sampled_coverage((rows, cols): Coord2, (row, col): Coord2) -> f64 {
        const STEPS: u32 = 200;
        let a = f64::from(cols) / 2.0;
        let b = f64::from(rows) / 2.0;
        let mut inside = 0u32;
        for i in 0..STEPS {
            for j in 0..STEPS {
                let x = f64::from(col) + (f64::from(j) + 0.5) / f64::from(STEPS) - a;
                let y = f64::from(row) + (f64::from(i) + 0.5) / f64::from(STEPS) - b;
                if (x / a).powi(2) + (y / b).powi(2) <= 1.0 {
                    inside += 1;
                }
            }
        }
        f64::from(inside) / f64::from(STEPS * STEPS)
    }

    #[test]
    fn rectangle_contains_every_cell_in_bounds() {
        for size in SIZES {
            assert!(iter_coords(size).all(|coords| Shape::Rectangle.contains(size, coords)));
            assert_eq!(Shape::Rectangle.count_cells(size), mult(size.0, size.1));
        }
    }

    #[test]
    fn out_of_bounds_is_never_contained() {
        for shape in [Shape::Rectangle, Shape::Ellipse] {
            assert!(!shape.contains((5, 5), (5, 0)));
            assert!(!shape.contains((5, 5), (0, 5)));
            assert!(!shape.contains((5, 5), (Coord::MAX, Coord::MAX)));
        }
    }

    #[test]
    fn ellipse_is_symmetric_about_both_axes() {
        for size @ (rows, cols) in SIZES {
            for (row, col) in iter_coords(size) {
                let here = Shape::Ellipse.contains(size, (row, col));
                assert_eq!(here, Shape::Ellipse.contains(size, (rows - 1 - row, col)));
                assert_eq!(here, Shape::Ellipse.contains(size, (row, cols - 1 - col)));
            }
        }
    }

    #[test]
    fn ellipse_coverage_matches_sampling() {
        for size in SIZES {
            for coords in iter_coords(size) {
                let analytic = ellipse_coverage(size, coords);
                let sampled = sampled_coverage(size, coords);
                assert!(
                    (analytic - sampled).abs() < 0.02,
                    "size {size:?} cell {coords:?}: analytic {analytic}, sampled {sampled}"
                );
            }
        }
    }

    #[test]
    fn ellipse_drops_corners_and_keeps_axes() {
        let size = (10, 10);
        for corner in [(0, 0), (0, 9), (9, 0), (9, 9), (1, 0), (0, 1)] {
            assert!(!Shape::Ellipse.contains(size, corner), "{corner:?}");
        }
        for axis in [(0, 4), (0, 5), (4, 0), (5, 9), (9, 4), (4, 4)] {
            assert!(Shape::Ellipse.contains(size, axis), "{axis:?}");
        }
        let count = Shape::Ellipse.count_cells(size);
        assert!(count < 100 && count > 60, "{count}");
    }

    #[test]
    fn single_cell_ellipse_is_playable() {
        assert!(Shape::Ellipse.contains((1, 1), (0, 0)));
        assert_eq!(Shape::Ellipse.count_cells((1, 1)), 1);
    }

    #[test]
    fn thin_ellipse_keeps_middle_of_the_strip() {
        let size = (1, 5);
        assert!(Shape::Ellipse.contains(size, (0, 2)));
        assert!(Shape::Ellipse.contains(size, (0, 1)));
    }
}
