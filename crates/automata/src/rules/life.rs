//! Fixed two-state rule: survive on 2-3 live neighbors, birth on exactly 3.

use crate::neighborhood::{count_state, Boundary};
use crate::Grid;

/// Compute the next generation. Reads only `grid`; every destination cell
/// depends on the previous generation alone.
#[must_use]
pub fn advance(grid: &Grid, boundary: Boundary) -> Grid {
    let mut next = Grid::empty_like(grid);

    for y in 0..grid.height() as i32 {
        for x in 0..grid.width() as i32 {
            let n = count_state(grid, x, y, 1, boundary);
            let alive = grid.at(x, y) == 1;
            let lives = if alive { n == 2 || n == 3 } else { n == 3 };
            if lives {
                next.put(x, y, 1);
            }
        }
    }

    next
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_grid_stays_empty() {
        let grid = Grid::new(8, 8, 0).unwrap();
        let next = advance(&grid, Boundary::Wrap);
        assert!(next.cells().iter().all(|&c| c == 0));
    }

    #[test]
    fn block_is_a_still_life_on_a_wrapped_grid() {
        let mut grid = Grid::new(4, 4, 0).unwrap();
        for (x, y) in [(1, 1), (2, 1), (1, 2), (2, 2)] {
            grid.set(x, y, 1).unwrap();
        }
        let next = advance(&grid, Boundary::Wrap);
        assert_eq!(next, grid);
    }

    #[test]
    fn blinker_oscillates_with_period_two() {
        let mut grid = Grid::new(5, 5, 0).unwrap();
        for x in 1..=3 {
            grid.set(x, 2, 1).unwrap();
        }
        let start = grid.clone();

        let one = advance(&grid, Boundary::Wrap);
        assert_ne!(one, start);
        for y in 1..=3 {
            assert_eq!(one.get(2, y), Ok(1));
        }

        let two = advance(&one, Boundary::Wrap);
        assert_eq!(two, start);
    }

    #[test]
    fn lone_cell_dies_of_underpopulation() {
        let mut grid = Grid::new(6, 6, 0).unwrap();
        grid.set(3, 3, 1).unwrap();
        let next = advance(&grid, Boundary::Wrap);
        assert!(next.cells().iter().all(|&c| c == 0));
    }
}
