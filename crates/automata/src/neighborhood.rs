//! Moore-neighborhood counting with configurable boundary policy.

use crate::Grid;

/// How neighbor coordinates past the grid edge are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Boundary {
    /// Toroidal: coordinates wrap to the opposite edge.
    #[default]
    Wrap,
    /// Out-of-range neighbors are skipped, not counted.
    Bounded,
}

/// Count the 8 Moore neighbors of `(x, y)` whose state equals `target`.
///
/// The center cell is never counted. Under `Wrap` every offset resolves to a
/// cell; under `Bounded` offsets that leave the grid contribute nothing.
#[must_use]
pub fn count_state(grid: &Grid, x: i32, y: i32, target: u8, boundary: Boundary) -> u8 {
    let w = grid.width() as i32;
    let h = grid.height() as i32;
    let mut count = 0;

    for dy in -1..=1 {
        for dx in -1..=1 {
            if dx == 0 && dy == 0 {
                continue;
            }
            let (nx, ny) = match boundary {
                Boundary::Wrap => ((x + dx).rem_euclid(w), (y + dy).rem_euclid(h)),
                Boundary::Bounded => {
                    let (nx, ny) = (x + dx, y + dy);
                    if !grid.in_bounds(nx, ny) {
                        continue;
                    }
                    (nx, ny)
                }
            };
            if grid.at(nx, ny) == target {
                count += 1;
            }
        }
    }

    count
}
