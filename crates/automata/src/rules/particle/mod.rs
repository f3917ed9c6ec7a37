//! Falling-particle pass: granular sand, spreading water, inert walls.
//!
//! Unlike the generation-parallel rules, this pass has an explicit ordering
//! contract: source cells are visited in fixed raster order (x outer, y
//! inner, one pass, no revisits) and each move writes directly into the new
//! grid, so later cells observe placements already made this pass. Edge
//! columns and the bottom row never move; the grid edge is a hard wall, never
//! a wrap.

mod sand;
mod water;

use rand::Rng;

use crate::Grid;

/// Particle kinds, stored in the grid as their discriminant values.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Species {
    Empty = 0,
    Sand = 1,
    Water = 2,
    Wall = 3,
}

impl Species {
    /// Decode a raw cell state. Codes above `Wall` are not particles and do
    /// not survive a pass.
    #[must_use]
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::Empty),
            1 => Some(Self::Sand),
            2 => Some(Self::Water),
            3 => Some(Self::Wall),
            _ => None,
        }
    }
}

pub(crate) const EMPTY: u8 = Species::Empty as u8;
pub(crate) const SAND: u8 = Species::Sand as u8;
pub(crate) const WATER: u8 = Species::Water as u8;
pub(crate) const WALL: u8 = Species::Wall as u8;

/// Furthest straight drop resolved in a single generation.
const MAX_FALL: i32 = 5;

/// Relative-offset view for one source cell: reads come from the previous
/// generation (out-of-bounds reads as Wall), placements go into the new grid
/// and are refused when the destination was already claimed this pass.
struct MoveApi<'a> {
    old: &'a Grid,
    next: &'a mut Grid,
    x: i32,
    y: i32,
}

impl MoveApi<'_> {
    fn get(&self, dx: i32, dy: i32) -> u8 {
        let (nx, ny) = (self.x + dx, self.y + dy);
        if self.old.in_bounds(nx, ny) {
            self.old.at(nx, ny)
        } else {
            WALL
        }
    }

    /// Claim the destination for `state` if nothing landed there yet.
    /// A refused claim means the particle stays where it is; nothing is
    /// ever overwritten, so particles are neither created nor destroyed.
    fn try_place(&mut self, dx: i32, dy: i32, state: u8) -> bool {
        let (nx, ny) = (self.x + dx, self.y + dy);
        if self.next.in_bounds(nx, ny) && self.next.at(nx, ny) == EMPTY {
            self.next.put(nx, ny, state);
            return true;
        }
        false
    }

    /// Carry the source cell into the new generation unchanged.
    fn keep(&mut self, state: u8) {
        self.next.put(self.x, self.y, state);
    }

    /// Deepest empty cell straight down within [`MAX_FALL`], scanning the
    /// previous generation. Callers verified the cell directly below is
    /// empty, so the distance is at least 1.
    fn fall_distance(&self) -> i32 {
        let mut dist = 1;
        for step in 2..=MAX_FALL {
            if self.get(0, step) == EMPTY {
                dist = step;
            } else {
                break;
            }
        }
        dist
    }
}

/// Advance the particle grid by one generation.
#[must_use]
pub fn advance(grid: &Grid, rng: &mut impl Rng) -> Grid {
    let mut next = Grid::empty_like(grid);
    let w = grid.width() as i32;
    let h = grid.height() as i32;

    for x in 0..w {
        for y in 0..h {
            let code = grid.at(x, y);
            if code == EMPTY {
                continue;
            }

            let interior = x > 0 && x < w - 1 && y < h - 1;
            let mut api = MoveApi {
                old: grid,
                next: &mut next,
                x,
                y,
            };
            match Species::from_code(code) {
                Some(Species::Sand) if interior => sand::update(&mut api, rng),
                Some(Species::Water) if interior => water::update(&mut api, rng),
                Some(_) => api.keep(code),
                None => {}
            }
        }
    }

    next
}
