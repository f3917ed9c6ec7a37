//! Cellular automata simulation engine.
//!
//! Four rule families share one grid representation: the fixed two-state
//! rule, digit-string-parametrized birth/survival rules, an ordered
//! multi-state rule table, and a falling sand/water particle pass. Rendering,
//! input mapping, and pacing live in the embedding layer; the engine only
//! exposes grid snapshots, single-cell edits, and `advance()`.

pub mod driver;
pub mod error;
pub mod neighborhood;
pub mod rules;
pub mod universe;

pub use driver::Simulation;
pub use error::EngineError;
pub use neighborhood::Boundary;
pub use rules::RuleSet;

use rand::Rng;

/// One full generation of cell states, row-major. State 0 is always empty.
///
/// Grids are value-like: `advance` builds a fresh grid from the previous one,
/// so the old generation stays readable while the next is computed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<u8>,
}

impl Grid {
    /// Allocate a `width` by `height` grid with every cell set to `fill`.
    pub fn new(width: usize, height: usize, fill: u8) -> Result<Self, EngineError> {
        if width == 0 || height == 0 {
            return Err(EngineError::InvalidDimensions { width, height });
        }
        Ok(Self {
            width,
            height,
            cells: vec![fill; width * height],
        })
    }

    /// All-empty grid with the same dimensions as `other`.
    pub(crate) fn empty_like(other: &Grid) -> Self {
        Self {
            width: other.width,
            height: other.height,
            cells: vec![0; other.cells.len()],
        }
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Row-major snapshot of the current generation.
    #[must_use]
    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    #[must_use]
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && (x as usize) < self.width && y >= 0 && (y as usize) < self.height
    }

    pub fn get(&self, x: i32, y: i32) -> Result<u8, EngineError> {
        if self.in_bounds(x, y) {
            Ok(self.at(x, y))
        } else {
            Err(self.out_of_bounds(x, y))
        }
    }

    /// Bounds-checked write. Out-of-range coordinates leave the grid
    /// untouched; callers translating pointer positions must pre-validate.
    pub fn set(&mut self, x: i32, y: i32, state: u8) -> Result<(), EngineError> {
        if self.in_bounds(x, y) {
            let i = self.index(x, y);
            self.cells[i] = state;
            Ok(())
        } else {
            Err(self.out_of_bounds(x, y))
        }
    }

    /// Unchecked read; callers guarantee `(x, y)` is in bounds.
    pub(crate) fn at(&self, x: i32, y: i32) -> u8 {
        self.cells[self.index(x, y)]
    }

    /// Unchecked write; callers guarantee `(x, y)` is in bounds.
    pub(crate) fn put(&mut self, x: i32, y: i32, state: u8) {
        let i = self.index(x, y);
        self.cells[i] = state;
    }

    /// Independently set each cell to 1 with probability `density`, else 0.
    pub fn fill_random(&mut self, density: f64, rng: &mut impl Rng) {
        for cell in &mut self.cells {
            *cell = u8::from(rng.gen::<f64>() < density);
        }
    }

    /// Reset every cell to empty.
    pub fn clear(&mut self) {
        self.cells.fill(0);
    }

    fn index(&self, x: i32, y: i32) -> usize {
        y as usize * self.width + x as usize
    }

    fn out_of_bounds(&self, x: i32, y: i32) -> EngineError {
        EngineError::OutOfBounds {
            x,
            y,
            width: self.width,
            height: self.height,
        }
    }
}
