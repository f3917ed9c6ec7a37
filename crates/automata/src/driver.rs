//! Simulation driver: owns the current grid, the active rule, and the RNG.

use log::{debug, trace};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::neighborhood::Boundary;
use crate::rules::{self, RuleSet};
use crate::{EngineError, Grid};

/// Orchestrates one automaton: each [`advance`](Simulation::advance) swaps
/// the held grid for the next generation computed by the active rule.
///
/// External collaborators drive the cadence (calling `advance` on their own
/// schedule) and translate pointer events into [`write`](Simulation::write)
/// calls; the driver itself knows nothing about timing or input devices.
/// Between calls a reader always sees a fully consistent generation.
#[derive(Debug)]
pub struct Simulation {
    grid: Grid,
    rule: RuleSet,
    boundary: Boundary,
    rng: StdRng,
    generation: u64,
}

impl Simulation {
    /// Build a driver with a randomly seeded grid. The RNG is deterministic
    /// from `seed`: equal seeds replay identical runs.
    pub fn new(
        rule: RuleSet,
        width: usize,
        height: usize,
        density: f64,
        seed: u64,
    ) -> Result<Self, EngineError> {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut grid = Grid::new(width, height, 0)?;
        grid.fill_random(density, &mut rng);
        debug!("seeded {width}x{height} grid at density {density:.2}");
        Ok(Self {
            grid,
            rule,
            boundary: Boundary::Wrap,
            rng,
            generation: 0,
        })
    }

    /// Advance one generation. Never fails: configuration is validated when
    /// rule values are built, and unmatched cells fall back to empty.
    pub fn advance(&mut self) {
        self.grid = rules::step(&self.rule, &self.grid, self.boundary, &mut self.rng);
        self.generation += 1;
        trace!("generation {}", self.generation);
    }

    pub fn read(&self, x: i32, y: i32) -> Result<u8, EngineError> {
        self.grid.get(x, y)
    }

    /// Single-cell edit for interactive drawing. Does not step the
    /// simulation.
    pub fn write(&mut self, x: i32, y: i32, state: u8) -> Result<(), EngineError> {
        self.grid.set(x, y, state)
    }

    /// Row-major snapshot of the current generation, for rendering.
    #[must_use]
    pub fn cells(&self) -> &[u8] {
        self.grid.cells()
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.grid.width()
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.grid.height()
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Re-seed the grid in place at the given live-cell density.
    pub fn reset_random(&mut self, density: f64) {
        self.grid.fill_random(density, &mut self.rng);
        debug!("reseeded at density {density:.2}");
    }

    /// Blank the grid.
    pub fn clear(&mut self) {
        self.grid.clear();
    }

    /// Swap the active rule family between ticks.
    pub fn set_rule(&mut self, rule: RuleSet) {
        debug!("rule changed to {rule:?}");
        self.rule = rule;
    }

    /// Swap the boundary policy for the neighbor-counting rules. The
    /// particle pass always treats the edge as a hard wall.
    pub fn set_boundary(&mut self, boundary: Boundary) {
        self.boundary = boundary;
    }
}
