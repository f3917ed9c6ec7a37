//! JS-facing boundary. An external renderer owns pacing and pointer-to-cell
//! mapping; it drives the engine through this handle and blits the state
//! buffer exposed by [`cells_ptr`](Universe::cells_ptr).

use wasm_bindgen::prelude::*;

use crate::driver::Simulation;
use crate::neighborhood::Boundary;
use crate::rules::{LifeLike, Rule, RuleSet, RuleTable};

#[wasm_bindgen]
#[derive(Debug)]
pub struct Universe {
    sim: Simulation,
    pending_rules: Vec<Rule>,
}

#[wasm_bindgen]
impl Universe {
    /// Build a universe running the fixed two-state rule, randomly seeded at
    /// `density`. Rule selection can be changed afterwards.
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32, density: f64, seed: u32) -> Result<Universe, JsError> {
        let sim = Simulation::new(
            RuleSet::Life,
            width as usize,
            height as usize,
            density,
            u64::from(seed),
        )?;
        Ok(Self {
            sim,
            pending_rules: Vec::new(),
        })
    }

    /// Advance one generation. The caller chooses the cadence.
    pub fn tick(&mut self) {
        self.sim.advance();
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.sim.width() as u32
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.sim.height() as u32
    }

    #[must_use]
    pub fn generation(&self) -> u32 {
        self.sim.generation() as u32
    }

    /// Pointer to the row-major state buffer for zero-copy rendering. The
    /// buffer is replaced on every tick, so re-read the pointer after each
    /// call to [`tick`](Universe::tick).
    #[must_use]
    pub fn cells_ptr(&self) -> *const u8 {
        self.sim.cells().as_ptr()
    }

    pub fn cell(&self, x: i32, y: i32) -> Result<u8, JsError> {
        Ok(self.sim.read(x, y)?)
    }

    /// Single-cell edit, driven from pointer events mapped to grid
    /// coordinates on the JS side.
    pub fn set_cell(&mut self, x: i32, y: i32, state: u8) -> Result<(), JsError> {
        self.sim.write(x, y, state)?;
        Ok(())
    }

    pub fn reseed(&mut self, density: f64) {
        self.sim.reset_random(density);
    }

    pub fn clear(&mut self) {
        self.sim.clear();
    }

    pub fn use_life(&mut self) {
        self.sim.set_rule(RuleSet::Life);
    }

    pub fn use_life_like(&mut self, birth: &str, survival: &str) -> Result<(), JsError> {
        let rule = LifeLike::parse(birth, survival)?;
        self.sim.set_rule(RuleSet::LifeLike(rule));
        Ok(())
    }

    pub fn use_particles(&mut self) {
        self.sim.set_rule(RuleSet::Particles);
    }

    /// Queue one multi-state rule; install the whole table with
    /// [`use_table`](Universe::use_table).
    pub fn push_rule(&mut self, source: u8, target: u8, counts: &[u8], neighbor_states: &[u8]) {
        self.pending_rules.push(Rule {
            source,
            target,
            counts: counts.to_vec(),
            neighbor_states: neighbor_states.to_vec(),
        });
    }

    /// Install the queued rules as the active table, in push order.
    pub fn use_table(&mut self) -> Result<(), JsError> {
        let table = RuleTable::new(std::mem::take(&mut self.pending_rules))?;
        self.sim.set_rule(RuleSet::Table(table));
        Ok(())
    }

    /// Toggle toroidal wrapping for the neighbor-counting rules.
    pub fn wrap_edges(&mut self, wrap: bool) {
        self.sim.set_boundary(if wrap {
            Boundary::Wrap
        } else {
            Boundary::Bounded
        });
    }
}
