//! Rule evaluators dispatched from the simulation driver.

pub mod life;
pub mod lifelike;
pub mod particle;
pub mod table;

pub use lifelike::LifeLike;
pub use particle::Species;
pub use table::{Rule, RuleTable};

use rand::Rng;

use crate::neighborhood::Boundary;
use crate::Grid;

/// The active rule family. Rule parameters are validated when the contained
/// values are constructed, so stepping never fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleSet {
    /// Fixed two-state rule: survive on 2-3, birth on 3.
    Life,
    /// Parametric birth/survival rule.
    LifeLike(LifeLike),
    /// Ordered multi-state rule table.
    Table(RuleTable),
    /// Falling sand/water particle physics.
    Particles,
}

/// Compute the next generation for `grid` under `rule`.
///
/// The RNG is consumed only by the particle pass; the other families are
/// pure functions of the previous generation.
#[must_use]
pub fn step(rule: &RuleSet, grid: &Grid, boundary: Boundary, rng: &mut impl Rng) -> Grid {
    match rule {
        RuleSet::Life => life::advance(grid, boundary),
        RuleSet::LifeLike(r) => r.advance(grid, boundary),
        RuleSet::Table(t) => t.advance(grid, boundary),
        RuleSet::Particles => particle::advance(grid, rng),
    }
}
