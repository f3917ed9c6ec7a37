//! Ordered multi-state rule table: first matching rule wins per cell.

use crate::neighborhood::{count_state, Boundary};
use crate::{EngineError, Grid};

/// One transition: a cell in `source` becomes `target` when, for any of the
/// listed `neighbor_states`, the count of neighbors in that state is a member
/// of `counts`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    pub source: u8,
    pub target: u8,
    pub counts: Vec<u8>,
    pub neighbor_states: Vec<u8>,
}

/// An ordered list of [`Rule`]s, fixed once installed.
///
/// A cell with no matching rule resets to empty: persistence has to be
/// spelled out as an explicit identity rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleTable {
    rules: Vec<Rule>,
}

impl RuleTable {
    /// Build a table from an ordered rule list. An empty list cannot express
    /// any behavior and is rejected here, never during ticking.
    pub fn new(rules: Vec<Rule>) -> Result<Self, EngineError> {
        if rules.is_empty() {
            return Err(EngineError::InvalidRuleSpec("empty rule table".into()));
        }
        Ok(Self { rules })
    }

    /// Compute the next generation. Rules are tried in table order and the
    /// first match stops evaluation for that cell.
    #[must_use]
    pub fn advance(&self, grid: &Grid, boundary: Boundary) -> Grid {
        let mut next = Grid::empty_like(grid);

        for y in 0..grid.height() as i32 {
            for x in 0..grid.width() as i32 {
                let current = grid.at(x, y);
                'rules: for rule in &self.rules {
                    if rule.source != current {
                        continue;
                    }
                    for &state in &rule.neighbor_states {
                        let n = count_state(grid, x, y, state, boundary);
                        if rule.counts.contains(&n) {
                            next.put(x, y, rule.target);
                            break 'rules;
                        }
                    }
                }
            }
        }

        next
    }
}
