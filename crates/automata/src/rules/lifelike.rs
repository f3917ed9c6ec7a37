//! Parametric two-state rule: birth/survival neighbor counts from digit strings.

use crate::neighborhood::{count_state, Boundary};
use crate::{EngineError, Grid};

/// Birth/survival rule parsed from two runs of decimal digits, e.g. `"3"` and
/// `"23"` for the classic rule. An empty set means that transition never
/// fires; duplicate digits are harmless.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LifeLike {
    birth: Vec<u8>,
    survival: Vec<u8>,
}

impl LifeLike {
    /// Parse the two digit strings. Any non-digit character is a
    /// configuration error, reported here rather than silently skipped.
    pub fn parse(birth: &str, survival: &str) -> Result<Self, EngineError> {
        Ok(Self {
            birth: parse_digits(birth)?,
            survival: parse_digits(survival)?,
        })
    }

    /// Compute the next generation: live cells persist when their live
    /// neighbor count is in the survival set, dead cells turn live when it is
    /// in the birth set.
    #[must_use]
    pub fn advance(&self, grid: &Grid, boundary: Boundary) -> Grid {
        let mut next = Grid::empty_like(grid);

        for y in 0..grid.height() as i32 {
            for x in 0..grid.width() as i32 {
                let n = count_state(grid, x, y, 1, boundary);
                let counts = if grid.at(x, y) == 1 {
                    &self.survival
                } else {
                    &self.birth
                };
                if counts.contains(&n) {
                    next.put(x, y, 1);
                }
            }
        }

        next
    }
}

fn parse_digits(digits: &str) -> Result<Vec<u8>, EngineError> {
    digits
        .chars()
        .map(|c| {
            c.to_digit(10)
                .map(|d| d as u8)
                .ok_or_else(|| EngineError::InvalidRuleSpec(format!("not a digit: {c:?}")))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::life;
    use proptest::prelude::*;

    #[test]
    fn parse_accepts_digit_runs_and_keeps_duplicates() {
        let rule = LifeLike::parse("336", "23").unwrap();
        assert_eq!(rule.birth, vec![3, 3, 6]);
        assert_eq!(rule.survival, vec![2, 3]);
    }

    #[test]
    fn parse_rejects_non_digit_characters() {
        assert!(matches!(
            LifeLike::parse("3a", "23"),
            Err(EngineError::InvalidRuleSpec(_))
        ));
        assert!(matches!(
            LifeLike::parse("3", "2 3"),
            Err(EngineError::InvalidRuleSpec(_))
        ));
    }

    #[test]
    fn empty_birth_set_never_creates_cells() {
        let rule = LifeLike::parse("", "23").unwrap();
        let mut grid = Grid::new(6, 6, 0).unwrap();
        for x in 1..=3 {
            grid.set(x, 2, 1).unwrap();
        }
        let next = rule.advance(&grid, Boundary::Wrap);
        // Survivors only: the center cell has two live neighbors.
        assert_eq!(next.cells().iter().filter(|&&c| c == 1).count(), 1);
        assert_eq!(next.get(2, 2), Ok(1));
    }

    #[test]
    fn empty_survival_set_kills_every_live_cell() {
        use rand::SeedableRng;
        let mut rng = rand::rngs::StdRng::seed_from_u64(11);

        let rule = LifeLike::parse("", "").unwrap();
        let mut grid = Grid::new(6, 6, 0).unwrap();
        grid.fill_random(1.0, &mut rng);
        let next = rule.advance(&grid, Boundary::Wrap);
        assert!(next.cells().iter().all(|&c| c == 0));
    }

    // Property: B{3}/S{2,3} reproduces the fixed rule bit for bit.
    proptest! {
        #[test]
        fn prop_b3_s23_matches_fixed_rule(
            cells in proptest::collection::vec(0u8..=1, 12 * 12),
        ) {
            let mut grid = Grid::new(12, 12, 0).unwrap();
            for (i, &c) in cells.iter().enumerate() {
                grid.set((i % 12) as i32, (i / 12) as i32, c).unwrap();
            }

            let rule = LifeLike::parse("3", "23").unwrap();
            let parametric = rule.advance(&grid, Boundary::Wrap);
            let fixed = life::advance(&grid, Boundary::Wrap);
            prop_assert_eq!(parametric, fixed);
        }
    }
}
