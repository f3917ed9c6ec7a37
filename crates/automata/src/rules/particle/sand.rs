//! Sand: bounded straight fall, then a randomized diagonal slide.

use rand::Rng;

use super::{MoveApi, EMPTY, SAND, WATER};

pub(super) fn update(api: &mut MoveApi, rng: &mut impl Rng) {
    if api.get(0, 1) == EMPTY {
        // Gravity resolves the whole drop in one step, up to the look-ahead
        // limit, rather than one cell per generation.
        let dist = api.fall_distance();
        if api.try_place(0, dist, SAND) {
            return;
        }
    } else if api.get(0, 1) != WATER {
        // Blocked by something solid: slide into an open diagonal. Two
        // independent draws against the same threshold, not one coin flip;
        // when neither fires the grain stays put.
        let left = api.get(-1, 1) == EMPTY;
        let right = api.get(1, 1) == EMPTY;
        if left && right {
            if rng.gen::<f64>() > 0.5 {
                if api.try_place(-1, 1, SAND) {
                    return;
                }
            } else if rng.gen::<f64>() < 0.5 && api.try_place(1, 1, SAND) {
                return;
            }
        } else if left {
            if api.try_place(-1, 1, SAND) {
                return;
            }
        } else if right && api.try_place(1, 1, SAND) {
            return;
        }
    }

    api.keep(SAND);
}
