//! Water: bounded straight fall, then horizontal spread into open sides.

use rand::Rng;

use super::{MoveApi, EMPTY, WATER};

pub(super) fn update(api: &mut MoveApi, rng: &mut impl Rng) {
    if api.get(0, 1) == EMPTY {
        let dist = api.fall_distance();
        if api.try_place(0, dist, WATER) {
            return;
        }
    } else {
        let left = api.get(-1, 0) == EMPTY;
        let right = api.get(1, 0) == EMPTY;
        if left && !right {
            if api.try_place(-1, 0, WATER) {
                return;
            }
        } else if right && !left {
            if api.try_place(1, 0, WATER) {
                return;
            }
        } else if left && right {
            // Same two-draw tie-break as the sand diagonal.
            if rng.gen::<f64>() > 0.5 {
                if api.try_place(-1, 0, WATER) {
                    return;
                }
            } else if rng.gen::<f64>() < 0.5 && api.try_place(1, 0, WATER) {
                return;
            }
        }
    }

    api.keep(WATER);
}
