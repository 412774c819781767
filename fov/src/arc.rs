use serde::{Deserialize, Serialize};
use util::{normalize_degrees, FULL_TURN};

/// Tolerance for comparing angles, in degrees.
pub const EPSILON: f64 = 1e-9;

/// Clockwise angular interval.
///
/// Starts at bearing `start` and extends clockwise for `sweep` degrees. A
/// sweep of a full turn covers every bearing.
#[derive(Copy, Clone, PartialEq, Default, Debug, Serialize, Deserialize)]
pub struct Arc {
    pub start: f64,
    pub sweep: f64,
}

impl Arc {
    pub fn new(start: f64, sweep: f64) -> Self {
        Arc {
            start: normalize_degrees(start),
            sweep: sweep.clamp(0.0, FULL_TURN),
        }
    }

    /// Arc going clockwise from bearing `from` to bearing `to`.
    ///
    /// Equal bearings produce an empty arc, never a full one.
    pub fn between(from: f64, to: f64) -> Self {
        Arc::new(from, normalize_degrees(to - from))
    }

    pub fn full() -> Self {
        Arc {
            start: 0.0,
            sweep: FULL_TURN,
        }
    }

    /// Bearing of the clockwise end of the arc.
    pub fn end(&self) -> f64 {
        normalize_degrees(self.start + self.sweep)
    }

    pub fn is_full(&self) -> bool {
        self.sweep >= FULL_TURN
    }

    pub fn contains(&self, bearing: f64) -> bool {
        if self.is_full() {
            return true;
        }
        let offset = normalize_degrees(bearing - self.start);
        offset <= self.sweep + EPSILON || FULL_TURN - offset <= EPSILON
    }

    /// Length in degrees of the part of `other` that lies inside this arc.
    ///
    /// Both arcs are rotated so this one starts at zero. `other` then
    /// becomes a plain interval starting somewhere in `[0, 360)` that can
    /// run past 360, and it's intersected with this arc and this arc's copy
    /// one turn later.
    pub fn overlap(&self, other: &Arc) -> f64 {
        if self.is_full() {
            return other.sweep;
        }
        if other.is_full() {
            return self.sweep;
        }

        let a = normalize_degrees(other.start - self.start);
        let b = a + other.sweep;

        let ret = interval_overlap((0.0, self.sweep), (a, b))
            + interval_overlap((FULL_TURN, FULL_TURN + self.sweep), (a, b));
        ret.min(self.sweep).min(other.sweep)
    }
}

fn interval_overlap((a0, a1): (f64, f64), (b0, b1): (f64, f64)) -> f64 {
    (a1.min(b1) - a0.max(b0)).max(0.0)
}
