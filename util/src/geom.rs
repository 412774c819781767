use glam::DVec2;

/// Degrees in a full turn.
pub const FULL_TURN: f64 = 360.0;

/// Snap a degree value to the standard `[0, 360)` domain.
pub fn normalize_degrees(deg: f64) -> f64 {
    let ret = deg.rem_euclid(FULL_TURN);
    // Tiny negative inputs round up to exactly a full turn.
    if ret >= FULL_TURN {
        0.0
    } else {
        // Adding positive zero gets rid of negative zero.
        ret + 0.0
    }
}

/// Bearing of a vector in degrees.
///
/// Bearings use screen convention, zero points along the positive x axis
/// and value increases clockwise on a screen where y grows downwards. This
/// is the `atan2(y, x)` angle snapped to `[0, 360)`.
pub fn bearing(v: DVec2) -> f64 {
    normalize_degrees(v.y.atan2(v.x).to_degrees())
}
