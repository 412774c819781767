//! Road scene datatypes.

mod road;
pub use road::Road;

mod scene;
pub use scene::Scene;

mod vehicle;
pub use vehicle::{Observer, Vehicle};

pub use fov::{Cone, Direction, Visibility};

/// Default road width in pixels.
pub const ROAD_WIDTH: f64 = 300.0;
/// Default road length in pixels.
pub const ROAD_LENGTH: f64 = 800.0;
/// Width of a single traffic lane in pixels.
pub const LANE_WIDTH: f64 = 50.0;

/// Default observer field of view in degrees.
pub const DEFAULT_FOV: f64 = 178.0;
