//! Unopinionated standalone utilities.

mod axis_box;
pub use axis_box::Rect;

mod geom;
pub use geom::{bearing, normalize_degrees, FULL_TURN};

mod rng;
pub use rng::{srng, Logos, RngExt};

pub type FastHasher = rustc_hash::FxHasher;
