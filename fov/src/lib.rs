//! Field-of-view cone visibility for axis-aligned rectangles.
//!
//! An observer casts a view cone from an apex point. Every rectangle is
//! reduced to the angular interval its corners subtend around the apex and
//! that interval is compared against the cone's interval. Angles are
//! bearings in degrees using screen convention: zero along the positive x
//! axis, increasing clockwise on a screen where y grows downwards.

mod arc;
pub use arc::{Arc, EPSILON};

mod cone;
pub use cone::{Cone, Visibility, DEFAULT_REACH};

mod direction;
pub use direction::Direction;

mod zone;
pub use zone::{AngleSpan, Zone};
