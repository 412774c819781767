use std::fmt;

use glam::{dvec2, DVec2};
use serde::{Deserialize, Serialize};
use util::{bearing, Rect, FULL_TURN};

use crate::{AngleSpan, Arc, Direction, EPSILON};

/// Default length of the cone's boundary rays.
///
/// Bearings don't depend on ray length, this only matters for drawing the
/// rays and should exceed the scene diagonal.
pub const DEFAULT_REACH: f64 = 1000.0;

/// View cone cast from an observer's apex.
#[derive(Copy, Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct Cone {
    pub apex: DVec2,
    pub direction: Direction,
    /// Opening angle in degrees.
    pub fov: f64,
    /// Endpoint of the ray on the negative x side of the road.
    pub left_ray: DVec2,
    /// Endpoint of the ray on the positive x side of the road.
    pub right_ray: DVec2,
    /// Bearing of `left_ray` from the apex.
    pub left_boundary: f64,
    /// Bearing of `right_ray` from the apex.
    pub right_boundary: f64,
    /// Visible bearings, clockwise from the observer's own front-left ray to
    /// its front-right ray.
    pub arc: Arc,
}

impl Cone {
    pub fn new(apex: DVec2, direction: Direction, fov: f64) -> Self {
        Cone::with_reach(apex, direction, fov, DEFAULT_REACH)
    }

    pub fn with_reach(
        apex: DVec2,
        direction: Direction,
        fov: f64,
        reach: f64,
    ) -> Self {
        let fov = fov.clamp(0.0, FULL_TURN);

        // Half-angle measured from the screen's up direction.
        let half = match direction {
            Direction::Forward => (FULL_TURN - fov) / 2.0,
            Direction::Backward => fov / 2.0,
        }
        .to_radians();

        let left = dvec2(-half.sin(), -half.cos());
        let right = dvec2(half.sin(), -half.cos());
        let (left_boundary, right_boundary) = (bearing(left), bearing(right));

        // Facing down the screen, the observer's left hand is on the
        // positive x side of the road.
        let front_left = match direction {
            Direction::Forward => right_boundary,
            Direction::Backward => left_boundary,
        };

        Cone {
            apex,
            direction,
            fov,
            left_ray: apex + reach * left,
            right_ray: apex + reach * right,
            left_boundary,
            right_boundary,
            arc: Arc::new(front_left, fov),
        }
    }

    /// Bearing of the cone's center ray.
    pub fn heading(&self) -> f64 {
        match self.direction {
            Direction::Forward => 90.0,
            Direction::Backward => 270.0,
        }
    }

    /// Classify how much of a rectangle's angular footprint is inside the
    /// cone.
    pub fn classify(&self, rect: &Rect) -> Visibility {
        let span = AngleSpan::new(self.apex, rect);
        let footprint = span.arc();

        if footprint.sweep <= EPSILON {
            // Zero-width footprint, the whole rectangle sits on one bearing.
            return if self.arc.contains(footprint.start) {
                Visibility::VISIBLE
            } else {
                Visibility::HIDDEN
            };
        }

        let overlap = self.arc.overlap(&footprint);
        log::trace!(
            "{:?} {:.3}..{:.3} overlaps cone by {overlap:.3}",
            span.zone,
            span.min_degree,
            span.max_degree
        );

        if overlap >= footprint.sweep - EPSILON {
            Visibility::VISIBLE
        } else if overlap <= EPSILON {
            Visibility::HIDDEN
        } else {
            Visibility::partial(overlap / footprint.sweep)
        }
    }
}

/// Visibility of one vehicle.
///
/// A vehicle is either fully visible, partially visible (`occluded` set and
/// `ratio` strictly between 0 and 1) or hidden.
#[derive(Copy, Clone, PartialEq, Default, Debug, Serialize, Deserialize)]
pub struct Visibility {
    pub visible: bool,
    pub occluded: bool,
    /// Fraction of the vehicle's angular footprint inside the cone.
    pub ratio: f64,
}

impl Visibility {
    pub const VISIBLE: Visibility = Visibility {
        visible: true,
        occluded: false,
        ratio: 1.0,
    };

    pub const HIDDEN: Visibility = Visibility {
        visible: false,
        occluded: false,
        ratio: 0.0,
    };

    pub fn partial(ratio: f64) -> Self {
        debug_assert!(ratio > 0.0 && ratio < 1.0);
        Visibility {
            visible: false,
            occluded: true,
            ratio: ratio.clamp(0.0, 1.0),
        }
    }

    pub fn is_hidden(&self) -> bool {
        !self.visible && !self.occluded
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.visible {
            write!(f, "visible")
        } else if self.occluded {
            write!(f, "partial {:.0}%", self.ratio * 100.0)
        } else {
            write!(f, "hidden")
        }
    }
}
