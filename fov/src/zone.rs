use glam::DVec2;
use serde::{Deserialize, Serialize};
use strum::EnumIter;
use util::{bearing, Rect};

use crate::{Arc, EPSILON};

/// Which quadrants around the apex a rectangle occupies.
///
/// Quadrants are numbered by bearing: `Q1` covers 0..90 (right of the apex
/// and further down the screen), `Q2` 90..180, `Q3` 180..270 and `Q4`
/// 270..360. Multi-digit zones straddle the axis between the named
/// quadrants, `Q1234` means the apex is inside the rectangle.
#[derive(
    Copy, Clone, Eq, PartialEq, Hash, Debug, EnumIter, Serialize, Deserialize,
)]
pub enum Zone {
    Q1,
    Q12,
    Q2,
    Q23,
    Q3,
    Q34,
    Q4,
    Q14,
    Q1234,
}

use Zone::*;

/// Position of a rectangle's extent relative to the apex along one axis.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
enum Side {
    Positive,
    Negative,
    Straddle,
}

impl Side {
    fn of(apex: f64, lo: f64, hi: f64) -> Side {
        // Touching the apex counts as being on one side.
        if apex <= lo {
            Side::Positive
        } else if hi <= apex {
            Side::Negative
        } else {
            Side::Straddle
        }
    }
}

impl Zone {
    pub fn locate(apex: DVec2, rect: &Rect) -> Zone {
        use Side::*;

        let (min, max) = (rect.min(), rect.max());
        match (Side::of(apex.x, min.x, max.x), Side::of(apex.y, min.y, max.y))
        {
            (Positive, Positive) => Q1,
            (Positive, Negative) => Q4,
            (Positive, Straddle) => Q14,
            (Negative, Positive) => Q2,
            (Negative, Negative) => Q3,
            (Negative, Straddle) => Q23,
            (Straddle, Positive) => Q12,
            (Straddle, Negative) => Q34,
            (Straddle, Straddle) => Q1234,
        }
    }

    /// Indices into `Rect::corners` of the corners at the clockwise start
    /// and the clockwise end of the angular span.
    ///
    /// None for `Q1234`, which spans the full circle.
    pub fn extremes(self) -> Option<[usize; 2]> {
        match self {
            Q1 => Some([1, 3]),
            Q12 => Some([1, 0]),
            Q2 => Some([2, 0]),
            Q23 => Some([2, 1]),
            Q3 => Some([3, 1]),
            Q34 => Some([3, 2]),
            Q4 => Some([0, 2]),
            Q14 => Some([0, 3]),
            Q1234 => None,
        }
    }

    /// The range of bearings a rectangle in this zone can cover.
    pub fn sector(self) -> Arc {
        match self {
            Q1 => Arc::new(0.0, 90.0),
            Q12 => Arc::new(0.0, 180.0),
            Q2 => Arc::new(90.0, 90.0),
            Q23 => Arc::new(90.0, 180.0),
            Q3 => Arc::new(180.0, 90.0),
            Q34 => Arc::new(180.0, 180.0),
            Q4 => Arc::new(270.0, 90.0),
            Q14 => Arc::new(270.0, 180.0),
            Q1234 => Arc::full(),
        }
    }
}

/// Angular interval a rectangle's corners subtend around an apex.
#[derive(Copy, Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct AngleSpan {
    /// Bearing of the clockwise-first edge of the span.
    pub min_degree: f64,
    /// Bearing of the clockwise-last edge of the span.
    pub max_degree: f64,
    pub zone: Zone,
}

impl AngleSpan {
    pub fn new(apex: DVec2, rect: &Rect) -> Self {
        let zone = Zone::locate(apex, rect);
        let corners = rect.corners();

        match zone.extremes() {
            Some([a, b]) => {
                // A corner sitting on the apex has no bearing. That only
                // happens for a flat rectangle running out of the apex, and
                // then its far end gives the direction of the whole thing.
                let far = corners
                    .iter()
                    .map(|&c| c - apex)
                    .max_by(|p, q| {
                        p.length_squared().total_cmp(&q.length_squared())
                    })
                    .unwrap_or_default();
                let edge = |i: usize| {
                    let v = corners[i] - apex;
                    if v.length() <= EPSILON {
                        bearing(far)
                    } else {
                        bearing(v)
                    }
                };

                AngleSpan {
                    min_degree: edge(a),
                    max_degree: edge(b),
                    zone,
                }
            }
            None => AngleSpan {
                min_degree: 0.0,
                max_degree: 0.0,
                zone,
            },
        }
    }

    /// The span as a clockwise arc.
    pub fn arc(&self) -> Arc {
        if self.zone == Q1234 {
            return Arc::full();
        }

        let ret = Arc::between(self.min_degree, self.max_degree);
        // A rectangle the apex isn't inside of spans at most half a turn.
        // Anything wider is rounding error over a zero-width span.
        if ret.sweep > 180.0 + EPSILON {
            Arc::new(self.min_degree, 0.0)
        } else {
            ret
        }
    }
}

#[cfg(test)]
mod tests {
    use glam::dvec2;
    use quickcheck_macros::quickcheck;
    use strum::IntoEnumIterator;

    use super::*;

    fn zone_of(x: f64, y: f64, w: f64, h: f64) -> Zone {
        Zone::locate(DVec2::ZERO, &Rect::sized([x, y], [w, h]))
    }

    #[test]
    fn zones() {
        assert_eq!(zone_of(10.0, 10.0, 5.0, 5.0), Q1);
        assert_eq!(zone_of(10.0, -20.0, 5.0, 5.0), Q4);
        assert_eq!(zone_of(10.0, -5.0, 5.0, 10.0), Q14);
        assert_eq!(zone_of(-20.0, 10.0, 5.0, 5.0), Q2);
        assert_eq!(zone_of(-20.0, -20.0, 5.0, 5.0), Q3);
        assert_eq!(zone_of(-20.0, -5.0, 5.0, 10.0), Q23);
        assert_eq!(zone_of(-5.0, 10.0, 10.0, 5.0), Q12);
        assert_eq!(zone_of(-5.0, -20.0, 10.0, 5.0), Q34);
        assert_eq!(zone_of(-5.0, -5.0, 10.0, 10.0), Q1234);
    }

    #[test]
    fn touching_edges_do_not_straddle() {
        assert_eq!(zone_of(0.0, 0.0, 5.0, 5.0), Q1);
        assert_eq!(zone_of(0.0, -5.0, 5.0, 5.0), Q4);
        assert_eq!(zone_of(-5.0, 0.0, 5.0, 5.0), Q2);
        assert_eq!(zone_of(-5.0, -5.0, 5.0, 5.0), Q3);
        assert_eq!(zone_of(0.0, -5.0, 5.0, 10.0), Q14);
        assert_eq!(zone_of(-5.0, 0.0, 10.0, 5.0), Q12);

        // Zero-sized rectangle right at the apex.
        assert_eq!(zone_of(0.0, 0.0, 0.0, 0.0), Q1);
    }

    #[test]
    fn extremes_are_distinct_corners() {
        for zone in Zone::iter() {
            match zone.extremes() {
                Some([a, b]) => assert!(a != b && a < 4 && b < 4),
                None => assert_eq!(zone, Q1234),
            }
        }
    }

    #[test]
    fn seam_span() {
        let span =
            AngleSpan::new(dvec2(50.0, 0.0), &Rect::sized([100.0, -20.0], [20.0, 40.0]));
        assert_eq!(span.zone, Q14);
        assert!(span.min_degree > 270.0);
        assert!(span.max_degree < 90.0);

        let arc = span.arc();
        assert!((arc.sweep - 2.0 * (20.0f64).atan2(50.0).to_degrees()).abs() < 1e-9);
        assert!(arc.contains(0.0));
        assert!(!arc.contains(180.0));
    }

    #[test]
    fn degenerate_spans() {
        // Point rectangle.
        let span =
            AngleSpan::new(DVec2::ZERO, &Rect::sized([10.0, 10.0], [0.0, 0.0]));
        assert_eq!(span.arc().sweep, 0.0);
        assert!((span.min_degree - 45.0).abs() < 1e-9);

        // Segment lying along a ray from the apex.
        let span =
            AngleSpan::new(DVec2::ZERO, &Rect::sized([0.0, 10.0], [0.0, 20.0]));
        assert_eq!(span.arc().sweep, 0.0);
        assert_eq!(span.min_degree, 90.0);

        // Apex inside.
        let span =
            AngleSpan::new(DVec2::ZERO, &Rect::sized([-1.0, -1.0], [2.0, 2.0]));
        assert!(span.arc().is_full());
    }

    #[test]
    fn segments_out_of_the_apex() {
        for (dim, heading) in [
            ([0.0, 20.0], 90.0),
            ([0.0, -20.0], 270.0),
            ([20.0, 0.0], 0.0),
            ([-20.0, 0.0], 180.0),
        ] {
            let dim = DVec2::from(dim);
            let rect = Rect::new(dim.min(DVec2::ZERO), dim.max(DVec2::ZERO));
            let span = AngleSpan::new(DVec2::ZERO, &rect);
            assert_eq!(span.arc().sweep, 0.0, "{dim}");
            assert!((span.min_degree - heading).abs() < 1e-9, "{dim}");
            assert!((span.max_degree - heading).abs() < 1e-9, "{dim}");
        }
    }

    #[quickcheck]
    fn flat_rect_from_apex_is_a_ray(
        len: u8,
        vertical: bool,
        flip: bool,
    ) -> bool {
        let len = len as f64 + 1.0;
        let len = if flip { -len } else { len };
        let dim = if vertical { dvec2(0.0, len) } else { dvec2(len, 0.0) };
        let rect = Rect::new(dim.min(DVec2::ZERO), dim.max(DVec2::ZERO));
        let span = AngleSpan::new(DVec2::ZERO, &rect);

        span.arc().sweep == 0.0 && span.min_degree == bearing(dim)
    }

    #[quickcheck]
    fn span_covers_all_corners(x: i16, y: i16, w: u8, h: u8) -> bool {
        let rect = Rect::sized(
            [x as f64, y as f64],
            [(w % 100) as f64 + 1.0, (h % 100) as f64 + 1.0],
        );
        let span = AngleSpan::new(DVec2::ZERO, &rect);
        let arc = span.arc();

        if span.zone == Q1234 {
            return arc.is_full();
        }

        // A corner right at the apex has no meaningful bearing.
        arc.sweep <= 180.0 + EPSILON
            && rect
                .corners()
                .iter()
                .filter(|&&c| c != DVec2::ZERO)
                .all(|&c| arc.contains(bearing(c)))
    }

    #[quickcheck]
    fn span_stays_in_sector(x: i16, y: i16, w: u8, h: u8) -> bool {
        let rect = Rect::sized(
            [x as f64, y as f64],
            [(w % 100) as f64 + 1.0, (h % 100) as f64 + 1.0],
        );
        let span = AngleSpan::new(DVec2::ZERO, &rect);
        let sector = span.zone.sector();

        sector.contains(span.min_degree) && sector.contains(span.max_degree)
    }
}
