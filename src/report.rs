use std::fmt;

use engine::prelude::*;
use fov::{AngleSpan, Zone};

/// Plain text summary of the current visibility of every vehicle.
pub struct Report {
    now: Instant,
    paused: bool,
    fov: f64,
    heading: f64,
    apex: DVec2,
    rows: Vec<Row>,
}

struct Row {
    position: DVec2,
    direction: Direction,
    zone: Zone,
    result: Visibility,
}

impl Report {
    pub fn new(rt: &Runtime) -> Self {
        let scene = rt.scene();
        let cone = scene.cone();
        let apex = cone.apex;

        let rows = scene
            .vehicles
            .iter()
            .zip(classify(&scene))
            .map(|(v, result)| Row {
                position: v.position,
                direction: v.direction,
                zone: AngleSpan::new(apex, &v.rect()).zone,
                result,
            })
            .collect();

        Report {
            now: rt.now(),
            paused: rt.is_paused(),
            fov: rt.fov(),
            heading: cone.heading(),
            apex,
            rows,
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: fov {}° heading {}°, apex ({:.1}, {:.1})",
            self.now, self.fov, self.heading, self.apex.x, self.apex.y
        )?;
        if self.paused {
            write!(f, ", paused")?;
        }
        writeln!(f)?;
        for (i, row) in self.rows.iter().enumerate() {
            writeln!(
                f,
                "{i:>3} {:<6} ({:>6.1}, {:>6.1}) {:<9} {}",
                format!("{:?}", row.zone),
                row.position.x,
                row.position.y,
                row.direction.to_string(),
                row.result
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn road() -> Road {
        Road::new(
            300.0,
            800.0,
            Observer::new(Vehicle::new(
                [40.0, -20.0],
                20.0,
                20.0,
                0.0,
                Direction::Forward,
            ))
            .with_fov(90.0),
            vec![
                Vehicle::new([40.0, 50.0], 20.0, 10.0, 1.0, Direction::Forward),
                Vehicle::new(
                    [500.0, 50.0],
                    20.0,
                    10.0,
                    1.0,
                    Direction::Backward,
                ),
            ],
        )
        .unwrap()
    }

    #[test]
    fn report_rows() {
        let report = Report::new(&Runtime::new(road()).unwrap()).to_string();
        let lines: Vec<&str> = report.lines().collect();
        assert_eq!(
            lines,
            vec![
                "t0: fov 90° heading 90°, apex (50.0, 0.0)",
                "  0 Q12    (  40.0,   50.0) forward   visible",
                "  1 Q1     ( 500.0,   50.0) backward  hidden",
            ]
        );
    }

    #[test]
    fn paused_backward_header() {
        let mut road = road();
        road.observer.direction = Direction::Backward;
        let mut rt = Runtime::new(road).unwrap();
        rt.toggle_pause();
        rt.tick();

        let report = Report::new(&rt).to_string();
        assert_eq!(
            report.lines().next(),
            Some("t0: fov 90° heading 270°, apex (50.0, -20.0), paused")
        );
    }
}
