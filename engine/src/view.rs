//! Display list for drawing the road.

use serde::{Deserialize, Serialize};
use world::{Road, Visibility};

use crate::OPACITY_FLOOR;

const LABEL_WIDTH: f64 = 40.0;
const LABEL_HEIGHT: f64 = 15.0;
const LABEL_OFFSET: f64 = 20.0;
const LABEL_FONT_SIZE: u32 = 14;

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Red,
    Green,
    Blue,
    Purple,
    Black,
    White,
}

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Shape {
    Line {
        /// Start and end point, `[x1, y1, x2, y2]`.
        points: [f64; 4],
        stroke: Color,
    },
    Rect {
        /// Index of the vehicle, none for the observer.
        id: Option<usize>,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        fill: Color,
        opacity: f64,
    },
    /// Popup showing the visible percentage of a vehicle.
    Label {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        fill: Color,
        stroke: Color,
        text: String,
        font_size: u32,
        visible: bool,
    },
}

/// Fill color and opacity for a vehicle.
pub fn paint(v: &Visibility) -> (Color, f64) {
    if v.visible {
        (Color::Green, 1.0)
    } else if v.occluded {
        // Don't let barely visible vehicles vanish from the screen.
        (Color::Blue, v.ratio.max(OPACITY_FLOOR))
    } else {
        (Color::Red, 1.0)
    }
}

/// Build the display list for a road and the visibility of its vehicles.
///
/// Cone boundary lines come first, then the observer and the vehicles, and
/// percentage labels for partially visible vehicles last so they're drawn
/// on top. Only the selected vehicle's label is visible.
pub fn draw(
    road: &Road,
    results: &[Visibility],
    selected: Option<usize>,
) -> Vec<Shape> {
    debug_assert_eq!(road.vehicles.len(), results.len());

    let cone = road.observer.cone();
    let mut ret = vec![
        Shape::Line {
            points: [cone.apex.x, cone.apex.y, cone.left_ray.x, cone.left_ray.y],
            stroke: Color::Purple,
        },
        Shape::Line {
            points: [
                cone.apex.x,
                cone.apex.y,
                cone.right_ray.x,
                cone.right_ray.y,
            ],
            stroke: Color::Purple,
        },
        Shape::Rect {
            id: None,
            x: road.observer.position.x,
            y: road.observer.position.y,
            width: road.observer.width,
            height: road.observer.length,
            fill: Color::Black,
            opacity: 1.0,
        },
    ];

    let mut labels = Vec::new();
    for (i, (v, vis)) in road.vehicles.iter().zip(results).enumerate() {
        let (fill, opacity) = paint(vis);
        ret.push(Shape::Rect {
            id: Some(i),
            x: v.position.x,
            y: v.position.y,
            width: v.width,
            height: v.length,
            fill,
            opacity,
        });

        if vis.occluded {
            let (x, y) = (v.position.x, v.position.y);
            labels.push(Shape::Label {
                x: if x - LABEL_OFFSET < 0.0 {
                    0.0
                } else if road.width < x + LABEL_OFFSET {
                    road.width - LABEL_WIDTH
                } else {
                    x - LABEL_OFFSET
                },
                y: (y - LABEL_OFFSET).max(0.0),
                width: LABEL_WIDTH,
                height: LABEL_HEIGHT,
                fill: Color::White,
                stroke: Color::Black,
                text: format!("{:.0}%", vis.ratio * 100.0),
                font_size: LABEL_FONT_SIZE,
                visible: selected == Some(i),
            });
        }
    }

    ret.extend(labels);
    ret
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use world::{Direction::*, Observer, Vehicle};

    use super::*;

    fn road(vehicles: Vec<Vehicle>) -> Road {
        Road::new(
            300.0,
            800.0,
            Observer::new(Vehicle::new(
                [110.0, 380.0],
                30.0,
                40.0,
                0.0,
                Forward,
            )),
            vehicles,
        )
        .unwrap()
    }

    fn car(x: f64, y: f64) -> Vehicle {
        Vehicle::new([x, y], 30.0, 50.0, 2.0, Forward)
    }

    fn labels(shapes: &[Shape]) -> Vec<&Shape> {
        shapes
            .iter()
            .filter(|s| matches!(s, Shape::Label { .. }))
            .collect()
    }

    #[test]
    fn paint_colors() {
        assert_eq!(paint(&Visibility::VISIBLE), (Color::Green, 1.0));
        assert_eq!(paint(&Visibility::HIDDEN), (Color::Red, 1.0));
        assert_eq!(paint(&Visibility::partial(0.5)), (Color::Blue, 0.5));
        assert_eq!(
            paint(&Visibility::partial(0.02)),
            (Color::Blue, OPACITY_FLOOR)
        );
    }

    #[test]
    fn layout() {
        let road = road(vec![car(10.0, 100.0), car(210.0, 600.0)]);
        let shapes = draw(
            &road,
            &[Visibility::VISIBLE, Visibility::HIDDEN],
            None,
        );

        assert_eq!(shapes.len(), 5);
        assert!(matches!(
            shapes[0],
            Shape::Line {
                stroke: Color::Purple,
                ..
            }
        ));
        assert!(matches!(
            shapes[2],
            Shape::Rect {
                id: None,
                fill: Color::Black,
                ..
            }
        ));
        assert_eq!(
            shapes[4],
            Shape::Rect {
                id: Some(1),
                x: 210.0,
                y: 600.0,
                width: 30.0,
                height: 50.0,
                fill: Color::Red,
                opacity: 1.0,
            }
        );
        assert!(labels(&shapes).is_empty());
    }

    #[test]
    fn labels_for_partial_vehicles() {
        let road =
            road(vec![car(5.0, 10.0), car(150.0, 300.0), car(290.0, 500.0)]);
        let results = [
            Visibility::partial(0.25),
            Visibility::partial(0.5),
            Visibility::partial(0.754),
        ];
        let shapes = draw(&road, &results, Some(1));
        let labels = labels(&shapes);
        assert_eq!(labels.len(), 3);

        let pos: Vec<(f64, f64, bool, &str)> = labels
            .iter()
            .map(|s| match s {
                Shape::Label {
                    x, y, visible, text, ..
                } => (*x, *y, *visible, text.as_str()),
                _ => unreachable!(),
            })
            .collect();

        assert_eq!(
            pos,
            vec![
                // Clamped to the left edge and the top.
                (0.0, 0.0, false, "25%"),
                (130.0, 280.0, true, "50%"),
                // Clamped to the right edge.
                (260.0, 480.0, false, "75%"),
            ]
        );

        // Labels come after all rectangles.
        assert!(matches!(shapes[shapes.len() - 3], Shape::Label { .. }));
    }

    #[test]
    fn json_output() {
        let road = road(vec![car(10.0, 100.0)]);
        let shapes = draw(&road, &[Visibility::partial(0.5)], Some(0));
        let json = serde_json::to_value(&shapes).unwrap();

        assert_eq!(json[0]["type"], "line");
        assert_eq!(json[0]["stroke"], "purple");
        assert_eq!(json[3]["type"], "rect");
        assert_eq!(json[3]["fill"], "blue");
        assert_eq!(json[3]["opacity"], 0.5);
        assert_eq!(json[4]["type"], "label");
        assert_eq!(json[4]["text"], "50%");
        assert_eq!(json[4]["visible"], true);
    }
}
