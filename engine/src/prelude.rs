pub use crate::{
    classify, traffic, view, Color, Instant, Runtime, Shape, OPACITY_FLOOR,
};
pub use glam::{dvec2, DVec2};
pub use util::{srng, Logos};
pub use world::{
    Direction, Observer, Road, Scene, Vehicle, Visibility, DEFAULT_FOV,
    ROAD_LENGTH, ROAD_WIDTH,
};
