//! Road observer simulation machinery.

use world::{Scene, Visibility};

/// Opacity of the faintest partially visible vehicle in the display list.
pub const OPACITY_FLOOR: f64 = 0.1;

pub mod prelude;

mod runtime;
pub use runtime::Runtime;

mod time;
pub use time::Instant;

pub mod traffic;

pub mod view;
pub use view::{Color, Shape};

/// Classify the visibility of every vehicle in the scene from the observer's
/// point of view.
///
/// Results are in the same order as `scene.vehicles`. The scene is assumed
/// to be valid, see `Scene::validate`.
pub fn classify(scene: &Scene) -> Vec<Visibility> {
    let cone = scene.cone();
    log::trace!(
        "cone at {} spans {:.2}..{:.2}",
        cone.apex,
        cone.arc.start,
        cone.arc.end()
    );

    scene
        .vehicles
        .iter()
        .map(|v| cone.classify(&v.rect()))
        .collect()
}
