//! Random traffic generation.

use anyhow::bail;
use rand::Rng;
use util::RngExt;
use world::{Direction, Observer, Road, Vehicle, DEFAULT_FOV, LANE_WIDTH};

/// Fraction of the lane width taken up by a vehicle.
const VEHICLE_WIDTH: f64 = LANE_WIDTH * 0.6;

/// Generate a road with `count` vehicles spread over its lanes.
///
/// Left half lanes carry forward traffic down the road, right half lanes
/// carry backward traffic up the road. The observer sits still in the
/// forward lane closest to the center line, halfway along the road.
pub fn generate(
    rng: &mut impl Rng,
    width: f64,
    length: f64,
    count: usize,
) -> anyhow::Result<Road> {
    let lanes = (width / LANE_WIDTH).floor() as usize;
    if lanes == 0 || !(length > 0.0) {
        bail!("road of {width}x{length} has no room for lanes");
    }
    let forward_lanes = lanes.div_ceil(2);

    let observer = Observer::new(Vehicle::new(
        [lane_x(forward_lanes - 1), length / 2.0 - 20.0],
        VEHICLE_WIDTH,
        40.0,
        0.0,
        Direction::Forward,
    ))
    .with_fov(DEFAULT_FOV);

    let vehicles = (0..count)
        .map(|_| {
            let lane = rng.gen_range(0..lanes);
            let direction = if lane < forward_lanes {
                Direction::Forward
            } else {
                Direction::Backward
            };

            // Occasional trucks among the cars.
            let vehicle_length = if rng.one_chance_in(6) {
                rng.gen_range(90.0..120.0)
            } else {
                rng.gen_range(40.0..70.0)
            };

            Vehicle::new(
                [lane_x(lane), rng.gen_range(0.0..length)],
                VEHICLE_WIDTH,
                vehicle_length,
                rng.gen_range(1.0..4.0),
                direction,
            )
        })
        .collect();

    let ret = Road::new(width, length, observer, vehicles)?;
    log::debug!(
        "generated {lanes} lane road with {} vehicles",
        ret.vehicles.len()
    );
    Ok(ret)
}

/// Left edge of a vehicle centered in the given lane.
fn lane_x(lane: usize) -> f64 {
    lane as f64 * LANE_WIDTH + (LANE_WIDTH - VEHICLE_WIDTH) / 2.0
}
