use anyhow::{bail, Context};
use fov::Cone;
use serde::{Deserialize, Serialize};
use util::FULL_TURN;

use crate::{Observer, Vehicle};

/// Snapshot of the road for a single tick.
#[derive(Clone, PartialEq, Default, Debug, Serialize, Deserialize)]
pub struct Scene {
    pub observer: Observer,
    /// Other vehicles on the road, results are reported in this order.
    pub vehicles: Vec<Vehicle>,
}

impl Scene {
    pub fn new(
        observer: Observer,
        vehicles: Vec<Vehicle>,
    ) -> anyhow::Result<Self> {
        let ret = Scene { observer, vehicles };
        ret.validate()?;
        Ok(ret)
    }

    /// Check that the scene can be handed to the visibility engine.
    pub fn validate(&self) -> anyhow::Result<()> {
        validate_parts(&self.observer, &self.vehicles)
    }

    pub fn cone(&self) -> Cone {
        self.observer.cone()
    }
}

pub(crate) fn validate_parts(
    observer: &Observer,
    vehicles: &[Vehicle],
) -> anyhow::Result<()> {
    let fov = observer.fov;
    if !(fov > 0.0 && fov <= FULL_TURN) {
        bail!("field of view {fov} is not in (0, 360]");
    }
    observer.validate().context("bad observer")?;

    for (i, v) in vehicles.iter().enumerate() {
        v.validate().with_context(|| format!("bad vehicle #{i}"))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use fov::Direction::*;

    use super::*;

    fn observer(fov: f64) -> Observer {
        Observer::new(Vehicle::new([40.0, -20.0], 20.0, 20.0, 0.0, Forward))
            .with_fov(fov)
    }

    #[test]
    fn accepts_well_formed() {
        let scene = Scene::new(
            observer(90.0),
            vec![Vehicle::new([40.0, 50.0], 20.0, 10.0, 2.0, Forward)],
        )
        .unwrap();
        assert_eq!(scene.vehicles.len(), 1);
        assert_eq!(scene.cone().fov, 90.0);

        assert!(Scene::new(observer(360.0), vec![]).is_ok());
    }

    #[test]
    fn rejects_bad_fov() {
        for fov in [0.0, -10.0, 360.5, f64::NAN, f64::INFINITY] {
            assert!(Scene::new(observer(fov), vec![]).is_err(), "{fov}");
        }
    }

    #[test]
    fn reports_bad_vehicle_index() {
        let err = Scene::new(
            observer(90.0),
            vec![
                Vehicle::new([0.0, 0.0], 10.0, 10.0, 1.0, Forward),
                Vehicle::new([0.0, 0.0], 10.0, -10.0, 1.0, Forward),
            ],
        )
        .unwrap_err();
        assert!(format!("{err:#}").contains("#1"));
    }
}
