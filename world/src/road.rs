use std::path::Path;

use anyhow::{bail, Context};
use serde::{Deserialize, Serialize};

use crate::{scene::validate_parts, Observer, Scene, Vehicle};

/// A stretch of road with traffic on it.
#[derive(Clone, PartialEq, Default, Debug, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Road {
    pub width: f64,
    pub length: f64,
    pub observer: Observer,
    pub vehicles: Vec<Vehicle>,
}

impl Road {
    pub fn new(
        width: f64,
        length: f64,
        observer: Observer,
        vehicles: Vec<Vehicle>,
    ) -> anyhow::Result<Self> {
        let ret = Road {
            width,
            length,
            observer,
            vehicles,
        };
        ret.validate()?;
        Ok(ret)
    }

    /// Load a road description from an IDM file.
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("can't read {}", path.display()))?;
        let ret: Road = idm::from_str(&text)
            .with_context(|| format!("can't parse {}", path.display()))?;
        ret.validate()
            .with_context(|| format!("invalid road in {}", path.display()))?;
        log::info!(
            "loaded {} with {} vehicles",
            path.display(),
            ret.vehicles.len()
        );
        Ok(ret)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        for (name, x) in [("width", self.width), ("length", self.length)] {
            if !(x.is_finite() && x > 0.0) {
                bail!("bad road {name} {x}");
            }
        }
        validate_parts(&self.observer, &self.vehicles)
    }

    /// Move all traffic forward by one tick.
    pub fn advance(&mut self) {
        let length = self.length;
        self.observer.advance(length);
        for v in self.vehicles.iter_mut() {
            v.advance(length);
        }
    }

    /// Snapshot the current traffic.
    pub fn scene(&self) -> Scene {
        Scene {
            observer: self.observer,
            vehicles: self.vehicles.clone(),
        }
    }
}
