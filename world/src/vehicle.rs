use anyhow::bail;
use derive_more::{Deref, DerefMut};
use fov::{Cone, Direction};
use glam::{dvec2, DVec2};
use serde::{Deserialize, Serialize};
use util::Rect;

use crate::DEFAULT_FOV;

/// Rectangular vehicle driving along the road's y axis.
#[derive(Copy, Clone, PartialEq, Default, Debug, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Vehicle {
    /// Top-left corner.
    pub position: DVec2,
    pub width: f64,
    /// Extent along the y axis.
    pub length: f64,
    /// Pixels moved per tick.
    pub speed: f64,
    pub direction: Direction,
}

impl Vehicle {
    pub fn new(
        position: impl Into<DVec2>,
        width: f64,
        length: f64,
        speed: f64,
        direction: Direction,
    ) -> Self {
        Vehicle {
            position: position.into(),
            width,
            length,
            speed,
            direction,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::sized(self.position, dvec2(self.width, self.length))
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if !self.position.is_finite() {
            bail!("bad position {}", self.position);
        }
        if !(self.width.is_finite() && self.width >= 0.0) {
            bail!("bad width {}", self.width);
        }
        if !(self.length.is_finite() && self.length >= 0.0) {
            bail!("bad length {}", self.length);
        }
        if !(self.speed.is_finite() && self.speed >= 0.0) {
            bail!("bad speed {}", self.speed);
        }
        Ok(())
    }

    /// Move one tick along the road, re-entering from the opposite end after
    /// leaving a road of `road_length`.
    pub fn advance(&mut self, road_length: f64) {
        self.position.y += self.speed * self.direction.sign();

        match self.direction {
            Direction::Forward if self.position.y > road_length => {
                self.position.y = -self.length;
            }
            Direction::Backward if self.position.y + self.length < 0.0 => {
                self.position.y = road_length;
            }
            _ => {}
        }
    }
}

/// The vehicle whose point of view is being simulated.
#[derive(
    Copy, Clone, PartialEq, Debug, Deref, DerefMut, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub struct Observer {
    #[deref]
    #[deref_mut]
    pub body: Vehicle,
    /// Field of view in degrees.
    pub fov: f64,
}

impl Default for Observer {
    fn default() -> Self {
        Observer::new(Vehicle::default())
    }
}

impl From<Vehicle> for Observer {
    fn from(body: Vehicle) -> Self {
        Observer::new(body)
    }
}

impl Observer {
    pub fn new(body: Vehicle) -> Self {
        Observer {
            body,
            fov: DEFAULT_FOV,
        }
    }

    pub fn with_fov(mut self, fov: f64) -> Self {
        self.fov = fov;
        self
    }

    /// Origin point of the view cone, middle of the vehicle's front edge.
    pub fn apex(&self) -> DVec2 {
        let x = self.position.x + self.width / 2.0;
        match self.direction {
            Direction::Forward => dvec2(x, self.position.y + self.length),
            Direction::Backward => dvec2(x, self.position.y),
        }
    }

    pub fn cone(&self) -> Cone {
        Cone::new(self.apex(), self.direction, self.fov)
    }
}
