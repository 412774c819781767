use anyhow::Context;
use world::{Road, Scene, Visibility};

use crate::{view, Instant, Shape};

/// Running road simulation.
///
/// Owns the traffic and the user-facing controls: pause state, the
/// observer's field of view and the vehicle selected for closer
/// inspection.
#[derive(Clone, Debug)]
pub struct Runtime {
    road: Road,
    now: Instant,
    paused: bool,
    selected: Option<usize>,
}

impl Runtime {
    pub fn new(road: Road) -> anyhow::Result<Self> {
        road.validate().context("can't start simulation")?;
        log::info!(
            "starting {}x{} road with {} vehicles, fov {}",
            road.width,
            road.length,
            road.vehicles.len(),
            road.observer.fov
        );

        Ok(Runtime {
            road,
            now: Default::default(),
            paused: false,
            selected: None,
        })
    }

    pub fn road(&self) -> &Road {
        &self.road
    }

    pub fn now(&self) -> Instant {
        self.now
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Pause or resume the traffic, return whether it's now paused.
    pub fn toggle_pause(&mut self) -> bool {
        self.paused = !self.paused;
        log::debug!("paused: {}", self.paused);
        self.paused
    }

    pub fn fov(&self) -> f64 {
        self.road.observer.fov
    }

    /// Change the observer's field of view. Invalid values are rejected and
    /// leave the current one in place.
    pub fn set_fov(&mut self, fov: f64) -> anyhow::Result<()> {
        let prev = self.road.observer.fov;
        self.road.observer.fov = fov;
        if let Err(e) = self.road.validate() {
            self.road.observer.fov = prev;
            return Err(e);
        }
        log::debug!("fov: {prev} -> {fov}");
        Ok(())
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Select a vehicle by index. Selecting a vehicle that doesn't exist
    /// clears the selection.
    pub fn select(&mut self, idx: Option<usize>) {
        self.selected = match idx {
            Some(i) if i >= self.road.vehicles.len() => {
                log::warn!("no vehicle #{i} to select");
                None
            }
            x => x,
        };
    }

    /// Advance the simulation by one tick unless paused.
    pub fn tick(&mut self) {
        if self.paused {
            return;
        }
        self.road.advance();
        self.now += 1;
        log::trace!("tick {}", self.now);
    }

    pub fn scene(&self) -> Scene {
        self.road.scene()
    }

    pub fn classify(&self) -> Vec<Visibility> {
        crate::classify(&self.scene())
    }

    /// Display list for the current state.
    pub fn frame(&self) -> Vec<Shape> {
        view::draw(&self.road, &self.classify(), self.selected)
    }
}
