use crate::{
    body::{Body, BodyError},
    body_set::BodySet,
    bounds::Bounds,
    config::Config,
    force_buffer::ForceBuffer,
    phases,
    types::BodyId,
    vector::Vector2D,
};
use rand::Rng;

/// Gravity simulation engine.
///
/// Owns the body collection, the [`Config`] it steps with, and a scratch
/// [`ForceBuffer`] reused across ticks. A host calls [`Simulation::step`]
/// at whatever cadence it likes and reads [`Simulation::bodies`] between
/// calls.
#[derive(Debug)]
pub struct Simulation {
    bodies: BodySet,
    cfg: Config,
    acc: ForceBuffer,
    ticks: u64,
    non_finite: usize,
}

impl Simulation {
    pub fn new(cfg: Config) -> Self {
        let bodies = BodySet::with_history_capacity(cfg.history_capacity);
        Self {
            bodies,
            cfg,
            acc: ForceBuffer::default(),
            ticks: 0,
            non_finite: 0,
        }
    }

    /// Starts from an existing set of bodies.
    pub fn with_bodies(cfg: Config, bodies: Vec<Body>) -> Self {
        let mut set = BodySet::from_bodies(bodies);
        set.set_history_capacity(cfg.history_capacity);
        let acc = ForceBuffer::with_len(set.len());
        Self {
            bodies: set,
            cfg,
            acc,
            ticks: 0,
            non_finite: 0,
        }
    }

    /// Advances every body by one tick using the configured `dt`.
    pub fn step(&mut self) {
        self.step_with(self.cfg.dt);
    }

    /// Advances every body by one tick of length `dt`.
    pub fn step_with(&mut self, dt: f64) {
        phases::step_with_buffer(
            self.bodies.as_mut_slice(),
            dt,
            self.cfg.gravitational_constant,
            &self.cfg.bounds,
            &mut self.acc,
        );
        self.ticks += 1;

        let non_finite = self.bodies.iter().filter(|b| !b.is_finite()).count();
        if non_finite > self.non_finite {
            log::warn!(
                "tick {}: {} bodies have non-finite state (coincident positions?)",
                self.ticks,
                non_finite
            );
        }
        self.non_finite = non_finite;
    }

    /// Adds a body with explicit mass and radius.
    pub fn spawn(
        &mut self,
        position: Vector2D,
        velocity: Vector2D,
        mass: f64,
        radius: f64,
    ) -> Result<BodyId, BodyError> {
        self.bodies.spawn(position, velocity, mass, radius)
    }

    /// Adds a body with mass and radius drawn from the configured ranges.
    pub fn spawn_random(
        &mut self,
        position: Vector2D,
        velocity: Vector2D,
        rng: &mut impl Rng,
    ) -> Result<BodyId, BodyError> {
        self.bodies
            .spawn_random(position, velocity, &self.cfg.spawn, rng)
    }

    /// Adds `spawn.scatter_count` random bodies anywhere inside the bounds.
    pub fn scatter(&mut self, rng: &mut impl Rng) -> Result<Vec<BodyId>, BodyError> {
        self.bodies.scatter(&self.cfg.bounds, &self.cfg.spawn, rng)
    }

    /// Removes every body. Stepping afterwards is valid and does nothing.
    pub fn clear(&mut self) {
        self.bodies.clear();
        self.acc.ensure_len(0);
        self.non_finite = 0;
    }

    pub fn bodies(&self) -> &BodySet {
        &self.bodies
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub fn config(&self) -> &Config {
        &self.cfg
    }

    /// Replaces the configuration. Bodies already spawned keep their
    /// trail capacity; new spawns use the new one.
    pub fn set_config(&mut self, cfg: Config) {
        self.bodies.set_history_capacity(cfg.history_capacity);
        self.cfg = cfg;
    }

    pub fn set_bounds(&mut self, bounds: Bounds) {
        self.cfg.bounds = bounds;
    }

    /// Number of completed ticks since construction.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Bodies whose position or velocity went non-finite, as of the last tick.
    pub fn non_finite_count(&self) -> usize {
        self.non_finite
    }
}

impl Default for Simulation {
    fn default() -> Self {
        Self::new(Config::default())
    }
}
