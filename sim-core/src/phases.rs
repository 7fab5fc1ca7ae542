//! Per-tick phases of the gravity integrator.
//!
//! One tick is:
//! 1. [`force_phase`] — every body's net force is summed into a
//!    [`ForceBuffer`] from the positions at the start of the tick.
//! 2. [`integrate_phase`] — each body turns its force into a velocity
//!    increment, moves, wraps at the bounds, and records its old position.
//!
//! Because no body is written until all forces are known, the result does
//! not depend on body order. [`step`] runs both phases.
//!
//! The force law and the velocity update are kept exactly as the
//! simulator has always computed them:
//!
//! - `F_ij = G * m_i * m_j * (p_j - p_i) / |p_j - p_i|`, which falls off
//!   as `1/d` rather than `1/d²`;
//! - `v' = (v + (F / m) * dt) * dt`, which scales the whole velocity by
//!   `dt` every tick, not only the acceleration term.
//!
//! Coincident bodies divide by a zero distance. That is not guarded:
//! NaN propagates into the affected bodies and the engine reports it.

use crate::{body::Body, bounds::Bounds, force_buffer::ForceBuffer, vector::Vector2D};

/// Force exerted on `on` by `from`.
///
/// Antisymmetric: `pairwise_force(a, b, g) == -pairwise_force(b, a, g)`.
#[inline]
pub fn pairwise_force(on: &Body, from: &Body, g: f64) -> Vector2D {
    let d = on.position().distance(from.position());
    let k = g * (on.mass() * from.mass());
    (from.position() - on.position()) * k / d
}

/// Net force on body `i` from every other body.
///
/// ### Panics
/// Panics if `i` is out of bounds.
pub fn net_force(bodies: &[Body], i: usize, g: f64) -> Vector2D {
    let on = &bodies[i];
    let mut f = Vector2D::ZERO;
    for (j, from) in bodies.iter().enumerate() {
        if i == j {
            continue;
        }
        f += pairwise_force(on, from, g);
    }
    f
}

/// Fills `acc` with the net force on every body.
///
/// The buffer is resized (and cleared) to `bodies.len()` first via
/// [`ForceBuffer::ensure_len`].
pub fn force_phase(bodies: &[Body], g: f64, acc: &mut ForceBuffer) {
    acc.ensure_len(bodies.len());

    for i in 0..bodies.len() {
        acc.add(i, net_force(bodies, i, g));
    }
}

/// Advances every body using the forces collected by [`force_phase`].
///
/// For body `i` with force `F`:
///
/// 1. `a = (F / m) * dt`
/// 2. `v' = (v + a) * dt`
/// 3. `p' = p + v'`
/// 4. `(p', v')` pass through [`Bounds::wrap`].
/// 5. The old position is pushed onto the body's history and the new
///    state is committed.
///
/// ### Panics
/// Panics if `acc` was sized for fewer bodies than `bodies`.
pub fn integrate_phase(bodies: &mut [Body], acc: &ForceBuffer, dt: f64, bounds: &Bounds) {
    for (i, body) in bodies.iter_mut().enumerate() {
        let accel = (acc.get(i) / body.mass()).scalar_multiply(dt);
        let velocity = body.velocity().sum(accel).scalar_multiply(dt);
        let position = body.position().sum(velocity);

        let (position, velocity) = bounds.wrap(position, velocity);
        body.commit(position, velocity);
    }
}

/// Runs one full tick over `bodies` with a fresh scratch buffer.
///
/// Hosts that step repeatedly should prefer
/// [`crate::simulation::Simulation::step`], which reuses its buffer.
pub fn step(bodies: &mut [Body], dt: f64, g: f64, bounds: &Bounds) {
    let mut acc = ForceBuffer::with_len(bodies.len());
    step_with_buffer(bodies, dt, g, bounds, &mut acc);
}

/// [`step`] with a caller-owned scratch buffer.
pub fn step_with_buffer(
    bodies: &mut [Body],
    dt: f64,
    g: f64,
    bounds: &Bounds,
    acc: &mut ForceBuffer,
) {
    force_phase(bodies, g, acc);
    integrate_phase(bodies, acc, dt, bounds);
}
