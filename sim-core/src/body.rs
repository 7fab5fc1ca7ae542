use crate::vector::Vector2D;
use std::collections::VecDeque;
use thiserror::Error;

/// Reasons a [`Body`] cannot be constructed.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum BodyError {
    /// Mass must be strictly positive; the integrator divides by it.
    #[error("body mass must be positive, got {0}")]
    NonPositiveMass(f64),
}

/// Ordered record of positions a body has visited.
///
/// Without a capacity the trail is append-only and grows for the whole
/// lifetime of the body. With a capacity it behaves as a ring buffer and
/// drops the oldest position once full.
#[derive(Clone, Debug, Default)]
pub struct Trail {
    points: VecDeque<Vector2D>,
    capacity: Option<usize>,
}

impl Trail {
    pub fn unbounded() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            points: VecDeque::with_capacity(capacity),
            capacity: Some(capacity),
        }
    }

    pub fn capacity(&self) -> Option<usize> {
        self.capacity
    }

    pub fn push(&mut self, p: Vector2D) {
        if let Some(cap) = self.capacity {
            if cap == 0 {
                return;
            }
            while self.points.len() >= cap {
                self.points.pop_front();
            }
        }
        self.points.push_back(p);
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Oldest position first.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Vector2D> + '_ {
        self.points.iter()
    }

    pub fn last(&self) -> Option<Vector2D> {
        self.points.back().copied()
    }
}

/// A massive point particle.
///
/// State is read through accessors. Only the integrator in
/// [`crate::phases`] writes position, velocity, and history, so the
/// rendering side cannot disturb a tick.
#[derive(Clone, Debug)]
pub struct Body {
    position: Vector2D,
    velocity: Vector2D,
    mass: f64,
    radius: f64,
    history: Trail,
}

impl Body {
    /// Creates a body with an unbounded history.
    ///
    /// ### Errors
    /// [`BodyError::NonPositiveMass`] if `mass` is zero, negative, or NaN.
    pub fn new(
        position: Vector2D,
        velocity: Vector2D,
        mass: f64,
        radius: f64,
    ) -> Result<Self, BodyError> {
        Self::with_history(position, velocity, mass, radius, Trail::unbounded())
    }

    pub fn with_history(
        position: Vector2D,
        velocity: Vector2D,
        mass: f64,
        radius: f64,
        history: Trail,
    ) -> Result<Self, BodyError> {
        // Written as a negated comparison so NaN is rejected too.
        if !(mass > 0.0) {
            return Err(BodyError::NonPositiveMass(mass));
        }
        Ok(Self {
            position,
            velocity,
            mass,
            radius,
            history,
        })
    }

    #[inline]
    pub fn position(&self) -> Vector2D {
        self.position
    }

    #[inline]
    pub fn velocity(&self) -> Vector2D {
        self.velocity
    }

    #[inline]
    pub fn mass(&self) -> f64 {
        self.mass
    }

    /// Rendering hint; the force law ignores it.
    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn history(&self) -> &Trail {
        &self.history
    }

    /// `false` once a degenerate tick has put NaN or infinity into the
    /// position or velocity.
    pub fn is_finite(&self) -> bool {
        self.position.is_finite() && self.velocity.is_finite()
    }

    /// Records the current position in the history, then moves the body.
    pub(crate) fn commit(&mut self, position: Vector2D, velocity: Vector2D) {
        self.history.push(self.position);
        self.position = position;
        self.velocity = velocity;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body_at(x: f64, y: f64) -> Body {
        Body::new(Vector2D::new(x, y), Vector2D::ZERO, 1.0, 5.0).unwrap()
    }

    #[test]
    fn new_rejects_zero_negative_and_nan_mass() {
        for mass in [0.0, -0.0, -1.0, f64::NAN, f64::NEG_INFINITY] {
            let res = Body::new(Vector2D::ZERO, Vector2D::ZERO, mass, 1.0);
            assert!(
                matches!(res, Err(BodyError::NonPositiveMass(_))),
                "mass {mass} should be rejected"
            );
        }
    }

    #[test]
    fn new_accepts_positive_mass_and_starts_with_empty_history() {
        let b = Body::new(Vector2D::new(1.0, 2.0), Vector2D::new(3.0, 4.0), 7.0, 5.0).unwrap();

        assert_eq!(b.position(), Vector2D::new(1.0, 2.0));
        assert_eq!(b.velocity(), Vector2D::new(3.0, 4.0));
        assert_eq!(b.mass(), 7.0);
        assert_eq!(b.radius(), 5.0);
        assert!(b.history().is_empty());
        assert_eq!(b.history().capacity(), None);
    }

    #[test]
    fn commit_pushes_previous_position() {
        let mut b = body_at(1.0, 1.0);
        b.commit(Vector2D::new(2.0, 2.0), Vector2D::new(1.0, 1.0));
        b.commit(Vector2D::new(3.0, 3.0), Vector2D::new(1.0, 1.0));

        let visited: Vec<Vector2D> = b.history().iter().copied().collect();
        assert_eq!(visited, vec![Vector2D::new(1.0, 1.0), Vector2D::new(2.0, 2.0)]);
        assert_eq!(b.position(), Vector2D::new(3.0, 3.0));
    }

    #[test]
    fn bounded_trail_drops_oldest_points() {
        let mut trail = Trail::with_capacity(2);
        trail.push(Vector2D::new(1.0, 0.0));
        trail.push(Vector2D::new(2.0, 0.0));
        trail.push(Vector2D::new(3.0, 0.0));

        assert_eq!(trail.len(), 2);
        assert_eq!(trail.iter().next(), Some(&Vector2D::new(2.0, 0.0)));
        assert_eq!(trail.last(), Some(Vector2D::new(3.0, 0.0)));
    }

    #[test]
    fn zero_capacity_trail_stays_empty() {
        let mut trail = Trail::with_capacity(0);
        trail.push(Vector2D::new(1.0, 0.0));
        assert!(trail.is_empty());
    }

    #[test]
    fn is_finite_detects_degenerate_state() {
        let mut b = body_at(0.0, 0.0);
        assert!(b.is_finite());

        b.commit(Vector2D::new(f64::NAN, 0.0), Vector2D::ZERO);
        assert!(!b.is_finite());
    }
}
