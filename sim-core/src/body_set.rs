use crate::{
    body::{Body, BodyError, Trail},
    bounds::Bounds,
    config::SpawnRanges,
    types::BodyId,
    vector::Vector2D,
};
use rand::Rng;

/// Ordered collection of bodies.
///
/// Bodies are only ever appended or removed all at once; a [`BodyId`]
/// stays valid until the next [`BodySet::clear`].
#[derive(Clone, Debug, Default)]
pub struct BodySet {
    bodies: Vec<Body>,
    history_capacity: Option<usize>,
}

impl BodySet {
    pub fn new() -> Self {
        Self::default()
    }

    /// A set whose spawned bodies keep at most `capacity` past positions.
    pub fn with_history_capacity(capacity: Option<usize>) -> Self {
        Self {
            bodies: Vec::new(),
            history_capacity: capacity,
        }
    }

    pub fn from_bodies(bodies: Vec<Body>) -> Self {
        Self {
            bodies,
            history_capacity: None,
        }
    }

    pub fn set_history_capacity(&mut self, capacity: Option<usize>) {
        self.history_capacity = capacity;
    }

    fn new_trail(&self) -> Trail {
        match self.history_capacity {
            Some(cap) => Trail::with_capacity(cap),
            None => Trail::unbounded(),
        }
    }

    pub fn push(&mut self, body: Body) -> BodyId {
        let id = self.bodies.len();
        self.bodies.push(body);
        id
    }

    /// Appends a body with explicit mass and radius.
    ///
    /// ### Errors
    /// [`BodyError::NonPositiveMass`] if `mass <= 0`; the set is unchanged.
    pub fn spawn(
        &mut self,
        position: Vector2D,
        velocity: Vector2D,
        mass: f64,
        radius: f64,
    ) -> Result<BodyId, BodyError> {
        let body = Body::with_history(position, velocity, mass, radius, self.new_trail())?;
        Ok(self.push(body))
    }

    /// Appends a body whose radius and mass are drawn from `ranges`.
    ///
    /// The radius is an integer in `[min_radius, max_radius]`; the mass is
    /// an integer draw in `[min_mass, max_mass]` divided by that radius.
    ///
    /// ### Errors
    /// [`BodyError::NonPositiveMass`] if the ranges allow a zero mass draw.
    /// Ranges that passed [`crate::config::Config::validate`] never do.
    ///
    /// ### Panics
    /// Panics if either range is inverted.
    pub fn spawn_random(
        &mut self,
        position: Vector2D,
        velocity: Vector2D,
        ranges: &SpawnRanges,
        rng: &mut impl Rng,
    ) -> Result<BodyId, BodyError> {
        let radius = rng.random_range(ranges.min_radius..=ranges.max_radius) as f64;
        let mass = rng.random_range(ranges.min_mass..=ranges.max_mass) as f64 / radius;

        let id = self.spawn(position, velocity, mass, radius)?;
        log::debug!("spawned body {id} at {position} (mass {mass:.3}, radius {radius})");
        Ok(id)
    }

    /// Appends `ranges.scatter_count` random bodies placed uniformly inside
    /// `bounds`, each with a velocity drawn per axis from the scatter speed
    /// range. Returns the ids of the new bodies.
    pub fn scatter(
        &mut self,
        bounds: &Bounds,
        ranges: &SpawnRanges,
        rng: &mut impl Rng,
    ) -> Result<Vec<BodyId>, BodyError> {
        (0..ranges.scatter_count)
            .map(|_| {
                let pos = Vector2D::new(
                    rng.random_range(0.0..bounds.width),
                    rng.random_range(0.0..bounds.height),
                );
                let vel = Vector2D::new(
                    rng.random_range(ranges.min_scatter_speed..=ranges.max_scatter_speed),
                    rng.random_range(ranges.min_scatter_speed..=ranges.max_scatter_speed),
                );
                self.spawn_random(pos, vel, ranges, &mut *rng)
            })
            .collect()
    }

    /// Removes every body. A no-op on an empty set.
    pub fn clear(&mut self) {
        if !self.bodies.is_empty() {
            log::debug!("cleared {} bodies", self.bodies.len());
        }
        self.bodies.clear();
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub fn get(&self, id: BodyId) -> Option<&Body> {
        self.bodies.get(id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Body> {
        self.bodies.iter()
    }

    pub fn as_slice(&self) -> &[Body] {
        &self.bodies
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [Body] {
        &mut self.bodies
    }
}

impl<'a> IntoIterator for &'a BodySet {
    type Item = &'a Body;
    type IntoIter = std::slice::Iter<'a, Body>;

    fn into_iter(self) -> Self::IntoIter {
        self.bodies.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn spawn_appends_in_insertion_order() {
        let mut set = BodySet::new();
        let a = set
            .spawn(Vector2D::new(1.0, 1.0), Vector2D::ZERO, 1.0, 1.0)
            .unwrap();
        let b = set
            .spawn(Vector2D::new(2.0, 2.0), Vector2D::ZERO, 2.0, 1.0)
            .unwrap();

        assert_eq!((a, b), (0, 1));
        assert_eq!(set.get(1).map(Body::mass), Some(2.0));
    }

    #[test]
    fn spawn_with_zero_mass_leaves_set_unchanged() {
        let mut set = BodySet::new();
        let res = set.spawn(Vector2D::ZERO, Vector2D::ZERO, 0.0, 1.0);

        assert_eq!(res, Err(BodyError::NonPositiveMass(0.0)));
        assert!(set.is_empty());
    }

    #[test]
    fn spawn_random_respects_ranges() {
        let mut rng = StdRng::seed_from_u64(7);
        let ranges = SpawnRanges::default();
        let mut set = BodySet::new();

        for _ in 0..200 {
            set.spawn_random(Vector2D::new(5.0, 5.0), Vector2D::ZERO, &ranges, &mut rng)
                .unwrap();
        }

        let min_mass = ranges.min_mass as f64 / ranges.max_radius as f64;
        let max_mass = ranges.max_mass as f64 / ranges.min_radius as f64;
        for b in &set {
            let r = b.radius();
            assert_eq!(r.fract(), 0.0);
            assert!((ranges.min_radius as f64..=ranges.max_radius as f64).contains(&r));
            assert!(b.mass() > 0.0);
            assert!(b.mass() >= min_mass && b.mass() <= max_mass);
            assert_eq!(b.velocity(), Vector2D::ZERO);
        }
    }

    #[test]
    fn spawn_random_with_degenerate_ranges_is_deterministic() {
        let mut rng = StdRng::seed_from_u64(1);
        let ranges = SpawnRanges {
            min_mass: 100,
            max_mass: 100,
            min_radius: 4,
            max_radius: 4,
            ..SpawnRanges::default()
        };
        let mut set = BodySet::new();
        let id = set
            .spawn_random(Vector2D::ZERO, Vector2D::ZERO, &ranges, &mut rng)
            .unwrap();

        let b = set.get(id).unwrap();
        assert_eq!(b.radius(), 4.0);
        assert_eq!(b.mass(), 25.0);
    }

    #[test]
    fn spawn_random_with_zero_mass_range_is_rejected() {
        let mut rng = StdRng::seed_from_u64(3);
        let ranges = SpawnRanges {
            min_mass: 0,
            max_mass: 0,
            ..SpawnRanges::default()
        };
        let mut set = BodySet::new();

        let res = set.spawn_random(Vector2D::ZERO, Vector2D::ZERO, &ranges, &mut rng);
        assert!(matches!(res, Err(BodyError::NonPositiveMass(_))));
        assert!(set.is_empty());
    }

    #[test]
    fn scatter_places_bodies_inside_bounds() {
        let mut rng = StdRng::seed_from_u64(42);
        let bounds = Bounds::new(200.0, 100.0);
        let ranges = SpawnRanges {
            scatter_count: 10,
            ..SpawnRanges::default()
        };
        let mut set = BodySet::new();

        let ids = set.scatter(&bounds, &ranges, &mut rng).unwrap();

        assert_eq!(ids, (0..10).collect::<Vec<_>>());
        for b in &set {
            assert!(bounds.contains(b.position()));
            let v = b.velocity();
            assert!(v.x.abs() <= 10.0 && v.y.abs() <= 10.0);
        }
    }

    #[test]
    fn history_capacity_applies_to_new_bodies() {
        let mut set = BodySet::with_history_capacity(Some(8));
        let id = set.spawn(Vector2D::ZERO, Vector2D::ZERO, 1.0, 1.0).unwrap();
        assert_eq!(set.get(id).unwrap().history().capacity(), Some(8));
    }

    #[test]
    fn clear_empties_and_is_idempotent() {
        let mut set = BodySet::new();
        set.spawn(Vector2D::ZERO, Vector2D::ZERO, 1.0, 1.0).unwrap();

        set.clear();
        assert!(set.is_empty());

        set.clear();
        assert!(set.is_empty());
    }
}
