use crate::types::BodyId;
use crate::vector::Vector2D;

/// Scratch buffer holding the net force on each body for one tick.
///
/// The whole buffer is filled from a single snapshot of body positions
/// before any body moves, which is what keeps the update synchronous.
/// `force[i]` belongs to body `i` of the set it was sized for.
#[derive(Debug, Default)]
pub struct ForceBuffer {
    force: Vec<Vector2D>,
}

impl ForceBuffer {
    /// Creates a buffer for `len` bodies with every entry at zero.
    pub fn with_len(len: usize) -> Self {
        Self {
            force: vec![Vector2D::ZERO; len],
        }
    }

    /// Resizes to `len` entries and zeroes all of them, even when the
    /// length was already correct.
    pub fn ensure_len(&mut self, len: usize) {
        if self.force.len() != len {
            self.force.resize(len, Vector2D::ZERO);
        }
        self.clear();
    }

    pub fn clear(&mut self) {
        for f in &mut self.force {
            *f = Vector2D::ZERO;
        }
    }

    pub fn len(&self) -> usize {
        self.force.len()
    }

    pub fn is_empty(&self) -> bool {
        self.force.is_empty()
    }

    /// Adds one force contribution for body `id`.
    ///
    /// ### Panics
    /// Panics if `id` is out of bounds.
    #[inline]
    pub fn add(&mut self, id: BodyId, f: Vector2D) {
        self.force[id] += f;
    }

    #[inline]
    pub fn get(&self, id: BodyId) -> Vector2D {
        self.force[id]
    }

    pub fn iter(&self) -> impl Iterator<Item = Vector2D> + '_ {
        self.force.iter().copied()
    }
}
