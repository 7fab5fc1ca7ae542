use crate::vector::Vector2D;
use serde::{Deserialize, Serialize};

/// Rectangular simulation area `[0, width) x [0, height)`.
///
/// Width and height are assumed positive and finite; see
/// [`crate::config::Config::validate`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub width: f64,
    pub height: f64,
}

impl Default for Bounds {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
        }
    }
}

impl Bounds {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn contains(&self, p: Vector2D) -> bool {
        p.x >= 0.0 && p.y >= 0.0 && p.x < self.width && p.y < self.height
    }

    pub fn is_valid(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }

    /// Applies the wrap-around rule to an integrated position.
    ///
    /// The four edge checks are independent and run in a fixed order
    /// (left, top, right, bottom). Each one tests the position as it came
    /// out of the integrator, so a body leaving through the left edge
    /// lands on `width` rather than being pushed on to `0`. Any axis that
    /// wraps has its velocity component zeroed.
    pub fn wrap(&self, position: Vector2D, velocity: Vector2D) -> (Vector2D, Vector2D) {
        let mut p = position;
        let mut v = velocity;

        if position.x < 0.0 {
            p.x = self.width;
            v.x = 0.0;
        }
        if position.y < 0.0 {
            p.y = self.height;
            v.y = 0.0;
        }
        if position.x >= self.width {
            p.x = 0.0;
            v.x = 0.0;
        }
        if position.y >= self.height {
            p.y = 0.0;
            v.y = 0.0;
        }

        (p, v)
    }
}
