use glam::DVec2;
use std::fmt;
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub};

/// A 2-D vector with `f64` components.
///
/// `Vector2D` is a plain value type: every operation returns a new vector
/// and leaves its operands untouched. Arithmetic is delegated to
/// [`glam::DVec2`], so non-finite components propagate per IEEE-754
/// instead of being rejected.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vector2D {
    pub x: f64,
    pub y: f64,
}

impl Vector2D {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Component-wise addition.
    #[inline]
    pub fn sum(self, other: Self) -> Self {
        (DVec2::from(self) + DVec2::from(other)).into()
    }

    /// Component-wise difference `self - other`.
    #[inline]
    pub fn difference(self, other: Self) -> Self {
        (DVec2::from(self) - DVec2::from(other)).into()
    }

    /// Scales both components by `k`.
    #[inline]
    pub fn scalar_multiply(self, k: f64) -> Self {
        (DVec2::from(self) * k).into()
    }

    /// Euclidean distance between `self` and `other`.
    ///
    /// Always `>= 0` for finite inputs and exactly `0.0` when both
    /// vectors are equal. Callers dividing by the result must expect
    /// that zero.
    #[inline]
    pub fn distance(self, other: Self) -> f64 {
        DVec2::from(self).distance(DVec2::from(other))
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        DVec2::from(self).is_finite()
    }
}

impl From<DVec2> for Vector2D {
    #[inline]
    fn from(v: DVec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<Vector2D> for DVec2 {
    #[inline]
    fn from(v: Vector2D) -> Self {
        DVec2::new(v.x, v.y)
    }
}

impl Add for Vector2D {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        self.sum(rhs)
    }
}

impl AddAssign for Vector2D {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = self.sum(rhs);
    }
}

impl Sub for Vector2D {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        self.difference(rhs)
    }
}

impl Mul<f64> for Vector2D {
    type Output = Self;

    #[inline]
    fn mul(self, k: f64) -> Self {
        self.scalar_multiply(k)
    }
}

impl Div<f64> for Vector2D {
    type Output = Self;

    #[inline]
    fn div(self, k: f64) -> Self {
        (DVec2::from(self) / k).into()
    }
}

impl Neg for Vector2D {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        (-DVec2::from(self)).into()
    }
}

impl fmt::Display for Vector2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vector2D(x={}, y={})", self.x, self.y)
    }
}
