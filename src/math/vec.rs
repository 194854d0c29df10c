//! Three component vector used for positions, directions and Euler angles
//!
//! Every operation comes in two flavours:
//! - a suffix-free method that leaves `self` untouched and returns a new vector
//! - an `_in_place` method that mutates `self`
//!
//! `normalise` / `normalised` keep their past-tense pairing: `normalise`
//! mutates, `normalised` returns a copy.
//!
//! Degenerate input is not an error. Normalising the zero vector or taking the
//! angle to it produces NaN components, and dividing by zero produces
//! infinities, exactly as IEEE-754 arithmetic does.

use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use serde::{Deserialize, Serialize};

use crate::format::write_joined;

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(test, derive(fake::Dummy))]
pub struct Vec3 {
    #[cfg_attr(test, dummy(faker = "-100.0..100.0"))]
    pub x: f64,
    #[cfg_attr(test, dummy(faker = "-100.0..100.0"))]
    pub y: f64,
    #[cfg_attr(test, dummy(faker = "-100.0..100.0"))]
    pub z: f64,
}

impl Vec3 {
    /// `(1, 1, 1)`
    pub const ONE: Vec3 = Vec3::new(1.0, 1.0, 1.0);
    /// `(0, 0, 0)`
    pub const ZERO: Vec3 = Vec3::new(0.0, 0.0, 0.0);

    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub const fn to_array(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// Euclidean length
    pub fn magnitude(&self) -> f64 {
        self.sqr_magnitude().sqrt()
    }

    /// Squared length, prefer this over `magnitude()` when only comparing
    pub fn sqr_magnitude(&self) -> f64 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// Scales this vector to length 1.
    ///
    /// The zero vector becomes `(NaN, NaN, NaN)`.
    pub fn normalise(&mut self) {
        let mag = self.magnitude();
        self.x /= mag;
        self.y /= mag;
        self.z /= mag;
    }

    /// Returns a copy of this vector with length 1.
    ///
    /// The zero vector becomes `(NaN, NaN, NaN)`.
    pub fn normalised(mut self) -> Self {
        self.normalise();
        self
    }

    pub fn times(&self, scale: f64) -> Self {
        Vec3::multiply(*self, scale)
    }

    pub fn times_in_place(&mut self, scale: f64) {
        self.x *= scale;
        self.y *= scale;
        self.z *= scale;
    }

    /// Component-wise product, scaling x, y and z independently
    pub fn v_times(&self, scale: Vec3) -> Self {
        Vec3::new(self.x * scale.x, self.y * scale.y, self.z * scale.z)
    }

    pub fn v_times_in_place(&mut self, scale: Vec3) {
        self.x *= scale.x;
        self.y *= scale.y;
        self.z *= scale.z;
    }

    pub fn plus(&self, other: Vec3) -> Self {
        Vec3::sum(*self, other)
    }

    pub fn plus_in_place(&mut self, other: Vec3) {
        self.x += other.x;
        self.y += other.y;
        self.z += other.z;
    }

    pub fn sum(lhs: Vec3, rhs: Vec3) -> Vec3 {
        Vec3::new(lhs.x + rhs.x, lhs.y + rhs.y, lhs.z + rhs.z)
    }

    pub fn subtract(lhs: Vec3, rhs: Vec3) -> Vec3 {
        Vec3::new(lhs.x - rhs.x, lhs.y - rhs.y, lhs.z - rhs.z)
    }

    pub fn multiply(v: Vec3, s: f64) -> Vec3 {
        Vec3::new(v.x * s, v.y * s, v.z * s)
    }

    /// Divides every component by `s`; a zero `s` yields infinities (or NaN for zero components).
    pub fn divide(v: Vec3, s: f64) -> Vec3 {
        Vec3::new(v.x / s, v.y / s, v.z / s)
    }

    pub fn sqr_distance(a: Vec3, b: Vec3) -> f64 {
        Vec3::subtract(a, b).sqr_magnitude()
    }

    pub fn distance(a: Vec3, b: Vec3) -> f64 {
        Vec3::sqr_distance(a, b).sqrt()
    }

    pub fn dot(lhs: Vec3, rhs: Vec3) -> f64 {
        lhs.x * rhs.x + lhs.y * rhs.y + lhs.z * rhs.z
    }

    /// Cosine of the angle between two vectors.
    ///
    /// NaN when either vector has zero length.
    pub fn dot_norm(lhs: Vec3, rhs: Vec3) -> f64 {
        let double_mag = lhs.magnitude() * rhs.magnitude();
        Vec3::dot(lhs, rhs) / double_mag
    }

    /// Angle between two vectors in radians, in `[0, π]`.
    ///
    /// The cosine is passed to `acos` as is. For (anti)parallel vectors
    /// rounding can push it just outside `[-1, 1]`, in which case the
    /// result is NaN.
    pub fn angle(lhs: Vec3, rhs: Vec3) -> f64 {
        Vec3::dot_norm(lhs, rhs).acos()
    }

    /// Right-handed cross product `a × b`
    pub fn cross(a: Vec3, b: Vec3) -> Vec3 {
        Vec3 {
            x: a.y * b.z - a.z * b.y,
            y: a.z * b.x - a.x * b.z,
            z: a.x * b.y - a.y * b.x,
        }
    }
}

/// Formats as `(x, y, z)`
impl fmt::Display for Vec3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        write_joined(f, &self.to_array(), ", ")?;
        f.write_str(")")
    }
}

impl From<[f64; 3]> for Vec3 {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Vec3::new(x, y, z)
    }
}

impl From<Vec3> for [f64; 3] {
    fn from(v: Vec3) -> Self {
        v.to_array()
    }
}

impl Add for Vec3 {
    type Output = Self;
    fn add(self, other: Self) -> Self {
        Vec3::sum(self, other)
    }
}

impl Sub for Vec3 {
    type Output = Self;
    fn sub(self, other: Self) -> Self {
        Vec3::subtract(self, other)
    }
}

impl Mul<f64> for Vec3 {
    type Output = Self;
    fn mul(self, s: f64) -> Self {
        Vec3::multiply(self, s)
    }
}

impl Div<f64> for Vec3 {
    type Output = Self;
    fn div(self, s: f64) -> Self {
        Vec3::divide(self, s)
    }
}

impl Neg for Vec3 {
    type Output = Self;
    fn neg(self) -> Self {
        Vec3::new(-self.x, -self.y, -self.z)
    }
}

impl AddAssign for Vec3 {
    fn add_assign(&mut self, other: Self) {
        *self = Vec3::sum(*self, other);
    }
}

impl SubAssign for Vec3 {
    fn sub_assign(&mut self, other: Self) {
        *self = Vec3::subtract(*self, other);
    }
}

impl MulAssign<f64> for Vec3 {
    fn mul_assign(&mut self, s: f64) {
        *self = Vec3::multiply(*self, s);
    }
}

impl DivAssign<f64> for Vec3 {
    fn div_assign(&mut self, s: f64) {
        *self = Vec3::divide(*self, s);
    }
}
