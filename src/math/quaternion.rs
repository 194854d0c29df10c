//! Quaternion rotations and Euler angle conversion
//!
//! Quaternions are stored as `(w, x, y, z)` with `w` the scalar part.
//!
//! Multiplication is the Hamilton product and composes rotations right to
//! left: rotating by `a * b` is the same as rotating by `b` first, then by `a`.
//!
//! Euler angles are in radians and use the 3-2-1 (yaw, pitch, roll) sequence:
//! - `x`: roll, rotation about the X axis
//! - `y`: pitch, rotation about the Y axis
//! - `z`: yaw, rotation about the Z axis
//!
//! Nothing here normalises implicitly. Callers that need unit quaternion
//! semantics call [`Quaternion::normalised`] themselves.

use std::f64::consts::FRAC_PI_2;
use std::fmt;
use std::ops::Mul;

use log::trace;
use serde::{Deserialize, Serialize};

use super::vec::Vec3;
use crate::format::write_joined;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(test, derive(fake::Dummy))]
pub struct Quaternion {
    #[cfg_attr(test, dummy(faker = "-10.0..10.0"))]
    pub w: f64,
    #[cfg_attr(test, dummy(faker = "-10.0..10.0"))]
    pub x: f64,
    #[cfg_attr(test, dummy(faker = "-10.0..10.0"))]
    pub y: f64,
    #[cfg_attr(test, dummy(faker = "-10.0..10.0"))]
    pub z: f64,
}

impl Default for Quaternion {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Quaternion {
    /// No rotation
    pub const IDENTITY: Quaternion = Quaternion::new(1.0, 0.0, 0.0, 0.0);

    pub const fn new(w: f64, x: f64, y: f64, z: f64) -> Self {
        Self { w, x, y, z }
    }

    pub const fn to_array(&self) -> [f64; 4] {
        [self.w, self.x, self.y, self.z]
    }

    /// Hamilton product `lhs ⊗ rhs`: rotate by `rhs`, then by `lhs`.
    pub fn multiply(lhs: Quaternion, rhs: Quaternion) -> Quaternion {
        Quaternion {
            w: lhs.w * rhs.w - lhs.x * rhs.x - lhs.y * rhs.y - lhs.z * rhs.z,
            x: lhs.w * rhs.x + lhs.x * rhs.w + lhs.y * rhs.z - lhs.z * rhs.y,
            y: lhs.w * rhs.y - lhs.x * rhs.z + lhs.y * rhs.w + lhs.z * rhs.x,
            z: lhs.w * rhs.z + lhs.x * rhs.y - lhs.y * rhs.x + lhs.z * rhs.w,
        }
    }

    /// Builds a rotation from roll (`x`), pitch (`y`) and yaw (`z`) in radians,
    /// applied in z-y-x order.
    pub fn from_euler_angles(x: f64, y: f64, z: f64) -> Quaternion {
        let (sr, cr) = (x * 0.5).sin_cos();
        let (sp, cp) = (y * 0.5).sin_cos();
        let (sy, cy) = (z * 0.5).sin_cos();

        Quaternion {
            w: cr * cp * cy + sr * sp * sy,
            x: sr * cp * cy - cr * sp * sy,
            y: cr * sp * cy + sr * cp * sy,
            z: cr * cp * sy - sr * sp * cy,
        }
    }

    /// Same as [`from_euler_angles`](Self::from_euler_angles) with `v.x / v.y / v.z`
    /// as roll, pitch and yaw.
    pub fn from_euler_angles_vec(v: Vec3) -> Quaternion {
        Quaternion::from_euler_angles(v.x, v.y, v.z)
    }

    /// Converts back to roll (`x`), pitch (`y`) and yaw (`z`) in radians.
    ///
    /// Pitch is extracted as `2·atan2(√(1+2s), √(1−2s)) − π/2` with
    /// `s = wy − xz`, which stays well behaved close to ±π/2. Both radicands
    /// are clamped at zero so rounding near gimbal lock cannot produce NaN.
    pub fn to_euler_angles(&self) -> Vec3 {
        let q = self;

        // roll (x-axis rotation)
        let sinr_cosp = 2.0 * (q.w * q.x + q.y * q.z);
        let cosr_cosp = 1.0 - 2.0 * (q.x * q.x + q.y * q.y);
        let roll = sinr_cosp.atan2(cosr_cosp);

        // pitch (y-axis rotation)
        let s = q.w * q.y - q.x * q.z;
        let sinp_sq = 1.0 + 2.0 * s;
        let cosp_sq = 1.0 - 2.0 * s;
        if sinp_sq < 0.0 || cosp_sq < 0.0 {
            trace!("clamping pitch radicand for {q}: {sinp_sq}, {cosp_sq}");
        }
        let sinp = sinp_sq.max(0.0).sqrt();
        let cosp = cosp_sq.max(0.0).sqrt();
        let pitch = 2.0 * sinp.atan2(cosp) - FRAC_PI_2;

        // yaw (z-axis rotation)
        let siny_cosp = 2.0 * (q.w * q.z + q.x * q.y);
        let cosy_cosp = 1.0 - 2.0 * (q.y * q.y + q.z * q.z);
        let yaw = siny_cosp.atan2(cosy_cosp);

        Vec3::new(roll, pitch, yaw)
    }

    pub fn sqr_magnitude(&self) -> f64 {
        Quaternion::dot(*self, *self)
    }

    pub fn magnitude(&self) -> f64 {
        self.sqr_magnitude().sqrt()
    }

    /// The zero quaternion becomes all NaN.
    pub fn normalise(&mut self) {
        let mag = self.magnitude();
        self.w /= mag;
        self.x /= mag;
        self.y /= mag;
        self.z /= mag;
    }

    pub fn normalised(mut self) -> Self {
        self.normalise();
        self
    }

    pub fn dot(lhs: Quaternion, rhs: Quaternion) -> f64 {
        lhs.w * rhs.w + lhs.x * rhs.x + lhs.y * rhs.y + lhs.z * rhs.z
    }

    /// Negated vector part. Equals the inverse for unit quaternions.
    pub const fn conjugate(&self) -> Quaternion {
        Quaternion::new(self.w, -self.x, -self.y, -self.z)
    }

    /// Multiplicative inverse, `q⁻¹ = q* / |q|²`.
    ///
    /// All NaN for the zero quaternion.
    pub fn inverse(&self) -> Quaternion {
        let sqr = self.sqr_magnitude();
        let c = self.conjugate();
        Quaternion::new(c.w / sqr, c.x / sqr, c.y / sqr, c.z / sqr)
    }
}

/// Formats as `(w, x, y, z)`
impl fmt::Display for Quaternion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        write_joined(f, &self.to_array(), ", ")?;
        f.write_str(")")
    }
}

impl From<[f64; 4]> for Quaternion {
    fn from([w, x, y, z]: [f64; 4]) -> Self {
        Quaternion::new(w, x, y, z)
    }
}

impl From<Quaternion> for [f64; 4] {
    fn from(q: Quaternion) -> Self {
        q.to_array()
    }
}

/// Hamilton product, see [`Quaternion::multiply`]
impl Mul for Quaternion {
    type Output = Quaternion;

    fn mul(self, rhs: Quaternion) -> Quaternion {
        Quaternion::multiply(self, rhs)
    }
}
