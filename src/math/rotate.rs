//! Rotating vectors by quaternions
//!
//! A vector `v` is rotated by `q` as the vector part of `q ⊗ (0, v) ⊗ q*`.
//! Rotations are right-handed: [`Quaternion::from_euler_angles`]`(0, 0, π/2)`
//! turns `(1, 0, 0)` into `(0, 1, 0)`.
//!
//! `q` should be a unit quaternion. A non-unit `q` still rotates by the same
//! angle but also scales the result by `|q|²`.

use std::ops::Mul;

use super::quaternion::Quaternion;
use super::vec::Vec3;

/// Rotates `v` by `q`, see the module documentation for the convention.
pub fn rotate_vec(q: Quaternion, v: Vec3) -> Vec3 {
    let pure = Quaternion::new(0.0, v.x, v.y, v.z);
    let rotated = q * pure * q.conjugate();
    Vec3::new(rotated.x, rotated.y, rotated.z)
}

impl Quaternion {
    /// Rotates `v` by this quaternion, same as [`rotate_vec`]
    pub fn rotate(&self, v: Vec3) -> Vec3 {
        rotate_vec(*self, v)
    }
}

impl Mul<Vec3> for Quaternion {
    type Output = Vec3;

    fn mul(self, v: Vec3) -> Vec3 {
        rotate_vec(self, v)
    }
}
