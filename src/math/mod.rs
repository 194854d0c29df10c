//! Vector, matrix and quaternion primitives
//!
//! This module provides:
//! - [`Vec3`] three component vectors (vec submodule)
//! - [`Matrix`] arbitrary size matrices (matrix submodule)
//! - [`Quaternion`] rotations and Euler angle conversion (quaternion submodule)
//! - [`rotate_vec`] rotating vectors by quaternions (rotate submodule)

mod matrix;
mod quaternion;
mod rotate;
mod vec;

pub use matrix::*;
pub use quaternion::*;
pub use rotate::*;
pub use vec::*;
