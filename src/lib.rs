//!
//! Vqme is a small library of 3D math primitives for spatial transforms.
//!
//! It provides a three component vector, an arbitrary size matrix and a quaternion,
//! together with the conversions between quaternions and Euler angles needed to
//! build and apply rotations.
//!
//! ```
//! use std::f64::consts::FRAC_PI_2;
//! use vqme::{Quaternion, Vec3, rotate_vec};
//!
//! let quarter_turn = Quaternion::from_euler_angles(0.0, 0.0, FRAC_PI_2);
//! let rotated = rotate_vec(quarter_turn, Vec3::new(1.0, 0.0, 0.0));
//! assert!(Vec3::distance(rotated, Vec3::new(0.0, 1.0, 0.0)) < 1e-12);
//! ```
//!
//! With the `wasm` feature the operations are also exported to JavaScript.

mod format;
pub mod math;
#[cfg(feature = "wasm")]
pub mod wasm;

pub use math::{Matrix, MatrixError, Quaternion, Vec3, rotate_vec};
