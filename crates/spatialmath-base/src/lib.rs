#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]
//!
//! # Spatial math base
//!
//! Conversions, validity checks and Lie-group operations for rotations and poses in two and
//! three dimensions. Every entity is a plain row-major array so that downstream consumers
//! (plotting, simulation, optimization) can use the values without wrapper types.
//!
//! ## Representations
//!
//! | Entity        | Type                  | Notes                                     |
//! |---------------|-----------------------|-------------------------------------------|
//! | SO(2)         | [`matrix::Mat2`]      | `R·Rᵀ = I`, `det(R) = 1`                  |
//! | SE(2)         | [`matrix::Mat3`]      | `[[R, t], [0, 1]]`                        |
//! | SO(3)         | [`matrix::Mat3`]      | `R·Rᵀ = I`, `det(R) = 1`                  |
//! | SE(3)         | [`matrix::Mat4`]      | `[[R, t], [0, 1]]`                        |
//! | quaternion    | [`quaternion::Quaternion`] | `[s, vx, vy, vz]`                    |
//! | twist         | [`matrix::Twist`]     | `[vx, vy, vz, wx, wy, wz]`                |
//!
//! All functions are generic over [`scalar::Scalar`], implemented for `f32` and `f64`.
//!
//! ## Example
//!
//! ```rust
//! use spatialmath_base::config::{AngleUnit, RpyOptions};
//! use spatialmath_base::transforms3d::{rotx, rpy2r, tr2rpy};
//! use spatialmath_base::matrix::matvec;
//!
//! let r = rotx(std::f64::consts::FRAC_PI_2, AngleUnit::Rad);
//! let p = matvec(&r, &[0.0, 1.0, 0.0]);
//! assert!((p[2] - 1.0).abs() < 1e-12);
//!
//! let opts = RpyOptions::default();
//! let rpy = tr2rpy(&rpy2r(&[0.1_f64, 0.2, 0.3], &opts), &opts);
//! assert!((rpy[1] - 0.2).abs() < 1e-12);
//! ```

/// Argument checking for dynamically shaped input.
pub mod argcheck;

/// Option structs and convention enums.
pub mod config;

/// Error types.
pub mod error;

/// Conversions to and from `glam` double precision types.
pub mod interop;

/// Fixed-size array aliases and small dense linear algebra.
pub mod matrix;

/// Numerical differentiation and integer rasterization.
pub mod numeric;

/// Quaternion algebra over `[s, vx, vy, vz]` arrays.
pub mod quaternion;

/// Generic scalar trait.
pub mod scalar;

/// SO(2) and SE(2) algebra.
pub mod transforms2d;

/// SO(3) and SE(3) algebra.
pub mod transforms3d;

/// Skew-symmetric algebra and homogeneous-coordinate helpers.
pub mod transforms_nd;

/// Vector utilities.
pub mod vectors;

pub use error::{ErrorKind, SpatialError};
pub use scalar::Scalar;
