//! Scalar types accepted by the algebra.
//!
//! Every operation in this crate is generic over [`Scalar`]. Any type supporting the usual
//! float arithmetic and trigonometry can implement it; `f32` and `f64` are provided.
//!
//! Checks that compare a residual against machine epsilon only make sense for concrete
//! numbers. Types whose values cannot be meaningfully compared that way (symbolic
//! placeholders, interval types) set [`Scalar::NUMERIC`] to `false`, and those checks
//! then report success instead of inspecting values.
//!
//! The flag covers the validity predicates and the strict `assert_*` forms built on them:
//! `isr`, `isskew`, `isskewa`, `isskewa2`, `iseye`, `isrot`, `ishom`, `isrot2`, `ishom2`,
//! `isunit`, `isequal`, `isunitvec`, `isunittwist` and `isunittwist2`. `iszero` and
//! `iszerovec` select between branches and always inspect values.

use std::fmt::Debug;

use num_traits::{Float, FloatConst};

/// Numeric type usable by every transform function.
pub trait Scalar: Float + FloatConst + Debug + Default + Send + Sync + 'static {
    /// Whether values support comparisons against machine epsilon.
    const NUMERIC: bool = true;

    /// Convert a double precision constant into this type.
    fn from_f64(value: f64) -> Self;

    /// `tol` multiples of machine epsilon, expressed in this type.
    #[inline]
    fn tol_eps(tol: f64) -> Self {
        Self::from_f64(tol) * Self::epsilon()
    }
}

impl Scalar for f32 {
    #[inline]
    fn from_f64(value: f64) -> Self {
        value as f32
    }
}

impl Scalar for f64 {
    #[inline]
    fn from_f64(value: f64) -> Self {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tol_eps() {
        assert_eq!(f64::tol_eps(1.0), f64::EPSILON);
        assert_eq!(f64::tol_eps(20.0), 20.0 * f64::EPSILON);
        assert_eq!(f32::tol_eps(10.0), 10.0 * f32::EPSILON);
    }

    #[test]
    fn test_numeric_flag() {
        assert!(<f32 as Scalar>::NUMERIC);
        assert!(<f64 as Scalar>::NUMERIC);
    }
}
