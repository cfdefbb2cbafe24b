//! Norms, normalization and angle wrapping.

use crate::{error::SpatialError, matrix::Vec3, scalar::Scalar};

/// Norm below which a vector is treated as zero by [`unitvec`], in multiples of epsilon.
const ZERO_NORM_TOL: f64 = 100.0;

/// Euclidean norm.
#[inline]
pub fn norm<T: Scalar>(v: &[T]) -> T {
    normsq(v).sqrt()
}

/// Squared Euclidean norm.
#[inline]
pub fn normsq<T: Scalar>(v: &[T]) -> T {
    v.iter().fold(T::zero(), |acc, &x| acc + x * x)
}

/// Cross product of two 3-vectors.
#[inline]
pub fn cross<T: Scalar>(a: &Vec3<T>, b: &Vec3<T>) -> Vec3<T> {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}

/// Dot product.
#[inline]
pub fn dot<T: Scalar, const N: usize>(a: &[T; N], b: &[T; N]) -> T {
    a.iter()
        .zip(b.iter())
        .fold(T::zero(), |acc, (&x, &y)| acc + x * y)
}

/// Unit vector parallel to `v`.
///
/// Fails with [`SpatialError::ZeroNorm`] when the norm is below `100·eps`.
pub fn unitvec<T: Scalar, const N: usize>(v: &[T; N]) -> Result<[T; N], SpatialError> {
    unitvec_norm(v).map(|(u, _)| u)
}

/// Unit vector parallel to `v` together with the norm of `v`.
pub fn unitvec_norm<T: Scalar, const N: usize>(v: &[T; N]) -> Result<([T; N], T), SpatialError> {
    let n = norm(v);
    if n < T::tol_eps(ZERO_NORM_TOL) {
        return Err(SpatialError::ZeroNorm("vector"));
    }
    Ok((v.map(|x| x / n), n))
}

/// Test whether `|norm(v) - 1| < tol·eps`.
pub fn isunitvec<T: Scalar>(v: &[T], tol: f64) -> bool {
    !T::NUMERIC || (norm(v) - T::one()).abs() < T::tol_eps(tol)
}

/// Test whether `norm(v) < tol·eps`.
///
/// Used to select branches, so it inspects values even when [`Scalar::NUMERIC`] is false.
pub fn iszerovec<T: Scalar>(v: &[T], tol: f64) -> bool {
    norm(v) < T::tol_eps(tol)
}

/// Test whether `|x| < tol·eps`.
#[inline]
pub fn iszero<T: Scalar>(x: T, tol: f64) -> bool {
    x.abs() < T::tol_eps(tol)
}

/// Normalize a twist `[v, w]` so that `|w| = 1`, or `|v| = 1` when `w` is zero.
pub fn unittwist<T: Scalar>(s: &[T; 6], tol: f64) -> Result<[T; 6], SpatialError> {
    unittwist_norm(s, tol).map(|(u, _)| u)
}

/// As [`unittwist`], also returning the scale factor `θ` so that `s = θ·u`.
pub fn unittwist_norm<T: Scalar>(s: &[T; 6], tol: f64) -> Result<([T; 6], T), SpatialError> {
    if iszerovec(s, tol) {
        return Err(SpatialError::ZeroNorm("twist"));
    }
    let th = if iszerovec(&s[3..6], tol) {
        norm(&s[0..3])
    } else {
        norm(&s[3..6])
    };
    Ok((s.map(|x| x / th), th))
}

/// Normalize a 2D twist `[vx, vy, ω]` so that `|ω| = 1`, or `|v| = 1` when `ω` is zero.
pub fn unittwist2<T: Scalar>(s: &[T; 3], tol: f64) -> Result<[T; 3], SpatialError> {
    if iszerovec(s, tol) {
        return Err(SpatialError::ZeroNorm("twist"));
    }
    let th = if iszero(s[2], tol) {
        norm(&s[0..2])
    } else {
        s[2].abs()
    };
    Ok(s.map(|x| x / th))
}

/// Test whether a twist is a unit twist: `|w| = 1`, or `w = 0` and `|v| = 1`.
pub fn isunittwist<T: Scalar>(s: &[T; 6], tol: f64) -> bool {
    if !T::NUMERIC {
        return true;
    }
    let w = &s[3..6];
    if iszerovec(w, tol) {
        isunitvec(&s[0..3], tol)
    } else {
        isunitvec(w, tol)
    }
}

/// Test whether a 2D twist is a unit twist: `|ω| = 1`, or `ω = 0` and `|v| = 1`.
pub fn isunittwist2<T: Scalar>(s: &[T; 3], tol: f64) -> bool {
    if !T::NUMERIC {
        return true;
    }
    if iszero(s[2], tol) {
        isunitvec(&s[0..2], tol)
    } else {
        (s[2].abs() - T::one()).abs() < T::tol_eps(tol)
    }
}

/// Wrap an angle into `[-π, π)`.
pub fn wrap_mpi_pi<T: Scalar>(theta: T) -> T {
    let pi = T::PI();
    let two_pi = pi + pi;
    let shifted = theta + pi;
    let wrapped = shifted - two_pi * (shifted / two_pi).floor() - pi;
    // just below -π the shifted angle rounds up to a full turn
    if wrapped >= pi {
        -pi
    } else {
        wrapped
    }
}

/// Wrap an angle into `[0, 2π)`.
pub fn wrap_0_2pi<T: Scalar>(theta: T) -> T {
    let two_pi = T::PI() + T::PI();
    let wrapped = theta - two_pi * (theta / two_pi).floor();
    // rounding of `floor` may land exactly on 2π
    if wrapped >= two_pi {
        T::zero()
    } else {
        wrapped
    }
}

/// Signed difference `a - b` wrapped into `(-π, π]`.
///
/// The result is the shortest rotation taking angle `b` to angle `a`. A difference of
/// exactly half a turn is reported as `+π`.
pub fn angdiff<T: Scalar>(a: T, b: T) -> T {
    let d = wrap_mpi_pi(a - b);
    if d <= -T::PI() {
        T::PI()
    } else {
        d
    }
}

/// Zero every element with magnitude below `tol·eps`.
///
/// Intended to tidy values before display or comparison only.
pub fn removesmall<T: Scalar, const N: usize>(v: &[T; N], tol: f64) -> [T; N] {
    let t = T::tol_eps(tol);
    v.map(|x| if x.abs() < t { T::zero() } else { x })
}

/// [`removesmall`] applied to every element of a matrix.
pub fn removesmall_mat<T: Scalar, const R: usize, const C: usize>(
    m: &[[T; C]; R],
    tol: f64,
) -> [[T; C]; R] {
    m.map(|row| removesmall(&row, tol))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    #[test]
    fn test_norm() {
        assert_eq!(norm(&[3.0, 4.0]), 5.0);
        assert_eq!(normsq(&[1.0, 2.0, 2.0]), 9.0);
        assert_eq!(norm::<f64>(&[]), 0.0);
    }

    #[test]
    fn test_unitvec() -> Result<(), SpatialError> {
        let (u, n) = unitvec_norm(&[0.0, 3.0, 4.0])?;
        assert_relative_eq!(n, 5.0);
        assert_relative_eq!(u[1], 0.6);
        assert_relative_eq!(u[2], 0.8);
        assert!(isunitvec(&u, 10.0));
        Ok(())
    }

    #[test]
    fn test_unitvec_zero() {
        let err = unitvec(&[0.0, 0.0, 1e-20]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Value);
    }

    #[test]
    fn test_iszero() {
        assert!(iszerovec(&[0.0, 1e-17, 0.0], 10.0));
        assert!(!iszerovec(&[0.0, 1e-3, 0.0], 10.0));
        assert!(iszero(0.0f64, 1.0));
        assert!(!iszero(1e-10f64, 10.0));
    }

    #[test]
    fn test_cross() {
        assert_eq!(cross(&[1.0, 0.0, 0.0], &[0.0, 1.0, 0.0]), [0.0, 0.0, 1.0]);
        assert_eq!(cross(&[0.0, 1.0, 0.0], &[1.0, 0.0, 0.0]), [0.0, 0.0, -1.0]);
    }

    #[test]
    fn test_unittwist() -> Result<(), SpatialError> {
        let (u, th) = unittwist_norm(&[2.0, 0.0, 0.0, 0.0, 0.0, 4.0], 20.0)?;
        assert_relative_eq!(th, 4.0);
        assert_eq!(u, [0.5, 0.0, 0.0, 0.0, 0.0, 1.0]);
        assert!(isunittwist(&u, 20.0));

        // pure translation is normalized by the translational part
        let u = unittwist(&[0.0, 3.0, 4.0, 0.0, 0.0, 0.0], 20.0)?;
        assert_relative_eq!(u[1], 0.6);
        assert!(isunittwist(&u, 20.0));

        assert!(unittwist(&[0.0; 6], 20.0).is_err());

        let u2 = unittwist2(&[1.0, 2.0, -2.0], 20.0)?;
        assert_eq!(u2, [0.5, 1.0, -1.0]);
        assert!(isunittwist2(&u2, 20.0));
        Ok(())
    }

    #[test]
    fn test_wrap() {
        assert_relative_eq!(wrap_mpi_pi(3.0 * PI / 2.0), -PI / 2.0, epsilon = 1e-12);
        assert_relative_eq!(wrap_mpi_pi(-3.0 * PI / 2.0), PI / 2.0, epsilon = 1e-12);
        assert_relative_eq!(wrap_mpi_pi(PI), -PI, epsilon = 1e-12);
        assert_relative_eq!(wrap_mpi_pi(0.5), 0.5, epsilon = 1e-12);
        assert_relative_eq!(wrap_0_2pi(-PI / 2.0), 3.0 * PI / 2.0, epsilon = 1e-12);
        assert_relative_eq!(wrap_0_2pi(5.0 * PI), PI, epsilon = 1e-12);
        assert!(wrap_0_2pi(-1e-20) < 2.0 * PI);
    }

    #[test]
    fn test_wrap_below_minus_pi() {
        let just_below = f64::from_bits((-PI).to_bits() + 1);
        assert!(just_below < -PI);
        for theta in [just_below, -PI - 4.0 * f64::EPSILON, -PI, -3.0 * PI] {
            let w = wrap_mpi_pi(theta);
            assert!((-PI..PI).contains(&w), "{} wrapped to {}", theta, w);
        }
        assert_eq!(wrap_mpi_pi(just_below), -PI);
        assert_eq!(angdiff(just_below, 0.0), PI);
    }

    #[test]
    fn test_angdiff() {
        assert_relative_eq!(angdiff(0.1, -0.1), 0.2, epsilon = 1e-12);
        assert_relative_eq!(angdiff(PI - 0.1, -PI + 0.1), -0.2, epsilon = 1e-12);
        assert_relative_eq!(angdiff(-PI + 0.1, PI - 0.1), 0.2, epsilon = 1e-12);
        // exactly half a turn is reported as +π
        assert_eq!(angdiff(PI, 0.0), PI);
        assert_eq!(angdiff(0.0, PI), PI);
    }

    #[test]
    fn test_removesmall() {
        let v = removesmall(&[1.0, 1e-17, -2e-16, 0.5], 10.0);
        assert_eq!(v, [1.0, 0.0, 0.0, 0.5]);
        let m = removesmall_mat(&[[1.0, 1e-18], [-1e-18, 1.0]], 10.0);
        assert_eq!(m, [[1.0, 0.0], [0.0, 1.0]]);
    }
}
