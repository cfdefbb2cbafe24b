//! # SO(2) and SE(2)
//!
//! Rotations are 2x2 matrices, poses are 3x3 homogeneous matrices `[[R, t], [0, 1]]`.
//! The logarithm and exponential are closed form: the angle is `atan2(R[1][0], R[0][0])`
//! and the translation is coupled to it through the operator
//!
//! ```text
//! V(θ) = 1/θ · [[sin θ, -(1 - cos θ)], [1 - cos θ, sin θ]]
//! ```
//!
//! which tends to the identity as `θ → 0`.

use crate::{
    argcheck::{assert_fraction, getunit},
    config::{AngleUnit, CheckOptions},
    error::SpatialError,
    matrix::{matvec, transpose, Mat2, Mat3, Vec2, Vec3},
    scalar::Scalar,
    transforms_nd::{isr, isskew, isskewa2, rt2tr2, skew2, skewa2, tr2rt2, vex2, vexa2},
    vectors::angdiff,
};

/// 2D rotation matrix for an angle in the given unit.
///
/// Example:
///
/// ```
/// use spatialmath_base::config::AngleUnit;
/// use spatialmath_base::transforms2d::rot2;
///
/// let r = rot2(90.0_f64, AngleUnit::Deg);
/// assert!((r[1][0] - 1.0).abs() < 1e-12);
/// ```
pub fn rot2<T: Scalar>(theta: T, unit: AngleUnit) -> Mat2<T> {
    let (s, c) = getunit(theta, unit).sin_cos();
    [[c, -s], [s, c]]
}

/// SE(2) pose rotating by `theta` and translating by `t`.
pub fn trot2<T: Scalar>(theta: T, unit: AngleUnit, t: &Vec2<T>) -> Mat3<T> {
    rt2tr2(&rot2(theta, unit), t)
}

/// Pure translation SE(2) pose.
pub fn transl2<T: Scalar>(t: &Vec2<T>) -> Mat3<T> {
    let (o, z) = (T::one(), T::zero());
    [[o, z, t[0]], [z, o, t[1]], [z, z, o]]
}

/// Translational part of an SE(2) pose.
#[inline]
pub fn transl2_of<T: Scalar>(t: &Mat3<T>) -> Vec2<T> {
    [t[0][2], t[1][2]]
}

/// Test whether a 2x2 matrix is an SO(2) rotation.
pub fn isrot2<T: Scalar>(r: &Mat2<T>, tol: f64) -> bool {
    isr(r, tol)
}

/// Test whether a 3x3 matrix is an SE(2) pose: rotational block in SO(2) and bottom row
/// `[0, 0, 1]`.
pub fn ishom2<T: Scalar>(t: &Mat3<T>, tol: f64) -> bool {
    if !T::NUMERIC {
        return true;
    }
    let eps = T::tol_eps(tol);
    let bottom_ok = t[2][0].abs() < eps && t[2][1].abs() < eps && (t[2][2] - T::one()).abs() < eps;
    bottom_ok && isrot2(&tr2rt2(t).0, tol)
}

/// Strict form of [`isrot2`].
pub fn assert_rot2<T: Scalar>(r: &Mat2<T>, tol: f64) -> Result<(), SpatialError> {
    if isrot2(r, tol) {
        Ok(())
    } else {
        Err(SpatialError::NotRotation { dim: 2 })
    }
}

/// Strict form of [`ishom2`].
pub fn assert_hom2<T: Scalar>(t: &Mat3<T>, tol: f64) -> Result<(), SpatialError> {
    if ishom2(t, tol) {
        Ok(())
    } else {
        Err(SpatialError::NotHomogeneous { dim: 2 })
    }
}

/// Logarithm of an SO(2) rotation, the so(2) matrix `skew2(θ)` with `θ` in `[-π, π]`.
pub fn trlog2_rot<T: Scalar>(r: &Mat2<T>, opts: &CheckOptions) -> Result<Mat2<T>, SpatialError> {
    if opts.check {
        assert_rot2(r, opts.tol)?;
    }
    Ok(skew2(r[1][0].atan2(r[0][0])))
}

/// Logarithm of an SE(2) pose, the se(2) matrix `skewa2([v, θ])`.
pub fn trlog2<T: Scalar>(t: &Mat3<T>, opts: &CheckOptions) -> Result<Mat3<T>, SpatialError> {
    Ok(skewa2(&trlog2_vec(t, opts)?))
}

/// Logarithm of an SE(2) pose as the twist `[vx, vy, θ]`.
///
/// `v = V(θ)⁻¹ · t`, where `V⁻¹ = [[a, θ/2], [-θ/2, a]]` and `a = (θ/2)·cot(θ/2)`.
pub fn trlog2_vec<T: Scalar>(t: &Mat3<T>, opts: &CheckOptions) -> Result<Vec3<T>, SpatialError> {
    if opts.check {
        assert_hom2(t, opts.tol)?;
    }
    let (r, p) = tr2rt2(t);
    let theta = r[1][0].atan2(r[0][0]);
    if theta.abs() < T::tol_eps(opts.tol) {
        return Ok([p[0], p[1], T::zero()]);
    }
    let half = theta / T::from_f64(2.0);
    let (sh, ch) = half.sin_cos();
    let a = half * ch / sh;
    let vinv = [[a, half], [-half, a]];
    let v = matvec(&vinv, &p);
    Ok([v[0], v[1], theta])
}

/// Exponential of an so(2) matrix.
pub fn trexp2_rot<T: Scalar>(s: &Mat2<T>, opts: &CheckOptions) -> Result<Mat2<T>, SpatialError> {
    if opts.check && !isskew(s, opts.tol) {
        return Err(SpatialError::NotSkew { augmented: false });
    }
    Ok(rot2(vex2(s), AngleUnit::Rad))
}

/// Exponential of an se(2) matrix.
pub fn trexp2<T: Scalar>(s: &Mat3<T>, opts: &CheckOptions) -> Result<Mat3<T>, SpatialError> {
    if opts.check && !isskewa2(s, opts.tol) {
        return Err(SpatialError::NotSkew { augmented: true });
    }
    Ok(trexp2_vec(&vexa2(s)))
}

/// Exponential of a twist `[vx, vy, θ]`.
pub fn trexp2_vec<T: Scalar>(s: &Vec3<T>) -> Mat3<T> {
    let theta = s[2];
    let r = rot2(theta, AngleUnit::Rad);
    if theta == T::zero() {
        return rt2tr2(&r, &[s[0], s[1]]);
    }
    let (sn, c) = theta.sin_cos();
    let v = [
        [sn / theta, -(T::one() - c) / theta],
        [(T::one() - c) / theta, sn / theta],
    ];
    rt2tr2(&r, &matvec(&v, &[s[0], s[1]]))
}

/// Velocity Jacobian `diag(R, 1)` mapping a body-frame 2D velocity to the world frame.
pub fn tr2jac2<T: Scalar>(t: &Mat3<T>) -> Mat3<T> {
    let z = T::zero();
    [
        [t[0][0], t[0][1], z],
        [t[1][0], t[1][1], z],
        [z, z, T::one()],
    ]
}

/// Interpolate between two rotations along the shorter arc, `s` in `[0, 1]`.
pub fn trinterp2_rot<T: Scalar>(r0: &Mat2<T>, r1: &Mat2<T>, s: T) -> Result<Mat2<T>, SpatialError> {
    assert_fraction(s)?;
    let th0 = r0[1][0].atan2(r0[0][0]);
    let th1 = r1[1][0].atan2(r1[0][0]);
    Ok(rot2(th0 + s * angdiff(th1, th0), AngleUnit::Rad))
}

/// Interpolate between two poses, `s` in `[0, 1]`.
///
/// The angle moves along the shorter arc and the translation linearly. The endpoints are
/// returned unchanged at `s = 0` and `s = 1`.
pub fn trinterp2<T: Scalar>(t0: &Mat3<T>, t1: &Mat3<T>, s: T) -> Result<Mat3<T>, SpatialError> {
    assert_fraction(s)?;
    if s == T::zero() {
        return Ok(*t0);
    }
    if s == T::one() {
        return Ok(*t1);
    }
    let (r0, p0) = tr2rt2(t0);
    let (r1, p1) = tr2rt2(t1);
    let r = trinterp2_rot(&r0, &r1, s)?;
    let p = [
        p0[0] + s * (p1[0] - p0[0]),
        p0[1] + s * (p1[1] - p0[1]),
    ];
    Ok(rt2tr2(&r, &p))
}

/// Pose from the configuration `[x, y, θ]`.
pub fn xyt2tr<T: Scalar>(xyt: &Vec3<T>) -> Mat3<T> {
    trot2(xyt[2], AngleUnit::Rad, &[xyt[0], xyt[1]])
}

/// Configuration `[x, y, θ]` of a pose.
pub fn tr2xyt<T: Scalar>(t: &Mat3<T>) -> Vec3<T> {
    [t[0][2], t[1][2], t[1][0].atan2(t[0][0])]
}

/// Inverse of an SE(2) pose, `[[Rᵀ, -Rᵀt], [0, 1]]`.
pub fn trinv2<T: Scalar>(t: &Mat3<T>) -> Mat3<T> {
    let (r, p) = tr2rt2(t);
    let rt = transpose(&r);
    let q = matvec(&rt, &p);
    rt2tr2(&rt, &[-q[0], -q[1]])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::matrix::{eye, matmul};
    use approx::assert_relative_eq;
    use std::f64::consts::{FRAC_PI_2, PI};

    fn assert_mat3_eq(a: &Mat3<f64>, b: &Mat3<f64>) {
        for i in 0..3 {
            for j in 0..3 {
                assert_relative_eq!(a[i][j], b[i][j], epsilon = 1e-10);
            }
        }
    }

    #[test]
    fn test_rot2() {
        let r = rot2(FRAC_PI_2, AngleUnit::Rad);
        assert_relative_eq!(r[0][0], 0.0, epsilon = 1e-15);
        assert_relative_eq!(r[0][1], -1.0);
        assert_relative_eq!(r[1][0], 1.0);
        assert_eq!(rot2(0.0, AngleUnit::Deg), eye());
        assert!(isrot2(&r, 20.0));
        assert!(!isrot2(&[[1.0, 0.0], [0.0, -1.0]], 20.0));
    }

    #[test]
    fn test_trot2_transl2() {
        let t = trot2(90.0, AngleUnit::Deg, &[1.0, 2.0]);
        assert!(ishom2(&t, 20.0));
        assert_eq!(transl2_of(&t), [1.0, 2.0]);
        let t2 = transl2(&[3.0, 4.0]);
        assert_eq!(t2[0][2], 3.0);
        assert_eq!(t2[1][2], 4.0);
        assert!(ishom2(&t2, 20.0));

        let mut bad = t;
        bad[2][0] = 0.5;
        assert!(!ishom2(&bad, 20.0));
        let err = assert_hom2(&bad, 20.0).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
    }

    #[test]
    fn test_log_identity() -> Result<(), SpatialError> {
        let s = trlog2(&eye::<f64, 3>(), &CheckOptions::default())?;
        assert_eq!(s, [[0.0; 3]; 3]);
        let s = trlog2_rot(&eye::<f64, 2>(), &CheckOptions::default())?;
        assert_eq!(s, [[0.0; 2]; 2]);
        Ok(())
    }

    #[test]
    fn test_log_exp() -> Result<(), SpatialError> {
        let opts = CheckOptions::default();
        for &theta in &[0.3, -1.2, 2.9, PI] {
            let t = trot2(theta, AngleUnit::Rad, &[1.5, -0.7]);
            let tw = trlog2_vec(&t, &opts)?;
            assert_relative_eq!(tw[2], theta, epsilon = 1e-12);
            assert_mat3_eq(&trexp2_vec(&tw), &t);
            assert_mat3_eq(&trexp2(&trlog2(&t, &opts)?, &opts)?, &t);
        }

        let r = rot2(0.8, AngleUnit::Rad);
        let s = trlog2_rot(&r, &opts)?;
        assert_relative_eq!(vex2(&s), 0.8, epsilon = 1e-12);
        let r2 = trexp2_rot(&s, &opts)?;
        assert_relative_eq!(r2[0][1], r[0][1], epsilon = 1e-12);
        Ok(())
    }

    #[test]
    fn test_exp_pure_translation() {
        let t = trexp2_vec(&[1.0, 2.0, 0.0]);
        assert_eq!(t, transl2(&[1.0, 2.0]));
    }

    #[test]
    fn test_log_rejects_invalid() {
        let opts = CheckOptions::default();
        let bad = [[1.0, 0.1, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]];
        assert!(trlog2(&bad, &opts).is_err());
        let lenient = CheckOptions {
            check: false,
            ..Default::default()
        };
        assert!(trlog2(&bad, &lenient).is_ok());
        assert!(trexp2(&[[1.0, 0.0, 0.0], [0.0, 0.0, 0.0], [0.0, 0.0, 0.0]], &opts).is_err());
    }

    #[test]
    fn test_trinterp2() -> Result<(), SpatialError> {
        let t0 = trot2(0.2, AngleUnit::Rad, &[0.0, 0.0]);
        let t1 = trot2(0.6, AngleUnit::Rad, &[2.0, -4.0]);
        assert_eq!(trinterp2(&t0, &t1, 0.0)?, t0);
        assert_eq!(trinterp2(&t0, &t1, 1.0)?, t1);
        let mid = tr2xyt(&trinterp2(&t0, &t1, 0.5)?);
        assert_relative_eq!(mid[0], 1.0, epsilon = 1e-12);
        assert_relative_eq!(mid[1], -2.0, epsilon = 1e-12);
        assert_relative_eq!(mid[2], 0.4, epsilon = 1e-12);
        assert!(trinterp2(&t0, &t1, 1.5).is_err());
        Ok(())
    }

    #[test]
    fn test_trinterp2_wraps() -> Result<(), SpatialError> {
        // the short way from 170° to -170° passes through 180°
        let r0 = rot2(170.0, AngleUnit::Deg);
        let r1 = rot2(-170.0, AngleUnit::Deg);
        let mid = trinterp2_rot(&r0, &r1, 0.5)?;
        assert_relative_eq!(mid[0][0], -1.0, epsilon = 1e-12);
        assert_relative_eq!(mid[1][0], 0.0, epsilon = 1e-12);
        Ok(())
    }

    #[test]
    fn test_xyt_inverse_jacobian() {
        let t = xyt2tr(&[1.0, 2.0, 0.5]);
        let xyt = tr2xyt(&t);
        assert_relative_eq!(xyt[0], 1.0);
        assert_relative_eq!(xyt[1], 2.0);
        assert_relative_eq!(xyt[2], 0.5, epsilon = 1e-15);

        assert_mat3_eq(&matmul(&trinv2(&t), &t), &eye());
        assert_mat3_eq(&matmul(&t, &trinv2(&t)), &eye());

        let j = tr2jac2(&t);
        assert_eq!(j[2], [0.0, 0.0, 1.0]);
        assert_eq!(j[0][..2], t[0][..2]);
    }
}
