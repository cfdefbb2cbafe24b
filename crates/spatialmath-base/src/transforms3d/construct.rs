use crate::{
    argcheck::{getunit, getunit_vec},
    config::{AngleUnit, RpyOptions, RpyOrder, DEFAULT_TOL},
    error::SpatialError,
    matrix::{col, eye, from_cols3, matmul, matvec, transpose, Mat3, Mat4, Vec3},
    scalar::Scalar,
    transforms_nd::{isr, r2t, rodrigues, rt2tr, tr2rt},
    vectors::{cross, unitvec},
};

/// Rotation about the x-axis.
///
/// Example:
///
/// ```
/// use spatialmath_base::config::AngleUnit;
/// use spatialmath_base::transforms3d::rotx;
///
/// let r = rotx(90.0_f64, AngleUnit::Deg);
/// assert!((r[2][1] - 1.0).abs() < 1e-12);
/// ```
pub fn rotx<T: Scalar>(theta: T, unit: AngleUnit) -> Mat3<T> {
    let (s, c) = getunit(theta, unit).sin_cos();
    let (o, z) = (T::one(), T::zero());
    [[o, z, z], [z, c, -s], [z, s, c]]
}

/// Rotation about the y-axis.
pub fn roty<T: Scalar>(theta: T, unit: AngleUnit) -> Mat3<T> {
    let (s, c) = getunit(theta, unit).sin_cos();
    let (o, z) = (T::one(), T::zero());
    [[c, z, s], [z, o, z], [-s, z, c]]
}

/// Rotation about the z-axis.
pub fn rotz<T: Scalar>(theta: T, unit: AngleUnit) -> Mat3<T> {
    let (s, c) = getunit(theta, unit).sin_cos();
    let (o, z) = (T::one(), T::zero());
    [[c, -s, z], [s, c, z], [z, z, o]]
}

/// Pose rotating about the x-axis with zero translation.
pub fn trotx<T: Scalar>(theta: T, unit: AngleUnit) -> Mat4<T> {
    r2t(&rotx(theta, unit))
}

/// Pose rotating about the y-axis with zero translation.
pub fn troty<T: Scalar>(theta: T, unit: AngleUnit) -> Mat4<T> {
    r2t(&roty(theta, unit))
}

/// Pose rotating about the z-axis with zero translation.
pub fn trotz<T: Scalar>(theta: T, unit: AngleUnit) -> Mat4<T> {
    r2t(&rotz(theta, unit))
}

/// Pure translation pose.
pub fn transl<T: Scalar>(t: &Vec3<T>) -> Mat4<T> {
    rt2tr(&eye(), t)
}

/// Translational part of a pose.
#[inline]
pub fn transl_of<T: Scalar>(t: &Mat4<T>) -> Vec3<T> {
    [t[0][3], t[1][3], t[2][3]]
}

/// Test whether a 3x3 matrix is an SO(3) rotation.
pub fn isrot<T: Scalar>(r: &Mat3<T>, tol: f64) -> bool {
    isr(r, tol)
}

/// Test whether a 4x4 matrix is an SE(3) pose: rotational block in SO(3) and bottom row
/// `[0, 0, 0, 1]`.
pub fn ishom<T: Scalar>(t: &Mat4<T>, tol: f64) -> bool {
    if !T::NUMERIC {
        return true;
    }
    let eps = T::tol_eps(tol);
    let bottom = &t[3];
    let bottom_ok = bottom[..3].iter().all(|x| x.abs() < eps) && (bottom[3] - T::one()).abs() < eps;
    bottom_ok && isrot(&tr2rt(t).0, tol)
}

/// Strict form of [`isrot`].
pub fn assert_rot<T: Scalar>(r: &Mat3<T>, tol: f64) -> Result<(), SpatialError> {
    if isrot(r, tol) {
        Ok(())
    } else {
        Err(SpatialError::NotRotation { dim: 3 })
    }
}

/// Strict form of [`ishom`].
pub fn assert_hom<T: Scalar>(t: &Mat4<T>, tol: f64) -> Result<(), SpatialError> {
    if ishom(t, tol) {
        Ok(())
    } else {
        Err(SpatialError::NotHomogeneous { dim: 3 })
    }
}

/// Rotation from roll-pitch-yaw angles `[roll, pitch, yaw]`.
///
/// The composition order is given by [`RpyOrder`]; the default `Zyx` order computes
/// `Rz(yaw)·Ry(pitch)·Rx(roll)`.
pub fn rpy2r<T: Scalar>(rpy: &Vec3<T>, opts: &RpyOptions) -> Mat3<T> {
    let [roll, pitch, yaw] = getunit_vec(rpy, opts.unit);
    let rad = AngleUnit::Rad;
    match opts.order {
        RpyOrder::Zyx => matmul(
            &matmul(&rotz(yaw, rad), &roty(pitch, rad)),
            &rotx(roll, rad),
        ),
        RpyOrder::Xyz => matmul(
            &matmul(&rotx(yaw, rad), &roty(pitch, rad)),
            &rotz(roll, rad),
        ),
        RpyOrder::Yxz => matmul(
            &matmul(&roty(yaw, rad), &rotx(pitch, rad)),
            &rotz(roll, rad),
        ),
    }
}

/// Pose from roll-pitch-yaw angles with zero translation.
pub fn rpy2tr<T: Scalar>(rpy: &Vec3<T>, opts: &RpyOptions) -> Mat4<T> {
    r2t(&rpy2r(rpy, opts))
}

/// Rotation from ZYZ Euler angles `[φ, θ, ψ]`, `Rz(φ)·Ry(θ)·Rz(ψ)`.
pub fn eul2r<T: Scalar>(eul: &Vec3<T>, unit: AngleUnit) -> Mat3<T> {
    let [phi, theta, psi] = getunit_vec(eul, unit);
    let rad = AngleUnit::Rad;
    matmul(
        &matmul(&rotz(phi, rad), &roty(theta, rad)),
        &rotz(psi, rad),
    )
}

/// Pose from ZYZ Euler angles with zero translation.
pub fn eul2tr<T: Scalar>(eul: &Vec3<T>, unit: AngleUnit) -> Mat4<T> {
    r2t(&eul2r(eul, unit))
}

/// Rotation by `theta` about `axis`, by Rodrigues' formula.
///
/// The axis need not be unit length. A zero angle gives the identity whatever the axis;
/// otherwise a zero axis fails with [`SpatialError::ZeroNorm`].
pub fn angvec2r<T: Scalar>(theta: T, axis: &Vec3<T>, unit: AngleUnit) -> Result<Mat3<T>, SpatialError> {
    let theta = getunit(theta, unit);
    if theta.abs() < T::tol_eps(DEFAULT_TOL) {
        return Ok(eye());
    }
    let k = unitvec(axis)?;
    Ok(rodrigues(&k, Some(theta)))
}

/// Pose rotating by `theta` about `axis` with zero translation.
pub fn angvec2tr<T: Scalar>(theta: T, axis: &Vec3<T>, unit: AngleUnit) -> Result<Mat4<T>, SpatialError> {
    angvec2r(theta, axis, unit).map(|r| r2t(&r))
}

/// Rotation from orientation and approach vectors.
///
/// `a` becomes the z-axis. `o` only needs to be roughly orthogonal to `a`: the x-axis is
/// `o × a` and the y-axis is recomputed as `a × x`. Fails with [`SpatialError::ZeroNorm`]
/// when `o` and `a` are parallel or either is zero.
pub fn oa2r<T: Scalar>(o: &Vec3<T>, a: &Vec3<T>) -> Result<Mat3<T>, SpatialError> {
    let n = cross(o, a);
    let o = cross(a, &n);
    Ok(from_cols3(&unitvec(&n)?, &unitvec(&o)?, &unitvec(a)?))
}

/// Pose from orientation and approach vectors with zero translation.
pub fn oa2tr<T: Scalar>(o: &Vec3<T>, a: &Vec3<T>) -> Result<Mat4<T>, SpatialError> {
    oa2r(o, a).map(|r| r2t(&r))
}

/// Re-orthonormalize a rotation that has drifted through repeated composition.
///
/// The approach column `a` (z) is kept in direction; the normal `n` (x) is recomputed as
/// `o × a` and the orientation `o` (y) as `a × n`, then all three are normalized. The
/// result is a proper rotation.
///
/// Idempotent up to rounding: `trnorm(trnorm(R))` differs from `trnorm(R)` by a few ulps,
/// at most `4·eps` per element, rather than being bit-identical.
pub fn trnorm<T: Scalar>(r: &Mat3<T>) -> Result<Mat3<T>, SpatialError> {
    oa2r(&col(r, 1), &col(r, 2))
}

/// [`trnorm`] applied to the rotational block of a pose, keeping the translation.
pub fn trnorm_hom<T: Scalar>(t: &Mat4<T>) -> Result<Mat4<T>, SpatialError> {
    let (r, p) = tr2rt(t);
    Ok(rt2tr(&trnorm(&r)?, &p))
}

/// Inverse of an SE(3) pose, `[[Rᵀ, -Rᵀt], [0, 1]]`.
pub fn trinv<T: Scalar>(t: &Mat4<T>) -> Mat4<T> {
    let (r, p) = tr2rt(t);
    let rt = transpose(&r);
    let q = matvec(&rt, &p);
    rt2tr(&rt, &q.map(|x| -x))
}
