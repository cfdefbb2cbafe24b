use super::{assert_hom, assert_rot, exp2jac, transl_of, trinv};
use crate::{
    argcheck::assert_fraction,
    config::{CheckOptions, SlerpOptions},
    error::SpatialError,
    matrix::{add, eye, matmul, matvec, scale, sub, trace, transpose, Mat3, Mat4, Twist, Vec3},
    quaternion::{q2r, r2q, slerp},
    scalar::Scalar,
    transforms_nd::{isskew, isskewa, rodrigues, rt2tr, skew, skewa, t2r, tr2rt, vex, vexa},
    vectors::{dot, norm},
};

/// Exponential coordinates `w = θ·n` of a rotation, `θ` in `[0, π]`.
///
/// The angle is `atan2(|vex(R)|, (tr R - 1)/2)`.
pub(super) fn log_so3<T: Scalar>(r: &Mat3<T>, tol: f64) -> Vec3<T> {
    let one = T::one();
    let half = T::from_f64(0.5);
    let cos_theta = ((trace(r) - one) * half).max(-one).min(one);

    // vex averages both triangles, so this is sin θ · n
    let s = vex(r);

    if one - cos_theta < T::tol_eps(tol) {
        // θ ≈ sin θ to first order
        return s;
    }

    let sin_theta = norm(&s);
    let theta = sin_theta.atan2(cos_theta);
    let n = if cos_theta < T::zero() {
        log::debug!("log_so3: angle {:?} above π/2, axis from symmetric part", theta);
        // (R + Rᵀ)/2 - cos θ · I = (1 - cos θ) · n·nᵀ
        let sym = scale(&add(r, &transpose(r)), half);
        let nnt = scale(&sub(&sym, &scale(&eye(), cos_theta)), one / (one - cos_theta));
        let mut k = 0;
        for i in 1..3 {
            if nnt[i][i] > nnt[k][k] {
                k = i;
            }
        }
        let nk = nnt[k][k].max(T::zero()).sqrt();
        let mut n = [nnt[0][k] / nk, nnt[1][k] / nk, nnt[2][k] / nk];
        n[k] = nk;
        if dot(&n, &s) < T::zero() {
            n = n.map(|x| -x);
        }
        n
    } else {
        s.map(|x| x / sin_theta)
    };
    n.map(|x| x * theta)
}

/// Logarithm of an SO(3) rotation, the so(3) matrix `skew(θ·n)` with `θ` in `[0, π]`.
///
/// The identity maps to the zero matrix. At exactly `θ = π` both `n` and `-n` give the same
/// rotation and either may be returned.
///
/// With `opts.check` the input must pass [`assert_rot`](super::assert_rot).
pub fn trlog_rot<T: Scalar>(r: &Mat3<T>, opts: &CheckOptions) -> Result<Mat3<T>, SpatialError> {
    if opts.check {
        assert_rot(r, opts.tol)?;
    }
    Ok(skew(&log_so3(r, opts.tol)))
}

/// Logarithm of an SE(3) pose, the se(3) matrix `skewa([v, w])`.
pub fn trlog<T: Scalar>(t: &Mat4<T>, opts: &CheckOptions) -> Result<Mat4<T>, SpatialError> {
    Ok(skewa(&trlog_vec(t, opts)?))
}

/// Logarithm of an SE(3) pose as the twist `[v, w]`.
///
/// `w` is the rotation logarithm and `v = V⁻¹·t` with
///
/// ```text
/// V⁻¹ = I - W/2 + (1 - (θ/2)·cot(θ/2)) / θ² · W²,   W = skew(w), θ = |w|
/// ```
///
/// For a pure translation `v = t`.
pub fn trlog_vec<T: Scalar>(t: &Mat4<T>, opts: &CheckOptions) -> Result<Twist<T>, SpatialError> {
    if opts.check {
        assert_hom(t, opts.tol)?;
    }
    let (r, p) = tr2rt(t);
    let w = log_so3(&r, opts.tol);
    let theta = norm(&w);
    let v = if theta < T::tol_eps(opts.tol) {
        p
    } else {
        let half = theta * T::from_f64(0.5);
        let (sh, ch) = half.sin_cos();
        let coef = (T::one() - half * ch / sh) / (theta * theta);
        let ww = skew(&w);
        let vinv = add(
            &sub(&eye(), &scale(&ww, T::from_f64(0.5))),
            &scale(&matmul(&ww, &ww), coef),
        );
        matvec(&vinv, &p)
    };
    Ok([v[0], v[1], v[2], w[0], w[1], w[2]])
}

/// Rotation from exponential coordinates `w = θ·n`.
pub fn exp2r<T: Scalar>(w: &Vec3<T>) -> Mat3<T> {
    rodrigues(w, None)
}

/// Pose from a twist `[v, w]`: `R = exp2r(w)`, `t = V(w)·v` where `V` is the left
/// Jacobian [`exp2jac`](super::exp2jac).
pub fn exp2tr<T: Scalar>(s: &Twist<T>) -> Mat4<T> {
    let v = [s[0], s[1], s[2]];
    let w = [s[3], s[4], s[5]];
    rt2tr(&exp2r(&w), &matvec(&exp2jac(&w), &v))
}

/// Exponential of an so(3) matrix.
pub fn trexp_rot<T: Scalar>(s: &Mat3<T>, opts: &CheckOptions) -> Result<Mat3<T>, SpatialError> {
    if opts.check && !isskew(s, opts.tol) {
        return Err(SpatialError::NotSkew { augmented: false });
    }
    Ok(exp2r(&vex(s)))
}

/// Exponential of an se(3) matrix.
pub fn trexp<T: Scalar>(s: &Mat4<T>, opts: &CheckOptions) -> Result<Mat4<T>, SpatialError> {
    if opts.check && !isskewa(s, opts.tol) {
        return Err(SpatialError::NotSkew { augmented: true });
    }
    Ok(exp2tr(&vexa(s)))
}

/// Interpolate between two rotations by quaternion slerp along the shorter arc.
pub fn trinterp_rot<T: Scalar>(r0: &Mat3<T>, r1: &Mat3<T>, s: T) -> Result<Mat3<T>, SpatialError> {
    assert_fraction(s)?;
    if s == T::zero() {
        return Ok(*r0);
    }
    if s == T::one() {
        return Ok(*r1);
    }
    let q = slerp(&r2q(r0), &r2q(r1), s, &SlerpOptions::default())?;
    Ok(q2r(&q))
}

/// Interpolate between two poses, `s` in `[0, 1]`.
///
/// The rotation follows [`trinterp_rot`] and the translation moves linearly. The endpoints
/// are returned unchanged at `s = 0` and `s = 1`.
pub fn trinterp<T: Scalar>(t0: &Mat4<T>, t1: &Mat4<T>, s: T) -> Result<Mat4<T>, SpatialError> {
    assert_fraction(s)?;
    if s == T::zero() {
        return Ok(*t0);
    }
    if s == T::one() {
        return Ok(*t1);
    }
    let (r0, p0) = tr2rt(t0);
    let (r1, p1) = tr2rt(t1);
    let r = trinterp_rot(&r0, &r1, s)?;
    let mut p = p0;
    for (pi, &qi) in p.iter_mut().zip(p1.iter()) {
        *pi = *pi + s * (qi - *pi);
    }
    Ok(rt2tr(&r, &p))
}

/// Pose from a differential motion `[dx, dy, dz, δx, δy, δz]`, `I + skewa(d)`.
///
/// Only valid for small motions; the rotational block is not orthonormal.
pub fn delta2tr<T: Scalar>(d: &Twist<T>) -> Mat4<T> {
    add(&eye(), &skewa(d))
}

/// Differential motion taking `t0` to `t1`, expressed in the frame of `t0`.
///
/// The first-order approximation `[transl(T0⁻¹·T1), vex(R - I)]`, accurate for small
/// differences only.
pub fn tr2delta<T: Scalar>(t0: &Mat4<T>, t1: &Mat4<T>) -> Twist<T> {
    let td = matmul(&trinv(t0), t1);
    let p = transl_of(&td);
    let d = vex(&sub(&t2r(&td), &eye()));
    [p[0], p[1], p[2], d[0], d[1], d[2]]
}
