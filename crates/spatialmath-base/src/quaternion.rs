//! # Quaternions
//!
//! A quaternion is stored as `[s, vx, vy, vz]`: scalar part first, then the vector part.
//! All functions are pure and accept general (non-unit) quaternions unless stated otherwise.
//!
//! ## The double cover
//!
//! Unit quaternions form the 3-sphere, which double covers SO(3): `q` and `-q` encode the
//! same rotation. [`r2q`] resolves the ambiguity by always returning a non-negative scalar
//! part; [`isequal`] and [`slerp`] can be asked to ignore the sign.

use rand::Rng;

use crate::{
    argcheck::assert_fraction,
    config::SlerpOptions,
    error::SpatialError,
    matrix::{Mat3, Mat4, Vec3},
    scalar::Scalar,
    vectors::{norm, normsq},
};

/// Quaternion `[s, vx, vy, vz]`.
pub type Quaternion<T> = [T; 4];

/// Identity quaternion.
#[inline]
pub fn qeye<T: Scalar>() -> Quaternion<T> {
    [T::one(), T::zero(), T::zero(), T::zero()]
}

/// Pure quaternion `[0, v]`.
#[inline]
pub fn pure<T: Scalar>(v: &Vec3<T>) -> Quaternion<T> {
    [T::zero(), v[0], v[1], v[2]]
}

/// Norm of a quaternion.
#[inline]
pub fn qnorm<T: Scalar>(q: &Quaternion<T>) -> T {
    norm(q)
}

/// Normalize a quaternion.
///
/// Fails with [`SpatialError::ZeroNorm`] when the norm is below `tol·eps`.
pub fn unit<T: Scalar>(q: &Quaternion<T>, tol: f64) -> Result<Quaternion<T>, SpatialError> {
    let n = qnorm(q);
    if n < T::tol_eps(tol) {
        return Err(SpatialError::ZeroNorm("quaternion"));
    }
    Ok(q.map(|x| x / n))
}

/// Test whether a quaternion has unit norm.
pub fn isunit<T: Scalar>(q: &Quaternion<T>, tol: f64) -> bool {
    !T::NUMERIC || (qnorm(q) - T::one()).abs() < T::tol_eps(tol)
}

/// Strict form of [`isunit`].
pub fn assert_unit<T: Scalar>(q: &Quaternion<T>, tol: f64) -> Result<(), SpatialError> {
    if isunit(q, tol) {
        Ok(())
    } else {
        Err(SpatialError::NotUnitQuaternion)
    }
}

/// Test whether two quaternions are equal.
///
/// With `unitq` set, `q1` and `-q2` also compare equal since they encode the same rotation.
pub fn isequal<T: Scalar>(q1: &Quaternion<T>, q2: &Quaternion<T>, unitq: bool, tol: f64) -> bool {
    if !T::NUMERIC {
        return true;
    }
    let t = T::tol_eps(tol);
    let diff = norm(&sub(q1, q2));
    if unitq {
        diff < t || norm(&add(q1, q2)) < t
    } else {
        diff < t
    }
}

/// Compact 3-vector form of a unit quaternion: the vector part after forcing `s >= 0`.
pub fn q2v<T: Scalar>(q: &Quaternion<T>) -> Vec3<T> {
    if q[0] >= T::zero() {
        [q[1], q[2], q[3]]
    } else {
        [-q[1], -q[2], -q[3]]
    }
}

/// Unit quaternion from its compact 3-vector form, the inverse of [`q2v`].
///
/// Fails with [`SpatialError::OutOfRange`] when `|v| > 1`.
pub fn v2q<T: Scalar>(v: &Vec3<T>) -> Result<Quaternion<T>, SpatialError> {
    let s2 = T::one() - normsq(v);
    if s2 < -T::epsilon() {
        return Err(SpatialError::OutOfRange {
            name: "|v|",
            value: norm(v).to_f64().unwrap_or(f64::NAN),
            range: "[0, 1]",
        });
    }
    Ok([s2.max(T::zero()).sqrt(), v[0], v[1], v[2]])
}

/// Hamilton product `q1 ⊗ q2`.
pub fn qqmul<T: Scalar>(q1: &Quaternion<T>, q2: &Quaternion<T>) -> Quaternion<T> {
    let [s1, x1, y1, z1] = *q1;
    let [s2, x2, y2, z2] = *q2;
    [
        s1 * s2 - x1 * x2 - y1 * y2 - z1 * z2,
        s1 * x2 + x1 * s2 + y1 * z2 - z1 * y2,
        s1 * y2 - x1 * z2 + y1 * s2 + z1 * x2,
        s1 * z2 + x1 * y2 - y1 * x2 + z1 * s2,
    ]
}

/// Inner product of two quaternions as 4-vectors.
#[inline]
pub fn inner<T: Scalar>(q1: &Quaternion<T>, q2: &Quaternion<T>) -> T {
    q1.iter()
        .zip(q2.iter())
        .fold(T::zero(), |acc, (&a, &b)| acc + a * b)
}

/// Rotate a vector by a unit quaternion, `q ⊗ [0, v] ⊗ q*`.
pub fn qvmul<T: Scalar>(q: &Quaternion<T>, v: &Vec3<T>) -> Vec3<T> {
    let r = qqmul(&qqmul(q, &pure(v)), &conj(q));
    [r[1], r[2], r[3]]
}

/// Product of two rotations given in compact 3-vector form.
pub fn vvmul<T: Scalar>(v1: &Vec3<T>, v2: &Vec3<T>) -> Result<Vec3<T>, SpatialError> {
    Ok(q2v(&qqmul(&v2q(v1)?, &v2q(v2)?)))
}

/// Conjugate, the vector part negated.
#[inline]
pub fn conj<T: Scalar>(q: &Quaternion<T>) -> Quaternion<T> {
    [q[0], -q[1], -q[2], -q[3]]
}

/// Power of a quaternion.
///
/// An integer `n` is evaluated by repeated multiplication, which is exact for any
/// quaternion; negative powers use the conjugate and therefore assume a unit quaternion.
/// A fractional `n` scales the rotation angle: with `q = |q|·(cos φ + u·sin φ)` the result is
/// `|q|ⁿ·(cos nφ + u·sin nφ)`, evaluated after forcing `s >= 0` so the shorter rotation is
/// scaled.
pub fn qpow<T: Scalar>(q: &Quaternion<T>, n: T) -> Quaternion<T> {
    if n.fract() == T::zero() {
        if let Some(k) = n.abs().to_i64() {
            let mut base = if n < T::zero() { conj(q) } else { *q };
            let mut e = k;
            let mut acc = qeye();
            while e > 0 {
                if e & 1 == 1 {
                    acc = qqmul(&acc, &base);
                }
                base = qqmul(&base, &base);
                e >>= 1;
            }
            return acc;
        }
    }

    let q = if q[0] < T::zero() { q.map(|x| -x) } else { *q };
    let m = qnorm(&q);
    let vn = norm(&q[1..4]);
    let phi = vn.atan2(q[0]);
    let scale = m.powf(n);
    if vn == T::zero() {
        return [scale, T::zero(), T::zero(), T::zero()];
    }
    let (s, c) = (n * phi).sin_cos();
    let k = scale * s / vn;
    [scale * c, k * q[1], k * q[2], k * q[3]]
}

/// Rotation matrix of a unit quaternion.
pub fn q2r<T: Scalar>(q: &Quaternion<T>) -> Mat3<T> {
    let [s, x, y, z] = *q;
    let one = T::one();
    let two = one + one;
    [
        [
            one - two * (y * y + z * z),
            two * (x * y - s * z),
            two * (x * z + s * y),
        ],
        [
            two * (x * y + s * z),
            one - two * (x * x + z * z),
            two * (y * z - s * x),
        ],
        [
            two * (x * z - s * y),
            two * (y * z + s * x),
            one - two * (x * x + y * y),
        ],
    ]
}

/// Unit quaternion of a rotation matrix.
///
/// Uses Shepperd's method: the largest of `s`, `|x|`, `|y|`, `|z|` is recovered from the
/// diagonal and the others from off-diagonal sums, so no branch divides by a small number.
/// The result always has a non-negative scalar part; when the scalar part is zero the
/// component recovered from the diagonal is positive.
pub fn r2q<T: Scalar>(r: &Mat3<T>) -> Quaternion<T> {
    let one = T::one();
    let quarter = T::from_f64(0.25);
    let tr = r[0][0] + r[1][1] + r[2][2];

    let q = if tr >= r[0][0] && tr >= r[1][1] && tr >= r[2][2] {
        let s = (one + tr).sqrt() * T::from_f64(2.0);
        [
            quarter * s,
            (r[2][1] - r[1][2]) / s,
            (r[0][2] - r[2][0]) / s,
            (r[1][0] - r[0][1]) / s,
        ]
    } else if r[0][0] >= r[1][1] && r[0][0] >= r[2][2] {
        let s = (one + r[0][0] - r[1][1] - r[2][2]).sqrt() * T::from_f64(2.0);
        [
            (r[2][1] - r[1][2]) / s,
            quarter * s,
            (r[0][1] + r[1][0]) / s,
            (r[0][2] + r[2][0]) / s,
        ]
    } else if r[1][1] >= r[2][2] {
        let s = (one + r[1][1] - r[0][0] - r[2][2]).sqrt() * T::from_f64(2.0);
        [
            (r[0][2] - r[2][0]) / s,
            (r[0][1] + r[1][0]) / s,
            quarter * s,
            (r[1][2] + r[2][1]) / s,
        ]
    } else {
        let s = (one + r[2][2] - r[0][0] - r[1][1]).sqrt() * T::from_f64(2.0);
        [
            (r[1][0] - r[0][1]) / s,
            (r[0][2] + r[2][0]) / s,
            (r[1][2] + r[2][1]) / s,
            quarter * s,
        ]
    };

    if q[0] < T::zero() {
        q.map(|x| -x)
    } else {
        q
    }
}

/// Spherical linear interpolation between two unit quaternions, `s` in `[0, 1]`.
///
/// With `opts.shortest` the shorter arc is taken by negating `q1` when `q0·q1 < 0`. When
/// `1 - cos θ` between the endpoints is below `opts.tol·eps` the result is a renormalized linear
/// interpolation, which avoids dividing by `sin θ`. When shortest-path is disabled and the
/// endpoints are antipodal the arc is not unique; the great circle through the quaternion
/// orthogonal to `q0` built by [`orthogonal`] is used.
///
/// Fails with [`SpatialError::OutOfRange`] for `s` outside `[0, 1]`.
pub fn slerp<T: Scalar>(
    q0: &Quaternion<T>,
    q1: &Quaternion<T>,
    s: T,
    opts: &SlerpOptions,
) -> Result<Quaternion<T>, SpatialError> {
    assert_fraction(s)?;

    let mut q1 = *q1;
    let mut cos_angle = inner(q0, &q1);
    if opts.shortest && cos_angle < T::zero() {
        q1 = q1.map(|x| -x);
        cos_angle = -cos_angle;
    }

    if s == T::zero() {
        return Ok(*q0);
    }
    if s == T::one() {
        return Ok(q1);
    }

    let cos_angle = cos_angle.max(-T::one()).min(T::one());
    let tol = T::tol_eps(opts.tol);

    if T::one() - cos_angle < tol {
        log::debug!("slerp: endpoints coincide, using linear interpolation");
        let q = add(&q0.map(|x| x * (T::one() - s)), &q1.map(|x| x * s));
        return unit(&q, opts.tol);
    }

    if cos_angle + T::one() < tol {
        log::debug!("slerp: antipodal endpoints, interpolating through an orthogonal quaternion");
        let p = orthogonal(q0);
        let (sn, cs) = (T::PI() * s).sin_cos();
        return Ok(add(&q0.map(|x| x * cs), &p.map(|x| x * sn)));
    }

    let theta = cos_angle.acos();
    let sin_theta = theta.sin();
    let a = ((T::one() - s) * theta).sin() / sin_theta;
    let b = (s * theta).sin() / sin_theta;
    Ok(add(&q0.map(|x| x * a), &q1.map(|x| x * b)))
}

/// A quaternion orthogonal to `q` (as 4-vectors) with the same norm.
#[inline]
pub fn orthogonal<T: Scalar>(q: &Quaternion<T>) -> Quaternion<T> {
    [-q[1], q[0], -q[3], q[2]]
}

/// Uniformly distributed random unit quaternion with non-negative scalar part.
pub fn qrand<T: Scalar>() -> Quaternion<T> {
    qrand_with(&mut rand::rng())
}

/// As [`qrand`] with a caller supplied random number generator.
pub fn qrand_with<T: Scalar, R: Rng + ?Sized>(rng: &mut R) -> Quaternion<T> {
    let u1: f64 = rng.random();
    let u2: f64 = rng.random();
    let u3: f64 = rng.random();
    let tau = std::f64::consts::TAU;

    // Shoemake's method
    let a = (1.0 - u1).sqrt();
    let b = u1.sqrt();
    let q = [
        a * (tau * u2).cos(),
        a * (tau * u2).sin(),
        b * (tau * u3).sin(),
        b * (tau * u3).cos(),
    ];
    let q = q.map(T::from_f64);
    if q[0] < T::zero() {
        q.map(|x| -x)
    } else {
        q
    }
}

/// 4x4 matrix `M(q1)` such that `qqmul(q1, q2) = M(q1) · q2`.
pub fn matrix<T: Scalar>(q: &Quaternion<T>) -> Mat4<T> {
    let [s, x, y, z] = *q;
    [
        [s, -x, -y, -z],
        [x, s, -z, y],
        [y, z, s, -x],
        [z, -y, x, s],
    ]
}

/// Quaternion rate for angular velocity `w` expressed in the world frame, `½·[0, w] ⊗ q`.
pub fn dot<T: Scalar>(q: &Quaternion<T>, w: &Vec3<T>) -> Quaternion<T> {
    let half = T::from_f64(0.5);
    qqmul(&pure(w), q).map(|x| x * half)
}

/// Quaternion rate for angular velocity `w` expressed in the body frame, `½·q ⊗ [0, w]`.
pub fn dotb<T: Scalar>(q: &Quaternion<T>, w: &Vec3<T>) -> Quaternion<T> {
    let half = T::from_f64(0.5);
    qqmul(q, &pure(w)).map(|x| x * half)
}

/// Angle of the rotation taking `q1` to `q2`, in `[0, π]`, for unit quaternions.
pub fn angle<T: Scalar>(q1: &Quaternion<T>, q2: &Quaternion<T>) -> T {
    let d = inner(q1, q2).abs().min(T::one());
    T::from_f64(2.0) * d.acos()
}

fn add<T: Scalar>(a: &Quaternion<T>, b: &Quaternion<T>) -> Quaternion<T> {
    [a[0] + b[0], a[1] + b[1], a[2] + b[2], a[3] + b[3]]
}

fn sub<T: Scalar>(a: &Quaternion<T>, b: &Quaternion<T>) -> Quaternion<T> {
    [a[0] - b[0], a[1] - b[1], a[2] - b[2], a[3] - b[3]]
}
