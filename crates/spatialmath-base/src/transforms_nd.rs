//! Skew-symmetric algebra and homogeneous-coordinate helpers shared by 2D and 3D code.
//!
//! `skew`/`vex` map between vectors and the generators of so(2)/so(3); `skewa`/`vexa` do the
//! same for the augmented se(2)/se(3) matrices `[[skew(w), v], [0, 0]]`.
//!
//! `vex` is computed from both triangles, `0.5 · (S[2][1] - S[1][2])` and so on, so any
//! symmetric noise added to an exact skew matrix cancels instead of leaking into the result.

use crate::{
    error::SpatialError,
    matrix::{det, eye, matmul, norm_fro, transpose, Mat2, Mat3, Mat4, Twist, Vec2, Vec3},
    scalar::Scalar,
    vectors::{iszerovec, norm},
};

/// Skew-symmetric matrix of a 3-vector, `skew(v) · x = v × x`.
#[inline]
pub fn skew<T: Scalar>(v: &Vec3<T>) -> Mat3<T> {
    let z = T::zero();
    [[z, -v[2], v[1]], [v[2], z, -v[0]], [-v[1], v[0], z]]
}

/// Skew-symmetric matrix of a scalar, the so(2) generator.
#[inline]
pub fn skew2<T: Scalar>(theta: T) -> Mat2<T> {
    [[T::zero(), -theta], [theta, T::zero()]]
}

/// Inverse of [`skew`], averaging the upper and lower triangles.
#[inline]
pub fn vex<T: Scalar>(s: &Mat3<T>) -> Vec3<T> {
    let h = T::from_f64(0.5);
    [
        h * (s[2][1] - s[1][2]),
        h * (s[0][2] - s[2][0]),
        h * (s[1][0] - s[0][1]),
    ]
}

/// Inverse of [`skew2`], averaging the two off-diagonal entries.
#[inline]
pub fn vex2<T: Scalar>(s: &Mat2<T>) -> T {
    T::from_f64(0.5) * (s[1][0] - s[0][1])
}

/// Augmented se(3) matrix `[[skew(w), v], [0, 0]]` of a twist `[v, w]`.
pub fn skewa<T: Scalar>(s: &Twist<T>) -> Mat4<T> {
    let w = skew(&[s[3], s[4], s[5]]);
    let mut m = [[T::zero(); 4]; 4];
    for i in 0..3 {
        m[i][..3].copy_from_slice(&w[i]);
        m[i][3] = s[i];
    }
    m
}

/// Augmented se(2) matrix `[[skew2(ω), v], [0, 0]]` of a 2D twist `[vx, vy, ω]`.
pub fn skewa2<T: Scalar>(s: &Vec3<T>) -> Mat3<T> {
    let z = T::zero();
    [[z, -s[2], s[0]], [s[2], z, s[1]], [z, z, z]]
}

/// Inverse of [`skewa`].
pub fn vexa<T: Scalar>(m: &Mat4<T>) -> Twist<T> {
    let w = vex(&t2r(m));
    [m[0][3], m[1][3], m[2][3], w[0], w[1], w[2]]
}

/// Inverse of [`skewa2`].
pub fn vexa2<T: Scalar>(m: &Mat3<T>) -> Vec3<T> {
    [m[0][2], m[1][2], vex2(&t2r2(m))]
}

/// Test whether `S + Sᵀ ≈ 0`.
pub fn isskew<T: Scalar, const N: usize>(s: &[[T; N]; N], tol: f64) -> bool {
    if !T::NUMERIC {
        return true;
    }
    let st = transpose(s);
    let mut acc = T::zero();
    for i in 0..N {
        for j in 0..N {
            let x = s[i][j] + st[i][j];
            acc = acc + x * x;
        }
    }
    acc.sqrt() < T::tol_eps(tol)
}

/// Test whether a 4x4 matrix is an augmented se(3) matrix.
pub fn isskewa<T: Scalar>(m: &Mat4<T>, tol: f64) -> bool {
    isskew(&t2r(m), tol) && bottom_row_is_zero(&m[3], tol)
}

/// Test whether a 3x3 matrix is an augmented se(2) matrix.
pub fn isskewa2<T: Scalar>(m: &Mat3<T>, tol: f64) -> bool {
    isskew(&t2r2(m), tol) && bottom_row_is_zero(&m[2], tol)
}

fn bottom_row_is_zero<T: Scalar>(row: &[T], tol: f64) -> bool {
    !T::NUMERIC || iszerovec(row, tol)
}

/// Test whether a square matrix is a proper rotation: `R·Rᵀ ≈ I` and `det(R) > 0`.
pub fn isr<T: Scalar, const N: usize>(r: &[[T; N]; N], tol: f64) -> bool {
    if !T::NUMERIC {
        return true;
    }
    let rrt = matmul(r, &transpose(r));
    let mut acc = T::zero();
    for (i, row) in rrt.iter().enumerate() {
        for (j, &x) in row.iter().enumerate() {
            let d = if i == j { x - T::one() } else { x };
            acc = acc + d * d;
        }
    }
    acc.sqrt() < T::tol_eps(tol) && det(r) > T::zero()
}

/// Test whether a square matrix is the identity.
pub fn iseye<T: Scalar, const N: usize>(s: &[[T; N]; N], tol: f64) -> bool {
    if !T::NUMERIC {
        return true;
    }
    let mut d = *s;
    for (i, row) in d.iter_mut().enumerate() {
        row[i] = row[i] - T::one();
    }
    norm_fro(&d) < T::tol_eps(tol)
}

/// Embed a rotation in a homogeneous transform with zero translation.
pub fn r2t<T: Scalar>(r: &Mat3<T>) -> Mat4<T> {
    rt2tr(r, &[T::zero(); 3])
}

/// Rotation block of a homogeneous transform.
pub fn t2r<T: Scalar>(t: &Mat4<T>) -> Mat3<T> {
    [
        [t[0][0], t[0][1], t[0][2]],
        [t[1][0], t[1][1], t[1][2]],
        [t[2][0], t[2][1], t[2][2]],
    ]
}

/// Embed a 2D rotation in a homogeneous transform with zero translation.
pub fn r2t2<T: Scalar>(r: &Mat2<T>) -> Mat3<T> {
    rt2tr2(r, &[T::zero(); 2])
}

/// Rotation block of a 2D homogeneous transform.
pub fn t2r2<T: Scalar>(t: &Mat3<T>) -> Mat2<T> {
    [[t[0][0], t[0][1]], [t[1][0], t[1][1]]]
}

/// Homogeneous transform `[[R, t], [0, 1]]`.
pub fn rt2tr<T: Scalar>(r: &Mat3<T>, t: &Vec3<T>) -> Mat4<T> {
    let mut m = eye::<T, 4>();
    for i in 0..3 {
        m[i][..3].copy_from_slice(&r[i]);
        m[i][3] = t[i];
    }
    m
}

/// Split a homogeneous transform into rotation and translation.
pub fn tr2rt<T: Scalar>(t: &Mat4<T>) -> (Mat3<T>, Vec3<T>) {
    (t2r(t), [t[0][3], t[1][3], t[2][3]])
}

/// 2D homogeneous transform `[[R, t], [0, 1]]`.
pub fn rt2tr2<T: Scalar>(r: &Mat2<T>, t: &Vec2<T>) -> Mat3<T> {
    let (z, o) = (T::zero(), T::one());
    [[r[0][0], r[0][1], t[0]], [r[1][0], r[1][1], t[1]], [z, z, o]]
}

/// Split a 2D homogeneous transform into rotation and translation.
pub fn tr2rt2<T: Scalar>(t: &Mat3<T>) -> (Mat2<T>, Vec2<T>) {
    (t2r2(t), [t[0][2], t[1][2]])
}

/// Euclidean 3D point to homogeneous coordinates.
#[inline]
pub fn e2h<T: Scalar>(p: &Vec3<T>) -> [T; 4] {
    [p[0], p[1], p[2], T::one()]
}

/// Homogeneous coordinates to a Euclidean 3D point.
///
/// Fails with [`SpatialError::ZeroNorm`] for a point at infinity (zero scale).
pub fn h2e<T: Scalar>(p: &[T; 4]) -> Result<Vec3<T>, SpatialError> {
    if p[3] == T::zero() {
        return Err(SpatialError::ZeroNorm("homogeneous scale"));
    }
    Ok([p[0] / p[3], p[1] / p[3], p[2] / p[3]])
}

/// Euclidean 2D point to homogeneous coordinates.
#[inline]
pub fn e2h2<T: Scalar>(p: &Vec2<T>) -> Vec3<T> {
    [p[0], p[1], T::one()]
}

/// Homogeneous coordinates to a Euclidean 2D point.
pub fn h2e2<T: Scalar>(p: &Vec3<T>) -> Result<Vec2<T>, SpatialError> {
    if p[2] == T::zero() {
        return Err(SpatialError::ZeroNorm("homogeneous scale"));
    }
    Ok([p[0] / p[2], p[1] / p[2]])
}

/// Apply a homogeneous transform to a 3D point.
pub fn homtrans<T: Scalar>(t: &Mat4<T>, p: &Vec3<T>) -> Vec3<T> {
    let mut out = [T::zero(); 3];
    for (i, o) in out.iter_mut().enumerate() {
        *o = t[i][0] * p[0] + t[i][1] * p[1] + t[i][2] * p[2] + t[i][3];
    }
    out
}

/// Apply a 2D homogeneous transform to a 2D point.
pub fn homtrans2<T: Scalar>(t: &Mat3<T>, p: &Vec2<T>) -> Vec2<T> {
    [
        t[0][0] * p[0] + t[0][1] * p[1] + t[0][2],
        t[1][0] * p[0] + t[1][1] * p[1] + t[1][2],
    ]
}

/// Rodrigues' rotation formula `R = I + sin θ·K + (1 - cos θ)·K²`, `K = skew(unit(w))`.
///
/// With `theta = None` the angle is `|w|`; otherwise `w` only supplies the direction. A zero
/// `w` gives the identity.
pub fn rodrigues<T: Scalar>(w: &Vec3<T>, theta: Option<T>) -> Mat3<T> {
    let n = norm(w);
    if n == T::zero() {
        return eye();
    }
    let theta = theta.unwrap_or(n);
    let k = skew(&w.map(|x| x / n));
    let k2 = matmul(&k, &k);
    let (s, c) = theta.sin_cos();
    let one_c = T::one() - c;
    let mut r = eye::<T, 3>();
    for i in 0..3 {
        for j in 0..3 {
            r[i][j] = r[i][j] + s * k[i][j] + one_c * k2[i][j];
        }
    }
    r
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::matvec;
    use crate::vectors::cross;
    use approx::assert_relative_eq;

    #[test]
    fn test_skew_vex() {
        let v = [1.0, 2.0, 3.0];
        let s = skew(&v);
        assert_eq!(s, [[0.0, -3.0, 2.0], [3.0, 0.0, -1.0], [-2.0, 1.0, 0.0]]);
        assert_eq!(vex(&s), v);
        assert!(isskew(&s, 10.0));
        assert_eq!(matvec(&s, &[4.0, 5.0, 6.0]), cross(&v, &[4.0, 5.0, 6.0]));
    }

    #[test]
    fn test_vex_averages_noise() {
        let mut s = skew(&[1.0, 2.0, 3.0]);
        // symmetric perturbation cancels
        s[2][1] += 1e-3;
        s[1][2] += 1e-3;
        assert_relative_eq!(vex(&s)[0], 1.0, epsilon = 1e-15);
        assert!(!isskew(&s, 10.0));
    }

    #[test]
    fn test_skew2() {
        let s = skew2(2.0);
        assert_eq!(s, [[0.0, -2.0], [2.0, 0.0]]);
        assert_eq!(vex2(&s), 2.0);
        assert!(isskew(&s, 10.0));
    }

    #[test]
    fn test_skewa() {
        let t = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        let m = skewa(&t);
        assert_eq!(m[0], [0.0, -6.0, 5.0, 1.0]);
        assert_eq!(m[3], [0.0; 4]);
        assert_eq!(vexa(&m), t);
        assert!(isskewa(&m, 10.0));

        let mut bad = m;
        bad[3][0] = 1.0;
        assert!(!isskewa(&bad, 10.0));

        let t2 = [1.0, 2.0, 3.0];
        let m2 = skewa2(&t2);
        assert_eq!(m2, [[0.0, -3.0, 1.0], [3.0, 0.0, 2.0], [0.0, 0.0, 0.0]]);
        assert_eq!(vexa2(&m2), t2);
        assert!(isskewa2(&m2, 10.0));
    }

    #[test]
    fn test_isr() {
        let r = [[0.0, -1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]];
        assert!(isr(&r, 10.0));
        // reflection
        let m = [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, -1.0]];
        assert!(!isr(&m, 10.0));
        // scaled
        assert!(!isr(&[[2.0, 0.0], [0.0, 2.0]], 10.0));
        assert!(iseye(&eye::<f64, 4>(), 10.0));
        assert!(!iseye(&r, 10.0));
    }

    #[test]
    fn test_rt2tr() {
        let r = [[0.0, -1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]];
        let t = [1.0, 2.0, 3.0];
        let m = rt2tr(&r, &t);
        assert_eq!(m[3], [0.0, 0.0, 0.0, 1.0]);
        assert_eq!(tr2rt(&m), (r, t));
        assert_eq!(t2r(&r2t(&r)), r);

        let r2 = [[0.0, -1.0], [1.0, 0.0]];
        let m2 = rt2tr2(&r2, &[5.0, 6.0]);
        assert_eq!(m2, [[0.0, -1.0, 5.0], [1.0, 0.0, 6.0], [0.0, 0.0, 1.0]]);
        assert_eq!(tr2rt2(&m2), (r2, [5.0, 6.0]));
        assert_eq!(t2r2(&r2t2(&r2)), r2);
    }

    #[test]
    fn test_homogeneous() -> Result<(), SpatialError> {
        assert_eq!(e2h(&[1.0, 2.0, 3.0]), [1.0, 2.0, 3.0, 1.0]);
        assert_eq!(h2e(&[2.0, 4.0, 6.0, 2.0])?, [1.0, 2.0, 3.0]);
        assert!(h2e(&[1.0, 1.0, 1.0, 0.0]).is_err());
        assert_eq!(h2e2(&e2h2(&[3.0, 4.0]))?, [3.0, 4.0]);
        assert!(h2e2(&[1.0, 1.0, 0.0]).is_err());

        let m = rt2tr(&eye(), &[1.0, 2.0, 3.0]);
        assert_eq!(homtrans(&m, &[1.0, 1.0, 1.0]), [2.0, 3.0, 4.0]);
        let m2 = rt2tr2(&[[0.0, -1.0], [1.0, 0.0]], &[1.0, 0.0]);
        assert_eq!(homtrans2(&m2, &[1.0, 0.0]), [1.0, 1.0]);
        Ok(())
    }

    #[test]
    fn test_rodrigues() {
        let r = rodrigues(&[0.0, 0.0, std::f64::consts::FRAC_PI_2], None);
        let expected = [[0.0, -1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]];
        for i in 0..3 {
            for j in 0..3 {
                assert_relative_eq!(r[i][j], expected[i][j], epsilon = 1e-12);
            }
        }
        let r = rodrigues(&[0.0, 0.0, 5.0], Some(std::f64::consts::FRAC_PI_2));
        assert_relative_eq!(r[1][0], 1.0, epsilon = 1e-12);
        assert_eq!(rodrigues(&[0.0, 0.0, 0.0], None), eye::<f64, 3>());
        assert!(isr(&rodrigues(&[0.3, -0.2, 0.9], None), 20.0));
    }
}
