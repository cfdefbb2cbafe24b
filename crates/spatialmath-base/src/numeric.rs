//! Finite-difference derivatives and integer line rasterization.
//!
//! The derivative helpers evaluate the function at `x ± dx` along each coordinate and are
//! meant for checking analytic Jacobians, not for use inside solvers.

use crate::{
    matrix::{matmul, sub, transpose, Mat3},
    scalar::Scalar,
    transforms_nd::vex,
};

/// Central-difference Jacobian of a vector function.
///
/// Returns the `M x N` matrix `J[i][j] = ∂f_i/∂x_j` at `x`.
///
/// Example:
///
/// ```
/// use spatialmath_base::numeric::numjac;
///
/// let j = numjac(|x: &[f64; 2]| [x[0] * x[1], x[0] + 2.0 * x[1], x[1].sin()], &[1.0, 0.0], 1e-6);
/// assert!((j[0][1] - 1.0).abs() < 1e-8);
/// assert!((j[1][1] - 2.0).abs() < 1e-8);
/// assert!((j[2][1] - 1.0).abs() < 1e-8);
/// ```
pub fn numjac<T, F, const N: usize, const M: usize>(f: F, x: &[T; N], dx: T) -> [[T; N]; M]
where
    T: Scalar,
    F: Fn(&[T; N]) -> [T; M],
{
    let mut jac = [[T::zero(); N]; M];
    let two_dx = dx + dx;
    for j in 0..N {
        let mut xp = *x;
        let mut xm = *x;
        xp[j] = xp[j] + dx;
        xm[j] = xm[j] - dx;
        let (fp, fm) = (f(&xp), f(&xm));
        for i in 0..M {
            jac[i][j] = (fp[i] - fm[i]) / two_dx;
        }
    }
    jac
}

/// Central-difference angular velocity Jacobian of a rotation-valued function.
///
/// Column `j` is `vex(∂R/∂x_j · Rᵀ)`, the world-frame angular velocity produced by a unit
/// rate of `x_j`. For a parameterization `R(Γ)` this approximates the `A(Γ)` of
/// [`rpy2jac`](crate::transforms3d::rpy2jac) and friends.
pub fn numjac_so3<T, F, const N: usize>(f: F, x: &[T; N], dx: T) -> [[T; N]; 3]
where
    T: Scalar,
    F: Fn(&[T; N]) -> Mat3<T>,
{
    let rt = transpose(&f(x));
    let mut jac = [[T::zero(); N]; 3];
    let inv_two_dx = T::one() / (dx + dx);
    for j in 0..N {
        let mut xp = *x;
        let mut xm = *x;
        xp[j] = xp[j] + dx;
        xm[j] = xm[j] - dx;
        let mut dr = sub(&f(&xp), &f(&xm));
        for row in dr.iter_mut() {
            for v in row.iter_mut() {
                *v = *v * inv_two_dx;
            }
        }
        let w = vex(&matmul(&dr, &rt));
        for i in 0..3 {
            jac[i][j] = w[i];
        }
    }
    jac
}

/// Central-difference Hessian from a Jacobian function.
///
/// `jac` returns the `M x N` Jacobian of some `f: Rᴺ → Rᴹ`. The result holds one `M x N`
/// slice per coordinate, `H[k][i][j] = ∂²f_i/∂x_j∂x_k`.
pub fn numhess<T, F, const N: usize, const M: usize>(jac: F, x: &[T; N], dx: T) -> [[[T; N]; M]; N]
where
    T: Scalar,
    F: Fn(&[T; N]) -> [[T; N]; M],
{
    let mut hess = [[[T::zero(); N]; M]; N];
    let two_dx = dx + dx;
    for (k, slice) in hess.iter_mut().enumerate() {
        let mut xp = *x;
        let mut xm = *x;
        xp[k] = xp[k] + dx;
        xm[k] = xm[k] - dx;
        let (jp, jm) = (jac(&xp), jac(&xm));
        for i in 0..M {
            for j in 0..N {
                slice[i][j] = (jp[i][j] - jm[i][j]) / two_dx;
            }
        }
    }
    hess
}

/// Integer pixels on the segment from `p0` to `p1`, both endpoints included.
///
/// Consecutive pixels are 8-connected and the sequence runs from `p0` to `p1`.
pub fn bresenham(p0: (i64, i64), p1: (i64, i64)) -> Vec<(i64, i64)> {
    let (mut x0, mut y0) = p0;
    let (x1, y1) = p1;

    let dx = (x1 - x0).abs();
    let dy = -(y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    let mut points = Vec::with_capacity((dx.max(-dy) + 1) as usize);
    loop {
        points.push((x0, y0));
        if x0 == x1 && y0 == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x0 += sx;
        }
        if e2 <= dx {
            err += dx;
            y0 += sy;
        }
    }
    points
}
