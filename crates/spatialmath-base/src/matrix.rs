//! Row-major fixed-size matrices over plain arrays.
//!
//! `m[i][j]` is the element in row `i`, column `j`. The helpers here are the only dense
//! linear algebra the transform code needs; they are written over const generics so that
//! 2D and 3D code share them.

use crate::scalar::Scalar;

/// 2-vector.
pub type Vec2<T> = [T; 2];
/// 3-vector.
pub type Vec3<T> = [T; 3];
/// 2x2 matrix.
pub type Mat2<T> = [[T; 2]; 2];
/// 3x3 matrix.
pub type Mat3<T> = [[T; 3]; 3];
/// 4x4 matrix.
pub type Mat4<T> = [[T; 4]; 4];
/// 6x6 matrix.
pub type Mat6<T> = [[T; 6]; 6];
/// se(3) twist ordered `[vx, vy, vz, wx, wy, wz]`.
pub type Twist<T> = [T; 6];

/// Identity matrix.
#[inline]
pub fn eye<T: Scalar, const N: usize>() -> [[T; N]; N] {
    let mut m = [[T::zero(); N]; N];
    for (i, row) in m.iter_mut().enumerate() {
        row[i] = T::one();
    }
    m
}

/// Matrix product `a · b`.
pub fn matmul<T: Scalar, const R: usize, const K: usize, const C: usize>(
    a: &[[T; K]; R],
    b: &[[T; C]; K],
) -> [[T; C]; R] {
    let mut out = [[T::zero(); C]; R];
    for i in 0..R {
        for j in 0..C {
            let mut acc = T::zero();
            for k in 0..K {
                acc = acc + a[i][k] * b[k][j];
            }
            out[i][j] = acc;
        }
    }
    out
}

/// Matrix-vector product `a · v`.
pub fn matvec<T: Scalar, const R: usize, const C: usize>(a: &[[T; C]; R], v: &[T; C]) -> [T; R] {
    let mut out = [T::zero(); R];
    for (o, row) in out.iter_mut().zip(a.iter()) {
        *o = row
            .iter()
            .zip(v.iter())
            .fold(T::zero(), |acc, (&x, &y)| acc + x * y);
    }
    out
}

/// Transpose.
pub fn transpose<T: Scalar, const R: usize, const C: usize>(a: &[[T; C]; R]) -> [[T; R]; C] {
    let mut out = [[T::zero(); R]; C];
    for (i, row) in a.iter().enumerate() {
        for (j, &x) in row.iter().enumerate() {
            out[j][i] = x;
        }
    }
    out
}

/// Element-wise sum.
pub fn add<T: Scalar, const R: usize, const C: usize>(
    a: &[[T; C]; R],
    b: &[[T; C]; R],
) -> [[T; C]; R] {
    let mut out = *a;
    for (orow, brow) in out.iter_mut().zip(b.iter()) {
        for (o, &x) in orow.iter_mut().zip(brow.iter()) {
            *o = *o + x;
        }
    }
    out
}

/// Element-wise difference.
pub fn sub<T: Scalar, const R: usize, const C: usize>(
    a: &[[T; C]; R],
    b: &[[T; C]; R],
) -> [[T; C]; R] {
    let mut out = *a;
    for (orow, brow) in out.iter_mut().zip(b.iter()) {
        for (o, &x) in orow.iter_mut().zip(brow.iter()) {
            *o = *o - x;
        }
    }
    out
}

/// Multiply every element by `s`.
pub fn scale<T: Scalar, const R: usize, const C: usize>(a: &[[T; C]; R], s: T) -> [[T; C]; R] {
    let mut out = *a;
    for row in out.iter_mut() {
        for x in row.iter_mut() {
            *x = *x * s;
        }
    }
    out
}

/// Frobenius norm.
pub fn norm_fro<T: Scalar, const R: usize, const C: usize>(a: &[[T; C]; R]) -> T {
    a.iter()
        .flat_map(|row| row.iter())
        .fold(T::zero(), |acc, &x| acc + x * x)
        .sqrt()
}

/// Sum of the diagonal.
pub fn trace<T: Scalar, const N: usize>(a: &[[T; N]; N]) -> T {
    (0..N).fold(T::zero(), |acc, i| acc + a[i][i])
}

/// Determinant by Gaussian elimination with partial pivoting.
pub fn det<T: Scalar, const N: usize>(a: &[[T; N]; N]) -> T {
    let mut m = *a;
    let mut d = T::one();
    for col in 0..N {
        let mut pivot = col;
        for row in (col + 1)..N {
            if m[row][col].abs() > m[pivot][col].abs() {
                pivot = row;
            }
        }
        if m[pivot][col] == T::zero() {
            return T::zero();
        }
        if pivot != col {
            m.swap(pivot, col);
            d = -d;
        }
        d = d * m[col][col];
        for row in (col + 1)..N {
            let f = m[row][col] / m[col][col];
            for k in col..N {
                m[row][k] = m[row][k] - f * m[col][k];
            }
        }
    }
    d
}

/// Inverse of a 3x3 matrix, `None` when the determinant magnitude is below `tol`.
pub fn inv3<T: Scalar>(a: &Mat3<T>, tol: T) -> Option<Mat3<T>> {
    let c00 = a[1][1] * a[2][2] - a[1][2] * a[2][1];
    let c01 = a[1][2] * a[2][0] - a[1][0] * a[2][2];
    let c02 = a[1][0] * a[2][1] - a[1][1] * a[2][0];
    let d = a[0][0] * c00 + a[0][1] * c01 + a[0][2] * c02;
    if d.abs() < tol {
        return None;
    }
    let inv_d = T::one() / d;
    Some([
        [
            c00 * inv_d,
            (a[0][2] * a[2][1] - a[0][1] * a[2][2]) * inv_d,
            (a[0][1] * a[1][2] - a[0][2] * a[1][1]) * inv_d,
        ],
        [
            c01 * inv_d,
            (a[0][0] * a[2][2] - a[0][2] * a[2][0]) * inv_d,
            (a[0][2] * a[1][0] - a[0][0] * a[1][2]) * inv_d,
        ],
        [
            c02 * inv_d,
            (a[0][1] * a[2][0] - a[0][0] * a[2][1]) * inv_d,
            (a[0][0] * a[1][1] - a[0][1] * a[1][0]) * inv_d,
        ],
    ])
}

/// Column `j` of a matrix.
#[inline]
pub fn col<T: Scalar, const R: usize, const C: usize>(a: &[[T; C]; R], j: usize) -> [T; R] {
    let mut out = [T::zero(); R];
    for (o, row) in out.iter_mut().zip(a.iter()) {
        *o = row[j];
    }
    out
}

/// Build a 3x3 matrix from its columns.
#[inline]
pub fn from_cols3<T: Scalar>(c0: &Vec3<T>, c1: &Vec3<T>, c2: &Vec3<T>) -> Mat3<T> {
    [
        [c0[0], c1[0], c2[0]],
        [c0[1], c1[1], c2[1]],
        [c0[2], c1[2], c2[2]],
    ]
}

/// Cast every element to another scalar type through f64.
pub fn cast<T: Scalar, U: Scalar, const R: usize, const C: usize>(
    a: &[[T; C]; R],
) -> [[U; C]; R] {
    let mut out = [[U::zero(); C]; R];
    for (orow, arow) in out.iter_mut().zip(a.iter()) {
        for (o, &x) in orow.iter_mut().zip(arow.iter()) {
            *o = U::from_f64(x.to_f64().unwrap_or(f64::NAN));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_matmul_identity() {
        let a = [[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 10.0]];
        assert_eq!(matmul(&a, &eye::<f64, 3>()), a);
        assert_eq!(matmul(&eye::<f64, 3>(), &a), a);
    }

    #[test]
    fn test_matmul_rectangular() {
        let a = [[1.0, 2.0]];
        let b = [[3.0], [4.0]];
        assert_eq!(matmul(&a, &b), [[11.0]]);
        assert_eq!(matmul(&b, &a), [[3.0, 6.0], [4.0, 8.0]]);
    }

    #[test]
    fn test_det() {
        let a = [[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 10.0]];
        assert_relative_eq!(det(&a), -3.0, epsilon = 1e-12);
        assert_eq!(det(&[[0.0, 1.0], [1.0, 0.0]]), -1.0);
        assert_eq!(det(&[[1.0, 2.0], [2.0, 4.0]]), 0.0);
    }

    #[test]
    fn test_inv3() {
        let a = [[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 10.0]];
        let inv = inv3(&a, 1e-12).unwrap();
        let id = matmul(&a, &inv);
        for i in 0..3 {
            for j in 0..3 {
                assert_relative_eq!(id[i][j], if i == j { 1.0 } else { 0.0 }, epsilon = 1e-12);
            }
        }
        assert!(inv3(&[[1.0, 2.0, 3.0], [2.0, 4.0, 6.0], [0.0, 0.0, 1.0]], 1e-12).is_none());
    }

    #[test]
    fn test_transpose_trace_norm() {
        let a = [[1.0, 2.0], [3.0, 4.0]];
        assert_eq!(transpose(&a), [[1.0, 3.0], [2.0, 4.0]]);
        assert_eq!(trace(&a), 5.0);
        assert_relative_eq!(norm_fro(&a), 30.0f64.sqrt());
    }

    #[test]
    fn test_cols() {
        let m = from_cols3(&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0], &[7.0, 8.0, 9.0]);
        assert_eq!(m[0], [1.0, 4.0, 7.0]);
        assert_eq!(col(&m, 1), [4.0, 5.0, 6.0]);
        assert_eq!(matvec(&m, &[1.0, 0.0, 0.0]), [1.0, 2.0, 3.0]);
    }
}
