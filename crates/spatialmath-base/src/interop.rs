//! Conversions between the plain arrays of this crate and `glam` double precision types.
//!
//! `glam` matrices are column-major and its quaternions are ordered `xyzw`; the arrays here
//! are row-major and quaternions are `[s, vx, vy, vz]`. Every conversion is exact.

use glam::{DMat3, DMat4, DQuat, DVec3};

use crate::{
    matrix::{transpose, Mat3, Mat4, Vec3},
    quaternion::Quaternion,
};

/// Row-major 3x3 array to `DMat3`.
#[inline]
pub fn to_dmat3(m: &Mat3<f64>) -> DMat3 {
    DMat3::from_cols_array_2d(&transpose(m))
}

/// `DMat3` to a row-major 3x3 array.
#[inline]
pub fn from_dmat3(m: &DMat3) -> Mat3<f64> {
    transpose(&m.to_cols_array_2d())
}

/// Row-major 4x4 array to `DMat4`.
#[inline]
pub fn to_dmat4(m: &Mat4<f64>) -> DMat4 {
    DMat4::from_cols_array_2d(&transpose(m))
}

/// `DMat4` to a row-major 4x4 array.
#[inline]
pub fn from_dmat4(m: &DMat4) -> Mat4<f64> {
    transpose(&m.to_cols_array_2d())
}

/// Quaternion `[s, vx, vy, vz]` to `DQuat`.
#[inline]
pub fn to_dquat(q: &Quaternion<f64>) -> DQuat {
    DQuat::from_xyzw(q[1], q[2], q[3], q[0])
}

/// `DQuat` to a quaternion `[s, vx, vy, vz]`.
#[inline]
pub fn from_dquat(q: &DQuat) -> Quaternion<f64> {
    [q.w, q.x, q.y, q.z]
}

/// 3-vector to `DVec3`.
#[inline]
pub fn to_dvec3(v: &Vec3<f64>) -> DVec3 {
    DVec3::from_array(*v)
}

/// `DVec3` to a 3-vector.
#[inline]
pub fn from_dvec3(v: &DVec3) -> Vec3<f64> {
    v.to_array()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AngleUnit, RpyOptions};
    use crate::matrix::matvec;
    use crate::quaternion::{q2r, qvmul, r2q};
    use crate::transforms3d::{rotx, rpy2r};
    use crate::transforms_nd::{homtrans, rt2tr};
    use approx::assert_relative_eq;

    #[test]
    fn test_dmat3_layout() {
        let r = rotx(0.3, AngleUnit::Rad);
        let g = to_dmat3(&r);
        // glam indexes columns first
        assert_eq!(g.col(2).y, r[1][2]);
        assert_eq!(g.y_axis.z, r[2][1]);
        assert_eq!(from_dmat3(&g), r);

        let v = [0.1, -0.4, 2.0];
        let p = g * to_dvec3(&v);
        let expected = matvec(&r, &v);
        assert_relative_eq!(p.x, expected[0], epsilon = 1e-15);
        assert_relative_eq!(p.y, expected[1], epsilon = 1e-15);
        assert_relative_eq!(p.z, expected[2], epsilon = 1e-15);
    }

    #[test]
    fn test_dmat4_points() {
        let t = rt2tr(
            &rpy2r(&[0.1, 0.2, 0.3], &RpyOptions::default()),
            &[1.0, 2.0, 3.0],
        );
        let g = to_dmat4(&t);
        assert_eq!(from_dmat4(&g), t);
        let p = [0.5, -1.0, 0.25];
        let gp = from_dvec3(&g.transform_point3(to_dvec3(&p)));
        let ep = homtrans(&t, &p);
        for i in 0..3 {
            assert_relative_eq!(gp[i], ep[i], epsilon = 1e-14);
        }
    }

    #[test]
    fn test_dquat_agrees() {
        let r = rpy2r(&[0.4, -0.7, 1.9], &RpyOptions::default());
        let q = r2q(&r);
        let g = to_dquat(&q);
        assert_eq!(from_dquat(&g), q);

        let gm = from_dmat3(&DMat3::from_quat(g));
        let qm = q2r(&q);
        for i in 0..3 {
            for j in 0..3 {
                assert_relative_eq!(gm[i][j], qm[i][j], epsilon = 1e-14);
            }
        }

        let v = [1.0, 2.0, 3.0];
        let gv = from_dvec3(&(g * to_dvec3(&v)));
        let qv = qvmul(&q, &v);
        for i in 0..3 {
            assert_relative_eq!(gv[i], qv[i], epsilon = 1e-14);
        }
    }
}
