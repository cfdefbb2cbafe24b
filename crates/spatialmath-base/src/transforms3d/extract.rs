use super::{eul2r, exp2r, lie::log_so3, rpy2r};
use crate::{
    argcheck::fromunit,
    config::{AngVelRepr, AngleUnit, EulerOptions, RpyOptions, RpyOrder, DEFAULT_TOL},
    matrix::{Mat3, Mat4, Vec3},
    scalar::Scalar,
    transforms_nd::{rt2tr, tr2rt},
    vectors::norm,
};

/// Whether `|x|` is within tolerance of one, the gimbal-lock test for a sine.
#[inline]
fn at_gimbal_lock<T: Scalar>(x: T) -> bool {
    (x.abs() - T::one()).abs() < T::tol_eps(DEFAULT_TOL)
}

/// Roll-pitch-yaw angles `[roll, pitch, yaw]` of a rotation.
///
/// Pitch is returned in `[-π/2, π/2]`, roll and yaw in `[-π, π]`. Both ends of the
/// interval occur, depending on the sign of a zero entry of `r`.
///
/// At gimbal lock (`pitch = ±π/2`) roll and yaw rotate about the same axis and only their
/// sum or difference is defined; roll is then set to zero and the whole rotation is
/// attributed to yaw.
pub fn tr2rpy<T: Scalar>(r: &Mat3<T>, opts: &RpyOptions) -> Vec3<T> {
    let [roll, pitch, yaw] = match opts.order {
        RpyOrder::Zyx => {
            let pitch = (-r[2][0]).atan2(r[0][0].hypot(r[1][0]));
            if at_gimbal_lock(r[2][0]) {
                log::debug!("tr2rpy: gimbal lock in zyx order, roll set to zero");
                let yaw = if r[2][0] < T::zero() {
                    (-r[0][1]).atan2(r[0][2])
                } else {
                    (-r[0][1]).atan2(-r[0][2])
                };
                [T::zero(), pitch, yaw]
            } else {
                [r[2][1].atan2(r[2][2]), pitch, r[1][0].atan2(r[0][0])]
            }
        }
        RpyOrder::Xyz => {
            let pitch = r[0][2].atan2(r[0][0].hypot(r[0][1]));
            if at_gimbal_lock(r[0][2]) {
                log::debug!("tr2rpy: gimbal lock in xyz order, roll set to zero");
                let yaw = if r[0][2] > T::zero() {
                    r[2][1].atan2(r[1][1])
                } else {
                    (-r[1][0]).atan2(r[2][0])
                };
                [T::zero(), pitch, yaw]
            } else {
                [(-r[0][1]).atan2(r[0][0]), pitch, (-r[1][2]).atan2(r[2][2])]
            }
        }
        RpyOrder::Yxz => {
            let pitch = (-r[1][2]).atan2(r[1][0].hypot(r[1][1]));
            if at_gimbal_lock(r[1][2]) {
                log::debug!("tr2rpy: gimbal lock in yxz order, roll set to zero");
                let yaw = if r[1][2] < T::zero() {
                    r[0][1].atan2(r[0][0])
                } else {
                    (-r[0][1]).atan2(r[0][0])
                };
                [T::zero(), pitch, yaw]
            } else {
                [r[1][0].atan2(r[1][1]), pitch, r[0][2].atan2(r[2][2])]
            }
        }
    };
    [roll, pitch, yaw].map(|a| fromunit(a, opts.unit))
}

/// ZYZ Euler angles `[φ, θ, ψ]` of a rotation.
///
/// `θ` is returned in `[0, π]`, or in `[-π, 0]` with `opts.flip`, which selects the other
/// of the two solutions.
///
/// When `θ` is `0` or `π` the first and last rotations share an axis; `φ` is then set to
/// zero and the whole rotation about z is attributed to `ψ`.
pub fn tr2eul<T: Scalar>(r: &Mat3<T>, opts: &EulerOptions) -> Vec3<T> {
    let tol = T::tol_eps(DEFAULT_TOL);
    let phi = if r[0][2].abs() < tol && r[1][2].abs() < tol {
        log::debug!("tr2eul: singular at theta = 0 or pi, phi set to zero");
        T::zero()
    } else if opts.flip {
        (-r[1][2]).atan2(-r[0][2])
    } else {
        r[1][2].atan2(r[0][2])
    };
    let (sp, cp) = phi.sin_cos();
    let theta = (cp * r[0][2] + sp * r[1][2]).atan2(r[2][2]);
    let psi = (-sp * r[0][0] + cp * r[1][0]).atan2(-sp * r[0][1] + cp * r[1][1]);
    [phi, theta, psi].map(|a| fromunit(a, opts.unit))
}

/// Angle and unit axis of a rotation.
///
/// The angle is in `[0, π]` in the requested unit. The identity gives a zero angle and a
/// zero axis.
pub fn tr2angvec<T: Scalar>(r: &Mat3<T>, unit: AngleUnit) -> (T, Vec3<T>) {
    let w = log_so3(r, DEFAULT_TOL);
    let theta = norm(&w);
    if theta < T::tol_eps(DEFAULT_TOL) {
        return (T::zero(), [T::zero(); 3]);
    }
    (fromunit(theta, unit), w.map(|x| x / theta))
}

/// Rotation parameters of `r` in a minimal representation, in radians.
pub(super) fn rot2params<T: Scalar>(r: &Mat3<T>, repr: AngVelRepr) -> Vec3<T> {
    match repr {
        AngVelRepr::Rpy(order) => tr2rpy(
            r,
            &RpyOptions {
                order,
                unit: AngleUnit::Rad,
            },
        ),
        AngVelRepr::Eul => tr2eul(r, &EulerOptions::default()),
        AngVelRepr::Exp => log_so3(r, DEFAULT_TOL),
    }
}

/// Rotation from parameters in a minimal representation, in radians.
pub(super) fn params2rot<T: Scalar>(gamma: &Vec3<T>, repr: AngVelRepr) -> Mat3<T> {
    match repr {
        AngVelRepr::Rpy(order) => rpy2r(
            gamma,
            &RpyOptions {
                order,
                unit: AngleUnit::Rad,
            },
        ),
        AngVelRepr::Eul => eul2r(gamma, AngleUnit::Rad),
        AngVelRepr::Exp => exp2r(gamma),
    }
}

/// Pose as the 6-vector `[x, y, z, Γ]`, where `Γ` are rotation parameters in radians.
pub fn tr2x<T: Scalar>(t: &Mat4<T>, repr: AngVelRepr) -> [T; 6] {
    let (r, p) = tr2rt(t);
    let g = rot2params(&r, repr);
    [p[0], p[1], p[2], g[0], g[1], g[2]]
}

/// Inverse of [`tr2x`].
pub fn x2tr<T: Scalar>(x: &[T; 6], repr: AngVelRepr) -> Mat4<T> {
    let r = params2rot(&[x[3], x[4], x[5]], repr);
    rt2tr(&r, &[x[0], x[1], x[2]])
}
