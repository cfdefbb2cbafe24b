use super::extract::rot2params;
use crate::{
    config::{AngVelRepr, RpyOrder, DEFAULT_TOL},
    error::SpatialError,
    matrix::{add, eye, inv3, matmul, scale, Mat3, Mat4, Mat6, Vec3},
    scalar::Scalar,
    transforms_nd::{skew, t2r},
    vectors::{dot, norm},
};

/// Block diagonal 6x6 matrix `diag(a, b)`.
fn block_diag<T: Scalar>(a: &Mat3<T>, b: &Mat3<T>) -> Mat6<T> {
    let mut m = [[T::zero(); 6]; 6];
    for i in 0..3 {
        m[i][..3].copy_from_slice(&a[i]);
        m[i + 3][3..].copy_from_slice(&b[i]);
    }
    m
}

/// Angle, in radians, below which the left Jacobian coefficients come from their series.
///
/// The closed forms of `b`, `a'/θ` and `b'/θ` lose about `eps/θ²` to cancellation. Eight
/// series terms stay within an ulp up to one radian, where the closed forms are accurate.
const SERIES_ANGLE: f64 = 1.0;

// Taylor coefficients in θ² of a, b, a'/θ and b'/θ.
const A_SERIES: [f64; 8] = [
    1.0 / 2.0,
    -1.0 / 24.0,
    1.0 / 720.0,
    -1.0 / 40320.0,
    1.0 / 3628800.0,
    -1.0 / 479001600.0,
    1.0 / 87178291200.0,
    -1.0 / 20922789888000.0,
];
const B_SERIES: [f64; 8] = [
    1.0 / 6.0,
    -1.0 / 120.0,
    1.0 / 5040.0,
    -1.0 / 362880.0,
    1.0 / 39916800.0,
    -1.0 / 6227020800.0,
    1.0 / 1307674368000.0,
    -1.0 / 355687428096000.0,
];
const DA_SERIES: [f64; 8] = [
    -1.0 / 12.0,
    1.0 / 180.0,
    -1.0 / 6720.0,
    1.0 / 453600.0,
    -1.0 / 47900160.0,
    1.0 / 7264857600.0,
    -1.0 / 1494484992000.0,
    1.0 / 400148356608000.0,
];
const DB_SERIES: [f64; 8] = [
    -1.0 / 60.0,
    1.0 / 1260.0,
    -1.0 / 60480.0,
    1.0 / 4989600.0,
    -1.0 / 622702080.0,
    1.0 / 108972864000.0,
    -1.0 / 25406244864000.0,
    1.0 / 7602818775552000.0,
];

/// Coefficients of the left Jacobian `A = I + a·W + b·W²` and their derivatives divided
/// by the angle, `(a, b, a'/θ, b'/θ)`.
fn left_jac_coeffs<T: Scalar>(theta: T) -> (T, T, T, T) {
    if theta < T::from_f64(SERIES_ANGLE) {
        let t2 = theta * theta;
        let poly = |c: &[f64; 8]| {
            c.iter()
                .rev()
                .fold(T::zero(), |acc, &k| acc * t2 + T::from_f64(k))
        };
        return (
            poly(&A_SERIES),
            poly(&B_SERIES),
            poly(&DA_SERIES),
            poly(&DB_SERIES),
        );
    }
    let two = T::from_f64(2.0);
    let s = theta.sin();
    let half_sin = (theta / two).sin();
    let one_c = two * half_sin * half_sin;
    let t2 = theta * theta;
    let t4 = t2 * t2;
    (
        one_c / t2,
        (theta - s) / (t2 * theta),
        (theta * s - two * one_c) / t4,
        one_c / t4 - T::from_f64(3.0) * (theta - s) / (t4 * theta),
    )
}

/// Velocity Jacobian `diag(R, R)` mapping a spatial velocity in the frame of `t` to the
/// world frame.
pub fn tr2jac<T: Scalar>(t: &Mat4<T>) -> Mat6<T> {
    let r = t2r(t);
    block_diag(&r, &r)
}

/// Jacobian mapping roll-pitch-yaw rates to world-frame angular velocity.
///
/// Angles are `[roll, pitch, yaw]` in radians. Singular at `pitch = ±π/2` for every order.
pub fn rpy2jac<T: Scalar>(rpy: &Vec3<T>, order: RpyOrder) -> Mat3<T> {
    let (sp, cp) = rpy[1].sin_cos();
    let (sy, cy) = rpy[2].sin_cos();
    let (z, o) = (T::zero(), T::one());
    match order {
        RpyOrder::Zyx => [[cp * cy, -sy, z], [cp * sy, cy, z], [-sp, z, o]],
        RpyOrder::Xyz => [[sp, z, o], [-cp * sy, cy, z], [cp * cy, sy, z]],
        RpyOrder::Yxz => [[cp * sy, cy, z], [-sp, z, o], [cp * cy, -sy, z]],
    }
}

/// Jacobian mapping ZYZ Euler angle rates to world-frame angular velocity.
///
/// Angles are `[φ, θ, ψ]` in radians. Singular at `θ = 0` and `θ = π`.
pub fn eul2jac<T: Scalar>(eul: &Vec3<T>) -> Mat3<T> {
    let (sf, cf) = eul[0].sin_cos();
    let (st, ct) = eul[1].sin_cos();
    let (z, o) = (T::zero(), T::one());
    [[z, -sf, cf * st], [z, cf, sf * st], [o, z, ct]]
}

/// Jacobian mapping exponential coordinate rates to world-frame angular velocity.
///
/// This is the left Jacobian of SO(3),
///
/// ```text
/// A(v) = I + (1 - cos θ)/θ² · [v]× + (θ - sin θ)/θ³ · [v]×²,   θ = |v|
/// ```
///
/// singular at `θ = 2πk`, `k ≥ 1`.
pub fn exp2jac<T: Scalar>(v: &Vec3<T>) -> Mat3<T> {
    let w = skew(v);
    let w2 = matmul(&w, &w);
    let (a, b, _, _) = left_jac_coeffs(norm(v));
    add(&add(&eye(), &scale(&w, a)), &scale(&w2, b))
}

/// 3x3 Jacobian `A(Γ)` for the given representation.
fn param_jac<T: Scalar>(gamma: &Vec3<T>, repr: AngVelRepr) -> Mat3<T> {
    match repr {
        AngVelRepr::Rpy(order) => rpy2jac(gamma, order),
        AngVelRepr::Eul => eul2jac(gamma),
        AngVelRepr::Exp => exp2jac(gamma),
    }
}

/// Analytical Jacobian transform for a rotation, `diag(I, A(Γ))` where `Γ` are the
/// parameters of `r` in the given representation.
///
/// Maps `[ṫ, Γ̇]` to the spatial velocity `[v, ω]`.
pub fn rot2jac<T: Scalar>(r: &Mat3<T>, repr: AngVelRepr) -> Mat6<T> {
    let gamma = rot2params(r, repr);
    block_diag(&eye(), &param_jac(&gamma, repr))
}

/// Angular velocity transform `A(Γ)` with `ω = A·Γ̇`, or its inverse with `Γ̇ = A⁻¹·ω`.
///
/// Angles are in radians. The inverse fails with [`SpatialError::Singular`] at the
/// singularities of the representation.
pub fn angvelxform<T: Scalar>(
    gamma: &Vec3<T>,
    repr: AngVelRepr,
    inverse: bool,
) -> Result<Mat3<T>, SpatialError> {
    let a = param_jac(gamma, repr);
    if !inverse {
        return Ok(a);
    }
    inv3(&a, T::tol_eps(DEFAULT_TOL)).ok_or_else(|| {
        log::debug!("angvelxform: {:?} singular at {:?}", repr, gamma);
        SpatialError::Singular("angular velocity transform")
    })
}

/// 6x6 form of [`angvelxform`], `diag(I, A)` or `diag(I, A⁻¹)`.
pub fn angvelxform_full<T: Scalar>(
    gamma: &Vec3<T>,
    repr: AngVelRepr,
    inverse: bool,
) -> Result<Mat6<T>, SpatialError> {
    Ok(block_diag(&eye(), &angvelxform(gamma, repr, inverse)?))
}

/// Time derivative `Ȧ` of the angular velocity transform, given parameters `Γ` and their
/// rates `Γ̇`, so that `ω̇ = A·Γ̈ + Ȧ·Γ̇`.
pub fn angvelxform_dot<T: Scalar>(gamma: &Vec3<T>, gamma_d: &Vec3<T>, repr: AngVelRepr) -> Mat3<T> {
    let z = T::zero();
    match repr {
        AngVelRepr::Rpy(order) => {
            let (sp, cp) = gamma[1].sin_cos();
            let (sy, cy) = gamma[2].sin_cos();
            let (pd, yd) = (gamma_d[1], gamma_d[2]);
            match order {
                RpyOrder::Zyx => [
                    [-sp * pd * cy - cp * sy * yd, -cy * yd, z],
                    [-sp * pd * sy + cp * cy * yd, -sy * yd, z],
                    [-cp * pd, z, z],
                ],
                RpyOrder::Xyz => [
                    [cp * pd, z, z],
                    [sp * pd * sy - cp * cy * yd, -sy * yd, z],
                    [-sp * pd * cy - cp * sy * yd, cy * yd, z],
                ],
                RpyOrder::Yxz => [
                    [-sp * pd * sy + cp * cy * yd, -sy * yd, z],
                    [-cp * pd, z, z],
                    [-sp * pd * cy - cp * sy * yd, -cy * yd, z],
                ],
            }
        }
        AngVelRepr::Eul => {
            let (sf, cf) = gamma[0].sin_cos();
            let (st, ct) = gamma[1].sin_cos();
            let (fd, td) = (gamma_d[0], gamma_d[1]);
            [
                [z, -cf * fd, -sf * fd * st + cf * ct * td],
                [z, -sf * fd, cf * fd * st + sf * ct * td],
                [z, z, -st * td],
            ]
        }
        AngVelRepr::Exp => exp2jac_dot(gamma, gamma_d),
    }
}

/// Derivative of [`exp2jac`] along `v̇`.
///
/// With `A = I + a(θ)·W + b(θ)·W²`, `Ȧ = ȧ·W + a·Ẇ + ḃ·W² + b·(Ẇ·W + W·Ẇ)`, where
/// `ȧ = (a'/θ)·(v·v̇)` and likewise for `ḃ`.
fn exp2jac_dot<T: Scalar>(v: &Vec3<T>, vd: &Vec3<T>) -> Mat3<T> {
    let w = skew(v);
    let wd = skew(vd);
    let sym = add(&matmul(&wd, &w), &matmul(&w, &wd));
    let (a, b, da_t, db_t) = left_jac_coeffs(norm(v));
    let rate = dot(v, vd);

    let mut out = scale(&w, da_t * rate);
    out = add(&out, &scale(&wd, a));
    out = add(&out, &scale(&matmul(&w, &w), db_t * rate));
    add(&out, &scale(&sym, b))
}
