//! # SO(3) and SE(3)
//!
//! Rotations are 3x3 matrices, poses are 4x4 homogeneous matrices `[[R, t], [0, 1]]`, both
//! row-major plain arrays.
//!
//! ## Parameterizations
//!
//! | Parameters         | Build            | Extract        | Singular at                 |
//! |--------------------|------------------|----------------|-----------------------------|
//! | roll-pitch-yaw     | [`rpy2r`]        | [`tr2rpy`]     | pitch = ±π/2 (all orders)   |
//! | ZYZ Euler          | [`eul2r`]        | [`tr2eul`]     | θ = 0, π                    |
//! | angle-axis         | [`angvec2r`]     | [`tr2angvec`]  | θ = 0 (axis undefined)      |
//! | exponential coords | [`exp2r`]        | [`trlog_rot`]  | \|w\| = π (sign of axis)    |
//! | orientation/approach | [`oa2r`]       |                | o parallel to a             |
//!
//! At a singularity the extraction functions return a deterministic tie-broken solution
//! rather than failing. Each tie-break is documented on the function.
//!
//! ## Lie group
//!
//! [`trlog`] and [`trexp`] are closed form. The SO(3) logarithm has three branches:
//! near the identity the result is read off the antisymmetric part, at intermediate angles
//! the axis is `vex(R)/sin θ`, and above `π/2` the axis is recovered from the symmetric
//! part `(R + Rᵀ)/2` where `sin θ` no longer carries the information.
//!
//! ## Velocity transforms
//!
//! Every 3x3 Jacobian `A(Γ)` in this module maps parameter rates to world-frame angular
//! velocity, `ω = A(Γ)·Γ̇` with `[ω]× = Ṙ·Rᵀ`.

mod construct;
mod extract;
mod jacobians;
mod lie;

pub use construct::*;
pub use extract::*;
pub use jacobians::*;
pub use lie::*;
