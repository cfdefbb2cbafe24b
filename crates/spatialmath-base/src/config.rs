//! Options accepted by angle, validity and interpolation functions.
//!
//! Each struct implements [`Default`] with the values documented on its fields, so callers
//! usually write `RpyOptions { unit: AngleUnit::Deg, ..Default::default() }`.

use std::str::FromStr;

use crate::error::SpatialError;

/// Default tolerance, in multiples of machine epsilon.
pub const DEFAULT_TOL: f64 = 20.0;

/// Unit of angles passed to and returned from angle-accepting functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AngleUnit {
    /// Radians.
    #[default]
    Rad,
    /// Degrees.
    Deg,
}

impl FromStr for AngleUnit {
    type Err = SpatialError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "rad" => Ok(AngleUnit::Rad),
            "deg" => Ok(AngleUnit::Deg),
            _ => Err(SpatialError::InvalidConvention {
                kind: "angle unit",
                name: s.to_string(),
            }),
        }
    }
}

/// Order in which roll, pitch and yaw rotations are composed.
///
/// For angles `[roll, pitch, yaw]` the rotation matrix is
///
/// * `Zyx`: `Rz(yaw) · Ry(pitch) · Rx(roll)`, the vehicle convention (x forward).
/// * `Xyz`: `Rx(yaw) · Ry(pitch) · Rz(roll)`, the arm convention (z along the tool).
/// * `Yxz`: `Ry(yaw) · Rx(pitch) · Rz(roll)`, the camera convention (z along the optical axis).
///
/// All three are singular when `pitch = ±π/2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RpyOrder {
    /// Yaw about z, pitch about y, roll about x.
    #[default]
    Zyx,
    /// Yaw about x, pitch about y, roll about z.
    Xyz,
    /// Yaw about y, pitch about x, roll about z.
    Yxz,
}

impl FromStr for RpyOrder {
    type Err = SpatialError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "zyx" | "vehicle" => Ok(RpyOrder::Zyx),
            "xyz" | "arm" => Ok(RpyOrder::Xyz),
            "yxz" | "camera" => Ok(RpyOrder::Yxz),
            _ => Err(SpatialError::InvalidConvention {
                kind: "rpy order",
                name: s.to_string(),
            }),
        }
    }
}

/// Options for roll-pitch-yaw construction and extraction.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RpyOptions {
    /// Composition order, default [`RpyOrder::Zyx`].
    pub order: RpyOrder,
    /// Angle unit, default radians.
    pub unit: AngleUnit,
}

/// Options for ZYZ Euler angle construction and extraction.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EulerOptions {
    /// Angle unit, default radians.
    pub unit: AngleUnit,
    /// Extract the solution with the first angle in the opposite half plane, default false.
    pub flip: bool,
}

/// Tolerance and input validation used by checks and Lie-group operations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CheckOptions {
    /// Tolerance in multiples of machine epsilon, default [`DEFAULT_TOL`].
    pub tol: f64,
    /// Validate inputs before operating on them, default true.
    pub check: bool,
}

impl Default for CheckOptions {
    fn default() -> Self {
        Self {
            tol: DEFAULT_TOL,
            check: true,
        }
    }
}

/// Options for spherical linear interpolation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlerpOptions {
    /// Take the shorter of the two great-circle arcs, default true.
    pub shortest: bool,
    /// Angle below which linear interpolation is used, in multiples of machine epsilon,
    /// default [`DEFAULT_TOL`].
    pub tol: f64,
}

impl Default for SlerpOptions {
    fn default() -> Self {
        Self {
            shortest: true,
            tol: DEFAULT_TOL,
        }
    }
}

/// Minimal rotation parameterization used by velocity transforms and pose vectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AngVelRepr {
    /// Roll-pitch-yaw angles in the given order.
    Rpy(RpyOrder),
    /// ZYZ Euler angles.
    Eul,
    /// Exponential coordinates.
    Exp,
}

impl Default for AngVelRepr {
    fn default() -> Self {
        AngVelRepr::Rpy(RpyOrder::Xyz)
    }
}

impl FromStr for AngVelRepr {
    type Err = SpatialError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "rpy/zyx" => Ok(AngVelRepr::Rpy(RpyOrder::Zyx)),
            "rpy/xyz" => Ok(AngVelRepr::Rpy(RpyOrder::Xyz)),
            "rpy/yxz" => Ok(AngVelRepr::Rpy(RpyOrder::Yxz)),
            "eul" => Ok(AngVelRepr::Eul),
            "exp" => Ok(AngVelRepr::Exp),
            _ => Err(SpatialError::InvalidConvention {
                kind: "angular velocity representation",
                name: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_rpy_order_from_str() -> Result<(), SpatialError> {
        assert_eq!("zyx".parse::<RpyOrder>()?, RpyOrder::Zyx);
        assert_eq!("vehicle".parse::<RpyOrder>()?, RpyOrder::Zyx);
        assert_eq!("arm".parse::<RpyOrder>()?, RpyOrder::Xyz);
        assert_eq!("camera".parse::<RpyOrder>()?, RpyOrder::Yxz);
        Ok(())
    }

    #[test]
    fn test_invalid_names() {
        let err = "zzz".parse::<RpyOrder>().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Value);
        assert!("grad".parse::<AngleUnit>().is_err());
        assert!("rpy/zxz".parse::<AngVelRepr>().is_err());
    }

    #[test]
    fn test_defaults() {
        let opts = CheckOptions::default();
        assert_eq!(opts.tol, DEFAULT_TOL);
        assert!(opts.check);
        assert!(SlerpOptions::default().shortest);
        assert_eq!(RpyOptions::default().order, RpyOrder::Zyx);
        assert_eq!(AngleUnit::default(), AngleUnit::Rad);
        assert_eq!(
            "rpy/xyz".parse::<AngVelRepr>().unwrap(),
            AngVelRepr::default()
        );
    }
}
