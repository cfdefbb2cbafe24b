/// Broad category of a [`SpatialError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The input has the wrong dimensions.
    Shape,
    /// The input has the right shape but a value the operation cannot accept.
    Value,
    /// A strict validity check rejected the input.
    Validation,
}

/// An error type for spatial algebra operations.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum SpatialError {
    /// A vector had the wrong number of elements.
    #[error("Expected a vector of length {expected}, got length {got}")]
    InvalidLength {
        /// Expected number of elements
        expected: usize,
        /// Actual number of elements
        got: usize,
    },

    /// A matrix had the wrong dimensions.
    #[error("Expected a matrix of shape {expected:?}, got shape {got:?}")]
    InvalidShape {
        /// Expected shape as (rows, cols), `None` meaning any size
        expected: (Option<usize>, Option<usize>),
        /// Actual shape as (rows, cols)
        got: (usize, usize),
    },

    /// Normalization of a vector or quaternion with (near) zero norm.
    #[error("Cannot normalize {0}: norm is zero")]
    ZeroNorm(&'static str),

    /// An unknown convention, order or unit name.
    #[error("Unknown {kind} '{name}'")]
    InvalidConvention {
        /// What was being parsed
        kind: &'static str,
        /// The rejected name
        name: String,
    },

    /// A scalar argument outside the supported domain.
    #[error("{name} = {value} is outside the supported range {range}")]
    OutOfRange {
        /// Argument name
        name: &'static str,
        /// Offending value, as f64
        value: f64,
        /// Human readable valid range
        range: &'static str,
    },

    /// A transform could not be inverted at a singular configuration.
    #[error("Singular configuration: {0}")]
    Singular(&'static str),

    /// Strict check failed: matrix is not skew-symmetric.
    #[error("Matrix is not skew-symmetric (augmented: {augmented})")]
    NotSkew {
        /// Whether the augmented se(n) form was expected
        augmented: bool,
    },

    /// Strict check failed: matrix is not a rotation.
    #[error("Matrix is not a valid SO({dim}) rotation")]
    NotRotation {
        /// Dimension of the expected group
        dim: usize,
    },

    /// Strict check failed: matrix is not a homogeneous transform.
    #[error("Matrix is not a valid SE({dim}) homogeneous transform")]
    NotHomogeneous {
        /// Dimension of the expected group
        dim: usize,
    },

    /// Strict check failed: quaternion is not of unit length.
    #[error("Quaternion is not of unit length")]
    NotUnitQuaternion,
}

impl SpatialError {
    /// Category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            SpatialError::InvalidLength { .. } | SpatialError::InvalidShape { .. } => {
                ErrorKind::Shape
            }
            SpatialError::ZeroNorm(_)
            | SpatialError::InvalidConvention { .. }
            | SpatialError::OutOfRange { .. }
            | SpatialError::Singular(_) => ErrorKind::Value,
            SpatialError::NotSkew { .. }
            | SpatialError::NotRotation { .. }
            | SpatialError::NotHomogeneous { .. }
            | SpatialError::NotUnitQuaternion => ErrorKind::Validation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kind() {
        let err = SpatialError::InvalidLength {
            expected: 3,
            got: 2,
        };
        assert_eq!(err.kind(), ErrorKind::Shape);
        assert_eq!(SpatialError::ZeroNorm("vector").kind(), ErrorKind::Value);
        assert_eq!(
            SpatialError::NotRotation { dim: 3 }.kind(),
            ErrorKind::Validation
        );
    }

    #[test]
    fn test_error_message() {
        let err = SpatialError::InvalidConvention {
            kind: "rpy order",
            name: "abc".to_string(),
        };
        assert_eq!(err.to_string(), "Unknown rpy order 'abc'");
    }
}
