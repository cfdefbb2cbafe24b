//! Shape checks for dynamically sized input.
//!
//! The transform functions take fixed-size arrays, so their shapes are checked by the type
//! system. Data arriving from elsewhere (files, other languages, flat buffers) comes as
//! slices; the functions here validate such data and move it into fixed-size arrays.

use crate::{config::AngleUnit, error::SpatialError, scalar::Scalar};

/// Convert a slice into a fixed-size vector.
///
/// Example:
///
/// ```
/// use spatialmath_base::argcheck::getvector;
///
/// let data = vec![1.0, 2.0, 3.0];
/// let v: [f64; 3] = getvector(&data).unwrap();
/// assert_eq!(v, [1.0, 2.0, 3.0]);
/// assert!(getvector::<f64, 4>(&data).is_err());
/// ```
pub fn getvector<T: Copy, const N: usize>(data: &[T]) -> Result<[T; N], SpatialError> {
    data.try_into().map_err(|_| SpatialError::InvalidLength {
        expected: N,
        got: data.len(),
    })
}

/// Test whether a slice has exactly `n` elements.
#[inline]
pub fn isvector<T>(data: &[T], n: usize) -> bool {
    data.len() == n
}

/// Strict form of [`isvector`].
pub fn assertvector<T>(data: &[T], n: usize) -> Result<(), SpatialError> {
    if isvector(data, n) {
        Ok(())
    } else {
        Err(SpatialError::InvalidLength {
            expected: n,
            got: data.len(),
        })
    }
}

/// Test whether every vector in a list has `n` elements.
pub fn isvectorlist<T, V: AsRef<[T]>>(data: &[V], n: usize) -> bool {
    data.iter().all(|v| v.as_ref().len() == n)
}

/// Test a shape against an expected shape, where `None` matches any size.
#[inline]
pub fn ismatrix(shape: (usize, usize), expected: (Option<usize>, Option<usize>)) -> bool {
    expected.0.map_or(true, |r| r == shape.0) && expected.1.map_or(true, |c| c == shape.1)
}

/// Strict form of [`ismatrix`].
pub fn assertmatrix(
    shape: (usize, usize),
    expected: (Option<usize>, Option<usize>),
) -> Result<(), SpatialError> {
    if ismatrix(shape, expected) {
        Ok(())
    } else {
        Err(SpatialError::InvalidShape {
            expected,
            got: shape,
        })
    }
}

/// Convert row-major flat data with a declared shape into a fixed-size matrix.
///
/// Both the declared shape and the data length must match `R x C`.
pub fn getmatrix<T: Scalar, const R: usize, const C: usize>(
    data: &[T],
    shape: (usize, usize),
) -> Result<[[T; C]; R], SpatialError> {
    assertmatrix(shape, (Some(R), Some(C)))?;
    if data.len() != R * C {
        return Err(SpatialError::InvalidLength {
            expected: R * C,
            got: data.len(),
        });
    }
    let mut m = [[T::zero(); C]; R];
    for (row, chunk) in m.iter_mut().zip(data.chunks_exact(C)) {
        row.copy_from_slice(chunk);
    }
    Ok(m)
}

/// Convert an angle in the given unit to radians.
#[inline]
pub fn getunit<T: Scalar>(angle: T, unit: AngleUnit) -> T {
    match unit {
        AngleUnit::Rad => angle,
        AngleUnit::Deg => angle.to_radians(),
    }
}

/// Convert every angle of a vector in the given unit to radians.
#[inline]
pub fn getunit_vec<T: Scalar, const N: usize>(angles: &[T; N], unit: AngleUnit) -> [T; N] {
    angles.map(|a| getunit(a, unit))
}

/// Convert an angle in radians to the given unit.
#[inline]
pub fn fromunit<T: Scalar>(angle: T, unit: AngleUnit) -> T {
    match unit {
        AngleUnit::Rad => angle,
        AngleUnit::Deg => angle.to_degrees(),
    }
}

/// Check that an interpolation fraction lies in `[0, 1]`. NaN is rejected.
pub(crate) fn assert_fraction<T: Scalar>(s: T) -> Result<(), SpatialError> {
    if s >= T::zero() && s <= T::one() {
        Ok(())
    } else {
        Err(SpatialError::OutOfRange {
            name: "s",
            value: s.to_f64().unwrap_or(f64::NAN),
            range: "[0, 1]",
        })
    }
}
