//! The two-phase assignment protocol shared by storage and view engines.
//!
//! Every entry point first validates the source extent against the destination, then checks
//! that every source element converts to the destination element type, and only then writes
//! each destination slot exactly once, in ascending index order (row-major for matrices). A
//! rejected assignment therefore leaves the destination untouched.
//!
//! Element conversion is checked ([`NumCast`]): an out-of-range value, or NaN going into an
//! integer type, is an error rather than a wrapped or saturated value. Floats going into
//! integers are truncated toward zero.
//!
//! Mismatches that are visible from the types alone (both extents fixed, or an engine declaring
//! a kind other than the one it is assigned as) are rejected while the program is compiled.
//!
//! ```compile_fail
//! use la_engines::assign::assign_from_vector_engine;
//! use la_engines::{Capabilities, Engine, EngineKind, FsVectorEngine, VectorEngine, VectorEngineMut};
//!
//! // exposes the vector surface but declares itself a matrix
//! struct Mislabelled([f64; 2]);
//!
//! impl Engine for Mislabelled {
//!     type Element = f64;
//!     const KIND: EngineKind = EngineKind::Matrix;
//!     const CAPABILITIES: Capabilities = Capabilities::INITABLE;
//! }
//!
//! impl VectorEngine for Mislabelled {
//!     const STATIC_SIZE: Option<usize> = Some(2);
//!     fn size(&self) -> usize { 2 }
//!     fn capacity(&self) -> usize { 2 }
//!     fn get(&self, i: usize) -> &f64 { &self.0[i] }
//! }
//!
//! impl VectorEngineMut for Mislabelled {
//!     fn get_mut(&mut self, i: usize) -> &mut f64 { &mut self.0[i] }
//! }
//!
//! let mut dst = Mislabelled([0.0; 2]);
//! let _ = assign_from_vector_engine(&mut dst, &FsVectorEngine::from_array([1.0, 2.0]));
//! ```

use crate::internal::error::{EngineError, Extent, Position, Result};
use crate::internal::{MatrixEngine, MatrixEngineMut, VectorEngine, VectorEngineMut};
use num_traits::{NumCast, ToPrimitive};

/// `false` only when both sizes are known statically and differ.
#[must_use]
pub const fn static_sizes_agree(dst: Option<usize>, src: Option<usize>) -> bool {
    match (dst, src) {
        (Some(d), Some(s)) => d == s,
        _ => true,
    }
}

/// `false` only when both shapes are known statically and differ.
#[must_use]
pub const fn static_shapes_agree(dst: Option<(usize, usize)>, src: Option<(usize, usize)>) -> bool {
    match (dst, src) {
        (Some((dr, dc)), Some((sr, sc))) => dr == sr && dc == sc,
        _ => true,
    }
}

/// Checks a source vector size against the size the destination requires.
///
/// # Errors
///
/// [`EngineError::SizeIncompatible`] when the sizes differ.
pub fn check_source_size(got: usize, expected: usize) -> Result<()> {
    if got == expected {
        Ok(())
    } else {
        Err(EngineError::SizeIncompatible {
            expected: Extent::Vector(expected),
            got: Extent::Vector(got),
        })
    }
}

/// Checks a source matrix shape against the shape the destination requires.
///
/// # Errors
///
/// [`EngineError::SizeIncompatible`] when the shapes differ.
pub fn check_source_shape(got: (usize, usize), expected: (usize, usize)) -> Result<()> {
    if got == expected {
        Ok(())
    } else {
        Err(EngineError::SizeIncompatible {
            expected: Extent::Matrix(expected.0, expected.1),
            got: Extent::Matrix(got.0, got.1),
        })
    }
}

/// Checks that a nested literal list is exactly `expected.0` rows of `expected.1` entries.
///
/// A ragged list is reported with the row count and the length of the first offending row.
///
/// # Errors
///
/// [`EngineError::SizeIncompatible`] on any row-count or row-length mismatch.
pub fn check_source_rows<U, L>(list: &[L], expected: (usize, usize)) -> Result<()>
where
    L: AsRef<[U]>,
{
    let (rows, columns) = expected;
    if list.len() != rows {
        let first = list.first().map_or(0, |row| row.as_ref().len());
        return check_source_shape((list.len(), first), expected);
    }
    match list.iter().find(|row| row.as_ref().len() != columns) {
        Some(row) => check_source_shape((rows, row.as_ref().len()), expected),
        None => Ok(()),
    }
}

/// Converts one source element with [`NumCast`], reporting `at` when it has no value in `T`.
///
/// # Errors
///
/// [`EngineError::ElementConversion`] when the value is out of range for `T`, or NaN going into
/// an integer type.
pub fn convert_element<T, U>(value: U, at: Position) -> Result<T>
where
    T: NumCast,
    U: ToPrimitive,
{
    <T as NumCast>::from(value).ok_or(EngineError::ElementConversion { at })
}

/// Assigns a vector engine into a writable vector engine, converting each element.
///
/// # Errors
///
/// [`EngineError::SizeIncompatible`] when the run-time sizes differ, and
/// [`EngineError::ElementConversion`] when a source element does not fit the destination's
/// element type. Nothing is written then.
pub fn assign_from_vector_engine<D, S>(dst: &mut D, src: &S) -> Result<()>
where
    D: VectorEngineMut,
    S: VectorEngine,
    D::Element: NumCast,
    S::Element: ToPrimitive + Copy,
{
    const {
        assert!(S::KIND.is_vector(), "source is not classified as a vector engine");
        assert!(D::KIND.is_vector(), "destination is not classified as a vector engine");
        assert!(D::CAPABILITIES.writable, "destination is not writable");
        assert!(
            static_sizes_agree(D::STATIC_SIZE, S::STATIC_SIZE),
            "vector engines have different static sizes"
        );
    }

    let n = dst.size();
    check_source_size(src.size(), n)?;
    for i in 0..n {
        convert_element::<D::Element, _>(*src.get(i), Position::Vector(i))?;
    }

    for i in 0..n {
        *dst.get_mut(i) = convert_element(*src.get(i), Position::Vector(i))?;
    }
    Ok(())
}

/// Assigns a flat literal list into a writable vector engine, converting each element.
///
/// # Errors
///
/// [`EngineError::SizeIncompatible`] unless `list.len()` equals the destination size, and
/// [`EngineError::ElementConversion`] when an entry does not fit the destination's element
/// type. Nothing is written then.
pub fn assign_from_vector_list<D, U>(dst: &mut D, list: &[U]) -> Result<()>
where
    D: VectorEngineMut,
    D::Element: NumCast,
    U: ToPrimitive + Copy,
{
    const {
        assert!(D::KIND.is_vector(), "destination is not classified as a vector engine");
        assert!(D::CAPABILITIES.writable, "destination is not writable");
    }

    check_source_size(list.len(), dst.size())?;
    for (i, &value) in list.iter().enumerate() {
        convert_element::<D::Element, _>(value, Position::Vector(i))?;
    }

    for (i, &value) in list.iter().enumerate() {
        *dst.get_mut(i) = convert_element(value, Position::Vector(i))?;
    }
    Ok(())
}

/// Assigns a matrix engine into a writable matrix engine, converting each element.
///
/// # Errors
///
/// [`EngineError::SizeIncompatible`] when the run-time shapes differ, and
/// [`EngineError::ElementConversion`] when a source element does not fit the destination's
/// element type. Nothing is written then.
pub fn assign_from_matrix_engine<D, S>(dst: &mut D, src: &S) -> Result<()>
where
    D: MatrixEngineMut,
    S: MatrixEngine,
    D::Element: NumCast,
    S::Element: ToPrimitive + Copy,
{
    const {
        assert!(S::KIND.is_matrix(), "source is not classified as a matrix engine");
        assert!(D::KIND.is_matrix(), "destination is not classified as a matrix engine");
        assert!(D::CAPABILITIES.writable, "destination is not writable");
        assert!(
            static_shapes_agree(D::STATIC_SHAPE, S::STATIC_SHAPE),
            "matrix engines have different static shapes"
        );
    }

    let (rows, columns) = dst.size();
    check_source_shape(src.size(), (rows, columns))?;
    for i in 0..rows {
        for j in 0..columns {
            convert_element::<D::Element, _>(*src.get(i, j), Position::Matrix(i, j))?;
        }
    }

    for i in 0..rows {
        for j in 0..columns {
            *dst.get_mut(i, j) = convert_element(*src.get(i, j), Position::Matrix(i, j))?;
        }
    }
    Ok(())
}

/// Assigns a nested literal list (one inner list per row) into a writable matrix engine.
///
/// # Errors
///
/// [`EngineError::SizeIncompatible`] unless the list is exactly the destination's shape, and
/// [`EngineError::ElementConversion`] when an entry does not fit the destination's element
/// type. Nothing is written then.
pub fn assign_from_matrix_list<D, U, L>(dst: &mut D, list: &[L]) -> Result<()>
where
    D: MatrixEngineMut,
    D::Element: NumCast,
    U: ToPrimitive + Copy,
    L: AsRef<[U]>,
{
    const {
        assert!(D::KIND.is_matrix(), "destination is not classified as a matrix engine");
        assert!(D::CAPABILITIES.writable, "destination is not writable");
    }

    check_source_rows::<U, L>(list, dst.size())?;
    for (i, row) in list.iter().enumerate() {
        for (j, &value) in row.as_ref().iter().enumerate() {
            convert_element::<D::Element, _>(value, Position::Matrix(i, j))?;
        }
    }

    for (i, row) in list.iter().enumerate() {
        for (j, &value) in row.as_ref().iter().enumerate() {
            *dst.get_mut(i, j) = convert_element(value, Position::Matrix(i, j))?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_agreement() {
        assert!(static_sizes_agree(Some(3), Some(3)));
        assert!(!static_sizes_agree(Some(3), Some(2)));
        assert!(static_sizes_agree(Some(3), None));
        assert!(static_sizes_agree(None, None));
        assert!(static_shapes_agree(Some((2, 3)), Some((2, 3))));
        assert!(!static_shapes_agree(Some((2, 3)), Some((3, 2))));
        assert!(static_shapes_agree(None, Some((3, 2))));
    }

    #[test]
    fn size_checks() {
        assert_eq!(check_source_size(4, 4), Ok(()));
        assert_eq!(
            check_source_size(2, 3),
            Err(EngineError::SizeIncompatible {
                expected: Extent::Vector(3),
                got: Extent::Vector(2),
            })
        );
        assert_eq!(
            check_source_shape((2, 3), (3, 2)),
            Err(EngineError::SizeIncompatible {
                expected: Extent::Matrix(3, 2),
                got: Extent::Matrix(2, 3),
            })
        );
    }

    #[test]
    fn ragged_rows() {
        let ok: [[i32; 2]; 3] = [[1, 2], [3, 4], [5, 6]];
        assert_eq!(check_source_rows::<i32, _>(&ok, (3, 2)), Ok(()));

        let ragged: [&[i32]; 3] = [&[1, 2], &[3], &[5, 6]];
        assert_eq!(
            check_source_rows::<i32, _>(&ragged, (3, 2)),
            Err(EngineError::SizeIncompatible {
                expected: Extent::Matrix(3, 2),
                got: Extent::Matrix(3, 1),
            })
        );

        let short: [[i32; 2]; 2] = [[1, 2], [3, 4]];
        assert_eq!(
            check_source_rows::<i32, _>(&short, (3, 2)),
            Err(EngineError::SizeIncompatible {
                expected: Extent::Matrix(3, 2),
                got: Extent::Matrix(2, 2),
            })
        );

        let empty: [[i32; 2]; 0] = [];
        assert_eq!(
            check_source_rows::<i32, _>(&empty, (1, 2)),
            Err(EngineError::SizeIncompatible {
                expected: Extent::Matrix(1, 2),
                got: Extent::Matrix(0, 0),
            })
        );
    }

    #[test]
    fn checked_element_conversion() {
        assert_eq!(convert_element::<i32, _>(2.9_f64, Position::Vector(0)), Ok(2));
        assert_eq!(convert_element::<i32, _>(-1.5_f64, Position::Vector(0)), Ok(-1));
        assert_eq!(convert_element::<u8, _>(255_i64, Position::Vector(0)), Ok(255));
        assert_eq!(
            convert_element::<i32, _>(1.0e10_f64, Position::Vector(3)),
            Err(EngineError::ElementConversion {
                at: Position::Vector(3),
            })
        );
        assert_eq!(
            convert_element::<i32, _>(f64::NAN, Position::Matrix(1, 2)),
            Err(EngineError::ElementConversion {
                at: Position::Matrix(1, 2),
            })
        );
        assert!(convert_element::<u16, _>(-1_i32, Position::Vector(0)).is_err());
        assert!(convert_element::<u16, _>(70_000_i32, Position::Vector(0)).is_err());
    }
}
