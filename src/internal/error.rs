use core::fmt;
use thiserror::Error;

/// The logical extent of an engine or literal list taking part in an assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Extent {
    /// Number of vector elements.
    Vector(usize),
    /// `(rows, columns)` of a matrix.
    Matrix(usize, usize),
}

impl fmt::Display for Extent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Vector(n) => write!(f, "{n} elements"),
            Self::Matrix(r, c) => write!(f, "{r}x{c}"),
        }
    }
}

/// Where an element sits in the source of an assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Position {
    /// Index into a vector or flat list.
    Vector(usize),
    /// `(row, column)` in a matrix or nested list.
    Matrix(usize, usize),
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Vector(i) => write!(f, "element {i}"),
            Self::Matrix(i, j) => write!(f, "element ({i}, {j})"),
        }
    }
}

/// Errors reported by engine construction and assignment.
///
/// A failed operation never leaves the destination partially written.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineError {
    /// The source's size or shape does not match the destination's.
    #[error("size incompatibility: expected {expected}, got {got}")]
    SizeIncompatible {
        /// Extent the destination requires.
        expected: Extent,
        /// Extent the source actually has.
        got: Extent,
    },
    /// A source element has no value in the destination's element type: it is out of range,
    /// or NaN going into an integer type.
    #[error("{at} of the source is not representable in the destination element type")]
    ElementConversion {
        /// Source position of the first element that failed to convert.
        at: Position,
    },
}

/// Result alias used by every fallible engine operation.
pub type Result<T> = core::result::Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::string::ToString;

    #[test]
    fn vector_message() {
        let err = EngineError::SizeIncompatible {
            expected: Extent::Vector(3),
            got: Extent::Vector(2),
        };
        assert_eq!(
            err.to_string(),
            "size incompatibility: expected 3 elements, got 2 elements"
        );
    }

    #[test]
    fn matrix_message() {
        let err = EngineError::SizeIncompatible {
            expected: Extent::Matrix(3, 2),
            got: Extent::Matrix(2, 3),
        };
        assert_eq!(err.to_string(), "size incompatibility: expected 3x2, got 2x3");
    }

    #[test]
    fn conversion_messages() {
        let err = EngineError::ElementConversion {
            at: Position::Vector(1),
        };
        assert_eq!(
            err.to_string(),
            "element 1 of the source is not representable in the destination element type"
        );

        let err = EngineError::ElementConversion {
            at: Position::Matrix(2, 0),
        };
        assert_eq!(
            err.to_string(),
            "element (2, 0) of the source is not representable in the destination element type"
        );
    }
}
