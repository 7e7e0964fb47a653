pub mod array;
pub mod assign;
pub mod error;
pub mod matrix;
pub mod views;

use core::marker::PhantomData;

/// The kind of object an engine represents.
///
/// Every engine type has exactly one kind, declared through [`Engine::KIND`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EngineKind {
    /// A lone scalar operand, see [`ScalarEngine`].
    Scalar,
    /// A one-dimensional engine indexed by `i`.
    Vector,
    /// A two-dimensional engine indexed by `(i, j)`.
    Matrix,
}

impl EngineKind {
    /// Returns `true` for [`EngineKind::Scalar`].
    #[must_use]
    pub const fn is_scalar(self) -> bool {
        matches!(self, Self::Scalar)
    }

    /// Returns `true` for [`EngineKind::Vector`].
    #[must_use]
    pub const fn is_vector(self) -> bool {
        matches!(self, Self::Vector)
    }

    /// Returns `true` for [`EngineKind::Matrix`].
    #[must_use]
    pub const fn is_matrix(self) -> bool {
        matches!(self, Self::Matrix)
    }

    const fn same_as(self, other: Self) -> bool {
        matches!(
            (self, other),
            (Self::Scalar, Self::Scalar) | (Self::Vector, Self::Vector) | (Self::Matrix, Self::Matrix)
        )
    }
}

/// Capability facts attached to an engine type.
///
/// The facts are independent of the [`EngineKind`]. Owning engines keep the chain
/// `resizable => initable => writable => readable`; a write-through view reports `initable`
/// because elements can be assigned through it, not because it can be rebound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[allow(clippy::struct_excessive_bools)]
pub struct Capabilities {
    /// Elements can be read.
    pub readable: bool,
    /// Elements can be written in place.
    pub writable: bool,
    /// The engine can be (re)initialized from another engine or a literal list.
    pub initable: bool,
    /// The extents can change at run time.
    pub resizable: bool,
}

impl Capabilities {
    /// No capabilities at all.
    pub const NONE: Self = Self {
        readable: false,
        writable: false,
        initable: false,
        resizable: false,
    };

    /// Read-only access.
    pub const READABLE: Self = Self {
        readable: true,
        ..Self::NONE
    };

    /// Read and in-place write access.
    pub const WRITABLE: Self = Self {
        writable: true,
        ..Self::READABLE
    };

    /// Read, write, and assignment from other engines or literal lists.
    pub const INITABLE: Self = Self {
        initable: true,
        ..Self::WRITABLE
    };

    /// Everything, including run-time resizing.
    pub const RESIZABLE: Self = Self {
        resizable: true,
        ..Self::INITABLE
    };

    /// Compares two profiles field by field in a `const` context.
    #[must_use]
    pub const fn same_as(self, other: Self) -> bool {
        self.readable == other.readable
            && self.writable == other.writable
            && self.initable == other.initable
            && self.resizable == other.resizable
    }
}

/// Compile-time classification every engine type declares.
///
/// Third-party engines participate in assignment and conversion by implementing this trait
/// together with [`VectorEngine`] or [`MatrixEngine`].
pub trait Engine {
    /// The element type stored or referenced by the engine.
    type Element;

    /// Scalar, vector, or matrix.
    const KIND: EngineKind;

    /// Readable / writable / initable / resizable facts.
    const CAPABILITIES: Capabilities;
}

/// Operations shared by every vector engine.
pub trait VectorEngine: Engine {
    /// The number of elements when it is fixed by the type, `None` when only known at run time.
    const STATIC_SIZE: Option<usize>;

    /// Number of elements.
    fn size(&self) -> usize;

    /// Number of elements the engine can hold without reallocating.
    fn capacity(&self) -> usize;

    /// Reads element `i`.
    ///
    /// The engine does not validate `i`; keeping it below [`VectorEngine::size`] is the
    /// caller's obligation.
    fn get(&self, i: usize) -> &Self::Element;
}

/// Vector engines whose elements can be written in place.
pub trait VectorEngineMut: VectorEngine {
    /// Mutable access to element `i`, with the same contract as [`VectorEngine::get`].
    fn get_mut(&mut self, i: usize) -> &mut Self::Element;
}

/// Operations shared by every matrix engine.
pub trait MatrixEngine: Engine {
    /// `(rows, columns)` when fixed by the type, `None` when only known at run time.
    const STATIC_SHAPE: Option<(usize, usize)>;

    /// Number of rows.
    fn rows(&self) -> usize;

    /// Number of columns.
    fn columns(&self) -> usize;

    /// Row capacity; equals [`MatrixEngine::rows`] unless the engine keeps slack.
    fn row_capacity(&self) -> usize {
        self.rows()
    }

    /// Column capacity; equals [`MatrixEngine::columns`] unless the engine keeps slack.
    fn column_capacity(&self) -> usize {
        self.columns()
    }

    /// The shape as a `(rows, columns)` pair.
    fn size(&self) -> (usize, usize) {
        (self.rows(), self.columns())
    }

    /// The capacity as a `(rows, columns)` pair.
    fn capacity(&self) -> (usize, usize) {
        (self.row_capacity(), self.column_capacity())
    }

    /// Reads element `(i, j)`. Indices are not validated by the engine.
    fn get(&self, i: usize, j: usize) -> &Self::Element;
}

/// Matrix engines whose elements can be written in place.
pub trait MatrixEngineMut: MatrixEngine {
    /// Mutable access to element `(i, j)`. Indices are not validated by the engine.
    fn get_mut(&mut self, i: usize, j: usize) -> &mut Self::Element;
}

/// Marks a scalar operand so generic code can tell it apart from vector and matrix engines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScalarEngine<T>(PhantomData<T>);

impl<T> Engine for ScalarEngine<T> {
    type Element = T;
    const KIND: EngineKind = EngineKind::Scalar;
    const CAPABILITIES: Capabilities = Capabilities::NONE;
}

/// `true` when `E` is classified as a scalar engine.
#[must_use]
pub const fn is_scalar_engine<E: Engine>() -> bool {
    E::KIND.is_scalar()
}

/// `true` when `E` is classified as a vector engine.
#[must_use]
pub const fn is_vector_engine<E: Engine>() -> bool {
    E::KIND.is_vector()
}

/// `true` when `E` is classified as a matrix engine.
#[must_use]
pub const fn is_matrix_engine<E: Engine>() -> bool {
    E::KIND.is_matrix()
}

/// `true` when elements of `E` can be read.
#[must_use]
pub const fn is_readable_engine<E: Engine>() -> bool {
    E::CAPABILITIES.readable
}

/// `true` when elements of `E` can be written in place.
#[must_use]
pub const fn is_writable_engine<E: Engine>() -> bool {
    E::CAPABILITIES.writable
}

/// `true` when `E` can be assigned from another engine or a literal list.
#[must_use]
pub const fn is_initable_engine<E: Engine>() -> bool {
    E::CAPABILITIES.initable
}

/// `true` when the extents of `E` can change at run time.
#[must_use]
pub const fn is_resizable_engine<E: Engine>() -> bool {
    E::CAPABILITIES.resizable
}

/// `true` when `A` and `B` have the same kind and capability profile.
///
/// Element compatibility is part of the signature: the call only compiles when elements of
/// `B` have a checked conversion into elements of `A`.
#[must_use]
pub const fn engines_are_similar<A, B>() -> bool
where
    A: Engine,
    B: Engine,
    A::Element: num_traits::NumCast,
    B::Element: num_traits::ToPrimitive,
{
    A::KIND.same_as(B::KIND) && A::CAPABILITIES.same_as(B::CAPABILITIES)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capability_chain() {
        assert!(Capabilities::RESIZABLE.initable);
        assert!(Capabilities::INITABLE.writable);
        assert!(Capabilities::WRITABLE.readable);
        assert!(!Capabilities::INITABLE.resizable);
        assert!(!Capabilities::READABLE.writable);
        assert_eq!(Capabilities::default(), Capabilities::NONE);
    }

    #[test]
    fn scalar_marker() {
        assert!(is_scalar_engine::<ScalarEngine<f64>>());
        assert!(!is_vector_engine::<ScalarEngine<f64>>());
        assert!(!is_matrix_engine::<ScalarEngine<f64>>());
        assert!(!is_readable_engine::<ScalarEngine<f64>>());
    }

    #[test]
    fn kind_predicates_are_exclusive() {
        for kind in [EngineKind::Scalar, EngineKind::Vector, EngineKind::Matrix] {
            let hits = [kind.is_scalar(), kind.is_vector(), kind.is_matrix()];
            assert_eq!(hits.iter().filter(|&&b| b).count(), 1);
        }
    }

    #[test]
    fn same_as_matches_eq() {
        assert!(Capabilities::WRITABLE.same_as(Capabilities::WRITABLE));
        assert!(!Capabilities::WRITABLE.same_as(Capabilities::INITABLE));
        assert!(EngineKind::Vector.same_as(EngineKind::Vector));
        assert!(!EngineKind::Vector.same_as(EngineKind::Matrix));
    }
}
