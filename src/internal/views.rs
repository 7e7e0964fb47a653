use crate::internal::assign::{assign_from_matrix_engine, assign_from_matrix_list};
use crate::internal::error::Result;
use crate::internal::{Capabilities, Engine, EngineKind, MatrixEngine, MatrixEngineMut};
use core::ops::{Index, IndexMut};
use num_traits::{NumCast, ToPrimitive};

mod sealed {
    pub trait Sealed {}

    impl<E> Sealed for &E {}
    impl<E> Sealed for &mut E {}
}

/// A borrowed handle to the matrix engine a view is bound to.
///
/// Only shared and exclusive references implement it. A shared handle gives a read-only
/// view; an exclusive handle gives a view whose writes land in the referent.
pub trait Referent: sealed::Sealed {
    /// The matrix engine behind the handle.
    type Matrix: MatrixEngine;

    /// Capability profile a view over this handle reports.
    const CAPABILITIES: Capabilities;

    /// Shared access to the referent.
    fn engine(&self) -> &Self::Matrix;
}

/// A referent handle that allows writing through it.
pub trait ReferentMut: Referent<Matrix: MatrixEngineMut> {
    /// Exclusive access to the referent.
    fn engine_mut(&mut self) -> &mut Self::Matrix;
}

impl<E: MatrixEngine> Referent for &E {
    type Matrix = E;
    const CAPABILITIES: Capabilities = Capabilities::READABLE;

    fn engine(&self) -> &E {
        self
    }
}

impl<E: MatrixEngineMut> Referent for &mut E {
    type Matrix = E;
    // writes go through, but the view can never resize what it borrows
    const CAPABILITIES: Capabilities = Capabilities {
        resizable: false,
        ..E::CAPABILITIES
    };

    fn engine(&self) -> &E {
        self
    }
}

impl<E: MatrixEngineMut> ReferentMut for &mut E {
    fn engine_mut(&mut self) -> &mut E {
        self
    }
}

/// A non-owning view presenting a matrix with rows and columns swapped.
///
/// Element `(i, j)` of the view is element `(j, i)` of the referent; nothing is copied or
/// rearranged. A bound view is obtained from the owning matrix only
/// ([`FsMatrixEngine::transpose`](crate::FsMatrixEngine::transpose) and
/// [`FsMatrixEngine::transpose_mut`](crate::FsMatrixEngine::transpose_mut)), and the borrow
/// it holds keeps it from outliving that matrix.
///
/// A default-constructed view is unbound. Reading its shape or elements panics.
#[derive(Debug, Clone, Copy)]
pub struct TransposeEngine<R> {
    other: Option<R>,
}

impl<R> TransposeEngine<R> {
    pub(crate) fn bind(referent: R) -> Self {
        Self {
            other: Some(referent),
        }
    }

    /// `true` when the view is bound to a referent.
    #[must_use]
    pub fn is_bound(&self) -> bool {
        self.other.is_some()
    }

    /// Exchanges the referents of two views. Neither referent's elements are touched.
    pub fn swap(&mut self, other: &mut Self) {
        core::mem::swap(&mut self.other, &mut other.other);
    }
}

impl<R> Default for TransposeEngine<R> {
    fn default() -> Self {
        Self { other: None }
    }
}

impl<R: Referent> TransposeEngine<R> {
    fn referent(&self) -> &R::Matrix {
        self.other
            .as_ref()
            .expect("transpose view is not bound to a matrix")
            .engine()
    }
}

impl<R: ReferentMut> TransposeEngine<R>
where
    <R::Matrix as Engine>::Element: NumCast,
{
    /// Writes a matrix engine through the view.
    ///
    /// The source must have the transposed shape `(referent.columns(), referent.rows())`;
    /// source element `(i, j)` lands in referent element `(j, i)`.
    ///
    /// # Errors
    ///
    /// [`EngineError::SizeIncompatible`](crate::EngineError::SizeIncompatible) when the shapes
    /// differ, [`EngineError::ElementConversion`](crate::EngineError::ElementConversion) when a
    /// source element does not fit the referent's element type. The referent is unchanged then.
    ///
    /// # Panics
    ///
    /// Panics if the view is unbound.
    pub fn assign_from<S>(&mut self, src: &S) -> Result<()>
    where
        S: MatrixEngine,
        S::Element: ToPrimitive + Copy,
    {
        assign_from_matrix_engine(self, src)
    }

    /// Writes a nested literal list (one inner list per view row) through the view.
    ///
    /// # Errors
    ///
    /// [`EngineError::SizeIncompatible`](crate::EngineError::SizeIncompatible) unless the list
    /// has the transposed shape, [`EngineError::ElementConversion`](crate::EngineError::ElementConversion)
    /// when an entry does not fit the referent's element type. The referent is unchanged then.
    ///
    /// # Panics
    ///
    /// Panics if the view is unbound.
    pub fn assign_list<U, L>(&mut self, list: &[L]) -> Result<()>
    where
        U: ToPrimitive + Copy,
        L: AsRef<[U]>,
    {
        assign_from_matrix_list(self, list)
    }
}

impl<R: Referent> Engine for TransposeEngine<R> {
    type Element = <R::Matrix as Engine>::Element;
    const KIND: EngineKind = EngineKind::Matrix;
    const CAPABILITIES: Capabilities = R::CAPABILITIES;
}

impl<R: Referent> MatrixEngine for TransposeEngine<R> {
    const STATIC_SHAPE: Option<(usize, usize)> = match <R::Matrix as MatrixEngine>::STATIC_SHAPE {
        Some((rows, columns)) => Some((columns, rows)),
        None => None,
    };

    fn rows(&self) -> usize {
        self.referent().columns()
    }

    fn columns(&self) -> usize {
        self.referent().rows()
    }

    fn row_capacity(&self) -> usize {
        self.referent().column_capacity()
    }

    fn column_capacity(&self) -> usize {
        self.referent().row_capacity()
    }

    fn get(&self, i: usize, j: usize) -> &Self::Element {
        self.referent().get(j, i)
    }
}

impl<R: ReferentMut> MatrixEngineMut for TransposeEngine<R> {
    fn get_mut(&mut self, i: usize, j: usize) -> &mut Self::Element {
        self.other
            .as_mut()
            .expect("transpose view is not bound to a matrix")
            .engine_mut()
            .get_mut(j, i)
    }
}

impl<R: Referent> Index<(usize, usize)> for TransposeEngine<R> {
    type Output = <R::Matrix as Engine>::Element;
    fn index(&self, (i, j): (usize, usize)) -> &Self::Output {
        self.get(i, j)
    }
}

impl<R: ReferentMut> IndexMut<(usize, usize)> for TransposeEngine<R> {
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut Self::Output {
        self.get_mut(i, j)
    }
}
